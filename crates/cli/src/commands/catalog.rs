//! Print the persisted catalog.

use tracing::info;

use marchand_core::CategoryFilter;
use marchand_storefront::catalog::{CatalogRepository, FileSeed};
use marchand_storefront::config::ShopConfig;
use marchand_storefront::store::JsonFileStore;

/// Show the catalog, optionally restricted to one category.
///
/// An empty store is seeded on the fly, matching the storefront's startup
/// behavior.
///
/// # Errors
///
/// Returns an error if configuration loading fails.
pub async fn run(category: Option<i32>) -> Result<(), Box<dyn std::error::Error>> {
    let config = ShopConfig::from_env()?;

    let store = JsonFileStore::open(&config.store_file);
    let seed = FileSeed::new(&config.seed_file);
    let repository = CatalogRepository::open(store, &seed).await;

    let filter = CategoryFilter::from_raw(category.unwrap_or(0));
    let products = repository.filter_by_category(filter);

    info!("{} product(s)", products.len());
    for product in &products {
        info!(
            "  [{}] {} - €{:.2} ({})",
            product.id,
            product.name,
            product.price,
            repository.category_name(product.category_id)
        );
    }

    Ok(())
}
