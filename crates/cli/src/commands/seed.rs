//! Initialize the persisted catalog store from seed data.
//!
//! This command reads the JSON seed catalog, validates it by parsing, and
//! writes both collections into the store file the storefront reads at
//! startup.

use tracing::info;

use marchand_storefront::catalog::{FileSeed, SeedSource};
use marchand_storefront::config::ShopConfig;
use marchand_storefront::store::{CATEGORIES_KEY, CatalogStore, JsonFileStore, PRODUCTS_KEY};

/// Seed the catalog store.
///
/// # Arguments
///
/// * `force` - If true, overwrite an already-seeded store
///
/// # Errors
///
/// Returns an error if the store is already seeded (without `--force`), or
/// if the seed file cannot be read or parsed.
pub async fn run(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = ShopConfig::from_env()?;

    let mut store = JsonFileStore::open(&config.store_file);
    if !force && store.get(PRODUCTS_KEY).is_some() {
        return Err(format!(
            "store {} is already seeded (use --force to overwrite)",
            config.store_file.display()
        )
        .into());
    }

    info!(path = %config.seed_file.display(), "Loading seed catalog");
    let catalog = FileSeed::new(&config.seed_file).fetch().await?;

    store.set(PRODUCTS_KEY, &serde_json::to_string(&catalog.products)?);
    store.set(CATEGORIES_KEY, &serde_json::to_string(&catalog.categories)?);

    info!("Seeding complete!");
    info!("  Categories written: {}", catalog.categories.len());
    info!("  Products written: {}", catalog.products.len());
    info!("  Store file: {}", config.store_file.display());

    Ok(())
}
