//! Catalog repository.
//!
//! [`CatalogRepository`] owns the authoritative in-memory product and
//! category collections and is the single writer of catalog data to the
//! persisted store. Every mutation synchronously rewrites the full product
//! collection under its key.
//!
//! Lookups that serve the shop view (`category_name`,
//! `filter_by_category`) resolve against the *persisted* copy rather than
//! the in-memory one. Both copies converge because mutations write through,
//! and the store-backed read is the observed contract.

mod form;
mod seed;

pub use form::{ProductDraft, ProductForm, ValidationError};
pub use seed::{FileSeed, SeedCatalog, SeedError, SeedSource, StaticSeed};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use marchand_core::{Category, CategoryFilter, CategoryId, Product, ProductId};

use crate::store::{CATEGORIES_KEY, CatalogStore, PRODUCTS_KEY};

/// Errors from catalog mutations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The submitted form failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operation referenced a product id that no longer exists.
    #[error("no product with id {0}")]
    NotFound(ProductId),
}

/// Owns the catalog collections and mediates all reads and writes against
/// the persisted store.
#[derive(Debug)]
pub struct CatalogRepository<S: CatalogStore> {
    store: S,
    categories: Vec<Category>,
    products: Vec<Product>,
    /// High-water mark for product ids: seeded from `max(existing) + 1` at
    /// open and never decreased, so ids are not reused after deletion.
    next_product_id: i32,
}

impl<S: CatalogStore> CatalogRepository<S> {
    /// Open the catalog over `store`.
    ///
    /// An empty store is seeded from `seed` and both collections are written
    /// verbatim; a populated store is read back as-is (no re-fetch). A failed
    /// seed fetch or a corrupted store degrades to empty collections with a
    /// warning - an empty catalog is itself visible feedback, and the page
    /// must never crash over it.
    pub async fn open<D: SeedSource>(mut store: S, seed: &D) -> Self {
        let (categories, products) = if store.get(PRODUCTS_KEY).is_none() {
            let catalog = match seed.fetch().await {
                Ok(catalog) => catalog,
                Err(e) => {
                    tracing::warn!("seed fetch failed, starting with an empty catalog: {e}");
                    SeedCatalog::default()
                }
            };
            persist(&mut store, PRODUCTS_KEY, &catalog.products);
            persist(&mut store, CATEGORIES_KEY, &catalog.categories);
            (catalog.categories, catalog.products)
        } else {
            (
                read_persisted(&store, CATEGORIES_KEY),
                read_persisted(&store, PRODUCTS_KEY),
            )
        };

        let next_product_id = products.iter().map(|p| p.id.as_i32()).max().unwrap_or(0) + 1;

        Self {
            store,
            categories,
            products,
            next_product_id,
        }
    }

    /// The in-memory product collection, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The in-memory category collection.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Create a product from a submitted form.
    ///
    /// The new product gets the next monotonic id and the full product
    /// collection is rewritten to the store.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for a malformed form; the catalog and the
    /// id counter are left untouched.
    pub fn create(&mut self, form: &ProductForm) -> Result<Product, ValidationError> {
        let draft = form.validate()?;

        let product = Product {
            id: ProductId::new(self.next_product_id),
            name: draft.name,
            price: draft.price,
            image_url: draft.image_url,
            category_id: draft.category_id,
        };
        self.next_product_id += 1;

        self.products.push(product.clone());
        persist(&mut self.store, PRODUCTS_KEY, &self.products);
        Ok(product)
    }

    /// Replace the mutable fields of an existing product. The id is
    /// immutable, and the category is not re-checked against the category
    /// set on edit.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] for a malformed form and
    /// [`CatalogError::NotFound`] for a stale id.
    pub fn update(&mut self, id: ProductId, form: &ProductForm) -> Result<Product, CatalogError> {
        let draft = form.validate()?;

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        product.name = draft.name;
        product.price = draft.price;
        product.image_url = draft.image_url;
        product.category_id = draft.category_id;
        let updated = product.clone();

        persist(&mut self.store, PRODUCTS_KEY, &self.products);
        Ok(updated)
    }

    /// Remove a product from the catalog. Hard removal - cart lines holding
    /// the product keep their captured snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for a stale id.
    pub fn delete(&mut self, id: ProductId) -> Result<(), CatalogError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        self.products.remove(index);
        persist(&mut self.store, PRODUCTS_KEY, &self.products);
        Ok(())
    }

    /// Resolve a category name against the persisted category collection.
    /// Returns `"Unknown"` when the id is absent.
    #[must_use]
    pub fn category_name(&self, id: CategoryId) -> String {
        read_persisted::<Category, S>(&self.store, CATEGORIES_KEY)
            .into_iter()
            .find(|category| category.id == id)
            .map_or_else(|| "Unknown".to_string(), |category| category.name)
    }

    /// Filter the persisted product collection, preserving catalog order.
    #[must_use]
    pub fn filter_by_category(&self, filter: CategoryFilter) -> Vec<Product> {
        read_persisted::<Product, S>(&self.store, PRODUCTS_KEY)
            .into_iter()
            .filter(|product| filter.matches(product))
            .collect()
    }
}

/// Rewrite a full collection under its store key.
fn persist<S: CatalogStore>(store: &mut S, key: &str, collection: &impl Serialize) {
    match serde_json::to_string(collection) {
        Ok(raw) => store.set(key, &raw),
        Err(e) => tracing::error!(key, "failed to serialize catalog collection: {e}"),
    }
}

/// Read a full collection back out of the store. An absent key or a
/// corrupted value degrades to an empty collection.
fn read_persisted<T: DeserializeOwned, S: CatalogStore>(store: &S, key: &str) -> Vec<T> {
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };

    match serde_json::from_str(&raw) {
        Ok(collection) => collection,
        Err(e) => {
            tracing::warn!(key, "corrupted catalog collection, treating as empty: {e}");
            Vec::new()
        }
    }
}
