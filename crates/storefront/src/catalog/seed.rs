//! Seed data source.
//!
//! The catalog is seeded exactly once, when the persisted store is empty.
//! A [`SeedSource`] is the one asynchronous boundary in the coordinator:
//! the shop view suspends until the fetch resolves or soft-fails.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use marchand_core::{Category, Product};

/// The categories and products delivered by a seed source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedCatalog {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

/// Errors fetching seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed data could not be read.
    #[error("failed to read seed data: {0}")]
    Io(#[from] std::io::Error),

    /// The seed data is not a valid catalog document.
    #[error("seed data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One-shot asynchronous source of seed categories and products.
pub trait SeedSource {
    /// Fetch the seed catalog.
    fn fetch(&self) -> impl Future<Output = Result<SeedCatalog, SeedError>>;
}

/// Seed source reading a JSON catalog document from a file.
#[derive(Debug, Clone)]
pub struct FileSeed {
    path: PathBuf,
}

impl FileSeed {
    /// Create a seed source for the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeedSource for FileSeed {
    async fn fetch(&self) -> Result<SeedCatalog, SeedError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Fixed in-memory seed, for tests and demo sessions.
#[derive(Debug, Clone, Default)]
pub struct StaticSeed(pub SeedCatalog);

impl SeedSource for StaticSeed {
    async fn fetch(&self) -> Result<SeedCatalog, SeedError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_seed_missing_file() {
        let seed = FileSeed::new("/nonexistent/marchand-seed.json");
        assert!(matches!(seed.fetch().await, Err(SeedError::Io(_))));
    }

    #[tokio::test]
    async fn test_file_seed_parses_catalog() {
        let path = std::env::temp_dir().join(format!("marchand-seed-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"{
                "categories": [{"id": 1, "name": "Hats"}],
                "products": [
                    {"id": 1, "name": "Cap", "price": "10.00", "image_url": "/img/cap.png", "category_id": 1}
                ]
            }"#,
        )
        .unwrap();

        let catalog = FileSeed::new(&path).fetch().await.unwrap();
        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(catalog.products.len(), 1);
        assert_eq!(catalog.products.first().unwrap().name, "Cap");

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_file_seed_malformed_document() {
        let path = std::env::temp_dir().join(format!("marchand-seed-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "{").unwrap();

        let seed = FileSeed::new(&path);
        assert!(matches!(seed.fetch().await, Err(SeedError::Malformed(_))));

        std::fs::remove_file(&path).unwrap();
    }
}
