//! Persisted catalog store.
//!
//! The durable copy of the catalog lives in a synchronous string key-value
//! store with whole-collection overwrite semantics: every write replaces the
//! full serialized collection under its key, there is no partial update and
//! no merge. The two catalog keys are written independently, so a crash
//! between the writes can leave categories and products from different
//! generations; accepted risk for this store shape.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Store key for the serialized product collection.
pub const PRODUCTS_KEY: &str = "shop_products";

/// Store key for the serialized category collection.
pub const CATEGORIES_KEY: &str = "shop_categories";

/// A synchronous string key-value store holding the persisted catalog.
///
/// Writes never fail from the caller's perspective: implementations that can
/// fail internally (file-backed stores) log the failure and keep serving the
/// in-memory copy, so a storage problem never takes the page down.
pub trait CatalogStore {
    /// Read the value under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// File-backed store: a single JSON object of key to value.
///
/// The whole file is read once at open and rewritten on every `set`. A
/// missing file opens as an empty store; an unreadable or malformed file is
/// logged and treated as empty.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading any existing entries.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path);
        Self { path, entries }
    }

    /// The file this store persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        let image = match serde_json::to_string_pretty(&self.entries) {
            Ok(image) => image,
            Err(e) => {
                tracing::error!(path = %self.path.display(), "failed to serialize store: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, image) {
            tracing::error!(path = %self.path.display(), "failed to write store: {e}");
        }
    }
}

fn load_entries(path: &Path) -> HashMap<String, String> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to read store, starting empty: {e}");
            return HashMap::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %path.display(), "malformed store file, starting empty: {e}");
            HashMap::new()
        }
    }
}

impl CatalogStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("marchand-store-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(PRODUCTS_KEY), None);

        store.set(PRODUCTS_KEY, "[]");
        assert_eq!(store.get(PRODUCTS_KEY), Some("[]".to_string()));

        store.set(PRODUCTS_KEY, "[1]");
        assert_eq!(store.get(PRODUCTS_KEY), Some("[1]".to_string()));
    }

    #[test]
    fn test_file_store_missing_file_opens_empty() {
        let store = JsonFileStore::open(temp_path());
        assert_eq!(store.get(PRODUCTS_KEY), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let path = temp_path();

        let mut store = JsonFileStore::open(&path);
        store.set(PRODUCTS_KEY, r#"[{"id":1}]"#);
        store.set(CATEGORIES_KEY, r#"[{"id":2}]"#);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get(PRODUCTS_KEY), Some(r#"[{"id":1}]"#.to_string()));
        assert_eq!(
            reopened.get(CATEGORIES_KEY),
            Some(r#"[{"id":2}]"#.to_string())
        );

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_malformed_file_opens_empty() {
        let path = temp_path();
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get(PRODUCTS_KEY), None);

        std::fs::remove_file(&path).unwrap();
    }
}
