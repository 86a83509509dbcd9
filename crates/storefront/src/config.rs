//! Shop configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MARCHAND_STORE_FILE` - Path of the persisted catalog store
//!   (default: `marchand-store.json`)
//! - `MARCHAND_SEED_FILE` - Path of the JSON seed catalog used when the
//!   store is empty (default: `assets/data.json`)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shop application configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Path of the persisted catalog store.
    pub store_file: PathBuf,
    /// Path of the seed catalog document.
    pub seed_file: PathBuf,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            store_file: get_path_or_default("MARCHAND_STORE_FILE", "marchand-store.json")?,
            seed_file: get_path_or_default("MARCHAND_SEED_FILE", "assets/data.json")?,
        })
    }
}

/// Get an environment variable as a path, with a default value. An empty
/// value is rejected rather than silently producing a relative no-op path.
fn get_path_or_default(key: &str, default: &str) -> Result<PathBuf, ConfigError> {
    match std::env::var(key) {
        Ok(value) if value.is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        )),
        Ok(value) => Ok(PathBuf::from(value)),
        Err(_) => Ok(PathBuf::from(default)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variable_falls_back_to_default() {
        let path = get_path_or_default("MARCHAND_TEST_UNSET_VAR", "fallback.json").unwrap();
        assert_eq!(path, PathBuf::from("fallback.json"));
    }

    #[test]
    fn test_from_env_defaults() {
        let config = ShopConfig::from_env().unwrap();
        assert!(!config.store_file.as_os_str().is_empty());
        assert!(!config.seed_file.as_os_str().is_empty());
    }
}
