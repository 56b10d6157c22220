//! Store configuration loader for Lancet.
//!
//! Reads a TOML file and deserializes it into [`LanceStoreConfig`]. Falls
//! back to the default store under the data directory (`~/.lancet/` in
//! production) when the file is missing or malformed.

use std::path::{Path, PathBuf};

use lancet_types::config::LanceStoreConfig;

/// Root directory for Lancet's local state: `~/.lancet`.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".lancet")
}

/// Config pointing at `~/.lancet/vectors` with all other fields defaulted.
pub fn default_store_config() -> LanceStoreConfig {
    LanceStoreConfig::new(default_data_dir().join("vectors").display().to_string())
}

/// Load store configuration from a TOML file.
///
/// - If the file does not exist, returns [`default_store_config()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_store_config(config_path: &Path) -> LanceStoreConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", config_path.display());
            return default_store_config();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return default_store_config();
        }
    };

    match toml::from_str::<LanceStoreConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            default_store_config()
        }
    }
}
