//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Slot key holding the whole movie collection.
pub const DEFAULT_COLLECTION_KEY: &str = "cinelog_movies";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CINELOG_DATA_DIR";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the storage slots.
    pub data_dir: PathBuf,
    /// Slot key for the movie collection.
    pub collection_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: std::env::var_os(DATA_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(default_data_dir),
            collection_key: DEFAULT_COLLECTION_KEY.to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content. Missing keys take defaults.
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cinelog")
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("cinelog"))
        .unwrap_or_else(config_dir)
}

/// Load configuration from the default location.
pub fn load_config() -> Config {
    load_config_from(&config_dir().join("config.toml"))
}

/// Load configuration from a file, falling back to defaults when the file
/// is missing or malformed.
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match Config::from_toml(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring malformed config {}: {}", path.display(), e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config {}: {}", path.display(), e);
            Config::default()
        }
    }
}
