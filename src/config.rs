//! Configuration management - data directory, currency, and upload settings.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

const CONFIG_PATH_VAR: &str = "QUOTEPRO_CONFIG";
const DATA_DIR_VAR: &str = "QUOTEPRO_DATA_DIR";
const DEFAULT_CONFIG_PATH: &str = "quotepro.toml";

/// Application configuration, loaded from `quotepro.toml`.
#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the persisted key-value files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Currency code used until the user picks one
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Object-store settings for image uploads; uploads are unavailable when
    /// absent
    #[serde(default)]
    pub upload: Option<UploadConfig>,
}

/// Image object-store settings.
#[derive(Deserialize, Debug, Clone)]
pub struct UploadConfig {
    /// Base URL of the object store, e.g. `https://storage.example.com`
    pub endpoint: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            currency: default_currency(),
            upload: None,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data/quotepro")
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Parses a configuration file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    let app_config: AppConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path_ref:?}: {e}"),
    })?;
    Ok(app_config)
}

/// Loads the application configuration.
///
/// The config path comes from `QUOTEPRO_CONFIG` (default `quotepro.toml`);
/// a missing file yields the built-in defaults. `QUOTEPRO_DATA_DIR`
/// overrides the configured data directory either way.
///
/// # Errors
/// Returns an error if a config file exists but cannot be parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut config = if Path::new(&path).exists() {
        load_config(&path)?
    } else {
        tracing::debug!(path, "no config file found, using defaults");
        AppConfig::default()
    };

    if let Ok(data_dir) = env::var(DATA_DIR_VAR) {
        config.data_dir = PathBuf::from(data_dir);
    }

    Ok(config)
}
