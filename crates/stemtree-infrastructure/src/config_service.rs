//! Configuration loading.
//!
//! Reads `config.toml` from the platform config directory. The file is
//! optional: a missing or empty file yields the default configuration, and
//! only a present-but-invalid file is an error.

use crate::paths::StemtreePaths;
use std::fs;
use std::path::Path;
use stemtree_core::config::AppConfig;
use stemtree_core::error::{Result, StemtreeError};

/// Loads the application configuration from the default location
/// (`~/.config/stemtree/config.toml`).
pub fn load_config() -> Result<AppConfig> {
    let config_path = StemtreePaths::config_file()
        .map_err(|e| StemtreeError::config(format!("Cannot resolve config path: {}", e)))?;
    load_config_from(&config_path)
}

/// Loads the application configuration from an explicit path.
///
/// # Returns
///
/// - `Ok(AppConfig)`: Parsed configuration, or the default when the file
///   does not exist or is empty.
/// - `Err(_)`: The file exists but cannot be read or parsed.
pub fn load_config_from(config_path: &Path) -> Result<AppConfig> {
    if !config_path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(config_path).map_err(|e| {
        StemtreeError::config(format!(
            "Failed to read config file at {:?}: {}",
            config_path, e
        ))
    })?;

    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }

    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}
