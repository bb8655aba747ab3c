//! Unified path management for stemtree files.
//!
//! All configuration and persisted dashboard state live under the platform
//! config and data directories. This ensures consistency across all
//! platforms (Linux, macOS, Windows).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for stemtree.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/stemtree/          # Config directory
/// └── config.toml              # Application configuration
///
/// ~/.local/share/stemtree/     # Data directory
/// └── store/                   # Persisted key-value entries
///     ├── stemtree_user.json
///     ├── chat_sessions.json
///     └── ...
/// ```
pub struct StemtreePaths;

impl StemtreePaths {
    /// Returns the stemtree configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/stemtree/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("stemtree"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the stemtree data directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to data directory (e.g., `~/.local/share/stemtree/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("stemtree"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default directory for persisted key-value entries.
    pub fn store_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("store"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_dir_is_under_data_dir() {
        let data = StemtreePaths::data_dir().unwrap();
        let store = StemtreePaths::store_dir().unwrap();
        assert!(store.starts_with(&data));
        assert!(store.ends_with("store"));
    }

    #[test]
    fn test_config_file_name() {
        let file = StemtreePaths::config_file().unwrap();
        assert_eq!(file.file_name().unwrap(), "config.toml");
    }
}
