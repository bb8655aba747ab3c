//! Application configuration structs.
//!
//! The configuration file is optional; every field has a default so an
//! absent or empty `config.toml` yields a fully working setup. Loading is
//! handled by the infrastructure crate.

use serde::{Deserialize, Serialize};

fn default_login_delay_ms() -> u64 {
    1000
}

fn default_reply_delay_ms() -> u64 {
    2000
}

/// Top-level application configuration, read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Artificial delay applied to the mock login, in milliseconds.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Artificial delay before the mock bot reply, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Canned replies for the mock responder. Empty means the built-in
    /// default list.
    #[serde(default)]
    pub canned_replies: Vec<String>,

    /// Source-document label attached to bot replies, if any.
    #[serde(default)]
    pub source_document: Option<String>,

    /// Overrides the storage root directory. Defaults to the platform data
    /// directory when unset.
    #[serde(default)]
    pub storage_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
            reply_delay_ms: default_reply_delay_ms(),
            canned_replies: Vec::new(),
            source_document: None,
            storage_dir: None,
        }
    }
}
