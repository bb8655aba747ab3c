pub mod chat;
pub mod config;
pub mod directory;
pub mod error;
pub mod identity;
pub mod routing;

// Re-export common error type
pub use error::{Result, StemtreeError};
