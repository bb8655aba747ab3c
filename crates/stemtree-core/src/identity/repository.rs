//! Identity repository trait.
//!
//! Defines the interface for persisting the authenticated identity blob.

use super::model::Identity;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for the single persisted identity.
///
/// This trait defines the contract for persisting and retrieving the
/// authenticated identity, decoupling the auth service from the specific
/// storage mechanism (e.g., JSON files, browser storage, remote API).
///
/// There is at most one identity at a time: `save` overwrites the previous
/// blob wholesale and `clear` removes it.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Loads the persisted identity, if any.
    ///
    /// A corrupted blob is treated as absent, not as an error.
    async fn load(&self) -> Result<Option<Identity>>;

    /// Persists the identity, overwriting any previous blob.
    async fn save(&self, identity: &Identity) -> Result<()>;

    /// Removes the persisted identity (no-op when absent).
    async fn clear(&self) -> Result<()>;
}
