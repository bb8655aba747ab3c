//! JSON-backed identity repository.

use crate::json_store::{JsonStore, keys};
use async_trait::async_trait;
use stemtree_core::error::Result;
use stemtree_core::identity::{Identity, IdentityRepository};

/// Persists the authenticated identity as a single store entry.
///
/// A corrupted blob rehydrates as "not logged in" rather than an error, so
/// a damaged store never locks the user out of the login screen.
pub struct JsonIdentityRepository {
    store: JsonStore,
}

impl JsonIdentityRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl IdentityRepository for JsonIdentityRepository {
    async fn load(&self) -> Result<Option<Identity>> {
        self.store.read_opt(keys::IDENTITY)
    }

    async fn save(&self, identity: &Identity) -> Result<()> {
        self.store.write(keys::IDENTITY, identity)
    }

    async fn clear(&self) -> Result<()> {
        self.store.remove(keys::IDENTITY)
    }
}
