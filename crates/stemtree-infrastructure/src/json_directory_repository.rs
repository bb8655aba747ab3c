//! JSON-backed directory repository.
//!
//! Persists the dashboard's flat collections, seeding the user and document
//! tables on first load so an empty store matches what the dashboards
//! display out of the box.

use crate::json_store::{JsonStore, keys};
use async_trait::async_trait;
use stemtree_core::directory::model::{seed_admin_users, seed_documents, seed_superadmin_users};
use stemtree_core::directory::{
    ActivityLogEntry, DirectoryRepository, Document, PlatformSettings, UserScope, UserSettings,
};
use stemtree_core::error::Result;
use stemtree_core::identity::Identity;

fn users_key(scope: UserScope) -> &'static str {
    match scope {
        UserScope::Admin => keys::ADMIN_USERS,
        UserScope::Superadmin => keys::SUPERADMIN_USERS,
    }
}

fn users_seed(scope: UserScope) -> Vec<Identity> {
    match scope {
        UserScope::Admin => seed_admin_users(),
        UserScope::Superadmin => seed_superadmin_users(),
    }
}

/// Whole-list JSON implementation of [`DirectoryRepository`].
pub struct JsonDirectoryRepository {
    store: JsonStore,
}

impl JsonDirectoryRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DirectoryRepository for JsonDirectoryRepository {
    async fn load_users(&self, scope: UserScope) -> Result<Vec<Identity>> {
        self.store.read_or(users_key(scope), users_seed(scope))
    }

    async fn replace_users(&self, scope: UserScope, users: &[Identity]) -> Result<()> {
        self.store.write(users_key(scope), &users.to_vec())
    }

    async fn load_documents(&self) -> Result<Vec<Document>> {
        self.store.read_or(keys::ADMIN_DOCUMENTS, seed_documents())
    }

    async fn replace_documents(&self, documents: &[Document]) -> Result<()> {
        self.store.write(keys::ADMIN_DOCUMENTS, &documents.to_vec())
    }

    async fn load_activity_log(&self) -> Result<Vec<ActivityLogEntry>> {
        self.store.read_or(keys::ACTIVITY_LOG, Vec::new())
    }

    async fn replace_activity_log(&self, entries: &[ActivityLogEntry]) -> Result<()> {
        self.store.write(keys::ACTIVITY_LOG, &entries.to_vec())
    }

    async fn load_platform_settings(&self) -> Result<PlatformSettings> {
        self.store
            .read_or(keys::PLATFORM_SETTINGS, PlatformSettings::default())
    }

    async fn save_platform_settings(&self, settings: &PlatformSettings) -> Result<()> {
        self.store.write(keys::PLATFORM_SETTINGS, settings)
    }

    async fn load_user_settings(&self) -> Result<UserSettings> {
        self.store.read_or(keys::USER_SETTINGS, UserSettings::default())
    }

    async fn save_user_settings(&self, settings: &UserSettings) -> Result<()> {
        self.store.write(keys::USER_SETTINGS, settings)
    }

    async fn load_bookmarks(&self) -> Result<Vec<String>> {
        self.store.read_or(keys::BOOKMARKED_MESSAGES, Vec::new())
    }

    async fn save_bookmarks(&self, message_ids: &[String]) -> Result<()> {
        self.store.write(keys::BOOKMARKED_MESSAGES, &message_ids.to_vec())
    }
}
