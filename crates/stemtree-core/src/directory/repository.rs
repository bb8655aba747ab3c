//! Directory repository trait.
//!
//! Defines the interface for persisting the dashboard's flat collections.

use super::model::{ActivityLogEntry, Document, PlatformSettings, UserSettings};
use crate::error::Result;
use crate::identity::Identity;
use async_trait::async_trait;

/// Which dashboard's user table a list belongs to.
///
/// The admin and superadmin dashboards keep independent user lists under
/// separate storage keys, mirroring the browser client's persisted layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserScope {
    /// Students managed by a center admin.
    Admin,
    /// Admins managed by the platform superadmin.
    Superadmin,
}

/// An abstract repository for the management dashboard collections.
///
/// Every collection is read and written wholesale; there are no
/// partial-update operations. Implementations substitute the seed/default
/// value when a collection is absent or unparsable.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Loads the user table for the given scope.
    async fn load_users(&self, scope: UserScope) -> Result<Vec<Identity>>;

    /// Replaces the user table for the given scope.
    async fn replace_users(&self, scope: UserScope, users: &[Identity]) -> Result<()>;

    /// Loads the document list.
    async fn load_documents(&self) -> Result<Vec<Document>>;

    /// Replaces the document list.
    async fn replace_documents(&self, documents: &[Document]) -> Result<()>;

    /// Loads the activity log, newest first.
    async fn load_activity_log(&self) -> Result<Vec<ActivityLogEntry>>;

    /// Replaces the activity log.
    async fn replace_activity_log(&self, entries: &[ActivityLogEntry]) -> Result<()>;

    /// Loads the platform settings.
    async fn load_platform_settings(&self) -> Result<PlatformSettings>;

    /// Saves the platform settings.
    async fn save_platform_settings(&self, settings: &PlatformSettings) -> Result<()>;

    /// Loads the per-user settings.
    async fn load_user_settings(&self) -> Result<UserSettings>;

    /// Saves the per-user settings.
    async fn save_user_settings(&self, settings: &UserSettings) -> Result<()>;

    /// Loads the bookmarked message ID list.
    async fn load_bookmarks(&self) -> Result<Vec<String>>;

    /// Replaces the bookmarked message ID list.
    async fn save_bookmarks(&self, message_ids: &[String]) -> Result<()>;
}
