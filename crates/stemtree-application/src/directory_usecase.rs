//! Directory use case.
//!
//! Management-dashboard operations over the flat collections: user tables,
//! documents, the activity log, and both settings panels. Everything is
//! whole-list replace-on-write; no partial updates, no referential
//! integrity across collections.

use std::sync::Arc;
use stemtree_core::directory::{
    ActivityKind, ActivityLogEntry, DirectoryRepository, Document, PlatformSettings, UserScope,
    UserSettings,
};
use stemtree_core::error::Result;
use stemtree_core::identity::Identity;

/// Use case for the admin and superadmin dashboards.
pub struct DirectoryUseCase {
    directory_repository: Arc<dyn DirectoryRepository>,
}

impl DirectoryUseCase {
    pub fn new(directory_repository: Arc<dyn DirectoryRepository>) -> Self {
        Self {
            directory_repository,
        }
    }

    /// Loads the user table for a dashboard scope (seeded on first load).
    pub async fn users(&self, scope: UserScope) -> Result<Vec<Identity>> {
        self.directory_repository.load_users(scope).await
    }

    /// Replaces the user table for a dashboard scope.
    pub async fn replace_users(&self, scope: UserScope, users: &[Identity]) -> Result<()> {
        self.directory_repository.replace_users(scope, users).await
    }

    /// Loads the document list (seeded on first load).
    pub async fn documents(&self) -> Result<Vec<Document>> {
        self.directory_repository.load_documents().await
    }

    /// Replaces the document list.
    pub async fn replace_documents(&self, documents: &[Document]) -> Result<()> {
        self.directory_repository.replace_documents(documents).await
    }

    /// Loads the activity log, newest first.
    pub async fn activity_log(&self) -> Result<Vec<ActivityLogEntry>> {
        self.directory_repository.load_activity_log().await
    }

    /// Prepends one activity entry and persists the log.
    ///
    /// Appending is load + insert + replace, like every other collection
    /// write.
    pub async fn record_activity(
        &self,
        action: impl Into<String>,
        actor: impl Into<String>,
        description: impl Into<String>,
        kind: ActivityKind,
    ) -> Result<ActivityLogEntry> {
        let entry = ActivityLogEntry::record(action, actor, description, kind);
        let mut log = self.directory_repository.load_activity_log().await?;
        log.insert(0, entry.clone());
        self.directory_repository.replace_activity_log(&log).await?;
        Ok(entry)
    }

    /// Loads the platform settings.
    pub async fn platform_settings(&self) -> Result<PlatformSettings> {
        self.directory_repository.load_platform_settings().await
    }

    /// Saves the platform settings.
    pub async fn update_platform_settings(&self, settings: &PlatformSettings) -> Result<()> {
        self.directory_repository
            .save_platform_settings(settings)
            .await
    }

    /// Loads the per-user settings.
    pub async fn user_settings(&self) -> Result<UserSettings> {
        self.directory_repository.load_user_settings().await
    }

    /// Saves the per-user settings.
    pub async fn update_user_settings(&self, settings: &UserSettings) -> Result<()> {
        self.directory_repository.save_user_settings(settings).await
    }

    /// Loads the bookmarked message ID list.
    pub async fn bookmarked_messages(&self) -> Result<Vec<String>> {
        self.directory_repository.load_bookmarks().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stemtree_infrastructure::{JsonDirectoryRepository, JsonStore};
    use tempfile::TempDir;

    fn usecase(dir: &TempDir) -> DirectoryUseCase {
        DirectoryUseCase::new(Arc::new(JsonDirectoryRepository::new(JsonStore::new(
            dir.path(),
        ))))
    }

    #[tokio::test]
    async fn test_user_table_replace_round_trip() {
        let dir = TempDir::new().unwrap();
        let directory = usecase(&dir);

        let mut users = directory.users(UserScope::Superadmin).await.unwrap();
        assert_eq!(users.len(), 2);

        users[0].status = stemtree_core::identity::AccountStatus::Inactive;
        directory
            .replace_users(UserScope::Superadmin, &users)
            .await
            .unwrap();

        let reloaded = directory.users(UserScope::Superadmin).await.unwrap();
        assert_eq!(reloaded, users);
    }

    #[tokio::test]
    async fn test_record_activity_prepends() {
        let dir = TempDir::new().unwrap();
        let directory = usecase(&dir);

        directory
            .record_activity(
                "Document Uploaded",
                "admin@stemtree.com",
                "Uploaded Physics_Chapter_6.pdf",
                ActivityKind::Upload,
            )
            .await
            .unwrap();
        directory
            .record_activity(
                "User Created",
                "admin@stemtree.com",
                "Created new user: student@example.com",
                ActivityKind::Create,
            )
            .await
            .unwrap();

        let log = directory.activity_log().await.unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].kind, ActivityKind::Create);
        assert_eq!(log[1].kind, ActivityKind::Upload);
    }

    #[tokio::test]
    async fn test_platform_settings_update() {
        let dir = TempDir::new().unwrap();
        let directory = usecase(&dir);

        let mut settings = directory.platform_settings().await.unwrap();
        settings.max_file_size_mb = 100;
        directory.update_platform_settings(&settings).await.unwrap();
        assert_eq!(
            directory.platform_settings().await.unwrap().max_file_size_mb,
            100
        );
    }
}
