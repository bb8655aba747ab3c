//! Application context wiring.
//!
//! One process-wide context replaces ambient global state: it is built once
//! on load ([`AppContext::init`]) and torn down explicitly
//! ([`AppContext::teardown`]), which cancels pending deferred bot replies.
//! The persisted identity is left alone on teardown; only an explicit
//! logout clears it.

use crate::auth_service::AuthService;
use crate::chat_usecase::ChatUseCase;
use crate::directory_usecase::DirectoryUseCase;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use stemtree_core::chat::CannedResponder;
use stemtree_core::config::AppConfig;
use stemtree_core::error::{Result, StemtreeError};
use stemtree_infrastructure::paths::StemtreePaths;
use stemtree_infrastructure::{
    JsonDirectoryRepository, JsonIdentityRepository, JsonSessionRepository, JsonStore,
};

/// Process-wide application context shared with the UI layer.
pub struct AppContext {
    pub auth: Arc<AuthService>,
    pub chat: Arc<ChatUseCase>,
    pub directory: Arc<DirectoryUseCase>,
}

impl AppContext {
    /// Builds the full service graph from configuration.
    ///
    /// The storage root is `config.storage_dir` when set, otherwise the
    /// platform data directory. Rehydrates the identity from storage as
    /// part of construction.
    pub async fn init(config: &AppConfig) -> Result<Self> {
        let store_dir = match &config.storage_dir {
            Some(dir) => PathBuf::from(dir),
            None => StemtreePaths::store_dir()
                .map_err(|e| StemtreeError::config(format!("Cannot resolve store dir: {}", e)))?,
        };
        let store = JsonStore::new(store_dir);

        let identity_repository = Arc::new(JsonIdentityRepository::new(store.clone()));
        let session_repository = Arc::new(JsonSessionRepository::new(store.clone()));
        let directory_repository = Arc::new(JsonDirectoryRepository::new(store));

        let responder = Arc::new(CannedResponder::new(
            config.canned_replies.clone(),
            config.source_document.clone(),
        ));

        let auth = Arc::new(
            AuthService::new(
                identity_repository,
                Duration::from_millis(config.login_delay_ms),
            )
            .await?,
        );
        let chat = Arc::new(ChatUseCase::new(
            session_repository,
            directory_repository.clone(),
            responder,
            Duration::from_millis(config.reply_delay_ms),
        ));
        let directory = Arc::new(DirectoryUseCase::new(directory_repository));

        Ok(Self {
            auth,
            chat,
            directory,
        })
    }

    /// Tears the context down: cancels pending bot replies.
    ///
    /// The persisted identity is intentionally untouched so a restart
    /// rehydrates the logged-in state.
    pub fn teardown(&self) {
        self.chat.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_with_storage_override() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            login_delay_ms: 1,
            reply_delay_ms: 1,
            storage_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..AppConfig::default()
        };

        let app = AppContext::init(&config).await.unwrap();
        assert!(app.auth.current_identity().await.is_none());
        assert!(app.chat.list_sessions().await.unwrap().is_empty());
        app.teardown();
    }
}
