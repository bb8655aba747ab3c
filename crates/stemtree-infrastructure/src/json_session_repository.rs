//! JSON-backed chat session repository.
//!
//! The whole session list is stored under one key and replaced on every
//! write, matching the storage contract of the browser client. The active
//! session reference lives under its own key.

use crate::json_store::{JsonStore, keys};
use async_trait::async_trait;
use stemtree_core::chat::{ChatSession, SessionRepository};
use stemtree_core::error::Result;
use tokio::sync::Mutex;

/// Whole-list JSON implementation of [`SessionRepository`].
pub struct JsonSessionRepository {
    store: JsonStore,
    /// Serializes read-modify-write cycles on the session list.
    write_guard: Mutex<()>,
}

impl JsonSessionRepository {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            write_guard: Mutex::new(()),
        }
    }

    fn load_list(&self) -> Result<Vec<ChatSession>> {
        self.store.read_or(keys::CHAT_SESSIONS, Vec::new())
    }
}

#[async_trait]
impl SessionRepository for JsonSessionRepository {
    async fn find_by_id(&self, session_id: &str) -> Result<Option<ChatSession>> {
        Ok(self.load_list()?.into_iter().find(|s| s.id == session_id))
    }

    async fn save(&self, session: &ChatSession) -> Result<()> {
        let _guard = self.write_guard.lock().await;
        let mut sessions = self.load_list()?;
        match sessions.iter_mut().find(|s| s.id == session.id) {
            Some(existing) => *existing = session.clone(),
            // New sessions go to the front, like the sidebar list
            None => sessions.insert(0, session.clone()),
        }
        self.store.write(keys::CHAT_SESSIONS, &sessions)
    }

    async fn delete(&self, session_id: &str) -> Result<()> {
        let _guard = self.write_guard.lock().await;
        let mut sessions = self.load_list()?;
        sessions.retain(|s| s.id != session_id);
        self.store.write(keys::CHAT_SESSIONS, &sessions)
    }

    async fn list_all(&self) -> Result<Vec<ChatSession>> {
        self.load_list()
    }

    async fn get_active_session_id(&self) -> Result<Option<String>> {
        self.store.read_opt(keys::ACTIVE_SESSION)
    }

    async fn set_active_session_id(&self, session_id: &str) -> Result<()> {
        self.store.write(keys::ACTIVE_SESSION, &session_id.to_string())
    }

    async fn clear_active_session_id(&self) -> Result<()> {
        self.store.remove(keys::ACTIVE_SESSION)
    }
}
