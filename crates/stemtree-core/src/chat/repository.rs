//! Session repository trait.
//!
//! Defines the interface for chat session persistence operations.

use super::model::ChatSession;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing chat session persistence.
///
/// This trait defines the contract for persisting and retrieving chat
/// sessions, decoupling the chat use case from the specific storage
/// mechanism (e.g., JSON files, browser storage, remote API).
///
/// The backing store keeps the whole session list as one value and replaces
/// it on every write; implementations do not need partial-update support.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Finds a session by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ChatSession))`: Session found
    /// - `Ok(None)`: Session not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, session_id: &str) -> Result<Option<ChatSession>>;

    /// Saves a session, inserting it at the front of the list when new and
    /// replacing it in place when it already exists.
    async fn save(&self, session: &ChatSession) -> Result<()>;

    /// Deletes a session from storage (no-op when absent).
    async fn delete(&self, session_id: &str) -> Result<()>;

    /// Lists all stored sessions, most recently created first.
    async fn list_all(&self) -> Result<Vec<ChatSession>>;

    /// Gets the ID of the currently active session.
    async fn get_active_session_id(&self) -> Result<Option<String>>;

    /// Sets the ID of the currently active session.
    async fn set_active_session_id(&self, session_id: &str) -> Result<()>;

    /// Clears the active session reference.
    async fn clear_active_session_id(&self) -> Result<()>;
}
