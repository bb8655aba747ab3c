//! Chat use case.
//!
//! Orchestrates chat sessions: creation, selection, deletion, message
//! sending with the deferred mock bot reply, feedback, and bookmarks.
//! Deferred replies are explicit tasks carrying a cancellation token, so
//! tearing the use case down never fires a stale callback into dead state.

use std::sync::Arc;
use std::time::Duration;
use stemtree_core::chat::{
    BotResponder, ChatMessage, ChatSession, Feedback, SessionRepository,
};
use stemtree_core::directory::DirectoryRepository;
use stemtree_core::error::{Result, StemtreeError};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// The outcome of sending a chat message.
#[derive(Debug)]
pub struct SentMessage {
    /// The user message appended synchronously.
    pub user_message: ChatMessage,
    /// Handle of the deferred bot-reply task. The UI may drop it; tests can
    /// await it to observe the reply deterministically.
    pub reply_task: JoinHandle<()>,
}

/// Use case for the chat dashboard.
///
/// All persistence goes through the session and directory repositories;
/// the bot is a pluggable [`BotResponder`] so a real backend can be wired
/// in without touching this contract.
pub struct ChatUseCase {
    /// Repository for chat session persistence
    session_repository: Arc<dyn SessionRepository>,
    /// Repository for the global bookmarked-message list
    directory_repository: Arc<dyn DirectoryRepository>,
    /// Producer of bot replies
    responder: Arc<dyn BotResponder>,
    /// Artificial delay before a bot reply lands
    reply_delay: Duration,
    /// Parent token; cancelled on shutdown, cancelling all pending replies
    cancellation: CancellationToken,
}

impl ChatUseCase {
    /// Creates a new `ChatUseCase`.
    pub fn new(
        session_repository: Arc<dyn SessionRepository>,
        directory_repository: Arc<dyn DirectoryRepository>,
        responder: Arc<dyn BotResponder>,
        reply_delay: Duration,
    ) -> Self {
        Self {
            session_repository,
            directory_repository,
            responder,
            reply_delay,
            cancellation: CancellationToken::new(),
        }
    }

    /// Creates an empty session, persists it at the front of the session
    /// list, and marks it active.
    pub async fn start_session(&self) -> Result<ChatSession> {
        let session = ChatSession::new();
        self.session_repository.save(&session).await?;
        self.session_repository
            .set_active_session_id(&session.id)
            .await?;
        tracing::debug!(session_id = %session.id, "started chat session");
        Ok(session)
    }

    /// Marks an existing session active and returns it.
    pub async fn select_session(&self, session_id: &str) -> Result<ChatSession> {
        let session = self.require_session(session_id).await?;
        self.session_repository
            .set_active_session_id(session_id)
            .await?;
        Ok(session)
    }

    /// Lists all sessions, most recently created first.
    pub async fn list_sessions(&self) -> Result<Vec<ChatSession>> {
        self.session_repository.list_all().await
    }

    /// Returns the active session ID, if any.
    pub async fn active_session_id(&self) -> Result<Option<String>> {
        self.session_repository.get_active_session_id().await
    }

    /// Appends a user message to the session and schedules the deferred
    /// bot reply.
    ///
    /// Exactly one user message is appended synchronously (advancing the
    /// session's `updated_at`); exactly one bot message is appended by the
    /// spawned task after the configured delay, unless the use case is shut
    /// down or the session is deleted first. Blank messages are rejected as
    /// a validation error.
    pub async fn send_message(&self, session_id: &str, content: &str) -> Result<SentMessage> {
        if content.trim().is_empty() {
            return Err(StemtreeError::validation("message content is empty"));
        }

        let mut session = self.require_session(session_id).await?;
        let user_message = ChatMessage::from_user(content);
        session.append_message(user_message.clone());
        self.session_repository.save(&session).await?;

        let reply_task = self.spawn_reply_task(session.id.clone(), content.to_string());

        Ok(SentMessage {
            user_message,
            reply_task,
        })
    }

    /// Spawns the deferred bot-reply task for a session.
    fn spawn_reply_task(&self, session_id: String, prompt: String) -> JoinHandle<()> {
        let token = self.cancellation.child_token();
        let repository = Arc::clone(&self.session_repository);
        let responder = Arc::clone(&self.responder);
        let delay = self.reply_delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(%session_id, "bot reply cancelled");
                    return;
                }
                _ = tokio::time::sleep(delay) => {}
            }

            let reply = responder.respond(&prompt);
            let message = ChatMessage::from_bot(reply.content, reply.source_document);

            // The session may have been deleted while the reply was pending
            let session = match repository.find_by_id(&session_id).await {
                Ok(Some(session)) => session,
                Ok(None) => {
                    tracing::debug!(%session_id, "session gone, dropping bot reply");
                    return;
                }
                Err(e) => {
                    tracing::warn!(%session_id, error = %e, "failed to load session for bot reply");
                    return;
                }
            };

            let mut session = session;
            session.append_message(message);
            if let Err(e) = repository.save(&session).await {
                tracing::warn!(%session_id, error = %e, "failed to persist bot reply");
            }
        })
    }

    /// Sets thumbs-up/down feedback on a message.
    pub async fn set_feedback(
        &self,
        session_id: &str,
        message_id: &str,
        feedback: Feedback,
    ) -> Result<()> {
        let mut session = self.require_session(session_id).await?;
        if !session.set_feedback(message_id, feedback) {
            return Err(StemtreeError::not_found("message", message_id));
        }
        self.session_repository.save(&session).await
    }

    /// Flips the bookmark flag on a message, keeping the message flag and
    /// the global bookmarked-id list consistent.
    ///
    /// Returns the new bookmark state.
    pub async fn toggle_bookmark(&self, session_id: &str, message_id: &str) -> Result<bool> {
        let mut session = self.require_session(session_id).await?;
        let bookmarked = session
            .toggle_bookmark(message_id)
            .ok_or_else(|| StemtreeError::not_found("message", message_id))?;
        self.session_repository.save(&session).await?;

        let mut bookmarks = self.directory_repository.load_bookmarks().await?;
        if bookmarked {
            if !bookmarks.iter().any(|id| id == message_id) {
                bookmarks.push(message_id.to_string());
            }
        } else {
            bookmarks.retain(|id| id != message_id);
        }
        self.directory_repository.save_bookmarks(&bookmarks).await?;

        Ok(bookmarked)
    }

    /// Deletes a session; when it was the active session, clears the
    /// active reference.
    pub async fn delete_session(&self, session_id: &str) -> Result<()> {
        self.session_repository.delete(session_id).await?;
        if self
            .session_repository
            .get_active_session_id()
            .await?
            .as_deref()
            == Some(session_id)
        {
            self.session_repository.clear_active_session_id().await?;
        }
        tracing::debug!(%session_id, "deleted chat session");
        Ok(())
    }

    /// Cancels all pending bot replies.
    ///
    /// Call on teardown; already-sent messages are unaffected.
    pub fn shutdown(&self) {
        self.cancellation.cancel();
    }

    async fn require_session(&self, session_id: &str) -> Result<ChatSession> {
        self.session_repository
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| StemtreeError::not_found("session", session_id))
    }
}
