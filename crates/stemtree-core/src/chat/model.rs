//! Chat session and message domain models.
//!
//! A [`ChatSession`] is an ordered, persisted conversation thread between a
//! user and the assistant. Messages are immutable once appended except for
//! their feedback and bookmark fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Maximum number of characters of the first message used as a session
/// title.
const TITLE_MAX_CHARS: usize = 50;

/// Title given to a session before its first message arrives.
pub const NEW_CHAT_TITLE: &str = "New Chat";

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    /// Message typed by the user.
    User,
    /// Message produced by the assistant.
    Bot,
}

/// User feedback on a bot message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Feedback {
    Up,
    Down,
}

/// A single message in a chat session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique message identifier (UUID format)
    pub id: String,
    /// The message text
    pub content: String,
    /// Who sent the message
    pub sender: Sender,
    /// Timestamp when the message was created
    pub timestamp: DateTime<Utc>,
    /// Optional thumbs-up/down feedback (bot messages only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
    /// Whether the message is bookmarked
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_bookmarked: bool,
    /// Name of the document the reply was sourced from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_document: Option<String>,
}

impl ChatMessage {
    /// Creates a user message with a fresh UUID and the current timestamp.
    pub fn from_user(content: impl Into<String>) -> Self {
        Self::new(content, Sender::User, None)
    }

    /// Creates a bot message, optionally tagged with a source document.
    pub fn from_bot(content: impl Into<String>, source_document: Option<String>) -> Self {
        Self::new(content, Sender::Bot, source_document)
    }

    fn new(content: impl Into<String>, sender: Sender, source_document: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
            feedback: None,
            is_bookmarked: false,
            source_document,
        }
    }
}

/// An ordered, persisted conversation thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Human-readable session title
    pub title: String,
    /// Ordered message history
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,
    /// Timestamp when the session was last updated
    pub updated_at: DateTime<Utc>,
}

impl ChatSession {
    /// Creates an empty session titled [`NEW_CHAT_TITLE`].
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: NEW_CHAT_TITLE.to_string(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a message and advances `updated_at`.
    ///
    /// When this is the first message of a freshly created session, the
    /// session title is derived from the message content.
    pub fn append_message(&mut self, message: ChatMessage) {
        if self.title == NEW_CHAT_TITLE && self.messages.is_empty() {
            self.title = derive_title(&message.content);
        }
        self.messages.push(message);
        self.touch();
    }

    /// Sets the feedback flag of a message in place.
    ///
    /// Returns `true` when the message was found.
    pub fn set_feedback(&mut self, message_id: &str, feedback: Feedback) -> bool {
        let Some(message) = self.find_message_mut(message_id) else {
            return false;
        };
        message.feedback = Some(feedback);
        self.touch();
        true
    }

    /// Flips the bookmark flag of a message in place.
    ///
    /// Returns the new flag value, or `None` when the message was not found.
    pub fn toggle_bookmark(&mut self, message_id: &str) -> Option<bool> {
        let message = self.find_message_mut(message_id)?;
        message.is_bookmarked = !message.is_bookmarked;
        let bookmarked = message.is_bookmarked;
        self.touch();
        Some(bookmarked)
    }

    fn find_message_mut(&mut self, message_id: &str) -> Option<&mut ChatMessage> {
        self.messages.iter_mut().find(|m| m.id == message_id)
    }

    /// Advances `updated_at`, keeping it monotonic even when the clock
    /// resolution would otherwise produce an identical timestamp.
    fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + chrono::Duration::nanoseconds(1)
        };
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives a session title from the first message content.
///
/// Truncates to [`TITLE_MAX_CHARS`] characters (on a char boundary) and
/// appends an ellipsis when truncated.
fn derive_title(content: &str) -> String {
    if content.chars().count() <= TITLE_MAX_CHARS {
        content.to_string()
    } else {
        let truncated: String = content.chars().take(TITLE_MAX_CHARS).collect();
        format!("{}...", truncated)
    }
}
