//! Chat domain module.
//!
//! Contains the chat session and message models, the persistence trait for
//! sessions, and the pluggable bot responder.

pub mod model;
pub mod repository;
pub mod responder;

pub use model::{ChatMessage, ChatSession, Feedback, Sender};
pub use repository::SessionRepository;
pub use responder::{BotReply, BotResponder, CannedResponder};
