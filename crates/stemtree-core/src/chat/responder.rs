//! Pluggable bot responder.
//!
//! The chat use case talks to a [`BotResponder`] trait object, so the
//! shipped canned implementation can be swapped for a real inference
//! backend without touching the chat contract.

use rand::seq::SliceRandom;

/// A reply produced by a responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotReply {
    /// The reply text.
    pub content: String,
    /// Name of the document the reply was sourced from, if any. Document
    /// lookup itself is an external collaborator; this is only a label.
    pub source_document: Option<String>,
}

/// Produces assistant replies for user prompts.
///
/// Implementations must be cheap and infallible: the shipped implementation
/// performs no I/O. A real backend implementation would typically wrap its
/// own error handling and degrade to a fallback reply.
pub trait BotResponder: Send + Sync {
    /// Returns a reply for the given user prompt.
    fn respond(&self, prompt: &str) -> BotReply;
}

/// Default canned replies, used when the configuration does not provide its
/// own list.
pub const DEFAULT_CANNED_REPLIES: &[&str] = &[
    "Great question! Let me break this down for you. Based on the latest research in STEM education, this concept is fundamental to understanding...",
    "I can help you with that! According to the document I found, this relates to several key principles we should explore together...",
    "Excellent inquiry! This is a common area where students seek clarification. Let me provide you with a comprehensive explanation...",
    "That's an interesting problem! Let me walk you through the solution step by step, drawing from multiple educational resources...",
];

/// A responder that picks one fixed reply pseudo-randomly from a short
/// list, independent of the prompt content.
///
/// This is explicitly NOT a real inference step; it simulates an assistant
/// for demo and test purposes.
pub struct CannedResponder {
    replies: Vec<String>,
    source_document: Option<String>,
}

impl CannedResponder {
    /// Creates a responder over the given reply list.
    ///
    /// An empty list falls back to [`DEFAULT_CANNED_REPLIES`].
    pub fn new(replies: Vec<String>, source_document: Option<String>) -> Self {
        let replies = if replies.is_empty() {
            DEFAULT_CANNED_REPLIES.iter().map(|s| s.to_string()).collect()
        } else {
            replies
        };
        Self {
            replies,
            source_document,
        }
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new(Vec::new(), None)
    }
}

impl BotResponder for CannedResponder {
    fn respond(&self, _prompt: &str) -> BotReply {
        let mut rng = rand::thread_rng();
        // new() guarantees the list is non-empty
        let content = self
            .replies
            .choose(&mut rng)
            .cloned()
            .unwrap_or_default();
        BotReply {
            content,
            source_document: self.source_document.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_comes_from_the_configured_list() {
        let responder = CannedResponder::new(
            vec!["a".to_string(), "b".to_string()],
            Some("doc.pdf".to_string()),
        );
        for _ in 0..20 {
            let reply = responder.respond("anything");
            assert!(reply.content == "a" || reply.content == "b");
            assert_eq!(reply.source_document.as_deref(), Some("doc.pdf"));
        }
    }

    #[test]
    fn test_empty_list_falls_back_to_defaults() {
        let responder = CannedResponder::new(Vec::new(), None);
        let reply = responder.respond("prompt");
        assert!(DEFAULT_CANNED_REPLIES.contains(&reply.content.as_str()));
        assert!(reply.source_document.is_none());
    }

    #[test]
    fn test_reply_is_independent_of_prompt() {
        let responder = CannedResponder::new(vec!["only".to_string()], None);
        assert_eq!(responder.respond("x").content, "only");
        assert_eq!(responder.respond("a completely different prompt").content, "only");
    }
}
