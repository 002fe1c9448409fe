//! Message and ConversationHistory domain types.
//!
//! These are the core value objects of the assistant loop: the user asks a
//! question, the provider answers, and the exchange lands in a bounded
//! transcript that is replayed as context on the next round trip.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default transcript cap: 20 entries, i.e. the 10 most recent exchanges.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// The role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user
    User,
    /// The AI assistant
    Assistant,
    /// System instructions (sent out-of-band to the provider)
    System,
}

/// A single message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message ID
    pub id: String,

    /// Who sent this message
    pub role: Role,

    /// The text content
    pub content: String,

    /// Timestamp
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A bounded, ordered transcript of user/assistant exchanges.
///
/// The history starts empty, grows only through [`record_exchange`], and
/// never exceeds its entry limit: once full, the oldest entries are evicted
/// first (plain FIFO, no weighting or relevance scoring). It lives for the
/// duration of the process and is never persisted.
///
/// [`record_exchange`]: ConversationHistory::record_exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationHistory {
    messages: Vec<Message>,
    limit: usize,
}

impl ConversationHistory {
    /// Create an empty history with the default 20-entry cap.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history with a custom entry cap.
    ///
    /// A limit below 2 is clamped to 2 so a recorded exchange is always
    /// retained whole.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            messages: Vec::new(),
            limit: limit.max(2),
        }
    }

    /// Record a completed exchange: append the user message and the
    /// assistant's reply, then evict the oldest entries until the transcript
    /// fits the cap again.
    pub fn record_exchange(&mut self, query: impl Into<String>, reply: impl Into<String>) {
        self.messages.push(Message::user(query));
        self.messages.push(Message::assistant(reply));

        if self.messages.len() > self.limit {
            let excess = self.messages.len() - self.limit;
            self.messages.drain(..excess);
        }
    }

    /// The transcript in chronological order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The entry cap this history enforces.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Drop the entire transcript, keeping the cap.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Rough token estimate for the transcript (4 chars ≈ 1 token).
    pub fn estimated_tokens(&self) -> usize {
        self.messages.iter().map(|m| m.content.len() / 4).sum()
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_message() {
        let msg = Message::user("How do I define a relationship?");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "How do I define a relationship?");
    }

    #[test]
    fn message_serialization_roundtrip() {
        let msg = Message::assistant("Use belongsTo.");
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.content, "Use belongsTo.");
        assert_eq!(deserialized.role, Role::Assistant);
    }

    #[test]
    fn record_exchange_appends_pair() {
        let mut history = ConversationHistory::new();
        history.record_exchange("question", "answer");

        assert_eq!(history.len(), 2);
        assert_eq!(history.messages()[0].role, Role::User);
        assert_eq!(history.messages()[1].role, Role::Assistant);
    }

    #[test]
    fn history_never_exceeds_limit() {
        let mut history = ConversationHistory::new();
        for i in 0..30 {
            history.record_exchange(format!("q{i}"), format!("a{i}"));
            assert!(history.len() <= DEFAULT_HISTORY_LIMIT);
        }
        assert_eq!(history.len(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn eviction_is_fifo_and_newest_pair_survives() {
        let mut history = ConversationHistory::new();
        for i in 0..11 {
            history.record_exchange(format!("q{i}"), format!("a{i}"));
        }

        // 11 exchanges = 22 entries; the oldest exchange (q0/a0) is gone.
        assert_eq!(history.len(), 20);
        assert_eq!(history.messages()[0].content, "q1");
        assert_eq!(history.messages()[18].content, "q10");
        assert_eq!(history.messages()[19].content, "a10");
    }

    #[test]
    fn custom_limit_is_respected() {
        let mut history = ConversationHistory::with_limit(4);
        for i in 0..5 {
            history.record_exchange(format!("q{i}"), format!("a{i}"));
        }
        assert_eq!(history.len(), 4);
        assert_eq!(history.messages()[0].content, "q3");
    }

    #[test]
    fn tiny_limit_clamped_to_one_exchange() {
        let mut history = ConversationHistory::with_limit(0);
        history.record_exchange("q", "a");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn clear_empties_transcript() {
        let mut history = ConversationHistory::new();
        history.record_exchange("q", "a");
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn token_estimate() {
        let mut history = ConversationHistory::new();
        // 20 chars ≈ 5 tokens, twice
        history.record_exchange("12345678901234567890", "12345678901234567890");
        assert_eq!(history.estimated_tokens(), 10);
    }
}
