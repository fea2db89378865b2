use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language::Language;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Bot,
}

/// One line of a conversation as shown in the chat window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub author: Author,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(author: Author, text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            text: text.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Display history of one chat session.
///
/// Append-only: there is no API to edit or remove a message. The history is
/// never consulted when matching, it only records what was said.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationState {
    messages: Vec<ChatMessage>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message.
    pub fn push_user(&mut self, text: &str) -> &ChatMessage {
        self.push(ChatMessage::new(Author::User, text))
    }

    /// Append a bot message.
    pub fn push_bot(&mut self, text: &str) -> &ChatMessage {
        self.push(ChatMessage::new(Author::Bot, text))
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// An incoming message from a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub id: Uuid,
    /// Channel name (e.g. "stdio").
    pub channel: String,
    /// Channel-specific user ID.
    pub sender_id: String,
    /// Message text content.
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl IncomingMessage {
    pub fn new(channel: &str, sender_id: &str, text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            channel: channel.to_string(),
            sender_id: sender_id.to_string(),
            text: text.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// An outgoing message to send back through a channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub text: String,
    pub metadata: ReplyMetadata,
    /// Channel-specific target for routing (the sender it answers).
    #[serde(default)]
    pub reply_target: Option<String>,
}

/// Metadata about how a reply was produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplyMetadata {
    /// Knowledge base entry that answered, `None` for fallbacks and commands.
    pub matched_entry: Option<String>,
    /// Language the reply was written in.
    pub language: Option<Language>,
    /// Wall-clock processing time in microseconds.
    pub processing_time_us: u64,
}
