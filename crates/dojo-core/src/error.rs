use thiserror::Error;

/// Top-level error type for the dojo support bot.
#[derive(Debug, Error)]
pub enum DojoError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// A knowledge base entry violated a load-time invariant.
    #[error("knowledge base error: entry {index} ({id}): {reason}")]
    KnowledgeBase {
        index: usize,
        id: String,
        reason: String,
    },

    /// Error from a messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DojoError {
    /// Build a knowledge base validation error for the entry at `index`.
    pub fn entry(index: usize, id: &str, reason: impl Into<String>) -> Self {
        Self::KnowledgeBase {
            index,
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
