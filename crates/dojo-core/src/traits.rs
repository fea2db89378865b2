use crate::{
    error::DojoError,
    language::Language,
    message::{IncomingMessage, OutgoingMessage},
};
use async_trait::async_trait;

/// Translation layer for UI strings.
///
/// The engine asks it for canned messages (such as the default reply) by a
/// fixed key. `None` means the layer has no string for that key and the
/// caller uses its own hard-coded text.
pub trait Localizer: Send + Sync {
    fn lookup(&self, key: &str, lang: Language) -> Option<String>;
}

/// Messaging Channel trait.
///
/// Every transport the bot can chat over implements this trait to receive
/// and send messages.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    /// Returns a receiver that yields incoming messages and closes when the
    /// transport ends.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, DojoError>;

    /// Send a reply back through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), DojoError>;

    /// Sender to greet as soon as the channel is up, if the transport has a
    /// single fixed user (like a terminal).
    fn greeting_target(&self) -> Option<String> {
        None
    }

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), DojoError>;
}
