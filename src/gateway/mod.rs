//! Gateway: the event loop connecting channels to the FAQ engine.
//!
//! Owns one `Session` per channel user: the conversation history and the UI
//! locale. Messages are processed one at a time, in arrival order.


use crate::commands::{self, Command, CommandContext};
use crate::i18n::Catalog;
use dojo_core::{
    language::Language,
    message::{ConversationState, IncomingMessage, OutgoingMessage, ReplyMetadata},
    traits::Channel,
};
use dojo_faq::Engine;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// One user's chat window.
#[derive(Debug, Clone)]
pub struct Session {
    pub state: ConversationState,
    /// UI locale (e.g. "ja", "en-US"); switched by `/language`.
    pub locale: String,
}

impl Session {
    pub fn new(locale: &str) -> Self {
        Self {
            state: ConversationState::new(),
            locale: locale.to_string(),
        }
    }

    /// Display language of this session.
    pub fn language(&self) -> Language {
        Language::from_locale(&self.locale)
    }
}

/// The gateway that routes messages between channels and the engine.
pub struct Gateway {
    engine: Arc<Engine>,
    catalog: Arc<Catalog>,
    channels: HashMap<String, Arc<dyn Channel>>,
    sessions: HashMap<String, Session>,
    default_locale: String,
}

impl Gateway {
    /// Create a new gateway.
    pub fn new(
        engine: Arc<Engine>,
        catalog: Arc<Catalog>,
        channels: HashMap<String, Arc<dyn Channel>>,
        default_locale: &str,
    ) -> Self {
        Self {
            engine,
            catalog,
            channels,
            sessions: HashMap::new(),
            default_locale: default_locale.to_string(),
        }
    }

    /// Session of `sender_id` on `channel`, if one was opened.
    pub fn session(&self, channel: &str, sender_id: &str) -> Option<&Session> {
        self.sessions.get(&session_key(channel, sender_id))
    }

    /// Run the main event loop until every channel closes or Ctrl-C.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        info!(
            "Dojo gateway running | entries: {} | policy: {} | channels: {}",
            self.engine.knowledge_base().len(),
            self.engine.policy().display_name(),
            self.channels.keys().cloned().collect::<Vec<_>>().join(", "),
        );

        let (tx, mut rx) = mpsc::channel::<IncomingMessage>(256);

        for (name, channel) in &self.channels {
            let mut channel_rx = channel
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("failed to start channel {name}: {e}"))?;
            let tx = tx.clone();
            let channel_name = name.clone();

            tokio::spawn(async move {
                while let Some(msg) = channel_rx.recv().await {
                    if tx.send(msg).await.is_err() {
                        info!("gateway receiver dropped, stopping {channel_name} forwarder");
                        break;
                    }
                }
            });

            info!("Channel started: {name}");
        }

        drop(tx);

        // Open the chat window for single-user channels right away.
        let greetings: Vec<(String, String)> = self
            .channels
            .iter()
            .filter_map(|(name, ch)| ch.greeting_target().map(|t| (name.clone(), t)))
            .collect();
        for (channel, target) in greetings {
            self.greet(&channel, &target).await;
        }

        loop {
            tokio::select! {
                incoming = rx.recv() => match incoming {
                    Some(incoming) => self.handle_message(incoming).await,
                    None => {
                        info!("All channels closed");
                        break;
                    }
                },
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        self.shutdown().await;
        Ok(())
    }

    /// Open a session for `sender_id` if needed. Returns the welcome message
    /// when the session is new; it is already appended to the history.
    fn open_session(&mut self, channel: &str, sender_id: &str) -> Option<String> {
        let key = session_key(channel, sender_id);
        if self.sessions.contains_key(&key) {
            return None;
        }
        let mut session = Session::new(&self.default_locale);
        let welcome = self.catalog.get("welcome_message", session.language());
        session.state.push_bot(&welcome);
        info!("session opened: {key} ({})", session.locale);
        self.sessions.insert(key, session);
        Some(welcome)
    }

    async fn greet(&mut self, channel: &str, sender_id: &str) {
        if let Some(welcome) = self.open_session(channel, sender_id) {
            let lang = Language::from_locale(&self.default_locale);
            self.send(channel, plain_reply(welcome, lang, sender_id))
                .await;
        }
    }

    /// Process one incoming message and send the reply.
    async fn handle_message(&mut self, incoming: IncomingMessage) {
        if let Some(welcome) = self.open_session(&incoming.channel, &incoming.sender_id) {
            let lang = Language::from_locale(&self.default_locale);
            self.send(
                &incoming.channel,
                plain_reply(welcome, lang, &incoming.sender_id),
            )
            .await;
        }
        let reply = self.process(&incoming);
        self.send(&incoming.channel, reply).await;
    }

    /// Fold one user message into its session and build the bot reply.
    ///
    /// Commands are answered directly; everything else goes to the engine.
    /// Both the user message and the reply are appended to the history.
    pub(crate) fn process(&mut self, incoming: &IncomingMessage) -> OutgoingMessage {
        let started = Instant::now();
        let key = session_key(&incoming.channel, &incoming.sender_id);
        let session = self
            .sessions
            .entry(key)
            .or_insert_with(|| Session::new(&self.default_locale));
        session.state.push_user(&incoming.text);

        let (text, metadata) = match Command::parse(&incoming.text) {
            Some(cmd) => {
                let ctx = CommandContext {
                    kb: self.engine.knowledge_base(),
                    catalog: &self.catalog,
                    text: &incoming.text,
                };
                let text = commands::handle(cmd, &ctx, session);
                debug!("command {cmd:?} from {}", incoming.sender_id);
                let metadata = ReplyMetadata {
                    language: Some(session.language()),
                    ..Default::default()
                };
                (text, metadata)
            }
            None => {
                let reply = self.engine.reply(&incoming.text, &session.locale);
                let metadata = ReplyMetadata {
                    matched_entry: reply.matched_entry,
                    language: Some(reply.language),
                    ..Default::default()
                };
                (reply.text, metadata)
            }
        };

        session.state.push_bot(&text);

        let elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        info!(
            "[{}:{}] reply | entry: {} | {}us",
            incoming.channel,
            incoming.sender_id,
            metadata.matched_entry.as_deref().unwrap_or("-"),
            elapsed_us
        );

        OutgoingMessage {
            text,
            metadata: ReplyMetadata {
                processing_time_us: elapsed_us,
                ..metadata
            },
            reply_target: Some(incoming.sender_id.clone()),
        }
    }

    async fn send(&self, channel: &str, message: OutgoingMessage) {
        match self.channels.get(channel) {
            Some(ch) => {
                if let Err(e) = ch.send(message).await {
                    error!("failed to send message on {channel}: {e}");
                }
            }
            None => warn!("no channel named {channel}, dropping reply"),
        }
    }

    /// Graceful shutdown: stop channels.
    async fn shutdown(&self) {
        info!("Shutting down...");
        for (name, channel) in &self.channels {
            if let Err(e) = channel.stop().await {
                warn!("failed to stop channel {name}: {e}");
            }
        }
        info!(
            "Shutdown complete ({} session(s), {} message(s))",
            self.sessions.len(),
            self.sessions.values().map(|s| s.state.len()).sum::<usize>()
        );
    }
}

fn session_key(channel: &str, sender_id: &str) -> String {
    format!("{channel}:{sender_id}")
}

fn plain_reply(text: String, lang: Language, target: &str) -> OutgoingMessage {
    OutgoingMessage {
        text,
        metadata: ReplyMetadata {
            language: Some(lang),
            ..Default::default()
        },
        reply_target: Some(target.to_string()),
    }
}
