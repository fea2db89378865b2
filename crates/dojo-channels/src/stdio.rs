//! Terminal channel: one user typing on stdin, replies on stdout.
//!
//! Each non-blank input line becomes one incoming message. End of input
//! closes the receiver, which lets the gateway shut down on its own.

use async_trait::async_trait;
use dojo_core::{
    error::DojoError,
    language::Language,
    message::{IncomingMessage, OutgoingMessage},
    traits::Channel,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

/// Channel name reported to the gateway.
pub const CHANNEL_NAME: &str = "stdio";
/// The single sender a terminal session has.
pub const LOCAL_SENDER: &str = "local";

type Reader = Box<dyn AsyncBufRead + Send + Unpin>;
type Writer = Box<dyn AsyncWrite + Send + Unpin>;

/// Where incoming lines come from.
enum Input {
    /// The process's stdin, read on its own OS thread: a pending stdin read
    /// cannot be cancelled and must not sit in the runtime's blocking pool.
    Stdin,
    Reader(Reader),
}

/// How replies are written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `label> text` lines for people.
    #[default]
    Text,
    /// One serialized `OutgoingMessage` per line for scripts.
    JsonLines,
}

/// Terminal channel over stdin/stdout (or any async reader/writer pair).
pub struct StdioChannel {
    input: Mutex<Option<Input>>,
    output: Arc<Mutex<Writer>>,
    format: OutputFormat,
    label: String,
    /// Per-language prefixes, picked by the reply's language.
    language_labels: HashMap<Language, String>,
}

impl StdioChannel {
    /// Channel on the process's stdin/stdout.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            input: Mutex::new(Some(Input::Stdin)),
            output: Arc::new(Mutex::new(Box::new(tokio::io::stdout()))),
            format,
            label: "bot".to_string(),
            language_labels: HashMap::new(),
        }
    }

    /// Channel on an arbitrary reader/writer pair.
    pub fn with_io<R, W>(reader: R, writer: W, format: OutputFormat) -> Self
    where
        R: AsyncBufRead + Send + Unpin + 'static,
        W: AsyncWrite + Send + Unpin + 'static,
    {
        Self {
            input: Mutex::new(Some(Input::Reader(Box::new(reader)))),
            output: Arc::new(Mutex::new(Box::new(writer))),
            format,
            label: "bot".to_string(),
            language_labels: HashMap::new(),
        }
    }

    /// Prefix shown before replies in text mode.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Prefix for replies written in `lang`; others use the plain label.
    pub fn with_language_label(mut self, lang: Language, label: &str) -> Self {
        self.language_labels.insert(lang, label.to_string());
        self
    }

    fn label_for(&self, message: &OutgoingMessage) -> &str {
        message
            .metadata
            .language
            .and_then(|lang| self.language_labels.get(&lang))
            .unwrap_or(&self.label)
    }

    fn render(&self, message: &OutgoingMessage) -> Result<String, DojoError> {
        Ok(match self.format {
            OutputFormat::Text => format!("{}> {}\n", self.label_for(message), message.text),
            OutputFormat::JsonLines => {
                let mut line = serde_json::to_string(message)?;
                line.push('\n');
                line
            }
        })
    }
}

#[async_trait]
impl Channel for StdioChannel {
    fn name(&self) -> &str {
        CHANNEL_NAME
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, DojoError> {
        let input = self
            .input
            .lock()
            .await
            .take()
            .ok_or_else(|| DojoError::Channel("stdio channel already started".into()))?;

        let (tx, rx) = mpsc::channel(64);

        match input {
            Input::Stdin => {
                std::thread::Builder::new()
                    .name("stdio-reader".into())
                    .spawn(move || read_stdin(tx))?;
            }
            Input::Reader(reader) => {
                tokio::spawn(read_lines(reader, tx));
            }
        }

        Ok(rx)
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), DojoError> {
        let rendered = self.render(&message)?;
        let mut out = self.output.lock().await;
        out.write_all(rendered.as_bytes()).await?;
        out.flush().await?;
        Ok(())
    }

    fn greeting_target(&self) -> Option<String> {
        Some(LOCAL_SENDER.to_string())
    }

    async fn stop(&self) -> Result<(), DojoError> {
        self.output.lock().await.flush().await?;
        Ok(())
    }
}

/// What a reader loop does after one `read_until`.
enum Step {
    Deliver(IncomingMessage),
    Skip,
    Stop,
}

/// Shared per-read handling for the async and the stdin reader loops.
/// Only end of input and real I/O errors stop reading.
fn step(read: std::io::Result<usize>, raw: &[u8]) -> Step {
    match read {
        Ok(0) => {
            info!("stdio: end of input");
            Step::Stop
        }
        Ok(_) => accept(raw).map_or(Step::Skip, Step::Deliver),
        Err(e) if e.kind() == std::io::ErrorKind::Interrupted => Step::Skip,
        Err(e) => {
            warn!("stdio: read error: {e}");
            Step::Stop
        }
    }
}

/// Turn one raw input line into a message; blank lines yield nothing.
/// Invalid UTF-8 is replaced, not rejected, so the line still gets a reply.
fn accept(raw: &[u8]) -> Option<IncomingMessage> {
    if std::str::from_utf8(raw).is_err() {
        warn!("stdio: input line is not valid UTF-8, decoding lossily");
    }
    let line = String::from_utf8_lossy(raw);
    let text = line.trim_end_matches(['\r', '\n']);
    if text.trim().is_empty() {
        return None;
    }
    debug!("stdio: received {} bytes", text.len());
    Some(IncomingMessage::new(CHANNEL_NAME, LOCAL_SENDER, text))
}

async fn read_lines(mut reader: Reader, tx: mpsc::Sender<IncomingMessage>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).await;
        match step(read, &buf) {
            Step::Deliver(msg) => {
                if tx.send(msg).await.is_err() {
                    info!("stdio: receiver dropped, stopping reader");
                    break;
                }
            }
            Step::Skip => continue,
            Step::Stop => break,
        }
    }
}

fn read_stdin(tx: mpsc::Sender<IncomingMessage>) {
    use std::io::BufRead;

    let mut stdin = std::io::stdin().lock();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = stdin.read_until(b'\n', &mut buf);
        match step(read, &buf) {
            Step::Deliver(msg) => {
                if tx.blocking_send(msg).is_err() {
                    info!("stdio: receiver dropped, stopping reader");
                    break;
                }
            }
            Step::Skip => continue,
            Step::Stop => break,
        }
    }
}
