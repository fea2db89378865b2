//! Built-in chat commands. Instant responses, never sent to the FAQ engine.

mod settings;
mod status;


use crate::gateway::Session;
use crate::i18n::Catalog;
use dojo_faq::KnowledgeBase;

/// Grouped context for command execution.
pub struct CommandContext<'a> {
    pub kb: &'a KnowledgeBase,
    pub catalog: &'a Catalog,
    pub text: &'a str,
}

/// Known chat commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Language,
    History,
    Faq,
}

impl Command {
    /// Parse a command from message text. Returns `None` for unknown `/` prefixes
    /// (which pass through to the FAQ engine).
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        match first.to_ascii_lowercase().as_str() {
            "/help" => Some(Self::Help),
            "/language" | "/lang" => Some(Self::Language),
            "/history" => Some(Self::History),
            "/faq" => Some(Self::Faq),
            _ => None,
        }
    }
}

/// Handle a command for `session` and return the response text.
pub fn handle(cmd: Command, ctx: &CommandContext<'_>, session: &mut Session) -> String {
    let lang = session.language();
    match cmd {
        Command::Help => status::handle_help(lang),
        Command::Language => settings::handle_language(session, ctx.text),
        Command::History => status::handle_history(session, ctx.catalog, lang),
        Command::Faq => status::handle_faq(ctx.kb, lang),
    }
}
