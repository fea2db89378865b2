//! Configuration command handlers: /language.

use crate::gateway::Session;
use crate::i18n;
use dojo_core::language::Language;
use tracing::info;

/// Show the session language, or switch it.
pub(super) fn handle_language(session: &mut Session, text: &str) -> String {
    let arg = text
        .split_whitespace()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let lang = session.language();
    if arg.is_empty() {
        return i18n::language_show(lang, &session.locale);
    }
    match Language::parse(&arg) {
        Some(new_lang) => {
            info!("session language: {} → {}", session.locale, new_lang.code());
            session.locale = new_lang.code().to_string();
            i18n::language_set(new_lang)
        }
        None => i18n::language_unknown(lang, &arg),
    }
}
