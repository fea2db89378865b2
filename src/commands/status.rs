//! Information command handlers: /help, /history, /faq.

use crate::gateway::Session;
use crate::i18n::{self, Catalog};
use dojo_core::{language::Language, message::Author};
use dojo_faq::KnowledgeBase;

pub(super) fn handle_help(lang: Language) -> String {
    format!(
        "{}\n\
         {}\n\
         {}\n\
         {}\n\
         {}\n\n\
         {}",
        i18n::t("help_header", lang),
        i18n::t("help_help", lang),
        i18n::t("help_language", lang),
        i18n::t("help_history", lang),
        i18n::t("help_faq", lang),
        i18n::t("help_footer", lang),
    )
}

pub(super) fn handle_history(session: &Session, catalog: &Catalog, lang: Language) -> String {
    let messages = session.state.messages();
    if messages.is_empty() {
        return i18n::t("history_empty", lang).to_string();
    }
    let you = catalog.get("you_label", lang);
    let bot = catalog.get("bot_name", lang);
    let mut out = format!("{}\n", i18n::t("history_header", lang));
    for m in messages {
        let who = match m.author {
            Author::User => &you,
            Author::Bot => &bot,
        };
        out.push_str(&format!(
            "\n[{}] {who}: {}",
            m.timestamp.format("%H:%M:%S"),
            m.text
        ));
    }
    out.push_str(&format!("\n\n{}", i18n::history_count(lang, messages.len())));
    out
}

/// List one keyword per entry, preferring a keyword written in `lang`.
pub(super) fn handle_faq(kb: &KnowledgeBase, lang: Language) -> String {
    let mut out = format!("{}\n", i18n::t("faq_header", lang));
    for (i, entry) in kb.entries().iter().enumerate() {
        let keyword = entry
            .keywords
            .iter()
            .find(|k| Language::detect(k) == lang)
            .or_else(|| entry.keywords.first())
            .map(String::as_str)
            .unwrap_or(entry.id.as_str());
        out.push_str(&format!("\n{}", i18n::faq_topic(i, keyword)));
    }
    out.push_str(&format!("\n\n{}", i18n::t("faq_footer", lang)));
    out
}
