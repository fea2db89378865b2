//! Format helpers for strings with interpolation.

use super::t;
use dojo_core::language::Language;

/// Display name of `target` (always written in its own script).
pub fn language_name(target: Language) -> &'static str {
    match target {
        Language::Japanese => t("language_japanese", target),
        Language::English => t("language_english", target),
    }
}

/// Format the language set confirmation, written in the new language.
pub fn language_set(new_lang: Language) -> String {
    let name = language_name(new_lang);
    match new_lang {
        Language::Japanese => format!("表示言語を{name}に設定しました。"),
        Language::English => format!("Language set to: {name}"),
    }
}

/// Format language show with usage hint.
pub fn language_show(lang: Language, current_locale: &str) -> String {
    let label = t("language_label", lang);
    let usage = t("language_usage", lang);
    format!("{label} {} ({current_locale})\n{usage}", language_name(lang))
}

/// Format the error for an unrecognized `/language` argument.
pub fn language_unknown(lang: Language, arg: &str) -> String {
    let usage = t("language_usage", lang);
    match lang {
        Language::Japanese => format!("「{arg}」には対応していません。\n{usage}"),
        Language::English => format!("Unsupported language: {arg}\n{usage}"),
    }
}

/// One topic line of `/faq`: the entry's first keyword in the session language.
pub fn faq_topic(index: usize, keyword: &str) -> String {
    format!("{}. {keyword}", index + 1)
}

/// Footer of `/history` with the message count.
pub fn history_count(lang: Language, n: usize) -> String {
    match lang {
        Language::Japanese => format!("（{n}件のメッセージ）"),
        Language::English if n == 1 => "(1 message)".to_string(),
        Language::English => format!("({n} messages)"),
    }
}
