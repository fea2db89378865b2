//! Language resolution for bot replies.
//!
//! Two policies decide which answer language a reply uses:
//! - `Content` sniffs the utterance itself for Japanese script.
//! - `Locale` follows the UI locale of the session, ignoring what was typed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported answer language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Every language the bot ships answers for. Japanese is the authoring language.
    pub const ALL: [Language; 2] = [Language::Japanese, Language::English];

    /// Short code used as the answer-table key (`ja`, `en`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Japanese => "ja",
            Self::English => "en",
        }
    }

    /// Classify raw text: Japanese if it contains any Japanese code point.
    pub fn detect(text: &str) -> Self {
        if is_japanese(text) {
            Self::Japanese
        } else {
            Self::English
        }
    }

    /// Map a UI locale (`ja`, `ja-JP`, `en-US`, ...) to a language.
    /// Anything that is not Japanese falls back to English.
    pub fn from_locale(locale: &str) -> Self {
        if locale.trim().to_ascii_lowercase().starts_with("ja") {
            Self::Japanese
        } else {
            Self::English
        }
    }

    /// Strict parse for user-supplied language names. Unknown input yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "ja" | "jp" | "japanese" | "日本語" => Some(Self::Japanese),
            "en" | "english" | "英語" => Some(Self::English),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Whether `text` contains at least one Hiragana/Katakana, CJK ideograph,
/// or CJK compatibility ideograph code point.
pub fn is_japanese(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(
            c,
            '\u{3040}'..='\u{30FF}'
                | '\u{3400}'..='\u{4DBF}'
                | '\u{4E00}'..='\u{9FAF}'
                | '\u{F900}'..='\u{FAFF}'
        )
    })
}

/// How the answer language of a matched entry is chosen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguagePolicy {
    /// Detect per message from the utterance text.
    Content,
    /// Follow the session's UI locale (default).
    #[default]
    Locale,
}

impl LanguagePolicy {
    /// Resolve the answer language for one utterance.
    pub fn resolve(&self, utterance: &str, ui_locale: &str) -> Language {
        match self {
            Self::Content => Language::detect(utterance),
            Self::Locale => Language::from_locale(ui_locale),
        }
    }

    /// Name used in config and status output.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Content => "content",
            Self::Locale => "locale",
        }
    }
}
