//! Internationalization: localized strings for the chat UI and commands.
//!
//! Uses a simple `t(key, lang)` function for static strings and
//! `format_*`-style helpers for strings with interpolation.
//! Supported languages: Japanese (authoring language) and English.
//!
//! `Catalog` layers `[i18n.<code>]` config overrides on top of the static
//! tables and is the `Localizer` handed to the FAQ engine.

mod format;
mod labels;

#[cfg(test)]
mod tests;

pub use format::*;

use dojo_core::{language::Language, traits::Localizer};
use std::collections::HashMap;
use tracing::warn;

/// Return a localized static string for `key` in the given `lang`.
/// Unknown keys render as `???`.
pub fn t(key: &str, lang: Language) -> &'static str {
    labels::lookup(key, lang).unwrap_or("???")
}

/// UI strings with per-deployment overrides.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    overrides: HashMap<(Language, String), String>,
}

impl Catalog {
    /// Build from the `[i18n]` config table (language code → key → text).
    /// Sections for unsupported languages are skipped with a warning.
    pub fn from_overrides(raw: &HashMap<String, HashMap<String, String>>) -> Self {
        let mut overrides = HashMap::new();
        for (code, strings) in raw {
            let Some(lang) = Language::parse(code) else {
                warn!("i18n: ignoring overrides for unsupported language '{code}'");
                continue;
            };
            for (key, text) in strings {
                overrides.insert((lang, key.clone()), text.clone());
            }
        }
        Self { overrides }
    }

    /// Override if present, else the static string.
    pub fn get(&self, key: &str, lang: Language) -> String {
        self.lookup(key, lang)
            .unwrap_or_else(|| t(key, lang).to_string())
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl Localizer for Catalog {
    fn lookup(&self, key: &str, lang: Language) -> Option<String> {
        self.overrides
            .get(&(lang, key.to_string()))
            .cloned()
            .or_else(|| labels::lookup(key, lang).map(str::to_string))
    }
}
