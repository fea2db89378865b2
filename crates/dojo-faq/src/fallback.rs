//! Canned reply for utterances no entry matches.

use dojo_core::{language::Language, traits::Localizer};
use std::sync::Arc;

/// Translation key of the default reply.
pub const DEFAULT_RESPONSE_KEY: &str = "default_response";

/// Hard-coded default reply, used when no localizer provides one.
pub fn builtin_default_response(lang: Language) -> &'static str {
    match lang {
        Language::Japanese => "申し訳ありませんが、その内容には対応できません。",
        Language::English => "I'm sorry, but I can't help with that.",
    }
}

/// Produces the localized "cannot help with that" reply.
#[derive(Clone, Default)]
pub struct DefaultResponder {
    localizer: Option<Arc<dyn Localizer>>,
}

impl DefaultResponder {
    pub fn new(localizer: Option<Arc<dyn Localizer>>) -> Self {
        Self { localizer }
    }

    pub fn respond(&self, lang: Language) -> String {
        self.localizer
            .as_ref()
            .and_then(|l| l.lookup(DEFAULT_RESPONSE_KEY, lang))
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| builtin_default_response(lang).to_string())
    }
}

impl std::fmt::Debug for DefaultResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultResponder")
            .field("localized", &self.localizer.is_some())
            .finish()
    }
}
