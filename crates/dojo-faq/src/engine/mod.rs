//! Dialogue engine: one utterance in, one bot reply out.
//!
//! Matching is stateless per call: the conversation history belongs to the
//! caller, who appends the returned reply to it. Nothing here can fail once
//! the knowledge base has been built.

#[cfg(test)]
mod tests;

use dojo_core::{
    config::Config,
    language::{Language, LanguagePolicy},
    traits::Localizer,
};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::fallback::DefaultResponder;
use crate::knowledge::{FaqEntry, KnowledgeBase};
use crate::matcher::matching_keyword;
use crate::selector::{self, AnswerSelector, FirstCandidate};

/// Outcome of matching one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a> {
    Matched {
        entry: &'a FaqEntry,
        answer: &'a str,
        /// Language of `answer` (Japanese when the requested list was missing).
        language: Language,
    },
    Unmatched,
}

/// A reply ready to be appended to the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub language: Language,
    /// Id of the entry that answered, `None` for the default reply.
    pub matched_entry: Option<String>,
}

/// The FAQ dialogue engine.
pub struct Engine {
    kb: Arc<KnowledgeBase>,
    policy: LanguagePolicy,
    selector: Box<dyn AnswerSelector>,
    fallback: DefaultResponder,
}

impl Engine {
    /// Engine over `kb` with locale policy, first-candidate selection and the
    /// built-in default reply.
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self {
            kb,
            policy: LanguagePolicy::default(),
            selector: Box::new(FirstCandidate),
            fallback: DefaultResponder::default(),
        }
    }

    /// Engine wired from the `[language]` and `[answers]` config sections.
    pub fn from_config(
        cfg: &Config,
        kb: Arc<KnowledgeBase>,
        localizer: Option<Arc<dyn Localizer>>,
    ) -> Self {
        Self::new(kb)
            .with_policy(cfg.language.policy)
            .with_selector(selector::from_config(&cfg.answers))
            .with_localizer(localizer)
    }

    pub fn with_policy(mut self, policy: LanguagePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_selector(mut self, selector: Box<dyn AnswerSelector>) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_localizer(mut self, localizer: Option<Arc<dyn Localizer>>) -> Self {
        self.fallback = DefaultResponder::new(localizer);
        self
    }

    pub fn policy(&self) -> LanguagePolicy {
        self.policy
    }

    /// Read-only view of the knowledge base.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Match `utterance` and pick an answer, without building the reply text.
    pub fn evaluate<'a>(&'a self, utterance: &str, ui_locale: &str) -> MatchResult<'a> {
        let Some(hit) = matching_keyword(&self.kb, utterance) else {
            debug!("faq: no keyword matched ({} chars)", utterance.chars().count());
            return MatchResult::Unmatched;
        };

        let requested = self.policy.resolve(utterance, ui_locale);
        let language = if hit.entry.answers_in(requested).is_empty() {
            Language::Japanese
        } else {
            requested
        };
        let candidates = selector::candidates_for(hit.entry, language);
        let Some(index) = self.selector.select(candidates) else {
            warn!("faq: entry '{}' has no answers, using default", hit.entry.id);
            return MatchResult::Unmatched;
        };
        let Some(answer) = candidates.get(index) else {
            warn!(
                "faq: selector returned index {index} for {} candidates",
                candidates.len()
            );
            return MatchResult::Unmatched;
        };

        debug!(
            "faq: matched entry '{}' via keyword '{}' ({language}, candidate {index})",
            hit.entry.id, hit.keyword
        );
        MatchResult::Matched {
            entry: hit.entry,
            answer,
            language,
        }
    }

    /// Produce the bot reply for one utterance.
    ///
    /// Unmatched input gets the default reply in the UI locale's language.
    pub fn reply(&self, utterance: &str, ui_locale: &str) -> Reply {
        match self.evaluate(utterance, ui_locale) {
            MatchResult::Matched {
                entry,
                answer,
                language,
            } => Reply {
                text: answer.to_string(),
                language,
                matched_entry: Some(entry.id.clone()),
            },
            MatchResult::Unmatched => {
                let language = Language::from_locale(ui_locale);
                Reply {
                    text: self.fallback.respond(language),
                    language,
                    matched_entry: None,
                }
            }
        }
    }

    /// Reply text only.
    pub fn respond(&self, utterance: &str, ui_locale: &str) -> String {
        self.reply(utterance, ui_locale).text
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("entries", &self.kb.len())
            .field("policy", &self.policy)
            .field("fallback", &self.fallback)
            .finish()
    }
}
