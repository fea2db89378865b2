//! # dojo-faq
//!
//! Keyword-matched FAQ dialogue engine. A static, validated knowledge base of
//! keyword → localized answer entries is scanned in order for the first
//! keyword contained in the user's message; unmatched messages get a
//! localized default reply.

mod builtin;
pub mod engine;
pub mod fallback;
pub mod knowledge;
pub mod matcher;
pub mod selector;

// Re-export the common surface.
pub use engine::{Engine, MatchResult, Reply};
pub use fallback::{DefaultResponder, DEFAULT_RESPONSE_KEY};
pub use knowledge::{FaqEntry, KnowledgeBase};
pub use matcher::find_match;
pub use selector::{AnswerSelector, FirstCandidate, RandomCandidate};
