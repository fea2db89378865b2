//! Keyword matching: first entry, then first keyword, wins.

use crate::knowledge::{FaqEntry, KnowledgeBase};

/// A keyword hit: the entry it belongs to and the keyword as declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordHit<'a> {
    pub entry: &'a FaqEntry,
    pub keyword: &'a str,
}

/// Find the first entry with a keyword contained in `utterance`.
///
/// Comparison is lowercase substring containment, so "検索" matches inside
/// "何を検索したら良いのか" and "Search" matches "research". Entries are scanned
/// in knowledge-base order and keywords in declared order; scanning stops at
/// the first hit.
pub fn find_match<'a>(kb: &'a KnowledgeBase, utterance: &str) -> Option<&'a FaqEntry> {
    matching_keyword(kb, utterance).map(|hit| hit.entry)
}

/// Like [`find_match`], also reporting which keyword triggered.
pub fn matching_keyword<'a>(kb: &'a KnowledgeBase, utterance: &str) -> Option<KeywordHit<'a>> {
    if utterance.is_empty() {
        return None;
    }
    let msg_lower = utterance.to_lowercase();
    kb.folded().find_map(|(entry, folded)| {
        folded
            .iter()
            .position(|kw| msg_lower.contains(kw.as_str()))
            .map(|pos| KeywordHit {
                entry,
                keyword: entry.keywords[pos].as_str(),
            })
    })
}
