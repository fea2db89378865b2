//! FAQ entries and the validated, read-only knowledge base.

use dojo_core::{
    config::{shellexpand, KnowledgeConfig},
    error::DojoError,
    language::Language,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::info;

use crate::builtin;

/// One knowledge-base record: trigger keywords plus localized candidate answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Stable identifier, used in logs and reply metadata.
    #[serde(default)]
    pub id: String,
    /// Case-insensitive substring triggers, checked in order.
    pub keywords: Vec<String>,
    /// Candidate answers keyed by language code (`ja`, `en`).
    pub answers: BTreeMap<String, Vec<String>>,
}

impl FaqEntry {
    /// Candidate answers for `lang`, or an empty slice when absent.
    pub fn answers_in(&self, lang: Language) -> &[String] {
        self.answers
            .get(lang.code())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn validate(&self, index: usize) -> Result<(), DojoError> {
        if self.keywords.is_empty() {
            return Err(DojoError::entry(index, &self.id, "no keywords"));
        }
        if let Some(pos) = self.keywords.iter().position(|k| k.trim().is_empty()) {
            return Err(DojoError::entry(
                index,
                &self.id,
                format!("keyword #{pos} is blank"),
            ));
        }
        for lang in Language::ALL {
            let answers = self.answers_in(lang);
            if answers.is_empty() {
                return Err(DojoError::entry(
                    index,
                    &self.id,
                    format!("no answers for '{lang}'"),
                ));
            }
            if answers.iter().any(|a| a.trim().is_empty()) {
                return Err(DojoError::entry(
                    index,
                    &self.id,
                    format!("blank answer for '{lang}'"),
                ));
            }
        }
        Ok(())
    }
}

/// On-disk shape of a knowledge base file.
#[derive(Debug, Deserialize, Serialize)]
struct KnowledgeFile {
    entries: Vec<FaqEntry>,
}

/// Immutable, ordered set of FAQ entries.
///
/// Entry order is match priority. Construction validates every entry and
/// precomputes lowercased keywords, so matching never re-checks invariants.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<FaqEntry>,
    folded: Vec<Vec<String>>,
}

impl KnowledgeBase {
    /// Validate `entries` and build a knowledge base.
    ///
    /// Blank ids are replaced with `entry-<n>` (1-based). Fails on the first
    /// entry that has no keywords, a blank keyword, a missing or blank answer
    /// list for a supported language, or a duplicate id.
    pub fn new(mut entries: Vec<FaqEntry>) -> Result<Self, DojoError> {
        let mut seen = HashSet::new();
        for (index, entry) in entries.iter_mut().enumerate() {
            if entry.id.trim().is_empty() {
                entry.id = format!("entry-{}", index + 1);
            }
            entry.validate(index)?;
            if !seen.insert(entry.id.clone()) {
                return Err(DojoError::entry(index, &entry.id, "duplicate id"));
            }
        }

        let folded = entries
            .iter()
            .map(|e| e.keywords.iter().map(|k| k.to_lowercase()).collect())
            .collect();

        Ok(Self { entries, folded })
    }

    /// The table shipped with the app.
    pub fn builtin() -> Result<Self, DojoError> {
        Self::new(builtin::entries())
    }

    /// Parse a knowledge base from TOML text (`[[entries]]` tables).
    pub fn from_toml_str(content: &str) -> Result<Self, DojoError> {
        let file: KnowledgeFile = toml::from_str(content)
            .map_err(|e| DojoError::Config(format!("failed to parse knowledge base: {e}")))?;
        Self::new(file.entries)
    }

    /// Parse a knowledge base from JSON text (`{"entries": [...]}`).
    pub fn from_json_str(content: &str) -> Result<Self, DojoError> {
        let file: KnowledgeFile = serde_json::from_str(content)?;
        Self::new(file.entries)
    }

    /// Load a knowledge base file. The extension picks the format.
    pub fn load(path: &Path) -> Result<Self, DojoError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DojoError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let kb = match ext.as_str() {
            "toml" => Self::from_toml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            other => {
                return Err(DojoError::Config(format!(
                    "unsupported knowledge base format '{other}' ({}), expected .toml or .json",
                    path.display()
                )))
            }
        };
        info!(
            "knowledge base loaded from {} ({} entries)",
            path.display(),
            kb.len()
        );
        Ok(kb)
    }

    /// External file when configured, otherwise the built-in table.
    pub fn from_config(cfg: &KnowledgeConfig) -> Result<Self, DojoError> {
        if cfg.path.trim().is_empty() {
            return Self::builtin();
        }
        Self::load(Path::new(&shellexpand(cfg.path.trim())))
    }

    /// Serialize back to the JSON file shape.
    pub fn to_json_pretty(&self) -> Result<String, DojoError> {
        let file = KnowledgeFile {
            entries: self.entries.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&FaqEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with their lowercased keywords, in priority order.
    pub(crate) fn folded(&self) -> impl Iterator<Item = (&FaqEntry, &[String])> {
        self.entries
            .iter()
            .zip(self.folded.iter().map(Vec::as_slice))
    }
}
