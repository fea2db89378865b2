//! Picking one concrete answer from a matched entry.

use dojo_core::{
    config::{AnswersConfig, SelectionPolicy},
    language::Language,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Mutex;

use crate::knowledge::FaqEntry;

/// Chooses one candidate answer by index.
pub trait AnswerSelector: Send + Sync {
    /// Index into `candidates`, or `None` when the list is empty.
    fn select(&self, candidates: &[String]) -> Option<usize>;
}

/// Always the first candidate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstCandidate;

impl AnswerSelector for FirstCandidate {
    fn select(&self, candidates: &[String]) -> Option<usize> {
        if candidates.is_empty() {
            None
        } else {
            Some(0)
        }
    }
}

/// Uniformly random candidate from an owned, seedable generator.
#[derive(Debug)]
pub struct RandomCandidate {
    rng: Mutex<StdRng>,
}

impl RandomCandidate {
    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl AnswerSelector for RandomCandidate {
    fn select(&self, candidates: &[String]) -> Option<usize> {
        match candidates.len() {
            0 => None,
            1 => Some(0),
            n => {
                // A poisoned lock still holds a usable generator.
                let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
                Some(rng.gen_range(0..n))
            }
        }
    }
}

/// Build the selector described by the `[answers]` config section.
pub fn from_config(cfg: &AnswersConfig) -> Box<dyn AnswerSelector> {
    match cfg.selection {
        SelectionPolicy::First => Box::new(FirstCandidate),
        SelectionPolicy::Random => match cfg.seed {
            Some(seed) => Box::new(RandomCandidate::seeded(seed)),
            None => Box::new(RandomCandidate::from_entropy()),
        },
    }
}

/// Candidate list for `lang`, falling back to the Japanese list when the
/// requested one is absent or empty.
pub fn candidates_for(entry: &FaqEntry, lang: Language) -> &[String] {
    let preferred = entry.answers_in(lang);
    if preferred.is_empty() {
        entry.answers_in(Language::Japanese)
    } else {
        preferred
    }
}
