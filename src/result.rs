//! Output records of an extraction run.

use crate::language::LanguageCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A ranked word token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    /// The lower-cased token.
    pub term: String,
    /// Language bucket the token ended up in.
    pub language: LanguageCode,
    /// Occurrences in the corpus, including merged false friends.
    pub occurrences: u64,
    /// Normalized in-corpus frequency.
    pub frequency: f64,
    /// Rarity in general language.
    pub exceptionalism: f64,
    /// Combined score the ranking is based on.
    pub score: f64,
}

impl fmt::Display for WordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Word({} [{}], occ: {}, freq: {:.5}, exc: {:.5}, sco: {:.5})",
            self.term, self.language, self.occurrences, self.frequency, self.exceptionalism, self.score
        )
    }
}

/// A ranked numeric token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRecord {
    /// The digits as they appeared.
    pub term: String,
    /// Occurrences in the corpus.
    pub occurrences: u64,
}

impl fmt::Display for NumberRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({}, occ: {})", self.term, self.occurrences)
    }
}

/// Ranked words and numbers extracted from one corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Words by descending score.
    pub words: Vec<WordRecord>,
    /// Numbers by descending occurrences.
    pub numbers: Vec<NumberRecord>,
}

impl ExtractionResult {
    /// Returns true if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.numbers.is_empty()
    }

    /// Word terms in rank order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.term.as_str())
    }

    /// Number terms in rank order.
    pub fn number_terms(&self) -> impl Iterator<Item = &str> {
        self.numbers.iter().map(|n| n.term.as_str())
    }
}
