//! Flat word lists.

use crate::output::LineOutput;
use crate::result::ExtractionResult;

/// The extracted words in rank order, one term per line.
#[derive(Debug, Clone, Default)]
pub struct WordListGenerator {
    terms: Vec<String>,
}

impl WordListGenerator {
    /// Collects the word terms of `result`. Numbers are left to the rules.
    pub fn from_result(result: &ExtractionResult) -> Self {
        Self {
            terms: result.terms().map(str::to_string).collect(),
        }
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl LineOutput for WordListGenerator {
    const PREFIX: &'static str = "word_list";
    const EXTENSION: &'static str = "txt";

    fn lines(&self) -> &[String] {
        &self.terms
    }
}
