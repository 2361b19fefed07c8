//! # seedlex - Expression Extraction & Scoring Engine
//!
//! seedlex turns a corpus of short, user-authored text fragments (postings
//! of one subject) into ranked candidate tokens for password-guessing
//! dictionaries.
//!
//! ## Overview
//!
//! Every fragment is classified by language, normalized, optionally
//! lemmatized, tokenized and stripped of stopwords. The surviving tokens are
//! counted per language. Each distinct token is then scored by combining
//! how rare it is in general language ("exceptionalism") with its share of
//! the corpus, after tokens shared between languages ("false friends") have
//! been merged.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use seedlex::{Config, ExpressionExtractor, WhatlangClassifier, WordFreqLexicon};
//!
//! let frequencies = WordFreqLexicon::bundled()?;
//! let extractor = ExpressionExtractor::new(
//!     Config::default(),
//!     Box::new(WhatlangClassifier::new()),
//!     Box::new(frequencies),
//! )?;
//!
//! let result = extractor.extract(&["Endlich Urlaub in Reykjavík!", "Fernweh 2019"])?;
//! for word in result.words.iter().take(10) {
//!     println!("{}", word);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`language`] - Language classification and fallback
//! - [`text`] - Normalization, tokenization and stopwords
//! - [`lemma`] - Part-of-speech tagging and lemma lookup
//! - [`frequency`] - General-language frequency resources
//! - [`corpus`] - Reading corpus files
//! - [`aggregate`] - Per-language occurrence counts
//! - [`scoring`] - Exceptionalism, frequency, deduplication and ranking
//! - [`pipeline`] - The extractor tying the stages together
//! - [`storage`] - Snapshots of extraction results
//! - [`output`] - Word lists and mangling rules
//!
//! ## Generating Cracking Input
//!
//! ```rust,ignore
//! use seedlex::{LineOutput, RuleGenerator, SnapshotStore, WordListGenerator};
//!
//! let store = SnapshotStore::new("data");
//! let result = store.load_latest("case-17")?;
//! let dir = store.case_dir("case-17")?;
//! WordListGenerator::from_result(&result).write_to_dir(&dir)?;
//! RuleGenerator::from_result(&result).write_to_dir(&dir)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod config;
pub mod corpus;
pub mod error;
pub mod frequency;
pub mod language;
pub mod lemma;
pub mod output;
pub mod pipeline;
pub mod result;
pub mod scoring;
pub mod storage;
pub mod text;

// Re-export commonly used types
pub use aggregate::{Aggregate, FragmentTokens, LanguageBuckets, NumberCounts, TokenStat};
pub use config::{Config, LanguageConfig, ScoringConfig, StorageConfig, TextConfig};
pub use corpus::read_corpus;
pub use error::{ExtractError, ResourceKind, Result};
pub use frequency::{FrequencySource, WordFreqLexicon};
pub use language::{Classification, FixedClassifier, LanguageClassifier, LanguageCode, WhatlangClassifier};
pub use lemma::{LemmaTable, Lemmatization, Lemmatizer, LexiconTagger, PosTag, PosTagger};
pub use output::{LineOutput, RuleGenerator, WordListGenerator};
pub use pipeline::ExpressionExtractor;
pub use result::{ExtractionResult, NumberRecord, WordRecord};
pub use storage::SnapshotStore;
pub use text::{Normalizer, StopwordList, Tokenizer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
