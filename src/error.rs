//! Error types for the seedlex extraction engine.

use std::path::PathBuf;
use thiserror::Error;

/// Kind of per-language resource a lookup can fail on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Stopword list.
    Stopwords,
    /// Tokenizer profile.
    Tokenizer,
    /// General-language word frequency table.
    Frequency,
    /// Lemma table or tagger.
    Lemma,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Stopwords => "stopwords",
            ResourceKind::Tokenizer => "tokenizer",
            ResourceKind::Frequency => "frequency",
            ResourceKind::Lemma => "lemma",
        };
        f.write_str(name)
    }
}

/// The main error type for seedlex operations.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Exceptionalism weight outside of [0, 1].
    #[error("Invalid weight {0}: must be a value between 0.0 and 1.0")]
    InvalidWeight(f64),

    /// Expected language is not a usable ISO-639 code.
    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),

    /// A per-language resource does not exist.
    #[error("No {kind} resource for language '{language}'")]
    ResourceUnavailable {
        /// Which resource was missing.
        kind: ResourceKind,
        /// The language code that was looked up.
        language: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Snapshot file is corrupt or has an unknown layout.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// No snapshot exists for a case.
    #[error("No snapshot found in {0}")]
    SnapshotNotFound(PathBuf),

    /// Malformed line in a resource file.
    #[error("Malformed resource {path}:{line}: {reason}")]
    MalformedResource {
        /// Resource file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// The run was cancelled through its cancellation flag.
    #[error("Extraction cancelled")]
    Cancelled,
}

impl ExtractError {
    /// Returns true for errors that are recovered locally by a fallback.
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(self, ExtractError::ResourceUnavailable { .. })
    }
}

/// Result type alias for seedlex operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

impl From<bincode::Error> for ExtractError {
    fn from(err: bincode::Error) -> Self {
        ExtractError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        ExtractError::Serialization(err.to_string())
    }
}
