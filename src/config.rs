//! Configuration for the seedlex extraction engine.

use crate::error::{ExtractError, Result};
use crate::language::LanguageCode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for an extraction run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language detection and fallback configuration.
    pub language: LanguageConfig,

    /// Text processing configuration.
    pub text: TextConfig,

    /// Scoring configuration.
    pub scoring: ScoringConfig,

    /// Storage configuration.
    pub storage: StorageConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing sections and fields take their default values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ExtractError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Checks the configuration before any fragment is processed.
    pub fn validate(&self) -> Result<()> {
        self.language.validate()?;
        self.scoring.validate()?;

        if self.text.min_token_length == 0 {
            return Err(ExtractError::Config(
                "min_token_length must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Language detection and fallback configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Language substituted when detection fails or yields an unsupported
    /// code. Also used for name, tokenizer and frequency fallbacks.
    /// Default: "de".
    pub expected_language: String,

    /// Codes the classifier may return that have no text resources
    /// (logographic scripts). Default: ja, ko, zh, yue, cmn.
    pub unsupported_languages: Vec<String>,

    /// Language whose fragments are lemmatized before filtering.
    /// Default: Some("de").
    pub lemmatized_language: Option<String>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            expected_language: "de".to_string(),
            unsupported_languages: ["ja", "ko", "zh", "yue", "cmn"]
                .iter()
                .map(|code| code.to_string())
                .collect(),
            lemmatized_language: Some("de".to_string()),
        }
    }
}

impl LanguageConfig {
    /// Returns true if `code` is in the unsupported set.
    pub fn is_unsupported(&self, code: &str) -> bool {
        self.unsupported_languages.iter().any(|c| c == code)
    }

    /// Validates the expected language.
    pub fn validate(&self) -> Result<()> {
        let code = &self.expected_language;
        if LanguageCode::new(code.clone()).language().is_none() || self.is_unsupported(code) {
            return Err(ExtractError::InvalidLanguage(code.clone()));
        }
        Ok(())
    }
}

/// Text processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Minimum token length in characters.
    /// Default: 3.
    pub min_token_length: usize,

    /// Process fragments on the rayon thread pool.
    /// Default: true.
    pub parallel: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            min_token_length: 3,
            parallel: true,
        }
    }
}

/// Scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of exceptionalism in the final score; the in-corpus
    /// frequency gets `1 - weight`.
    /// Default: 0.5.
    pub exceptionalism_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            exceptionalism_weight: 0.5,
        }
    }
}

impl ScoringConfig {
    /// Validates the weight.
    pub fn validate(&self) -> Result<()> {
        let w = self.exceptionalism_weight;
        if !w.is_finite() || !(0.0..=1.0).contains(&w) {
            return Err(ExtractError::InvalidWeight(w));
        }
        Ok(())
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Root directory; each case gets a subdirectory.
    /// Default: "data".
    pub output_dir: PathBuf,

    /// Also write a human-readable text snapshot next to the binary one.
    /// Default: false.
    pub text_snapshots: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data"),
            text_snapshots: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.language.expected_language, "de");
        assert_eq!(config.text.min_token_length, 3);
        assert_eq!(config.scoring.exceptionalism_weight, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_weight_out_of_range() {
        let mut config = Config::default();
        config.scoring.exceptionalism_weight = 1.2;
        assert!(matches!(config.validate(), Err(ExtractError::InvalidWeight(_))));

        config.scoring.exceptionalism_weight = f64::NAN;
        assert!(matches!(config.validate(), Err(ExtractError::InvalidWeight(_))));

        config.scoring.exceptionalism_weight = 0.0;
        assert!(config.validate().is_ok());
        config.scoring.exceptionalism_weight = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_expected_language() {
        let mut config = Config::default();
        config.language.expected_language = "qq".to_string();
        assert!(matches!(config.validate(), Err(ExtractError::InvalidLanguage(_))));

        config.language.expected_language = "ja".to_string();
        assert!(matches!(config.validate(), Err(ExtractError::InvalidLanguage(_))));

        config.language.expected_language = "eng".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_min_length_rejected() {
        let mut config = Config::default();
        config.text.min_token_length = 0;
        assert!(matches!(config.validate(), Err(ExtractError::Config(_))));
    }

    #[test]
    fn test_partial_json() {
        let config: Config =
            serde_json::from_str(r#"{ "scoring": { "exceptionalism_weight": 0.8 } }"#).unwrap();
        assert_eq!(config.scoring.exceptionalism_weight, 0.8);
        assert_eq!(config.language.expected_language, "de");
        assert!(config.text.parallel);
    }
}
