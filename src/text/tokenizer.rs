//! Language-aware tokenization and filtering.

use crate::config::TextConfig;
use crate::text::StopwordList;
use log::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Languages with a dedicated tokenizer profile.
const PROFILED_LANGUAGES: &[&str] = &[
    "czech", "danish", "dutch", "english", "estonian", "finnish", "french", "german", "greek",
    "italian", "norwegian", "polish", "portuguese", "russian", "slovene", "slovenian", "spanish",
    "swedish", "turkish", "azerbaijani",
];

/// Lower-casing rules of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    /// Unicode default lower-casing.
    Standard,
    /// Dotted/dotless I rules: `I` lowers to `ı` and `İ` lowers to `i`.
    Turkic,
}

/// Tokenization rules for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerProfile {
    language: &'static str,
    casing: Casing,
}

impl TokenizerProfile {
    /// Returns the profile registered for a lower-cased language name.
    pub fn for_language(language_name: &str) -> Option<Self> {
        let language = PROFILED_LANGUAGES
            .iter()
            .copied()
            .find(|name| *name == language_name)?;

        let casing = match language {
            "turkish" | "azerbaijani" => Casing::Turkic,
            _ => Casing::Standard,
        };

        Some(Self { language, casing })
    }

    /// The generic profile used when a language has none.
    pub fn generic() -> Self {
        Self {
            language: "english",
            casing: Casing::Standard,
        }
    }

    /// Language this profile belongs to.
    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Splits text on Unicode word boundaries.
    pub fn words<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> {
        text.unicode_words()
    }

    /// Lower-cases a token according to the profile.
    pub fn lowercase(&self, token: &str) -> String {
        match self.casing {
            Casing::Standard => token.to_lowercase(),
            Casing::Turkic => token
                .chars()
                .map(|c| match c {
                    'I' => 'ı'.to_string(),
                    'İ' => 'i'.to_string(),
                    other => other.to_lowercase().to_string(),
                })
                .collect(),
        }
    }
}

/// Returns true if the token is made of ASCII digits only.
#[inline]
pub fn is_number(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// Tokenizer that lower-cases, drops stopwords and short tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    min_token_length: usize,
}

impl Tokenizer {
    /// Creates a new tokenizer with the given configuration.
    pub fn new(config: &TextConfig) -> Self {
        Self {
            min_token_length: config.min_token_length,
        }
    }

    /// Creates a tokenizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(&TextConfig::default())
    }

    /// Minimum token length in characters.
    pub fn min_token_length(&self) -> usize {
        self.min_token_length
    }

    /// Returns the profile for `language_name`, degrading to the generic
    /// profile.
    pub fn profile(&self, language_name: &str) -> TokenizerProfile {
        TokenizerProfile::for_language(language_name).unwrap_or_else(|| {
            debug!(
                "Tokenizer for '{}' not found, using english tokenizer instead",
                language_name
            );
            TokenizerProfile::generic()
        })
    }

    /// Tokenizes normalized text and returns the surviving lower-cased
    /// tokens in order.
    pub fn tokenize(&self, text: &str, language_name: &str, stopwords: &StopwordList) -> Vec<String> {
        let profile = self.profile(language_name);

        profile
            .words(text)
            .map(|word| profile.lowercase(word))
            .filter(|token| !stopwords.contains(token))
            .filter(|token| token.chars().count() >= self.min_token_length)
            .collect()
    }
}

/// Splits tokens into words and numbers, preserving order.
pub fn separate_numbers(tokens: Vec<String>) -> (Vec<String>, Vec<String>) {
    tokens.into_iter().partition(|token| !is_number(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english_stopwords() -> StopwordList {
        StopwordList::from_words(["the", "and", "is"])
    }

    #[test]
    fn test_tokenize_filters_stopwords() {
        let tokenizer = Tokenizer::default_config();
        let tokens = tokenizer.tokenize("The cat and the dog", "english", &english_stopwords());
        assert_eq!(tokens, vec!["cat", "dog"]);
    }

    #[test]
    fn test_min_length_filter() {
        let tokenizer = Tokenizer::default_config();
        let tokens = tokenizer.tokenize("an ox ate hay", "english", &StopwordList::default());
        assert_eq!(tokens, vec!["ate", "hay"]);
    }

    #[test]
    fn test_length_counts_characters() {
        let tokenizer = Tokenizer::default_config();
        let tokens = tokenizer.tokenize("öl über", "german", &StopwordList::default());
        assert_eq!(tokens, vec!["über"]);
    }

    #[test]
    fn test_unknown_language_uses_generic_profile() {
        let tokenizer = Tokenizer::default_config();
        assert_eq!(tokenizer.profile("klingon"), TokenizerProfile::generic());
        let tokens = tokenizer.tokenize("Qapla batlh", "klingon", &StopwordList::default());
        assert_eq!(tokens, vec!["qapla", "batlh"]);
    }

    #[test]
    fn test_turkic_casing() {
        let profile = TokenizerProfile::for_language("turkish").unwrap();
        assert_eq!(profile.lowercase("ISTANBUL"), "ıstanbul");
        assert_eq!(profile.lowercase("İzmir"), "izmir");

        let generic = TokenizerProfile::generic();
        assert_eq!(generic.lowercase("IRMAK"), "irmak");
    }

    #[test]
    fn test_separate_numbers() {
        let tokens = vec!["2019".to_string(), "cat".to_string(), "abc123".to_string()];
        let (words, numbers) = separate_numbers(tokens);
        assert_eq!(words, vec!["cat", "abc123"]);
        assert_eq!(numbers, vec!["2019"]);
    }

    #[test]
    fn test_is_number() {
        assert!(is_number("007"));
        assert!(!is_number(""));
        assert!(!is_number("12a"));
    }
}
