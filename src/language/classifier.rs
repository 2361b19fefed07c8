//! Language classification with fallback to the expected language.

use crate::config::LanguageConfig;
use crate::language::LanguageCode;
use isolang::Language;
use log::debug;

/// A classifier's best guess for one fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Detected language code.
    pub code: LanguageCode,
    /// Detector confidence in [0, 1].
    pub confidence: f64,
}

/// Identifies the language of a text fragment.
///
/// Implementations are constructed once and shared across fragments, so
/// they must be safe to call from several threads.
pub trait LanguageClassifier: Send + Sync {
    /// Returns the most probable language, or `None` if the text gives no
    /// usable signal.
    fn classify(&self, text: &str) -> Option<Classification>;
}

/// Trigram classifier backed by `whatlang`.
///
/// Codes are reported as ISO-639-1 where the language has one and as
/// ISO-639-3 otherwise (e.g. "cmn" for Mandarin).
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangClassifier;

impl WhatlangClassifier {
    /// Creates a new classifier.
    pub fn new() -> Self {
        Self
    }
}

impl LanguageClassifier for WhatlangClassifier {
    fn classify(&self, text: &str) -> Option<Classification> {
        let info = whatlang::detect(text)?;
        let code3 = info.lang().code();
        let code = Language::from_639_3(code3)
            .and_then(|lang| lang.to_639_1())
            .unwrap_or(code3);

        Some(Classification {
            code: LanguageCode::new(code),
            confidence: info.confidence(),
        })
    }
}

/// Classifier that reports the same language for every fragment.
///
/// Useful when the corpus language is known up front.
#[derive(Debug, Clone)]
pub struct FixedClassifier {
    code: LanguageCode,
}

impl FixedClassifier {
    /// Creates a classifier that always answers `code`.
    pub fn new(code: impl Into<LanguageCode>) -> Self {
        Self { code: code.into() }
    }
}

impl LanguageClassifier for FixedClassifier {
    fn classify(&self, _text: &str) -> Option<Classification> {
        Some(Classification {
            code: self.code.clone(),
            confidence: 1.0,
        })
    }
}

/// Resolves the language used for all downstream processing of a fragment.
///
/// Unsupported or undetectable fragments get the expected language. Any
/// other code is passed through unvalidated.
pub fn resolve_language(
    classifier: &dyn LanguageClassifier,
    fragment: &str,
    config: &LanguageConfig,
) -> LanguageCode {
    let single_line = fragment.replace('\n', " ");

    match classifier.classify(&single_line) {
        Some(c) if !config.is_unsupported(c.code.as_str()) => c.code,
        Some(c) => {
            debug!(
                "Language '{}' is unsupported, using '{}' instead",
                c.code, config.expected_language
            );
            LanguageCode::new(config.expected_language.clone())
        }
        None => LanguageCode::new(config.expected_language.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_substituted() {
        let config = LanguageConfig::default();
        let classifier = FixedClassifier::new("ja");
        assert_eq!(resolve_language(&classifier, "text", &config).as_str(), "de");
    }

    #[test]
    fn test_unknown_code_passes_through() {
        let config = LanguageConfig::default();
        let classifier = FixedClassifier::new("xx");
        assert_eq!(resolve_language(&classifier, "text", &config).as_str(), "xx");
    }

    #[test]
    fn test_no_detection_uses_expected() {
        struct Silent;
        impl LanguageClassifier for Silent {
            fn classify(&self, _text: &str) -> Option<Classification> {
                None
            }
        }
        let mut config = LanguageConfig::default();
        config.expected_language = "en".to_string();
        assert_eq!(resolve_language(&Silent, "", &config).as_str(), "en");
    }

    #[test]
    fn test_whatlang_english() {
        let classifier = WhatlangClassifier::new();
        let result = classifier
            .classify("The quick brown fox jumps over the lazy dog and runs far away into the forest")
            .expect("detection failed");
        assert_eq!(result.code.as_str(), "en");
        assert!(result.confidence > 0.0);
    }

    #[test]
    fn test_whatlang_mandarin_is_unsupported() {
        let config = LanguageConfig::default();
        let classifier = WhatlangClassifier::new();
        let code = resolve_language(&classifier, "我们今天去公园散步，天气非常好，大家都很开心。", &config);
        assert_eq!(code.as_str(), "de");
    }
}
