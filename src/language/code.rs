//! ISO-639 language codes.

use isolang::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A short language identifier as produced by a classifier or configured as
/// the expected language.
///
/// The code is kept verbatim: an unknown code is still a valid bucket key,
/// and each consumer decides on its own fallback when it cannot resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Creates a new language code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the code through ISO-639-1 (two letters) or ISO-639-3
    /// (anything else).
    pub fn language(&self) -> Option<Language> {
        match self.0.len() {
            2 => Language::from_639_1(&self.0),
            _ => Language::from_639_3(&self.0),
        }
    }

    /// Returns the lower-cased English language name, e.g. "german".
    pub fn name(&self) -> Option<String> {
        self.language().map(|lang| lang.to_name().to_lowercase())
    }

    /// Returns the other ISO form of the same language, if any.
    ///
    /// "de" yields "deu" and "deu" yields "de".
    pub fn alternate(&self) -> Option<LanguageCode> {
        let lang = self.language()?;
        let other = if self.0.len() == 2 {
            Some(lang.to_639_3())
        } else {
            lang.to_639_1()
        };
        other
            .filter(|code| *code != self.0)
            .map(LanguageCode::new)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
