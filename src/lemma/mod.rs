//! Reduction of inflected forms to their base form.
//!
//! Lemmatization is configured for a single language. A fragment in that
//! language is split on whitespace, tagged with a [`PosTagger`], and every
//! token is replaced by the [`Lemmatizer`]'s base form when one is known.

mod lemmatizer;
mod tagger;

pub use lemmatizer::{LemmaTable, Lemmatizer};
pub use tagger::{LexiconTagger, PosTag, PosTagger};

use crate::language::LanguageCode;
use log::trace;

/// A tagger and lemmatizer bound to the language they were built for.
pub struct Lemmatization {
    language: LanguageCode,
    tagger: Box<dyn PosTagger>,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl Lemmatization {
    /// Creates a lemmatization stage for `language`.
    pub fn new(
        language: impl Into<LanguageCode>,
        tagger: Box<dyn PosTagger>,
        lemmatizer: Box<dyn Lemmatizer>,
    ) -> Self {
        Self {
            language: language.into(),
            tagger,
            lemmatizer,
        }
    }

    /// Builds the default stage from a lemma table: the table doubles as the
    /// tagger's lexicon.
    pub fn from_table(language: impl Into<LanguageCode>, table: LemmaTable) -> Self {
        let tagger = LexiconTagger::from_table(&table);
        Self::new(language, Box::new(tagger), Box::new(table))
    }

    /// The language this stage applies to.
    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    /// Returns true if fragments in `code` should be lemmatized.
    pub fn applies_to(&self, code: &LanguageCode) -> bool {
        &self.language == code
    }

    /// Replaces every whitespace-separated token by its base form.
    ///
    /// Tokens without a known lemma are kept as they are.
    pub fn lemmatize(&self, text: &str) -> String {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let tags = self.tagger.tag(&tokens);

        tokens
            .iter()
            .zip(tags)
            .map(|(surface, tag)| match self.lemmatizer.lemma(surface, tag) {
                Some(lemma) => lemma,
                None => {
                    trace!("No lemma for '{}' ({:?})", surface, tag);
                    surface.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Debug for Lemmatization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lemmatization")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LemmaTable {
        LemmaTable::from_entries([
            ("Kühe", PosTag::Noun, "Kuh"),
            ("gingen", PosTag::Verb, "gehen"),
            ("schönsten", PosTag::Adjective, "schön"),
        ])
    }

    #[test]
    fn test_lemmatize_known_forms() {
        let stage = Lemmatization::from_table("de", table());
        assert_eq!(stage.lemmatize("Die Kühe gingen"), "Die Kuh gehen");
    }

    #[test]
    fn test_unknown_forms_kept() {
        let stage = Lemmatization::from_table("de", table());
        assert_eq!(stage.lemmatize("Hunde bellten laut"), "Hunde bellten laut");
    }

    #[test]
    fn test_applies_only_to_its_language() {
        let stage = Lemmatization::from_table("de", table());
        assert!(stage.applies_to(&LanguageCode::from("de")));
        assert!(!stage.applies_to(&LanguageCode::from("en")));
    }

    #[test]
    fn test_whitespace_collapsed() {
        let stage = Lemmatization::from_table("de", table());
        assert_eq!(stage.lemmatize("  Kühe\n\ngingen "), "Kuh gehen");
    }
}
