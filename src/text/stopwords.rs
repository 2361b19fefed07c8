//! Stopword lists per language.
//!
//! A list is the `stop-words` base list for the language (empty when the
//! crate has none), the two quote artifacts that platform exports leave
//! behind, and a curated set of frequent but uninformative words.

use log::debug;
use std::collections::{HashMap, HashSet};
use stop_words::LANGUAGE;

/// Quote artifacts produced by double quotes in exported posts.
pub const QUOTE_ARTIFACTS: [&str; 2] = ["``", "''"];

/// Frequent words missing from the base German list.
///
/// Built from the difference between the most common German words and the
/// base list; place names and emotionally loaded words were kept out.
const GERMAN_ADDITIONS: &[&str] = &[
    "etwa", "wer", "gerade", "bitte", "nie", "steht", "gehen", "sagen", "jahren", "beim", "sehen",
    "ersten", "stadt", "geht", "heute", "kommen", "erst", "recht", "bereits", "tag", "sei",
    "frage", "wirklich", "zeit", "wegen", "ja", "the", "gar", "ab", "wäre", "lassen", "warum",
    "drei", "neue", "müssen", "kommt", "viele", "sowie", "macht", "mal", "seit", "wurden",
    "wurde", "weiss", "jedoch", "dass", "konnte", "dafür", "genau", "immer", "hätte", "einfach",
    "jahre", "menschen", "neuen", "leben", "uhr", "gute", "ganz", "teil", "gut", "hast", "wohl",
    "gemacht", "dabei", "leute", "gibt", "besser", "mehr", "jahr", "geben", "of", "schon", "welt",
    "zwei", "vielleicht", "ende", "deutschland", "denen", "ziemlich",
];

/// Frequent words missing from the base English list.
const ENGLISH_ADDITIONS: &[&str] = &[
    "year", "first", "going", "never", "best", "old", "last", "way", "part", "may", "want",
    "world", "need", "man", "people", "like", "around", "another", "get", "work", "say", "think",
    "little", "take", "better", "i'm", "im", "good", "three", "still", "make", "great", "state",
    "day", "can't", "cant", "life", "used", "time", "must", "find", "since", "really", "us",
    "well", "would", "also", "got", "new", "see", "that's", "thats", "could", "home", "many",
    "always", "come", "right", "go", "years", "made", "one", "two", "said", "look", "long",
    "something", "high", "even", "much", "every", "know", "use", "back",
];

fn curated_additions(language_name: &str) -> &'static [&'static str] {
    match language_name {
        "german" => GERMAN_ADDITIONS,
        "english" => ENGLISH_ADDITIONS,
        _ => &[],
    }
}

fn base_language(language_name: &str) -> Option<LANGUAGE> {
    let lang = match language_name {
        "arabic" => LANGUAGE::Arabic,
        "danish" => LANGUAGE::Danish,
        "dutch" => LANGUAGE::Dutch,
        "english" => LANGUAGE::English,
        "finnish" => LANGUAGE::Finnish,
        "french" => LANGUAGE::French,
        "german" => LANGUAGE::German,
        "greek" | "modern greek (1453-)" => LANGUAGE::Greek,
        "hungarian" => LANGUAGE::Hungarian,
        "italian" => LANGUAGE::Italian,
        "norwegian" | "norwegian bokmål" => LANGUAGE::Norwegian,
        "portuguese" => LANGUAGE::Portuguese,
        "romanian" => LANGUAGE::Romanian,
        "russian" => LANGUAGE::Russian,
        "spanish" => LANGUAGE::Spanish,
        "swedish" => LANGUAGE::Swedish,
        "turkish" => LANGUAGE::Turkish,
        _ => return None,
    };
    Some(lang)
}

/// A set of lower-cased words to drop during tokenization.
#[derive(Debug, Clone, Default)]
pub struct StopwordList {
    words: HashSet<String>,
}

impl StopwordList {
    /// Builds the list for a lower-cased English language name.
    ///
    /// Languages without a base list get only the quote artifacts and any
    /// curated additions.
    pub fn for_language(language_name: &str) -> Self {
        let mut words: HashSet<String> = match base_language(language_name) {
            Some(lang) => stop_words::get(lang)
                .iter()
                .map(|word| word.to_lowercase())
                .collect(),
            None => {
                debug!("No stopwords available for '{}'", language_name);
                HashSet::new()
            }
        };

        words.extend(QUOTE_ARTIFACTS.iter().map(|w| w.to_string()));
        words.extend(curated_additions(language_name).iter().map(|w| w.to_string()));

        Self { words }
    }

    /// Creates a list from explicit words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Returns true if the lower-cased `word` is a stopword.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Stopword lists keyed by language name, built once per run.
#[derive(Debug)]
pub struct StopwordRegistry {
    lists: HashMap<String, StopwordList>,
    fallback: StopwordList,
}

impl Default for StopwordRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwordRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            lists: HashMap::new(),
            fallback: StopwordList::from_words(QUOTE_ARTIFACTS),
        }
    }

    /// Builds lists for every given language name.
    pub fn with_languages<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.prepare(name);
        }
        registry
    }

    /// Builds and caches the list for `language_name` if missing.
    pub fn prepare(&mut self, language_name: &str) -> &StopwordList {
        self.lists
            .entry(language_name.to_string())
            .or_insert_with(|| StopwordList::for_language(language_name))
    }

    /// Returns the list for a prepared language, or the quote-artifact-only
    /// list.
    pub fn get(&self, language_name: &str) -> &StopwordList {
        self.lists.get(language_name).unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_base_and_curated() {
        let list = StopwordList::for_language("english");
        assert!(list.contains("the"));
        assert!(list.contains("and"));
        assert!(list.contains("people"));
        assert!(list.contains("``"));
        assert!(!list.contains("cat"));
    }

    #[test]
    fn test_german_curated() {
        let list = StopwordList::for_language("german");
        assert!(list.contains("und"));
        assert!(list.contains("vielleicht"));
        assert!(!list.contains("hund"));
    }

    #[test]
    fn test_unknown_language_has_only_artifacts() {
        let list = StopwordList::for_language("klingon");
        assert_eq!(list.len(), 2);
        assert!(list.contains("''"));
    }

    #[test]
    fn test_registry_fallback() {
        let registry = StopwordRegistry::with_languages(["english"]);
        assert!(registry.get("english").contains("the"));
        assert!(!registry.get("german").contains("und"));
        assert!(registry.get("german").contains("``"));
    }
}
