//! Corpus-wide accumulation of token and number occurrences.
//!
//! Accumulation only adds counts, so the aggregate of a corpus does not
//! depend on the order in which fragments are folded in, and aggregates of
//! disjoint parts of a corpus can be merged.

mod buckets;

pub use buckets::{LanguageBuckets, TokenStat};

use crate::language::LanguageCode;
use std::collections::{BTreeMap, HashMap};

/// The surviving tokens of one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentTokens {
    /// Language the fragment was processed as.
    pub language: LanguageCode,
    /// Word tokens in order of appearance.
    pub words: Vec<String>,
    /// Numeric tokens in order of appearance.
    pub numbers: Vec<String>,
}

/// Occurrence counts of numeric tokens, independent of language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberCounts {
    counts: HashMap<String, u64>,
}

impl NumberCounts {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` occurrences of `number`.
    pub fn record(&mut self, number: &str, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(number.to_string()).or_insert(0) += count;
    }

    /// Occurrences of `number`, if it was seen.
    pub fn get(&self, number: &str) -> Option<u64> {
        self.counts.get(number).copied()
    }

    /// Iterates over `(number, occurrences)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(n, &c)| (n.as_str(), c))
    }

    /// Number of distinct numbers.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no number was seen.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Adds all counts of `other`.
    pub fn merge(&mut self, other: NumberCounts) {
        for (number, count) in other.counts {
            *self.counts.entry(number).or_insert(0) += count;
        }
    }
}

/// Word buckets and number counts of a corpus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    /// Per-language word statistics.
    pub words: LanguageBuckets,
    /// Numeric token counts.
    pub numbers: NumberCounts,
}

impl Aggregate {
    /// Creates an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one fragment's tokens in.
    pub fn add_fragment(&mut self, fragment: &FragmentTokens) {
        for word in &fragment.words {
            self.words.record(&fragment.language, word, 1);
        }
        for number in &fragment.numbers {
            self.numbers.record(number, 1);
        }
    }

    /// Merges two aggregates by summing their counts.
    pub fn merge(mut self, other: Aggregate) -> Aggregate {
        self.words.merge(other.words);
        self.numbers.merge(other.numbers);
        self
    }

    /// Returns true if neither words nor numbers were recorded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.numbers.is_empty()
    }

    /// Occurrence counts keyed by `(language, term)`, in sorted order.
    ///
    /// Scores are left out, which makes this the value to compare when
    /// checking that two runs counted the same thing.
    pub fn occurrence_table(&self) -> BTreeMap<(LanguageCode, String), u64> {
        self.words
            .iter()
            .map(|(lang, term, stat)| ((lang.clone(), term.to_string()), stat.occurrences))
            .collect()
    }
}

impl FromIterator<FragmentTokens> for Aggregate {
    fn from_iter<I: IntoIterator<Item = FragmentTokens>>(iter: I) -> Self {
        let mut aggregate = Aggregate::new();
        for fragment in iter {
            aggregate.add_fragment(&fragment);
        }
        aggregate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(lang: &str, words: &[&str], numbers: &[&str]) -> FragmentTokens {
        FragmentTokens {
            language: LanguageCode::from(lang),
            words: words.iter().map(|w| w.to_string()).collect(),
            numbers: numbers.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn test_add_fragment() {
        let mut aggregate = Aggregate::new();
        aggregate.add_fragment(&fragment("en", &["cat", "sat"], &["2019"]));
        aggregate.add_fragment(&fragment("en", &["dog", "sat"], &["2019", "123"]));

        let en = LanguageCode::from("en");
        assert_eq!(aggregate.words.get(&en, "sat").unwrap().occurrences, 2);
        assert_eq!(aggregate.words.get(&en, "cat").unwrap().occurrences, 1);
        assert_eq!(aggregate.numbers.get("2019"), Some(2));
        assert_eq!(aggregate.numbers.get("123"), Some(1));
    }

    #[test]
    fn test_merge_matches_sequential() {
        let fragments = vec![
            fragment("en", &["cat", "sat"], &["42"]),
            fragment("de", &["hund", "fast"], &[]),
            fragment("en", &["fast", "cat"], &["42", "7777"]),
        ];

        let sequential: Aggregate = fragments.clone().into_iter().collect();

        let left: Aggregate = fragments[..1].iter().cloned().collect();
        let right: Aggregate = fragments[1..].iter().cloned().collect();
        let merged = right.merge(left);

        assert_eq!(sequential.occurrence_table(), merged.occurrence_table());
        assert_eq!(sequential.numbers, merged.numbers);
    }

    #[test]
    fn test_empty() {
        let aggregate = Aggregate::new();
        assert!(aggregate.is_empty());
        assert!(aggregate.occurrence_table().is_empty());
    }
}
