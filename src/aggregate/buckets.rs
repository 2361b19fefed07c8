//! The language → term → statistics map.

use crate::language::LanguageCode;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Statistics of one term in one language bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenStat {
    /// Occurrences in the corpus. At least 1 for every stored entry.
    pub occurrences: u64,
    /// Occurrence share normalized to [0, 1].
    pub frequency: f64,
    /// Rarity in general language, in [0, 1].
    pub exceptionalism: f64,
    /// Combined score.
    pub score: f64,
}

impl TokenStat {
    fn with_occurrences(occurrences: u64) -> Self {
        Self {
            occurrences,
            frequency: 0.0,
            exceptionalism: 0.0,
            score: 0.0,
        }
    }
}

/// Per-language term statistics.
///
/// Reads never create entries: [`LanguageBuckets::get`] returns `None` for
/// unknown keys. Entries are created only by [`LanguageBuckets::record`],
/// always with at least one occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageBuckets {
    buckets: BTreeMap<LanguageCode, HashMap<String, TokenStat>>,
}

impl LanguageBuckets {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an entry.
    pub fn get(&self, language: &LanguageCode, term: &str) -> Option<&TokenStat> {
        self.buckets.get(language)?.get(term)
    }

    /// Looks up an entry for modification.
    pub fn get_mut(&mut self, language: &LanguageCode, term: &str) -> Option<&mut TokenStat> {
        self.buckets.get_mut(language)?.get_mut(term)
    }

    /// Returns the entry for `(language, term)`, inserting one with
    /// `occurrences` occurrences if it does not exist yet.
    pub fn get_or_insert(&mut self, language: &LanguageCode, term: &str, occurrences: u64) -> &mut TokenStat {
        debug_assert!(occurrences >= 1);
        self.buckets
            .entry(language.clone())
            .or_default()
            .entry(term.to_string())
            .or_insert_with(|| TokenStat::with_occurrences(occurrences))
    }

    /// Adds `count` occurrences of `term` under `language`.
    pub fn record(&mut self, language: &LanguageCode, term: &str, count: u64) {
        if count == 0 {
            return;
        }
        let bucket = self.buckets.entry(language.clone()).or_default();
        match bucket.get_mut(term) {
            Some(stat) => stat.occurrences += count,
            None => {
                bucket.insert(term.to_string(), TokenStat::with_occurrences(count));
            }
        }
    }

    /// Removes an entry; an emptied bucket is dropped.
    pub fn remove(&mut self, language: &LanguageCode, term: &str) -> Option<TokenStat> {
        let bucket = self.buckets.get_mut(language)?;
        let removed = bucket.remove(term);
        if bucket.is_empty() {
            self.buckets.remove(language);
        }
        removed
    }

    /// Languages with at least one term, in code order.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.buckets.keys()
    }

    /// Terms of a language, sorted.
    pub fn terms(&self, language: &LanguageCode) -> Vec<&str> {
        let mut terms: Vec<&str> = self
            .buckets
            .get(language)
            .map(|bucket| bucket.keys().map(String::as_str).collect())
            .unwrap_or_default();
        terms.sort_unstable();
        terms
    }

    /// Terms present under both languages, sorted.
    pub fn shared_terms(&self, a: &LanguageCode, b: &LanguageCode) -> Vec<String> {
        let (Some(first), Some(second)) = (self.buckets.get(a), self.buckets.get(b)) else {
            return Vec::new();
        };
        let (small, large) = if first.len() <= second.len() {
            (first, second)
        } else {
            (second, first)
        };

        let mut shared: Vec<String> = small
            .keys()
            .filter(|term| large.contains_key(*term))
            .cloned()
            .collect();
        shared.sort_unstable();
        shared
    }

    /// Iterates over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&LanguageCode, &str, &TokenStat)> {
        self.buckets.iter().flat_map(|(lang, bucket)| {
            bucket
                .iter()
                .map(move |(term, stat)| (lang, term.as_str(), stat))
        })
    }

    /// Iterates mutably over all entries.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&LanguageCode, &str, &mut TokenStat)> {
        self.buckets.iter_mut().flat_map(|(lang, bucket)| {
            bucket
                .iter_mut()
                .map(move |(term, stat)| (lang, term.as_str(), stat))
        })
    }

    /// Number of entries across all languages.
    pub fn len(&self) -> usize {
        self.buckets.values().map(HashMap::len).sum()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(HashMap::is_empty)
    }

    /// Sum of occurrences over all entries.
    pub fn total_occurrences(&self) -> u64 {
        self.iter().map(|(_, _, stat)| stat.occurrences).sum()
    }

    /// Adds the occurrences of every entry of `other`.
    pub fn merge(&mut self, other: LanguageBuckets) {
        for (language, bucket) in other.buckets {
            for (term, stat) in bucket {
                self.record(&language, &term, stat.occurrences);
            }
        }
    }
}
