//! Score combination and final ordering.

use crate::aggregate::{LanguageBuckets, NumberCounts};
use crate::result::{NumberRecord, WordRecord};

/// Sets `score = weight * exceptionalism + (1 - weight) * frequency`.
pub fn combine_scores(buckets: &mut LanguageBuckets, weight: f64) {
    for (_, _, stat) in buckets.iter_mut() {
        stat.score = weight * stat.exceptionalism + (1.0 - weight) * stat.frequency;
    }
}

/// Words by descending score, ties by term then language.
pub fn rank_words(buckets: &LanguageBuckets) -> Vec<WordRecord> {
    let mut words: Vec<WordRecord> = buckets
        .iter()
        .map(|(language, term, stat)| WordRecord {
            term: term.to_string(),
            language: language.clone(),
            occurrences: stat.occurrences,
            frequency: stat.frequency,
            exceptionalism: stat.exceptionalism,
            score: stat.score,
        })
        .collect();

    words.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.term.cmp(&b.term))
            .then_with(|| a.language.cmp(&b.language))
    });
    words
}

/// Numbers by descending occurrences, ties by term.
pub fn rank_numbers(numbers: &NumberCounts) -> Vec<NumberRecord> {
    let mut ranked: Vec<NumberRecord> = numbers
        .iter()
        .map(|(term, occurrences)| NumberRecord {
            term: term.to_string(),
            occurrences,
        })
        .collect();

    ranked.sort_by(|a, b| b.occurrences.cmp(&a.occurrences).then_with(|| a.term.cmp(&b.term)));
    ranked
}
