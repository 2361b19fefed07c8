//! In-corpus frequency.

use crate::aggregate::LanguageBuckets;

/// Sets `frequency` to each entry's share of all occurrences, scaled so the
/// most frequent entry gets 1. Does nothing on an empty aggregate.
pub fn score_frequency(buckets: &mut LanguageBuckets) {
    let total = buckets.total_occurrences();
    if total == 0 {
        return;
    }
    let total = total as f64;

    let max_raw = buckets
        .iter()
        .map(|(_, _, stat)| stat.occurrences as f64 / total)
        .fold(0.0_f64, f64::max);

    for (_, _, stat) in buckets.iter_mut() {
        let raw = stat.occurrences as f64 / total;
        stat.frequency = raw / max_raw;
    }
}
