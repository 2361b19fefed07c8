//! Reconciliation of false friends.
//!
//! A term present under two languages is kept only under the language
//! where it is rarer in general use; the other entry's occurrences are
//! added to it.

use crate::aggregate::{LanguageBuckets, TokenStat};
use crate::language::LanguageCode;
use log::debug;

/// Returns true if entry `a` (under `lang_a`) absorbs entry `b`.
///
/// Higher exceptionalism wins, then more occurrences, then the language
/// code that sorts first.
pub fn entry_wins(a: &TokenStat, lang_a: &LanguageCode, b: &TokenStat, lang_b: &LanguageCode) -> bool {
    a.exceptionalism
        .total_cmp(&b.exceptionalism)
        .then(a.occurrences.cmp(&b.occurrences))
        .then(lang_b.cmp(lang_a))
        .is_ge()
}

/// Merges every term shared by two language buckets into one entry.
///
/// Returns the number of entries removed. Frequency and exceptionalism of
/// the surviving entry are left as they were.
pub fn dedupe_false_friends(buckets: &mut LanguageBuckets) -> usize {
    let languages: Vec<LanguageCode> = buckets.languages().cloned().collect();
    let mut removed = 0;

    for (i, first) in languages.iter().enumerate() {
        for second in &languages[i + 1..] {
            for term in buckets.shared_terms(first, second) {
                let (Some(a), Some(b)) = (buckets.get(first, &term), buckets.get(second, &term)) else {
                    continue;
                };
                let (winner, loser) = if entry_wins(a, first, b, second) {
                    (first, second)
                } else {
                    (second, first)
                };

                if let Some(lost) = buckets.remove(loser, &term) {
                    if let Some(kept) = buckets.get_mut(winner, &term) {
                        kept.occurrences += lost.occurrences;
                    }
                    debug!("False friend '{}': {} -> {}", term, loser, winner);
                    removed += 1;
                }
            }
        }
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(buckets: &mut LanguageBuckets, lang: &LanguageCode, term: &str, occ: u64, exc: f64) {
        buckets.record(lang, term, occ);
        if let Some(stat) = buckets.get_mut(lang, term) {
            stat.exceptionalism = exc;
        }
    }

    #[test]
    fn test_rarer_language_absorbs() {
        let en = LanguageCode::from("en");
        let de = LanguageCode::from("de");
        let mut buckets = LanguageBuckets::new();
        set(&mut buckets, &de, "fast", 1, 0.2);
        set(&mut buckets, &en, "fast", 3, 0.9);
        set(&mut buckets, &de, "hund", 1, 0.5);

        assert_eq!(dedupe_false_friends(&mut buckets), 1);
        assert!(buckets.get(&de, "fast").is_none());
        assert_eq!(buckets.get(&en, "fast").unwrap().occurrences, 4);
        assert!(buckets.get(&de, "hund").is_some());
    }

    #[test]
    fn test_ties() {
        let en = LanguageCode::from("en");
        let de = LanguageCode::from("de");
        let mut buckets = LanguageBuckets::new();
        set(&mut buckets, &de, "kind", 1, 0.5);
        set(&mut buckets, &en, "kind", 2, 0.5);
        set(&mut buckets, &de, "rock", 2, 0.5);
        set(&mut buckets, &en, "rock", 2, 0.5);

        dedupe_false_friends(&mut buckets);

        // More occurrences wins.
        assert_eq!(buckets.get(&en, "kind").unwrap().occurrences, 3);
        assert!(buckets.get(&de, "kind").is_none());
        // Full tie: the code that sorts first wins.
        assert_eq!(buckets.get(&de, "rock").unwrap().occurrences, 4);
        assert!(buckets.get(&en, "rock").is_none());
    }

    #[test]
    fn test_three_languages_leave_one_entry() {
        let mut buckets = LanguageBuckets::new();
        let langs = ["de", "en", "nl"].map(LanguageCode::from);
        set(&mut buckets, &langs[0], "hand", 1, 0.3);
        set(&mut buckets, &langs[1], "hand", 1, 0.1);
        set(&mut buckets, &langs[2], "hand", 1, 0.7);

        dedupe_false_friends(&mut buckets);

        let holders: Vec<&LanguageCode> = langs
            .iter()
            .filter(|lang| buckets.get(lang, "hand").is_some())
            .collect();
        assert_eq!(holders, vec![&langs[2]]);
        assert_eq!(buckets.get(&langs[2], "hand").unwrap().occurrences, 3);
    }
}
