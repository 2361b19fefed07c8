//! Rarity of tokens in general language.

use crate::aggregate::LanguageBuckets;
use crate::error::Result;
use crate::frequency::FrequencySource;
use crate::language::LanguageCode;
use crate::scoring::check_cancelled;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::sync::atomic::AtomicBool;

/// Sets `exceptionalism = 1 - commonness / max_commonness` on every entry.
///
/// A language without a frequency table is looked up under `expected`
/// instead; if that fails as well the commonness is 0. When no entry has a
/// positive commonness, every exceptionalism is 0.
pub fn score_exceptionalism(
    buckets: &mut LanguageBuckets,
    source: &dyn FrequencySource,
    expected: &LanguageCode,
    cancel: Option<&AtomicBool>,
) -> Result<()> {
    let mut unresolved: BTreeSet<LanguageCode> = BTreeSet::new();
    let mut max = 0.0_f64;

    // First pass parks the raw commonness in each entry's own stat.
    for (language, term, stat) in buckets.iter_mut() {
        check_cancelled(cancel)?;
        let value = match lookup(source, term, language, expected) {
            Ok(value) => value,
            Err(e) => {
                if unresolved.insert(language.clone()) {
                    warn!("No frequency data for '{}': {}", language, e);
                }
                0.0
            }
        };
        max = max.max(value);
        stat.exceptionalism = value;
    }

    debug!(
        "Exceptionalism: {} entries, max commonness {:.6}",
        buckets.len(),
        max
    );

    for (_, _, stat) in buckets.iter_mut() {
        stat.exceptionalism = if max > 0.0 {
            (1.0 - stat.exceptionalism / max).clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    Ok(())
}

fn lookup(
    source: &dyn FrequencySource,
    term: &str,
    language: &LanguageCode,
    expected: &LanguageCode,
) -> Result<f64> {
    let value = match source.commonness(term, language) {
        Ok(value) => value,
        Err(e) if e.is_resource_unavailable() && language != expected => {
            debug!("Retrying '{}' as {} ({})", term, expected, e);
            source.commonness(term, expected)?
        }
        Err(e) => return Err(e),
    };

    if value.is_finite() {
        Ok(value.max(0.0))
    } else {
        Ok(0.0)
    }
}
