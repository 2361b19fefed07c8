//! Whole-aggregate scoring phases.
//!
//! The phases run in a fixed order over the aggregated buckets:
//! exceptionalism, in-corpus frequency, false-friend deduplication, and
//! finally score combination and ranking.

mod dedupe;
mod exceptionalism;
mod frequency;
mod rank;

pub use dedupe::{dedupe_false_friends, entry_wins};
pub use exceptionalism::score_exceptionalism;
pub use frequency::score_frequency;
pub use rank::{combine_scores, rank_numbers, rank_words};

use crate::error::{ExtractError, Result};
use std::sync::atomic::{AtomicBool, Ordering};

/// Fails with [`ExtractError::Cancelled`] once the flag is raised.
pub(crate) fn check_cancelled(flag: Option<&AtomicBool>) -> Result<()> {
    match flag {
        Some(flag) if flag.load(Ordering::Relaxed) => Err(ExtractError::Cancelled),
        _ => Ok(()),
    }
}
