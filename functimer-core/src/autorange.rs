//! AutoRanger - adaptive repetition count
//!
//! Walks the 1-2-5 progression (1, 2, 5, 10, 20, 50, ...) and stops at the
//! first count whose batch takes at least `min_time`. Every count above 5 is
//! therefore a multiple of 10.

use crate::error::TimeitError;
use crate::invoker::Measure;

/// Outcome of the search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoRange {
    /// Chosen repetition count
    pub number: u64,
    /// Batch duration measured for `number`
    pub elapsed: f64,
}

/// The 1-2-5 progression, ascending.
///
/// Ends only when the next value would overflow `u64`.
pub fn candidates() -> impl Iterator<Item = u64> {
    std::iter::successors(Some(1_u64), |&power| power.checked_mul(10))
        .flat_map(|power| [1_u64, 2, 5].into_iter().filter_map(move |m| power.checked_mul(m)))
}

/// Find the smallest candidate whose batch lasts at least `min_time`.
///
/// If even the largest representable candidate is too fast, that candidate
/// is returned with its measurement.
pub fn autorange<M: Measure>(measure: &mut M, min_time: f64) -> Result<AutoRange, TimeitError> {
    let mut last = None;
    for number in candidates() {
        let elapsed = measure.measure(number)?;
        tracing::debug!(number, elapsed, min_time, "autorange candidate");
        let range = AutoRange { number, elapsed };
        if elapsed >= min_time {
            return Ok(range);
        }
        last = Some(range);
    }
    // candidates() is never empty
    Ok(last.unwrap_or(AutoRange {
        number: 1,
        elapsed: 0.0,
    }))
}
