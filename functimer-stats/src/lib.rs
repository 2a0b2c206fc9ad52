#![warn(missing_docs)]
//! Functimer Statistical Reduction
//!
//! Reduces per-call times from repeated trials to the handful of numbers a
//! timing report needs:
//! - Best (minimum) and worst (maximum) per-call time
//! - Arithmetic mean
//! - Sample standard deviation (zero for a single trial)
//!
//! Everything here is pure arithmetic on `f64` slices; unit conversion and
//! rendering happen in `functimer-report`.

mod summary;

pub use summary::{TrialSummary, compute_summary, per_call_times};
