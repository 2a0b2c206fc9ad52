//! Summary Statistics
//!
//! Computed over per-call times (batch duration / repetition count).

use serde::{Deserialize, Serialize};

/// Reduction of one multi-trial run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrialSummary {
    /// Fastest per-call time
    pub best: f64,
    /// Slowest per-call time
    pub worst: f64,
    /// Arithmetic mean per-call time
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); 0 for one trial
    pub std_dev: f64,
    /// Trials reduced
    pub trials: usize,
}

/// Divide each batch duration by the number of calls it contained
pub fn per_call_times(times: &[f64], number: u64) -> Vec<f64> {
    let number = number as f64;
    times.iter().map(|t| t / number).collect()
}

/// Reduce per-call times.
///
/// An empty slice yields an all-zero summary.
pub fn compute_summary(per_call: &[f64]) -> TrialSummary {
    if per_call.is_empty() {
        return TrialSummary::default();
    }

    let n = per_call.len();
    let mean = per_call.iter().sum::<f64>() / n as f64;

    let std_dev = if n < 2 {
        0.0
    } else {
        let variance = per_call.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    };

    let best = per_call.iter().copied().fold(f64::INFINITY, f64::min);
    let worst = per_call.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    TrialSummary {
        best,
        worst,
        mean,
        std_dev,
        trials: n,
    }
}

impl TrialSummary {
    /// Coefficient of variation (relative stddev, percent)
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            (self.std_dev / self.mean) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let summary = compute_summary(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        assert!((summary.mean - 3.0).abs() < 1e-12);
        assert_eq!(summary.best, 1.0);
        assert_eq!(summary.worst, 5.0);
        // sample variance of 1..=5 is 2.5
        assert!((summary.std_dev - 2.5_f64.sqrt()).abs() < 1e-12);
        assert_eq!(summary.trials, 5);
    }

    #[test]
    fn test_single_trial_has_zero_std_dev() {
        let summary = compute_summary(&[4.2e-7]);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.best, 4.2e-7);
        assert_eq!(summary.mean, 4.2e-7);
    }

    #[test]
    fn test_empty_samples() {
        let summary = compute_summary(&[]);
        assert_eq!(summary.trials, 0);
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.best, 0.0);
    }

    #[test]
    fn test_per_call_times() {
        assert_eq!(per_call_times(&[1.0, 3.0], 100), vec![0.01, 0.03]);
    }

    #[test]
    fn test_recomputation_is_exact() {
        let per_call = per_call_times(&[0.21, 0.23, 0.2, 0.26, 0.22], 1000);
        assert_eq!(compute_summary(&per_call), compute_summary(&per_call));
    }

    #[test]
    fn test_coefficient_of_variation() {
        let summary = compute_summary(&[100.0, 100.0, 100.0]);

        // Zero variance = zero CV
        assert_eq!(summary.coefficient_of_variation(), 0.0);
    }
}
