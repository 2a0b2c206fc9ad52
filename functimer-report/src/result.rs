//! The aggregate result of a timing run

use functimer_core::{TimeUnit, TrialSet, Warning};
use functimer_stats::{TrialSummary, compute_summary, per_call_times};
use serde::Serialize;
use std::fmt;

/// Immutable summary of one multi-trial run.
///
/// Times are stored in seconds (clock units); `unit` and `precision` only
/// affect rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeitResult {
    best: f64,
    worst: f64,
    mean: f64,
    std_dev: f64,
    unit: TimeUnit,
    precision: u32,
    number: u64,
    repeat: usize,
    times: Vec<f64>,
    brief: String,
    warnings: Vec<Warning>,
}

impl TimeitResult {
    /// Reduce `trials` and render the brief
    pub fn new(trials: TrialSet, unit: TimeUnit, precision: u32, warnings: Vec<Warning>) -> Self {
        let number = trials.number();
        let times = trials.into_times();
        let summary = compute_summary(&per_call_times(&times, number));
        let brief = format_brief(&summary, unit, precision, number);

        Self {
            best: summary.best,
            worst: summary.worst,
            mean: summary.mean,
            std_dev: summary.std_dev,
            unit,
            precision,
            number,
            repeat: summary.trials,
            times,
            brief,
            warnings,
        }
    }

    /// Fastest per-call time, seconds
    pub fn best(&self) -> f64 {
        self.best
    }

    /// Slowest per-call time, seconds
    pub fn worst(&self) -> f64 {
        self.worst
    }

    /// Mean per-call time, seconds
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of per-call times, seconds
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Display unit
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Display precision
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Calls per trial
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Trials
    pub fn repeat(&self) -> usize {
        self.repeat
    }

    /// Raw batch durations, first trial first
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Per-call times, first trial first
    pub fn loop_times(&self) -> Vec<f64> {
        per_call_times(&self.times, self.number)
    }

    /// One-line summary
    pub fn brief(&self) -> &str {
        &self.brief
    }

    /// Diagnostics raised while validating the request
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Run the stored durations through the reduction again
    pub fn recompute(&self) -> TrialSummary {
        compute_summary(&self.loop_times())
    }

    /// The same result rendered in another unit
    pub fn in_unit(&self, unit: TimeUnit) -> Self {
        Self {
            unit,
            brief: format_brief(&self.summary(), unit, self.precision, self.number),
            ..self.clone()
        }
    }

    /// Stored statistics as a [`TrialSummary`]
    pub fn summary(&self) -> TrialSummary {
        TrialSummary {
            best: self.best,
            worst: self.worst,
            mean: self.mean,
            std_dev: self.std_dev,
            trials: self.repeat,
        }
    }
}

impl fmt::Display for TimeitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.brief)
    }
}

/// Render the one-line brief.
///
/// Times are shown with `precision` significant digits.
///
/// ```text
/// 100000 loops, best of 5: 0.0520 usec per loop (mean 0.0610 usec ± 0.00400 usec)
/// ```
pub fn format_brief(summary: &TrialSummary, unit: TimeUnit, precision: u32, number: u64) -> String {
    format!(
        "{} loop{}, best of {}: {} {} per loop (mean {} {} ± {} {})",
        number,
        if number == 1 { "" } else { "s" },
        summary.trials,
        format_significant(unit.convert(summary.best), precision),
        unit,
        format_significant(unit.convert(summary.mean), precision),
        unit,
        format_significant(unit.convert(summary.std_dev), precision),
        unit,
    )
}

/// Render `value` with `digits` significant digits in positional notation.
///
/// Trailing zeros are kept; integer digits past `digits` are never dropped.
pub fn format_significant(value: f64, digits: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = digits.max(1) as usize;
    // exponent after rounding, so 9.996 at 3 digits reads 10.0
    let scientific = format!("{:.*e}", digits - 1, value);
    let exponent = scientific
        .rsplit_once('e')
        .and_then(|(_, exp)| exp.parse::<i64>().ok())
        .unwrap_or(0);
    let decimals = (digits as i64 - 1 - exponent).max(0) as usize;
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(times: Vec<f64>, number: u64) -> TimeitResult {
        TimeitResult::new(TrialSet::new(number, times).unwrap(), TimeUnit::Usec, 3, Vec::new())
    }

    #[test]
    fn test_statistics_are_per_call() {
        let r = result(vec![0.2, 0.4, 0.3], 100_000);
        assert!((r.best() - 2e-6).abs() < 1e-15);
        assert!((r.mean() - 3e-6).abs() < 1e-15);
        assert!((r.worst() - 4e-6).abs() < 1e-15);
        assert_eq!(r.repeat(), 3);
        assert_eq!(r.number(), 100_000);
    }

    #[test]
    fn test_brief() {
        let r = result(vec![0.2, 0.4, 0.3], 100_000);
        assert_eq!(
            r.brief(),
            "100000 loops, best of 3: 2.00 usec per loop (mean 3.00 usec ± 1.00 usec)"
        );
        assert_eq!(r.to_string(), r.brief());
    }

    #[test]
    fn test_brief_singular_loop() {
        let trials = TrialSet::new(1, vec![0.25]).unwrap();
        let r = TimeitResult::new(trials, TimeUnit::Sec, 2, Vec::new());
        assert_eq!(
            r.brief(),
            "1 loop, best of 1: 0.25 sec per loop (mean 0.25 sec ± 0.0 sec)"
        );
    }

    #[test]
    fn test_brief_keeps_fast_times_in_large_units() {
        // 20 ns per call shown in seconds
        let trials = TrialSet::new(1_000_000, vec![0.02, 0.021, 0.022]).unwrap();
        let r = TimeitResult::new(trials, TimeUnit::Sec, 3, Vec::new());
        assert!(
            r.brief()
                .starts_with("1000000 loops, best of 3: 0.0000000200 sec per loop (mean 0.0000000210 sec"),
            "{}",
            r.brief()
        );
        assert!(!r.brief().contains(" 0.000 sec"));
    }

    #[test]
    fn test_format_significant() {
        assert_eq!(format_significant(2.0, 3), "2.00");
        assert_eq!(format_significant(0.0123456, 3), "0.0123");
        assert_eq!(format_significant(123.456, 3), "123");
        assert_eq!(format_significant(98765.4, 3), "98765");
        assert_eq!(format_significant(9.996, 3), "10.0");
        assert_eq!(format_significant(0.0, 3), "0.00");
        assert_eq!(format_significant(f64::INFINITY, 3), "inf");
    }

    #[test]
    fn test_in_unit_rerenders_brief() {
        let r = result(vec![0.2, 0.4, 0.3], 100_000);
        let nsec = r.in_unit(TimeUnit::Nsec);
        assert_eq!(nsec.unit(), TimeUnit::Nsec);
        assert_eq!(nsec.best(), r.best());
        assert_eq!(
            nsec.brief(),
            "100000 loops, best of 3: 2000 nsec per loop (mean 3000 nsec ± 1000 nsec)"
        );
    }

    #[test]
    fn test_single_trial_std_dev() {
        assert_eq!(result(vec![0.3], 10).std_dev(), 0.0);
    }

    #[test]
    fn test_recompute_matches() {
        let r = result(vec![0.21, 0.23, 0.2, 0.26, 0.22], 1000);
        assert_eq!(r.recompute(), r.summary());
    }

    #[test]
    fn test_serialize() {
        let r = result(vec![0.2, 0.3], 10);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["unit"], "usec");
        assert_eq!(json["number"], 10);
        assert_eq!(json["times"].as_array().unwrap().len(), 2);
    }
}
