//! Repeater - independent trials at a fixed repetition count

use crate::error::{TimeitError, ValidationError};
use crate::invoker::Measure;
use crate::validate::validate_number;
use serde::Serialize;

/// Batch durations from one multi-trial run, in trial order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialSet {
    number: u64,
    times: Vec<f64>,
}

impl TrialSet {
    /// Pair batch durations with the repetition count that produced them.
    ///
    /// Fails with [`ValidationError::NumberNotPositive`] when `number` is 0,
    /// since per-call times are the durations divided by it.
    pub fn new(number: u64, times: Vec<f64>) -> Result<Self, ValidationError> {
        let number = validate_number(number)?;
        Ok(Self { number, times })
    }

    /// Calls per batch
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Batch durations, first trial first
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Number of trials
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether no trial was recorded
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Batch durations divided by the repetition count
    pub fn per_call_times(&self) -> Vec<f64> {
        let number = self.number as f64;
        self.times.iter().map(|t| t / number).collect()
    }

    /// Take the raw durations
    pub fn into_times(self) -> Vec<f64> {
        self.times
    }
}

/// Run `repeat` batches of `number` calls each.
///
/// No warm-up batch is run or discarded.
pub fn repeat<M: Measure>(
    measure: &mut M,
    number: u64,
    repeat: usize,
) -> Result<TrialSet, TimeitError> {
    let number = validate_number(number)?;
    let mut times = Vec::with_capacity(repeat);
    for trial in 0..repeat {
        let elapsed = measure.measure(number)?;
        tracing::debug!(trial, number, elapsed, "trial complete");
        times.push(elapsed);
    }
    Ok(TrialSet { number, times })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::CallError;

    #[test]
    fn test_preserves_trial_order() {
        let mut trial = 0.0;
        let mut fake = |_: u64| -> Result<f64, TimeitError> {
            trial += 1.0;
            Ok(trial)
        };
        let set = repeat(&mut fake, 10, 4).unwrap();
        assert_eq!(set.times(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(set.number(), 10);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_every_trial_uses_number() {
        let mut numbers = Vec::new();
        let mut fake = |number: u64| -> Result<f64, TimeitError> {
            numbers.push(number);
            Ok(0.5)
        };
        repeat(&mut fake, 50, 3).unwrap();
        assert_eq!(numbers, vec![50, 50, 50]);
    }

    #[test]
    fn test_per_call_times() {
        let set = TrialSet::new(4, vec![2.0, 4.0]).unwrap();
        assert_eq!(set.per_call_times(), vec![0.5, 1.0]);
    }

    #[test]
    fn test_zero_number_rejected() {
        assert_eq!(
            TrialSet::new(0, vec![1.0]),
            Err(ValidationError::NumberNotPositive)
        );

        let mut calls = 0;
        let mut fake = |_: u64| -> Result<f64, TimeitError> {
            calls += 1;
            Ok(1.0)
        };
        let err = repeat(&mut fake, 0, 3).unwrap_err();
        assert_eq!(err.to_string(), "number must be positive");
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_failure_aborts_run() {
        let mut fake = |_: u64| -> Result<f64, TimeitError> {
            Err(CallError::raised("KeyError", "missing").into())
        };
        assert!(repeat(&mut fake, 1, 5).is_err());
    }
}
