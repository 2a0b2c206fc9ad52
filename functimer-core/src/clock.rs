//! Clocks
//!
//! A clock is any zero-argument callable returning a float timestamp. The
//! default reads `std::time::Instant` relative to a process-wide epoch, so
//! readings are seconds and stay small enough to keep full f64 resolution.

use crate::callable::{Callable, Value};
use crate::error::{TimeitError, ValidationError};
use std::sync::OnceLock;
use std::time::Instant;

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Seconds elapsed since the first call in this process.
#[inline(always)]
pub fn perf_counter() -> f64 {
    let epoch = *EPOCH.get_or_init(Instant::now);
    epoch.elapsed().as_secs_f64()
}

/// A validated timer.
///
/// Construction probes the timer once, so a clock that cannot be called with
/// no arguments or that does not produce a float is rejected before any
/// target call happens.
#[derive(Debug, Clone)]
pub struct Clock {
    timer: Callable,
}

impl Clock {
    /// The default monotonic clock (seconds, see [`perf_counter`])
    pub fn monotonic() -> Self {
        Self {
            timer: Callable::nullary("perf_counter", perf_counter),
        }
    }

    /// Validate a caller-supplied timer value
    pub fn from_timer(timer: Value) -> Result<Self, TimeitError> {
        let Value::Func(timer) = timer else {
            return Err(ValidationError::TimerNotCallable.into());
        };
        let clock = Self { timer };
        clock.now()?;
        Ok(clock)
    }

    /// Use `timer` if given, the monotonic clock otherwise
    pub fn resolve(timer: Option<Value>) -> Result<Self, TimeitError> {
        match timer {
            Some(timer) => Self::from_timer(timer),
            None => Ok(Self::monotonic()),
        }
    }

    /// Take a reading.
    ///
    /// Arity failures from the timer itself propagate unchanged; a reading
    /// that is not a float is a validation failure.
    #[inline(always)]
    pub fn now(&self) -> Result<f64, TimeitError> {
        self.timer
            .call0()?
            .as_float()
            .ok_or(TimeitError::Invalid(ValidationError::TimerNotFloat))
    }

    /// Name of the underlying timer
    pub fn name(&self) -> &str {
        self.timer.name()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::monotonic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::CallError;
    use std::time::Duration;

    #[test]
    fn test_perf_counter_elapsed() {
        let start = perf_counter();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = perf_counter() - start;

        // Should be at least 10ms
        assert!(elapsed >= 0.005);
        // Should be less than 100ms (accounting for scheduling)
        assert!(elapsed < 0.1);
    }

    #[test]
    fn test_monotonic_clock() {
        let clock = Clock::monotonic();
        let a = clock.now().unwrap();
        let b = clock.now().unwrap();
        assert!(b >= a, "clock should be monotonic");
    }

    #[test]
    fn test_rejects_non_callable_timer() {
        let err = Clock::from_timer(Value::Int(22)).unwrap_err();
        assert_eq!(err.to_string(), "timer must be callable");
    }

    #[test]
    fn test_rejects_non_float_timer() {
        let err = Clock::from_timer(Callable::nullary("none", || ()).into()).unwrap_err();
        assert_eq!(err.to_string(), "timer must return a float starting value");

        // ints are not floats either
        let err = Clock::from_timer(Callable::nullary("int", || 1_i64).into()).unwrap_err();
        assert_eq!(err.to_string(), "timer must return a float starting value");
    }

    #[test]
    fn test_timer_arity_failure_propagates() {
        let needs_arg = Callable::with_arity("needs_arg", 1, |args| Ok(args.positional[0].clone()));
        let err = Clock::from_timer(needs_arg.into()).unwrap_err();
        assert!(matches!(err, TimeitError::Call(CallError::Type(_))));
    }

    #[test]
    fn test_resolve_defaults_to_monotonic() {
        let clock = Clock::resolve(None).unwrap();
        assert_eq!(clock.name(), "perf_counter");
    }
}
