//! Validation
//!
//! Every field of a [`TimingRequest`] is checked before the target runs once.
//! Checks run in a fixed order (target, timer, number, repeat, unit,
//! precision, min_time) and the first failure wins.

use crate::callable::{Args, Value};
use crate::clock::Clock;
use crate::config::{TimeitConfig, validate_min_time};
use crate::error::{TimeitError, ValidationError};
use crate::invoker::Target;
use crate::request::TimingRequest;
use crate::unit::{MAX_PRECISION, PRECISION_WARN_THRESHOLD, TimeUnit};
use serde::Serialize;
use std::fmt;

/// Non-fatal diagnostic attached to a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Precision past what clock resolution can back up
    HighPrecision {
        /// Requested precision
        precision: u32,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::HighPrecision { .. } => f.write_str("precision is rather high"),
        }
    }
}

/// A fully validated request with defaults applied
#[derive(Debug, Clone)]
pub struct Plan {
    /// Target bound to its arguments
    pub target: Target,
    /// Validated clock
    pub clock: Clock,
    /// Calls per batch; `None` means autorange
    pub number: Option<u64>,
    /// Trials
    pub repeat: usize,
    /// Display unit
    pub unit: TimeUnit,
    /// Display precision
    pub precision: u32,
    /// Autorange threshold
    pub min_time: f64,
    /// Diagnostics raised during validation
    pub warnings: Vec<Warning>,
}

impl TimingRequest {
    /// Validate every field, filling unset ones from `config`.
    ///
    /// The timer is probed once; the target is never called.
    pub fn resolve(&self, config: &TimeitConfig) -> Result<Plan, TimeitError> {
        let (target, clock) = self.resolve_measurement()?;
        let number = self.number.map(validate_number).transpose()?;
        let repeat = validate_repeat(self.repeat.unwrap_or(config.repeat))?;
        let unit = match &self.unit {
            Some(token) => token.parse::<TimeUnit>()?,
            None => config.unit,
        };
        let precision = self.precision.unwrap_or(config.precision);
        let warnings: Vec<Warning> = validate_precision(precision)?.into_iter().collect();
        let min_time = validate_min_time(self.min_time.unwrap_or(config.min_time))?;

        for warning in &warnings {
            tracing::warn!(%warning, precision, "display precision exceeds clock resolution");
        }

        Ok(Plan {
            target,
            clock,
            number,
            repeat,
            unit,
            precision,
            min_time,
            warnings,
        })
    }

    /// Validate only what a bare measurement needs: the target and the timer.
    ///
    /// Display fields are left unchecked and raise no warnings.
    pub fn resolve_measurement(&self) -> Result<(Target, Clock), TimeitError> {
        let target = validate_func(&self.func, &self.args)?;
        let clock = Clock::resolve(self.timer.clone())?;
        Ok((target, clock))
    }
}

/// Bind `func` to `args`, rejecting anything that cannot be called
pub fn validate_func(func: &Value, args: &Args) -> Result<Target, ValidationError> {
    match func.as_callable() {
        Some(callable) => Ok(Target::new(callable.clone(), args.clone())),
        None => Err(ValidationError::FuncNotCallable),
    }
}

/// Calls per batch must be positive
pub fn validate_number(number: u64) -> Result<u64, ValidationError> {
    if number == 0 {
        Err(ValidationError::NumberNotPositive)
    } else {
        Ok(number)
    }
}

/// Trial count must be positive
pub fn validate_repeat(repeat: usize) -> Result<usize, ValidationError> {
    if repeat == 0 {
        Err(ValidationError::RepeatNotPositive)
    } else {
        Ok(repeat)
    }
}

/// Precision must lie in `1..=MAX_PRECISION`; the upper half warns
pub fn validate_precision(precision: u32) -> Result<Option<Warning>, ValidationError> {
    if precision == 0 {
        return Err(ValidationError::PrecisionNotPositive);
    }
    if precision > MAX_PRECISION {
        return Err(ValidationError::PrecisionCapped(precision));
    }
    Ok((precision >= PRECISION_WARN_THRESHOLD).then_some(Warning::HighPrecision { precision }))
}
