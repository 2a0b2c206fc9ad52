//! Policy defaults
//!
//! The trial count, display unit, display precision and autorange threshold
//! are policy, not algorithm, so they live here and can be loaded from TOML.

use crate::error::ValidationError;
use crate::unit::TimeUnit;
use crate::validate::{validate_precision, validate_repeat};
use serde::{Deserialize, Serialize};

/// Defaults applied to any request field left unset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeitConfig {
    /// Trials per run
    #[serde(default = "default_repeat")]
    pub repeat: usize,
    /// Display unit
    #[serde(default)]
    pub unit: TimeUnit,
    /// Digits after the decimal point
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Minimum batch duration (seconds) autorange aims for
    #[serde(default = "default_min_time")]
    pub min_time: f64,
}

impl Default for TimeitConfig {
    fn default() -> Self {
        Self {
            repeat: default_repeat(),
            unit: TimeUnit::default(),
            precision: default_precision(),
            min_time: default_min_time(),
        }
    }
}

fn default_repeat() -> usize {
    5
}
fn default_precision() -> u32 {
    3
}
fn default_min_time() -> f64 {
    0.2
}

impl TimeitConfig {
    /// Reject defaults that no request could run with
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_repeat(self.repeat)?;
        validate_precision(self.precision)?;
        validate_min_time(self.min_time)?;
        Ok(())
    }
}

/// The autorange threshold must be a positive, finite number of seconds
pub fn validate_min_time(min_time: f64) -> Result<f64, ValidationError> {
    if min_time.is_finite() && min_time > 0.0 {
        Ok(min_time)
    } else {
        Err(ValidationError::MinTimeNotPositive)
    }
}
