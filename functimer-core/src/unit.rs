//! Display Units
//!
//! Timings are measured in seconds and converted only for display.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on display precision
pub const MAX_PRECISION: u32 = 20;

/// Precision at or above this emits a warning
pub const PRECISION_WARN_THRESHOLD: u32 = MAX_PRECISION / 2;

/// Supported display units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Seconds
    Sec,
    /// Milliseconds
    Msec,
    /// Microseconds
    #[default]
    Usec,
    /// Nanoseconds
    Nsec,
}

impl TimeUnit {
    /// Every unit, largest first
    pub const ALL: [TimeUnit; 4] = [TimeUnit::Sec, TimeUnit::Msec, TimeUnit::Usec, TimeUnit::Nsec];

    /// Accepted tokens, in the same order as [`TimeUnit::ALL`]
    pub const TOKENS: [&'static str; 4] = ["sec", "msec", "usec", "nsec"];

    /// Short token
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Sec => "sec",
            TimeUnit::Msec => "msec",
            TimeUnit::Usec => "usec",
            TimeUnit::Nsec => "nsec",
        }
    }

    /// How many of this unit make one second
    pub fn scale(self) -> f64 {
        match self {
            TimeUnit::Sec => 1.0,
            TimeUnit::Msec => 1e3,
            TimeUnit::Usec => 1e6,
            TimeUnit::Nsec => 1e9,
        }
    }

    /// Convert seconds into this unit
    #[inline]
    pub fn convert(self, seconds: f64) -> f64 {
        seconds * self.scale()
    }

    /// Largest unit in which `seconds` reads as at least 1
    pub fn autoselect(seconds: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|unit| unit.convert(seconds) >= 1.0)
            .unwrap_or(TimeUnit::Nsec)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidUnit(s.to_string()))
    }
}
