//! Error taxonomy
//!
//! Validation messages are stable: callers match on the text.

use crate::callable::CallError;
use crate::unit::{MAX_PRECISION, TimeUnit};
use thiserror::Error;

/// Caller misuse detected before any timing work starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Target is not callable
    #[error("func must be callable")]
    FuncNotCallable,
    /// Timer is not callable
    #[error("timer must be callable")]
    TimerNotCallable,
    /// Timer returned something other than a float
    #[error("timer must return a float starting value")]
    TimerNotFloat,
    /// Repetition count is zero
    #[error("number must be positive")]
    NumberNotPositive,
    /// Trial count is zero
    #[error("repeat must be positive")]
    RepeatNotPositive,
    /// Unknown unit token
    #[error("unit must be one of {}", TimeUnit::TOKENS.join(", "))]
    InvalidUnit(String),
    /// Precision is zero
    #[error("precision must be positive")]
    PrecisionNotPositive,
    /// Precision exceeds [`MAX_PRECISION`]
    #[error("precision is capped at {}", MAX_PRECISION)]
    PrecisionCapped(u32),
    /// Autorange threshold is zero, negative or not finite
    #[error("min_time must be positive")]
    MinTimeNotPositive,
}

/// Any failure surfaced by a timing operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeitError {
    /// Request failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The target (or the timer) failed; passed through untouched
    #[error(transparent)]
    Call(#[from] CallError),
}

impl TimeitError {
    /// The validation failure, if that is what this is
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            TimeitError::Invalid(v) => Some(v),
            TimeitError::Call(_) => None,
        }
    }
}
