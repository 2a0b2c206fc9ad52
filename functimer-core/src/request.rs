//! Timing requests

use crate::callable::{Args, Value};

/// Everything a caller can specify for one measurement run.
///
/// Built once with the chained setters, then handed by reference to the
/// timing operations. Unset fields fall back to the runner's
/// [`TimeitConfig`](crate::TimeitConfig).
#[derive(Debug, Clone, Default)]
pub struct TimingRequest {
    pub(crate) func: Value,
    pub(crate) args: Args,
    pub(crate) timer: Option<Value>,
    pub(crate) number: Option<u64>,
    pub(crate) repeat: Option<usize>,
    pub(crate) unit: Option<String>,
    pub(crate) precision: Option<u32>,
    pub(crate) min_time: Option<f64>,
}

impl TimingRequest {
    /// Time `func` with no arguments
    pub fn new(func: impl Into<Value>) -> Self {
        Self {
            func: func.into(),
            ..Default::default()
        }
    }

    /// Arguments passed to every call of the target
    pub fn args(mut self, args: Args) -> Self {
        self.args = args;
        self
    }

    /// Custom clock; must be a zero-argument callable returning a float
    pub fn timer(mut self, timer: impl Into<Value>) -> Self {
        self.timer = Some(timer.into());
        self
    }

    /// Calls per batch (autoranged when unset)
    pub fn number(mut self, number: u64) -> Self {
        self.number = Some(number);
        self
    }

    /// Number of trials
    pub fn repeat(mut self, repeat: usize) -> Self {
        self.repeat = Some(repeat);
        self
    }

    /// Display unit token ("sec", "msec", "usec" or "nsec")
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Digits after the decimal point in the brief
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Autorange threshold in clock units (seconds for the default clock)
    pub fn min_time(mut self, min_time: f64) -> Self {
        self.min_time = Some(min_time);
        self
    }

    /// Target value
    pub fn func(&self) -> &Value {
        &self.func
    }

    /// Call arguments
    pub fn call_args(&self) -> &Args {
        &self.args
    }

    /// Requested repetition count, if any
    pub fn requested_number(&self) -> Option<u64> {
        self.number
    }
}
