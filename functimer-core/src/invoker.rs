//! Invoker - single batch measurement
//!
//! One batch is `number` back-to-back calls of the target between two clock
//! readings. Nothing else happens between the readings.

use crate::callable::{Args, CallError, Callable, Value};
use crate::clock::Clock;
use crate::error::TimeitError;

/// A callable bound to the arguments it is timed with
#[derive(Debug, Clone)]
pub struct Target {
    func: Callable,
    args: Args,
}

impl Target {
    /// Bind `func` to `args`
    pub fn new(func: Callable, args: Args) -> Self {
        Self { func, args }
    }

    /// Call once
    #[inline(always)]
    pub fn call(&self) -> Result<Value, CallError> {
        self.func.call(&self.args)
    }

    /// Target name
    pub fn name(&self) -> &str {
        self.func.name()
    }
}

/// A way of timing one batch of `number` calls.
///
/// [`Invoker`] is the real implementation; the search and trial logic only
/// depend on this trait so they can be driven by scripted measurements.
pub trait Measure {
    /// Elapsed clock units for `number` consecutive calls
    fn measure(&mut self, number: u64) -> Result<f64, TimeitError>;
}

impl<F> Measure for F
where
    F: FnMut(u64) -> Result<f64, TimeitError>,
{
    fn measure(&mut self, number: u64) -> Result<f64, TimeitError> {
        self(number)
    }
}

/// Times batches of a [`Target`] against a [`Clock`]
#[derive(Debug, Clone, Copy)]
pub struct Invoker<'a> {
    target: &'a Target,
    clock: &'a Clock,
}

impl<'a> Invoker<'a> {
    /// Pair a target with the clock that times it
    pub fn new(target: &'a Target, clock: &'a Clock) -> Self {
        Self { target, clock }
    }

    /// Run one batch.
    ///
    /// The first target failure aborts the batch and is returned as-is.
    #[inline]
    pub fn run_batch(&self, number: u64) -> Result<f64, TimeitError> {
        let start = self.clock.now()?;
        for _ in 0..number {
            std::hint::black_box(self.target.call()?);
        }
        let end = self.clock.now()?;
        Ok(end - start)
    }
}

impl Measure for Invoker<'_> {
    #[inline]
    fn measure(&mut self, number: u64) -> Result<f64, TimeitError> {
        self.run_batch(number)
    }
}
