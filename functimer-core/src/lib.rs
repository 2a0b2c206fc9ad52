#![warn(missing_docs)]
//! Functimer Core - Measurement Pipeline
//!
//! This crate provides everything up to the raw trial durations:
//! - Dynamic callable model (`Value`, `Args`, `Callable`) for the timed target
//! - Validated clocks, with a monotonic default
//! - Request validation with stable error messages
//! - Batch timing (`Invoker`), 1-2-5 autoranging and repeated trials

mod autorange;
mod callable;
mod clock;
mod config;
mod error;
mod invoker;
mod repeater;
mod request;
mod timeit;
mod unit;
mod validate;

pub use autorange::{AutoRange, autorange, candidates};
pub use callable::{Args, Arity, CallError, Callable, Value};
pub use clock::{Clock, perf_counter};
pub use config::{TimeitConfig, validate_min_time};
pub use error::{TimeitError, ValidationError};
pub use invoker::{Invoker, Measure, Target};
pub use repeater::{TrialSet, repeat};
pub use request::TimingRequest;
pub use timeit::{run_trials, timeit_autorange, timeit_once, timeit_repeat};
pub use unit::{MAX_PRECISION, PRECISION_WARN_THRESHOLD, TimeUnit};
pub use validate::{
    Plan, Warning, validate_func, validate_number, validate_precision, validate_repeat,
};
