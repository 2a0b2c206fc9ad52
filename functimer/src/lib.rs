#![warn(missing_docs)]
//! # Functimer
//!
//! Microbenchmark harness for arbitrary callables.
//!
//! Functimer measures how long a callable takes with as little overhead as
//! possible:
//! - **Batching**: the target runs `number` times between two clock readings
//! - **Autoranging**: `number` is picked from 1, 2, 5, 10, 20, 50, ... so one
//!   batch lasts at least a minimum duration (0.2 s by default)
//! - **Trials**: several independent batches are collected and reduced to
//!   best / mean / standard deviation per call
//! - **Pluggable clocks**: any zero-argument callable returning a float
//!
//! ## Quick Start
//!
//! ```
//! use functimer::prelude::*;
//!
//! let max = Callable::new("max", |args| {
//!     let a = args.positional[0].as_number().unwrap_or(0.0);
//!     let b = args.positional[1].as_number().unwrap_or(0.0);
//!     Ok(Value::Float(a.max(b)))
//! });
//!
//! let request = TimingRequest::new(max)
//!     .args(Args::positional([1, 2]))
//!     .number(1000)
//!     .repeat(3);
//! let result = functimer::timeit_plus(&request).unwrap();
//! assert_eq!(result.repeat(), 3);
//! println!("{}", result.brief());
//! ```

// Re-export core types
pub use functimer_core::{
    Args, Arity, AutoRange, CallError, Callable, Clock, Invoker, MAX_PRECISION, Measure,
    PRECISION_WARN_THRESHOLD, Plan, Target, TimeUnit, TimeitConfig, TimeitError, TimingRequest,
    TrialSet, ValidationError, Value, Warning, autorange, candidates, perf_counter, repeat,
};

// Re-export stats
pub use functimer_stats::{TrialSummary, compute_summary, per_call_times};

// Re-export report types
pub use functimer_report::{
    NamedResult, OutputFormat, Report, ReportMeta, TimeitResult, format_brief,
    format_human_output, format_significant, generate_json_report,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Args, CallError, Callable, TimeUnit, Timeit, TimeitConfig, TimeitError, TimeitResult,
        TimingRequest, Value,
    };
}

/// Runs timing requests against a set of policy defaults.
///
/// Holds no state between runs; one `Timeit` can serve any number of
/// requests, sequentially or from several threads.
#[derive(Debug, Clone, Default)]
pub struct Timeit {
    config: TimeitConfig,
}

impl Timeit {
    /// Runner with the given defaults
    pub fn new(config: TimeitConfig) -> Self {
        Self { config }
    }

    /// Defaults in effect
    pub fn config(&self) -> &TimeitConfig {
        &self.config
    }

    /// Time one batch (`number` defaults to 1)
    pub fn once(&self, request: &TimingRequest) -> Result<f64, TimeitError> {
        functimer_core::timeit_once(request, &self.config)
    }

    /// Pick a repetition count from the 1-2-5 progression
    pub fn autorange(&self, request: &TimingRequest) -> Result<u64, TimeitError> {
        functimer_core::timeit_autorange(request, &self.config).map(|range| range.number)
    }

    /// Collect trial durations (autoranging `number` when unset)
    pub fn repeat(&self, request: &TimingRequest) -> Result<TrialSet, TimeitError> {
        functimer_core::timeit_repeat(request, &self.config)
    }

    /// Full pipeline: validate, autorange if needed, run trials, reduce and
    /// render.
    pub fn plus(&self, request: &TimingRequest) -> Result<TimeitResult, TimeitError> {
        let plan = request.resolve(&self.config)?;
        let trials = functimer_core::run_trials(&plan)?;
        let result = TimeitResult::new(trials, plan.unit, plan.precision, plan.warnings);
        tracing::debug!(target_name = plan.target.name(), brief = result.brief(), "timing complete");
        Ok(result)
    }
}

/// Time one batch of `request` with default policy
pub fn timeit_once(request: &TimingRequest) -> Result<f64, TimeitError> {
    Timeit::default().once(request)
}

/// Autorange `request` with default policy
pub fn timeit_autorange(request: &TimingRequest) -> Result<u64, TimeitError> {
    Timeit::default().autorange(request)
}

/// Collect trial durations for `request` with default policy
pub fn timeit_repeat(request: &TimingRequest) -> Result<TrialSet, TimeitError> {
    Timeit::default().repeat(request)
}

/// Full benchmark of `request` with default policy
pub fn timeit_plus(request: &TimingRequest) -> Result<TimeitResult, TimeitError> {
    Timeit::default().plus(request)
}
