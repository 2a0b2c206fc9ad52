//! Request-level timing operations
//!
//! Each operation validates the request first, then drives the [`Invoker`]
//! directly or through the autorange/repeat layers.

use crate::autorange::{AutoRange, autorange};
use crate::config::{TimeitConfig, validate_min_time};
use crate::error::TimeitError;
use crate::invoker::Invoker;
use crate::repeater::{TrialSet, repeat};
use crate::request::TimingRequest;
use crate::validate::Plan;

/// Time one batch; `number` defaults to 1
pub fn timeit_once(request: &TimingRequest, config: &TimeitConfig) -> Result<f64, TimeitError> {
    let plan = request.resolve(config)?;
    Invoker::new(&plan.target, &plan.clock).run_batch(plan.number.unwrap_or(1))
}

/// Smallest 1-2-5 repetition count whose batch lasts at least `min_time`.
///
/// Only the target, the timer and `min_time` are validated; `number`,
/// `repeat` and the display fields play no part in the search.
pub fn timeit_autorange(
    request: &TimingRequest,
    config: &TimeitConfig,
) -> Result<AutoRange, TimeitError> {
    let (target, clock) = request.resolve_measurement()?;
    let min_time = validate_min_time(request.min_time.unwrap_or(config.min_time))?;
    let mut invoker = Invoker::new(&target, &clock);
    autorange(&mut invoker, min_time)
}

/// Run `repeat` trials, autoranging the repetition count when unset
pub fn timeit_repeat(
    request: &TimingRequest,
    config: &TimeitConfig,
) -> Result<TrialSet, TimeitError> {
    let plan = request.resolve(config)?;
    run_trials(&plan)
}

/// Trials for an already validated plan
pub fn run_trials(plan: &Plan) -> Result<TrialSet, TimeitError> {
    let mut invoker = Invoker::new(&plan.target, &plan.clock);
    let number = match plan.number {
        Some(number) => number,
        None => {
            let range = autorange(&mut invoker, plan.min_time)?;
            tracing::debug!(
                target_name = plan.target.name(),
                number = range.number,
                elapsed = range.elapsed,
                "autoranged repetition count"
            );
            range.number
        }
    };
    repeat(&mut invoker, number, plan.repeat)
}
