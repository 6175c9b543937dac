//! The ask/evaluate/tell driver and its convenience entry points.

use core::ops::ControlFlow;
use core::time::Duration;
use std::time::Instant;

use crate::objective::Objective;
use crate::observation::Observation;
use crate::optimizer::{GeneticOptimizer, Optimizer, RandomOptimizer, RandomStepOptimizer};
use crate::result::OptimizeResult;
use crate::space::SearchSpace;

/// When to stop a [`minimize`] run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Budget {
    /// Stop after this many evaluations.
    Calls(usize),
    /// Stop once this much wall-clock time has elapsed.
    ///
    /// The clock is checked before each ask, so a run overshoots by at most
    /// one evaluation.
    Time(Duration),
}

impl Budget {
    fn exhausted(self, done: usize, start: Instant) -> bool {
        match self {
            Self::Calls(n) => done >= n,
            Self::Time(limit) => start.elapsed() >= limit,
        }
    }
}

/// Runs `optimizer` on `objective` until `budget` runs out or the objective
/// asks to stop.
///
/// Each iteration asks for a point, computes its constraint violation and
/// objective value, offers the observation to
/// [`Objective::after_evaluation`], then tells the optimizer.
///
/// # Errors
///
/// Returns the first error raised by the objective or its constraint. The
/// optimizer keeps every observation told before the failure.
///
/// # Examples
///
/// ```
/// use core::convert::Infallible;
/// use core::time::Duration;
///
/// use stochopt::prelude::*;
///
/// let space = SearchSpace::new(vec![
///     Dimension::discrete(-20, 20).unwrap(),
///     Dimension::categorical([1.0, 10.0, 100.0]).unwrap(),
/// ])
/// .unwrap();
///
/// let mut optimizer = RandomStepOptimizer::builder(space)
///     .mutation_rate(0.3)
///     .seed(3)
///     .build()
///     .unwrap();
///
/// let result = minimize(
///     &mut optimizer,
///     |x: &[Value]| Ok::<_, Infallible>(x[0].as_f64().unwrap_or_default().abs()),
///     Budget::Time(Duration::from_millis(20)),
/// )
/// .unwrap();
/// assert!(result.is_success());
/// ```
pub fn minimize<Opt, O>(
    optimizer: &mut Opt,
    mut objective: O,
    budget: Budget,
) -> Result<OptimizeResult, O::Error>
where
    Opt: Optimizer + ?Sized,
    O: Objective,
{
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("minimize", budget = ?budget).entered();

    let start = Instant::now();
    let mut done = 0;
    while !budget.exhausted(done, start) {
        let point = optimizer.ask();
        let violation = objective.violation(&point)?;
        let value = objective.evaluate(&point)?;
        let observation = Observation::new(point, value, violation);
        let flow = objective.after_evaluation(&observation);

        #[cfg(feature = "tracing")]
        let previous_best = optimizer.best_value();
        let told = optimizer.tell(observation.point, observation.value, Some(observation.violation));
        debug_assert!(told.is_ok(), "optimizer rejected its own point: {told:?}");
        done += 1;

        #[cfg(feature = "tracing")]
        if optimizer.best_value() < previous_best {
            tracing::debug!(evaluation = done, value, "new incumbent found");
        }
        if let ControlFlow::Break(()) = flow {
            trace_debug!(evaluation = done, "stopped by objective");
            break;
        }
    }

    let result = optimizer.result();
    trace_info!(
        n_evaluations = done,
        fun = result.fun,
        success = result.is_success(),
        "minimize finished"
    );
    Ok(result)
}

/// Random search for `stopping_condition` of wall-clock time.
///
/// # Errors
///
/// Returns the first error raised by `objective`.
///
/// # Examples
///
/// ```
/// use core::convert::Infallible;
/// use core::time::Duration;
///
/// use stochopt::prelude::*;
///
/// let space = SearchSpace::new(vec![Dimension::continuous(0.0, 1.0).unwrap()]).unwrap();
/// let result = random_minimize(
///     |x: &[Value]| Ok::<_, Infallible>(x[0].as_f64().unwrap_or_default()),
///     space,
///     Duration::from_millis(10),
/// )
/// .unwrap();
/// assert!(result.fun < 1.0);
/// ```
pub fn random_minimize<O: Objective>(
    objective: O,
    space: SearchSpace,
    stopping_condition: Duration,
) -> Result<OptimizeResult, O::Error> {
    let mut optimizer = RandomOptimizer::new(space);
    minimize(&mut optimizer, objective, Budget::Time(stopping_condition))
}

/// Random search for exactly `n_calls` evaluations.
///
/// # Errors
///
/// Returns the first error raised by `objective`.
pub fn dummy_minimize<O: Objective>(
    objective: O,
    space: SearchSpace,
    n_calls: usize,
) -> Result<OptimizeResult, O::Error> {
    let mut optimizer = RandomOptimizer::new(space);
    minimize(&mut optimizer, objective, Budget::Calls(n_calls))
}

/// Genetic search with default settings for `n_calls` evaluations.
///
/// Uses 10 random starts, a tournament fraction of 0.2 and a mutation rate
/// of 0.05. Configure a [`GeneticOptimizer`] through its builder and call
/// [`minimize`] for anything else.
///
/// # Errors
///
/// Returns the first error raised by `objective`.
pub fn ga_minimize<O: Objective>(
    objective: O,
    space: SearchSpace,
    n_calls: usize,
) -> Result<OptimizeResult, O::Error> {
    let mut optimizer = GeneticOptimizer::new(space);
    minimize(&mut optimizer, objective, Budget::Calls(n_calls))
}

/// Random-step search with default settings for `n_calls` evaluations.
///
/// Uses 13 random starts and a mutation rate of 0.1.
///
/// # Errors
///
/// Returns the first error raised by `objective`.
pub fn rs_minimize<O: Objective>(
    objective: O,
    space: SearchSpace,
    n_calls: usize,
) -> Result<OptimizeResult, O::Error> {
    let mut optimizer = RandomStepOptimizer::new(space);
    minimize(&mut optimizer, objective, Budget::Calls(n_calls))
}
