//! State and validation shared by the history-keeping optimizers.

use crate::error::{Error, Result};
use crate::observation::{History, Observation};
use crate::result::OptimizeResult;
use crate::rng_util;
use crate::space::SearchSpace;
use crate::value::{Point, Value};

/// Common state of [`RandomStepOptimizer`](super::RandomStepOptimizer) and
/// [`GeneticOptimizer`](super::GeneticOptimizer): the space, the RNG, the
/// observation history and the random-start countdown.
#[derive(Clone, Debug)]
pub(crate) struct SearchState {
    pub(crate) space: SearchSpace,
    pub(crate) rng: fastrand::Rng,
    pub(crate) history: History,
    pub(crate) random_starts_left: usize,
}

impl SearchState {
    pub(crate) fn new(
        space: SearchSpace,
        seed: Option<u64>,
        n_random_starts: usize,
        tolerance: f64,
    ) -> Self {
        Self {
            space,
            rng: rng_util::make_rng(seed),
            history: History::new(tolerance),
            random_starts_left: n_random_starts,
        }
    }

    /// `true` while asks should be answered with uniform samples.
    ///
    /// An empty history always counts as warm-up so that the adaptive phase
    /// has something to work from even with zero random starts.
    pub(crate) fn in_warm_up(&self) -> bool {
        self.random_starts_left > 0 || self.history.is_empty()
    }

    pub(crate) fn sample(&mut self) -> Point {
        self.space.sample(&mut self.rng)
    }

    /// Appends an observation of a point of the space.
    pub(crate) fn record(
        &mut self,
        point: Point,
        value: f64,
        violation: Option<f64>,
    ) -> Result<()> {
        self.space.check(&point)?;
        self.history.push(Observation::new(point, value, violation));
        if self.random_starts_left > 0 {
            self.random_starts_left -= 1;
            if self.random_starts_left == 0 {
                trace_debug!(n_observations = self.history.len(), "random-start phase finished");
            }
        }
        Ok(())
    }

    pub(crate) fn best(&self) -> Option<(&[Value], f64)> {
        self.history
            .best_feasible()
            .map(|o| (o.point.as_slice(), o.value))
    }

    pub(crate) fn result(&self) -> OptimizeResult {
        OptimizeResult::new(
            self.best(),
            self.history.len(),
            self.history.as_slice().to_vec(),
        )
    }
}

/// Checks that a probability-like tunable lies in `(0.0, 1.0]`.
pub(crate) fn validate_rate(rate: f64, err: fn(f64) -> Error) -> Result<()> {
    if rate > 0.0 && rate <= 1.0 {
        Ok(())
    } else {
        Err(err(rate))
    }
}

/// Checks that the feasibility tolerance is a non-negative number.
pub(crate) fn validate_tolerance(tolerance: f64) -> Result<()> {
    if tolerance >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidTolerance(tolerance))
    }
}
