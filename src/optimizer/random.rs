//! Random search baseline.

use crate::error::Result;
use crate::observation::DEFAULT_TOLERANCE;
use crate::optimizer::Optimizer;
use crate::optimizer::common::validate_tolerance;
use crate::result::OptimizeResult;
use crate::rng_util;
use crate::space::SearchSpace;
use crate::value::{Point, Value};

/// Samples every point uniformly at random.
///
/// Only the incumbent (best feasible point so far) is kept, so memory stays
/// constant however long the search runs. The result of a random search
/// therefore carries no history.
///
/// # Examples
///
/// ```
/// use stochopt::prelude::*;
///
/// let space = SearchSpace::new(vec![Dimension::discrete(0, 100).unwrap()]).unwrap();
///
/// // Default RNG
/// let optimizer = RandomOptimizer::new(space.clone());
///
/// // Fixed seed and a looser feasibility tolerance
/// let optimizer = RandomOptimizer::builder(space)
///     .seed(42)
///     .tolerance(1e-2)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct RandomOptimizer {
    space: SearchSpace,
    rng: fastrand::Rng,
    tolerance: f64,
    incumbent: Option<(Point, f64)>,
    n_evaluations: usize,
}

impl RandomOptimizer {
    /// Creates a random optimizer with a default random seed.
    #[must_use]
    pub fn new(space: SearchSpace) -> Self {
        Self::from_parts(space, None, DEFAULT_TOLERANCE)
    }

    /// Creates a random optimizer with a fixed seed for reproducibility.
    #[must_use]
    pub fn with_seed(space: SearchSpace, seed: u64) -> Self {
        Self::from_parts(space, Some(seed), DEFAULT_TOLERANCE)
    }

    /// Creates a builder for configuring a `RandomOptimizer`.
    #[must_use]
    pub fn builder(space: SearchSpace) -> RandomOptimizerBuilder {
        RandomOptimizerBuilder::new(space)
    }

    fn from_parts(space: SearchSpace, seed: Option<u64>, tolerance: f64) -> Self {
        Self {
            space,
            rng: rng_util::make_rng(seed),
            tolerance,
            incumbent: None,
            n_evaluations: 0,
        }
    }
}

impl Optimizer for RandomOptimizer {
    fn space(&self) -> &SearchSpace {
        &self.space
    }

    fn ask(&mut self) -> Point {
        self.space.sample(&mut self.rng)
    }

    fn tell(&mut self, point: Point, value: f64, violation: Option<f64>) -> Result<()> {
        self.space.check(&point)?;
        self.n_evaluations += 1;
        let violation = violation.unwrap_or(0.0);
        if value < self.best_value() && violation < self.tolerance {
            self.incumbent = Some((point, value));
        }
        Ok(())
    }

    fn n_evaluations(&self) -> usize {
        self.n_evaluations
    }

    fn best(&self) -> Option<(&[Value], f64)> {
        self.incumbent.as_ref().map(|(x, v)| (x.as_slice(), *v))
    }

    fn result(&self) -> OptimizeResult {
        OptimizeResult::new(self.best(), self.n_evaluations, Vec::new())
    }
}

/// Builder for configuring a [`RandomOptimizer`].
///
/// Defaults:
/// - `tolerance`: `1e-3`
/// - `seed`: random
#[derive(Clone, Debug)]
pub struct RandomOptimizerBuilder {
    space: SearchSpace,
    tolerance: f64,
    seed: Option<u64>,
}

impl RandomOptimizerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new(space: SearchSpace) -> Self {
        Self {
            space,
            tolerance: DEFAULT_TOLERANCE,
            seed: None,
        }
    }

    /// Sets the feasibility tolerance.
    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the random seed for reproducibility.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configured [`RandomOptimizer`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTolerance` if the tolerance is negative or NaN.
    pub fn build(self) -> Result<RandomOptimizer> {
        validate_tolerance(self.tolerance)?;
        Ok(RandomOptimizer::from_parts(
            self.space,
            self.seed,
            self.tolerance,
        ))
    }
}
