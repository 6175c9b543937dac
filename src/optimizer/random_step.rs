//! Mutation-only local search around the incumbent.
//!
//! After a phase of uniform random starts, every ask takes the best point
//! observed so far and returns a mutated copy of it. Each numeric coordinate
//! walks through the [`StepSchedule::Fine`] scales `2^-16 .. 2^0`, taking a
//! step toward one of its bounds with probability `mutation_rate` per scale.
//! Categorical coordinates are re-drawn with the same probability.
//!
//! Unlike the genetic optimizer, an ask never returns the incumbent itself:
//! mutation passes are repeated until at least one coordinate changes.
//!
//! # Configuration
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `n_random_starts` | 13 | Uniform samples before mutation begins |
//! | `mutation_rate` | 0.1 | Per-scale (and per-category) mutation probability |
//! | `tolerance` | `1e-3` | Feasibility tolerance on the constraint violation |
//! | `seed` | random | RNG seed for reproducibility |

use crate::dimension::StepSchedule;
use crate::error::{Error, Result};
use crate::observation::{DEFAULT_TOLERANCE, History};
use crate::optimizer::Optimizer;
use crate::optimizer::common::{SearchState, validate_rate, validate_tolerance};
use crate::result::OptimizeResult;
use crate::space::SearchSpace;
use crate::value::{Point, Value};

const DEFAULT_N_RANDOM_STARTS: usize = 13;
const DEFAULT_MUTATION_RATE: f64 = 0.1;

/// Mutates the best point found so far.
///
/// # Examples
///
/// ```
/// use stochopt::prelude::*;
///
/// let space = SearchSpace::new(vec![Dimension::continuous(-5.0, 5.0).unwrap()]).unwrap();
///
/// let optimizer = RandomStepOptimizer::builder(space)
///     .n_random_starts(5)
///     .mutation_rate(0.2)
///     .seed(42)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct RandomStepOptimizer {
    state: SearchState,
    mutation_rate: f64,
}

impl RandomStepOptimizer {
    /// Creates an optimizer with default settings and a random seed.
    #[must_use]
    pub fn new(space: SearchSpace) -> Self {
        Self::from_builder(RandomStepOptimizerBuilder::new(space))
    }

    /// Creates an optimizer with default settings and a fixed seed.
    #[must_use]
    pub fn with_seed(space: SearchSpace, seed: u64) -> Self {
        Self::from_builder(RandomStepOptimizerBuilder::new(space).seed(seed))
    }

    /// Creates a builder for configuring a `RandomStepOptimizer`.
    #[must_use]
    pub fn builder(space: SearchSpace) -> RandomStepOptimizerBuilder {
        RandomStepOptimizerBuilder::new(space)
    }

    /// Returns the observations told so far.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.state.history
    }

    /// Returns how many random starts remain before mutation begins.
    #[must_use]
    pub fn random_starts_left(&self) -> usize {
        self.state.random_starts_left
    }

    fn from_builder(builder: RandomStepOptimizerBuilder) -> Self {
        Self {
            state: SearchState::new(
                builder.space,
                builder.seed,
                builder.n_random_starts,
                builder.tolerance,
            ),
            mutation_rate: builder.mutation_rate,
        }
    }
}

impl Optimizer for RandomStepOptimizer {
    fn space(&self) -> &SearchSpace {
        &self.state.space
    }

    fn ask(&mut self) -> Point {
        if self.state.in_warm_up() {
            return self.state.sample();
        }

        let rate = self.mutation_rate;
        let SearchState {
            space,
            rng,
            history,
            ..
        } = &mut self.state;
        let Some(incumbent) = history.best() else {
            return space.sample(rng);
        };
        if !space.contains(&incumbent.point) {
            return space.sample(rng);
        }
        if space.is_singleton() {
            return incumbent.point.clone();
        }

        // Repeat whole passes until something moves; a point is never
        // proposed twice in a row unchanged.
        loop {
            let candidate = space.mutate(&incumbent.point, rate, StepSchedule::Fine, rng);
            if candidate != incumbent.point {
                return candidate;
            }
        }
    }

    fn tell(&mut self, point: Point, value: f64, violation: Option<f64>) -> Result<()> {
        self.state.record(point, value, violation)
    }

    fn n_evaluations(&self) -> usize {
        self.state.history.len()
    }

    fn best(&self) -> Option<(&[Value], f64)> {
        self.state.best()
    }

    fn result(&self) -> OptimizeResult {
        self.state.result()
    }
}

/// Builder for configuring a [`RandomStepOptimizer`].
///
/// Defaults:
/// - `n_random_starts`: 13
/// - `mutation_rate`: 0.1
/// - `tolerance`: `1e-3`
/// - `seed`: random
#[derive(Clone, Debug)]
pub struct RandomStepOptimizerBuilder {
    space: SearchSpace,
    n_random_starts: usize,
    mutation_rate: f64,
    tolerance: f64,
    seed: Option<u64>,
}

impl RandomStepOptimizerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new(space: SearchSpace) -> Self {
        Self {
            space,
            n_random_starts: DEFAULT_N_RANDOM_STARTS,
            mutation_rate: DEFAULT_MUTATION_RATE,
            tolerance: DEFAULT_TOLERANCE,
            seed: None,
        }
    }

    /// Sets the number of uniform random samples taken before mutation begins.
    #[must_use]
    pub fn n_random_starts(mut self, n: usize) -> Self {
        self.n_random_starts = n;
        self
    }

    /// Sets the mutation probability, in `(0.0, 1.0]`.
    ///
    /// `build()` will return `Err(Error::InvalidMutationRate)` otherwise.
    #[must_use]
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
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

    /// Builds the configured [`RandomStepOptimizer`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidMutationRate` if the mutation rate is not in
    /// `(0.0, 1.0]` and `Error::InvalidTolerance` if the tolerance is
    /// negative.
    pub fn build(self) -> Result<RandomStepOptimizer> {
        validate_rate(self.mutation_rate, Error::InvalidMutationRate)?;
        validate_tolerance(self.tolerance)?;
        Ok(RandomStepOptimizer::from_builder(self))
    }
}
