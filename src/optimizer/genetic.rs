//! Genetic optimizer: tournament selection, uniform crossover and mutation.
//!
//! After a phase of uniform random starts the whole observation history acts
//! as the population. Each ask:
//!
//! 1. **Selection**: two independent tournaments. A tournament draws
//!    `ceil(tournament_fraction * |history|)` distinct observations (at least
//!    one) and keeps the best of them. Because only the ranking matters,
//!    rescaling the objective has no effect on selection.
//! 2. **Crossover**: every coordinate of the child comes from either parent
//!    with probability 0.5.
//! 3. **Mutation**: one pass with the [`StepSchedule::Coarse`] scales
//!    `2^0 .. 2^-15`. The child may come out unchanged.
//!
//! # Configuration
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `n_random_starts` | 10 | Uniform samples before evolution begins |
//! | `tournament_fraction` | 0.2 | Share of the history drawn into each tournament |
//! | `mutation_rate` | 0.05 | Per-scale (and per-category) mutation probability |
//! | `tolerance` | `1e-3` | Feasibility tolerance on the constraint violation |
//! | `seed` | random | RNG seed for reproducibility |
//!
//! # Examples
//!
//! ```
//! use stochopt::prelude::*;
//!
//! let space = SearchSpace::new(vec![
//!     Dimension::continuous(-5.0, 10.0).unwrap(),
//!     Dimension::continuous(0.0, 15.0).unwrap(),
//! ])
//! .unwrap();
//!
//! let optimizer = GeneticOptimizer::builder(space)
//!     .n_random_starts(20)
//!     .tournament_fraction(0.3)
//!     .mutation_rate(0.1)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! ```

use std::collections::BTreeSet;

use crate::dimension::StepSchedule;
use crate::error::{Error, Result};
use crate::observation::{DEFAULT_TOLERANCE, History, Observation};
use crate::optimizer::Optimizer;
use crate::optimizer::common::{SearchState, validate_rate, validate_tolerance};
use crate::result::OptimizeResult;
use crate::rng_util;
use crate::space::SearchSpace;
use crate::value::{Point, Value};

const DEFAULT_N_RANDOM_STARTS: usize = 10;
const DEFAULT_TOURNAMENT_FRACTION: f64 = 0.2;
const DEFAULT_MUTATION_RATE: f64 = 0.05;

/// Evolves new points from the observation history.
#[derive(Clone, Debug)]
pub struct GeneticOptimizer {
    state: SearchState,
    tournament_fraction: f64,
    mutation_rate: f64,
}

impl GeneticOptimizer {
    /// Creates an optimizer with default settings and a random seed.
    #[must_use]
    pub fn new(space: SearchSpace) -> Self {
        Self::from_builder(GeneticOptimizerBuilder::new(space))
    }

    /// Creates an optimizer with default settings and a fixed seed.
    #[must_use]
    pub fn with_seed(space: SearchSpace, seed: u64) -> Self {
        Self::from_builder(GeneticOptimizerBuilder::new(space).seed(seed))
    }

    /// Creates a builder for configuring a `GeneticOptimizer`.
    #[must_use]
    pub fn builder(space: SearchSpace) -> GeneticOptimizerBuilder {
        GeneticOptimizerBuilder::new(space)
    }

    /// Returns the observations told so far.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.state.history
    }

    /// Returns how many random starts remain before evolution begins.
    #[must_use]
    pub fn random_starts_left(&self) -> usize {
        self.state.random_starts_left
    }

    fn from_builder(builder: GeneticOptimizerBuilder) -> Self {
        Self {
            state: SearchState::new(
                builder.space,
                builder.seed,
                builder.n_random_starts,
                builder.tolerance,
            ),
            tournament_fraction: builder.tournament_fraction,
            mutation_rate: builder.mutation_rate,
        }
    }
}

impl Optimizer for GeneticOptimizer {
    fn space(&self) -> &SearchSpace {
        &self.state.space
    }

    fn ask(&mut self) -> Point {
        if self.state.in_warm_up() {
            return self.state.sample();
        }

        let SearchState {
            space,
            rng,
            history,
            ..
        } = &mut self.state;
        let (Some(a), Some(b)) = (
            tournament(history, self.tournament_fraction, rng),
            tournament(history, self.tournament_fraction, rng),
        ) else {
            return space.sample(rng);
        };
        let child = crossover(&a.point, &b.point, rng);
        space.mutate(&child, self.mutation_rate, StepSchedule::Coarse, rng)
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

/// Number of distinct observations drawn into a tournament.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn tournament_size(fraction: f64, population: usize) -> usize {
    ((fraction * population as f64).ceil() as usize).clamp(1, population.max(1))
}

/// Returns the best of a random subset of `history`, or `None` if it is empty.
fn tournament<'a>(
    history: &'a History,
    fraction: f64,
    rng: &mut fastrand::Rng,
) -> Option<&'a Observation> {
    let n = history.len();
    if n == 0 {
        return None;
    }
    let size = tournament_size(fraction, n);
    let mut drawn = BTreeSet::new();
    while drawn.len() < size {
        drawn.insert(rng.usize(0..n));
    }
    history.best_of(drawn)
}

/// Uniform crossover: each coordinate comes from `a` or `b` with equal odds.
fn crossover(a: &[Value], b: &[Value], rng: &mut fastrand::Rng) -> Point {
    a.iter()
        .zip(b)
        .map(|(va, vb)| {
            if rng_util::chance(rng, 0.5) {
                va.clone()
            } else {
                vb.clone()
            }
        })
        .collect()
}

/// Builder for configuring a [`GeneticOptimizer`].
///
/// Defaults:
/// - `n_random_starts`: 10
/// - `tournament_fraction`: 0.2
/// - `mutation_rate`: 0.05
/// - `tolerance`: `1e-3`
/// - `seed`: random
#[derive(Clone, Debug)]
pub struct GeneticOptimizerBuilder {
    space: SearchSpace,
    n_random_starts: usize,
    tournament_fraction: f64,
    mutation_rate: f64,
    tolerance: f64,
    seed: Option<u64>,
}

impl GeneticOptimizerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new(space: SearchSpace) -> Self {
        Self {
            space,
            n_random_starts: DEFAULT_N_RANDOM_STARTS,
            tournament_fraction: DEFAULT_TOURNAMENT_FRACTION,
            mutation_rate: DEFAULT_MUTATION_RATE,
            tolerance: DEFAULT_TOLERANCE,
            seed: None,
        }
    }

    /// Sets the size of the initial random population.
    #[must_use]
    pub fn n_random_starts(mut self, n: usize) -> Self {
        self.n_random_starts = n;
        self
    }

    /// Sets the share of the history drawn into each tournament, in `(0.0, 1.0]`.
    ///
    /// A fraction of 1.0 always selects the best observation, which turns
    /// crossover into a no-op.
    #[must_use]
    pub fn tournament_fraction(mut self, fraction: f64) -> Self {
        self.tournament_fraction = fraction;
        self
    }

    /// Sets the mutation probability, in `(0.0, 1.0]`.
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

    /// Builds the configured [`GeneticOptimizer`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTournamentFraction` or
    /// `Error::InvalidMutationRate` if either is outside `(0.0, 1.0]`, and
    /// `Error::InvalidTolerance` if the tolerance is negative.
    pub fn build(self) -> Result<GeneticOptimizer> {
        validate_rate(self.tournament_fraction, Error::InvalidTournamentFraction)?;
        validate_rate(self.mutation_rate, Error::InvalidMutationRate)?;
        validate_tolerance(self.tolerance)?;
        Ok(GeneticOptimizer::from_builder(self))
    }
}
