//! The ask/tell [`Optimizer`] trait and its implementations.
//!
//! | Optimizer | Strategy | History |
//! |-----------|----------|---------|
//! | [`RandomOptimizer`] | Uniform random sampling | incumbent only |
//! | [`RandomStepOptimizer`] | Mutate the best point found so far | full |
//! | [`GeneticOptimizer`] | Tournament selection, uniform crossover, mutation | full |

mod common;
pub mod genetic;
pub mod random;
pub mod random_step;

pub use genetic::{GeneticOptimizer, GeneticOptimizerBuilder};
pub use random::{RandomOptimizer, RandomOptimizerBuilder};
pub use random_step::{RandomStepOptimizer, RandomStepOptimizerBuilder};

use crate::error::Result;
use crate::result::OptimizeResult;
use crate::space::SearchSpace;
use crate::value::{Point, Value};

/// A stateful search strategy driven through the ask/tell protocol.
///
/// The caller requests a candidate with [`ask`](Optimizer::ask), evaluates
/// it however it likes, and reports the outcome with
/// [`tell`](Optimizer::tell). Every point returned by `ask` lies inside
/// [`space`](Optimizer::space).
///
/// # Examples
///
/// ```
/// use stochopt::prelude::*;
///
/// let space = SearchSpace::new(vec![
///     Dimension::continuous(-2.0, 2.0).unwrap(),
///     Dimension::continuous(-2.0, 2.0).unwrap(),
/// ])
/// .unwrap();
/// let mut optimizer = GeneticOptimizer::with_seed(space, 7);
///
/// for _ in 0..256 {
///     let x = optimizer.ask();
///     let v = numeric(&x).unwrap();
///     let y = (v[0] - 1.0).powi(2) + (v[1] + 1.0).powi(2);
///     optimizer.tell(x, y, None).unwrap();
/// }
///
/// assert!(optimizer.best_value() < 0.5);
/// ```
pub trait Optimizer {
    /// Returns the search space this optimizer explores.
    fn space(&self) -> &SearchSpace;

    /// Returns the next point to evaluate.
    fn ask(&mut self) -> Point;

    /// Returns `n` points to evaluate, without intervening tells.
    fn ask_batch(&mut self, n: usize) -> Vec<Point> {
        (0..n).map(|_| self.ask()).collect()
    }

    /// Reports the objective value (and constraint violation, if any) at `point`.
    ///
    /// A missing violation counts as `0.0`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` or `Error::ValueOutOfBounds` if
    /// `point` does not belong to [`space`](Optimizer::space). A rejected
    /// point is not recorded.
    fn tell(&mut self, point: Point, value: f64, violation: Option<f64>) -> Result<()>;

    /// Returns the number of observations told so far.
    fn n_evaluations(&self) -> usize;

    /// Returns the best feasible point and its objective value.
    fn best(&self) -> Option<(&[Value], f64)>;

    /// Returns the best feasible objective value, or `+inf`.
    fn best_value(&self) -> f64 {
        self.best().map_or(f64::INFINITY, |(_, v)| v)
    }

    /// Assembles the current state into an [`OptimizeResult`].
    fn result(&self) -> OptimizeResult;
}
