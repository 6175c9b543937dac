//! The [`Objective`] trait defines what gets minimized.
//!
//! Plain closures taking a point and returning `Result<f64, E>` are
//! objectives already:
//!
//! ```
//! use core::convert::Infallible;
//!
//! use stochopt::prelude::*;
//!
//! let space = SearchSpace::new(vec![Dimension::continuous(-10.0, 10.0).unwrap()]).unwrap();
//! let result = rs_minimize(
//!     |x: &[Value]| {
//!         let v = x[0].as_f64().unwrap_or_default();
//!         Ok::<_, Infallible>((v - 3.0).powi(2))
//!     },
//!     space,
//!     100,
//! )
//! .unwrap();
//! assert!(result.fun < 1.0);
//! ```
//!
//! Attach a constraint with [`Constrained`], or implement [`Objective`] on a
//! struct to stop the search early:
//!
//! ```
//! use core::convert::Infallible;
//! use core::ops::ControlFlow;
//!
//! use stochopt::prelude::*;
//!
//! struct UntilBelow {
//!     target: f64,
//! }
//!
//! impl Objective for UntilBelow {
//!     type Error = Infallible;
//!
//!     fn evaluate(&mut self, x: &[Value]) -> Result<f64, Infallible> {
//!         Ok(x[0].as_f64().unwrap_or_default().powi(2))
//!     }
//!
//!     fn after_evaluation(&mut self, observation: &Observation) -> ControlFlow<()> {
//!         if observation.value < self.target {
//!             ControlFlow::Break(())
//!         } else {
//!             ControlFlow::Continue(())
//!         }
//!     }
//! }
//!
//! let space = SearchSpace::new(vec![Dimension::continuous(-10.0, 10.0).unwrap()]).unwrap();
//! let mut optimizer = RandomOptimizer::with_seed(space, 1);
//! let result = minimize(&mut optimizer, UntilBelow { target: 1.0 }, Budget::Calls(10_000)).unwrap();
//! assert!(result.fun < 1.0);
//! assert!(result.n_evaluations < 10_000);
//! ```

use core::ops::ControlFlow;

use crate::observation::Observation;
use crate::value::Value;

/// A function to minimize, with an optional constraint and a stopping hook.
///
/// The only required method is [`evaluate`](Objective::evaluate). Errors
/// returned by any method abort the search and reach the caller of
/// [`minimize`](crate::minimize) unchanged.
pub trait Objective {
    /// The error type returned by evaluation.
    type Error;

    /// Computes the objective value at `x`.
    ///
    /// # Errors
    ///
    /// Any error of the objective itself.
    fn evaluate(&mut self, x: &[Value]) -> Result<f64, Self::Error>;

    /// Computes the constraint violation at `x`, or `None` when unconstrained.
    ///
    /// Called before [`evaluate`](Objective::evaluate). A point is feasible
    /// iff the violation is below the optimizer's tolerance.
    ///
    /// Default: unconstrained.
    ///
    /// # Errors
    ///
    /// Any error of the constraint function.
    fn violation(&mut self, _x: &[Value]) -> Result<Option<f64>, Self::Error> {
        Ok(None)
    }

    /// Called after each evaluation, before the optimizer is told.
    ///
    /// Return `ControlFlow::Break(())` to stop the search after this
    /// observation has been recorded.
    ///
    /// Default: always continues.
    fn after_evaluation(&mut self, _observation: &Observation) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

impl<F, E> Objective for F
where
    F: FnMut(&[Value]) -> Result<f64, E>,
{
    type Error = E;

    fn evaluate(&mut self, x: &[Value]) -> Result<f64, E> {
        self(x)
    }
}

/// An objective paired with a constraint function.
///
/// The constraint returns a non-negative violation score; `0.0` means the
/// constraint holds.
///
/// # Examples
///
/// ```
/// use core::convert::Infallible;
///
/// use stochopt::prelude::*;
///
/// // Minimize x^2 subject to x >= 1.
/// let objective = Constrained::new(
///     |x: &[Value]| Ok::<_, Infallible>(x[0].as_f64().unwrap_or_default().powi(2)),
///     |x: &[Value]| Ok::<_, Infallible>((1.0 - x[0].as_f64().unwrap_or_default()).max(0.0)),
/// );
/// let space = SearchSpace::new(vec![Dimension::continuous(-3.0, 3.0).unwrap()]).unwrap();
/// let result = ga_minimize(objective, space, 200).unwrap();
/// assert!(result.x.unwrap()[0].as_f64().unwrap() > 1.0 - 1e-3);
/// ```
pub struct Constrained<F, C> {
    objective: F,
    constraint: C,
}

impl<F, C> Constrained<F, C> {
    /// Pairs `objective` with `constraint`.
    #[must_use]
    pub fn new(objective: F, constraint: C) -> Self {
        Self {
            objective,
            constraint,
        }
    }

    /// Splits the pair back into its parts.
    #[must_use]
    pub fn into_inner(self) -> (F, C) {
        (self.objective, self.constraint)
    }
}

impl<F, C> Objective for Constrained<F, C>
where
    F: Objective,
    C: FnMut(&[Value]) -> Result<f64, F::Error>,
{
    type Error = F::Error;

    fn evaluate(&mut self, x: &[Value]) -> Result<f64, F::Error> {
        self.objective.evaluate(x)
    }

    fn violation(&mut self, x: &[Value]) -> Result<Option<f64>, F::Error> {
        (self.constraint)(x).map(Some)
    }

    fn after_evaluation(&mut self, observation: &Observation) -> ControlFlow<()> {
        self.objective.after_evaluation(observation)
    }
}
