#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Derivative-free stochastic minimization over mixed search spaces.
//!
//! A search space is a list of [`Dimension`]s: bounded real intervals,
//! bounded integer ranges, or finite category sets. An objective maps a point
//! of that space to an `f64`, optionally paired with a constraint returning a
//! violation score. Three optimizers look for the feasible point with the
//! smallest objective value:
//!
//! | Optimizer | Strategy | Convenience entry point |
//! |-----------|----------|-------------------------|
//! | [`RandomOptimizer`] | Uniform random sampling | [`random_minimize`] (time-boxed), [`dummy_minimize`] |
//! | [`RandomStepOptimizer`] | Mutate the incumbent with multi-scale steps | [`rs_minimize`] |
//! | [`GeneticOptimizer`] | Tournament selection, uniform crossover, mutation | [`ga_minimize`] |
//!
//! # Getting Started
//!
//! ```
//! use core::convert::Infallible;
//!
//! use stochopt::prelude::*;
//!
//! let space = SearchSpace::new(vec![
//!     Dimension::continuous(-5.0, 5.0).unwrap(),
//!     Dimension::discrete(0, 10).unwrap(),
//!     Dimension::categorical(["relu", "tanh"]).unwrap(),
//! ])
//! .unwrap();
//!
//! let result = ga_minimize(
//!     |x: &[Value]| {
//!         let a = x[0].as_f64().unwrap_or_default();
//!         let b = x[1].as_f64().unwrap_or_default();
//!         let penalty = if x[2] == Value::Categorical(0) { 0.0 } else { 1.0 };
//!         Ok::<_, Infallible>(a * a + (b - 4.0).abs() + penalty)
//!     },
//!     space,
//!     300,
//! )
//! .unwrap();
//!
//! println!("{result}");
//! assert!(result.is_success());
//! ```
//!
//! # Ask and tell
//!
//! Every optimizer implements [`Optimizer`], so the evaluation loop can live
//! in caller code: `ask()` for a point, evaluate it anywhere, `tell()` the
//! outcome. [`minimize`] is that loop with a [`Budget`] attached.
//!
//! # Constraints
//!
//! Wrap the objective in [`Constrained`] to attach a constraint. A point is
//! feasible iff its violation is strictly below the optimizer's tolerance
//! ([`DEFAULT_TOLERANCE`] unless set through a builder). Only feasible points
//! are reported as solutions; if none is found the result says so in-band
//! instead of failing.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on spaces, values, observations and results | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at key optimization points | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod dimension;
mod error;
mod minimize;
pub mod objective;
mod observation;
pub mod optimizer;
mod result;
mod rng_util;
mod space;
mod value;

pub use dimension::{Category, Dimension, StepSchedule};
pub use error::{Error, Result};
pub use minimize::{
    Budget, dummy_minimize, ga_minimize, minimize, random_minimize, rs_minimize,
};
pub use objective::{Constrained, Objective};
pub use observation::{DEFAULT_TOLERANCE, History, Observation};
pub use optimizer::{
    GeneticOptimizer, GeneticOptimizerBuilder, Optimizer, RandomOptimizer,
    RandomOptimizerBuilder, RandomStepOptimizer, RandomStepOptimizerBuilder,
};
pub use result::{MESSAGE_FOUND, MESSAGE_NOT_FOUND, OptimizeResult};
pub use space::SearchSpace;
pub use value::{Point, Value, numeric};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use stochopt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dimension::{Category, Dimension, StepSchedule};
    pub use crate::error::Error;
    pub use crate::minimize::{
        Budget, dummy_minimize, ga_minimize, minimize, random_minimize, rs_minimize,
    };
    pub use crate::objective::{Constrained, Objective};
    pub use crate::observation::{DEFAULT_TOLERANCE, History, Observation};
    pub use crate::optimizer::{
        GeneticOptimizer, Optimizer, RandomOptimizer, RandomStepOptimizer,
    };
    pub use crate::result::OptimizeResult;
    pub use crate::space::SearchSpace;
    pub use crate::value::{Point, Value, numeric};
}
