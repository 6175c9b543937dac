//! The outcome of a minimization run.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::observation::Observation;
use crate::value::{Point, Value};

/// Status message of a result that holds a feasible point.
pub const MESSAGE_FOUND: &str = "Feasible solution found";

/// Status message of a result without any feasible point.
pub const MESSAGE_NOT_FOUND: &str = "No feasible solution found yet";

/// Best point found by an optimizer, plus bookkeeping.
///
/// Infeasibility is reported in-band: when no feasible point was observed,
/// `x` is `None`, `fun` is `+inf` and `message` is [`MESSAGE_NOT_FOUND`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptimizeResult {
    /// The best feasible point, if any.
    pub x: Option<Point>,
    /// The objective value at `x`, or `+inf`.
    #[cfg_attr(feature = "serde", serde(with = "fun_serde"))]
    pub fun: f64,
    /// Human-readable status.
    pub message: String,
    /// Number of `tell` calls the optimizer received.
    pub n_evaluations: usize,
    /// Every observation, in evaluation order. Empty for optimizers that do
    /// not keep history.
    pub history: Vec<Observation>,
}

/// JSON has no infinity, so a non-finite `fun` travels as `null` and comes
/// back as `+inf`.
#[cfg(feature = "serde")]
mod fun_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S: Serializer>(fun: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        fun.is_finite().then_some(*fun).serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

impl OptimizeResult {
    pub(crate) fn new(
        best: Option<(&[Value], f64)>,
        n_evaluations: usize,
        history: Vec<Observation>,
    ) -> Self {
        match best {
            Some((x, fun)) => Self {
                x: Some(x.to_vec()),
                fun,
                message: MESSAGE_FOUND.to_owned(),
                n_evaluations,
                history,
            },
            None => Self {
                x: None,
                fun: f64::INFINITY,
                message: MESSAGE_NOT_FOUND.to_owned(),
                n_evaluations,
                history,
            },
        }
    }

    /// Returns `true` if a feasible point was found.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.x.is_some()
    }

    /// Returns the objective values in evaluation order.
    #[must_use]
    pub fn func_vals(&self) -> Vec<f64> {
        self.history.iter().map(|o| o.value).collect()
    }
}

impl core::fmt::Display for OptimizeResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.x {
            Some(x) => {
                let coords: Vec<String> = x.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "{}: fun = {} at [{}] after {} evaluations",
                    self.message,
                    self.fun,
                    coords.join(", "),
                    self.n_evaluations
                )
            }
            None => write!(f, "{} after {} evaluations", self.message, self.n_evaluations),
        }
    }
}
