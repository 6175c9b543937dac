//! Evaluated points and the per-optimizer history of them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::Point;

/// Default feasibility tolerance: a point is feasible iff its constraint
/// violation is strictly below this value.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// A point together with its objective value and constraint violation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    /// The evaluated point.
    pub point: Point,
    /// The objective value at `point`.
    pub value: f64,
    /// The constraint violation at `point` (0.0 when unconstrained).
    pub violation: f64,
}

impl Observation {
    /// Creates an observation. A missing violation counts as 0.0.
    #[must_use]
    pub fn new(point: Point, value: f64, violation: Option<f64>) -> Self {
        Self {
            point,
            value,
            violation: violation.unwrap_or(0.0),
        }
    }

    /// Returns `true` if the violation is strictly below `tolerance`.
    #[must_use]
    pub fn is_feasible(&self, tolerance: f64) -> bool {
        self.violation < tolerance
    }

    /// Returns `true` if `self` ranks strictly ahead of `other`.
    ///
    /// Feasible observations rank ahead of infeasible ones. Feasible
    /// observations are ordered by objective value, infeasible ones by
    /// violation. NaN objectives rank last among feasible observations.
    pub(crate) fn ranks_before(&self, other: &Observation, tolerance: f64) -> bool {
        match (self.is_feasible(tolerance), other.is_feasible(tolerance)) {
            (true, false) => true,
            (false, true) => false,
            (true, true) => {
                self.value < other.value || (other.value.is_nan() && !self.value.is_nan())
            }
            (false, false) => self.violation < other.violation,
        }
    }
}

/// Append-only, ordered record of the observations made by one optimizer.
#[derive(Clone, Debug)]
pub struct History {
    observations: Vec<Observation>,
    tolerance: f64,
}

impl History {
    /// Creates an empty history judging feasibility with `tolerance`.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            observations: Vec::new(),
            tolerance,
        }
    }

    /// Appends an observation.
    pub fn push(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns `true` if nothing has been observed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Returns the observation at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.observations.get(index)
    }

    /// Returns all observations in the order they were made.
    #[must_use]
    pub fn as_slice(&self) -> &[Observation] {
        &self.observations
    }

    /// Iterates over the observations in the order they were made.
    pub fn iter(&self) -> core::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Returns the feasibility tolerance of this history.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the top-ranked observation, feasible or not.
    ///
    /// Ties keep the earliest observation.
    #[must_use]
    pub fn best(&self) -> Option<&Observation> {
        self.best_of(0..self.observations.len())
    }

    /// Returns the top-ranked observation if it is feasible and its value is
    /// not NaN.
    #[must_use]
    pub fn best_feasible(&self) -> Option<&Observation> {
        self.best().filter(|o| o.is_feasible(self.tolerance) && !o.value.is_nan())
    }

    /// Returns the top-ranked observation among `indices`, visited in order.
    pub(crate) fn best_of(&self, indices: impl IntoIterator<Item = usize>) -> Option<&Observation> {
        indices
            .into_iter()
            .filter_map(|i| self.observations.get(i))
            .fold(None, |best: Option<&Observation>, o| match best {
                Some(b) if !o.ranks_before(b, self.tolerance) => Some(b),
                _ => Some(o),
            })
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Observation;
    type IntoIter = core::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
