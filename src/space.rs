//! The search space: an ordered, validated list of dimensions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dimension::{Category, Dimension, StepSchedule};
use crate::error::{Error, Result};
use crate::value::{Point, Value};

/// An ordered collection of [`Dimension`]s.
///
/// A point of the space holds one [`Value`] per dimension, in the same
/// order. The space is validated once at construction and never changes.
///
/// # Examples
///
/// ```
/// use stochopt::{Dimension, SearchSpace};
///
/// let space = SearchSpace::new(vec![
///     Dimension::continuous(-5.0, 10.0).unwrap(),
///     Dimension::continuous(0.0, 15.0).unwrap(),
/// ])
/// .unwrap();
/// assert_eq!(space.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Dimension>", into = "Vec<Dimension>")
)]
pub struct SearchSpace {
    dimensions: Vec<Dimension>,
}

impl SearchSpace {
    /// Creates a search space, validating every dimension.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptySearchSpace` if `dimensions` is empty, or the
    /// first validation error of a malformed dimension.
    pub fn new(dimensions: Vec<Dimension>) -> Result<Self> {
        if dimensions.is_empty() {
            return Err(Error::EmptySearchSpace);
        }
        for dim in &dimensions {
            dim.validate()?;
        }
        Ok(Self { dimensions })
    }

    /// Returns the dimensions in order.
    #[must_use]
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Returns the dimensionality of the space.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    /// Always `false`: a search space has at least one dimension.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Returns `true` if every coordinate of `point` lies within its dimension.
    #[must_use]
    pub fn contains(&self, point: &[Value]) -> bool {
        self.check(point).is_ok()
    }

    /// Checks that `point` belongs to the space.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if the lengths differ and
    /// `Error::ValueOutOfBounds` for the first coordinate outside its
    /// dimension.
    pub fn check(&self, point: &[Value]) -> Result<()> {
        if point.len() != self.dimensions.len() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions.len(),
                got: point.len(),
            });
        }
        match self
            .dimensions
            .iter()
            .zip(point)
            .position(|(dim, v)| !dim.contains(v))
        {
            Some(index) => Err(Error::ValueOutOfBounds { index }),
            None => Ok(()),
        }
    }

    /// Returns the category label of the coordinate at `index`, if categorical.
    #[must_use]
    pub fn category(&self, index: usize, value: &Value) -> Option<&Category> {
        self.dimensions.get(index)?.category(value)
    }

    /// Returns `true` if the space contains exactly one point.
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.dimensions.iter().all(Dimension::is_degenerate)
    }

    /// Draws a uniformly random point.
    pub(crate) fn sample(&self, rng: &mut fastrand::Rng) -> Point {
        self.dimensions.iter().map(|d| d.sample(rng)).collect()
    }

    /// Returns a copy of `point` with every coordinate passed through
    /// [`Dimension::mutate`].
    pub(crate) fn mutate(
        &self,
        point: &[Value],
        rate: f64,
        schedule: StepSchedule,
        rng: &mut fastrand::Rng,
    ) -> Point {
        self.dimensions
            .iter()
            .zip(point)
            .map(|(dim, v)| dim.mutate(v, rate, schedule, rng))
            .collect()
    }
}

impl TryFrom<Vec<Dimension>> for SearchSpace {
    type Error = Error;

    fn try_from(dimensions: Vec<Dimension>) -> Result<Self> {
        Self::new(dimensions)
    }
}

impl From<SearchSpace> for Vec<Dimension> {
    fn from(space: SearchSpace) -> Self {
        space.dimensions
    }
}
