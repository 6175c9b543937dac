//! Search space dimensions: sampling and mutation per dimension kind.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rng_util;
use crate::value::Value;

/// A category label of a [`Dimension::Categorical`].
///
/// Categories are opaque to the optimizers: only their position in the list
/// matters. The label is kept so callers can decode a point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Category {
    /// A boolean label.
    Bool(bool),
    /// An integer label.
    Int(i64),
    /// A floating-point label.
    Float(f64),
    /// A string label.
    Str(String),
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Category::Bool(v) => write!(f, "{v}"),
            Category::Int(v) => write!(f, "{v}"),
            Category::Float(v) => write!(f, "{v}"),
            Category::Str(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Category {
    fn from(v: bool) -> Self {
        Category::Bool(v)
    }
}

impl From<i64> for Category {
    fn from(v: i64) -> Self {
        Category::Int(v)
    }
}

impl From<i32> for Category {
    fn from(v: i32) -> Self {
        Category::Int(i64::from(v))
    }
}

impl From<f64> for Category {
    fn from(v: f64) -> Self {
        Category::Float(v)
    }
}

impl From<&str> for Category {
    fn from(v: &str) -> Self {
        Category::Str(v.to_owned())
    }
}

impl From<String> for Category {
    fn from(v: String) -> Self {
        Category::Str(v)
    }
}

/// The sequence of step scales a numeric mutation pass walks through.
///
/// Each scale gets one Bernoulli trial. Walking exponentially shrinking scales
/// lets a single pass make coarse and fine moves, much like flipping bits of
/// a binary encoding of the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepSchedule {
    /// Scales `2^0, 2^-1, ..., 2^-15` (16 trials). Used by the genetic optimizer.
    Coarse,
    /// Scales `2^-16, 2^-15, ..., 2^0` (17 trials). Used by the random-step optimizer.
    Fine,
}

impl StepSchedule {
    fn scales(self) -> impl Iterator<Item = f64> {
        let (first, step, len) = match self {
            StepSchedule::Coarse => (0, -1, 16),
            StepSchedule::Fine => (-16, 1, 17),
        };
        (0..len).map(move |i| 2.0_f64.powi(first + step * i))
    }
}

/// One axis of a search space.
///
/// Construct through [`Dimension::continuous`], [`Dimension::discrete`] and
/// [`Dimension::categorical`], which validate their arguments.
///
/// # Examples
///
/// ```
/// use stochopt::Dimension;
///
/// let x = Dimension::continuous(-5.0, 10.0).unwrap();
/// let n = Dimension::discrete(1, 8).unwrap();
/// let kind = Dimension::categorical(["linear", "rbf"]).unwrap();
///
/// assert!(Dimension::continuous(1.0, 0.0).is_err());
/// assert!(Dimension::categorical(Vec::<&str>::new()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "lowercase")
)]
pub enum Dimension {
    /// Real values in `[low, high]`.
    Continuous {
        /// Lower bound (inclusive).
        low: f64,
        /// Upper bound (inclusive).
        high: f64,
    },
    /// Integers in `[low, high]`.
    Discrete {
        /// Lower bound (inclusive).
        low: i64,
        /// Upper bound (inclusive).
        high: i64,
    },
    /// One of a finite, ordered set of categories.
    Categorical {
        /// The available categories.
        categories: Vec<Category>,
    },
}

impl Dimension {
    /// Creates a continuous dimension over `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBounds` if `low > high` or a bound is not finite.
    pub fn continuous(low: f64, high: f64) -> Result<Self> {
        let dim = Dimension::Continuous { low, high };
        dim.validate()?;
        Ok(dim)
    }

    /// Creates a discrete dimension over the integers in `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDiscreteBounds` if `low > high`.
    pub fn discrete(low: i64, high: i64) -> Result<Self> {
        let dim = Dimension::Discrete { low, high };
        dim.validate()?;
        Ok(dim)
    }

    /// Creates a categorical dimension from a list of labels.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyCategories` if no category is given.
    pub fn categorical<I>(categories: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Category>,
    {
        let dim = Dimension::Categorical {
            categories: categories.into_iter().map(Into::into).collect(),
        };
        dim.validate()?;
        Ok(dim)
    }

    /// Checks the dimension invariants.
    ///
    /// Dimensions built with the variant syntax directly (or deserialized)
    /// bypass the constructors; [`SearchSpace::new`](crate::SearchSpace::new)
    /// calls this for every dimension.
    ///
    /// # Errors
    ///
    /// Returns the same errors as the constructors.
    pub fn validate(&self) -> Result<()> {
        match self {
            Dimension::Continuous { low, high } => {
                if !low.is_finite() || !high.is_finite() || low > high {
                    return Err(Error::InvalidBounds {
                        low: *low,
                        high: *high,
                    });
                }
            }
            Dimension::Discrete { low, high } => {
                if low > high {
                    return Err(Error::InvalidDiscreteBounds {
                        low: *low,
                        high: *high,
                    });
                }
            }
            Dimension::Categorical { categories } => {
                if categories.is_empty() {
                    return Err(Error::EmptyCategories);
                }
            }
        }
        Ok(())
    }

    /// Returns `true` if `value` has the right kind and lies within this dimension.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        match (self, value) {
            (Dimension::Continuous { low, high }, Value::Float(v)) => (*low..=*high).contains(v),
            (Dimension::Discrete { low, high }, Value::Int(v)) => (*low..=*high).contains(v),
            (Dimension::Categorical { categories }, Value::Categorical(i)) => *i < categories.len(),
            _ => false,
        }
    }

    /// Returns `true` if the dimension admits exactly one value.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        match self {
            Dimension::Continuous { low, high } => low == high,
            Dimension::Discrete { low, high } => low == high,
            Dimension::Categorical { categories } => categories.len() == 1,
        }
    }

    /// Returns the category label a categorical value refers to.
    #[must_use]
    pub fn category(&self, value: &Value) -> Option<&Category> {
        match (self, value) {
            (Dimension::Categorical { categories }, Value::Categorical(i)) => categories.get(*i),
            _ => None,
        }
    }

    /// Draws a uniformly random value.
    pub(crate) fn sample(&self, rng: &mut fastrand::Rng) -> Value {
        match self {
            Dimension::Continuous { low, high } => {
                Value::Float(rng_util::f64_range(rng, *low, *high))
            }
            Dimension::Discrete { low, high } => Value::Int(rng.i64(*low..=*high)),
            Dimension::Categorical { categories } => {
                Value::Categorical(rng.usize(0..categories.len()))
            }
        }
    }

    /// Returns a mutated copy of `value`.
    ///
    /// Numeric values are nudged toward one of the bounds once per scale of
    /// `schedule` whose Bernoulli(`rate`) trial succeeds. Categorical values
    /// are re-drawn with probability `rate`. A value of the wrong kind is
    /// returned unchanged.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub(crate) fn mutate(
        &self,
        value: &Value,
        rate: f64,
        schedule: StepSchedule,
        rng: &mut fastrand::Rng,
    ) -> Value {
        match (self, value) {
            (Dimension::Continuous { low, high }, Value::Float(v)) => {
                Value::Float(nudge(rng, *v, *low, *high, rate, schedule))
            }
            (Dimension::Discrete { low, high }, Value::Int(v)) => {
                let moved = nudge(rng, *v as f64, *low as f64, *high as f64, rate, schedule);
                // Rounding happens once, after every trial of the pass.
                Value::Int((moved.round() as i64).clamp(*low, *high))
            }
            (Dimension::Categorical { categories }, Value::Categorical(_))
                if rng_util::chance(rng, rate) =>
            {
                Value::Categorical(rng.usize(0..categories.len()))
            }
            _ => value.clone(),
        }
    }
}

fn nudge(
    rng: &mut fastrand::Rng,
    mut v: f64,
    low: f64,
    high: f64,
    rate: f64,
    schedule: StepSchedule,
) -> f64 {
    for scale in schedule.scales() {
        if !rng_util::chance(rng, rate) {
            continue;
        }
        if rng_util::chance(rng, 0.5) {
            v += (high - v) * scale;
        } else {
            v -= (v - low) * scale;
        }
        v = v.clamp(low, high);
    }
    v
}
