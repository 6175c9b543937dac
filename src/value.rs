//! Coordinate values and points.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One coordinate of a [`Point`].
///
/// Categorical coordinates store the index into their dimension's category
/// list. Use [`SearchSpace::category`](crate::SearchSpace::category) to get
/// the label back.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// A value of a continuous dimension.
    Float(f64),
    /// A value of a discrete dimension.
    Int(i64),
    /// A categorical value, stored as an index into the category list.
    Categorical(usize),
}

/// A candidate solution: one [`Value`] per dimension, in search space order.
pub type Point = Vec<Value>;

impl Value {
    /// Returns the numeric value of a continuous or discrete coordinate.
    ///
    /// Categorical coordinates have no numeric meaning and return `None`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            Value::Categorical(_) => None,
        }
    }

    /// Returns the integer of a discrete coordinate.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the category index of a categorical coordinate.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Value::Categorical(i) => Some(*i),
            _ => None,
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Float(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Categorical(i) => write!(f, "#{i}"),
        }
    }
}

/// Converts a purely numeric point into plain `f64` coordinates.
///
/// Returns `None` if any coordinate is categorical.
///
/// # Examples
///
/// ```
/// use stochopt::{Value, numeric};
///
/// let x = vec![Value::Float(0.5), Value::Int(3)];
/// assert_eq!(numeric(&x), Some(vec![0.5, 3.0]));
/// assert_eq!(numeric(&[Value::Categorical(1)]), None);
/// ```
#[must_use]
pub fn numeric(point: &[Value]) -> Option<Vec<f64>> {
    point.iter().map(Value::as_f64).collect()
}
