#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when a continuous dimension has `low > high` or a non-finite bound.
    #[error("invalid bounds: low ({low}) must be finite and less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when a discrete dimension has `low > high`.
    #[error("invalid discrete bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidDiscreteBounds {
        /// The lower bound value.
        low: i64,
        /// The upper bound value.
        high: i64,
    },

    /// Returned when a categorical dimension has no categories.
    #[error("categorical dimension must have at least one category")]
    EmptyCategories,

    /// Returned when a search space has no dimensions.
    #[error("search space must have at least one dimension")]
    EmptySearchSpace,

    /// Returned when the mutation rate is not in `(0.0, 1.0]`.
    #[error("invalid mutation rate: {0} must be in (0.0, 1.0]")]
    InvalidMutationRate(f64),

    /// Returned when the tournament fraction is not in `(0.0, 1.0]`.
    #[error("invalid tournament fraction: {0} must be in (0.0, 1.0]")]
    InvalidTournamentFraction(f64),

    /// Returned when the feasibility tolerance is negative or NaN.
    #[error("invalid tolerance: {0} must be non-negative")]
    InvalidTolerance(f64),

    /// Returned when a point has the wrong number of coordinates.
    #[error("dimension mismatch: expected {expected} values, got {got}")]
    DimensionMismatch {
        /// The dimensionality of the search space.
        expected: usize,
        /// The number of values in the point.
        got: usize,
    },

    /// Returned when a coordinate does not belong to its dimension.
    #[error("value at index {index} is outside its dimension")]
    ValueOutOfBounds {
        /// Position of the offending coordinate.
        index: usize,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
