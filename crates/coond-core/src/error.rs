//! Error types for coond

use thiserror::Error;

/// Result type alias using coond's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or editing a `CooNd`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// None of the supported construction forms matched the arguments
    #[error("Invalid construction: {reason}")]
    InvalidConstruction {
        /// What was wrong with the arguments
        reason: String,
    },

    /// Coordinate count and value count of a batch disagree
    #[error("Shape mismatch: expected {expected} values, got {got}")]
    ShapeMismatch {
        /// Number of coordinates supplied
        expected: usize,
        /// Number of values supplied
        got: usize,
    },

    /// A coordinate does not have one component per axis
    #[error("Dimension mismatch: expected coordinates of length {expected}, got {got}")]
    DimensionMismatch {
        /// Number of axes of the array
        expected: usize,
        /// Length of the offending coordinate
        got: usize,
    },

    /// More than one stored entry at a coordinate that must be unique
    #[error("Multiple assignments to single entry {coord:?} ({count} stored entries)")]
    MultipleAssignment {
        /// The ambiguous coordinate
        coord: Vec<usize>,
        /// How many entries share it
        count: usize,
    },

    /// Coordinate component outside the array's shape
    #[error("Index {index} out of bounds for axis {axis} of size {size}")]
    IndexOutOfBounds {
        /// Axis of the offending component
        axis: usize,
        /// The invalid index
        index: usize,
        /// Size of that axis
        size: usize,
    },

    /// Axis number that does not exist
    #[error("Invalid axis {axis} for array with {ndim} dimensions")]
    InvalidDimension {
        /// The invalid axis
        axis: usize,
        /// Number of dimensions
        ndim: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create an invalid construction error
    pub fn invalid_construction(reason: impl Into<String>) -> Self {
        Self::InvalidConstruction {
            reason: reason.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: usize, got: usize) -> Self {
        Self::ShapeMismatch { expected, got }
    }

    /// Create a multiple assignment error
    pub fn multiple_assignment(coord: &[usize], count: usize) -> Self {
        Self::MultipleAssignment {
            coord: coord.to_vec(),
            count,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
