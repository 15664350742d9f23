//! Error types for effect size computation
//!
//! Provides a unified error type for all failure modes of the crate. Every
//! error is raised before any arithmetic is performed; degenerate statistics
//! (zero variance, empty slices) are reported as NaN values, never as errors.

use thiserror::Error;

/// Error type for effect size operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input element type cannot be represented as a finite-precision float
    #[error("Non-numeric input: {0}")]
    NonNumeric(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data (infinite values, NaN under the raise policy)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Incompatible array shapes for the requested mode
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Reduction axis outside the array's dimensionality
    #[error("axis {axis} is out of bounds for array of dimension {ndim}")]
    AxisOutOfBounds { axis: isize, ndim: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper constructors for common error patterns

impl Error {
    /// Create an error for infinite values in an input array
    pub(crate) fn non_finite(name: &str) -> Self {
        Self::InvalidInput(format!("Input {name} contains infinite values"))
    }

    /// Create an error for NaN values under the raise policy
    pub(crate) fn nan_input(name: &str) -> Self {
        Self::InvalidInput(format!("Input {name} contains NaN values"))
    }

    /// Create an error for broadcast-incompatible shapes
    pub(crate) fn incompatible_shapes(a: &[usize], b: &[usize]) -> Self {
        Self::ShapeMismatch(format!(
            "shapes {a:?} and {b:?} are not compatible for broadcasting"
        ))
    }
}
