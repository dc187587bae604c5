//! Error types shared by the complex and matrix components
//!
//! Every failure is raised synchronously by the operation that detected it
//! and handed straight back to the caller.

use thiserror::Error;

/// Algebra error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// Rows of unequal length, or a non-square matrix where a square one is required
    #[error("ShapeMismatch: {message}")]
    ShapeMismatch {
        /// What the shape check found
        message: String,
    },

    /// Row or column index outside the matrix
    #[error("BoundsError: attempt to access index {index} of dimension with length {length}")]
    IndexOutOfBounds {
        /// Attempted index
        index: usize,
        /// Length of the dimension that was indexed
        length: usize,
    },

    /// Complex division whose rationalized denominator is exactly zero
    #[error("DivideError: complex division by zero")]
    DivisionByZero,
}

impl AlgebraError {
    /// Create a shape mismatch error
    pub fn shape_mismatch<S: Into<String>>(message: S) -> Self {
        AlgebraError::ShapeMismatch {
            message: message.into(),
        }
    }

    /// Create a bounds error
    pub fn bounds_error(index: usize, length: usize) -> Self {
        AlgebraError::IndexOutOfBounds { index, length }
    }
}

/// Result type alias for algebra operations
pub type AlgebraResult<T> = Result<T, AlgebraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AlgebraError::shape_mismatch("row 1 has length 2, expected 3");
        assert_eq!(
            format!("{}", err),
            "ShapeMismatch: row 1 has length 2, expected 3"
        );

        let err = AlgebraError::bounds_error(5, 3);
        assert_eq!(
            format!("{}", err),
            "BoundsError: attempt to access index 5 of dimension with length 3"
        );

        let err = AlgebraError::DivisionByZero;
        assert_eq!(format!("{}", err), "DivideError: complex division by zero");
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            AlgebraError::bounds_error(2, 1),
            AlgebraError::IndexOutOfBounds {
                index: 2,
                length: 1
            }
        ));
        assert!(matches!(
            AlgebraError::shape_mismatch("x"),
            AlgebraError::ShapeMismatch { .. }
        ));
    }
}
