//! algebra_kit: canonical complex numbers and shape-checked matrices
//!
//! Two independent components:
//!
//! - [`ComplexValue`] stores `real + imaginary * i^exp` and keeps it reduced
//!   to `exp` in `{0, 1}` after every construction and operation
//! - [`Matrix`] is a generic row-major container with validated transpose,
//!   row swap, column swap and deep copy, each returning a new matrix
//!
//! Both are plain values: nothing is mutated in place and nothing is shared
//! between an input and its result.

pub mod complex;
pub mod error;
pub mod formatting;
pub mod matrix;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use algebra_kit::prelude::*;
///
/// let z = ComplexValue::rectangular(1.0, 2.0);
/// assert_eq!(z.to_string(), "1.0 +2.0 i");
/// ```
pub mod prelude {
    pub use super::complex::ComplexValue;
    pub use super::error::{AlgebraError, AlgebraResult};
    pub use super::matrix::wrap::*;
    pub use super::matrix::Matrix;
}

pub use prelude::*;
