//! Generic two-dimensional matrices
//!
//! [`Matrix`] stores its elements as a list of independently owned rows in
//! row-major order. Rows are allowed to have different lengths; operations
//! that need a regular or square shape validate it first and fail with
//! [`AlgebraError::ShapeMismatch`](crate::error::AlgebraError::ShapeMismatch).
//!
//! Every transform borrows its input and returns a freshly allocated matrix,
//! so no row storage is ever shared between an input and its result.

mod interop;
mod transform;
mod validate;
pub mod wrap;

pub use validate::{validate_regular, validate_square};

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{AlgebraError, AlgebraResult};

/// Row-major matrix of `E`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix<E> {
    rows: Vec<Vec<E>>,
}

impl<E> Matrix<E> {
    /// Take ownership of a list of rows. The rows are not validated.
    pub fn from_rows(rows: Vec<Vec<E>>) -> Self {
        Matrix { rows }
    }

    /// Split a flat row-major buffer into `rows x cols`.
    ///
    /// Fails if the buffer length differs from `rows * cols`, or if that
    /// product does not fit in `usize`.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<E>) -> AlgebraResult<Self> {
        let (rows, cols) = shape;
        let Some(len) = rows.checked_mul(cols) else {
            return Err(AlgebraError::shape_mismatch(format!(
                "shape ({}, {}) overflows the element count",
                rows, cols
            )));
        };
        if data.len() != len {
            return Err(AlgebraError::shape_mismatch(format!(
                "invalid shape ({}, {}) for buffer of length {}",
                rows,
                cols,
                data.len()
            )));
        }
        let mut data = data.into_iter();
        let rows = (0..rows)
            .map(|_| data.by_ref().take(cols).collect())
            .collect();
        Ok(Matrix { rows })
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row, or 0 for a matrix without rows.
    pub fn ncols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// `(nrows, ncols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    /// True for a matrix without rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Borrow all rows.
    pub fn rows(&self) -> &[Vec<E>] {
        &self.rows
    }

    /// Borrow one row, or `None` past the last row.
    pub fn row(&self, index: usize) -> Option<&[E]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Element at `(row, col)`, or `None` if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&E> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Mutable element at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut E> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Give up the matrix and return its rows.
    pub fn into_rows(self) -> Vec<Vec<E>> {
        self.rows
    }

    /// Non-failing form of [`validate_regular`](Self::validate_regular).
    pub fn is_regular(&self) -> bool {
        self.validate_regular().is_ok()
    }

    /// Non-failing form of [`validate_square`](Self::validate_square).
    pub fn is_square(&self) -> bool {
        self.validate_square().is_ok()
    }

    /// Fail unless every row has the length of the first one.
    pub fn validate_regular(&self) -> AlgebraResult<()> {
        validate_regular(&self.rows)
    }

    /// Fail unless the matrix is regular and has as many rows as columns.
    pub fn validate_square(&self) -> AlgebraResult<()> {
        validate_square(&self.rows)
    }

    /// Apply `f` to every element, keeping the row structure.
    pub fn map<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&E) -> U,
    {
        Matrix {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(&mut f).collect())
                .collect(),
        }
    }

    /// Lossless element conversion, e.g. `Matrix<i32>` to `Matrix<f64>`.
    pub fn cast<U>(&self) -> Matrix<U>
    where
        E: Clone,
        U: From<E>,
    {
        self.map(|value| U::from(value.clone()))
    }
}

impl<E: Zero + Clone> Matrix<E> {
    /// `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows: vec![vec![E::zero(); cols]; rows],
        }
    }
}

impl<E> From<Vec<Vec<E>>> for Matrix<E> {
    fn from(rows: Vec<Vec<E>>) -> Self {
        Matrix::from_rows(rows)
    }
}

impl<E> Index<(usize, usize)> for Matrix<E> {
    type Output = E;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.rows[index.0][index.1]
    }
}

impl<E> IndexMut<(usize, usize)> for Matrix<E> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.rows[index.0][index.1]
    }
}

/// One row per line, elements separated by a single space.
impl<E: fmt::Display> fmt::Display for Matrix<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shape_vec() {
        let m = Matrix::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.row(0), Some(&[1, 2, 3][..]));
        assert_eq!(m.row(1), Some(&[4, 5, 6][..]));
        assert_eq!(m.row(2), None);
    }

    #[test]
    fn test_from_shape_vec_length_mismatch() {
        let result = Matrix::from_shape_vec((2, 3), vec![1.0, 2.0]);
        assert!(matches!(result, Err(AlgebraError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_from_shape_vec_overflowing_shape() {
        let result = Matrix::<i32>::from_shape_vec((usize::MAX, 2), Vec::new());
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "ShapeMismatch: shape ({}, 2) overflows the element count",
                usize::MAX
            )
        );
    }

    #[test]
    fn test_accessors() {
        let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(m.get(1, 0), Some(&3));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
        *m.get_mut(0, 1).unwrap() = 20;
        m[(1, 1)] = 40;
        assert_eq!(m[(0, 1)], 20);
        assert_eq!(m.into_rows(), vec![vec![1, 20], vec![3, 40]]);
    }

    #[test]
    fn test_empty_matrix() {
        let m: Matrix<i32> = Matrix::from_rows(Vec::new());
        assert!(m.is_empty());
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_regular());
        assert!(m.is_square());
    }

    #[test]
    fn test_zeros_and_cast() {
        let m: Matrix<i32> = Matrix::zeros(2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert!(m.rows().iter().flatten().all(|&v| v == 0));

        let ints = Matrix::from_rows(vec![vec![1i32, -2], vec![3, 4]]);
        let floats: Matrix<f64> = ints.cast();
        assert_eq!(floats[(0, 1)], -2.0);
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(m.to_string(), "1 2 3\n4 5 6");
    }
}
