//! Value-returning transforms: transpose, row and column swaps, deep copy.
//!
//! None of these mutate `self`. Each result owns newly allocated rows.

use super::Matrix;
use crate::error::{AlgebraError, AlgebraResult};

impl<E: Clone> Matrix<E> {
    /// Copy every row into new storage.
    pub fn deep_copy(&self) -> Matrix<E> {
        Matrix {
            rows: self.rows.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// `cols x rows` matrix with `result[i][j] == self[j][i]`.
    ///
    /// Requires a regular matrix; it need not be square. A matrix whose rows
    /// are all empty transposes to a matrix without rows.
    pub fn transpose(&self) -> AlgebraResult<Matrix<E>> {
        self.validate_regular()?;
        let (nrows, ncols) = self.shape();

        let rows = (0..ncols)
            .map(|col| (0..nrows).map(|row| self.rows[row][col].clone()).collect())
            .collect();
        Ok(Matrix { rows })
    }

    /// Copy of a regular matrix with rows `first` and `second` exchanged.
    pub fn swap_rows(&self, first: usize, second: usize) -> AlgebraResult<Matrix<E>> {
        self.validate_regular()?;
        let nrows = self.nrows();
        for index in [first, second] {
            if index >= nrows {
                return Err(AlgebraError::bounds_error(index, nrows));
            }
        }

        let mut swapped = self.deep_copy();
        swapped.rows.swap(first, second);
        Ok(swapped)
    }

    /// Copy with columns `first` and `second` exchanged in every row.
    ///
    /// Rows may have different lengths, but both columns must exist in every
    /// row; otherwise the call fails before anything is copied.
    pub fn swap_columns(&self, first: usize, second: usize) -> AlgebraResult<Matrix<E>> {
        for row in &self.rows {
            for index in [first, second] {
                if index >= row.len() {
                    return Err(AlgebraError::bounds_error(index, row.len()));
                }
            }
        }

        let mut swapped = self.deep_copy();
        for row in &mut swapped.rows {
            row.swap(first, second);
        }
        Ok(swapped)
    }
}
