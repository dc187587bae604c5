//! Conversion to and from `nalgebra` dense matrices.

use nalgebra::{DMatrix, Scalar};

use super::Matrix;
use crate::error::AlgebraResult;

impl<E: Scalar> Matrix<E> {
    /// Copy a regular matrix into an `nalgebra::DMatrix`.
    pub fn to_dmatrix(&self) -> AlgebraResult<DMatrix<E>> {
        self.validate_regular()?;
        let (nrows, ncols) = self.shape();
        let data: Vec<E> = self.rows.iter().flatten().cloned().collect();
        Ok(DMatrix::from_row_slice(nrows, ncols, &data))
    }

    pub fn from_dmatrix(source: &DMatrix<E>) -> Self {
        let rows = (0..source.nrows())
            .map(|i| (0..source.ncols()).map(|j| source[(i, j)].clone()).collect())
            .collect();
        Matrix::from_rows(rows)
    }
}
