//! Shape checks over raw row lists.

use crate::error::{AlgebraError, AlgebraResult};

/// Check that every row has the same length as the first one.
///
/// A list with zero or one row is always regular.
pub fn validate_regular<E>(rows: &[Vec<E>]) -> AlgebraResult<()> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    let expected = first.len();

    for (index, row) in rows.iter().enumerate().skip(1) {
        if row.len() != expected {
            log::debug!(
                "irregular matrix: row {} has length {}, row 0 has {}",
                index,
                row.len(),
                expected
            );
            return Err(AlgebraError::shape_mismatch(format!(
                "the rows don't have regular lengths (row {} has length {}, expected {})",
                index,
                row.len(),
                expected
            )));
        }
    }
    Ok(())
}

/// Check that the rows are regular and as many as the columns.
pub fn validate_square<E>(rows: &[Vec<E>]) -> AlgebraResult<()> {
    validate_regular(rows)?;

    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if nrows != ncols {
        log::debug!("non-square matrix: {}x{}", nrows, ncols);
        return Err(AlgebraError::shape_mismatch(format!(
            "the number of rows and columns aren't equal ({}x{})",
            nrows, ncols
        )));
    }
    Ok(())
}
