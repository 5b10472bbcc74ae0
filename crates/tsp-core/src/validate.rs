//! Shape and value checks for distance matrices.
//!
//! A matrix is valid when it is square with at least one row, its diagonal is
//! zero and every entry is a finite, non-negative number. Symmetry and the
//! request size cap are not checked here.

use serde_json::Value;

use crate::error::MatrixError;

/// Returns `true` if `rows` is a valid distance matrix.
pub fn validate(rows: &[Vec<f64>]) -> bool {
    check(rows).is_ok()
}

/// Returns `true` if `value` is a JSON array of equally sized numeric rows
/// forming a valid distance matrix. Anything else, including `null`, objects
/// and ragged or non-numeric rows, is `false`.
pub fn validate_value(value: &Value) -> bool {
    check_value(value).is_ok()
}

/// Like [`validate`], reporting the first violation found.
pub fn check(rows: &[Vec<f64>]) -> Result<(), MatrixError> {
    let n = rows.len();
    if n == 0 {
        return Err(MatrixError::Empty);
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(MatrixError::NotSquare {
                row: i,
                len: row.len(),
                expected: n,
            });
        }
        for (j, &d) in row.iter().enumerate() {
            check_entry(i, j, d)?;
        }
    }
    Ok(())
}

/// Like [`validate_value`], reporting the first violation found.
pub fn check_value(value: &Value) -> Result<(), MatrixError> {
    let rows = value.as_array().ok_or(MatrixError::NotAnArray)?;
    let n = rows.len();
    if n == 0 {
        return Err(MatrixError::Empty);
    }
    for (i, row) in rows.iter().enumerate() {
        let row = row.as_array().ok_or(MatrixError::RowNotAnArray { row: i })?;
        if row.len() != n {
            return Err(MatrixError::NotSquare {
                row: i,
                len: row.len(),
                expected: n,
            });
        }
        for (j, cell) in row.iter().enumerate() {
            let d = cell.as_f64().ok_or(MatrixError::NotNumeric { row: i, col: j })?;
            check_entry(i, j, d)?;
        }
    }
    Ok(())
}

#[inline]
fn check_entry(row: usize, col: usize, d: f64) -> Result<(), MatrixError> {
    if !d.is_finite() {
        return Err(MatrixError::NotFinite { row, col });
    }
    if row == col && d != 0.0 {
        return Err(MatrixError::NonZeroDiagonal { city: row, value: d });
    }
    if d < 0.0 {
        return Err(MatrixError::Negative { row, col, value: d });
    }
    Ok(())
}
