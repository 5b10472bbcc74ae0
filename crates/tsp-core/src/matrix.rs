use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MatrixError;
use crate::validate;

/// Validated `n x n` distance matrix, stored row-major in one flat buffer.
///
/// Entries are finite and non-negative and the diagonal is zero. Symmetry is
/// not required: `get(i, j)` and `get(j, i)` may differ.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<f64>>", try_from = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        validate::check(&rows)?;
        let n = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self { n, data })
    }

    /// Builds a matrix from an untyped JSON payload such as a request body's
    /// `matrix` field.
    pub fn from_value(value: &Value) -> Result<Self, MatrixError> {
        validate::check_value(value)?;
        let rows = value.as_array().ok_or(MatrixError::NotAnArray)?;
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_array().ok_or(MatrixError::RowNotAnArray { row: i })?;
            for (j, cell) in row.iter().enumerate() {
                data.push(cell.as_f64().ok_or(MatrixError::NotNumeric { row: i, col: j })?);
            }
        }
        Ok(Self { n, data })
    }

    /// Number of cities.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline(always)]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.n + to]
    }

    #[inline]
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.n..(from + 1) * self.n]
    }

    /// Largest single entry.
    pub fn max_entry(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }

    /// Upper bound on any tour or partial-tour length: `n * max_entry`.
    pub fn tour_bound(&self) -> f64 {
        self.n as f64 * self.max_entry()
    }

    /// Fails if summing `n` entries could overflow to infinity.
    pub fn check_tour_range(&self) -> Result<(), MatrixError> {
        if self.tour_bound().is_finite() {
            Ok(())
        } else {
            Err(MatrixError::DistanceOverflow {
                cities: self.n,
                max_entry: self.max_entry(),
            })
        }
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.n).map(|i| self.row(i).to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        Self::from_rows(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.to_rows()
    }
}
