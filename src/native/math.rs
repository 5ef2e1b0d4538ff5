use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use super::NativeError;

/// A native 3-element column vector, addressed 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnVector3(Vector3<f64>);

impl ColumnVector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn zeros() -> Self {
        Self(Vector3::zeros())
    }

    /// Returns entry `idx` using 1-based addressing.
    ///
    /// # Errors
    /// [`NativeError::OutOfRange`] when `idx` is not in `1..=3`.
    pub fn entry(&self, idx: usize) -> Result<f64, NativeError> {
        match idx {
            1..=3 => Ok(self.0[idx - 1]),
            _ => Err(NativeError::OutOfRange { index: idx }),
        }
    }

    pub fn as_vector(&self) -> &Vector3<f64> {
        &self.0
    }
}

impl From<Vector3<f64>> for ColumnVector3 {
    fn from(v: Vector3<f64>) -> Self {
        Self(v)
    }
}

impl Default for ColumnVector3 {
    fn default() -> Self {
        Self::zeros()
    }
}

/// A native 3x3 matrix, addressed `(row, col)` with both in 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix33(Matrix3<f64>);

impl Matrix33 {
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    /// Builds a matrix from row-major values.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self(Matrix3::new(
            rows[0][0], rows[0][1], rows[0][2], //
            rows[1][0], rows[1][1], rows[1][2], //
            rows[2][0], rows[2][1], rows[2][2],
        ))
    }

    /// Returns entry `(row, col)` using 1-based addressing.
    ///
    /// # Errors
    /// [`NativeError::OutOfRange`] naming the first offending index.
    pub fn entry(&self, row: usize, col: usize) -> Result<f64, NativeError> {
        if !(1..=3).contains(&row) {
            return Err(NativeError::OutOfRange { index: row });
        }
        if !(1..=3).contains(&col) {
            return Err(NativeError::OutOfRange { index: col });
        }
        Ok(self.0[(row - 1, col - 1)])
    }

    pub fn as_matrix(&self) -> &Matrix3<f64> {
        &self.0
    }

    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }
}

impl From<Matrix3<f64>> for Matrix33 {
    fn from(m: Matrix3<f64>) -> Self {
        Self(m)
    }
}

impl Default for Matrix33 {
    fn default() -> Self {
        Self::identity()
    }
}
