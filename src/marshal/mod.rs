//! Conversion of native numeric aggregates into host-consumable sequences.
//!
//! Native vectors and matrices are addressed from 1. Hosts see plain 0-based
//! sequences: entry `i` of a vector lands at index `i - 1`, entry `(r, c)` of
//! a matrix lands at `[r - 1][c - 1]`. The value types here are frozen copies
//! taken when the getter ran; they never track the subsystem afterwards.

use nalgebra::DMatrix;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;

use crate::native::{ColumnVector3, Matrix33, NativeError};

pub fn vector_to_array(vec: &ColumnVector3) -> [f64; 3] {
    let v = vec.as_vector();
    [v[0], v[1], v[2]]
}

/// Row-major nested form of a native 3x3 matrix.
pub fn matrix_to_rows(mat: &Matrix33) -> [[f64; 3]; 3] {
    let m = mat.as_matrix();
    let mut rows = [[0.0; 3]; 3];
    for (i, row) in rows.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = m[(i, j)];
        }
    }
    rows
}

/// Row-major nested form of an arbitrarily sized matrix.
pub fn dmatrix_to_rows(mat: &DMatrix<f64>) -> Vec<Vec<f64>> {
    mat.row_iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}

pub fn rows_to_value<R: AsRef<[f64]>>(rows: &[R]) -> Value {
    Value::Array(
        rows.iter()
            .map(|row| Value::from(row.as_ref().to_vec()))
            .collect(),
    )
}

/// Frozen snapshot of a native 3-vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3Value {
    vec: ColumnVector3,
}

impl Vector3Value {
    pub fn new(vec: ColumnVector3) -> Self {
        Self { vec }
    }

    /// Native 1-based access; failures come from the native aggregate.
    pub fn entry(&self, idx: usize) -> Result<f64, NativeError> {
        self.vec.entry(idx)
    }

    pub fn to_array(&self) -> [f64; 3] {
        vector_to_array(&self.vec)
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.to_array().to_vec()
    }

    pub fn to_value(&self) -> Value {
        Value::from(self.to_vec())
    }
}

impl From<ColumnVector3> for Vector3Value {
    fn from(vec: ColumnVector3) -> Self {
        Self::new(vec)
    }
}

impl Serialize for Vector3Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(3))?;
        for x in self.to_array() {
            seq.serialize_element(&x)?;
        }
        seq.end()
    }
}

/// Frozen snapshot of a native 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix33Value {
    mat: Matrix33,
}

impl Matrix33Value {
    pub fn new(mat: Matrix33) -> Self {
        Self { mat }
    }

    /// Native 1-based access; failures come from the native aggregate.
    pub fn entry(&self, row: usize, col: usize) -> Result<f64, NativeError> {
        self.mat.entry(row, col)
    }

    pub fn to_array(&self) -> [[f64; 3]; 3] {
        matrix_to_rows(&self.mat)
    }

    pub fn to_vec(&self) -> Vec<Vec<f64>> {
        self.to_array().iter().map(|row| row.to_vec()).collect()
    }

    pub fn to_value(&self) -> Value {
        rows_to_value(&self.to_array())
    }
}

impl From<Matrix33> for Matrix33Value {
    fn from(mat: Matrix33) -> Self {
        Self::new(mat)
    }
}

impl Serialize for Matrix33Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(3))?;
        for row in self.to_array() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}
