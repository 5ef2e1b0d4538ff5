use std::path::Path;

use serde_json::Value;

use crate::broker::Shared;
use crate::marshal::{dmatrix_to_rows, rows_to_value};
use crate::native::NativeLinearization;

/// A linear state-space model computed when the facade was created.
///
/// The matrices are whatever the engine produced at that moment; they are
/// converted on every call and never cached here.
#[derive(Clone)]
pub struct Linearization {
    inner: Shared<dyn NativeLinearization>,
}

impl Linearization {
    pub(crate) fn new(inner: Shared<dyn NativeLinearization>) -> Self {
        Self { inner }
    }

    /// State matrix (A), row-major.
    pub fn system_matrix(&self) -> Vec<Vec<f64>> {
        dmatrix_to_rows(self.inner.borrow().system_matrix())
    }

    /// Input matrix (B), row-major.
    pub fn input_matrix(&self) -> Vec<Vec<f64>> {
        dmatrix_to_rows(self.inner.borrow().input_matrix())
    }

    /// Output matrix (C), row-major.
    pub fn output_matrix(&self) -> Vec<Vec<f64>> {
        dmatrix_to_rows(self.inner.borrow().output_matrix())
    }

    /// All three matrices as a JSON object keyed `system`, `input` and `output`.
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "system": rows_to_value(&self.system_matrix()),
            "input": rows_to_value(&self.input_matrix()),
            "output": rows_to_value(&self.output_matrix()),
        })
    }

    /// Writes the Scicoslab export to the engine's default location.
    pub fn write_scicoslab(&self) {
        self.inner.borrow().write_scicoslab(None);
    }

    pub fn write_scicoslab_to(&self, path: &str) {
        self.inner.borrow().write_scicoslab(Some(Path::new(path)));
    }
}
