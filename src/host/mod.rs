//! Python classes over the facade graph.
//!
//! Enabled with the `host` feature. Every facade gets a thin `#[pyclass]`
//! wrapper with the same method names; vector and matrix getters hand back
//! [`PyColumnVector3`] / [`PyMatrix33`] snapshots whose `to_array` produces
//! Python lists. Engine-side index failures surface as `IndexError`.
//!
//! The classes are `unsendable`: a facade graph belongs to the thread that
//! created it.
//!
//! No constructor is registered for `FdmExec` because the backend type is
//! only known to the crate that links the engine. That crate builds its
//! module like this:
//!
//! ```ignore
//! #[pyfunction]
//! #[pyo3(signature = (root_dir=None))]
//! fn create_exec(root_dir: Option<String>) -> PyFdmExec {
//!     FdmExec::new::<Engine>(root_dir.as_deref()).into()
//! }
//!
//! #[pymodule]
//! fn fdm(m: &Bound<'_, PyModule>) -> PyResult<()> {
//!     fdm_bridge::host::register_classes(m)?;
//!     m.add_function(wrap_pyfunction!(create_exec, m)?)
//! }
//! ```

mod exec;
mod subsystems;

use pyo3::exceptions::PyIndexError;
use pyo3::prelude::*;

use crate::facades::ALL_ENGINES;
use crate::marshal::{Matrix33Value, Vector3Value};
use crate::native::NativeError;

pub use exec::PyFdmExec;
pub use subsystems::{
    PyAerodynamics, PyAircraft, PyAtmosphere, PyAuxiliary, PyEngine, PyGroundReactions,
    PyInitialCondition, PyLandingGear, PyLinearization, PyMassBalance, PyPropagate,
    PyPropertyManager, PyPropulsion,
};

impl From<NativeError> for PyErr {
    fn from(err: NativeError) -> PyErr {
        PyIndexError::new_err(err.to_string())
    }
}

/// Frozen 3-vector; `entry` is 1-based, `to_array` is a 0-based list.
#[pyclass(name = "ColumnVector3")]
#[derive(Debug, Clone, Copy)]
pub struct PyColumnVector3 {
    value: Vector3Value,
}

#[pymethods]
impl PyColumnVector3 {
    pub fn entry(&self, idx: usize) -> PyResult<f64> {
        Ok(self.value.entry(idx)?)
    }

    pub fn to_array(&self) -> [f64; 3] {
        self.value.to_array()
    }

    pub fn __repr__(&self) -> String {
        let [x, y, z] = self.value.to_array();
        format!("ColumnVector3({x}, {y}, {z})")
    }
}

impl From<Vector3Value> for PyColumnVector3 {
    fn from(value: Vector3Value) -> Self {
        Self { value }
    }
}

/// Frozen 3x3 matrix; `entry` is 1-based, `to_array` is a list of rows.
#[pyclass(name = "Matrix33")]
#[derive(Debug, Clone, Copy)]
pub struct PyMatrix33 {
    value: Matrix33Value,
}

#[pymethods]
impl PyMatrix33 {
    pub fn entry(&self, row: usize, col: usize) -> PyResult<f64> {
        Ok(self.value.entry(row, col)?)
    }

    pub fn to_array(&self) -> [[f64; 3]; 3] {
        self.value.to_array()
    }

    pub fn __repr__(&self) -> String {
        format!("Matrix33({:?})", self.value.to_array())
    }
}

impl From<Matrix33Value> for PyMatrix33 {
    fn from(value: Matrix33Value) -> Self {
        Self { value }
    }
}

/// Adds every facade class and the `ALL_ENGINES` selector to `m`.
pub fn register_classes(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyColumnVector3>()?;
    m.add_class::<PyMatrix33>()?;
    m.add_class::<PyFdmExec>()?;
    m.add_class::<PyPropulsion>()?;
    m.add_class::<PyEngine>()?;
    m.add_class::<PyAerodynamics>()?;
    m.add_class::<PyAircraft>()?;
    m.add_class::<PyAtmosphere>()?;
    m.add_class::<PyAuxiliary>()?;
    m.add_class::<PyGroundReactions>()?;
    m.add_class::<PyLandingGear>()?;
    m.add_class::<PyMassBalance>()?;
    m.add_class::<PyInitialCondition>()?;
    m.add_class::<PyPropertyManager>()?;
    m.add_class::<PyPropagate>()?;
    m.add_class::<PyLinearization>()?;
    m.add("ALL_ENGINES", ALL_ENGINES)?;
    Ok(())
}
