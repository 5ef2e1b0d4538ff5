use pyo3::prelude::*;

use super::{PyColumnVector3, PyMatrix33};
use crate::facades::{
    Aerodynamics, Aircraft, Atmosphere, Auxiliary, Engine, GroundReactions, InitialCondition,
    LandingGear, Linearization, MassBalance, Propagate, PropertyManager, Propulsion,
};

#[pyclass(name = "Propulsion", unsendable)]
#[derive(Clone)]
pub struct PyPropulsion {
    inner: Propulsion,
}

#[pymethods]
impl PyPropulsion {
    pub fn num_engines(&self) -> usize {
        self.inner.num_engines()
    }

    pub fn engine(&self, idx: usize) -> PyResult<PyEngine> {
        Ok(self.inner.engine(idx)?.into())
    }

    pub fn steady_state(&self) -> bool {
        self.inner.steady_state()
    }

    pub fn init_running(&self, n: i32) -> PyResult<()> {
        Ok(self.inner.init_running(n)?)
    }
}

impl From<Propulsion> for PyPropulsion {
    fn from(inner: Propulsion) -> Self {
        Self { inner }
    }
}

#[pyclass(name = "Engine", unsendable)]
#[derive(Clone)]
pub struct PyEngine {
    inner: Engine,
}

#[pymethods]
impl PyEngine {
    pub fn init_running(&self) -> i32 {
        self.inner.init_running()
    }
}

impl From<Engine> for PyEngine {
    fn from(inner: Engine) -> Self {
        Self { inner }
    }
}

#[pyclass(name = "Aerodynamics", unsendable)]
#[derive(Clone)]
pub struct PyAerodynamics {
    inner: Aerodynamics,
}

#[pymethods]
impl PyAerodynamics {
    pub fn forces(&self) -> PyColumnVector3 {
        self.inner.forces().into()
    }

    pub fn moments_mrc(&self) -> PyColumnVector3 {
        self.inner.moments_mrc().into()
    }
}

impl From<Aerodynamics> for PyAerodynamics {
    fn from(inner: Aerodynamics) -> Self {
        Self { inner }
    }
}

#[pyclass(name = "Aircraft", unsendable)]
#[derive(Clone)]
pub struct PyAircraft {
    inner: Aircraft,
}

#[pymethods]
impl PyAircraft {
    pub fn aircraft_name(&self) -> String {
        self.inner.aircraft_name()
    }

    pub fn xyz_rp(&self) -> PyColumnVector3 {
        self.inner.xyz_rp().into()
    }
}

impl From<Aircraft> for PyAircraft {
    fn from(inner: Aircraft) -> Self {
        Self { inner }
    }
}

#[pyclass(name = "Atmosphere", unsendable)]
#[derive(Clone)]
pub struct PyAtmosphere {
    inner: Atmosphere,
}

#[pymethods]
impl PyAtmosphere {
    pub fn temperature(&self, altitude: f64) -> f64 {
        self.inner.temperature(altitude)
    }

    pub fn set_temperature(&self, temperature: f64, altitude: f64, unit: i32) {
        self.inner.set_temperature(temperature, altitude, unit);
    }

    pub fn set_pressure_sl(&self, unit: i32, pressure: f64) {
        self.inner.set_pressure_sl(unit, pressure);
    }
}

impl From<Atmosphere> for PyAtmosphere {
    fn from(inner: Atmosphere) -> Self {
        Self { inner }
    }
}

#[pyclass(name = "Auxiliary", unsendable)]
#[derive(Clone)]
pub struct PyAuxiliary {
    inner: Auxiliary,
}

#[pymethods]
impl PyAuxiliary {
    pub fn tw2b(&self) -> PyMatrix33 {
        self.inner.tw2b().into()
    }

    pub fn tb2w(&self) -> PyMatrix33 {
        self.inner.tb2w().into()
    }
}

impl From<Auxiliary> for PyAuxiliary {
    fn from(inner: Auxiliary) -> Self {
        Self { inner }
    }
}

#[pyclass(name = "GroundReactions", unsendable)]
#[derive(Clone)]
pub struct PyGroundReactions {
    inner: GroundReactions,
}

#[pymethods]
impl PyGroundReactions {
    pub fn num_gear_units(&self) -> usize {
        self.inner.num_gear_units()
    }

    pub fn gear_unit(&self, idx: usize) -> PyResult<PyLandingGear> {
        Ok(self.inner.gear_unit(idx)?.into())
    }
}

impl From<GroundReactions> for PyGroundReactions {
    fn from(inner: GroundReactions) -> Self {
        Self { inner }
    }
}

#[pyclass(name = "LandingGear", unsendable)]
#[derive(Clone)]
pub struct PyLandingGear {
    inner: LandingGear,
}

#[pymethods]
impl PyLandingGear {
    pub fn steer_norm(&self) -> f64 {
        self.inner.steer_norm()
    }

    pub fn body_x_force(&self) -> f64 {
        self.inner.body_x_force()
    }

    pub fn body_y_force(&self) -> f64 {
        self.inner.body_y_force()
    }

    pub fn body_z_force(&self) -> f64 {
        self.inner.body_z_force()
    }

    pub fn location(&self) -> PyColumnVector3 {
        self.inner.location().into()
    }

    pub fn acting_location(&self) -> PyColumnVector3 {
        self.inner.acting_location().into()
    }
}

impl From<LandingGear> for PyLandingGear {
    fn from(inner: LandingGear) -> Self {
        Self { inner }
    }
}

#[pyclass(name = "MassBalance", unsendable)]
#[derive(Clone)]
pub struct PyMassBalance {
    inner: MassBalance,
}

#[pymethods]
impl PyMassBalance {
    pub fn xyz_cg(&self) -> PyColumnVector3 {
        self.inner.xyz_cg().into()
    }

    pub fn j(&self) -> PyMatrix33 {
        self.inner.j().into()
    }

    pub fn j_inv(&self) -> PyMatrix33 {
        self.inner.j_inv().into()
    }
}

impl From<MassBalance> for PyMassBalance {
    fn from(inner: MassBalance) -> Self {
        Self { inner }
    }
}

#[pyclass(name = "InitialCondition", unsendable)]
#[derive(Clone)]
pub struct PyInitialCondition {
    inner: InitialCondition,
}

#[pymethods]
impl PyInitialCondition {
    #[pyo3(signature = (rstfile, use_aircraft_path=true))]
    pub fn load(&self, rstfile: &str, use_aircraft_path: bool) -> bool {
        self.inner.load(rstfile, use_aircraft_path)
    }
}

impl From<InitialCondition> for PyInitialCondition {
    fn from(inner: InitialCondition) -> Self {
        Self { inner }
    }
}

#[pyclass(name = "PropertyManager", unsendable)]
#[derive(Clone)]
pub struct PyPropertyManager {
    inner: PropertyManager,
}

#[pymethods]
impl PyPropertyManager {
    pub fn has_node(&self, path: &str) -> bool {
        self.inner.has_node(path)
    }
}

impl From<PropertyManager> for PyPropertyManager {
    fn from(inner: PropertyManager) -> Self {
        Self { inner }
    }
}

#[pyclass(name = "Propagate", unsendable)]
#[derive(Clone)]
pub struct PyPropagate {
    inner: Propagate,
}

#[pymethods]
impl PyPropagate {
    pub fn tl2b(&self) -> PyMatrix33 {
        self.inner.tl2b().into()
    }

    pub fn tec2b(&self) -> PyMatrix33 {
        self.inner.tec2b().into()
    }

    pub fn uvw(&self) -> PyColumnVector3 {
        self.inner.uvw().into()
    }
}

impl From<Propagate> for PyPropagate {
    fn from(inner: Propagate) -> Self {
        Self { inner }
    }
}

/// State-space matrices come back as lists of rows.
#[pyclass(name = "Linearization", unsendable)]
#[derive(Clone)]
pub struct PyLinearization {
    inner: Linearization,
}

#[pymethods]
impl PyLinearization {
    pub fn system_matrix(&self) -> Vec<Vec<f64>> {
        self.inner.system_matrix()
    }

    pub fn input_matrix(&self) -> Vec<Vec<f64>> {
        self.inner.input_matrix()
    }

    pub fn output_matrix(&self) -> Vec<Vec<f64>> {
        self.inner.output_matrix()
    }

    #[pyo3(signature = (path=None))]
    pub fn write_scicoslab(&self, path: Option<String>) {
        match path {
            Some(path) => self.inner.write_scicoslab_to(&path),
            None => self.inner.write_scicoslab(),
        }
    }
}

impl From<Linearization> for PyLinearization {
    fn from(inner: Linearization) -> Self {
        Self { inner }
    }
}
