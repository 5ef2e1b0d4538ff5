use pyo3::prelude::*;

use super::subsystems::{
    PyAerodynamics, PyAircraft, PyAtmosphere, PyAuxiliary, PyGroundReactions, PyInitialCondition,
    PyLinearization, PyMassBalance, PyPropagate, PyPropertyManager, PyPropulsion,
};
use crate::exec::{EngineInfo, FdmExec};

#[pyclass(name = "FdmExec", unsendable)]
#[derive(Clone)]
pub struct PyFdmExec {
    inner: FdmExec,
}

impl From<FdmExec> for PyFdmExec {
    fn from(inner: FdmExec) -> Self {
        Self { inner }
    }
}

impl PyFdmExec {
    pub fn facade(&self) -> &FdmExec {
        &self.inner
    }
}

#[pymethods]
impl PyFdmExec {
    pub fn run(&self) -> bool {
        self.inner.run()
    }

    pub fn run_ic(&self) -> bool {
        self.inner.run_ic()
    }

    #[pyo3(signature = (model, add_model_to_path=true))]
    pub fn load_model(&self, model: &str, add_model_to_path: bool) -> bool {
        self.inner.load_model(model, add_model_to_path)
    }

    #[pyo3(signature = (script, delta_t=None, init_file=None))]
    pub fn load_script(
        &self,
        script: &str,
        delta_t: Option<f64>,
        init_file: Option<String>,
    ) -> bool {
        self.inner.load_script(script, delta_t, init_file.as_deref())
    }

    pub fn set_engine_path(&self, path: &str) -> bool {
        self.inner.set_engine_path(path)
    }

    pub fn set_aircraft_path(&self, path: &str) -> bool {
        self.inner.set_aircraft_path(path)
    }

    pub fn set_systems_path(&self, path: &str) -> bool {
        self.inner.set_systems_path(path)
    }

    pub fn set_output_path(&self, path: &str) -> bool {
        self.inner.set_output_path(path)
    }

    pub fn set_root_dir(&self, path: &str) {
        self.inner.set_root_dir(path);
    }

    pub fn engine_path(&self) -> String {
        self.inner.engine_path()
    }

    pub fn aircraft_path(&self) -> String {
        self.inner.aircraft_path()
    }

    pub fn systems_path(&self) -> String {
        self.inner.systems_path()
    }

    pub fn output_path(&self) -> String {
        self.inner.output_path()
    }

    pub fn root_dir(&self) -> String {
        self.inner.root_dir()
    }

    pub fn get_property_value(&self, property: &str) -> f64 {
        self.inner.get_property_value(property)
    }

    pub fn set_property_value(&self, property: &str, value: f64) {
        self.inner.set_property_value(property, value);
    }

    pub fn query_property_catalog(&self, check: &str) -> String {
        self.inner.query_property_catalog(check)
    }

    pub fn print_property_catalog(&self) {
        self.inner.print_property_catalog();
    }

    pub fn print_simulation_configuration(&self) {
        self.inner.print_simulation_configuration();
    }

    pub fn set_output_directives(&self, fname: &str) -> bool {
        self.inner.set_output_directives(fname)
    }

    pub fn set_logging_rate(&self, rate: f64) {
        self.inner.set_logging_rate(rate);
    }

    pub fn set_output_file_name(&self, n: usize, fname: &str) -> bool {
        self.inner.set_output_file_name(n, fname)
    }

    pub fn output_file_name(&self, n: usize) -> String {
        self.inner.output_file_name(n)
    }

    pub fn enable_output(&self) {
        self.inner.enable_output();
    }

    pub fn disable_output(&self) {
        self.inner.disable_output();
    }

    pub fn hold(&self) {
        self.inner.hold();
    }

    pub fn resume(&self) {
        self.inner.resume();
    }

    pub fn holding(&self) -> bool {
        self.inner.holding()
    }

    pub fn suspend_integration(&self) {
        self.inner.suspend_integration();
    }

    pub fn resume_integration(&self) {
        self.inner.resume_integration();
    }

    pub fn integration_suspended(&self) -> bool {
        self.inner.integration_suspended()
    }

    pub fn reset_to_initial_conditions(&self, mode: i32) {
        self.inner.reset_to_initial_conditions(mode);
    }

    pub fn do_trim(&self, mode: i32) {
        self.inner.do_trim(mode);
    }

    pub fn set_trim_status(&self, status: bool) {
        self.inner.set_trim_status(status);
    }

    pub fn trim_status(&self) -> bool {
        self.inner.trim_status()
    }

    pub fn model_name(&self) -> String {
        self.inner.model_name()
    }

    pub fn propulsion_tank_report(&self) -> String {
        self.inner.propulsion_tank_report()
    }

    pub fn sim_time(&self) -> f64 {
        self.inner.sim_time()
    }

    pub fn delta_t(&self) -> f64 {
        self.inner.delta_t()
    }

    pub fn set_sim_time(&self, time: f64) -> bool {
        self.inner.set_sim_time(time)
    }

    pub fn set_dt(&self, delta_t: f64) {
        self.inner.set_dt(delta_t);
    }

    pub fn incr_time(&self) -> f64 {
        self.inner.incr_time()
    }

    pub fn version(&self) -> String {
        self.inner.version()
    }

    pub fn debug_level(&self) -> i32 {
        self.inner.debug_level()
    }

    pub fn set_debug_level(&self, level: i32) {
        self.inner.set_debug_level(level);
    }

    pub fn disable_highlighting(&self) {
        self.inner.disable_highlighting();
    }

    pub fn propulsion(&self) -> PyPropulsion {
        self.inner.propulsion().into()
    }

    pub fn aerodynamics(&self) -> PyAerodynamics {
        self.inner.aerodynamics().into()
    }

    pub fn aircraft(&self) -> PyAircraft {
        self.inner.aircraft().into()
    }

    pub fn atmosphere(&self) -> PyAtmosphere {
        self.inner.atmosphere().into()
    }

    pub fn auxiliary(&self) -> PyAuxiliary {
        self.inner.auxiliary().into()
    }

    pub fn ground_reactions(&self) -> PyGroundReactions {
        self.inner.ground_reactions().into()
    }

    pub fn mass_balance(&self) -> PyMassBalance {
        self.inner.mass_balance().into()
    }

    pub fn initial_condition(&self) -> PyInitialCondition {
        self.inner.initial_condition().into()
    }

    pub fn property_manager(&self) -> PyPropertyManager {
        self.inner.property_manager().into()
    }

    pub fn propagate(&self) -> PyPropagate {
        self.inner.propagate().into()
    }

    pub fn linearization(&self) -> PyLinearization {
        self.inner.linearization().into()
    }
}
