//! The root engine facade.
//!
//! [`FdmExec`] owns the native executive for one facade graph and is the only
//! way to reach subsystem facades. Cloning the facade shares the same engine;
//! the engine is torn down once the last clone and every subsystem facade
//! created from it are gone.
//!
//! The usual lifecycle is paths configured, model loaded, initial conditions
//! loaded, then stepping with optional hold/resume, trim and reset in
//! between. None of this ordering is enforced here: out-of-order calls are
//! reported by the engine as failed operations.

mod info;

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::broker::Shared;
use crate::config::{ConfigError, ExecConfig, PathKind};
use crate::facades::{
    Aerodynamics, Aircraft, Atmosphere, Auxiliary, GroundReactions, InitialCondition,
    Linearization, MassBalance, Propagate, PropertyManager, Propulsion,
};
use crate::native::{NativeBackend, NativeExec};

pub use info::EngineInfo;

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[derive(Clone)]
pub struct FdmExec {
    exec: Shared<dyn NativeExec>,
}

impl FdmExec {
    /// Creates a new engine of backend `B`, optionally rooted at `root_dir`.
    pub fn new<B: NativeBackend>(root_dir: Option<&str>) -> Self {
        let backend = B::create(root_dir.map(Path::new));
        debug!(root_dir = ?root_dir, "created engine");
        Self::from_native(backend)
    }

    /// Wraps an already constructed backend.
    pub fn from_native<B: NativeBackend>(backend: B) -> Self {
        Self::from_shared(Rc::new(RefCell::new(backend)))
    }

    /// Wraps a backend the caller keeps its own handle to.
    pub fn from_shared<E: NativeExec + 'static>(exec: Rc<RefCell<E>>) -> Self {
        Self {
            exec: Shared::<dyn NativeExec>::from_rc(exec),
        }
    }

    /// Creates an engine rooted at `config.root_dir` and applies `config` to it.
    ///
    /// # Errors
    /// [`ConfigError::PathRejected`] for the first search path the engine refuses.
    pub fn from_config<B: NativeBackend>(config: &ExecConfig) -> Result<Self, ConfigError> {
        let root = config.root_dir.as_deref().map(path_string);
        let fdm = Self::new::<B>(root.as_deref());
        fdm.apply_config(config)?;
        Ok(fdm)
    }

    /// Applies search paths, then debug level, timestep and output settings.
    /// `config.root_dir` is not applied; it only matters at construction.
    ///
    /// # Errors
    /// [`ConfigError::PathRejected`] for the first search path the engine
    /// refuses. Settings after it are left untouched.
    pub fn apply_config(&self, config: &ExecConfig) -> Result<(), ConfigError> {
        for (kind, path) in config.search_paths() {
            let accepted = {
                let mut exec = self.exec.borrow_mut();
                match kind {
                    PathKind::Engine => exec.set_engine_path(path),
                    PathKind::Aircraft => exec.set_aircraft_path(path),
                    PathKind::Systems => exec.set_systems_path(path),
                    PathKind::Output => exec.set_output_path(path),
                }
            };
            if !accepted {
                warn!(%kind, path = %path.display(), "engine rejected configured path");
                return Err(ConfigError::PathRejected {
                    kind,
                    path: path.clone(),
                });
            }
        }

        if let Some(level) = config.debug_level {
            self.set_debug_level(level);
        }
        if let Some(dt) = config.delta_t {
            self.set_dt(dt);
        }
        if let Some(rate) = config.logging_rate {
            self.set_logging_rate(rate);
        }
        if config.output_enabled {
            self.enable_output();
        } else {
            self.disable_output();
        }
        if !config.highlighting {
            self.disable_highlighting();
        }

        Ok(())
    }

    /// Whether both facades drive the same engine instance.
    pub fn same_engine(&self, other: &Self) -> bool {
        self.exec.ptr_eq(&other.exec)
    }

    // ---- Model lifecycle ----

    /// Advances the simulation by one step.
    pub fn run(&self) -> bool {
        self.exec.borrow_mut().run()
    }

    /// Applies the loaded initial conditions.
    pub fn run_ic(&self) -> bool {
        self.exec.borrow_mut().run_ic()
    }

    pub fn load_model(&self, model: &str, add_model_to_path: bool) -> bool {
        debug!(model, add_model_to_path, "loading model");
        self.exec.borrow_mut().load_model(model, add_model_to_path)
    }

    /// Loads a script. `None` keeps the script's own timestep or
    /// initialization file.
    pub fn load_script(
        &self,
        script: &str,
        delta_t: Option<f64>,
        init_file: Option<&str>,
    ) -> bool {
        debug!(script, ?delta_t, ?init_file, "loading script");
        // The engine reads a zero timestep and an empty path as "use the script's".
        self.exec.borrow_mut().load_script(
            Path::new(script),
            delta_t.unwrap_or(0.0),
            Path::new(init_file.unwrap_or("")),
        )
    }

    // ---- Paths ----

    pub fn set_engine_path(&self, path: &str) -> bool {
        self.exec.borrow_mut().set_engine_path(Path::new(path))
    }

    pub fn set_aircraft_path(&self, path: &str) -> bool {
        self.exec.borrow_mut().set_aircraft_path(Path::new(path))
    }

    pub fn set_systems_path(&self, path: &str) -> bool {
        self.exec.borrow_mut().set_systems_path(Path::new(path))
    }

    pub fn set_output_path(&self, path: &str) -> bool {
        self.exec.borrow_mut().set_output_path(Path::new(path))
    }

    pub fn set_root_dir(&self, path: &str) {
        self.exec.borrow_mut().set_root_dir(Path::new(path));
    }

    pub fn engine_path(&self) -> String {
        path_string(&self.exec.borrow().engine_path())
    }

    pub fn aircraft_path(&self) -> String {
        path_string(&self.exec.borrow().aircraft_path())
    }

    pub fn systems_path(&self) -> String {
        path_string(&self.exec.borrow().systems_path())
    }

    pub fn output_path(&self) -> String {
        path_string(&self.exec.borrow().output_path())
    }

    pub fn root_dir(&self) -> String {
        path_string(&self.exec.borrow().root_dir())
    }

    // ---- Properties ----

    pub fn get_property_value(&self, property: &str) -> f64 {
        self.exec.borrow().get_property_value(property)
    }

    pub fn set_property_value(&self, property: &str, value: f64) {
        self.exec.borrow_mut().set_property_value(property, value);
    }

    /// Newline separated list of every property path containing `check`.
    pub fn query_property_catalog(&self, check: &str) -> String {
        self.exec.borrow().query_property_catalog(check)
    }

    pub fn print_property_catalog(&self) {
        self.exec.borrow_mut().print_property_catalog();
    }

    pub fn print_simulation_configuration(&self) {
        self.exec.borrow().print_simulation_configuration();
    }

    // ---- Output ----

    pub fn set_output_directives(&self, fname: &str) -> bool {
        self.exec.borrow_mut().set_output_directives(Path::new(fname))
    }

    pub fn set_logging_rate(&self, rate: f64) {
        self.exec.borrow_mut().set_logging_rate(rate);
    }

    pub fn set_output_file_name(&self, n: usize, fname: &str) -> bool {
        self.exec.borrow_mut().set_output_file_name(n, fname)
    }

    pub fn output_file_name(&self, n: usize) -> String {
        self.exec.borrow().output_file_name(n)
    }

    pub fn enable_output(&self) {
        self.exec.borrow_mut().enable_output();
    }

    pub fn disable_output(&self) {
        self.exec.borrow_mut().disable_output();
    }

    // ---- Execution control ----

    pub fn hold(&self) {
        self.exec.borrow_mut().hold();
    }

    pub fn resume(&self) {
        self.exec.borrow_mut().resume();
    }

    pub fn holding(&self) -> bool {
        self.exec.borrow().holding()
    }

    /// Stops time advancing on [`run`](Self::run) without holding the simulation.
    pub fn suspend_integration(&self) {
        self.exec.borrow_mut().suspend_integration();
    }

    pub fn resume_integration(&self) {
        self.exec.borrow_mut().resume_integration();
    }

    pub fn integration_suspended(&self) -> bool {
        self.exec.borrow().integration_suspended()
    }

    /// Resets to the initial conditions. `mode` is the engine's own reset selector.
    pub fn reset_to_initial_conditions(&self, mode: i32) {
        debug!(mode, "resetting to initial conditions");
        self.exec.borrow_mut().reset_to_initial_conditions(mode);
    }

    // ---- Trim ----

    pub fn do_trim(&self, mode: i32) {
        self.exec.borrow_mut().do_trim(mode);
    }

    pub fn set_trim_status(&self, status: bool) {
        self.exec.borrow_mut().set_trim_status(status);
    }

    pub fn trim_status(&self) -> bool {
        self.exec.borrow().trim_status()
    }

    // ---- Introspection and time ----

    pub fn model_name(&self) -> String {
        self.exec.borrow().model_name()
    }

    pub fn propulsion_tank_report(&self) -> String {
        self.exec.borrow().propulsion_tank_report()
    }

    pub fn sim_time(&self) -> f64 {
        self.exec.borrow().sim_time()
    }

    pub fn delta_t(&self) -> f64 {
        self.exec.borrow().delta_t()
    }

    pub fn set_sim_time(&self, time: f64) -> bool {
        self.exec.borrow_mut().set_sim_time(time)
    }

    pub fn set_dt(&self, delta_t: f64) {
        self.exec.borrow_mut().set_dt(delta_t);
    }

    /// Advances the clock by one timestep and returns the new time.
    pub fn incr_time(&self) -> f64 {
        self.exec.borrow_mut().incr_time()
    }

    // ---- Subsystems ----

    pub fn propulsion(&self) -> Propulsion {
        debug!("acquired propulsion facade");
        Propulsion::new(self.exec.borrow().propulsion())
    }

    pub fn aerodynamics(&self) -> Aerodynamics {
        debug!("acquired aerodynamics facade");
        Aerodynamics::new(self.exec.borrow().aerodynamics())
    }

    pub fn aircraft(&self) -> Aircraft {
        debug!("acquired aircraft facade");
        Aircraft::new(self.exec.borrow().aircraft())
    }

    pub fn atmosphere(&self) -> Atmosphere {
        debug!("acquired atmosphere facade");
        Atmosphere::new(self.exec.borrow().atmosphere())
    }

    pub fn auxiliary(&self) -> Auxiliary {
        debug!("acquired auxiliary facade");
        Auxiliary::new(self.exec.borrow().auxiliary())
    }

    pub fn ground_reactions(&self) -> GroundReactions {
        debug!("acquired ground reactions facade");
        GroundReactions::new(self.exec.borrow().ground_reactions())
    }

    pub fn mass_balance(&self) -> MassBalance {
        debug!("acquired mass balance facade");
        MassBalance::new(self.exec.borrow().mass_balance())
    }

    pub fn initial_condition(&self) -> InitialCondition {
        debug!("acquired initial condition facade");
        InitialCondition::new(self.exec.borrow().initial_condition())
    }

    pub fn property_manager(&self) -> PropertyManager {
        debug!("acquired property manager facade");
        PropertyManager::new(self.exec.borrow().property_manager())
    }

    pub fn propagate(&self) -> Propagate {
        debug!("acquired propagate facade");
        Propagate::new(self.exec.borrow().propagate())
    }

    /// Linearizes the engine about its current state.
    pub fn linearization(&self) -> Linearization {
        debug!("computing linearization");
        Linearization::new(self.exec.borrow_mut().linearize())
    }
}

impl EngineInfo for FdmExec {
    fn version(&self) -> String {
        self.exec.borrow().version()
    }

    fn debug_level(&self) -> i32 {
        self.exec.borrow().debug_level()
    }

    fn set_debug_level(&self, level: i32) {
        self.exec.borrow_mut().set_debug_level(level);
    }

    fn disable_highlighting(&self) {
        self.exec.borrow_mut().disable_highlighting();
    }
}
