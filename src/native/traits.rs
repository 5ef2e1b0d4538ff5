use std::path::{Path, PathBuf};

use nalgebra::DMatrix;

use super::{ColumnVector3, Matrix33, NativeError};
use crate::broker::Shared;

/// Root executive of the wrapped engine.
///
/// Every method mirrors one engine entry point. Implementations own their
/// subsystems and hand out [`Shared`] references to them; the facade layer
/// adds nothing on top of the values returned here.
pub trait NativeExec {
    // Model lifecycle
    fn run(&mut self) -> bool;
    fn run_ic(&mut self) -> bool;
    fn load_model(&mut self, model: &str, add_model_to_path: bool) -> bool;
    fn load_script(&mut self, script: &Path, delta_t: f64, init_file: &Path) -> bool;

    // Paths
    fn set_engine_path(&mut self, path: &Path) -> bool;
    fn set_aircraft_path(&mut self, path: &Path) -> bool;
    fn set_systems_path(&mut self, path: &Path) -> bool;
    fn set_output_path(&mut self, path: &Path) -> bool;
    fn set_root_dir(&mut self, path: &Path);
    fn engine_path(&self) -> PathBuf;
    fn aircraft_path(&self) -> PathBuf;
    fn systems_path(&self) -> PathBuf;
    fn output_path(&self) -> PathBuf;
    fn root_dir(&self) -> PathBuf;

    // Properties
    fn get_property_value(&self, property: &str) -> f64;
    fn set_property_value(&mut self, property: &str, value: f64);
    fn query_property_catalog(&self, check: &str) -> String;
    fn print_property_catalog(&mut self);
    fn print_simulation_configuration(&self);

    // Output
    fn set_output_directives(&mut self, fname: &Path) -> bool;
    fn set_logging_rate(&mut self, rate: f64);
    fn set_output_file_name(&mut self, n: usize, fname: &str) -> bool;
    fn output_file_name(&self, n: usize) -> String;
    fn enable_output(&mut self);
    fn disable_output(&mut self);

    // Execution control
    fn hold(&mut self);
    fn resume(&mut self);
    fn holding(&self) -> bool;
    fn suspend_integration(&mut self);
    fn resume_integration(&mut self);
    fn integration_suspended(&self) -> bool;
    fn reset_to_initial_conditions(&mut self, mode: i32);

    // Trim
    fn do_trim(&mut self, mode: i32);
    fn set_trim_status(&mut self, status: bool);
    fn trim_status(&self) -> bool;

    // Introspection and time
    fn model_name(&self) -> String;
    fn propulsion_tank_report(&self) -> String;
    fn sim_time(&self) -> f64;
    fn delta_t(&self) -> f64;
    fn set_sim_time(&mut self, time: f64) -> bool;
    fn set_dt(&mut self, delta_t: f64);
    fn incr_time(&mut self) -> f64;

    // Metadata
    fn version(&self) -> String;
    fn debug_level(&self) -> i32;
    fn set_debug_level(&mut self, level: i32);
    fn disable_highlighting(&mut self);

    // Subsystems
    fn propulsion(&self) -> Shared<dyn NativePropulsion>;
    fn aerodynamics(&self) -> Shared<dyn NativeAerodynamics>;
    fn aircraft(&self) -> Shared<dyn NativeAircraft>;
    fn atmosphere(&self) -> Shared<dyn NativeAtmosphere>;
    fn auxiliary(&self) -> Shared<dyn NativeAuxiliary>;
    fn ground_reactions(&self) -> Shared<dyn NativeGroundReactions>;
    fn mass_balance(&self) -> Shared<dyn NativeMassBalance>;
    fn initial_condition(&self) -> Shared<dyn NativeInitialCondition>;
    fn property_manager(&self) -> Shared<dyn NativePropertyManager>;
    fn propagate(&self) -> Shared<dyn NativePropagate>;

    /// Computes a fresh linear model about the current state.
    fn linearize(&mut self) -> Shared<dyn NativeLinearization>;
}

/// A backend that can be constructed by the engine facade.
pub trait NativeBackend: NativeExec + Sized + 'static {
    fn create(root_dir: Option<&Path>) -> Self;
}

pub trait NativePropulsion {
    fn num_engines(&self) -> usize;
    fn engine(&self, idx: usize) -> Result<Shared<dyn NativeEngine>, NativeError>;
    fn steady_state(&mut self) -> bool;
    /// `n` is an engine index, or a negative selector meaning every engine.
    fn init_running(&mut self, n: i32) -> Result<(), NativeError>;
}

pub trait NativeEngine {
    fn init_running(&mut self) -> i32;
}

pub trait NativeAerodynamics {
    fn forces(&self) -> ColumnVector3;
    fn moments_mrc(&self) -> ColumnVector3;
}

pub trait NativeAircraft {
    fn aircraft_name(&self) -> String;
    fn xyz_rp(&self) -> ColumnVector3;
}

/// Unit selectors are the engine's own enumerants, passed through as raw integers.
pub trait NativeAtmosphere {
    fn temperature(&self, altitude: f64) -> f64;
    fn set_temperature(&mut self, temperature: f64, altitude: f64, unit: i32);
    fn set_pressure_sl(&mut self, unit: i32, pressure: f64);
}

pub trait NativeAuxiliary {
    fn tw2b(&self) -> Matrix33;
    fn tb2w(&self) -> Matrix33;
}

pub trait NativeGroundReactions {
    fn num_gear_units(&self) -> usize;
    fn gear_unit(&self, idx: usize) -> Result<Shared<dyn NativeGear>, NativeError>;
}

pub trait NativeGear {
    fn steer_norm(&self) -> f64;
    fn body_x_force(&self) -> f64;
    fn body_y_force(&self) -> f64;
    fn body_z_force(&self) -> f64;
    fn location(&self) -> ColumnVector3;
    fn acting_location(&self) -> ColumnVector3;
}

pub trait NativeMassBalance {
    fn xyz_cg(&self) -> ColumnVector3;
    fn j(&self) -> Matrix33;
    fn j_inv(&self) -> Matrix33;
}

pub trait NativeInitialCondition {
    fn load(&mut self, rstfile: &Path, use_aircraft_path: bool) -> bool;
}

pub trait NativePropertyManager {
    fn has_node(&self, path: &str) -> bool;
}

pub trait NativePropagate {
    fn tl2b(&self) -> Matrix33;
    fn tec2b(&self) -> Matrix33;
    fn uvw(&self) -> ColumnVector3;
}

pub trait NativeLinearization {
    fn system_matrix(&self) -> &DMatrix<f64>;
    fn input_matrix(&self) -> &DMatrix<f64>;
    fn output_matrix(&self) -> &DMatrix<f64>;
    /// Writes the Scicoslab export, to the engine's default location when `path` is `None`.
    fn write_scicoslab(&self, path: Option<&Path>);
}
