//! In-process stand-in for the native engine.
//!
//! It models just enough engine behaviour to drive the facades: path checks
//! against the filesystem, YAML model files, a clock, hold/suspend flags and
//! a property table. Loading a model replaces every subsystem, the way a real
//! engine reload does.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use fdm_bridge::native::{
    NativeAerodynamics, NativeAircraft, NativeAtmosphere, NativeAuxiliary, NativeBackend,
    NativeEngine, NativeExec, NativeGear, NativeGroundReactions, NativeInitialCondition,
    NativeLinearization, NativeMassBalance, NativePropagate, NativePropertyManager,
    NativePropulsion,
};
use fdm_bridge::{ColumnVector3, Matrix33, NativeError, Shared};
use nalgebra::{DMatrix, Matrix3};
use serde::Deserialize;

pub const DEFAULT_DT: f64 = 1.0 / 120.0;
const LAPSE_RATE: f64 = 0.00356616;

type Properties = Rc<RefCell<BTreeMap<String, f64>>>;

#[derive(Debug, Clone, Deserialize)]
pub struct ModelFile {
    pub name: String,
    pub engines: usize,
    #[serde(default)]
    pub gear: Vec<[f64; 3]>,
    pub cg: [f64; 3],
    pub rp: [f64; 3],
    pub inertia: [[f64; 3]; 3],
    #[serde(default)]
    pub forces: [f64; 3],
    #[serde(default)]
    pub moments: [f64; 3],
}

#[derive(Debug, Deserialize)]
struct ScriptFile {
    model: String,
    dt: f64,
    #[serde(default)]
    init: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InitFile {
    #[serde(default)]
    u_fps: f64,
    #[serde(default)]
    altitude_ft: f64,
}

fn vec3(v: [f64; 3]) -> ColumnVector3 {
    ColumnVector3::new(v[0], v[1], v[2])
}

// ---- Subsystems ----

#[derive(Default)]
pub struct MockEngine {
    pub running: bool,
}

impl NativeEngine for MockEngine {
    fn init_running(&mut self) -> i32 {
        self.running = true;
        1
    }
}

#[derive(Default)]
pub struct MockPropulsion {
    engines: Vec<Rc<RefCell<MockEngine>>>,
}

impl NativePropulsion for MockPropulsion {
    fn num_engines(&self) -> usize {
        self.engines.len()
    }

    fn engine(&self, idx: usize) -> Result<Shared<dyn NativeEngine>, NativeError> {
        let engine = self.engines.get(idx).ok_or(NativeError::IndexOutOfRange {
            index: idx,
            count: self.engines.len(),
        })?;
        Ok(Shared::<dyn NativeEngine>::from_rc(engine.clone()))
    }

    fn steady_state(&mut self) -> bool {
        self.engines.iter().all(|e| e.borrow().running)
    }

    fn init_running(&mut self, n: i32) -> Result<(), NativeError> {
        if n < 0 {
            for engine in &self.engines {
                engine.borrow_mut().init_running();
            }
            return Ok(());
        }
        let idx = n as usize;
        let engine = self.engines.get(idx).ok_or(NativeError::IndexOutOfRange {
            index: idx,
            count: self.engines.len(),
        })?;
        engine.borrow_mut().init_running();
        Ok(())
    }
}

#[derive(Default)]
pub struct MockAerodynamics {
    forces: ColumnVector3,
    moments: ColumnVector3,
}

impl NativeAerodynamics for MockAerodynamics {
    fn forces(&self) -> ColumnVector3 {
        self.forces
    }

    fn moments_mrc(&self) -> ColumnVector3 {
        self.moments
    }
}

#[derive(Default)]
pub struct MockAircraft {
    name: String,
    rp: ColumnVector3,
}

impl NativeAircraft for MockAircraft {
    fn aircraft_name(&self) -> String {
        self.name.clone()
    }

    fn xyz_rp(&self) -> ColumnVector3 {
        self.rp
    }
}

/// Linear temperature profile in Rankine; unit selectors are recorded, not applied.
pub struct MockAtmosphere {
    t_sl: f64,
    pub p_sl: f64,
    pub last_unit: i32,
}

impl Default for MockAtmosphere {
    fn default() -> Self {
        Self {
            t_sl: 518.67,
            p_sl: 2116.22,
            last_unit: 0,
        }
    }
}

impl NativeAtmosphere for MockAtmosphere {
    fn temperature(&self, altitude: f64) -> f64 {
        self.t_sl - LAPSE_RATE * altitude
    }

    fn set_temperature(&mut self, temperature: f64, altitude: f64, unit: i32) {
        self.t_sl = temperature + LAPSE_RATE * altitude;
        self.last_unit = unit;
    }

    fn set_pressure_sl(&mut self, unit: i32, pressure: f64) {
        self.p_sl = pressure;
        self.last_unit = unit;
    }
}

pub struct MockAuxiliary {
    tw2b: Matrix33,
}

impl Default for MockAuxiliary {
    fn default() -> Self {
        let alpha: f64 = 0.05;
        let (s, c) = alpha.sin_cos();
        Self {
            tw2b: Matrix33::from_rows([[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]]),
        }
    }
}

impl NativeAuxiliary for MockAuxiliary {
    fn tw2b(&self) -> Matrix33 {
        self.tw2b
    }

    fn tb2w(&self) -> Matrix33 {
        self.tw2b.transpose()
    }
}

pub struct MockGear {
    location: ColumnVector3,
    pub steer: f64,
    pub force: [f64; 3],
}

impl NativeGear for MockGear {
    fn steer_norm(&self) -> f64 {
        self.steer
    }

    fn body_x_force(&self) -> f64 {
        self.force[0]
    }

    fn body_y_force(&self) -> f64 {
        self.force[1]
    }

    fn body_z_force(&self) -> f64 {
        self.force[2]
    }

    fn location(&self) -> ColumnVector3 {
        self.location
    }

    fn acting_location(&self) -> ColumnVector3 {
        let l = self.location.as_vector();
        ColumnVector3::new(l.x, l.y, l.z + 1.0)
    }
}

#[derive(Default)]
pub struct MockGroundReactions {
    gear: Vec<Rc<RefCell<MockGear>>>,
}

impl NativeGroundReactions for MockGroundReactions {
    fn num_gear_units(&self) -> usize {
        self.gear.len()
    }

    fn gear_unit(&self, idx: usize) -> Result<Shared<dyn NativeGear>, NativeError> {
        let gear = self.gear.get(idx).ok_or(NativeError::IndexOutOfRange {
            index: idx,
            count: self.gear.len(),
        })?;
        Ok(Shared::<dyn NativeGear>::from_rc(gear.clone()))
    }
}

pub struct MockMassBalance {
    cg: ColumnVector3,
    j: Matrix3<f64>,
}

impl Default for MockMassBalance {
    fn default() -> Self {
        Self {
            cg: ColumnVector3::zeros(),
            j: Matrix3::identity(),
        }
    }
}

impl NativeMassBalance for MockMassBalance {
    fn xyz_cg(&self) -> ColumnVector3 {
        self.cg
    }

    fn j(&self) -> Matrix33 {
        self.j.into()
    }

    fn j_inv(&self) -> Matrix33 {
        self.j.try_inverse().unwrap_or_else(Matrix3::zeros).into()
    }
}

#[derive(Default)]
pub struct MockInitialCondition {
    model_dir: Option<PathBuf>,
    loaded: Option<InitFile>,
}

impl NativeInitialCondition for MockInitialCondition {
    fn load(&mut self, rstfile: &Path, use_aircraft_path: bool) -> bool {
        let path = match (&self.model_dir, use_aircraft_path) {
            (Some(dir), true) => dir.join(rstfile),
            (None, true) => return false,
            (_, false) => rstfile.to_path_buf(),
        };
        let parsed = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_yaml::from_str::<InitFile>(&text).ok());
        match parsed {
            Some(init) => {
                self.loaded = Some(init);
                true
            }
            None => false,
        }
    }
}

pub struct MockPropertyManager {
    properties: Properties,
}

impl NativePropertyManager for MockPropertyManager {
    fn has_node(&self, path: &str) -> bool {
        self.properties.borrow().contains_key(path)
    }
}

pub struct MockPropagate {
    uvw: ColumnVector3,
}

impl NativePropagate for MockPropagate {
    fn tl2b(&self) -> Matrix33 {
        Matrix33::identity()
    }

    fn tec2b(&self) -> Matrix33 {
        Matrix33::from_rows([[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]])
    }

    fn uvw(&self) -> ColumnVector3 {
        self.uvw
    }
}

pub struct MockLinearization {
    a: DMatrix<f64>,
    b: DMatrix<f64>,
    c: DMatrix<f64>,
    default_path: PathBuf,
}

impl MockLinearization {
    fn write_to(&self, path: &Path) -> std::io::Result<()> {
        let mut text = String::new();
        for (name, mat) in [("A", &self.a), ("B", &self.b), ("C", &self.c)] {
            text.push_str(&format!("{name}=[\n"));
            for row in mat.row_iter() {
                let cells: Vec<String> = row.iter().map(|x| format!("{x:.6e}")).collect();
                text.push_str(&cells.join(","));
                text.push_str(";\n");
            }
            text.push_str("];\n");
        }
        fs::write(path, text)
    }
}

impl NativeLinearization for MockLinearization {
    fn system_matrix(&self) -> &DMatrix<f64> {
        &self.a
    }

    fn input_matrix(&self) -> &DMatrix<f64> {
        &self.b
    }

    fn output_matrix(&self) -> &DMatrix<f64> {
        &self.c
    }

    fn write_scicoslab(&self, path: Option<&Path>) {
        let target = path.map_or_else(|| self.default_path.clone(), Path::to_path_buf);
        // Export failures only reach the engine log.
        let _ = self.write_to(&target);
    }
}

// ---- Executive ----

struct Subsystems {
    propulsion: Rc<RefCell<MockPropulsion>>,
    aerodynamics: Rc<RefCell<MockAerodynamics>>,
    aircraft: Rc<RefCell<MockAircraft>>,
    atmosphere: Rc<RefCell<MockAtmosphere>>,
    auxiliary: Rc<RefCell<MockAuxiliary>>,
    ground_reactions: Rc<RefCell<MockGroundReactions>>,
    mass_balance: Rc<RefCell<MockMassBalance>>,
    initial_condition: Rc<RefCell<MockInitialCondition>>,
    propagate: Rc<RefCell<MockPropagate>>,
}

impl Subsystems {
    fn empty() -> Self {
        Self {
            propulsion: Default::default(),
            aerodynamics: Default::default(),
            aircraft: Default::default(),
            atmosphere: Default::default(),
            auxiliary: Default::default(),
            ground_reactions: Default::default(),
            mass_balance: Default::default(),
            initial_condition: Default::default(),
            propagate: Rc::new(RefCell::new(MockPropagate {
                uvw: ColumnVector3::zeros(),
            })),
        }
    }

    fn from_model(model: &ModelFile, model_dir: PathBuf) -> Self {
        let engines = (0..model.engines)
            .map(|_| Rc::new(RefCell::new(MockEngine::default())))
            .collect();
        let gear = model
            .gear
            .iter()
            .map(|loc| {
                Rc::new(RefCell::new(MockGear {
                    location: vec3(*loc),
                    steer: 0.0,
                    force: [0.0; 3],
                }))
            })
            .collect();
        let j = model.inertia;
        Self {
            propulsion: Rc::new(RefCell::new(MockPropulsion { engines })),
            aerodynamics: Rc::new(RefCell::new(MockAerodynamics {
                forces: vec3(model.forces),
                moments: vec3(model.moments),
            })),
            aircraft: Rc::new(RefCell::new(MockAircraft {
                name: model.name.clone(),
                rp: vec3(model.rp),
            })),
            atmosphere: Default::default(),
            auxiliary: Default::default(),
            ground_reactions: Rc::new(RefCell::new(MockGroundReactions { gear })),
            mass_balance: Rc::new(RefCell::new(MockMassBalance {
                cg: vec3(model.cg),
                j: Matrix3::new(
                    j[0][0], j[0][1], j[0][2], j[1][0], j[1][1], j[1][2], j[2][0], j[2][1],
                    j[2][2],
                ),
            })),
            initial_condition: Rc::new(RefCell::new(MockInitialCondition {
                model_dir: Some(model_dir),
                loaded: None,
            })),
            propagate: Rc::new(RefCell::new(MockPropagate {
                uvw: ColumnVector3::zeros(),
            })),
        }
    }
}

pub struct MockExec {
    root_dir: PathBuf,
    engine_path: PathBuf,
    aircraft_path: PathBuf,
    systems_path: PathBuf,
    output_path: PathBuf,
    model: Option<ModelFile>,
    sim_time: f64,
    dt: f64,
    holding: bool,
    suspended: bool,
    trimmed: bool,
    output_enabled: bool,
    logging_rate: f64,
    output_files: Vec<String>,
    debug_level: i32,
    highlighting: bool,
    properties: Properties,
    subsystems: Subsystems,
}

impl MockExec {
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root_dir.join(path)
        }
    }

    fn register_properties(&self) {
        let mut props = self.properties.borrow_mut();
        props.clear();
        props.insert("simulation/sim-time-sec".into(), self.sim_time);
        props.insert("simulation/dt".into(), self.dt);
        props.insert("velocities/u-fps".into(), 0.0);
        props.insert("position/h-sl-ft".into(), 0.0);
        if let Some(model) = &self.model {
            for i in 0..model.engines {
                props.insert(format!("propulsion/engine[{i}]/set-running"), 0.0);
            }
            for i in 0..model.gear.len() {
                props.insert(format!("gear/unit[{i}]/steering-angle-deg"), 0.0);
            }
        }
    }

    fn sync_clock(&self) {
        let mut props = self.properties.borrow_mut();
        if let Some(t) = props.get_mut("simulation/sim-time-sec") {
            *t = self.sim_time;
        }
        if let Some(dt) = props.get_mut("simulation/dt") {
            *dt = self.dt;
        }
    }

    pub fn output_enabled(&self) -> bool {
        self.output_enabled
    }

    pub fn logging_rate(&self) -> f64 {
        self.logging_rate
    }

    pub fn highlighting(&self) -> bool {
        self.highlighting
    }

    /// Sea-level pressure and the unit selector it was last set with.
    pub fn sea_level_pressure(&self) -> (f64, i32) {
        let atmosphere = self.subsystems.atmosphere.borrow();
        (atmosphere.p_sl, atmosphere.last_unit)
    }

    /// Initial conditions loaded through the initial-condition subsystem, if any.
    fn applied_init(&self) -> Option<(f64, f64)> {
        let ic = self.subsystems.initial_condition.borrow();
        ic.loaded.as_ref().map(|i| (i.u_fps, i.altitude_ft))
    }
}

impl NativeBackend for MockExec {
    fn create(root_dir: Option<&Path>) -> Self {
        let root = root_dir.map(Path::to_path_buf).unwrap_or_default();
        Self {
            engine_path: root.join("engine"),
            aircraft_path: root.join("aircraft"),
            systems_path: root.join("systems"),
            output_path: root.clone(),
            root_dir: root,
            model: None,
            sim_time: 0.0,
            dt: DEFAULT_DT,
            holding: false,
            suspended: false,
            trimmed: false,
            output_enabled: true,
            logging_rate: 0.0,
            output_files: Vec::new(),
            debug_level: 1,
            highlighting: true,
            properties: Rc::new(RefCell::new(BTreeMap::new())),
            subsystems: Subsystems::empty(),
        }
    }
}

impl NativeExec for MockExec {
    fn run(&mut self) -> bool {
        if self.model.is_none() {
            return false;
        }
        if !self.holding && !self.suspended {
            self.sim_time += self.dt;
            self.sync_clock();
        }
        true
    }

    fn run_ic(&mut self) -> bool {
        let Some((u, h)) = self.applied_init() else {
            return false;
        };
        self.sim_time = 0.0;
        self.subsystems.propagate.borrow_mut().uvw = ColumnVector3::new(u, 0.0, 0.0);
        let mut props = self.properties.borrow_mut();
        props.insert("velocities/u-fps".into(), u);
        props.insert("position/h-sl-ft".into(), h);
        props.insert("simulation/sim-time-sec".into(), 0.0);
        true
    }

    fn load_model(&mut self, model: &str, _add_model_to_path: bool) -> bool {
        let model_dir = self.aircraft_path.join(model);
        let file = model_dir.join(format!("{model}.yaml"));
        let parsed = fs::read_to_string(&file)
            .ok()
            .and_then(|text| serde_yaml::from_str::<ModelFile>(&text).ok());
        let Some(parsed) = parsed else {
            return false;
        };
        self.subsystems = Subsystems::from_model(&parsed, model_dir);
        self.model = Some(parsed);
        self.sim_time = 0.0;
        self.trimmed = false;
        self.register_properties();
        true
    }

    fn load_script(&mut self, script: &Path, delta_t: f64, init_file: &Path) -> bool {
        let parsed = fs::read_to_string(self.resolve(script))
            .ok()
            .and_then(|text| serde_yaml::from_str::<ScriptFile>(&text).ok());
        let Some(parsed) = parsed else {
            return false;
        };
        if !self.load_model(&parsed.model, true) {
            return false;
        }
        self.dt = if delta_t > 0.0 { delta_t } else { parsed.dt };
        self.sync_clock();

        let init = if init_file.as_os_str().is_empty() {
            parsed.init.map(PathBuf::from)
        } else {
            Some(init_file.to_path_buf())
        };
        match init {
            Some(init) => {
                let resolved = self.resolve(&init);
                self.subsystems
                    .initial_condition
                    .borrow_mut()
                    .load(&resolved, false)
            }
            None => true,
        }
    }

    fn set_engine_path(&mut self, path: &Path) -> bool {
        let resolved = self.resolve(path);
        let ok = resolved.is_dir();
        if ok {
            self.engine_path = resolved;
        }
        ok
    }

    fn set_aircraft_path(&mut self, path: &Path) -> bool {
        let resolved = self.resolve(path);
        let ok = resolved.is_dir();
        if ok {
            self.aircraft_path = resolved;
        }
        ok
    }

    fn set_systems_path(&mut self, path: &Path) -> bool {
        let resolved = self.resolve(path);
        let ok = resolved.is_dir();
        if ok {
            self.systems_path = resolved;
        }
        ok
    }

    fn set_output_path(&mut self, path: &Path) -> bool {
        let resolved = self.resolve(path);
        let ok = resolved.is_dir();
        if ok {
            self.output_path = resolved;
        }
        ok
    }

    fn set_root_dir(&mut self, path: &Path) {
        self.root_dir = path.to_path_buf();
    }

    fn engine_path(&self) -> PathBuf {
        self.engine_path.clone()
    }

    fn aircraft_path(&self) -> PathBuf {
        self.aircraft_path.clone()
    }

    fn systems_path(&self) -> PathBuf {
        self.systems_path.clone()
    }

    fn output_path(&self) -> PathBuf {
        self.output_path.clone()
    }

    fn root_dir(&self) -> PathBuf {
        self.root_dir.clone()
    }

    fn get_property_value(&self, property: &str) -> f64 {
        self.properties
            .borrow()
            .get(property)
            .copied()
            .unwrap_or(0.0)
    }

    fn set_property_value(&mut self, property: &str, value: f64) {
        if let Some(slot) = self.properties.borrow_mut().get_mut(property) {
            *slot = value;
        }
    }

    fn query_property_catalog(&self, check: &str) -> String {
        let props = self.properties.borrow();
        let matches: Vec<&str> = props
            .keys()
            .filter(|name| name.contains(check))
            .map(String::as_str)
            .collect();
        if matches.is_empty() {
            "No matches found\n".to_string()
        } else {
            matches.join("\n") + "\n"
        }
    }

    fn print_property_catalog(&mut self) {
        for name in self.properties.borrow().keys() {
            println!("    {name}");
        }
    }

    fn print_simulation_configuration(&self) {
        println!("Model: {:?} dt: {}", self.model.as_ref().map(|m| &m.name), self.dt);
    }

    fn set_output_directives(&mut self, fname: &Path) -> bool {
        let resolved = self.resolve(fname);
        if !resolved.is_file() {
            return false;
        }
        let stem = resolved
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.output_files.push(format!("{stem}.csv"));
        true
    }

    fn set_logging_rate(&mut self, rate: f64) {
        self.logging_rate = rate;
    }

    fn set_output_file_name(&mut self, n: usize, fname: &str) -> bool {
        match self.output_files.get_mut(n) {
            Some(slot) => {
                *slot = fname.to_string();
                true
            }
            None => false,
        }
    }

    fn output_file_name(&self, n: usize) -> String {
        self.output_files.get(n).cloned().unwrap_or_default()
    }

    fn enable_output(&mut self) {
        self.output_enabled = true;
    }

    fn disable_output(&mut self) {
        self.output_enabled = false;
    }

    fn hold(&mut self) {
        self.holding = true;
    }

    fn resume(&mut self) {
        self.holding = false;
    }

    fn holding(&self) -> bool {
        self.holding
    }

    fn suspend_integration(&mut self) {
        self.suspended = true;
    }

    fn resume_integration(&mut self) {
        self.suspended = false;
    }

    fn integration_suspended(&self) -> bool {
        self.suspended
    }

    fn reset_to_initial_conditions(&mut self, _mode: i32) {
        self.sim_time = 0.0;
        self.trimmed = false;
        self.sync_clock();
        for gear in &self.subsystems.ground_reactions.borrow().gear {
            let mut gear = gear.borrow_mut();
            gear.steer = 0.0;
            gear.force = [0.0; 3];
        }
    }

    fn do_trim(&mut self, _mode: i32) {
        if self.model.is_some() {
            self.trimmed = true;
        }
    }

    fn set_trim_status(&mut self, status: bool) {
        self.trimmed = status;
    }

    fn trim_status(&self) -> bool {
        self.trimmed
    }

    fn model_name(&self) -> String {
        self.model
            .as_ref()
            .map(|m| m.name.clone())
            .unwrap_or_default()
    }

    fn propulsion_tank_report(&self) -> String {
        let engines = self.subsystems.propulsion.borrow().engines.len();
        format!("Tanks: 0  Engines: {engines}\n")
    }

    fn sim_time(&self) -> f64 {
        self.sim_time
    }

    fn delta_t(&self) -> f64 {
        self.dt
    }

    fn set_sim_time(&mut self, time: f64) -> bool {
        self.sim_time = time;
        self.sync_clock();
        true
    }

    fn set_dt(&mut self, delta_t: f64) {
        self.dt = delta_t;
        self.sync_clock();
    }

    fn incr_time(&mut self) -> f64 {
        if !self.holding {
            self.sim_time += self.dt;
            self.sync_clock();
        }
        self.sim_time
    }

    fn version(&self) -> String {
        "mock-1.0".to_string()
    }

    fn debug_level(&self) -> i32 {
        self.debug_level
    }

    fn set_debug_level(&mut self, level: i32) {
        self.debug_level = level;
    }

    fn disable_highlighting(&mut self) {
        self.highlighting = false;
    }

    fn propulsion(&self) -> Shared<dyn NativePropulsion> {
        Shared::<dyn NativePropulsion>::from_rc(self.subsystems.propulsion.clone())
    }

    fn aerodynamics(&self) -> Shared<dyn NativeAerodynamics> {
        Shared::<dyn NativeAerodynamics>::from_rc(self.subsystems.aerodynamics.clone())
    }

    fn aircraft(&self) -> Shared<dyn NativeAircraft> {
        Shared::<dyn NativeAircraft>::from_rc(self.subsystems.aircraft.clone())
    }

    fn atmosphere(&self) -> Shared<dyn NativeAtmosphere> {
        Shared::<dyn NativeAtmosphere>::from_rc(self.subsystems.atmosphere.clone())
    }

    fn auxiliary(&self) -> Shared<dyn NativeAuxiliary> {
        Shared::<dyn NativeAuxiliary>::from_rc(self.subsystems.auxiliary.clone())
    }

    fn ground_reactions(&self) -> Shared<dyn NativeGroundReactions> {
        Shared::<dyn NativeGroundReactions>::from_rc(self.subsystems.ground_reactions.clone())
    }

    fn mass_balance(&self) -> Shared<dyn NativeMassBalance> {
        Shared::<dyn NativeMassBalance>::from_rc(self.subsystems.mass_balance.clone())
    }

    fn initial_condition(&self) -> Shared<dyn NativeInitialCondition> {
        Shared::<dyn NativeInitialCondition>::from_rc(self.subsystems.initial_condition.clone())
    }

    fn property_manager(&self) -> Shared<dyn NativePropertyManager> {
        let manager = MockPropertyManager {
            properties: self.properties.clone(),
        };
        Shared::<dyn NativePropertyManager>::from_rc(Rc::new(RefCell::new(manager)))
    }

    fn propagate(&self) -> Shared<dyn NativePropagate> {
        Shared::<dyn NativePropagate>::from_rc(self.subsystems.propagate.clone())
    }

    fn linearize(&mut self) -> Shared<dyn NativeLinearization> {
        let n = 4;
        let a = DMatrix::from_fn(n, n, |i, j| if i == j { -1.0 } else { 0.1 * (i + j) as f64 });
        let b = DMatrix::from_fn(n, 2, |i, j| (i * 2 + j) as f64);
        let c = DMatrix::identity(n, n);
        let lin = MockLinearization {
            a,
            b,
            c,
            default_path: self.output_path.join("linearization.sce"),
        };
        Shared::<dyn NativeLinearization>::from_rc(Rc::new(RefCell::new(lin)))
    }
}
