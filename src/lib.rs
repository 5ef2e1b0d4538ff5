//! Host-facing facade graph over a native flight dynamics engine.
//!
//! [`FdmExec`] is the root; every subsystem facade is reached through it and
//! keeps its subsystem alive through a [`Shared`] handle. Vectors and
//! matrices come back as frozen [`Vector3Value`] / [`Matrix33Value`]
//! snapshots with 0-based host forms.
//!
//! With the `host` feature, the `host` module exposes the same graph as Python classes.

pub mod broker;
pub mod config;
pub mod exec;
pub mod facades;
#[cfg(feature = "host")]
pub mod host;
pub mod marshal;
pub mod native;

pub use broker::Shared;
pub use config::{ConfigError, ExecConfig, PathKind};
pub use exec::{EngineInfo, FdmExec};
pub use facades::{
    Aerodynamics, Aircraft, Atmosphere, Auxiliary, Engine, GroundReactions, InitialCondition,
    LandingGear, Linearization, MassBalance, Propagate, PropertyManager, Propulsion, ALL_ENGINES,
};
pub use marshal::{Matrix33Value, Vector3Value};
pub use native::{ColumnVector3, Matrix33, NativeBackend, NativeError, NativeExec};
