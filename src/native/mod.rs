//! The query/command surface of the wrapped flight dynamics engine.
//!
//! Everything in this module belongs to the engine side of the boundary. A
//! backend (an FFI shim, or an in-process double in tests) implements these
//! traits; the facades in [`crate::facades`] and [`crate::exec`] only ever
//! forward to them.

mod error;
mod math;
mod traits;

pub use error::NativeError;
pub use math::{ColumnVector3, Matrix33};
pub use traits::{
    NativeAerodynamics, NativeAircraft, NativeAtmosphere, NativeAuxiliary, NativeBackend,
    NativeEngine, NativeExec, NativeGear, NativeGroundReactions, NativeInitialCondition,
    NativeLinearization, NativeMassBalance, NativePropagate, NativePropertyManager,
    NativePropulsion,
};
