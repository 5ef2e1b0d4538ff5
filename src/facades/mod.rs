//! Host-visible facades over engine subsystems.
//!
//! Each facade holds one [`Shared`](crate::broker::Shared) reference to its
//! subsystem and forwards every call. Two facades over the same subsystem
//! observe the same live state; vector and matrix getters return frozen
//! [`marshal`](crate::marshal) values instead.

mod aerodynamics;
mod aircraft;
mod atmosphere;
mod auxiliary;
mod ground_reactions;
mod initial_condition;
mod linearization;
mod mass_balance;
mod propagate;
mod property_manager;
mod propulsion;

pub use aerodynamics::Aerodynamics;
pub use aircraft::Aircraft;
pub use atmosphere::Atmosphere;
pub use auxiliary::Auxiliary;
pub use ground_reactions::{GroundReactions, LandingGear};
pub use initial_condition::InitialCondition;
pub use linearization::Linearization;
pub use mass_balance::MassBalance;
pub use propagate::Propagate;
pub use property_manager::PropertyManager;
pub use propulsion::{Engine, Propulsion, ALL_ENGINES};
