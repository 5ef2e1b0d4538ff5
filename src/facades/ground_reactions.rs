use crate::broker::Shared;
use crate::marshal::Vector3Value;
use crate::native::{NativeError, NativeGear, NativeGroundReactions};

#[derive(Clone)]
pub struct GroundReactions {
    inner: Shared<dyn NativeGroundReactions>,
}

impl GroundReactions {
    pub(crate) fn new(inner: Shared<dyn NativeGroundReactions>) -> Self {
        Self { inner }
    }

    pub fn num_gear_units(&self) -> usize {
        self.inner.borrow().num_gear_units()
    }

    /// Facade over gear unit `idx`, counted from 0.
    ///
    /// # Errors
    /// Whatever the native subsystem reports for an invalid index, normally
    /// [`NativeError::IndexOutOfRange`].
    pub fn gear_unit(&self, idx: usize) -> Result<LandingGear, NativeError> {
        let gear = self.inner.borrow().gear_unit(idx)?;
        Ok(LandingGear::new(gear))
    }
}

/// One landing gear unit. Forces are expressed in the body frame.
#[derive(Clone)]
pub struct LandingGear {
    inner: Shared<dyn NativeGear>,
}

impl LandingGear {
    pub(crate) fn new(inner: Shared<dyn NativeGear>) -> Self {
        Self { inner }
    }

    pub fn steer_norm(&self) -> f64 {
        self.inner.borrow().steer_norm()
    }

    pub fn body_x_force(&self) -> f64 {
        self.inner.borrow().body_x_force()
    }

    pub fn body_y_force(&self) -> f64 {
        self.inner.borrow().body_y_force()
    }

    pub fn body_z_force(&self) -> f64 {
        self.inner.borrow().body_z_force()
    }

    /// Structural location of the unit.
    pub fn location(&self) -> Vector3Value {
        self.inner.borrow().location().into()
    }

    /// Point where the gear force is applied.
    pub fn acting_location(&self) -> Vector3Value {
        self.inner.borrow().acting_location().into()
    }
}
