use crate::broker::Shared;
use crate::native::NativeAtmosphere;

/// Atmosphere commands take the engine's unit enumerants unchanged.
#[derive(Clone)]
pub struct Atmosphere {
    inner: Shared<dyn NativeAtmosphere>,
}

impl Atmosphere {
    pub(crate) fn new(inner: Shared<dyn NativeAtmosphere>) -> Self {
        Self { inner }
    }

    pub fn temperature(&self, altitude: f64) -> f64 {
        self.inner.borrow().temperature(altitude)
    }

    pub fn set_temperature(&self, temperature: f64, altitude: f64, unit: i32) {
        self.inner
            .borrow_mut()
            .set_temperature(temperature, altitude, unit);
    }

    pub fn set_pressure_sl(&self, unit: i32, pressure: f64) {
        self.inner.borrow_mut().set_pressure_sl(unit, pressure);
    }
}
