use crate::broker::Shared;
use crate::marshal::Vector3Value;
use crate::native::NativeAircraft;

#[derive(Clone)]
pub struct Aircraft {
    inner: Shared<dyn NativeAircraft>,
}

impl Aircraft {
    pub(crate) fn new(inner: Shared<dyn NativeAircraft>) -> Self {
        Self { inner }
    }

    pub fn aircraft_name(&self) -> String {
        self.inner.borrow().aircraft_name()
    }

    /// Offset of the reference point.
    pub fn xyz_rp(&self) -> Vector3Value {
        self.inner.borrow().xyz_rp().into()
    }
}
