use crate::broker::Shared;
use crate::marshal::Vector3Value;
use crate::native::NativeAerodynamics;

#[derive(Clone)]
pub struct Aerodynamics {
    inner: Shared<dyn NativeAerodynamics>,
}

impl Aerodynamics {
    pub(crate) fn new(inner: Shared<dyn NativeAerodynamics>) -> Self {
        Self { inner }
    }

    /// Total aerodynamic force.
    pub fn forces(&self) -> Vector3Value {
        self.inner.borrow().forces().into()
    }

    /// Aerodynamic moment about the moment reference center.
    pub fn moments_mrc(&self) -> Vector3Value {
        self.inner.borrow().moments_mrc().into()
    }
}
