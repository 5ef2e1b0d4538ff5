use crate::broker::Shared;
use crate::marshal::{Matrix33Value, Vector3Value};
use crate::native::NativePropagate;

#[derive(Clone)]
pub struct Propagate {
    inner: Shared<dyn NativePropagate>,
}

impl Propagate {
    pub(crate) fn new(inner: Shared<dyn NativePropagate>) -> Self {
        Self { inner }
    }

    /// Local-to-body rotation.
    pub fn tl2b(&self) -> Matrix33Value {
        self.inner.borrow().tl2b().into()
    }

    /// ECEF-to-body rotation.
    pub fn tec2b(&self) -> Matrix33Value {
        self.inner.borrow().tec2b().into()
    }

    /// Body frame velocity.
    pub fn uvw(&self) -> Vector3Value {
        self.inner.borrow().uvw().into()
    }
}
