use crate::broker::Shared;
use crate::marshal::{Matrix33Value, Vector3Value};
use crate::native::NativeMassBalance;

#[derive(Clone)]
pub struct MassBalance {
    inner: Shared<dyn NativeMassBalance>,
}

impl MassBalance {
    pub(crate) fn new(inner: Shared<dyn NativeMassBalance>) -> Self {
        Self { inner }
    }

    /// Center of gravity location.
    pub fn xyz_cg(&self) -> Vector3Value {
        self.inner.borrow().xyz_cg().into()
    }

    /// Inertia tensor.
    pub fn j(&self) -> Matrix33Value {
        self.inner.borrow().j().into()
    }

    pub fn j_inv(&self) -> Matrix33Value {
        self.inner.borrow().j_inv().into()
    }
}
