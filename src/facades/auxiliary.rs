use crate::broker::Shared;
use crate::marshal::Matrix33Value;
use crate::native::NativeAuxiliary;

#[derive(Clone)]
pub struct Auxiliary {
    inner: Shared<dyn NativeAuxiliary>,
}

impl Auxiliary {
    pub(crate) fn new(inner: Shared<dyn NativeAuxiliary>) -> Self {
        Self { inner }
    }

    /// Wind-to-body rotation.
    pub fn tw2b(&self) -> Matrix33Value {
        self.inner.borrow().tw2b().into()
    }

    /// Body-to-wind rotation.
    pub fn tb2w(&self) -> Matrix33Value {
        self.inner.borrow().tb2w().into()
    }
}
