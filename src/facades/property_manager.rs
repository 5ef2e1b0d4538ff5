use crate::broker::Shared;
use crate::native::NativePropertyManager;

#[derive(Clone)]
pub struct PropertyManager {
    inner: Shared<dyn NativePropertyManager>,
}

impl PropertyManager {
    pub(crate) fn new(inner: Shared<dyn NativePropertyManager>) -> Self {
        Self { inner }
    }

    pub fn has_node(&self, path: &str) -> bool {
        self.inner.borrow().has_node(path)
    }
}
