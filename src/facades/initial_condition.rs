use std::path::Path;

use crate::broker::Shared;
use crate::native::NativeInitialCondition;

#[derive(Clone)]
pub struct InitialCondition {
    inner: Shared<dyn NativeInitialCondition>,
}

impl InitialCondition {
    pub(crate) fn new(inner: Shared<dyn NativeInitialCondition>) -> Self {
        Self { inner }
    }

    /// Loads an initialization file.
    ///
    /// With `use_aircraft_path` the name resolves against the configured
    /// aircraft directory, otherwise it is taken as a literal path.
    pub fn load(&self, rstfile: &str, use_aircraft_path: bool) -> bool {
        self.inner
            .borrow_mut()
            .load(Path::new(rstfile), use_aircraft_path)
    }
}
