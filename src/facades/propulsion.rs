use crate::broker::Shared;
use crate::native::{NativeEngine, NativeError, NativePropulsion};

/// Selector accepted by [`Propulsion::init_running`] to start every engine.
pub const ALL_ENGINES: i32 = -1;

#[derive(Clone)]
pub struct Propulsion {
    inner: Shared<dyn NativePropulsion>,
}

impl Propulsion {
    pub(crate) fn new(inner: Shared<dyn NativePropulsion>) -> Self {
        Self { inner }
    }

    pub fn num_engines(&self) -> usize {
        self.inner.borrow().num_engines()
    }

    /// Facade over engine `idx`, counted from 0.
    ///
    /// # Errors
    /// Whatever the native subsystem reports for an invalid index, normally
    /// [`NativeError::IndexOutOfRange`].
    pub fn engine(&self, idx: usize) -> Result<Engine, NativeError> {
        let engine = self.inner.borrow().engine(idx)?;
        Ok(Engine::new(engine))
    }

    /// Whether every engine has settled. The engine may iterate to get there.
    pub fn steady_state(&self) -> bool {
        self.inner.borrow_mut().steady_state()
    }

    /// Brings engine `n` (or every engine, with [`ALL_ENGINES`]) to a running state.
    pub fn init_running(&self, n: i32) -> Result<(), NativeError> {
        self.inner.borrow_mut().init_running(n)
    }
}

/// A single propulsion unit.
#[derive(Clone)]
pub struct Engine {
    inner: Shared<dyn NativeEngine>,
}

impl Engine {
    pub(crate) fn new(inner: Shared<dyn NativeEngine>) -> Self {
        Self { inner }
    }

    /// Returns the engine's own status code.
    pub fn init_running(&self) -> i32 {
        self.inner.borrow_mut().init_running()
    }
}
