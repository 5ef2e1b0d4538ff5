//! Reference-counted ownership of engine subsystems.
//!
//! A [`Shared`] handle keeps its subsystem alive for as long as any facade or
//! the engine itself holds one. Cloning acquires, dropping releases, and the
//! subsystem is torn down with the last handle. Handles are deliberately
//! `!Send`: the whole facade graph lives on the host's call-in thread.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use tracing::trace;

pub struct Shared<T: ?Sized> {
    inner: Rc<RefCell<T>>,
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }
}

impl<T: ?Sized> Shared<T> {
    /// Wraps an existing reference-counted cell.
    ///
    /// This is how a backend hands out a trait-object view of a concrete
    /// subsystem it already owns, e.g. `Shared::<dyn NativeAircraft>::from_rc(rc)`.
    pub fn from_rc(inner: Rc<RefCell<T>>) -> Self {
        Self { inner }
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }

    /// Number of live handles, the engine's own included.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Whether both handles keep the same subsystem alive.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> Drop for Shared<T> {
    fn drop(&mut self) {
        let remaining = Rc::strong_count(&self.inner) - 1;
        trace!(remaining, "released subsystem handle");
    }
}

impl<T: ?Sized> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shared")
            .field("refs", &self.ref_count())
            .finish()
    }
}
