//! Caller-owned handle for opening the file picker.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use dioxus::logger::tracing::warn;

/// A cloneable cell the upload surface binds its picker-opener into.
///
/// The owner creates the handle, passes it to the surface, and may call
/// [`OpenHandle::open`] from anywhere on the UI thread (a toolbar button,
/// a menu entry). The surface binds the opener once after mount and releases
/// it when it is dropped, so invoking a handle that outlives its surface is
/// a logged no-op rather than a dangling call.
#[derive(Clone, Default)]
pub struct OpenHandle {
    slot: Rc<RefCell<Option<Rc<dyn Fn()>>>>,
}

impl OpenHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the native file picker, if a surface is currently bound.
    pub fn open(&self) {
        let opener = self.slot.borrow().clone();
        match opener {
            Some(f) => f(),
            None => warn!("file picker requested but no upload surface is bound"),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.slot.borrow().is_some()
    }

    pub(crate) fn bind(&self, opener: impl Fn() + 'static) {
        *self.slot.borrow_mut() = Some(Rc::new(opener));
    }

    pub(crate) fn release(&self) {
        self.slot.borrow_mut().take();
    }
}

/// Handles compare by slot identity, so a clone equals its original.
impl PartialEq for OpenHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl fmt::Debug for OpenHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenHandle").field("bound", &self.is_bound()).finish()
    }
}
