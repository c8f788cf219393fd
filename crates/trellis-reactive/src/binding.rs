#![forbid(unsafe_code)]

//! Two-way synchronization between an external value and an element value.
//!
//! A [`ValueBinding<T>`] owns four closures — read/write for the external
//! (context) side and read/write for the element side — plus a lock
//! predicate. The engine calls [`ValueBinding::pull`] once per pass at node
//! update time; the element's own change notification drives the push
//! direction through the handle returned by [`ValueBinding::pusher`].
//!
//! The lock predicate exists so a refresh never clobbers a value the user is
//! actively editing (an input holding focus, an open dropdown). It gates the
//! pull direction only: user edits always reach the external side.
//!
//! # Invariants
//!
//! 1. `pull` writes the element iff the lock is released *and* the two sides
//!    compare unequal.
//! 2. `push` calls the external writer synchronously and unconditionally.
//! 3. The lock predicate is re-evaluated on every `pull`.
//!
//! # Failure Modes
//!
//! - A panicking side closure propagates to the pass caller.
//! - Closures capture `Rc` handles; a binding outliving its element keeps the
//!   element allocation alive (harmless, but worth knowing).

use std::fmt;
use std::rc::Rc;

use tracing::trace;

/// Generic two-way synchronizer with edit-lock semantics.
pub struct ValueBinding<T> {
    read_external: Rc<dyn Fn() -> T>,
    write_external: Rc<dyn Fn(T)>,
    read_element: Rc<dyn Fn() -> T>,
    write_element: Rc<dyn Fn(T)>,
    locked: Rc<dyn Fn() -> bool>,
}

impl<T: PartialEq + 'static> ValueBinding<T> {
    /// Build a binding from its four sides. The lock predicate defaults to
    /// always-false; see [`ValueBinding::locked_when`].
    pub fn new(
        read_external: impl Fn() -> T + 'static,
        write_external: impl Fn(T) + 'static,
        read_element: impl Fn() -> T + 'static,
        write_element: impl Fn(T) + 'static,
    ) -> Self {
        Self {
            read_external: Rc::new(read_external),
            write_external: Rc::new(write_external),
            read_element: Rc::new(read_element),
            write_element: Rc::new(write_element),
            locked: Rc::new(|| false),
        }
    }

    /// Replace the lock predicate.
    #[must_use]
    pub fn locked_when(mut self, locked: impl Fn() -> bool + 'static) -> Self {
        self.locked = Rc::new(locked);
        self
    }

    /// Whether the lock predicate currently holds.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        (self.locked)()
    }

    /// External → element. Writes only when unlocked and the sides differ.
    pub fn pull(&self) {
        if (self.locked)() {
            return;
        }
        let external = (self.read_external)();
        if (self.read_element)() != external {
            trace!(
                value = std::any::type_name::<T>(),
                "pull: element refreshed from external value"
            );
            (self.write_element)(external);
        }
    }

    /// Element → external. Synchronous, not subject to the lock.
    pub fn push(&self, value: T) {
        (self.write_external)(value);
    }

    /// A shareable handle for the push direction, suitable for installing as
    /// an element's change hook.
    #[must_use]
    pub fn pusher(&self) -> Rc<dyn Fn(T)> {
        Rc::clone(&self.write_external)
    }
}

impl<T> Clone for ValueBinding<T> {
    fn clone(&self) -> Self {
        Self {
            read_external: Rc::clone(&self.read_external),
            write_external: Rc::clone(&self.write_external),
            read_element: Rc::clone(&self.read_element),
            write_element: Rc::clone(&self.write_element),
            locked: Rc::clone(&self.locked),
        }
    }
}

impl<T> fmt::Debug for ValueBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueBinding")
            .field("value", &std::any::type_name::<T>())
            .field("locked", &(self.locked)())
            .finish()
    }
}

/// Type-erased pull access, so a node can hold one binding regardless of the
/// bound value type.
pub trait Pullable {
    /// Run one external → element synchronization step.
    fn pull(&self);

    /// Whether the binding's lock predicate currently holds.
    fn is_locked(&self) -> bool;
}

impl<T: PartialEq + 'static> Pullable for ValueBinding<T> {
    fn pull(&self) {
        ValueBinding::pull(self);
    }

    fn is_locked(&self) -> bool {
        ValueBinding::is_locked(self)
    }
}
