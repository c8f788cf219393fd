#![forbid(unsafe_code)]

//! The pass driver.
//!
//! A [`Root`] owns the binder tree rooted on a host-provided element and runs
//! one synchronous reconciliation pass per [`Root::pass`] call. *When* passes
//! run — per frame, per tick, on state-changed notifications — is entirely
//! the host's business.
//!
//! Rebinding is automatic: passing a different context handle or root element
//! than the previous pass tears the managed tree down and starts fresh, since
//! every stored closure is fixed over the handles it was created with.
//!
//! # Failure Modes
//!
//! - A failed pass leaves whatever intermediate structure existed at the
//!   failure point, including stale visited marks; call [`Root::reset`]
//!   before the next pass instead of resuming.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

use trellis_core::{Ctx, Element, Host, Result};

use crate::binder::Binder;

/// Reconciliation counts for one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Nodes created this pass.
    pub created: usize,
    /// Nodes visited (updated) this pass, creations included.
    pub updated: usize,
    /// Nodes pruned this pass, descendants included.
    pub pruned: usize,
}

/// Shared per-pass counters, threaded through every binder in one tree.
#[derive(Debug, Default)]
pub(crate) struct PassCounters {
    created: Cell<usize>,
    updated: Cell<usize>,
    pruned: Cell<usize>,
}

impl PassCounters {
    pub(crate) fn reset(&self) {
        self.created.set(0);
        self.updated.set(0);
        self.pruned.set(0);
    }

    pub(crate) fn bump_created(&self) {
        self.created.set(self.created.get() + 1);
    }

    pub(crate) fn bump_updated(&self) {
        self.updated.set(self.updated.get() + 1);
    }

    pub(crate) fn bump_pruned(&self, nodes: usize) {
        self.pruned.set(self.pruned.get() + nodes);
    }

    pub(crate) fn snapshot(&self) -> PassStats {
        PassStats {
            created: self.created.get(),
            updated: self.updated.get(),
            pruned: self.pruned.get(),
        }
    }
}

/// Drives reconciliation passes over a host-provided root element.
pub struct Root<H, C, E> {
    binder: Option<Binder<H, C, E>>,
}

impl<H: Host, C: 'static, E: Element> Root<H, C, E> {
    /// An unbound root; the first [`Root::pass`] materializes the tree.
    #[must_use]
    pub fn new() -> Self {
        Self { binder: None }
    }

    /// Whether a tree is currently materialized.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binder.is_some()
    }

    /// Run one synchronous pass of `build` against the tree.
    ///
    /// Returns the pass's reconciliation counts.
    ///
    /// # Errors
    ///
    /// Whatever the description raises; see the crate-level failure table.
    pub fn pass<FB>(
        &mut self,
        ctx: &Ctx<C>,
        element: &Rc<RefCell<E>>,
        build: FB,
    ) -> Result<PassStats>
    where
        FB: FnOnce(&mut Binder<H, C, E>) -> Result<()>,
    {
        let rebind = match &self.binder {
            Some(b) => !Ctx::ptr_eq(b.ctx(), ctx) || !Rc::ptr_eq(b.element(), element),
            None => true,
        };
        if rebind {
            if let Some(old) = self.binder.take() {
                old.teardown();
            }
            self.binder = Some(Binder::new_root(
                ctx.clone(),
                Rc::clone(element),
                Rc::new(PassCounters::default()),
            ));
        }

        let binder = self.binder.as_mut().expect("root binder ensured above");
        binder.counters().reset();
        build(binder)?;
        binder.sweep();

        let stats = binder.counters().snapshot();
        debug!(
            created = stats.created,
            updated = stats.updated,
            pruned = stats.pruned,
            "pass reconciled"
        );
        Ok(stats)
    }

    /// Tear down the managed tree, detaching every managed element from the
    /// root element. The next pass starts from scratch.
    pub fn reset(&mut self) {
        if let Some(binder) = self.binder.take() {
            binder.teardown();
        }
    }

    /// Render the managed tree as an indented outline; empty when unbound.
    #[must_use]
    pub fn hierarchy(&self) -> String {
        self.binder.as_ref().map(Binder::hierarchy).unwrap_or_default()
    }
}

impl<H: Host, C: 'static, E: Element> Default for Root<H, C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, C, E> std::fmt::Debug for Root<H, C, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Root")
            .field("bound", &self.binder.is_some())
            .finish()
    }
}
