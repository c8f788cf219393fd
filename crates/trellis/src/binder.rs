#![forbid(unsafe_code)]

//! Persistent nodes and the name-keyed reconciler.
//!
//! A [`Binder`] pairs one host element with one context handle and a
//! name-keyed registry of child binders. [`Binder::node`] is the whole
//! engine: get-or-create by name, duplicate detection through a pass-scoped
//! `visited` flag, the update path (stored update action → binding pull →
//! class re-application → descent), and the end-of-pass sweep that prunes
//! whatever the current description did not declare.
//!
//! Children are stored type-erased so one registry can hold nodes of mixed
//! context and element types; resolution downcasts back to the concrete
//! binder type and reports a [`TypeMismatch`](trellis_core::Error) when a
//! name is reused with different types.
//!
//! # Invariants
//!
//! 1. `visited` is false for every registered child when its parent starts
//!    declaring children, and set exactly when the child is declared.
//! 2. The sweep runs once per parent per pass, strictly after the parent's
//!    build descent — never interleaved with creation.
//! 3. `on_create` runs exactly once per node lifetime; the stored update
//!    action runs on every visited pass, including the creation pass.
//! 4. A node's element is created once and parented once.

use std::any::Any;
use std::cell::RefCell;
use std::fmt::Write as _;
use std::marker::PhantomData;
use std::rc::Rc;

use ahash::AHashMap;
use tracing::trace;

use trellis_core::element::{Create, Element, ElementCell};
use trellis_core::{Ctx, Error, Host, Result};
use trellis_reactive::{Pullable, ValueBinding};

use crate::root::PassCounters;

/// Stored per-pass update action for a node.
pub type UpdateFn<H, C, E> = dyn Fn(&mut Binder<H, C, E>) -> Result<()>;

/// A persistent node: one element, one context, one child registry.
pub struct Binder<H, C, E> {
    name: String,
    path: String,
    ctx: Ctx<C>,
    element: Rc<RefCell<E>>,
    children: AHashMap<String, Box<dyn AnyBinder>>,
    visited: bool,
    binding: Option<Box<dyn Pullable>>,
    update: Option<Rc<UpdateFn<H, C, E>>>,
    purge_unmanaged: bool,
    counters: Rc<PassCounters>,
    _host: PhantomData<H>,
}

impl<H: Host, C: 'static, E: Element> Binder<H, C, E> {
    pub(crate) fn new_root(
        ctx: Ctx<C>,
        element: Rc<RefCell<E>>,
        counters: Rc<PassCounters>,
    ) -> Self {
        let name = element.borrow().base().name().to_string();
        Self {
            path: name.clone(),
            name,
            ctx,
            element,
            children: AHashMap::new(),
            visited: false,
            binding: None,
            update: None,
            purge_unmanaged: true,
            counters,
            _host: PhantomData,
        }
    }

    fn new_child(
        parent_path: &str,
        name: &str,
        ctx: Ctx<C>,
        element: Rc<RefCell<E>>,
        counters: Rc<PassCounters>,
    ) -> Self {
        Self {
            name: name.to_string(),
            path: format!("{parent_path}/{name}"),
            ctx,
            element,
            children: AHashMap::new(),
            visited: false,
            binding: None,
            update: None,
            purge_unmanaged: true,
            counters,
            _host: PhantomData,
        }
    }

    /// The node's name, unique among its siblings.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slash-joined path from the root, for diagnostics.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The node's context handle.
    #[must_use]
    pub fn ctx(&self) -> &Ctx<C> {
        &self.ctx
    }

    /// The node's element cell.
    #[must_use]
    pub fn element(&self) -> &Rc<RefCell<E>> {
        &self.element
    }

    /// Install the node's value binding. Called once, from a field binder's
    /// create path; installing again replaces the previous binding.
    pub fn install_binding<T: PartialEq + 'static>(&mut self, binding: ValueBinding<T>) {
        self.binding = Some(Box::new(binding));
    }

    /// Leave element children that have no corresponding node untouched
    /// during the sweep. Field binders call this so host widget internals
    /// survive.
    pub fn keep_unmanaged_children(&mut self) {
        self.purge_unmanaged = false;
    }

    /// Resolve (or create) the child named `name` and run one update cycle
    /// on it.
    ///
    /// Creation path: instantiate the element via [`Create::create`], derive
    /// the child context via `map`, parent the element, store `on_update`,
    /// run `on_create` once. Every visited pass, creation included: mark
    /// visited, run the stored update action, pull the binding, re-apply
    /// `classes`, run `build`, then sweep the child's own children.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidName`] for blank names, [`Error::DuplicateVisit`] when
    /// `name` was already declared under this node in the current pass,
    /// [`Error::TypeMismatch`] when `name` resolves to a node created with
    /// different types, and anything the supplied callbacks return.
    pub fn node<D, E2, M, FC, FU, FB>(
        &mut self,
        name: &str,
        classes: &str,
        map: M,
        on_create: FC,
        on_update: FU,
        build: FB,
    ) -> Result<()>
    where
        D: 'static,
        E2: Element + Create,
        M: FnOnce(&Ctx<C>) -> Ctx<D>,
        FC: FnOnce(&mut Binder<H, D, E2>) -> Result<()>,
        FU: Fn(&mut Binder<H, D, E2>) -> Result<()> + 'static,
        FB: FnOnce(&mut Binder<H, D, E2>) -> Result<()>,
    {
        if name.trim().is_empty() {
            return Err(Error::InvalidName {
                parent: self.path.clone(),
            });
        }

        if !self.children.contains_key(name) {
            let element = Rc::new(RefCell::new(E2::create(name)));
            let child_ctx = map(&self.ctx);
            let mut child = Binder::<H, D, E2>::new_child(
                &self.path,
                name,
                child_ctx,
                Rc::clone(&element),
                Rc::clone(&self.counters),
            );
            child.update = Some(Rc::new(on_update));

            let cell: ElementCell = element;
            self.element.borrow_mut().base_mut().push_child(cell);

            on_create(&mut child)?;
            self.counters.bump_created();
            trace!(path = %child.path, "created node");
            self.children.insert(name.to_string(), Box::new(child));
        }

        let slot = self
            .children
            .get_mut(name)
            .expect("registry entry ensured above");
        let any: &mut dyn Any = slot.as_mut();
        let Some(child) = any.downcast_mut::<Binder<H, D, E2>>() else {
            return Err(Error::TypeMismatch {
                name: name.to_string(),
                parent: self.path.clone(),
            });
        };

        if child.visited {
            return Err(Error::DuplicateVisit {
                name: name.to_string(),
                parent: self.path.clone(),
            });
        }
        child.visited = true;
        child.counters.bump_updated();

        if let Some(update) = child.update.clone() {
            update(child)?;
        }
        if let Some(binding) = &child.binding {
            binding.pull();
        }
        child
            .element
            .borrow_mut()
            .base_mut()
            .classes_mut()
            .assign(classes);

        build(child)?;
        child.sweep();
        Ok(())
    }

    /// Prune unvisited children, drop unmanaged element children when
    /// enabled, and reset the visited marks of the survivors.
    pub(crate) fn sweep(&mut self) {
        let counters = Rc::clone(&self.counters);
        let mut element = self.element.borrow_mut();
        let base = element.base_mut();

        self.children.retain(|name, slot| {
            if slot.is_visited() {
                true
            } else {
                trace!(path = slot.path(), "pruned node");
                counters.bump_pruned(slot.node_count());
                let _ = base.remove_child(name);
                false
            }
        });

        if self.purge_unmanaged {
            let managed = &self.children;
            base.retain_children(|name| managed.contains_key(name));
        }

        for slot in self.children.values_mut() {
            slot.clear_visited();
        }
    }

    /// Detach every managed child element; used when the root rebinds.
    pub(crate) fn teardown(mut self) {
        let mut element = self.element.borrow_mut();
        let base = element.base_mut();
        for name in self.children.keys() {
            let _ = base.remove_child(name);
        }
        drop(element);
        self.children.clear();
    }

    pub(crate) fn counters(&self) -> &PassCounters {
        &self.counters
    }

    /// Render the managed subtree as an indented outline, one node per line.
    #[must_use]
    pub fn hierarchy(&self) -> String {
        let mut out = String::new();
        self.write_outline(0, &mut out);
        out
    }
}

/// Type-erased view of a binder, enough for registry bookkeeping.
pub(crate) trait AnyBinder: Any {
    fn path(&self) -> &str;
    fn is_visited(&self) -> bool;
    fn clear_visited(&mut self);
    fn node_count(&self) -> usize;
    fn write_outline(&self, depth: usize, out: &mut String);
}

impl<H: Host, C: 'static, E: Element> AnyBinder for Binder<H, C, E> {
    fn path(&self) -> &str {
        &self.path
    }

    fn is_visited(&self) -> bool {
        self.visited
    }

    fn clear_visited(&mut self) {
        self.visited = false;
    }

    fn node_count(&self) -> usize {
        1 + self
            .children
            .values()
            .map(|child| child.node_count())
            .sum::<usize>()
    }

    fn write_outline(&self, depth: usize, out: &mut String) {
        let classes = self.element.borrow().base().classes().to_string();
        let _ = write!(out, "{:indent$}{}", "", self.name, indent = depth * 2);
        if classes.is_empty() {
            let _ = writeln!(out);
        } else {
            let _ = writeln!(out, " [{classes}]");
        }

        let mut names: Vec<&String> = self.children.keys().collect();
        names.sort();
        for name in names {
            self.children[name].write_outline(depth + 1, out);
        }
    }
}
