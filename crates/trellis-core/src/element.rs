#![forbid(unsafe_code)]

//! The opaque host-element boundary.
//!
//! The engine never draws anything. It manipulates host-provided widgets
//! through the minimal capability set below: every element has a stable name,
//! a mutable style-class list, and an ordered list of parented child cells
//! ([`ElementBase`]); widget-specific properties (text, current value, label,
//! numeric bounds, choice list, focus/open state, change and click hooks) are
//! expressed as narrow capability traits a host implements per widget kind.
//!
//! Elements are shared as [`ElementCell`]s (`Rc<RefCell<dyn Element>>`):
//! the binder node that created an element is its owner of record, while the
//! parent element holds a cell for display order. Single-threaded by design.
//!
//! # Invariants
//!
//! 1. An element's name is fixed at construction ([`Create::create`]) and
//!    never changes.
//! 2. Child names are unique within one parent element; lookups by name are
//!    unambiguous.
//! 3. Detaching a child cell does not destroy it — whoever still holds the
//!    `Rc` keeps it alive.
//!
//! # Failure Modes
//!
//! - Borrowing an element cell while a hook installed on that same element is
//!   running panics (`RefCell` re-entrancy). Hooks must only touch context
//!   state, never the element tree.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::classes::ClassSet;

/// Shared handle to a type-erased element.
pub type ElementCell = Rc<RefCell<dyn Element>>;

/// Common state every element carries: name, class list, children.
#[derive(Default)]
pub struct ElementBase {
    name: String,
    classes: ClassSet,
    children: Vec<ElementCell>,
}

impl ElementBase {
    /// Create a base for an element with the given stable name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            classes: ClassSet::default(),
            children: Vec::new(),
        }
    }

    /// The element's stable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element's current class list.
    #[must_use]
    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }

    /// Mutable access to the class list.
    pub fn classes_mut(&mut self) -> &mut ClassSet {
        &mut self.classes
    }

    /// Append a child cell, preserving display order.
    pub fn push_child(&mut self, child: ElementCell) {
        self.children.push(child);
    }

    /// Detach the child with the given name, returning its cell.
    pub fn remove_child(&mut self, name: &str) -> Option<ElementCell> {
        let index = self
            .children
            .iter()
            .position(|c| c.borrow().base().name() == name)?;
        Some(self.children.remove(index))
    }

    /// Keep only the children whose names satisfy `keep`.
    pub fn retain_children(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.children.retain(|c| keep(c.borrow().base().name()));
    }

    /// Find a child cell by name.
    #[must_use]
    pub fn find_child(&self, name: &str) -> Option<ElementCell> {
        self.children
            .iter()
            .find(|c| c.borrow().base().name() == name)
            .map(Rc::clone)
    }

    /// All child cells in display order.
    #[must_use]
    pub fn children(&self) -> &[ElementCell] {
        &self.children
    }

    /// Child names in display order.
    #[must_use]
    pub fn child_names(&self) -> Vec<String> {
        self.children
            .iter()
            .map(|c| c.borrow().base().name().to_string())
            .collect()
    }
}

impl std::fmt::Debug for ElementBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementBase")
            .field("name", &self.name)
            .field("classes", &self.classes)
            .field("children", &self.children.len())
            .finish()
    }
}

/// An opaque host widget.
///
/// Only the common capability set lives here; everything widget-specific is a
/// separate trait so hosts opt in per element kind.
pub trait Element: Any {
    /// The element's common state.
    fn base(&self) -> &ElementBase;

    /// Mutable access to the element's common state.
    fn base_mut(&mut self) -> &mut ElementBase;
}

/// Instantiation with a stable name.
///
/// Split from [`Element`] so the latter stays object-safe.
pub trait Create: Element + Sized {
    /// Build a fresh element carrying `name`.
    fn create(name: &str) -> Self;
}

/// Elements with free-standing display text (labels, buttons).
pub trait HasText: Element {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: String);
}

/// Elements with a caption rendered next to their editable part.
pub trait Labeled: Element {
    fn label(&self) -> &str;
    fn set_label(&mut self, label: String);
}

/// Elements holding an editable current value.
pub trait HasValue<T>: Element {
    fn value(&self) -> T;
    fn set_value(&mut self, value: T);
}

/// Elements constrained to a numeric range.
pub trait Ranged: Element {
    fn range(&self) -> (f64, f64);
    fn set_range(&mut self, low: f64, high: f64);
}

/// Elements presenting a fixed list of choices.
pub trait HasChoices: Element {
    fn choices(&self) -> &[String];
    fn set_choices(&mut self, choices: Vec<String>);
}

/// Elements that can hold input focus.
pub trait Focusable: Element {
    fn has_focus(&self) -> bool;
    fn set_focusable(&mut self, focusable: bool);
}

/// Elements with a transient expanded state (open dropdown popups).
pub trait Expandable: Element {
    fn is_open(&self) -> bool;
}

/// Elements with a click-notification hook.
///
/// The host invokes the hook synchronously when the user activates the
/// element. Installed once; installing again replaces the previous hook.
pub trait ClickNotify: Element {
    fn set_click_hook(&mut self, hook: Rc<dyn Fn()>);
}

/// Elements with a change-notification hook carrying the new value.
///
/// The host invokes the hook synchronously when the *user* edits the value;
/// programmatic [`HasValue::set_value`] calls must not fire it.
pub trait ChangeNotify<T>: Element {
    fn set_change_hook(&mut self, hook: Rc<dyn Fn(T)>);
}
