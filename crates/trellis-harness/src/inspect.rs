//! Element-tree lookup and outline rendering.

use std::any::Any;
use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use trellis_core::element::{Element, ElementCell};

/// Resolve a slash path (`"settings/volume"`) below `root`.
///
/// # Panics
///
/// Panics with the available child names when a segment does not resolve.
#[must_use]
pub fn find(root: &ElementCell, path: &str) -> ElementCell {
    let mut cell = Rc::clone(root);
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        let next = cell.borrow().base().find_child(segment);
        cell = match next {
            Some(child) => child,
            None => panic!(
                "no element \"{segment}\" under \"{}\" (children: {:?})",
                cell.borrow().base().name(),
                cell.borrow().base().child_names()
            ),
        };
    }
    cell
}

/// Borrow the element at `path` as concrete type `E` and run `f` on it.
///
/// # Panics
///
/// Panics when the path does not resolve or the element is a different type.
pub fn with_element<E: Element, R>(root: &ElementCell, path: &str, f: impl FnOnce(&E) -> R) -> R {
    let cell = find(root, path);
    let guard = cell.borrow();
    let any: &dyn Any = &*guard;
    let typed = any.downcast_ref::<E>().unwrap_or_else(|| {
        panic!(
            "element \"{path}\" is not a {}",
            std::any::type_name::<E>()
        )
    });
    f(typed)
}

/// Like [`with_element`], with a mutable borrow — the way tests simulate
/// user interaction (`drag`, `edit`, focus changes).
pub fn with_element_mut<E: Element, R>(
    root: &ElementCell,
    path: &str,
    f: impl FnOnce(&mut E) -> R,
) -> R {
    let cell = find(root, path);
    let mut guard = cell.borrow_mut();
    let any: &mut dyn Any = &mut *guard;
    let typed = any.downcast_mut::<E>().unwrap_or_else(|| {
        panic!(
            "element \"{path}\" is not a {}",
            std::any::type_name::<E>()
        )
    });
    f(typed)
}

/// Convert a typed root cell into an [`ElementCell`].
#[must_use]
pub fn as_cell<E: Element>(root: &Rc<RefCell<E>>) -> ElementCell {
    Rc::clone(root) as ElementCell
}

/// Render the element tree as an indented outline, one `name [classes]` line
/// per element, children in display order.
#[must_use]
pub fn outline(root: &ElementCell) -> String {
    let mut out = String::new();
    write_outline(root, 0, &mut out);
    out
}

fn write_outline(cell: &ElementCell, depth: usize, out: &mut String) {
    let guard = cell.borrow();
    let base = guard.base();
    let classes = base.classes().to_string();
    let _ = write!(out, "{:indent$}{}", "", base.name(), indent = depth * 2);
    if classes.is_empty() {
        let _ = writeln!(out);
    } else {
        let _ = writeln!(out, " [{classes}]");
    }
    for child in base.children() {
        write_outline(child, depth + 1, out);
    }
}
