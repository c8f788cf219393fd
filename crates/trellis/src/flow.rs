#![forbid(unsafe_code)]

//! Structural control flow: conditional branches, enum-driven switches, enum
//! button groups, and keyed collections.
//!
//! None of these helpers carries its own lifecycle machinery. They only
//! decide *which* children get declared on a pass; everything else —
//! identity, creation, pruning of whatever stops being declared — falls out
//! of the reconciler. A [`Binder::optional`] branch whose predicate turns
//! false simply declares nothing, and the standard end-of-pass sweep collects
//! the subtree.

use std::rc::Rc;

use trellis_core::element::{ClickNotify, HasText};
use trellis_core::{Ctx, Element, EnumValue, Error, Host, Result};
use trellis_reactive::Lens;

use crate::binder::Binder;

/// One declared button in an [`Binder::enum_buttons`] group: value, label,
/// classes. Immutable once built.
#[derive(Clone, Debug)]
pub struct EnumButton<T> {
    value: T,
    label: String,
    classes: String,
}

impl<T: EnumValue> EnumButton<T> {
    /// The enum value this button selects.
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }

    /// The button's display text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The button's class spec.
    #[must_use]
    pub fn classes(&self) -> &str {
        &self.classes
    }
}

/// Ordered set of buttons declared for one [`Binder::enum_buttons`] group.
#[derive(Debug)]
pub struct EnumButtonGroup<T> {
    buttons: Vec<EnumButton<T>>,
}

impl<T: EnumValue> EnumButtonGroup<T> {
    pub(crate) fn new() -> Self {
        Self {
            buttons: Vec::new(),
        }
    }

    /// Declare a button selecting `value`.
    pub fn button(&mut self, value: T, label: &str, classes: &str) -> &mut Self {
        self.buttons.push(EnumButton {
            value,
            label: label.to_string(),
            classes: classes.to_string(),
        });
        self
    }

    /// The declared buttons, in declaration order.
    #[must_use]
    pub fn buttons(&self) -> &[EnumButton<T>] {
        &self.buttons
    }
}

/// Transient case dispatcher handed to an [`Binder::enum_switch`] body.
/// Scoped to one switch node and one pass.
pub struct Switcher<'a, H: Host, C, T> {
    binder: &'a mut Binder<H, C, H::Pane>,
    current: T,
    declared: Vec<&'static str>,
}

impl<'a, H: Host, C: 'static, T: EnumValue> Switcher<'a, H, C, T> {
    /// The enum value captured when the enclosing switch node updated.
    #[must_use]
    pub fn current(&self) -> T {
        self.current
    }

    /// Declare the subtree for `value`, keyed by the value's tag.
    ///
    /// The subtree is only built when `value` equals the captured current
    /// value; all other cases stay undeclared this pass and get pruned by the
    /// standard sweep if they existed before.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateCase`] when `value` was already declared on this
    /// switcher — two cases for one value is a description bug, not a way to
    /// build two subtrees.
    pub fn case<D, M, FB>(
        &mut self,
        value: T,
        classes: &str,
        map: M,
        build: FB,
    ) -> Result<&mut Self>
    where
        D: 'static,
        M: FnOnce(&Ctx<C>) -> Ctx<D>,
        FB: FnOnce(&mut Binder<H, D, H::Pane>) -> Result<()>,
    {
        let tag = value.tag();
        if self.declared.contains(&tag) {
            return Err(Error::DuplicateCase {
                switch: self.binder.path().to_string(),
                tag: tag.to_string(),
            });
        }
        self.declared.push(tag);

        if value == self.current {
            self.binder
                .node::<D, H::Pane, _, _, _, _>(tag, classes, map, |_| Ok(()), |_| Ok(()), build)?;
        }
        Ok(self)
    }
}

impl<H: Host, C: 'static, E: Element> Binder<H, C, E> {
    /// Build `build` against this node only when `predicate` holds for the
    /// current context. A branch that stays dark declares nothing, so its
    /// previously materialized descendants are pruned by the end-of-pass
    /// sweep.
    pub fn optional<P, FB>(&mut self, predicate: P, build: FB) -> Result<&mut Self>
    where
        P: FnOnce(&C) -> bool,
        FB: FnOnce(&mut Self) -> Result<()>,
    {
        let wanted = self.ctx().with(|c| predicate(c));
        if wanted {
            build(self)?;
        }
        Ok(self)
    }

    /// Container that materializes exactly one of several enum-keyed
    /// subtrees.
    ///
    /// Each pass, `read` is evaluated once against the context and the
    /// resulting value is captured in a [`Switcher`]; `cases` then declares
    /// the per-value subtrees. Mutual exclusivity holds as long as case
    /// values are pairwise distinct, which the switcher enforces.
    pub fn enum_switch<T, R, FS>(
        &mut self,
        name: &str,
        classes: &str,
        read: R,
        cases: FS,
    ) -> Result<&mut Self>
    where
        T: EnumValue,
        R: Fn(&C) -> T + 'static,
        FS: Fn(&mut Switcher<'_, H, C, T>) -> Result<()> + 'static,
    {
        self.node::<C, H::Pane, _, _, _, _>(
            name,
            classes,
            Ctx::clone,
            |_| Ok(()),
            move |container: &mut Binder<H, C, H::Pane>| {
                let current = container.ctx().with(|c| read(c));
                let mut switcher = Switcher {
                    binder: container,
                    current,
                    declared: Vec::new(),
                };
                cases(&mut switcher)
            },
            |_| Ok(()),
        )?;
        Ok(self)
    }

    /// A group of buttons over an enum-valued member: clicking a button
    /// writes its value through the lens, and the button whose value matches
    /// the member carries `active_class`, re-derived every pass.
    ///
    /// Buttons are keyed by their value's tag, so reordering declarations
    /// across passes reuses the same nodes.
    pub fn enum_buttons<T, FD>(
        &mut self,
        name: &str,
        classes: &str,
        lens: Lens<C, T>,
        declare: FD,
        active_class: &str,
    ) -> Result<&mut Self>
    where
        T: EnumValue,
        FD: FnOnce(&mut EnumButtonGroup<T>),
    {
        let mut group = EnumButtonGroup::new();
        declare(&mut group);
        let buttons = group.buttons;
        let active = active_class;

        self.node::<C, H::Pane, _, _, _, _>(
            name,
            classes,
            Ctx::clone,
            |_| Ok(()),
            |_| Ok(()),
            |container: &mut Binder<H, C, H::Pane>| {
                for spec in &buttons {
                    let value = spec.value;
                    let setter = lens.clone();
                    container.node::<C, H::Button, _, _, _, _>(
                        spec.value.tag(),
                        &spec.classes,
                        Ctx::clone,
                        |button: &mut Binder<H, C, H::Button>| {
                            button.element().borrow_mut().set_text(spec.label.clone());
                            let ctx = button.ctx().clone();
                            let hook: Rc<dyn Fn()> =
                                Rc::new(move || ctx.with_mut(|c| setter.set(c, value)));
                            button.element().borrow_mut().set_click_hook(hook);
                            Ok(())
                        },
                        |_| Ok(()),
                        |button: &mut Binder<H, C, H::Button>| {
                            let on = button.ctx().with(|c| lens.get(c)) == value;
                            button
                                .element()
                                .borrow_mut()
                                .base_mut()
                                .classes_mut()
                                .toggle(active, on);
                            Ok(())
                        },
                    )?;
                }
                Ok(())
            },
        )?;
        Ok(self)
    }

    /// One keyed child per item of a context collection.
    ///
    /// Each pass, `items` projects the context into row handles and `key`
    /// names each row; rows keep their node (and element) identity as long as
    /// their key stays in the collection, and rows whose key disappears are
    /// pruned by the standard sweep. Row templating is the host's business —
    /// rows here are plain panes.
    ///
    /// # Errors
    ///
    /// Two items mapping to one key surface as
    /// [`DuplicateVisit`](trellis_core::Error::DuplicateVisit).
    pub fn for_each<D, I, K, FB>(
        &mut self,
        name: &str,
        classes: &str,
        items: I,
        key: K,
        row_classes: &str,
        build_row: FB,
    ) -> Result<&mut Self>
    where
        D: 'static,
        I: FnOnce(&C) -> Vec<Ctx<D>>,
        K: Fn(&D) -> String,
        FB: Fn(&mut Binder<H, D, H::Pane>) -> Result<()>,
    {
        let row_classes = row_classes.to_string();
        self.node::<C, H::Pane, _, _, _, _>(
            name,
            classes,
            Ctx::clone,
            |_| Ok(()),
            |_| Ok(()),
            |container: &mut Binder<H, C, H::Pane>| {
                let rows = container.ctx().with(|c| items(c));
                for row in rows {
                    let row_key = row.with(|r| key(r));
                    container.node::<D, H::Pane, _, _, _, _>(
                        &row_key,
                        &row_classes,
                        |_| row.clone(),
                        |_| Ok(()),
                        |_| Ok(()),
                        |node| build_row(node),
                    )?;
                }
                Ok(())
            },
        )?;
        Ok(self)
    }
}
