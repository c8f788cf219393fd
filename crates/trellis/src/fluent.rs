//! Fluent wrappers: containers and field binders.
//!
//! Every method here is sugar over [`Binder::node`]. The field binders share
//! one shape: static configuration (label, bounds, choices) is applied once
//! on the create path, a [`ValueBinding`] is installed once with its push
//! side wired to the element's change hook, and from then on each pass just
//! pulls. Editable fields derive their lock from the element's focus state
//! (plus the open state for choice widgets) so refreshes never fight the
//! user's in-progress edit.
//!
//! Methods return `Result<&mut Self>` so sibling declarations chain with `?`:
//!
//! ```ignore
//! ui.label("title", "heading", |c: &App| c.title.clone())?
//!   .toggle("mute", "Mute", "row", |c: &App| c.mute, |c, v| c.mute = v)?;
//! ```
//!
//! Each editable wrapper has a `*_lens` twin taking a [`Lens`] instead of
//! explicit getter/setter closures. Full control over create/update hooks
//! stays available on [`Binder::node`] itself.

use std::rc::Rc;

use trellis_core::element::{
    ChangeNotify, ClickNotify, Element, Expandable, Focusable, HasChoices, HasText, HasValue,
    Labeled, Ranged,
};
use trellis_core::{Ctx, Host, Result};
use trellis_reactive::{Lens, ValueBinding};

use crate::binder::Binder;

impl<H: Host, C: 'static, E: Element> Binder<H, C, E> {
    /// Plain container sharing this node's context.
    pub fn pane<FB>(&mut self, name: &str, classes: &str, build: FB) -> Result<&mut Self>
    where
        FB: FnOnce(&mut Binder<H, C, H::Pane>) -> Result<()>,
    {
        self.node::<C, H::Pane, _, _, _, _>(
            name,
            classes,
            Ctx::clone,
            |_| Ok(()),
            |_| Ok(()),
            build,
        )?;
        Ok(self)
    }

    /// Scrollable container sharing this node's context.
    pub fn scroll<FB>(&mut self, name: &str, classes: &str, build: FB) -> Result<&mut Self>
    where
        FB: FnOnce(&mut Binder<H, C, H::Scroll>) -> Result<()>,
    {
        self.node::<C, H::Scroll, _, _, _, _>(
            name,
            classes,
            Ctx::clone,
            |_| Ok(()),
            |_| Ok(()),
            build,
        )?;
        Ok(self)
    }

    /// Container whose subtree projects a different context, derived once at
    /// creation by `map`.
    pub fn group<D, M, FB>(
        &mut self,
        name: &str,
        classes: &str,
        map: M,
        build: FB,
    ) -> Result<&mut Self>
    where
        D: 'static,
        M: FnOnce(&Ctx<C>) -> Ctx<D>,
        FB: FnOnce(&mut Binder<H, D, H::Pane>) -> Result<()>,
    {
        self.node::<D, H::Pane, _, _, _, _>(name, classes, map, |_| Ok(()), |_| Ok(()), build)?;
        Ok(self)
    }

    /// Text computed from the context on every pass.
    pub fn label<F>(&mut self, name: &str, classes: &str, text: F) -> Result<&mut Self>
    where
        F: Fn(&C) -> String + 'static,
    {
        self.node::<C, H::Label, _, _, _, _>(
            name,
            classes,
            Ctx::clone,
            |_| Ok(()),
            move |label: &mut Binder<H, C, H::Label>| {
                let current = label.ctx().with(|c| text(c));
                if label.element().borrow().text() != current {
                    label.element().borrow_mut().set_text(current);
                }
                Ok(())
            },
            |_| Ok(()),
        )?;
        Ok(self)
    }

    /// Clickable button.
    ///
    /// Text and click handler are fixed when the node is first created and
    /// are not refreshed on later passes — a deliberate asymmetry with the
    /// editable field binders. For dynamic button text, place a [`label`]
    /// next to it or drive the node through [`Binder::node`].
    ///
    /// [`label`]: Binder::label
    pub fn button<F>(
        &mut self,
        name: &str,
        text: &str,
        classes: &str,
        on_click: F,
    ) -> Result<&mut Self>
    where
        F: Fn(&Ctx<C>) + 'static,
    {
        self.node::<C, H::Button, _, _, _, _>(
            name,
            classes,
            Ctx::clone,
            |button: &mut Binder<H, C, H::Button>| {
                button.element().borrow_mut().set_text(text.to_string());
                let ctx = button.ctx().clone();
                let hook: Rc<dyn Fn()> = Rc::new(move || on_click(&ctx));
                button.element().borrow_mut().set_click_hook(hook);
                Ok(())
            },
            |_| Ok(()),
            |_| Ok(()),
        )?;
        Ok(self)
    }

    /// Bounded numeric slider bound to an `f64`.
    pub fn slider<G, S>(
        &mut self,
        name: &str,
        label: &str,
        classes: &str,
        low: f64,
        high: f64,
        get: G,
        set: S,
    ) -> Result<&mut Self>
    where
        G: Fn(&C) -> f64 + 'static,
        S: Fn(&mut C, f64) + 'static,
    {
        self.node::<C, H::Slider, _, _, _, _>(
            name,
            classes,
            Ctx::clone,
            |slider: &mut Binder<H, C, H::Slider>| {
                let element = Rc::clone(slider.element());
                let ctx = slider.ctx().clone();
                {
                    let mut el = element.borrow_mut();
                    el.set_label(label.to_string());
                    el.set_range(low, high);
                    el.set_value(ctx.with(|c| get(c)));
                }
                let binding = ValueBinding::new(
                    {
                        let ctx = ctx.clone();
                        move || ctx.with(|c| get(c))
                    },
                    move |v| ctx.with_mut(|c| set(c, v)),
                    {
                        let element = Rc::clone(&element);
                        move || element.borrow().value()
                    },
                    {
                        let element = Rc::clone(&element);
                        move |v| element.borrow_mut().set_value(v)
                    },
                );
                element.borrow_mut().set_change_hook(binding.pusher());
                slider.install_binding(binding);
                slider.keep_unmanaged_children();
                Ok(())
            },
            |_| Ok(()),
            |_| Ok(()),
        )?;
        Ok(self)
    }

    /// [`Binder::slider`] with the accessors taken from a lens.
    pub fn slider_lens(
        &mut self,
        name: &str,
        label: &str,
        classes: &str,
        low: f64,
        high: f64,
        lens: Lens<C, f64>,
    ) -> Result<&mut Self> {
        let read = {
            let lens = lens.clone();
            move |c: &C| lens.get(c)
        };
        let write = move |c: &mut C, v| lens.set(c, v);
        self.slider(name, label, classes, low, high, read, write)
    }

    /// Boolean toggle.
    pub fn toggle<G, S>(
        &mut self,
        name: &str,
        label: &str,
        classes: &str,
        get: G,
        set: S,
    ) -> Result<&mut Self>
    where
        G: Fn(&C) -> bool + 'static,
        S: Fn(&mut C, bool) + 'static,
    {
        self.node::<C, H::Toggle, _, _, _, _>(
            name,
            classes,
            Ctx::clone,
            |toggle: &mut Binder<H, C, H::Toggle>| {
                let element = Rc::clone(toggle.element());
                let ctx = toggle.ctx().clone();
                {
                    let mut el = element.borrow_mut();
                    el.set_label(label.to_string());
                    el.set_value(ctx.with(|c| get(c)));
                }
                let binding = ValueBinding::new(
                    {
                        let ctx = ctx.clone();
                        move || ctx.with(|c| get(c))
                    },
                    move |v| ctx.with_mut(|c| set(c, v)),
                    {
                        let element = Rc::clone(&element);
                        move || element.borrow().value()
                    },
                    {
                        let element = Rc::clone(&element);
                        move |v| element.borrow_mut().set_value(v)
                    },
                );
                element.borrow_mut().set_change_hook(binding.pusher());
                toggle.install_binding(binding);
                toggle.keep_unmanaged_children();
                Ok(())
            },
            |_| Ok(()),
            |_| Ok(()),
        )?;
        Ok(self)
    }

    /// [`Binder::toggle`] with the accessors taken from a lens.
    pub fn toggle_lens(
        &mut self,
        name: &str,
        label: &str,
        classes: &str,
        lens: Lens<C, bool>,
    ) -> Result<&mut Self> {
        let read = {
            let lens = lens.clone();
            move |c: &C| lens.get(c)
        };
        let write = move |c: &mut C, v| lens.set(c, v);
        self.toggle(name, label, classes, read, write)
    }

    /// Choice list bound to the selected index. Locked while the element is
    /// focused or its popup is open.
    pub fn dropdown<G, S>(
        &mut self,
        name: &str,
        label: &str,
        classes: &str,
        choices: Vec<String>,
        get: G,
        set: S,
    ) -> Result<&mut Self>
    where
        G: Fn(&C) -> usize + 'static,
        S: Fn(&mut C, usize) + 'static,
    {
        self.node::<C, H::Dropdown, _, _, _, _>(
            name,
            classes,
            Ctx::clone,
            |dropdown: &mut Binder<H, C, H::Dropdown>| {
                let element = Rc::clone(dropdown.element());
                let ctx = dropdown.ctx().clone();
                {
                    let mut el = element.borrow_mut();
                    el.set_label(label.to_string());
                    el.set_choices(choices);
                    el.set_focusable(true);
                    el.set_value(ctx.with(|c| get(c)));
                }
                let binding = ValueBinding::new(
                    {
                        let ctx = ctx.clone();
                        move || ctx.with(|c| get(c))
                    },
                    move |v| ctx.with_mut(|c| set(c, v)),
                    {
                        let element = Rc::clone(&element);
                        move || element.borrow().value()
                    },
                    {
                        let element = Rc::clone(&element);
                        move |v| element.borrow_mut().set_value(v)
                    },
                )
                .locked_when({
                    let element = Rc::clone(&element);
                    move || {
                        let el = element.borrow();
                        el.has_focus() || el.is_open()
                    }
                });
                element.borrow_mut().set_change_hook(binding.pusher());
                dropdown.install_binding(binding);
                dropdown.keep_unmanaged_children();
                Ok(())
            },
            |_| Ok(()),
            |_| Ok(()),
        )?;
        Ok(self)
    }

    /// [`Binder::dropdown`] with the accessors taken from a lens.
    pub fn dropdown_lens(
        &mut self,
        name: &str,
        label: &str,
        classes: &str,
        choices: Vec<String>,
        lens: Lens<C, usize>,
    ) -> Result<&mut Self> {
        let read = {
            let lens = lens.clone();
            move |c: &C| lens.get(c)
        };
        let write = move |c: &mut C, v| lens.set(c, v);
        self.dropdown(name, label, classes, choices, read, write)
    }

    /// Enum selector realized over the host's dropdown element: the choices
    /// are the variant tags, the bound value maps through the variant index.
    /// Locked while focused or open, like [`Binder::dropdown`].
    pub fn enum_field<T, G, S>(
        &mut self,
        name: &str,
        label: &str,
        classes: &str,
        get: G,
        set: S,
    ) -> Result<&mut Self>
    where
        T: trellis_core::EnumValue,
        G: Fn(&C) -> T + 'static,
        S: Fn(&mut C, T) + 'static,
    {
        use trellis_core::EnumValue as _;

        self.node::<C, H::Dropdown, _, _, _, _>(
            name,
            classes,
            Ctx::clone,
            |field: &mut Binder<H, C, H::Dropdown>| {
                let element = Rc::clone(field.element());
                let ctx = field.ctx().clone();
                {
                    let mut el = element.borrow_mut();
                    el.set_label(label.to_string());
                    el.set_choices(T::all().iter().map(|v| v.tag().to_string()).collect());
                    el.set_focusable(true);
                    el.set_value(ctx.with(|c| get(c)).index());
                }
                let binding = ValueBinding::new(
                    {
                        let ctx = ctx.clone();
                        move || ctx.with(|c| get(c))
                    },
                    move |v| ctx.with_mut(|c| set(c, v)),
                    {
                        let element = Rc::clone(&element);
                        move || T::from_index(element.borrow().value())
                    },
                    {
                        let element = Rc::clone(&element);
                        move |v: T| element.borrow_mut().set_value(v.index())
                    },
                )
                .locked_when({
                    let element = Rc::clone(&element);
                    move || {
                        let el = element.borrow();
                        el.has_focus() || el.is_open()
                    }
                });
                let push = binding.pusher();
                let hook: Rc<dyn Fn(usize)> = Rc::new(move |index| push(T::from_index(index)));
                element.borrow_mut().set_change_hook(hook);
                field.install_binding(binding);
                field.keep_unmanaged_children();
                Ok(())
            },
            |_| Ok(()),
            |_| Ok(()),
        )?;
        Ok(self)
    }

    /// [`Binder::enum_field`] with the accessors taken from a lens.
    pub fn enum_field_lens<T>(
        &mut self,
        name: &str,
        label: &str,
        classes: &str,
        lens: Lens<C, T>,
    ) -> Result<&mut Self>
    where
        T: trellis_core::EnumValue,
    {
        let read = {
            let lens = lens.clone();
            move |c: &C| lens.get(c)
        };
        let write = move |c: &mut C, v| lens.set(c, v);
        self.enum_field(name, label, classes, read, write)
    }

    /// Free-form text input. Locked while focused.
    pub fn text_field<G, S>(
        &mut self,
        name: &str,
        label: &str,
        classes: &str,
        get: G,
        set: S,
    ) -> Result<&mut Self>
    where
        G: Fn(&C) -> String + 'static,
        S: Fn(&mut C, String) + 'static,
    {
        self.node::<C, H::TextField, _, _, _, _>(
            name,
            classes,
            Ctx::clone,
            |field: &mut Binder<H, C, H::TextField>| {
                let element = Rc::clone(field.element());
                let ctx = field.ctx().clone();
                {
                    let mut el = element.borrow_mut();
                    el.set_label(label.to_string());
                    el.set_focusable(true);
                    el.set_value(ctx.with(|c| get(c)));
                }
                let binding = ValueBinding::new(
                    {
                        let ctx = ctx.clone();
                        move || ctx.with(|c| get(c))
                    },
                    move |v| ctx.with_mut(|c| set(c, v)),
                    {
                        let element = Rc::clone(&element);
                        move || element.borrow().value()
                    },
                    {
                        let element = Rc::clone(&element);
                        move |v| element.borrow_mut().set_value(v)
                    },
                )
                .locked_when({
                    let element = Rc::clone(&element);
                    move || element.borrow().has_focus()
                });
                element.borrow_mut().set_change_hook(binding.pusher());
                field.install_binding(binding);
                field.keep_unmanaged_children();
                Ok(())
            },
            |_| Ok(()),
            |_| Ok(()),
        )?;
        Ok(self)
    }

    /// [`Binder::text_field`] with the accessors taken from a lens.
    pub fn text_field_lens(
        &mut self,
        name: &str,
        label: &str,
        classes: &str,
        lens: Lens<C, String>,
    ) -> Result<&mut Self> {
        let read = {
            let lens = lens.clone();
            move |c: &C| lens.get(c)
        };
        let write = move |c: &mut C, v| lens.set(c, v);
        self.text_field(name, label, classes, read, write)
    }

    /// Integer input bound to an `i64`. Locked while focused.
    pub fn int_field<G, S>(
        &mut self,
        name: &str,
        label: &str,
        classes: &str,
        get: G,
        set: S,
    ) -> Result<&mut Self>
    where
        G: Fn(&C) -> i64 + 'static,
        S: Fn(&mut C, i64) + 'static,
    {
        self.node::<C, H::IntField, _, _, _, _>(
            name,
            classes,
            Ctx::clone,
            |field: &mut Binder<H, C, H::IntField>| {
                let element = Rc::clone(field.element());
                let ctx = field.ctx().clone();
                {
                    let mut el = element.borrow_mut();
                    el.set_label(label.to_string());
                    el.set_focusable(true);
                    el.set_value(ctx.with(|c| get(c)));
                }
                let binding = ValueBinding::new(
                    {
                        let ctx = ctx.clone();
                        move || ctx.with(|c| get(c))
                    },
                    move |v| ctx.with_mut(|c| set(c, v)),
                    {
                        let element = Rc::clone(&element);
                        move || element.borrow().value()
                    },
                    {
                        let element = Rc::clone(&element);
                        move |v| element.borrow_mut().set_value(v)
                    },
                )
                .locked_when({
                    let element = Rc::clone(&element);
                    move || element.borrow().has_focus()
                });
                element.borrow_mut().set_change_hook(binding.pusher());
                field.install_binding(binding);
                field.keep_unmanaged_children();
                Ok(())
            },
            |_| Ok(()),
            |_| Ok(()),
        )?;
        Ok(self)
    }

    /// [`Binder::int_field`] with the accessors taken from a lens.
    pub fn int_field_lens(
        &mut self,
        name: &str,
        label: &str,
        classes: &str,
        lens: Lens<C, i64>,
    ) -> Result<&mut Self> {
        let read = {
            let lens = lens.clone();
            move |c: &C| lens.get(c)
        };
        let write = move |c: &mut C, v| lens.set(c, v);
        self.int_field(name, label, classes, read, write)
    }

    /// Floating-point input bound to an `f64`. Locked while focused.
    pub fn float_field<G, S>(
        &mut self,
        name: &str,
        label: &str,
        classes: &str,
        get: G,
        set: S,
    ) -> Result<&mut Self>
    where
        G: Fn(&C) -> f64 + 'static,
        S: Fn(&mut C, f64) + 'static,
    {
        self.node::<C, H::FloatField, _, _, _, _>(
            name,
            classes,
            Ctx::clone,
            |field: &mut Binder<H, C, H::FloatField>| {
                let element = Rc::clone(field.element());
                let ctx = field.ctx().clone();
                {
                    let mut el = element.borrow_mut();
                    el.set_label(label.to_string());
                    el.set_focusable(true);
                    el.set_value(ctx.with(|c| get(c)));
                }
                let binding = ValueBinding::new(
                    {
                        let ctx = ctx.clone();
                        move || ctx.with(|c| get(c))
                    },
                    move |v| ctx.with_mut(|c| set(c, v)),
                    {
                        let element = Rc::clone(&element);
                        move || element.borrow().value()
                    },
                    {
                        let element = Rc::clone(&element);
                        move |v| element.borrow_mut().set_value(v)
                    },
                )
                .locked_when({
                    let element = Rc::clone(&element);
                    move || element.borrow().has_focus()
                });
                element.borrow_mut().set_change_hook(binding.pusher());
                field.install_binding(binding);
                field.keep_unmanaged_children();
                Ok(())
            },
            |_| Ok(()),
            |_| Ok(()),
        )?;
        Ok(self)
    }

    /// [`Binder::float_field`] with the accessors taken from a lens.
    pub fn float_field_lens(
        &mut self,
        name: &str,
        label: &str,
        classes: &str,
        lens: Lens<C, f64>,
    ) -> Result<&mut Self> {
        let read = {
            let lens = lens.clone();
            move |c: &C| lens.get(c)
        };
        let write = move |c: &mut C, v| lens.set(c, v);
        self.float_field(name, label, classes, read, write)
    }
}
