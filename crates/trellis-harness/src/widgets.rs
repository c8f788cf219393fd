//! In-memory widget implementations of the host contract.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use trellis_core::element::{
    ChangeNotify, ClickNotify, Create, Element, ElementBase, Expandable, Focusable, HasChoices,
    HasText, HasValue, Labeled, Ranged,
};
use trellis_core::{ElementCell, Host};

/// The in-memory host family.
pub struct TestHost;

impl Host for TestHost {
    type Pane = Pane;
    type Scroll = ScrollPane;
    type Label = Label;
    type Button = Button;
    type Slider = Slider;
    type Toggle = Toggle;
    type Dropdown = Dropdown;
    type TextField = TextInput;
    type IntField = IntInput;
    type FloatField = FloatInput;
}

/// Build a detached [`Pane`] cell, the usual root for tests.
#[must_use]
pub fn pane(name: &str) -> Rc<RefCell<Pane>> {
    Rc::new(RefCell::new(Pane::create(name)))
}

macro_rules! impl_element {
    ($($ty:ty),+ $(,)?) => {$(
        impl Element for $ty {
            fn base(&self) -> &ElementBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut ElementBase {
                &mut self.base
            }
        }
    )+};
}

impl_element!(
    Pane, ScrollPane, Label, Button, Slider, Toggle, Dropdown, TextInput, IntInput, FloatInput,
);

/// Plain container.
pub struct Pane {
    base: ElementBase,
}

impl Create for Pane {
    fn create(name: &str) -> Self {
        Self {
            base: ElementBase::new(name),
        }
    }
}

impl Pane {
    /// This pane's cell-typed children, for walking from a detached root.
    #[must_use]
    pub fn children(&self) -> Vec<ElementCell> {
        self.base.children().to_vec()
    }
}

/// Scrollable container; records a scroll offset tests may poke.
pub struct ScrollPane {
    base: ElementBase,
    pub offset: Cell<f64>,
}

impl Create for ScrollPane {
    fn create(name: &str) -> Self {
        Self {
            base: ElementBase::new(name),
            offset: Cell::new(0.0),
        }
    }
}

/// Static or computed text.
pub struct Label {
    base: ElementBase,
    text: String,
}

impl Create for Label {
    fn create(name: &str) -> Self {
        Self {
            base: ElementBase::new(name),
            text: String::new(),
        }
    }
}

impl HasText for Label {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

/// Clickable button.
pub struct Button {
    base: ElementBase,
    text: String,
    click: Option<Rc<dyn Fn()>>,
    presses: Cell<u32>,
}

impl Create for Button {
    fn create(name: &str) -> Self {
        Self {
            base: ElementBase::new(name),
            text: String::new(),
            click: None,
            presses: Cell::new(0),
        }
    }
}

impl HasText for Button {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

impl ClickNotify for Button {
    fn set_click_hook(&mut self, hook: Rc<dyn Fn()>) {
        self.click = Some(hook);
    }
}

impl Button {
    /// Simulate a user click: bump the press counter and fire the hook.
    ///
    /// The hook runs while this element is borrowed, so it must only touch
    /// context state — exactly what the engine installs.
    pub fn press(&self) {
        self.presses.set(self.presses.get() + 1);
        if let Some(hook) = self.click.clone() {
            hook();
        }
    }

    /// How often [`Button::press`] ran.
    #[must_use]
    pub fn presses(&self) -> u32 {
        self.presses.get()
    }

    /// Whether a click hook is installed.
    #[must_use]
    pub fn has_click_hook(&self) -> bool {
        self.click.is_some()
    }
}

/// Bounded numeric slider.
pub struct Slider {
    base: ElementBase,
    label: String,
    value: f64,
    low: f64,
    high: f64,
    change: Option<Rc<dyn Fn(f64)>>,
}

impl Create for Slider {
    fn create(name: &str) -> Self {
        Self {
            base: ElementBase::new(name),
            label: String::new(),
            value: 0.0,
            low: 0.0,
            high: 1.0,
            change: None,
        }
    }
}

impl Labeled for Slider {
    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }
}

impl Ranged for Slider {
    fn range(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    fn set_range(&mut self, low: f64, high: f64) {
        self.low = low;
        self.high = high;
    }
}

impl HasValue<f64> for Slider {
    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl ChangeNotify<f64> for Slider {
    fn set_change_hook(&mut self, hook: Rc<dyn Fn(f64)>) {
        self.change = Some(hook);
    }
}

impl Slider {
    /// Simulate the user dragging the knob: clamp to the range, store, fire
    /// the change hook.
    pub fn drag(&mut self, value: f64) {
        self.value = value.clamp(self.low, self.high);
        if let Some(hook) = self.change.clone() {
            hook(self.value);
        }
    }
}

/// Boolean toggle.
pub struct Toggle {
    base: ElementBase,
    label: String,
    value: bool,
    change: Option<Rc<dyn Fn(bool)>>,
}

impl Create for Toggle {
    fn create(name: &str) -> Self {
        Self {
            base: ElementBase::new(name),
            label: String::new(),
            value: false,
            change: None,
        }
    }
}

impl Labeled for Toggle {
    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }
}

impl HasValue<bool> for Toggle {
    fn value(&self) -> bool {
        self.value
    }

    fn set_value(&mut self, value: bool) {
        self.value = value;
    }
}

impl ChangeNotify<bool> for Toggle {
    fn set_change_hook(&mut self, hook: Rc<dyn Fn(bool)>) {
        self.change = Some(hook);
    }
}

impl Toggle {
    /// Simulate the user flipping the switch.
    pub fn flip(&mut self) {
        self.value = !self.value;
        if let Some(hook) = self.change.clone() {
            hook(self.value);
        }
    }
}

/// Choice list; the bound value is the selected index.
pub struct Dropdown {
    base: ElementBase,
    label: String,
    choices: Vec<String>,
    index: usize,
    focusable: bool,
    focused: bool,
    open: bool,
    change: Option<Rc<dyn Fn(usize)>>,
}

impl Create for Dropdown {
    fn create(name: &str) -> Self {
        Self {
            base: ElementBase::new(name),
            label: String::new(),
            choices: Vec::new(),
            index: 0,
            focusable: false,
            focused: false,
            open: false,
            change: None,
        }
    }
}

impl Labeled for Dropdown {
    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }
}

impl HasChoices for Dropdown {
    fn choices(&self) -> &[String] {
        &self.choices
    }

    fn set_choices(&mut self, choices: Vec<String>) {
        self.choices = choices;
    }
}

impl HasValue<usize> for Dropdown {
    fn value(&self) -> usize {
        self.index
    }

    fn set_value(&mut self, value: usize) {
        self.index = value;
    }
}

impl ChangeNotify<usize> for Dropdown {
    fn set_change_hook(&mut self, hook: Rc<dyn Fn(usize)>) {
        self.change = Some(hook);
    }
}

impl Focusable for Dropdown {
    fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }
}

impl Expandable for Dropdown {
    fn is_open(&self) -> bool {
        self.open
    }
}

impl Dropdown {
    /// Simulate the user picking a choice: close the popup, select, fire.
    pub fn pick(&mut self, index: usize) {
        self.open = false;
        self.index = index.min(self.choices.len().saturating_sub(1));
        if let Some(hook) = self.change.clone() {
            hook(self.index);
        }
    }

    /// Toggle the popup.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Move keyboard focus.
    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused && self.focusable;
    }
}

macro_rules! input_widget {
    ($(#[$doc:meta])* $name:ident, $value:ty, $default:expr) => {
        $(#[$doc])*
        pub struct $name {
            base: ElementBase,
            label: String,
            value: $value,
            focusable: bool,
            focused: bool,
            change: Option<Rc<dyn Fn($value)>>,
        }

        impl Create for $name {
            fn create(name: &str) -> Self {
                Self {
                    base: ElementBase::new(name),
                    label: String::new(),
                    value: $default,
                    focusable: false,
                    focused: false,
                    change: None,
                }
            }
        }

        impl Labeled for $name {
            fn label(&self) -> &str {
                &self.label
            }

            fn set_label(&mut self, label: String) {
                self.label = label;
            }
        }

        impl HasValue<$value> for $name {
            fn value(&self) -> $value {
                self.value.clone()
            }

            fn set_value(&mut self, value: $value) {
                self.value = value;
            }
        }

        impl ChangeNotify<$value> for $name {
            fn set_change_hook(&mut self, hook: Rc<dyn Fn($value)>) {
                self.change = Some(hook);
            }
        }

        impl Focusable for $name {
            fn has_focus(&self) -> bool {
                self.focused
            }

            fn set_focusable(&mut self, focusable: bool) {
                self.focusable = focusable;
            }
        }

        impl $name {
            /// Simulate a user edit: store the value and fire the change hook.
            pub fn edit(&mut self, value: $value) {
                self.value = value.clone();
                if let Some(hook) = self.change.clone() {
                    hook(value);
                }
            }

            /// Move keyboard focus.
            pub fn set_focus(&mut self, focused: bool) {
                self.focused = focused && self.focusable;
            }
        }
    };
}

input_widget!(
    /// Free-form text input.
    TextInput,
    String,
    String::new()
);
input_widget!(
    /// Integer input.
    IntInput,
    i64,
    0
);
input_widget!(
    /// Floating-point input.
    FloatInput,
    f64,
    0.0
);

impl TextInput {
    /// Simulate the user typing a replacement string while focused.
    pub fn type_text(&mut self, text: &str) {
        self.edit(text.to_string());
    }
}
