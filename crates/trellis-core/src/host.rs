//! The host widget family.
//!
//! A host names one concrete element type per widget kind the fluent API can
//! create. The engine stays fully generic: it only ever touches these types
//! through [`Create`] and the capability traits, so any widget toolkit that
//! can satisfy the bounds — or an in-memory stand-in for tests — plugs in
//! unchanged.

use crate::element::{
    ChangeNotify, ClickNotify, Create, Element, Expandable, Focusable, HasChoices, HasText,
    HasValue, Labeled, Ranged,
};

/// A family of host element types, one per widget kind.
pub trait Host: 'static {
    /// Plain container.
    type Pane: Element + Create;

    /// Scrollable container.
    type Scroll: Element + Create;

    /// Static or computed text.
    type Label: Element + Create + HasText;

    /// Clickable button with fixed text.
    type Button: Element + Create + HasText + ClickNotify;

    /// Bounded numeric slider.
    type Slider: Element + Create + Labeled + Ranged + HasValue<f64> + ChangeNotify<f64>;

    /// Boolean toggle.
    type Toggle: Element + Create + Labeled + HasValue<bool> + ChangeNotify<bool>;

    /// Choice list; the bound value is the selected index. Also backs enum
    /// fields, whose choices are the variant tags.
    type Dropdown: Element
        + Create
        + Labeled
        + HasChoices
        + HasValue<usize>
        + ChangeNotify<usize>
        + Focusable
        + Expandable;

    /// Free-form text input.
    type TextField: Element + Create + Labeled + HasValue<String> + ChangeNotify<String> + Focusable;

    /// Integer input.
    type IntField: Element + Create + Labeled + HasValue<i64> + ChangeNotify<i64> + Focusable;

    /// Floating-point input.
    type FloatField: Element + Create + Labeled + HasValue<f64> + ChangeNotify<f64> + Focusable;
}
