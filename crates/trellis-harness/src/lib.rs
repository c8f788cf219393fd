#![forbid(unsafe_code)]

//! Test harness for Trellis: an in-memory host.
//!
//! [`TestHost`] implements the full widget family with plain structs that
//! record state instead of drawing. Each editable widget exposes the
//! simulator half of its contract — [`Button::press`], [`Slider::drag`],
//! [`TextInput::type_text`], focus and popup toggles — so tests can act like
//! a user and then assert what a pass reconciled.
//!
//! Lookup helpers address elements by slash path from the root cell:
//!
//! ```ignore
//! let screen = pane("screen");
//! // ... run passes ...
//! with_element::<Label, _>(&screen, "settings/title", |l| {
//!     assert_eq!(l.text(), "Audio");
//! });
//! ```
//!
//! Helpers panic with descriptive messages on missing paths or wrong element
//! types; this crate exists to back tests, where loud failure is the point.

pub mod inspect;
pub mod widgets;

pub use inspect::{as_cell, find, outline, with_element, with_element_mut};
pub use widgets::{
    Button, Dropdown, FloatInput, IntInput, Label, Pane, ScrollPane, Slider, TestHost, TextInput,
    Toggle, pane,
};
