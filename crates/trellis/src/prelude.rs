//! One-stop imports for application code.
//!
//! ```ignore
//! use trellis::prelude::*;
//! ```

pub use crate::binder::Binder;
pub use crate::flow::{EnumButton, EnumButtonGroup, Switcher};
pub use crate::root::{PassStats, Root};

pub use trellis_core::element::{
    ChangeNotify, ClickNotify, Create, Element, ElementBase, ElementCell, Expandable, Focusable,
    HasChoices, HasText, HasValue, Labeled, Ranged,
};
pub use trellis_core::{ClassSet, Ctx, EnumValue, Error, Host, Result};

pub use trellis_reactive::{Lens, Pullable, ValueBinding, lens};
