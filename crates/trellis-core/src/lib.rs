#![forbid(unsafe_code)]

//! Shared contracts for the Trellis reconciliation engine.
//!
//! This crate holds everything the engine and a host embedding agree on:
//!
//! - [`Element`] / [`ElementBase`]: the opaque host-widget boundary — a name,
//!   a mutable class list, and parented child cells.
//! - Capability traits ([`HasText`], [`HasValue`], [`Labeled`], …): the
//!   widget-specific properties field binders configure and synchronize.
//! - [`Host`]: the family of concrete element types a host provides, one per
//!   widget kind the fluent API can create.
//! - [`Ctx`]: shared, single-threaded context handles propagated parent to
//!   child through explicit mapping functions.
//! - [`EnumValue`]: the contract enum-driven helpers key their nodes on.
//! - [`Error`] / [`Result`]: the engine's fail-fast error surface.
//!
//! No reconciliation logic lives here; see the `trellis` crate.

pub mod classes;
pub mod context;
pub mod element;
pub mod enum_value;
pub mod error;
pub mod host;

pub use classes::ClassSet;
pub use context::Ctx;
pub use element::{
    ChangeNotify, ClickNotify, Create, Element, ElementBase, ElementCell, Expandable, Focusable,
    HasChoices, HasText, HasValue, Labeled, Ranged,
};
pub use enum_value::EnumValue;
pub use error::{Error, Result};
pub use host::Host;
