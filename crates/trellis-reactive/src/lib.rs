#![forbid(unsafe_code)]

//! Reactive data flow for Trellis.
//!
//! Two primitives connect application state to editable elements:
//!
//! - [`ValueBinding`]: a generic two-way synchronizer between an external
//!   (context) value and an element's internal value, gated by an optional
//!   lock predicate.
//! - [`Lens`]: a compiled getter/setter pair for a member of a context type,
//!   built from closures via the [`lens!`] macro. Lenses stand in for the
//!   runtime property reflection other UI stacks lean on.
//!
//! # Invariants
//!
//! 1. While the lock predicate holds, `pull` never writes to the element;
//!    the predicate is re-evaluated on every pull.
//! 2. `push` is synchronous and unconditional — the lock never blocks the
//!    element-to-external direction.
//! 3. `pull` writes only on inequality, so a settled binding is write-free.
//! 4. A lens resolves at compile time; an unresolvable member reference
//!    cannot reach runtime.

pub mod binding;
pub mod lens;

pub use binding::{Pullable, ValueBinding};
pub use lens::Lens;
