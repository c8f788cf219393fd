#![forbid(unsafe_code)]

//! Declarative, retained-mode UI-tree reconciliation with two-way binding.
//!
//! An application describes, on every pass, the element tree it wants as a
//! function of its context data. The engine diffs that description against
//! the tree materialized on previous passes:
//!
//! - a name declared for the first time **creates** a persistent node (and
//!   its host element) exactly once;
//! - a name declared again **updates** the existing node in place — stored
//!   update action, binding pull, class re-application;
//! - a name *not* declared this pass is **pruned** — its element is detached
//!   and its whole subtree dropped — by an explicit mark-and-sweep at the end
//!   of each parent's child-processing.
//!
//! [`Binder`] is the persistent node and carries the reconciler
//! ([`Binder::node`]); the fluent wrappers (`label`, `slider`, `toggle`, …)
//! and the structural helpers ([`Binder::optional`], [`Binder::enum_switch`],
//! [`Binder::enum_buttons`], [`Binder::for_each`]) all build on it. [`Root`]
//! drives passes from a host-provided root element and reports [`PassStats`].
//!
//! # Invariants
//!
//! 1. After a completed pass, the children under each parent are exactly the
//!    names the description declared during that pass.
//! 2. A node's element is created once and never replaced while the node
//!    lives; editable-field state therefore survives passes.
//! 3. Create callbacks fire once per node lifetime; stored update callbacks
//!    fire once per visited pass, including the creation pass.
//! 4. Binding pulls are skipped while the binding's lock predicate holds;
//!    pushes driven by element change hooks are never blocked.
//! 5. A pass runs synchronously to completion or aborts on the first error,
//!    with no rollback of effects already applied.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | `InvalidName` | Blank child name | Pass aborts |
//! | `DuplicateVisit` | Name declared twice under one parent in one pass | Pass aborts |
//! | `TypeMismatch` | Name reused with different context/element types | Pass aborts |
//! | `DuplicateCase` | Switch case value declared twice | Pass aborts |
//! | `Callback` | Application callback failed | Propagated unmodified |
//!
//! After an aborted pass the tree may hold partially created structure;
//! [`Root::reset`] tears it down.

pub mod binder;
pub mod flow;
mod fluent;
pub mod prelude;
pub mod root;

pub use binder::Binder;
pub use flow::{EnumButton, EnumButtonGroup, Switcher};
pub use root::{PassStats, Root};

pub use trellis_core::{ClassSet, Ctx, Element, EnumValue, Error, Host, Result};
pub use trellis_reactive::{Lens, ValueBinding};
