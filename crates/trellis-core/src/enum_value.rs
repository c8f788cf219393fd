//! The contract behind enum-driven structure.
//!
//! Switch cases, enum button groups, and enum fields all key persistent
//! nodes on an enum value's textual form. [`EnumValue`] pins down exactly
//! what those helpers need: the full variant list and a stable tag per
//! variant. Tags double as node names, so they must be unique, non-blank,
//! and stable across passes.

/// A finite, copyable choice type usable to drive UI structure.
///
/// # Invariants
///
/// 1. [`EnumValue::all`] returns every variant exactly once and is never
///    empty.
/// 2. [`EnumValue::tag`] is injective over `all()` — two variants never share
///    a tag — and each tag is a valid, non-blank node name.
///
/// # Example
///
/// ```
/// use trellis_core::EnumValue;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Units {
///     Metric,
///     Imperial,
/// }
///
/// impl EnumValue for Units {
///     fn all() -> &'static [Self] {
///         &[Units::Metric, Units::Imperial]
///     }
///
///     fn tag(&self) -> &'static str {
///         match self {
///             Units::Metric => "Metric",
///             Units::Imperial => "Imperial",
///         }
///     }
/// }
///
/// assert_eq!(Units::all().len(), 2);
/// assert_eq!(Units::Imperial.tag(), "Imperial");
/// ```
pub trait EnumValue: Copy + PartialEq + std::fmt::Debug + 'static {
    /// Every variant, in declaration order.
    fn all() -> &'static [Self];

    /// The variant's stable textual form.
    fn tag(&self) -> &'static str;

    /// Position of this variant within [`EnumValue::all`].
    fn index(&self) -> usize {
        Self::all()
            .iter()
            .position(|v| v == self)
            .unwrap_or_default()
    }

    /// Variant at `index`, falling back to the first variant when out of
    /// range.
    fn from_index(index: usize) -> Self {
        let all = Self::all();
        debug_assert!(!all.is_empty(), "EnumValue::all() must not be empty");
        *all.get(index).unwrap_or(&all[0])
    }
}
