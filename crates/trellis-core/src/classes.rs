//! Style-class lists.
//!
//! Class specs are whitespace-separated strings (`"row dim"`), the same shape
//! hosts typically feed their stylesheet engines. The reconciler re-applies a
//! node's declared spec on every pass with [`ClassSet::assign`]; per-pass
//! conditional classes (active buttons, validation states) layer on top with
//! [`ClassSet::toggle`] afterwards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered list of unique style classes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassSet {
    items: Vec<String>,
}

impl ClassSet {
    /// An empty class set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated spec into a class set.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let mut set = Self::new();
        for class in spec.split_whitespace() {
            set.add(class);
        }
        set
    }

    /// Replace the whole list with the classes in `spec`.
    ///
    /// No-op when the parsed spec equals the current list, so repeated
    /// re-application across passes does not churn.
    pub fn assign(&mut self, spec: &str) {
        let next = Self::parse(spec);
        if next != *self {
            *self = next;
        }
    }

    /// Add a single class if not already present.
    pub fn add(&mut self, class: &str) {
        if !class.is_empty() && !self.contains(class) {
            self.items.push(class.to_string());
        }
    }

    /// Remove a single class if present.
    pub fn remove(&mut self, class: &str) {
        self.items.retain(|c| c != class);
    }

    /// Add or remove `class` depending on `on`.
    pub fn toggle(&mut self, class: &str, on: bool) {
        if on {
            self.add(class);
        } else {
            self.remove(class);
        }
    }

    /// Whether `class` is present.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.items.iter().any(|c| c == class)
    }

    /// Number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate the classes in application order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl std::fmt::Display for ClassSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, class) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_whitespace() {
        let set = ClassSet::parse("  row   dim \t primary ");
        assert_eq!(set.len(), 3);
        assert!(set.contains("row"));
        assert!(set.contains("dim"));
        assert!(set.contains("primary"));
    }

    #[test]
    fn parse_dedupes() {
        let set = ClassSet::parse("row row row");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn assign_replaces() {
        let mut set = ClassSet::parse("a b");
        set.assign("c");
        assert!(!set.contains("a"));
        assert!(set.contains("c"));
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut set = ClassSet::new();
        set.toggle("active", true);
        assert!(set.contains("active"));
        set.toggle("active", true);
        assert_eq!(set.len(), 1, "toggling on twice must not duplicate");
        set.toggle("active", false);
        assert!(set.is_empty());
    }

    #[test]
    fn display_joins_with_spaces() {
        let set = ClassSet::parse("a b c");
        assert_eq!(set.to_string(), "a b c");
        assert_eq!(ClassSet::new().to_string(), "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let set = ClassSet::parse("row dim");
        let json = serde_json::to_string(&set).expect("serialize");
        let back: ClassSet = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(set, back);
    }
}
