//! Types describing ancestor chains and discovered cycles.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A fully-qualified class name.
///
/// Names arrive pre-resolved from the extraction step (package/namespace
/// plus simple name, joined by `.`; unqualified classes keep their simple
/// name). Ouro treats them as opaque identifiers compared by equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    /// Create a class name from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClassName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ClassName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The full ancestor chain of one class.
///
/// Starts with the class itself, followed by each successive immediate
/// parent in traversal order. Construction stops when a class has no parent
/// in the table, or when a class already on the chain recurs; in the latter
/// case the repeated class is kept as the final element, so at most the
/// last element duplicates an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorChain {
    classes: Vec<ClassName>,
}

impl AncestorChain {
    /// Create an ancestor chain, validating invariants.
    ///
    /// Returns `None` if:
    /// - `classes` is empty
    /// - any element other than the final one repeats an earlier element
    #[must_use]
    pub fn new(classes: Vec<ClassName>) -> Option<Self> {
        if classes.is_empty() {
            return None;
        }
        let prefix = &classes[..classes.len() - 1];
        for (i, class) in prefix.iter().enumerate() {
            if prefix[..i].contains(class) {
                return None;
            }
        }
        Some(Self { classes })
    }

    /// Build a chain from a walk that already upheld the invariants.
    pub(crate) fn from_walk(classes: Vec<ClassName>) -> Self {
        debug_assert!(!classes.is_empty(), "chain must contain the start class");
        Self { classes }
    }

    /// The class this chain starts from.
    #[must_use]
    pub fn start(&self) -> &ClassName {
        &self.classes[0]
    }

    /// The classes on the chain, starting class first.
    #[must_use]
    pub fn classes(&self) -> &[ClassName] {
        &self.classes
    }

    /// Number of classes on the chain (including the start).
    ///
    /// Never zero; a chain always contains its start class.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the walk stopped because a class on the chain recurred.
    ///
    /// `false` means the chain ended at a class with no known parent.
    #[must_use]
    pub fn closes_cycle(&self) -> bool {
        match self.classes.split_last() {
            Some((last, prefix)) => prefix.contains(last),
            None => false,
        }
    }

    /// Consume the chain and return the classes.
    #[must_use]
    pub fn into_classes(self) -> Vec<ClassName> {
        self.classes
    }
}

/// The minimal closed loop proving one class is in an inheritance cycle.
///
/// Ordered from the class forward to its first recurrence, inclusive on
/// both ends: first and last elements are the same class, and no class in
/// between repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclePath {
    classes: Vec<ClassName>,
}

impl CyclePath {
    /// Create a cycle path, validating invariants.
    ///
    /// Returns `None` if:
    /// - `classes` has fewer than two elements
    /// - the first and last elements differ
    /// - any interior element repeats (the loop would not be minimal)
    #[must_use]
    pub fn new(classes: Vec<ClassName>) -> Option<Self> {
        if classes.len() < 2 {
            return None;
        }
        if classes.first() != classes.last() {
            return None;
        }
        let interior = &classes[..classes.len() - 1];
        for (i, class) in interior.iter().enumerate() {
            if interior[..i].contains(class) {
                return None;
            }
        }
        Some(Self { classes })
    }

    /// Build a path from a chain segment that already upheld the invariants.
    pub(crate) fn from_walk(classes: Vec<ClassName>) -> Self {
        debug_assert!(classes.len() >= 2, "a cycle path closes a loop");
        debug_assert_eq!(
            classes.first(),
            classes.last(),
            "a cycle path starts and ends at the same class"
        );
        Self { classes }
    }

    /// The classes on the loop, starting class first and repeated last.
    #[must_use]
    pub fn classes(&self) -> &[ClassName] {
        &self.classes
    }

    /// Number of distinct classes in the loop.
    #[must_use]
    pub fn cycle_len(&self) -> usize {
        self.classes.len() - 1
    }
}

impl fmt::Display for CyclePath {
    /// Renders the loop as `A -> B -> C -> A`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{class}")?;
        }
        Ok(())
    }
}

/// Cycle paths keyed by class, for every class found to be in a cycle.
///
/// Classes not on any cycle have no entry. Iteration is in sorted name
/// order so reports are deterministic regardless of how chains were built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    cycles: BTreeMap<ClassName, CyclePath>,
}

impl CycleReport {
    /// `true` if no class is part of a cycle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Number of classes found to be in a cycle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// The cycle path for one class, if it is in a cycle.
    #[must_use]
    pub fn get(&self, class: &ClassName) -> Option<&CyclePath> {
        self.cycles.get(class)
    }

    /// Iterate over `(class, cycle path)` entries in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&ClassName, &CyclePath)> {
        self.cycles.iter()
    }
}

impl FromIterator<(ClassName, CyclePath)> for CycleReport {
    fn from_iter<T: IntoIterator<Item = (ClassName, CyclePath)>>(iter: T) -> Self {
        Self {
            cycles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CycleReport {
    type Item = (&'a ClassName, &'a CyclePath);
    type IntoIter = std::collections::btree_map::Iter<'a, ClassName, CyclePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.cycles.iter()
    }
}
