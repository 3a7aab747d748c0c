//! Activation identifiers

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Key grouping a switch with the listeners it unlocks
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivationId(String);

impl ActivationId {
    /// Create an activation id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ActivationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ActivationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Ordered, deduplicated set of activation ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationSet {
    ids: BTreeSet<ActivationId>,
}

impl ActivationSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated attribute. Empty segments are dropped;
    /// other segments are kept verbatim.
    pub fn parse(attr: &str) -> Self {
        attr.split(',')
            .filter(|segment| !segment.is_empty())
            .map(ActivationId::new)
            .collect()
    }

    /// Add an id
    pub fn insert(&mut self, id: ActivationId) -> bool {
        self.ids.insert(id)
    }

    /// Check membership
    pub fn contains(&self, id: &ActivationId) -> bool {
        self.ids.contains(id)
    }

    /// Number of ids
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate in order
    pub fn iter(&self) -> impl Iterator<Item = &ActivationId> {
        self.ids.iter()
    }
}

impl FromIterator<ActivationId> for ActivationSet {
    fn from_iter<T: IntoIterator<Item = ActivationId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ActivationSet {
    type Item = &'a ActivationId;
    type IntoIter = std::collections::btree_set::Iter<'a, ActivationId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attribute() {
        let set = ActivationSet::parse("belt,door,,belt");
        let ids: Vec<&str> = set.iter().map(ActivationId::as_str).collect();
        assert_eq!(ids, vec!["belt", "door"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(ActivationSet::parse("").is_empty());
        assert!(ActivationSet::parse(",,").is_empty());
    }

    #[test]
    fn test_segments_kept_verbatim() {
        let set = ActivationSet::parse("a, b");
        assert!(set.contains(&ActivationId::new(" b")));
        assert!(!set.contains(&ActivationId::new("b")));
    }
}
