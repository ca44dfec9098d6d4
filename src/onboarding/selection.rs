//! Multi-select tag set
//!
//! A small set with toggle semantics used by every checkbox group in the
//! wizard. Membership is what matters; callers that display selections
//! iterate their fixed catalog and ask `contains`.

/// A set of selected tags with toggle semantics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet<T> {
    items: Vec<T>,
}

impl<T> Default for TagSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Copy + PartialEq> TagSet<T> {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the tag if present, add it otherwise
    ///
    /// Returns whether the tag is selected after the call.
    pub fn toggle(&mut self, tag: T) -> bool {
        if self.contains(tag) {
            self.items.retain(|t| *t != tag);
            false
        } else {
            self.items.push(tag);
            true
        }
    }

    /// Add the tag if absent
    pub fn insert(&mut self, tag: T) {
        if !self.contains(tag) {
            self.items.push(tag);
        }
    }

    /// Remove the tag if present
    pub fn remove(&mut self, tag: T) {
        self.items.retain(|t| *t != tag);
    }

    pub fn contains(&self, tag: T) -> bool {
        self.items.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Selected tags ordered by their position in `catalog`
    pub fn ordered_by(&self, catalog: &[T]) -> Vec<T> {
        catalog
            .iter()
            .copied()
            .filter(|tag| self.contains(*tag))
            .collect()
    }
}
