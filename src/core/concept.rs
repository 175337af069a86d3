//! Concept interning.
//!
//! A concept is identified by its name. [`ConceptRegistry`] hands out one
//! [`ConceptId`] per distinct name, so the rest of the crate compares concepts
//! by handle instead of by string.

use indexmap::IndexSet;
use std::fmt;

/// Handle to an interned concept.
///
/// Handles are only meaningful for the registry that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConceptId(u32);

impl ConceptId {
    /// Position of the concept in registry order (first interned = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "concept#{}", self.0)
    }
}

/// String-keyed cache of concepts.
///
/// Names are kept in first-interned order, which gives a stable order when
/// concepts need to be listed.
#[derive(Debug, Default, Clone)]
pub struct ConceptRegistry {
    names: IndexSet<String>,
}

impl ConceptRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the concept for `name`, creating it on first use.
    pub fn intern(&mut self, name: &str) -> ConceptId {
        if let Some(index) = self.names.get_index_of(name) {
            return ConceptId(index as u32);
        }
        let (index, _) = self.names.insert_full(name.to_string());
        ConceptId(index as u32)
    }

    /// Look up an already interned concept.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ConceptId> {
        self.names.get_index_of(name).map(|index| ConceptId(index as u32))
    }

    /// Name of an interned concept.
    ///
    /// # Panics
    ///
    /// Panics if `id` was produced by another registry with more concepts.
    #[must_use]
    pub fn name(&self, id: ConceptId) -> &str {
        &self.names[id.index()]
    }

    /// Number of distinct concepts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no concept has been interned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all concepts in interning order.
    pub fn iter(&self) -> impl Iterator<Item = (ConceptId, &str)> {
        self.names.iter().enumerate().map(|(index, name)| (ConceptId(index as u32), name.as_str()))
    }

    /// Join concept names with `separator`, in the given order.
    pub fn join<'a>(&self, concepts: impl IntoIterator<Item = &'a ConceptId>, separator: &str) -> String {
        concepts.into_iter().map(|id| self.name(*id)).collect::<Vec<_>>().join(separator)
    }
}
