//! In-memory triple store
//!
//! An insertion-ordered set of triples. Iteration yields triples in the
//! order they were inserted, which makes first-sighting traversal (and
//! therefore identifier assignment) deterministic for a given input.

use super::types::Triple;
use indexmap::IndexSet;

/// Insertion-ordered triple store with structural identity
#[derive(Debug, Clone, Default)]
pub struct TripleStore {
    triples: IndexSet<Triple>,
}

impl TripleStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            triples: IndexSet::new(),
        }
    }

    /// Insert a triple. Returns false if the triple was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Remove a triple. Returns false if the triple was not present.
    ///
    /// Preserves the insertion order of the remaining triples.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        self.triples.shift_remove(triple)
    }

    /// Check if a triple exists in the store
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Total number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over all triples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }
}
