//! Rename mapping

use super::{RenumberError, RenumberResult};
use crate::rdf::{NamedNode, Object, Subject};
use indexmap::IndexMap;

/// Mapping from original concept URI strings to their minted replacements
///
/// The single source of truth for the rewrite. Once a key is inserted it
/// is never removed or reassigned; by the end of a run it holds exactly
/// one entry per distinct concept URI encountered in the graph.
#[derive(Debug)]
pub struct RenameMap {
    base_namespace: String,
    entries: IndexMap<String, NamedNode>,
}

impl RenameMap {
    /// Create an empty map minting into the given base namespace
    pub fn new(base_namespace: impl Into<String>) -> Self {
        Self {
            base_namespace: base_namespace.into(),
            entries: IndexMap::new(),
        }
    }

    /// Check whether an original URI already has a replacement
    pub fn contains(&self, original: &str) -> bool {
        self.entries.contains_key(original)
    }

    /// Look up the replacement for an original URI
    pub fn get(&self, original: &str) -> Option<&NamedNode> {
        self.entries.get(original)
    }

    /// Number of renamed concepts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no concepts have been renamed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(original, replacement)` pairs in assignment order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NamedNode)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Mint `base_namespace + id` and record it as the replacement for
    /// `original`.
    ///
    /// Assignment is one-shot per original URI; callers must guard with
    /// [`contains`](RenameMap::contains) first, and a repeated
    /// assignment is reported as an error rather than silently
    /// reassigning.
    pub fn assign(&mut self, original: &str, id: u64) -> RenumberResult<NamedNode> {
        if self.entries.contains_key(original) {
            return Err(RenumberError::DuplicateAssignment(original.to_string()));
        }
        let minted = NamedNode::new(format!("{}{}", self.base_namespace, id))?;
        self.entries.insert(original.to_string(), minted.clone());
        Ok(minted)
    }

    /// Resolve a subject through the map, falling back to the input
    /// unchanged when no mapping exists
    pub fn resolve_subject(&self, subject: &Subject) -> Subject {
        match subject {
            Subject::NamedNode(n) => match self.entries.get(n.as_str()) {
                Some(minted) => Subject::NamedNode(minted.clone()),
                None => subject.clone(),
            },
            Subject::BlankNode(_) => subject.clone(),
        }
    }

    /// Resolve an object through the map, falling back to the input
    /// unchanged when no mapping exists. Literals and blank nodes always
    /// pass through.
    pub fn resolve_object(&self, object: &Object) -> Object {
        match object {
            Object::NamedNode(n) => match self.entries.get(n.as_str()) {
                Some(minted) => Object::NamedNode(minted.clone()),
                None => object.clone(),
            },
            _ => object.clone(),
        }
    }
}
