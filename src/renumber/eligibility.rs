//! Concept eligibility checking

use super::{RenumberConfig, RenumberResult};
use crate::rdf::{NamedNode, Triple, TripleStore};
use serde::{Deserialize, Serialize};

/// How a URI is matched against the base namespace
///
/// The namespace test treats the URI as an opaque string: no
/// normalization, case folding, or trailing-slash handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceMatch {
    /// The URI contains the base namespace anywhere
    Contains,
    /// The URI starts with the base namespace
    Prefix,
}

/// Decides whether a URI is a renumbering candidate
///
/// A URI qualifies iff its string form matches the base namespace under
/// the configured mode AND the store currently asserts
/// `(uri, concept_type_predicate, concept_type_value)`. Syntactic
/// namespace membership alone never triggers renumbering.
#[derive(Debug, Clone)]
pub struct ConceptCriteria {
    base_namespace: String,
    namespace_match: NamespaceMatch,
    type_predicate: NamedNode,
    type_value: NamedNode,
}

impl ConceptCriteria {
    /// Build the criteria from a run configuration, validating the
    /// type-assertion IRIs up front.
    pub fn from_config(config: &RenumberConfig) -> RenumberResult<Self> {
        Ok(Self {
            base_namespace: config.base_namespace.clone(),
            namespace_match: config.namespace_match,
            type_predicate: NamedNode::new(config.concept_type_predicate.clone())?,
            type_value: NamedNode::new(config.concept_type_value.clone())?,
        })
    }

    /// Check whether an IRI falls inside the base namespace
    pub fn in_namespace(&self, iri: &str) -> bool {
        match self.namespace_match {
            NamespaceMatch::Contains => iri.contains(&self.base_namespace),
            NamespaceMatch::Prefix => iri.starts_with(&self.base_namespace),
        }
    }

    /// Check whether a URI is a renumbering candidate
    ///
    /// Consulted against the live store at call time; no caching and no
    /// side effects. A URI under the base namespace that lacks the type
    /// assertion is simply not a candidate, never an error.
    pub fn is_candidate(&self, node: &NamedNode, store: &TripleStore) -> bool {
        if !self.in_namespace(node.as_str()) {
            return false;
        }
        let assertion = Triple::new(
            node.clone().into(),
            self.type_predicate.clone(),
            self.type_value.clone().into(),
        );
        store.contains(&assertion)
    }
}
