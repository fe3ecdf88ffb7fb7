//! Rewrite configuration

use super::NamespaceMatch;
use crate::rdf::vocab;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Configuration for a renumbering run
///
/// Deserializable from a YAML config file; every field has a default so
/// partial files work, but `base_namespace` must be non-empty before a
/// run can start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenumberConfig {
    /// URI prefix identifying the thesaurus's own identifier space
    pub base_namespace: String,

    /// Inclusive lower bound of the identifier range
    pub id_low: u64,

    /// Exclusive upper bound of the identifier range
    pub id_high: u64,

    /// Predicate of the concept type assertion (`rdf:type`)
    pub concept_type_predicate: String,

    /// Object of the concept type assertion (`skos:Concept`)
    pub concept_type_value: String,

    /// How a URI is matched against the base namespace
    pub namespace_match: NamespaceMatch,
}

impl RenumberConfig {
    /// The configured identifier range as `[id_low, id_high)`
    pub fn id_range(&self) -> Range<u64> {
        self.id_low..self.id_high
    }
}

impl Default for RenumberConfig {
    fn default() -> Self {
        Self {
            base_namespace: String::new(),
            id_low: 1_000_000,
            id_high: 9_999_999,
            concept_type_predicate: vocab::RDF_TYPE.to_string(),
            concept_type_value: vocab::SKOS_CONCEPT.to_string(),
            namespace_match: NamespaceMatch::Contains,
        }
    }
}
