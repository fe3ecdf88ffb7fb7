//! SKOS concept URI autonumbering
//!
//! Rewrites a thesaurus graph so that every URI identifying a
//! `skos:Concept` under a configured base namespace is replaced by a
//! freshly minted, opaque sequential identifier
//! (`<base_namespace><counter>`). Every other URI, every literal, and
//! every predicate passes through byte-for-byte unchanged, and the
//! output graph always holds exactly as many triples as the input.
//!
//! Concept identity is discovered from graph assertions, not position:
//! a URI is only renumbered when the graph contains an explicit
//! `(uri, rdf:type, skos:Concept)` triple for it. References to a
//! concept that occur *before* the concept's own defining triple
//! (e.g. as a `skos:broader` target) are repaired by a second pass once
//! the rename mapping is complete.
//!
//! # Example
//!
//! ```rust
//! use skos_autonumber::rdf::{vocab, NamedNode, Triple, TripleStore};
//! use skos_autonumber::renumber::{RenumberConfig, Renumberer};
//!
//! let base = "https://thesaurus.example.org/id/";
//! let mut graph = TripleStore::new();
//! let concept = NamedNode::new("https://thesaurus.example.org/id/detectives").unwrap();
//! graph.insert(Triple::new(
//!     concept.clone().into(),
//!     NamedNode::new(vocab::RDF_TYPE).unwrap(),
//!     NamedNode::new(vocab::SKOS_CONCEPT).unwrap().into(),
//! ));
//!
//! let config = RenumberConfig {
//!     base_namespace: base.to_string(),
//!     ..RenumberConfig::default()
//! };
//! let outcome = Renumberer::new(&config).unwrap().run(&graph).unwrap();
//!
//! assert_eq!(outcome.report.concepts_renamed, 1);
//! assert_eq!(outcome.graph.len(), graph.len());
//! assert_eq!(
//!     outcome.mapping.get(concept.as_str()).unwrap().as_str(),
//!     "https://thesaurus.example.org/id/1000000",
//! );
//! ```

#![warn(clippy::all)]

pub mod rdf;
pub mod renumber;

// Re-export main types for convenience
pub use rdf::{
    BlankNode, Literal, NamedNode, Object, Subject, Triple,
    TripleStore,
    Namespace, NamespaceManager,
    ParseError, ParseResult, RdfFormat, SerializeError, SerializeResult,
};

pub use renumber::{
    ConceptCriteria, IdAllocator, NamespaceMatch, RenameMap,
    RenumberConfig, RenumberError, RenumberOutcome, RenumberReport,
    RenumberResult, Renumberer,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
