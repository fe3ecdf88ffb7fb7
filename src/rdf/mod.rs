//! RDF support for the autonumbering rewriter
//!
//! This module holds the triple data model and its collaborators:
//! - RDF terms and triples (subject-predicate-object)
//! - An insertion-ordered in-memory triple store
//! - Namespace prefix bookkeeping
//! - Turtle / N-Triples parsing and serialization

mod namespace;
mod serialization;
mod store;
mod types;

pub use types::{
    vocab, BlankNode, Literal, NamedNode, Object, RdfError, RdfResult, Subject, Triple,
};

pub use store::TripleStore;

pub use namespace::{Namespace, NamespaceManager};

pub use serialization::{
    parse_file, parse_str, serialize, serialize_file, ParseError, ParseResult, RdfFormat,
    SerializeError, SerializeResult,
};
