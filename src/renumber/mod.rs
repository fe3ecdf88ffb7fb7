//! Concept URI autonumbering
//!
//! The rewrite core: eligibility checking, bounded identifier
//! allocation, the rename mapping, and the two-pass rewrite engine.
//!
//! # Algorithm
//!
//! Phase 1 walks the input graph in order; the first sighting of an
//! eligible concept URI (subject or object position) allocates the next
//! identifier and records the rename, and every triple is emitted with
//! whatever renames are known at that point. Phase 2 then re-scans the
//! output and repairs triples that referenced a concept before its
//! rename was recorded (forward references). The output always holds
//! exactly as many triples as the input.

mod allocator;
mod config;
mod eligibility;
mod engine;
mod rename;

pub use allocator::IdAllocator;
pub use config::RenumberConfig;
pub use eligibility::{ConceptCriteria, NamespaceMatch};
pub use engine::{RenumberOutcome, RenumberReport, Renumberer};
pub use rename::RenameMap;

use crate::rdf::RdfError;
use thiserror::Error;

/// Rewrite errors
///
/// All variants are fatal: a half-renamed graph is not a meaningful
/// intermediate state, so every failure aborts the run with no output.
#[derive(Error, Debug)]
pub enum RenumberError {
    /// The configured identifier range was fully consumed
    #[error("identifier range [{low}, {high}) exhausted before all concepts were assigned")]
    AllocatorExhausted {
        /// Inclusive lower bound of the range
        low: u64,
        /// Exclusive upper bound of the range
        high: u64,
    },

    /// The input/output triple counts differ after the rewrite
    #[error("triple count mismatch after rewrite: input {input}, output {output}")]
    TripleCountMismatch {
        /// Number of triples in the input graph
        input: usize,
        /// Number of triples in the output graph
        output: usize,
    },

    /// A URI was assigned a second identifier
    #[error("duplicate assignment for {0}")]
    DuplicateAssignment(String),

    /// A configured or minted IRI failed validation
    #[error(transparent)]
    InvalidIri(#[from] RdfError),
}

pub type RenumberResult<T> = Result<T, RenumberError>;
