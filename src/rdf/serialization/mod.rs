//! RDF serialization formats
//!
//! Turtle and N-Triples input/output over rio. The rewrite core itself
//! never touches files; these are its boundary collaborators.

mod turtle;

use super::{NamespaceManager, TripleStore};
use std::path::Path;
use thiserror::Error;

/// RDF serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Turtle format (.ttl)
    Turtle,
    /// N-Triples format (.nt)
    NTriples,
}

impl RdfFormat {
    /// Guess the format from a file extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "ttl" | "turtle" => Some(RdfFormat::Turtle),
            "nt" | "ntriples" => Some(RdfFormat::NTriples),
            _ => None,
        }
    }
}

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Syntax error in the input document
    #[error("Parse error: {0}")]
    Syntax(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Serialization errors
#[derive(Error, Debug)]
pub enum SerializeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}

pub type SerializeResult<T> = Result<T, SerializeError>;

/// Parse RDF data from a string into a triple store
pub fn parse_str(input: &str, format: RdfFormat) -> ParseResult<TripleStore> {
    match format {
        RdfFormat::Turtle => turtle::parse_turtle(input),
        RdfFormat::NTriples => turtle::parse_ntriples(input),
    }
}

/// Parse RDF data from a file
pub fn parse_file(path: &Path, format: RdfFormat) -> ParseResult<TripleStore> {
    let input = std::fs::read_to_string(path)?;
    parse_str(&input, format)
}

/// Serialize a triple store to a string
pub fn serialize(
    store: &TripleStore,
    format: RdfFormat,
    namespaces: &NamespaceManager,
) -> SerializeResult<String> {
    match format {
        RdfFormat::Turtle => turtle::serialize_turtle(store, namespaces),
        RdfFormat::NTriples => turtle::serialize_ntriples(store),
    }
}

/// Serialize a triple store to a file
pub fn serialize_file(
    store: &TripleStore,
    path: &Path,
    format: RdfFormat,
    namespaces: &NamespaceManager,
) -> SerializeResult<()> {
    let output = serialize(store, format, namespaces)?;
    std::fs::write(path, output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            RdfFormat::from_extension(&PathBuf::from("thesaurus.ttl")),
            Some(RdfFormat::Turtle)
        );
        assert_eq!(
            RdfFormat::from_extension(&PathBuf::from("out.nt")),
            Some(RdfFormat::NTriples)
        );
        assert_eq!(RdfFormat::from_extension(&PathBuf::from("data.trig")), None);
        assert_eq!(RdfFormat::from_extension(&PathBuf::from("noext")), None);
    }

    #[test]
    fn test_parse_syntax_error() {
        let result = parse_str("this is not turtle", RdfFormat::Turtle);
        assert!(matches!(result, Err(ParseError::Syntax(_))));
    }
}
