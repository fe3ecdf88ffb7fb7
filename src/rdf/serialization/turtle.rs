//! Turtle / N-Triples implementation over rio

use super::{ParseError, ParseResult, SerializeError, SerializeResult};
use crate::rdf::{
    BlankNode, Literal, NamedNode, NamespaceManager, Object, Subject, Triple, TripleStore,
};
use rio_api::formatter::TriplesFormatter;
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesFormatter, NTriplesParser, TurtleFormatter, TurtleParser};
use std::io::{BufReader, Cursor, Write};

/// Parse a Turtle document into a triple store
pub fn parse_turtle(input: &str) -> ParseResult<TripleStore> {
    let cursor = Cursor::new(input);
    let mut parser = TurtleParser::new(BufReader::new(cursor), None);

    let mut store = TripleStore::new();
    let res: Result<(), rio_turtle::TurtleError> = parser.parse_all(&mut |t| {
        store.insert(convert_triple(t)?);
        Ok(())
    });

    match res {
        Ok(_) => Ok(store),
        Err(e) => Err(ParseError::Syntax(e.to_string())),
    }
}

/// Parse an N-Triples document into a triple store
pub fn parse_ntriples(input: &str) -> ParseResult<TripleStore> {
    let cursor = Cursor::new(input);
    let mut parser = NTriplesParser::new(BufReader::new(cursor));

    let mut store = TripleStore::new();
    let res: Result<(), rio_turtle::TurtleError> = parser.parse_all(&mut |t| {
        store.insert(convert_triple(t)?);
        Ok(())
    });

    match res {
        Ok(_) => Ok(store),
        Err(e) => Err(ParseError::Syntax(e.to_string())),
    }
}

/// Serialize a triple store as Turtle with an `@prefix` header
pub fn serialize_turtle(
    store: &TripleStore,
    namespaces: &NamespaceManager,
) -> SerializeResult<String> {
    let mut output = Vec::new();
    for ns in namespaces.prefixes() {
        writeln!(output, "@prefix {}: <{}> .", ns.prefix, ns.iri)?;
    }
    writeln!(output)?;

    let mut formatter = TurtleFormatter::new(&mut output);
    for triple in store.iter() {
        format_triple(&mut formatter, triple)
            .map_err(|e| SerializeError::Serialize(e.to_string()))?;
    }
    formatter
        .finish()
        .map_err(|e| SerializeError::Serialize(e.to_string()))?;

    String::from_utf8(output).map_err(|e| SerializeError::Serialize(e.to_string()))
}

/// Serialize a triple store as N-Triples
pub fn serialize_ntriples(store: &TripleStore) -> SerializeResult<String> {
    let mut output = Vec::new();

    let mut formatter = NTriplesFormatter::new(&mut output);
    for triple in store.iter() {
        format_triple(&mut formatter, triple)
            .map_err(|e| SerializeError::Serialize(e.to_string()))?;
    }
    formatter.finish();

    String::from_utf8(output).map_err(|e| SerializeError::Serialize(e.to_string()))
}

fn format_triple<F: TriplesFormatter>(
    formatter: &mut F,
    triple: &Triple,
) -> Result<(), F::Error> {
    let subject = match &triple.subject {
        Subject::NamedNode(n) => {
            rio_api::model::Subject::NamedNode(rio_api::model::NamedNode { iri: n.as_str() })
        }
        Subject::BlankNode(b) => {
            rio_api::model::Subject::BlankNode(rio_api::model::BlankNode { id: b.as_str() })
        }
    };

    let predicate = rio_api::model::NamedNode {
        iri: triple.predicate.as_str(),
    };

    let datatype;
    let object = match &triple.object {
        Object::NamedNode(n) => {
            rio_api::model::Term::NamedNode(rio_api::model::NamedNode { iri: n.as_str() })
        }
        Object::BlankNode(b) => {
            rio_api::model::Term::BlankNode(rio_api::model::BlankNode { id: b.as_str() })
        }
        Object::Literal(l) => {
            if let Some(language) = l.language() {
                rio_api::model::Term::Literal(rio_api::model::Literal::LanguageTaggedString {
                    value: l.value(),
                    language,
                })
            } else {
                datatype = l.datatype();
                if datatype.as_str() == "http://www.w3.org/2001/XMLSchema#string" {
                    rio_api::model::Term::Literal(rio_api::model::Literal::Simple {
                        value: l.value(),
                    })
                } else {
                    rio_api::model::Term::Literal(rio_api::model::Literal::Typed {
                        value: l.value(),
                        datatype: rio_api::model::NamedNode {
                            iri: datatype.as_str(),
                        },
                    })
                }
            }
        }
    };

    formatter.format(&rio_api::model::Triple {
        subject,
        predicate,
        object,
    })
}

fn convert_triple(t: rio_api::model::Triple<'_>) -> Result<Triple, std::io::Error> {
    let subject = convert_subject(t.subject)?;
    let predicate = convert_named(t.predicate)?;
    let object = convert_object(t.object)?;
    Ok(Triple::new(subject, predicate, object))
}

fn convert_subject(s: rio_api::model::Subject<'_>) -> Result<Subject, std::io::Error> {
    match s {
        rio_api::model::Subject::NamedNode(n) => Ok(Subject::NamedNode(
            NamedNode::new(n.iri).map_err(invalid_data)?,
        )),
        rio_api::model::Subject::BlankNode(b) => Ok(Subject::BlankNode(
            BlankNode::new(b.id).map_err(invalid_data)?,
        )),
        _ => Err(invalid_data("unsupported subject term")),
    }
}

fn convert_named(n: rio_api::model::NamedNode<'_>) -> Result<NamedNode, std::io::Error> {
    NamedNode::new(n.iri).map_err(invalid_data)
}

fn convert_object(o: rio_api::model::Term<'_>) -> Result<Object, std::io::Error> {
    match o {
        rio_api::model::Term::NamedNode(n) => Ok(Object::NamedNode(
            NamedNode::new(n.iri).map_err(invalid_data)?,
        )),
        rio_api::model::Term::BlankNode(b) => Ok(Object::BlankNode(
            BlankNode::new(b.id).map_err(invalid_data)?,
        )),
        rio_api::model::Term::Literal(l) => {
            let literal = match l {
                rio_api::model::Literal::Simple { value } => Literal::new_simple(value),
                rio_api::model::Literal::LanguageTaggedString { value, language } => {
                    Literal::new_language_tagged(value, language).map_err(invalid_data)?
                }
                rio_api::model::Literal::Typed { value, datatype } => {
                    let dt = NamedNode::new(datatype.iri).map_err(invalid_data)?;
                    Literal::new_typed(value, dt)
                }
            };
            Ok(Object::Literal(literal))
        }
        _ => Err(invalid_data("unsupported object term")),
    }
}

fn invalid_data(e: impl ToString) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::vocab;

    #[test]
    fn test_turtle_roundtrip() {
        let input = r#"
            @prefix skos: <http://www.w3.org/2004/02/skos/core#> .
            <http://example.org/id/a> a skos:Concept ;
                skos:prefLabel "A"@en .
        "#;
        let store = parse_turtle(input).unwrap();
        assert_eq!(store.len(), 2);

        let output = serialize_turtle(&store, &NamespaceManager::new()).unwrap();
        assert!(output.contains("@prefix skos:"));
        assert!(output.contains("http://example.org/id/a"));

        let reparsed = parse_turtle(&output).unwrap();
        assert_eq!(reparsed.len(), store.len());
    }

    #[test]
    fn test_parse_preserves_document_order() {
        let input = r#"
            <http://example.org/id/first> <http://example.org/p> <http://example.org/id/second> .
            <http://example.org/id/second> <http://example.org/p> <http://example.org/id/third> .
        "#;
        let store = parse_ntriples(input).unwrap();
        let subjects: Vec<&str> = store
            .iter()
            .map(|t| t.subject.iri().unwrap().as_str())
            .collect();
        assert_eq!(
            subjects,
            vec!["http://example.org/id/first", "http://example.org/id/second"]
        );
    }

    #[test]
    fn test_ntriples_roundtrip() {
        let input = format!(
            "<http://example.org/id/a> <{}> <{}> .\n",
            vocab::RDF_TYPE,
            vocab::SKOS_CONCEPT
        );
        let store = parse_ntriples(&input).unwrap();
        assert_eq!(store.len(), 1);

        let output = serialize_ntriples(&store).unwrap();
        assert!(output.contains("<http://example.org/id/a>"));
        assert_eq!(parse_ntriples(&output).unwrap().len(), 1);
    }

    #[test]
    fn test_typed_and_tagged_literals_survive() {
        let input = r#"
            <http://example.org/a> <http://example.org/label> "x"@nl .
            <http://example.org/a> <http://example.org/count> "3"^^<http://www.w3.org/2001/XMLSchema#integer> .
        "#;
        let store = parse_turtle(input).unwrap();
        let output = serialize_ntriples(&store).unwrap();
        assert!(output.contains("\"x\"@nl"));
        assert!(output.contains("XMLSchema#integer"));
    }
}
