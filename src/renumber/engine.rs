//! Two-pass rewrite engine

use super::{
    ConceptCriteria, IdAllocator, RenameMap, RenumberConfig, RenumberError, RenumberResult,
};
use crate::rdf::{Triple, TripleStore};
use serde::Serialize;
use std::ops::Range;
use tracing::{debug, info};

/// Diagnostics for a completed run
#[derive(Debug, Clone, Serialize)]
pub struct RenumberReport {
    /// Distinct concept URIs that received a new identifier
    pub concepts_renamed: usize,
    /// Number of triples in the input graph
    pub input_triples: usize,
    /// Number of triples in the output graph (always equal to the input)
    pub output_triples: usize,
    /// Triples repaired by the forward-reference pass
    pub forward_references_repaired: usize,
}

/// Result of a completed run
#[derive(Debug)]
pub struct RenumberOutcome {
    /// The rewritten graph
    pub graph: TripleStore,
    /// The original → minted URI mapping
    pub mapping: RenameMap,
    /// Run diagnostics
    pub report: RenumberReport,
}

/// The two-pass rewrite engine
///
/// Owns the eligibility criteria; the rename map and identifier
/// allocator are created fresh per [`run`](Renumberer::run) and
/// discarded with the outcome, so the engine is reentrant and holds no
/// state across invocations.
#[derive(Debug)]
pub struct Renumberer {
    criteria: ConceptCriteria,
    base_namespace: String,
    id_range: Range<u64>,
}

impl Renumberer {
    /// Build an engine from a run configuration
    pub fn new(config: &RenumberConfig) -> RenumberResult<Self> {
        Ok(Self {
            criteria: ConceptCriteria::from_config(config)?,
            base_namespace: config.base_namespace.clone(),
            id_range: config.id_range(),
        })
    }

    /// Rewrite the input graph into a fresh store
    ///
    /// Phase 1 assigns identifiers in first-sighting order (subject then
    /// object per triple) and emits each triple with the renames known
    /// at that point. Phase 2 runs only after phase 1 has covered the
    /// whole graph, and repairs any triple that referenced a concept
    /// before its rename was recorded.
    pub fn run(&self, input: &TripleStore) -> RenumberResult<RenumberOutcome> {
        let mut allocator = IdAllocator::new(self.id_range.clone());
        let mut mapping = RenameMap::new(&self.base_namespace);
        let mut output = TripleStore::new();

        // Phase 1: assign & emit
        for triple in input.iter() {
            if let Some(node) = triple.subject.iri() {
                if !mapping.contains(node.as_str()) && self.criteria.is_candidate(node, input) {
                    let minted = mapping.assign(node.as_str(), allocator.next_id()?)?;
                    debug!("assigned {} -> {}", node.as_str(), minted.as_str());
                }
            }
            if let Some(node) = triple.object.iri() {
                if !mapping.contains(node.as_str()) && self.criteria.is_candidate(node, input) {
                    let minted = mapping.assign(node.as_str(), allocator.next_id()?)?;
                    debug!("assigned {} -> {}", node.as_str(), minted.as_str());
                }
            }

            output.insert(Triple::new(
                mapping.resolve_subject(&triple.subject),
                triple.predicate.clone(),
                mapping.resolve_object(&triple.object),
            ));
        }

        // Phase 2: forward-reference repair. A triple is stale when its
        // subject or object still carries an original URI that is now a
        // key of the (complete) rename map.
        let stale: Vec<Triple> = output
            .iter()
            .filter(|t| self.is_stale(t, &mapping))
            .cloned()
            .collect();
        let repaired = stale.len();
        for triple in stale {
            output.remove(&triple);
            output.insert(Triple::new(
                mapping.resolve_subject(&triple.subject),
                triple.predicate.clone(),
                mapping.resolve_object(&triple.object),
            ));
        }

        if output.len() != input.len() {
            return Err(RenumberError::TripleCountMismatch {
                input: input.len(),
                output: output.len(),
            });
        }

        let report = RenumberReport {
            concepts_renamed: mapping.len(),
            input_triples: input.len(),
            output_triples: output.len(),
            forward_references_repaired: repaired,
        };
        info!(
            "renamed {} concepts across {} triples ({} forward references repaired)",
            report.concepts_renamed, report.output_triples, report.forward_references_repaired
        );

        Ok(RenumberOutcome {
            graph: output,
            mapping,
            report,
        })
    }

    fn is_stale(&self, triple: &Triple, mapping: &RenameMap) -> bool {
        let subject_stale = triple
            .subject
            .iri()
            .is_some_and(|n| mapping.contains(n.as_str()));
        let object_stale = triple
            .object
            .iri()
            .is_some_and(|n| mapping.contains(n.as_str()));
        subject_stale || object_stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{vocab, Literal, NamedNode, Object, Subject};
    use crate::renumber::NamespaceMatch;

    const BASE: &str = "https://thesaurus.example.org/id/";

    fn node(iri: &str) -> NamedNode {
        NamedNode::new(iri).unwrap()
    }

    fn concept(local: &str) -> NamedNode {
        node(&format!("{}{}", BASE, local))
    }

    fn type_assertion(subject: &NamedNode) -> Triple {
        Triple::new(
            subject.clone().into(),
            node(vocab::RDF_TYPE),
            node(vocab::SKOS_CONCEPT).into(),
        )
    }

    fn engine() -> Renumberer {
        engine_with_range(1_000_000, 1_000_010)
    }

    fn engine_with_range(low: u64, high: u64) -> Renumberer {
        let config = RenumberConfig {
            base_namespace: BASE.to_string(),
            id_low: low,
            id_high: high,
            ..RenumberConfig::default()
        };
        Renumberer::new(&config).unwrap()
    }

    fn resolved(outcome: &RenumberOutcome, original: &NamedNode) -> String {
        outcome
            .mapping
            .get(original.as_str())
            .unwrap()
            .as_str()
            .to_string()
    }

    #[test]
    fn test_worked_example_with_forward_reference() {
        // (C1, rdf:type, skos:Concept), (C2, skos:broader, C1),
        // (C2, rdf:type, skos:Concept): C1 is sighted first (as a
        // subject), C2 is referenced as a subject before its own type
        // assertion is reached.
        let c1 = concept("c1");
        let c2 = concept("c2");
        let mut input = TripleStore::new();
        input.insert(type_assertion(&c1));
        input.insert(Triple::new(
            c2.clone().into(),
            node(vocab::SKOS_BROADER),
            c1.clone().into(),
        ));
        input.insert(type_assertion(&c2));

        let outcome = engine().run(&input).unwrap();

        assert_eq!(outcome.report.concepts_renamed, 2);
        assert_eq!(outcome.graph.len(), 3);
        assert_eq!(resolved(&outcome, &c1), format!("{}1000000", BASE));
        assert_eq!(resolved(&outcome, &c2), format!("{}1000001", BASE));

        // The broader triple is fully renamed on both ends
        let broader = Triple::new(
            node(&format!("{}1000001", BASE)).into(),
            node(vocab::SKOS_BROADER),
            node(&format!("{}1000000", BASE)).into(),
        );
        assert!(outcome.graph.contains(&broader));
    }

    #[test]
    fn test_object_position_forward_reference() {
        // C1 appears only as an object before its defining triple.
        let c1 = concept("target");
        let c2 = concept("source");
        let mut input = TripleStore::new();
        input.insert(type_assertion(&c2));
        input.insert(Triple::new(
            c2.clone().into(),
            node(vocab::SKOS_BROADER),
            c1.clone().into(),
        ));
        input.insert(type_assertion(&c1));

        let outcome = engine().run(&input).unwrap();

        // Subject-and-object scan: C1 is assigned at its first sighting
        // in object position, before its type assertion is reached.
        assert_eq!(resolved(&outcome, &c2), format!("{}1000000", BASE));
        assert_eq!(resolved(&outcome, &c1), format!("{}1000001", BASE));

        // No occurrence of an original URI survives anywhere
        for triple in outcome.graph.iter() {
            if let Some(n) = triple.subject.iri() {
                assert!(!outcome.mapping.contains(n.as_str()));
            }
            if let Some(n) = triple.object.iri() {
                assert!(!outcome.mapping.contains(n.as_str()));
            }
        }
    }

    #[test]
    fn test_triple_count_preserved() {
        let mut input = TripleStore::new();
        for i in 0..10 {
            let c = concept(&format!("c{}", i));
            input.insert(type_assertion(&c));
            input.insert(Triple::new(
                c.clone().into(),
                node(vocab::SKOS_PREF_LABEL),
                Literal::new_simple(format!("label {}", i)).into(),
            ));
        }

        let outcome = engine().run(&input).unwrap();
        assert_eq!(outcome.graph.len(), input.len());
        assert_eq!(outcome.report.input_triples, outcome.report.output_triples);
        assert_eq!(outcome.report.concepts_renamed, 10);
    }

    #[test]
    fn test_untyped_uri_in_namespace_is_left_alone() {
        let scheme = concept("scheme");
        let c = concept("c");
        let mut input = TripleStore::new();
        input.insert(type_assertion(&c));
        // scheme has no skos:Concept assertion
        input.insert(Triple::new(
            c.clone().into(),
            node("http://www.w3.org/2004/02/skos/core#inScheme"),
            scheme.clone().into(),
        ));

        let outcome = engine().run(&input).unwrap();

        assert_eq!(outcome.report.concepts_renamed, 1);
        assert!(outcome.mapping.get(scheme.as_str()).is_none());
        let rewritten = Triple::new(
            node(&format!("{}1000000", BASE)).into(),
            node("http://www.w3.org/2004/02/skos/core#inScheme"),
            scheme.into(),
        );
        assert!(outcome.graph.contains(&rewritten));
    }

    #[test]
    fn test_foreign_namespace_and_literals_pass_through() {
        let c = concept("c");
        let foreign = node("http://dbpedia.org/resource/Detective");
        let mut input = TripleStore::new();
        input.insert(type_assertion(&c));
        input.insert(Triple::new(
            c.clone().into(),
            node("http://www.w3.org/2004/02/skos/core#exactMatch"),
            foreign.clone().into(),
        ));
        input.insert(Triple::new(
            c.clone().into(),
            node(vocab::SKOS_PREF_LABEL),
            Literal::new_language_tagged("detectives", "nl").unwrap().into(),
        ));

        let outcome = engine().run(&input).unwrap();

        let minted: Subject = node(&format!("{}1000000", BASE)).into();
        assert!(outcome.graph.contains(&Triple::new(
            minted.clone(),
            node("http://www.w3.org/2004/02/skos/core#exactMatch"),
            foreign.into(),
        )));
        assert!(outcome.graph.contains(&Triple::new(
            minted,
            node(vocab::SKOS_PREF_LABEL),
            Literal::new_language_tagged("detectives", "nl").unwrap().into(),
        )));
    }

    #[test]
    fn test_allocator_exhaustion_aborts() {
        let mut input = TripleStore::new();
        for i in 0..5 {
            input.insert(type_assertion(&concept(&format!("c{}", i))));
        }

        // Room for only three of the five concepts
        let err = engine_with_range(1_000_000, 1_000_003)
            .run(&input)
            .unwrap_err();
        assert!(matches!(err, RenumberError::AllocatorExhausted { .. }));
    }

    #[test]
    fn test_predicates_never_renamed() {
        // A concept URI that also appears in predicate position stays
        // put there; only subject and object positions are rewritten.
        let c = concept("c");
        let mut input = TripleStore::new();
        input.insert(type_assertion(&c));
        input.insert(Triple::new(
            node("http://other.org/x").into(),
            c.clone(),
            Literal::new_simple("y").into(),
        ));

        let outcome = engine().run(&input).unwrap();
        let kept = Triple::new(
            node("http://other.org/x").into(),
            c,
            Literal::new_simple("y").into(),
        );
        assert!(outcome.graph.contains(&kept));
    }

    #[test]
    fn test_empty_graph() {
        let outcome = engine().run(&TripleStore::new()).unwrap();
        assert!(outcome.graph.is_empty());
        assert!(outcome.mapping.is_empty());
        assert_eq!(outcome.report.concepts_renamed, 0);
    }

    #[test]
    fn test_repeated_runs_are_independent() {
        // The allocator and map live per run: a second run over the same
        // input starts from the bottom of the range again.
        let c = concept("c");
        let mut input = TripleStore::new();
        input.insert(type_assertion(&c));

        let eng = engine();
        let first = eng.run(&input).unwrap();
        let second = eng.run(&input).unwrap();
        assert_eq!(
            first.mapping.get(c.as_str()).unwrap(),
            second.mapping.get(c.as_str()).unwrap()
        );
    }

    #[test]
    fn test_prefix_match_mode() {
        let config = RenumberConfig {
            base_namespace: BASE.to_string(),
            id_low: 1_000_000,
            id_high: 1_000_010,
            namespace_match: NamespaceMatch::Prefix,
            ..RenumberConfig::default()
        };
        let eng = Renumberer::new(&config).unwrap();

        // Typed concept whose IRI merely embeds the base namespace
        let embedded = node(&format!("http://mirror.example.com/?src={}c", BASE));
        let mut input = TripleStore::new();
        input.insert(type_assertion(&embedded));

        let outcome = eng.run(&input).unwrap();
        assert_eq!(outcome.report.concepts_renamed, 0);
        assert!(outcome.graph.contains(&type_assertion(&embedded)));
    }

    #[test]
    fn test_blank_nodes_pass_through() {
        use crate::rdf::BlankNode;
        let c = concept("c");
        let blank = BlankNode::new("b0").unwrap();
        let mut input = TripleStore::new();
        input.insert(type_assertion(&c));
        input.insert(Triple::new(
            blank.clone().into(),
            node(vocab::SKOS_BROADER),
            c.clone().into(),
        ));

        let outcome = engine().run(&input).unwrap();
        let rewritten = Triple::new(
            blank.into(),
            node(vocab::SKOS_BROADER),
            Object::NamedNode(node(&format!("{}1000000", BASE))),
        );
        assert!(outcome.graph.contains(&rewritten));
    }
}
