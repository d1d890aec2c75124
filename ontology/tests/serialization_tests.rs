//! Well-formedness and determinism of the emitted schema documents.

use gfb_ontology::serializer::{ntriples, turtle};
use gfb_ontology::Schema;
use sophia_api::source::TripleSource;
use sophia_api::term::SimpleTerm;

type Triples = Vec<[SimpleTerm<'static>; 3]>;

#[test]
fn turtle_parses_with_every_triple() {
    let graph = Schema::grundfos().to_graph();
    let ttl = turtle::to_turtle(&graph);
    let parsed: Triples = sophia_turtle::parser::turtle::parse_str(&ttl)
        .collect_triples()
        .unwrap();
    assert_eq!(parsed.len(), graph.len());
}

#[test]
fn ntriples_parses_with_every_triple() {
    let graph = Schema::grundfos().to_graph();
    let nt = ntriples::to_ntriples(&graph);
    let parsed: Triples = sophia_turtle::parser::nt::parse_str(&nt)
        .collect_triples()
        .unwrap();
    assert_eq!(parsed.len(), graph.len());
}

#[test]
fn repeated_builds_are_byte_identical() {
    let first = turtle::to_turtle(&Schema::grundfos().to_graph());
    let second = turtle::to_turtle(&Schema::grundfos().to_graph());
    assert_eq!(first, second);

    let fresh = gfb_ontology::namespaces::gfb::schema();
    assert_eq!(turtle::to_turtle(&fresh.to_graph()), first);
}
