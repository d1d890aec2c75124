//! Turtle 1.1 serializer for the schema graph.
//!
//! Produces one `@prefix` line per binding, then one block per subject in
//! first-insertion order. Predicates repeat in first-insertion order within a
//! block, and objects sharing a predicate are joined with ` , `.

use std::collections::HashMap;

use super::escape_literal;
use crate::graph::{Graph, Object};
use crate::model::iris::RDF_TYPE;

/// Serializes `graph` to a Turtle string.
///
/// # Errors
///
/// This function is infallible; it always returns a valid Turtle string.
#[must_use]
pub fn to_turtle(graph: &Graph) -> String {
    let mut out = String::with_capacity(16 * 1024);

    for ns in graph.bindings() {
        out.push_str(&format!("@prefix {}: <{}> .\n", ns.prefix, ns.iri));
    }
    out.push('\n');

    for (subject, predicates) in group(graph) {
        out.push_str(&name(graph, subject));
        let mut first = true;
        for (predicate, objects) in predicates {
            out.push_str(if first { "\n  " } else { " ;\n  " });
            first = false;
            if predicate == RDF_TYPE {
                out.push('a');
            } else {
                out.push_str(&name(graph, predicate));
            }
            out.push(' ');
            let rendered: Vec<String> = objects.iter().map(|o| object(graph, o)).collect();
            out.push_str(&rendered.join(" , "));
        }
        out.push_str(" .\n\n");
    }

    out
}

type PredicateObjects<'g> = Vec<(&'g str, Vec<&'g Object>)>;

/// Groups triples by subject, then predicate, keeping first-seen order at
/// both levels.
fn group(graph: &Graph) -> Vec<(&str, PredicateObjects<'_>)> {
    let mut subjects: Vec<(&str, PredicateObjects<'_>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for t in graph.iter() {
        let slot = *index.entry(t.subject.as_str()).or_insert_with(|| {
            subjects.push((t.subject.as_str(), Vec::new()));
            subjects.len() - 1
        });
        let predicates = &mut subjects[slot].1;
        match predicates.iter_mut().find(|(p, _)| *p == t.predicate) {
            Some((_, objects)) => objects.push(&t.object),
            None => predicates.push((t.predicate.as_str(), vec![&t.object])),
        }
    }
    subjects
}

fn name(graph: &Graph, iri: &str) -> String {
    graph.compact(iri).unwrap_or_else(|| format!("<{}>", iri))
}

fn object(graph: &Graph, object: &Object) -> String {
    match object {
        Object::Iri(iri) => name(graph, iri),
        Object::Literal(s) => format!("\"{}\"", escape_literal(s)),
        Object::Integer(i) => i.to_string(),
    }
}
