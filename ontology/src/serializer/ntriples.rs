//! N-Triples serializer for the schema graph.
//!
//! Produces a valid N-Triples document (one triple per line, absolute IRIs).
//! N-Triples is suitable for streaming, bulk loading, and diff-friendly storage.

use super::escape_literal;
use crate::graph::{Graph, Object};
use crate::model::iris::XSD_INTEGER;

/// Serializes `graph` to an N-Triples string.
///
/// # Errors
///
/// This function is infallible; it always returns a valid N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(32 * 1024);
    for t in graph.iter() {
        out.push('<');
        out.push_str(&t.subject);
        out.push_str("> <");
        out.push_str(&t.predicate);
        out.push_str("> ");
        match &t.object {
            Object::Iri(iri) => {
                out.push('<');
                out.push_str(iri);
                out.push('>');
            }
            Object::Literal(s) => {
                out.push('"');
                out.push_str(&escape_literal(s));
                out.push('"');
            }
            Object::Integer(i) => out.push_str(&format!("\"{}\"^^<{}>", i, XSD_INTEGER)),
        }
        out.push_str(" .\n");
    }
    out
}
