//! Serializers for the schema graph.
//!
//! Two serialization formats are supported:
//! - **Turtle** ([`turtle`]): the default artifact, abbreviated with the bound prefixes
//! - **N-Triples** ([`ntriples`]): one absolute triple per line, for bulk loading and diffs

pub mod ntriples;
pub mod turtle;

/// Escapes a string for use inside a double-quoted Turtle or N-Triples literal.
pub(crate) fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
