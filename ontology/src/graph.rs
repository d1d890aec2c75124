//! In-memory triple graph with set semantics and stable insertion order.
//!
//! Serializers walk triples in the order they were first inserted, so two
//! builds from the same [`crate::Schema`] render byte-identical documents.

use std::collections::HashSet;

use crate::model::Namespace;

/// The object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Object {
    /// A full IRI.
    Iri(String),
    /// A plain string literal.
    Literal(String),
    /// An `xsd:integer` literal.
    Integer(u32),
}

impl Object {
    /// Builds an IRI object.
    pub fn iri(iri: impl Into<String>) -> Self {
        Object::Iri(iri.into())
    }

    /// Builds a plain literal object.
    pub fn literal(value: impl Into<String>) -> Self {
        Object::Literal(value.into())
    }
}

/// A single RDF statement. Subjects and predicates are always full IRIs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject IRI.
    pub subject: String,
    /// Predicate IRI.
    pub predicate: String,
    /// Object term.
    pub object: Object,
}

impl Triple {
    /// Builds a triple from its three positions.
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Object) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

/// A set of triples plus the namespace bindings used to abbreviate them.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    bindings: Vec<Namespace>,
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
}

impl Graph {
    /// Creates an empty graph with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a prefix. Re-binding an already bound prefix is a no-op.
    pub fn bind(&mut self, namespace: Namespace) {
        if !self.bindings.iter().any(|b| b.prefix == namespace.prefix) {
            self.bindings.push(namespace);
        }
    }

    /// Returns the bound namespaces in binding order.
    #[must_use]
    pub fn bindings(&self) -> &[Namespace] {
        &self.bindings
    }

    /// Inserts `triple` unless an identical triple is already present.
    ///
    /// Returns `true` if the graph changed.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Returns `true` if the graph holds `triple`.
    #[must_use]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.seen.contains(triple)
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns `true` if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Abbreviates `iri` to `prefix:local` using the first binding whose
    /// namespace is a prefix of it and whose remainder is a valid local name.
    #[must_use]
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.bindings.iter().find_map(|ns| {
            let local = iri.strip_prefix(ns.iri)?;
            is_local_name(local).then(|| format!("{}:{}", ns.prefix, local))
        })
    }
}

/// A conservative subset of Turtle's `PN_LOCAL`: ASCII alphanumerics,
/// `_` and `-`, not starting with `-`.
fn is_local_name(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('-')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
