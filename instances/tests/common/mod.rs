//! In-memory RDF service double.
//!
//! Evaluates the structured requests directly: prefixed names are expanded
//! through the store's own namespace listing, `WHERE` patterns are matched as
//! a basic graph pattern, and query results come back as full IRIs the way a
//! real store reports them.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use gfb_instances::{
    NamespaceListing, NamespaceTable, Pattern, RdfService, ResultSet, SelectQuery, Term, Update,
};
use serde_json::Value;

pub const BIDI_NS: &str = "http://example.org/bidi#";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    Iri(String),
    Literal(String),
}

type Binding = HashMap<String, Node>;

#[derive(Debug, Default)]
struct State {
    triples: BTreeSet<(Node, Node, Node)>,
    queries: usize,
    updates: usize,
    stores: usize,
}

#[derive(Debug)]
pub struct MemoryStore {
    namespaces: BTreeMap<String, String>,
    state: Mutex<State>,
    pub reject_updates: bool,
    pub reject_namespaces: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        let namespaces = [
            (BIDI_NS, "n"),
            ("http://ss.sdu.dk/test/grundstrup-bidi-ontology/20200727/#", "gfb"),
            ("http://www.w3.org/1999/02/22-rdf-syntax-ns#", "rdf"),
            ("https://brickschema.org/schema/1.1.0/Brick#", "brick"),
            ("http://example.org/ns#", "ex"),
        ]
        .into_iter()
        .map(|(iri, alias)| (iri.to_owned(), alias.to_owned()))
        .collect();
        Self {
            namespaces,
            state: Mutex::new(State::default()),
            reject_updates: false,
            reject_namespaces: false,
        }
    }

    pub fn table(&self) -> NamespaceTable {
        NamespaceTable::new(self.namespaces.clone())
    }

    /// Expands a ground term; `None` for variables.
    pub fn expand(&self, term: &Term) -> Option<Node> {
        match term {
            Term::Variable(_) => None,
            Term::Iri(iri) => Some(Node::Iri(iri.clone())),
            Term::Literal(value) => Some(Node::Literal(value.clone())),
            Term::Name(name) => {
                let expanded = name.split_once(':').and_then(|(alias, local)| {
                    self.namespaces
                        .iter()
                        .find(|(_, a)| a.as_str() == alias)
                        .map(|(iri, _)| format!("{}{}", iri, local))
                });
                Some(Node::Iri(expanded.unwrap_or_else(|| name.clone())))
            }
        }
    }

    /// Inserts a ground triple directly, bypassing the request path.
    pub fn seed(&self, s: Term, p: Term, o: Term) {
        let triple = (
            self.expand(&s).unwrap(),
            self.expand(&p).unwrap(),
            self.expand(&o).unwrap(),
        );
        self.state.lock().unwrap().triples.insert(triple);
    }

    pub fn contains(&self, s: &Term, p: &Term, o: &Term) -> bool {
        let triple = (
            self.expand(s).unwrap(),
            self.expand(p).unwrap(),
            self.expand(o).unwrap(),
        );
        self.state.lock().unwrap().triples.contains(&triple)
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().triples.len()
    }

    /// Distinct subjects carrying an `rdf:type`.
    pub fn typed_nodes(&self) -> usize {
        let rdf_type = self.expand(&Term::name("rdf:type")).unwrap();
        self.state
            .lock()
            .unwrap()
            .triples
            .iter()
            .filter(|(_, p, _)| *p == rdf_type)
            .map(|(s, _, _)| s.clone())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Triples that are neither `rdf:type` nor `rdf:label`.
    pub fn edges(&self) -> usize {
        let rdf_type = self.expand(&Term::name("rdf:type")).unwrap();
        let rdf_label = self.expand(&Term::name("rdf:label")).unwrap();
        self.state
            .lock()
            .unwrap()
            .triples
            .iter()
            .filter(|(_, p, _)| *p != rdf_type && *p != rdf_label)
            .count()
    }

    pub fn query_count(&self) -> usize {
        self.state.lock().unwrap().queries
    }

    pub fn update_count(&self) -> usize {
        self.state.lock().unwrap().updates
    }

    pub fn store_count(&self) -> usize {
        self.state.lock().unwrap().stores
    }

    fn unify(&self, term: &Term, node: &Node, binding: &mut Binding) -> bool {
        match term {
            Term::Variable(v) => match binding.get(v) {
                Some(bound) => bound == node,
                None => {
                    binding.insert(v.clone(), node.clone());
                    true
                }
            },
            ground => self.expand(ground).as_ref() == Some(node),
        }
    }

    fn solutions(&self, triples: &BTreeSet<(Node, Node, Node)>, patterns: &[Pattern]) -> Vec<Binding> {
        let mut solutions = vec![Binding::new()];
        for pattern in patterns {
            let mut next = Vec::new();
            for binding in &solutions {
                for (s, p, o) in triples {
                    let mut b = binding.clone();
                    if self.unify(&pattern.subject, s, &mut b)
                        && self.unify(&pattern.predicate, p, &mut b)
                        && self.unify(&pattern.object, o, &mut b)
                    {
                        next.push(b);
                    }
                }
            }
            solutions = next;
        }
        solutions
    }

    fn instantiate(&self, term: &Term, binding: &Binding) -> Option<Node> {
        match term {
            Term::Variable(v) => binding.get(v).cloned(),
            ground => self.expand(ground),
        }
    }

    fn instantiate_pattern(&self, p: &Pattern, b: &Binding) -> Option<(Node, Node, Node)> {
        Some((
            self.instantiate(&p.subject, b)?,
            self.instantiate(&p.predicate, b)?,
            self.instantiate(&p.object, b)?,
        ))
    }
}

fn render(node: &Node) -> Value {
    match node {
        Node::Iri(iri) => Value::String(iri.clone()),
        Node::Literal(value) => Value::String(value.clone()),
    }
}

#[async_trait]
impl RdfService for MemoryStore {
    async fn namespaces(&self) -> gfb_instances::Result<NamespaceListing> {
        Ok(NamespaceListing {
            success: !self.reject_namespaces,
            namespaces: self.namespaces.clone(),
        })
    }

    async fn query(&self, query: &SelectQuery) -> gfb_instances::Result<ResultSet> {
        let mut state = self.state.lock().unwrap();
        state.queries += 1;
        let rows = self
            .solutions(&state.triples, &query.patterns)
            .iter()
            .map(|b| {
                query
                    .variables
                    .iter()
                    .map(|v| b.get(v).map_or(Value::Null, render))
                    .collect()
            })
            .collect();
        Ok(ResultSet::new(rows))
    }

    async fn update(&self, update: &Update) -> gfb_instances::Result<bool> {
        let mut state = self.state.lock().unwrap();
        state.updates += 1;
        if self.reject_updates {
            return Ok(false);
        }
        let solutions = self.solutions(&state.triples, &update.filter);
        for b in &solutions {
            for p in &update.delete {
                if let Some(t) = self.instantiate_pattern(p, b) {
                    state.triples.remove(&t);
                }
            }
        }
        for b in &solutions {
            for p in &update.insert {
                if let Some(t) = self.instantiate_pattern(p, b) {
                    state.triples.insert(t);
                }
            }
        }
        Ok(true)
    }

    async fn store(&self) -> gfb_instances::Result<()> {
        self.state.lock().unwrap().stores += 1;
        Ok(())
    }
}
