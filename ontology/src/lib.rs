//! Grundstrup heating-topology ontology encoded as typed Rust data.
//!
//! The `gfb-ontology` crate provides the `gfb:` schema (14 classes, 11
//! properties and one cardinality restriction specialising the Brick
//! vocabulary) as Rust data, a deduplicating graph builder, and serializers
//! that produce Turtle and N-Triples output.
//!
//! # Entry Point
//!
//! ```
//! let schema = gfb_ontology::Schema::grundfos();
//! assert_eq!(schema.classes.len(), 14);
//! ```
//!
//! # Serialization
//!
//! ```
//! let graph = gfb_ontology::Schema::grundfos().to_graph();
//! let turtle = gfb_ontology::serializer::turtle::to_turtle(&graph);
//! let ntriples = gfb_ontology::serializer::ntriples::to_ntriples(&graph);
//! assert!(turtle.contains("gfb:Bypass_Valve"));
//! assert_eq!(ntriples.lines().count(), graph.len());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod graph;
pub mod model;
pub mod namespaces;
pub mod serializer;

pub use graph::{Graph, Object, Triple};
pub use model::{Cardinality, Class, Namespace, Property, PropertyKind, Ref, Schema};

impl Schema {
    /// Returns the complete `gfb:` schema.
    #[must_use]
    pub fn grundfos() -> &'static Schema {
        static SCHEMA: std::sync::OnceLock<Schema> = std::sync::OnceLock::new();
        SCHEMA.get_or_init(namespaces::gfb::schema)
    }

    /// Builds the deduplicated triple graph for this schema.
    #[must_use]
    pub fn to_graph(&self) -> Graph {
        builder::build(self)
    }
}
