//! Schema namespace modules.
//!
//! Each sub-module encodes one local vocabulary as Rust static data. External
//! vocabularies (Brick, RDF, RDFS, OWL, XSD) are only referenced, never
//! redefined.

pub mod gfb;
