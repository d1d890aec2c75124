//! Core schema model types.
//!
//! These types describe the heating-topology vocabulary as typed Rust data.
//! A [`Schema`] is pure description; [`crate::builder`] turns it into a
//! deduplicated triple [`crate::graph::Graph`] that the serializers render.
//! The top-level entry point is [`Schema::grundfos()`](crate::Schema::grundfos).

/// A namespace binding: a short prefix and the IRI it abbreviates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    /// The prefix used in serializations (e.g., `"gfb"`).
    pub prefix: &'static str,
    /// The full IRI of the namespace, including its trailing `#` or `/`.
    pub iri: &'static str,
}

impl Namespace {
    /// Returns the full IRI of `local` within this namespace.
    #[must_use]
    pub fn term(&self, local: &str) -> String {
        format!("{}{}", self.iri, local)
    }
}

/// A reference to a class or property, either local to the schema namespace
/// or borrowed from an external vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ref {
    /// A term defined in the schema's own namespace.
    Local(&'static str),
    /// A term from the Brick schema.
    Brick(&'static str),
    /// Any other term, as a full IRI.
    Iri(&'static str),
}

impl Ref {
    /// Resolves this reference to a full IRI, using `local` for [`Ref::Local`].
    #[must_use]
    pub fn iri(&self, local: &Namespace) -> String {
        match self {
            Ref::Local(name) => local.term(name),
            Ref::Brick(name) => BRICK.term(name),
            Ref::Iri(iri) => (*iri).to_owned(),
        }
    }
}

/// How a property is typed (`rdf:type` object of the property node).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `rdf:Property`: a plain RDF property.
    Rdf,
    /// `owl:ObjectProperty`: relates two resources.
    Object,
    /// `owl:DatatypeProperty`: relates a resource to a literal.
    Datatype,
}

impl PropertyKind {
    /// Returns the full IRI of the class this kind denotes.
    #[must_use]
    pub fn type_iri(self) -> &'static str {
        match self {
            PropertyKind::Rdf => iris::RDF_PROPERTY,
            PropertyKind::Object => iris::OWL_OBJECT_PROPERTY,
            PropertyKind::Datatype => iris::OWL_DATATYPE_PROPERTY,
        }
    }
}

/// A class definition.
#[derive(Debug, Clone)]
pub struct Class {
    /// Local name within the schema namespace (e.g., `"Bypass_Valve"`).
    pub name: &'static str,
    /// Parent class (`rdfs:subClassOf`). Defaults to `owl:Class` when `None`.
    pub parent: Option<Ref>,
    /// Human-readable label, if any.
    pub label: Option<&'static str>,
}

/// A property definition.
#[derive(Debug, Clone)]
pub struct Property {
    /// Local name within the schema namespace.
    pub name: &'static str,
    /// One `rdf:type` triple is emitted per kind.
    pub kinds: &'static [PropertyKind],
    /// Classes the property may be asserted on (`rdfs:domain`).
    pub domain: &'static [Ref],
    /// Classes the property may point at (`rdfs:range`).
    pub range: &'static [Ref],
    /// Parent property (`rdfs:subPropertyOf`), if any.
    pub parent: Option<Ref>,
}

/// A min/max cardinality restriction on one (class, property) pair.
#[derive(Debug, Clone)]
pub struct Cardinality {
    /// Local name of the restricted class.
    pub class: &'static str,
    /// The restricted property.
    pub property: Ref,
    /// `owl:minCardinality`, if restricted.
    pub min: Option<u32>,
    /// `owl:maxCardinality`, if restricted.
    pub max: Option<u32>,
}

/// A complete schema description: namespace bindings, classes, properties
/// and cardinality restrictions.
#[derive(Debug, Clone)]
pub struct Schema {
    /// The namespace local class and property names live in.
    pub namespace: Namespace,
    /// Every prefix bound in serialized output, in declaration order.
    pub bindings: Vec<Namespace>,
    /// All classes, in emission order.
    pub classes: Vec<Class>,
    /// All properties, in emission order.
    pub properties: Vec<Property>,
    /// All cardinality restrictions, in emission order.
    pub cardinalities: Vec<Cardinality>,
}

impl Schema {
    /// Looks up a class by local name. Returns `None` if not found.
    #[must_use]
    pub fn find_class(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Looks up a property by local name. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns the full IRI of a local term.
    #[must_use]
    pub fn iri(&self, name: &str) -> String {
        self.namespace.term(name)
    }
}

/// `rdf:` binding.
pub const RDF: Namespace = Namespace {
    prefix: "rdf",
    iri: iris::RDF,
};
/// `rdfs:` binding.
pub const RDFS: Namespace = Namespace {
    prefix: "rdfs",
    iri: iris::RDFS,
};
/// `owl:` binding.
pub const OWL: Namespace = Namespace {
    prefix: "owl",
    iri: iris::OWL,
};
/// `xsd:` binding.
pub const XSD: Namespace = Namespace {
    prefix: "xsd",
    iri: iris::XSD,
};
/// `brick:` binding (Brick schema 1.1.0).
pub const BRICK: Namespace = Namespace {
    prefix: "brick",
    iri: iris::BRICK,
};

/// Standard IRI constants used by the schema builder and serializers.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// Brick schema namespace.
    pub const BRICK: &str = "https://brickschema.org/schema/1.1.0/Brick#";

    /// Grundstrup bidirectional heating ontology namespace.
    pub const NS_GFB: &str = "http://ss.sdu.dk/test/grundstrup-bidi-ontology/20200727/#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:label`. Labels use the `rdf:` namespace here, matching the
    /// instance data the builder writes and queries.
    pub const RDF_LABEL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#label";
    /// `rdf:Property`.
    pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:subPropertyOf`.
    pub const RDFS_SUBPROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    /// `rdfs:domain`.
    pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`.
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:ObjectProperty`.
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`.
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `owl:Restriction`.
    pub const OWL_RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
    /// `owl:equivalentClass`.
    pub const OWL_EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
    /// `owl:onProperty`.
    pub const OWL_ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
    /// `owl:minCardinality`.
    pub const OWL_MIN_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#minCardinality";
    /// `owl:maxCardinality`.
    pub const OWL_MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
}
