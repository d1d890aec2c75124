//! Schema-to-graph builder.
//!
//! Every helper funnels through [`Graph::insert`], so repeated declarations
//! (a shared domain class, a parent property declared twice) collapse into a
//! single triple.

use crate::graph::{Graph, Object, Triple};
use crate::model::iris::{
    OWL_CLASS, OWL_EQUIVALENT_CLASS, OWL_MAX_CARDINALITY, OWL_MIN_CARDINALITY, OWL_ON_PROPERTY,
    OWL_RESTRICTION, RDFS_DOMAIN, RDFS_RANGE, RDFS_SUBCLASS_OF, RDFS_SUBPROPERTY_OF, RDF_LABEL,
    RDF_TYPE,
};
use crate::model::{Cardinality, Class, Namespace, Property, Ref, Schema};

/// Incrementally builds the schema graph for one local namespace.
#[derive(Debug)]
pub struct SchemaBuilder {
    namespace: Namespace,
    graph: Graph,
}

impl SchemaBuilder {
    /// Creates a builder whose local terms live in `namespace`, with
    /// `bindings` bound for serialization.
    #[must_use]
    pub fn new(namespace: Namespace, bindings: &[Namespace]) -> Self {
        let mut graph = Graph::new();
        for ns in bindings {
            graph.bind(*ns);
        }
        graph.bind(namespace);
        Self { namespace, graph }
    }

    fn insert(&mut self, subject: &str, predicate: &str, object: Object) {
        self.graph.insert(Triple::new(subject, predicate, object));
    }

    /// Declares a class as a subclass of its parent (or `owl:Class`) and
    /// attaches its label. Returns the class IRI.
    pub fn create_class(&mut self, class: &Class) -> String {
        let entity = self.namespace.term(class.name);
        let parent = class
            .parent
            .map_or_else(|| OWL_CLASS.to_owned(), |p| p.iri(&self.namespace));
        self.insert(&entity, RDFS_SUBCLASS_OF, Object::Iri(parent));
        if let Some(label) = class.label {
            self.insert(&entity, RDF_LABEL, Object::literal(label));
        }
        entity
    }

    /// Declares a property with its kinds, optional parent and domain/range
    /// restrictions. Returns the property IRI.
    pub fn create_property(&mut self, property: &Property) -> String {
        let entity = self.namespace.term(property.name);
        for kind in property.kinds {
            self.insert(&entity, RDF_TYPE, Object::iri(kind.type_iri()));
        }
        if let Some(parent) = property.parent {
            let parent = parent.iri(&self.namespace);
            self.insert(&entity, RDFS_SUBPROPERTY_OF, Object::Iri(parent));
        }
        self.restrict(&entity, property.domain, property.range);
        entity
    }

    /// Adds `rdfs:domain` triples for each of `subjects` and `rdfs:range`
    /// triples for each of `objects`.
    pub fn restrict(&mut self, property: &str, subjects: &[Ref], objects: &[Ref]) {
        for sub in subjects {
            let sub = sub.iri(&self.namespace);
            self.insert(property, RDFS_DOMAIN, Object::Iri(sub));
        }
        for obj in objects {
            let obj = obj.iri(&self.namespace);
            self.insert(property, RDFS_RANGE, Object::Iri(obj));
        }
    }

    /// Emits an `owl:Restriction` node per bound and ties it to the class
    /// with `owl:equivalentClass`.
    ///
    /// Restriction nodes are named `_{class}_{property}_cardmin` /
    /// `_{class}_{property}_cardmax` in the local namespace.
    pub fn set_cardinality(&mut self, cardinality: &Cardinality) {
        let class = self.namespace.term(cardinality.class);
        let property = cardinality.property.iri(&self.namespace);
        let property_local = local_name(&property);
        let bounds = [
            ("cardmin", OWL_MIN_CARDINALITY, cardinality.min),
            ("cardmax", OWL_MAX_CARDINALITY, cardinality.max),
        ];
        for (suffix, predicate, bound) in bounds {
            let Some(bound) = bound else { continue };
            let node = self.namespace.term(&format!(
                "_{}_{}_{}",
                cardinality.class, property_local, suffix
            ));
            self.insert(&class, OWL_EQUIVALENT_CLASS, Object::iri(&node));
            self.insert(&node, RDF_TYPE, Object::iri(OWL_RESTRICTION));
            self.insert(&node, OWL_ON_PROPERTY, Object::iri(&property));
            self.insert(&node, predicate, Object::Integer(bound));
        }
    }

    /// Finishes the build.
    #[must_use]
    pub fn finish(self) -> Graph {
        self.graph
    }
}

/// Builds the complete graph for `schema`: classes, then properties, then
/// cardinality restrictions.
#[must_use]
pub fn build(schema: &Schema) -> Graph {
    let mut builder = SchemaBuilder::new(schema.namespace, &schema.bindings);
    for class in &schema.classes {
        builder.create_class(class);
    }
    for property in &schema.properties {
        builder.create_property(property);
    }
    for cardinality in &schema.cardinalities {
        builder.set_cardinality(cardinality);
    }
    builder.finish()
}

fn local_name(iri: &str) -> &str {
    iri.rsplit(|c| c == '#' || c == '/').next().unwrap_or(iri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropertyKind, BRICK, OWL, RDF, RDFS};

    const EX: Namespace = Namespace {
        prefix: "ex",
        iri: "http://example.org/ns#",
    };

    fn builder() -> SchemaBuilder {
        SchemaBuilder::new(EX, &[RDF, RDFS, OWL, BRICK])
    }

    #[test]
    fn class_without_parent_subclasses_owl_class() {
        let mut b = builder();
        let iri = b.create_class(&Class {
            name: "Thing",
            parent: None,
            label: None,
        });
        let g = b.finish();
        assert_eq!(iri, "http://example.org/ns#Thing");
        assert!(g.contains(&Triple::new(&iri, RDFS_SUBCLASS_OF, Object::iri(OWL_CLASS))));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn shared_domain_is_emitted_once() {
        let mut b = builder();
        let prop = Property {
            name: "feeds",
            kinds: &[PropertyKind::Object],
            domain: &[Ref::Brick("Equipment"), Ref::Brick("Equipment")],
            range: &[],
            parent: None,
        };
        b.create_property(&prop);
        b.create_property(&prop);
        // one rdf:type + one rdfs:domain
        assert_eq!(b.finish().len(), 2);
    }

    #[test]
    fn cardinality_nodes_are_named_per_property() {
        let mut b = builder();
        for property in ["http://example.org/ns#a", "http://example.org/ns#b"] {
            b.set_cardinality(&Cardinality {
                class: "Valve",
                property: Ref::Iri(property),
                min: Some(1),
                max: None,
            });
        }
        let g = b.finish();
        assert!(g.contains(&Triple::new(
            "http://example.org/ns#_Valve_a_cardmin",
            OWL_MIN_CARDINALITY,
            Object::Integer(1)
        )));
        assert!(g.contains(&Triple::new(
            "http://example.org/ns#_Valve_b_cardmin",
            OWL_MIN_CARDINALITY,
            Object::Integer(1)
        )));
        // 2 restrictions x (equivalentClass, type, onProperty, minCardinality)
        assert_eq!(g.len(), 8);
    }

    #[test]
    fn unset_bounds_emit_nothing() {
        let mut b = builder();
        b.set_cardinality(&Cardinality {
            class: "Valve",
            property: Ref::Local("feeds"),
            min: None,
            max: None,
        });
        assert!(b.finish().is_empty());
    }
}
