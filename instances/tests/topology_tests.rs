//! End-to-end population of the bidi topology against the in-memory store.

mod common;

use common::{MemoryStore, BIDI_NS};
use gfb_instances::{builder, Error, Model, Term, Topology};
use gfb_ontology::Schema;

#[tokio::test]
async fn populates_empty_store() {
    let store = MemoryStore::new();
    let topology = Topology::bidi();

    let report = builder::run(&store, BIDI_NS, &topology).await.unwrap();

    assert_eq!(report.instances_created, 24);
    assert_eq!(report.instances_found, 0);
    assert_eq!(report.edges_asserted, 30);
    assert_eq!(report.edges_replaced, 0);
    assert_eq!(report.rejected_updates, 0);
    assert!(report.unresolved.is_empty());
    assert_eq!(store.typed_nodes(), 24);
    assert_eq!(store.edges(), 30);
    assert_eq!(store.store_count(), 1);
}

#[tokio::test]
async fn rerun_adds_nothing() {
    let store = MemoryStore::new();
    let topology = Topology::bidi();
    builder::run(&store, BIDI_NS, &topology).await.unwrap();
    let triples = store.len();

    let report = builder::run(&store, BIDI_NS, &topology).await.unwrap();

    assert_eq!(report.instances_created, 0);
    assert_eq!(report.instances_found, 24);
    assert_eq!(store.len(), triples);
    assert_eq!(store.typed_nodes(), 24);
    assert_eq!(store.edges(), 30);
}

#[tokio::test]
async fn edges_use_created_identifiers() {
    let store = MemoryStore::new();
    builder::run(&store, BIDI_NS, &Topology::bidi()).await.unwrap();

    assert!(store.contains(
        &Term::name("n:_district_heat"),
        &Term::name("gfb:feedsSupplyDistrictHeatedWater"),
        &Term::name("n:_district_supply_temp"),
    ));
    assert!(store.contains(
        &Term::name("n:_hot_water_tank_temperature"),
        &Term::name("brick:isPointOf"),
        &Term::name("n:_hot_water_tank"),
    ));
}

#[tokio::test]
async fn rejected_namespace_lookup_stops_before_any_write() {
    let mut store = MemoryStore::new();
    store.reject_namespaces = true;

    let err = builder::run(&store, BIDI_NS, &Topology::bidi())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NamespacesRejected));
    assert_eq!(store.query_count(), 0);
    assert_eq!(store.update_count(), 0);
    assert_eq!(store.store_count(), 0);
}

#[tokio::test]
async fn populate_validates_before_requests() {
    use gfb_instances::{EdgeSpec, InstanceSpec};
    static INSTANCES: &[InstanceSpec] = &[InstanceSpec {
        class: "gfb:Pump",
        label: "pump",
    }];
    static EDGES: &[EdgeSpec] = &[EdgeSpec {
        subject: "pump",
        predicate: "gfb:feedsWater",
        object: "nowhere",
        exclusive: false,
    }];
    let topology = Topology {
        prefix: "n:",
        instances: INSTANCES,
        edges: EDGES,
    };
    let store = MemoryStore::new();
    let table = store.table();

    let err = builder::populate(&Model::new(&store, &table), &topology)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnknownInstance { .. }));
    assert_eq!(store.query_count(), 0);
}

#[test]
fn every_gfb_term_is_defined_by_the_schema() {
    let schema = Schema::grundfos();
    let topology = Topology::bidi();
    for class in topology.classes() {
        let local = class.strip_prefix("gfb:").unwrap();
        assert!(schema.find_class(local).is_some(), "undefined class {class}");
    }
    for predicate in topology.predicates() {
        if let Some(local) = predicate.strip_prefix("gfb:") {
            assert!(
                schema.find_property(local).is_some(),
                "undefined property {predicate}"
            );
        }
    }
}

#[test]
fn topology_respects_schema_cardinalities() {
    let schema = Schema::grundfos();
    let topology = Topology::bidi();
    assert!(!schema.cardinalities.is_empty());
    for card in &schema.cardinalities {
        let class = format!("gfb:{}", card.class);
        let predicate = format!(
            "gfb:{}",
            card.property.iri(&schema.namespace).rsplit('#').next().unwrap()
        );
        for inst in topology.instances.iter().filter(|i| i.class == class) {
            let count = topology
                .edges
                .iter()
                .filter(|e| e.subject == inst.label && e.predicate == predicate)
                .count() as u32;
            if let Some(min) = card.min {
                assert!(count >= min, "{} has {count} {predicate} edges", inst.label);
            }
            if let Some(max) = card.max {
                assert!(count <= max, "{} has {count} {predicate} edges", inst.label);
            }
        }
    }
}
