//! `gfb:` namespace: Grundstrup bidirectional district-heating topology.
//!
//! Equipment and sensor classes specialise Brick; the `feeds*Water`
//! property tree refines `brick:feeds` by medium (heated, district heated,
//! domestic heated water) and by leg (supply, return).

use crate::model::iris::NS_GFB;
use crate::model::PropertyKind::Object;
use crate::model::{
    Cardinality, Class, Namespace, Property, Ref, Schema, BRICK, OWL, RDF, RDFS, XSD,
};

/// The `gfb:` binding.
pub const GFB: Namespace = Namespace {
    prefix: "gfb",
    iri: NS_GFB,
};

/// Returns the `gfb:` schema.
#[must_use]
pub fn schema() -> Schema {
    Schema {
        namespace: GFB,
        bindings: vec![RDF, RDFS, OWL, XSD, BRICK],
        classes: classes(),
        properties: properties(),
        cardinalities: cardinalities(),
    }
}

fn class(name: &'static str, parent: Ref, label: &'static str) -> Class {
    Class {
        name,
        parent: Some(parent),
        label: Some(label),
    }
}

fn classes() -> Vec<Class> {
    use Ref::{Brick, Local};
    vec![
        class("Heat_Exchanger", Brick("Heat_Exchanger"), "Heat exchanger"),
        class("Hot_Water_Tank", Local("Heat_Exchanger"), "Domestic hot water tank"),
        class("District_Heat", Brick("Equipment"), "District heating supply"),
        class("Heat_Sensor", Brick("Sensor"), "Heat meter virtual sensor"),
        class("Heat_Meter", Local("Heat_Sensor"), "Heat meter"),
        class("Water_Flow_Sensor", Brick("Flow_Sensor"), "Water flow sensor"),
        class(
            "Water_Temperature_Sensor",
            Brick("Temperature_Sensor"),
            "Water temperature sensor",
        ),
        class(
            "Water_Pressure_Sensor",
            Brick("Pressure_Sensor"),
            "Water pressure sensor",
        ),
        class(
            "Differential_Pressure_Sensor",
            Brick("Differential_Pressure_Sensor"),
            "Differential pressure sensor",
        ),
        class(
            "Water_Differential_Pressure_Sensor",
            Local("Differential_Pressure_Sensor"),
            "Water differential pressure sensor",
        ),
        class("Pump", Brick("Pump"), "Water pump"),
        class("Valve", Brick("Valve"), "Electronically controlled valve"),
        class(
            "Bypass_Valve",
            Local("Valve"),
            "Electronically controlled bypass valve",
        ),
        class("Radiator", Brick("Radiator"), "Radiator"),
    ]
}

/// A sub-property of `parent` with no domain or range of its own.
fn refinement(name: &'static str, parent: &'static str) -> Property {
    Property {
        name,
        kinds: &[Object],
        domain: &[],
        range: &[],
        parent: Some(Ref::Local(parent)),
    }
}

fn properties() -> Vec<Property> {
    const EQUIPMENT_OR_POINT: &[Ref] = &[Ref::Brick("Equipment"), Ref::Brick("Point")];
    vec![
        Property {
            name: "controls",
            kinds: &[Object],
            domain: &[Ref::Local("Water_Temperature_Sensor")],
            range: &[Ref::Local("Heat_Sensor")],
            parent: Some(Ref::Brick("controls")),
        },
        Property {
            name: "feedsWater",
            kinds: &[Object],
            domain: EQUIPMENT_OR_POINT,
            range: EQUIPMENT_OR_POINT,
            parent: Some(Ref::Brick("feeds")),
        },
        refinement("feedsHeatedWater", "feedsWater"),
        refinement("feedsSupplyHeatedWater", "feedsHeatedWater"),
        refinement("feedsReturnHeatedWater", "feedsHeatedWater"),
        refinement("feedsDistrictHeatedWater", "feedsHeatedWater"),
        refinement("feedsSupplyDistrictHeatedWater", "feedsDistrictHeatedWater"),
        refinement("feedsReturnDistrictHeatedWater", "feedsDistrictHeatedWater"),
        refinement("feedsDomesticHeatedWater", "feedsHeatedWater"),
        refinement("feedsSupplyDomesticHeatedWater", "feedsDomesticHeatedWater"),
        refinement("feedsReturnDomesticHeatedWater", "feedsDomesticHeatedWater"),
    ]
}

fn cardinalities() -> Vec<Cardinality> {
    // A bypass valve sits on exactly one supply leg.
    vec![Cardinality {
        class: "Bypass_Valve",
        property: Ref::Local("feedsSupplyHeatedWater"),
        min: Some(1),
        max: Some(1),
    }]
}
