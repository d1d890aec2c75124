//! Declarative instance topologies.
//!
//! A [`Topology`] lists the typed nodes to ensure and the directed edges to
//! assert between them. Edges refer to nodes by key (the raw label), so the
//! whole graph can be checked with [`Topology::validate`] before any request
//! is made.

use std::collections::HashSet;

use crate::error::{Error, Result};

/// One node to ensure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceSpec {
    /// Schema class as a prefixed name, e.g. `gfb:Valve`.
    pub class: &'static str,
    /// Raw (unescaped) label; also the key edges use.
    pub label: &'static str,
}

/// One edge to assert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    /// Key of the subject instance.
    pub subject: &'static str,
    /// Predicate as a prefixed name.
    pub predicate: &'static str,
    /// Key of the object instance.
    pub object: &'static str,
    /// Replace any existing objects of `(subject, predicate)`.
    pub exclusive: bool,
}

/// A fixed set of instances and edges.
#[derive(Debug, Clone, Copy)]
pub struct Topology {
    /// Prefix new instance identifiers are built from.
    pub prefix: &'static str,
    /// Instances, ensured in order.
    pub instances: &'static [InstanceSpec],
    /// Edges, asserted in order after all instances.
    pub edges: &'static [EdgeSpec],
}

impl Topology {
    /// Checks that keys are unique and every edge endpoint is declared.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateInstance`] or [`Error::UnknownInstance`].
    pub fn validate(&self) -> Result<()> {
        let mut keys = HashSet::new();
        for inst in self.instances {
            if !keys.insert(inst.label) {
                return Err(Error::DuplicateInstance(inst.label.to_owned()));
            }
        }
        for edge in self.edges {
            for key in [edge.subject, edge.object] {
                if !keys.contains(key) {
                    return Err(Error::UnknownInstance {
                        subject: edge.subject.to_owned(),
                        predicate: edge.predicate.to_owned(),
                        object: edge.object.to_owned(),
                        key: key.to_owned(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Distinct classes referenced by the instances, in first-use order.
    #[must_use]
    pub fn classes(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        self.instances
            .iter()
            .map(|i| i.class)
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Distinct predicates referenced by the edges, in first-use order.
    #[must_use]
    pub fn predicates(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        self.edges
            .iter()
            .map(|e| e.predicate)
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// The Grundstrup bidirectional district-heating installation: district
    /// supply/return through the heat exchanger, three heated loops (two
    /// radiator circuits and the hot water tank).
    #[must_use]
    pub fn bidi() -> Topology {
        Topology {
            prefix: "n:",
            instances: BIDI_INSTANCES,
            edges: BIDI_EDGES,
        }
    }
}

const fn inst(class: &'static str, label: &'static str) -> InstanceSpec {
    InstanceSpec { class, label }
}

const fn feeds(subject: &'static str, predicate: &'static str, object: &'static str) -> EdgeSpec {
    EdgeSpec {
        subject,
        predicate,
        object,
        exclusive: false,
    }
}

const SUPPLY_DISTRICT: &str = "gfb:feedsSupplyDistrictHeatedWater";
const RETURN_DISTRICT: &str = "gfb:feedsReturnDistrictHeatedWater";
const SUPPLY_HEATED: &str = "gfb:feedsSupplyHeatedWater";
const RETURN_HEATED: &str = "gfb:feedsReturnHeatedWater";
const CONTROLS: &str = "gfb:controls";

static BIDI_INSTANCES: &[InstanceSpec] = &[
    inst("gfb:District_Heat", "district_heat"),
    inst("gfb:Heat_Exchanger", "heat_exchanger"),
    inst("gfb:Hot_Water_Tank", "hot_water_tank"),
    inst("gfb:Water_Temperature_Sensor", "hot_water_tank_temperature"),
    // district side
    inst("gfb:Water_Flow_Sensor", "district_flow"),
    inst("gfb:Water_Temperature_Sensor", "district_return_temp"),
    inst("gfb:Water_Temperature_Sensor", "district_supply_temp"),
    inst("gfb:Valve", "district_return_valve"),
    inst("gfb:Water_Pressure_Sensor", "district_return_pressure"),
    inst("gfb:Water_Pressure_Sensor", "district_supply_pressure"),
    inst("gfb:Water_Differential_Pressure_Sensor", "district_differential_pressure"),
    inst("gfb:Heat_Meter", "district_heat_meter"),
    // heated side
    inst("gfb:Water_Temperature_Sensor", "heated_supply_temp"),
    inst("gfb:Valve", "heated_loop1_supply_valve"),
    inst("gfb:Water_Temperature_Sensor", "heated_loop1_supply_temp"),
    inst("gfb:Pump", "heated_loop1_supply_pump"),
    inst("gfb:Radiator", "heated_loop1_radiator"),
    inst("gfb:Bypass_Valve", "heated_loop2_supply_bypass_valve"),
    inst("gfb:Water_Temperature_Sensor", "heated_loop2_supply_temp"),
    inst("gfb:Pump", "heated_loop2_return_pump"),
    inst("gfb:Water_Temperature_Sensor", "heated_loop2_return_prebypass_temp"),
    inst("gfb:Water_Temperature_Sensor", "heated_loop2_return_postbypass_temp"),
    inst("gfb:Radiator", "heated_loop2_radiator"),
    inst("gfb:Valve", "heated_loop3_return_valve"),
];

static BIDI_EDGES: &[EdgeSpec] = &[
    // district heated water
    feeds("district_heat", SUPPLY_DISTRICT, "district_supply_temp"),
    feeds("district_supply_temp", SUPPLY_DISTRICT, "district_supply_pressure"),
    feeds("district_supply_pressure", SUPPLY_DISTRICT, "heat_exchanger"),
    feeds("heat_exchanger", RETURN_DISTRICT, "district_return_pressure"),
    feeds("district_return_pressure", RETURN_DISTRICT, "district_return_valve"),
    feeds("district_return_valve", RETURN_DISTRICT, "district_return_temp"),
    feeds("district_return_temp", RETURN_DISTRICT, "district_flow"),
    feeds("district_supply_temp", CONTROLS, "district_heat_meter"),
    feeds("district_return_temp", CONTROLS, "district_heat_meter"),
    feeds("district_flow", CONTROLS, "district_heat_meter"),
    feeds("district_supply_pressure", CONTROLS, "district_differential_pressure"),
    feeds("district_return_pressure", CONTROLS, "district_differential_pressure"),
    // heated water
    feeds("heat_exchanger", SUPPLY_HEATED, "heated_supply_temp"),
    // loop 1
    feeds("heated_supply_temp", SUPPLY_HEATED, "heated_loop1_supply_valve"),
    feeds("heated_loop1_supply_valve", SUPPLY_HEATED, "heated_loop1_supply_temp"),
    feeds("heated_loop1_supply_temp", SUPPLY_HEATED, "heated_loop1_supply_pump"),
    feeds("heated_loop1_supply_pump", SUPPLY_HEATED, "heated_loop1_radiator"),
    feeds("heated_loop1_radiator", RETURN_HEATED, "heat_exchanger"),
    // loop 2
    feeds("heated_supply_temp", SUPPLY_HEATED, "heated_loop2_supply_bypass_valve"),
    feeds("heated_loop2_supply_bypass_valve", SUPPLY_HEATED, "heated_loop2_supply_temp"),
    feeds("heated_loop2_supply_temp", SUPPLY_HEATED, "heated_loop2_radiator"),
    feeds("heated_loop2_radiator", RETURN_HEATED, "heated_loop2_return_pump"),
    feeds("heated_loop2_return_pump", RETURN_HEATED, "heated_loop2_return_prebypass_temp"),
    feeds("heated_loop2_return_prebypass_temp", RETURN_HEATED, "heated_loop2_supply_bypass_valve"),
    feeds("heated_loop2_return_prebypass_temp", RETURN_HEATED, "heated_loop2_return_postbypass_temp"),
    feeds("heated_loop2_return_postbypass_temp", RETURN_HEATED, "heat_exchanger"),
    // loop 3: hot water tank
    feeds("heated_supply_temp", SUPPLY_HEATED, "hot_water_tank"),
    feeds("hot_water_tank_temperature", "brick:isPointOf", "hot_water_tank"),
    feeds("hot_water_tank", RETURN_HEATED, "heated_loop3_return_valve"),
    feeds("heated_loop3_return_valve", RETURN_HEATED, "heat_exchanger"),
];
