//! Vehicle: physical properties and energy thresholds of a vehicle.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::creation::{checked_name, creation_to, deserialize_name};
use super::{BoundingBoxCreationTo, Color, PropertyBag};
use crate::{Error, Result};

/// A transfer object describing a vehicle in the plant model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCreationTo {
    #[serde(deserialize_with = "deserialize_name")]
    name: String,
    #[serde(default)]
    properties: PropertyBag,
    #[serde(default)]
    bounding_box: BoundingBoxCreationTo,
    #[serde(default)]
    energy_level_threshold_set: EnergyLevelThresholdSet,
    #[serde(default = "default_velocity")]
    max_velocity: u32,
    #[serde(default = "default_velocity")]
    max_reverse_velocity: u32,
    #[serde(default)]
    envelope_key: Option<String>,
    #[serde(default)]
    layout: VehicleLayout,
}

creation_to!(VehicleCreationTo, "vehicle");

fn default_velocity() -> u32 { 1000 }

impl VehicleCreationTo {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: checked_name("vehicle", name.into())?,
            properties: PropertyBag::new(),
            bounding_box: BoundingBoxCreationTo::default(),
            energy_level_threshold_set: EnergyLevelThresholdSet::default(),
            max_velocity: default_velocity(),
            max_reverse_velocity: default_velocity(),
            envelope_key: None,
            layout: VehicleLayout::default(),
        })
    }

    pub fn bounding_box(&self) -> &BoundingBoxCreationTo {
        &self.bounding_box
    }

    pub fn with_bounding_box(&self, bounding_box: BoundingBoxCreationTo) -> Self {
        Self { bounding_box, ..self.clone() }
    }

    pub fn energy_level_threshold_set(&self) -> &EnergyLevelThresholdSet {
        &self.energy_level_threshold_set
    }

    pub fn with_energy_level_threshold_set(&self, energy_level_threshold_set: EnergyLevelThresholdSet) -> Self {
        Self { energy_level_threshold_set, ..self.clone() }
    }

    /// mm/s
    pub fn max_velocity(&self) -> u32 {
        self.max_velocity
    }

    pub fn with_max_velocity(&self, max_velocity: u32) -> Self {
        Self { max_velocity, ..self.clone() }
    }

    /// mm/s
    pub fn max_reverse_velocity(&self) -> u32 {
        self.max_reverse_velocity
    }

    pub fn with_max_reverse_velocity(&self, max_reverse_velocity: u32) -> Self {
        Self { max_reverse_velocity, ..self.clone() }
    }

    pub fn envelope_key(&self) -> Option<&str> {
        self.envelope_key.as_deref()
    }

    pub fn with_envelope_key(&self, envelope_key: Option<String>) -> Self {
        Self { envelope_key, ..self.clone() }
    }

    pub fn layout(&self) -> &VehicleLayout {
        &self.layout
    }

    pub fn with_layout(&self, layout: VehicleLayout) -> Self {
        Self { layout, ..self.clone() }
    }
}

impl fmt::Display for VehicleCreationTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VehicleCreationTo{{name={}, boundingBox={}, energyLevelThresholdSet={:?}, maxVelocity={}, maxReverseVelocity={}, envelopeKey={:?}, layout={:?}, properties={}}}",
            self.name,
            self.bounding_box,
            self.energy_level_threshold_set,
            self.max_velocity,
            self.max_reverse_velocity,
            self.envelope_key,
            self.layout,
            self.properties,
        )
    }
}

/// Battery thresholds in percent.
///
/// Each value lies in `0..=100`, `good >= critical` and
/// `fully_recharged >= sufficiently_recharged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ThresholdData")]
pub struct EnergyLevelThresholdSet {
    critical: u8,
    good: u8,
    sufficiently_recharged: u8,
    fully_recharged: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThresholdData {
    critical: u8,
    good: u8,
    sufficiently_recharged: u8,
    fully_recharged: u8,
}

impl TryFrom<ThresholdData> for EnergyLevelThresholdSet {
    type Error = Error;

    fn try_from(data: ThresholdData) -> Result<Self> {
        Self::new(data.critical, data.good, data.sufficiently_recharged, data.fully_recharged)
    }
}

impl EnergyLevelThresholdSet {
    pub fn new(critical: u8, good: u8, sufficiently_recharged: u8, fully_recharged: u8) -> Result<Self> {
        let label = format!("{critical}/{good}/{sufficiently_recharged}/{fully_recharged}");
        for (field, value) in [
            ("critical", critical),
            ("good", good),
            ("sufficiently recharged", sufficiently_recharged),
            ("fully recharged", fully_recharged),
        ] {
            if value > 100 {
                return Err(Error::construction("energy level threshold set", label, format!("{field} must be within 0..=100")));
            }
        }
        if good < critical {
            return Err(Error::construction("energy level threshold set", label, "good must not be below critical"));
        }
        if fully_recharged < sufficiently_recharged {
            return Err(Error::construction(
                "energy level threshold set",
                label,
                "fully recharged must not be below sufficiently recharged",
            ));
        }
        Ok(Self { critical, good, sufficiently_recharged, fully_recharged })
    }

    pub fn critical(&self) -> u8 { self.critical }
    pub fn good(&self) -> u8 { self.good }
    pub fn sufficiently_recharged(&self) -> u8 { self.sufficiently_recharged }
    pub fn fully_recharged(&self) -> u8 { self.fully_recharged }
}

impl Default for EnergyLevelThresholdSet {
    fn default() -> Self {
        Self { critical: 30, good: 90, sufficiently_recharged: 30, fully_recharged: 90 }
    }
}

/// Presentation hints for a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleLayout {
    #[serde(default = "default_route_color")]
    route_color: Color,
}

fn default_route_color() -> Color {
    Color::RED
}

impl Default for VehicleLayout {
    fn default() -> Self {
        Self { route_color: Color::RED }
    }
}

impl VehicleLayout {
    pub fn new(route_color: Color) -> Self {
        Self { route_color }
    }

    pub fn route_color(&self) -> Color {
        self.route_color
    }
}
