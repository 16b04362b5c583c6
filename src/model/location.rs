//! Locations and location types.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::creation::{checked_name, creation_to, deserialize_name};
use super::{Couple, PropertyBag, Triple};
use crate::{Error, Result};

/// Visual tag used to draw a location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationRepresentation {
    #[serde(rename = "NONE")]
    None,
    #[default]
    #[serde(rename = "DEFAULT")]
    Default,
    #[serde(rename = "LOAD_TRANSFER_GENERIC")]
    LoadTransferGeneric,
    #[serde(rename = "LOAD_TRANSFER_ALT_1")]
    LoadTransferAlt1,
    #[serde(rename = "LOAD_TRANSFER_ALT_2")]
    LoadTransferAlt2,
    #[serde(rename = "LOAD_TRANSFER_ALT_3")]
    LoadTransferAlt3,
    #[serde(rename = "LOAD_TRANSFER_ALT_4")]
    LoadTransferAlt4,
    #[serde(rename = "LOAD_TRANSFER_ALT_5")]
    LoadTransferAlt5,
    #[serde(rename = "WORKING_GENERIC")]
    WorkingGeneric,
    #[serde(rename = "WORKING_ALT_1")]
    WorkingAlt1,
    #[serde(rename = "WORKING_ALT_2")]
    WorkingAlt2,
    #[serde(rename = "RECHARGE_GENERIC")]
    RechargeGeneric,
    #[serde(rename = "RECHARGE_ALT_1")]
    RechargeAlt1,
    #[serde(rename = "RECHARGE_ALT_2")]
    RechargeAlt2,
}

impl LocationRepresentation {
    pub const ALL: [LocationRepresentation; 14] = [
        LocationRepresentation::None,
        LocationRepresentation::Default,
        LocationRepresentation::LoadTransferGeneric,
        LocationRepresentation::LoadTransferAlt1,
        LocationRepresentation::LoadTransferAlt2,
        LocationRepresentation::LoadTransferAlt3,
        LocationRepresentation::LoadTransferAlt4,
        LocationRepresentation::LoadTransferAlt5,
        LocationRepresentation::WorkingGeneric,
        LocationRepresentation::WorkingAlt1,
        LocationRepresentation::WorkingAlt2,
        LocationRepresentation::RechargeGeneric,
        LocationRepresentation::RechargeAlt1,
        LocationRepresentation::RechargeAlt2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LocationRepresentation::None => "NONE",
            LocationRepresentation::Default => "DEFAULT",
            LocationRepresentation::LoadTransferGeneric => "LOAD_TRANSFER_GENERIC",
            LocationRepresentation::LoadTransferAlt1 => "LOAD_TRANSFER_ALT_1",
            LocationRepresentation::LoadTransferAlt2 => "LOAD_TRANSFER_ALT_2",
            LocationRepresentation::LoadTransferAlt3 => "LOAD_TRANSFER_ALT_3",
            LocationRepresentation::LoadTransferAlt4 => "LOAD_TRANSFER_ALT_4",
            LocationRepresentation::LoadTransferAlt5 => "LOAD_TRANSFER_ALT_5",
            LocationRepresentation::WorkingGeneric => "WORKING_GENERIC",
            LocationRepresentation::WorkingAlt1 => "WORKING_ALT_1",
            LocationRepresentation::WorkingAlt2 => "WORKING_ALT_2",
            LocationRepresentation::RechargeGeneric => "RECHARGE_GENERIC",
            LocationRepresentation::RechargeAlt1 => "RECHARGE_ALT_1",
            LocationRepresentation::RechargeAlt2 => "RECHARGE_ALT_2",
        }
    }
}

impl FromStr for LocationRepresentation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LocationRepresentation::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| Error::UnhandledVariant { kind: "location representation", value: s.to_string() })
    }
}

// ============================================================================
// Location type
// ============================================================================

/// A transfer object describing a location type in the plant model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationTypeCreationTo {
    #[serde(deserialize_with = "deserialize_name")]
    name: String,
    #[serde(default)]
    properties: PropertyBag,
    #[serde(default)]
    allowed_operations: Vec<String>,
    #[serde(default)]
    allowed_peripheral_operations: Vec<String>,
    #[serde(default)]
    layout: LocationTypeLayout,
}

creation_to!(LocationTypeCreationTo, "location type");

impl LocationTypeCreationTo {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: checked_name("location type", name.into())?,
            properties: PropertyBag::new(),
            allowed_operations: Vec::new(),
            allowed_peripheral_operations: Vec::new(),
            layout: LocationTypeLayout::default(),
        })
    }

    pub fn allowed_operations(&self) -> &[String] {
        &self.allowed_operations
    }

    pub fn with_allowed_operations(&self, operations: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { allowed_operations: operations.into_iter().map(Into::into).collect(), ..self.clone() }
    }

    pub fn allowed_peripheral_operations(&self) -> &[String] {
        &self.allowed_peripheral_operations
    }

    pub fn with_allowed_peripheral_operations(&self, operations: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { allowed_peripheral_operations: operations.into_iter().map(Into::into).collect(), ..self.clone() }
    }

    pub fn layout(&self) -> &LocationTypeLayout {
        &self.layout
    }

    pub fn with_layout(&self, layout: LocationTypeLayout) -> Self {
        Self { layout, ..self.clone() }
    }
}

impl fmt::Display for LocationTypeCreationTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LocationTypeCreationTo{{name={}, allowedOperations={:?}, allowedPeripheralOperations={:?}, layout={:?}, properties={}}}",
            self.name, self.allowed_operations, self.allowed_peripheral_operations, self.layout, self.properties,
        )
    }
}

/// Presentation hints for a location type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationTypeLayout {
    #[serde(default = "no_representation")]
    location_representation: LocationRepresentation,
}

fn no_representation() -> LocationRepresentation {
    LocationRepresentation::None
}

impl Default for LocationTypeLayout {
    fn default() -> Self {
        Self { location_representation: LocationRepresentation::None }
    }
}

impl LocationTypeLayout {
    pub fn new(location_representation: LocationRepresentation) -> Self {
        Self { location_representation }
    }

    pub fn location_representation(&self) -> LocationRepresentation {
        self.location_representation
    }
}

// ============================================================================
// Location
// ============================================================================

/// A transfer object describing a location in the plant model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCreationTo {
    #[serde(deserialize_with = "deserialize_name")]
    name: String,
    #[serde(default)]
    properties: PropertyBag,
    #[serde(deserialize_with = "deserialize_name")]
    type_name: String,
    position: Triple,
    /// Point name → operations allowed via that link.
    #[serde(default)]
    links: BTreeMap<String, BTreeSet<String>>,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    layout: LocationLayout,
}

creation_to!(LocationCreationTo, "location");

impl LocationCreationTo {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, position: Triple) -> Result<Self> {
        let name = checked_name("location", name.into())?;
        let type_name = type_name.into();
        if type_name.is_empty() {
            return Err(Error::construction("location", name, "type name must not be empty"));
        }
        Ok(Self {
            name,
            properties: PropertyBag::new(),
            type_name,
            position,
            links: BTreeMap::new(),
            locked: false,
            layout: LocationLayout::default(),
        })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn with_type_name(&self, type_name: impl Into<String>) -> Result<Self> {
        let type_name = type_name.into();
        if type_name.is_empty() {
            return Err(Error::construction("location", &self.name, "type name must not be empty"));
        }
        Ok(Self { type_name, ..self.clone() })
    }

    /// Position in mm.
    pub fn position(&self) -> Triple {
        self.position
    }

    pub fn with_position(&self, position: Triple) -> Self {
        Self { position, ..self.clone() }
    }

    pub fn links(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.links
    }

    pub fn with_links(&self, links: BTreeMap<String, BTreeSet<String>>) -> Self {
        Self { links, ..self.clone() }
    }

    /// Adds (or replaces) the link to `point_name`.
    pub fn with_link(&self, point_name: impl Into<String>, operations: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut links = self.links.clone();
        links.insert(point_name.into(), operations.into_iter().map(Into::into).collect());
        Self { links, ..self.clone() }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn with_locked(&self, locked: bool) -> Self {
        Self { locked, ..self.clone() }
    }

    pub fn layout(&self) -> &LocationLayout {
        &self.layout
    }

    pub fn with_layout(&self, layout: LocationLayout) -> Self {
        Self { layout, ..self.clone() }
    }
}

impl fmt::Display for LocationCreationTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LocationCreationTo{{name={}, typeName={}, position={}, links={:?}, locked={}, layout={:?}, properties={}}}",
            self.name, self.type_name, self.position, self.links, self.locked, self.layout, self.properties,
        )
    }
}

/// Presentation hints for a location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationLayout {
    /// Superseded by the location's own position; carried for older data only.
    #[serde(default)]
    position: Couple,
    #[serde(default)]
    label_offset: Couple,
    #[serde(default)]
    location_representation: LocationRepresentation,
    #[serde(default)]
    layer_id: i32,
}

impl LocationLayout {
    pub fn new(label_offset: Couple, location_representation: LocationRepresentation, layer_id: i32) -> Self {
        Self { position: Couple::default(), label_offset, location_representation, layer_id }
    }

    #[deprecated(note = "ignored by conversion; use `LocationCreationTo::position` instead")]
    pub fn position(&self) -> Couple {
        self.position
    }

    pub fn label_offset(&self) -> Couple {
        self.label_offset
    }

    pub fn with_label_offset(&self, label_offset: Couple) -> Self {
        Self { label_offset, ..*self }
    }

    pub fn location_representation(&self) -> LocationRepresentation {
        self.location_representation
    }

    pub fn with_location_representation(&self, location_representation: LocationRepresentation) -> Self {
        Self { location_representation, ..*self }
    }

    pub fn layer_id(&self) -> i32 {
        self.layer_id
    }

    pub fn with_layer_id(&self, layer_id: i32) -> Self {
        Self { layer_id, ..*self }
    }
}
