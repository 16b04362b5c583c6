//! Path: a directed connection between two points.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::creation::{checked_name, creation_to, deserialize_name};
use super::{Couple, Envelope, PropertyBag};
use crate::{Error, Result};

/// A transfer object describing a path in the plant model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathCreationTo {
    #[serde(deserialize_with = "deserialize_name")]
    name: String,
    #[serde(default)]
    properties: PropertyBag,
    #[serde(deserialize_with = "deserialize_name")]
    src_point_name: String,
    #[serde(deserialize_with = "deserialize_name")]
    dest_point_name: String,
    #[serde(default = "default_length")]
    length: u64,
    #[serde(default = "default_velocity")]
    max_velocity: u32,
    #[serde(default = "default_velocity")]
    max_reverse_velocity: u32,
    #[serde(default)]
    peripheral_operations: Vec<PeripheralOperationCreationTo>,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    vehicle_envelopes: BTreeMap<String, Envelope>,
    #[serde(default)]
    layout: PathLayout,
}

creation_to!(PathCreationTo, "path");

fn default_length() -> u64 { 1 }
fn default_velocity() -> u32 { 1000 }

impl PathCreationTo {
    pub fn new(
        name: impl Into<String>,
        src_point_name: impl Into<String>,
        dest_point_name: impl Into<String>,
    ) -> Result<Self> {
        let name = checked_name("path", name.into())?;
        let src_point_name = src_point_name.into();
        let dest_point_name = dest_point_name.into();
        if src_point_name.is_empty() || dest_point_name.is_empty() {
            return Err(Error::construction("path", name, "source and destination point names must not be empty"));
        }
        Ok(Self {
            name,
            properties: PropertyBag::new(),
            src_point_name,
            dest_point_name,
            length: default_length(),
            max_velocity: default_velocity(),
            max_reverse_velocity: default_velocity(),
            peripheral_operations: Vec::new(),
            locked: false,
            vehicle_envelopes: BTreeMap::new(),
            layout: PathLayout::default(),
        })
    }

    pub fn src_point_name(&self) -> &str {
        &self.src_point_name
    }

    pub fn dest_point_name(&self) -> &str {
        &self.dest_point_name
    }

    /// Length in mm.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Fails for a zero length.
    pub fn with_length(&self, length: u64) -> Result<Self> {
        if length == 0 {
            return Err(Error::construction("path", &self.name, "length must be positive"));
        }
        Ok(Self { length, ..self.clone() })
    }

    /// Maximum forward velocity in mm/s.
    pub fn max_velocity(&self) -> u32 {
        self.max_velocity
    }

    pub fn with_max_velocity(&self, max_velocity: u32) -> Self {
        Self { max_velocity, ..self.clone() }
    }

    /// Maximum reverse velocity in mm/s.
    pub fn max_reverse_velocity(&self) -> u32 {
        self.max_reverse_velocity
    }

    pub fn with_max_reverse_velocity(&self, max_reverse_velocity: u32) -> Self {
        Self { max_reverse_velocity, ..self.clone() }
    }

    pub fn peripheral_operations(&self) -> &[PeripheralOperationCreationTo] {
        &self.peripheral_operations
    }

    pub fn with_peripheral_operations(&self, peripheral_operations: Vec<PeripheralOperationCreationTo>) -> Self {
        Self { peripheral_operations, ..self.clone() }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn with_locked(&self, locked: bool) -> Self {
        Self { locked, ..self.clone() }
    }

    pub fn vehicle_envelopes(&self) -> &BTreeMap<String, Envelope> {
        &self.vehicle_envelopes
    }

    pub fn with_vehicle_envelopes(&self, vehicle_envelopes: BTreeMap<String, Envelope>) -> Self {
        Self { vehicle_envelopes, ..self.clone() }
    }

    pub fn layout(&self) -> &PathLayout {
        &self.layout
    }

    pub fn with_layout(&self, layout: PathLayout) -> Self {
        Self { layout, ..self.clone() }
    }
}

impl fmt::Display for PathCreationTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PathCreationTo{{name={}, srcPointName={}, destPointName={}, length={}, maxVelocity={}, maxReverseVelocity={}, peripheralOperations={:?}, locked={}, vehicleEnvelopes={:?}, layout={:?}, properties={}}}",
            self.name,
            self.src_point_name,
            self.dest_point_name,
            self.length,
            self.max_velocity,
            self.max_reverse_velocity,
            self.peripheral_operations,
            self.locked,
            self.vehicle_envelopes,
            self.layout,
            self.properties,
        )
    }
}

/// How a path is drawn between its end points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionType {
    #[default]
    Direct,
    Elbow,
    Slanted,
    Polypath,
    Bezier,
    #[serde(rename = "BEZIER_3")]
    Bezier3,
}

impl ConnectionType {
    pub const ALL: [ConnectionType; 6] = [
        ConnectionType::Direct,
        ConnectionType::Elbow,
        ConnectionType::Slanted,
        ConnectionType::Polypath,
        ConnectionType::Bezier,
        ConnectionType::Bezier3,
    ];

    /// Wire name, e.g. `"BEZIER_3"`.
    pub fn name(self) -> &'static str {
        match self {
            ConnectionType::Direct => "DIRECT",
            ConnectionType::Elbow => "ELBOW",
            ConnectionType::Slanted => "SLANTED",
            ConnectionType::Polypath => "POLYPATH",
            ConnectionType::Bezier => "BEZIER",
            ConnectionType::Bezier3 => "BEZIER_3",
        }
    }
}

/// Presentation hints for a path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathLayout {
    #[serde(default)]
    connection_type: ConnectionType,
    #[serde(default)]
    control_points: SmallVec<[Couple; 4]>,
    #[serde(default)]
    layer_id: i32,
}

impl PathLayout {
    pub fn new(connection_type: ConnectionType, control_points: impl IntoIterator<Item = Couple>, layer_id: i32) -> Self {
        Self { connection_type, control_points: control_points.into_iter().collect(), layer_id }
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.connection_type
    }

    pub fn with_connection_type(&self, connection_type: ConnectionType) -> Self {
        Self { connection_type, ..self.clone() }
    }

    /// Control points in layout units, in drawing order.
    pub fn control_points(&self) -> &[Couple] {
        &self.control_points
    }

    pub fn with_control_points(&self, control_points: impl IntoIterator<Item = Couple>) -> Self {
        Self { control_points: control_points.into_iter().collect(), ..self.clone() }
    }

    pub fn layer_id(&self) -> i32 {
        self.layer_id
    }

    pub fn with_layer_id(&self, layer_id: i32) -> Self {
        Self { layer_id, ..self.clone() }
    }
}

/// When a peripheral operation attached to a path is triggered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionTrigger {
    Immediate,
    #[default]
    AfterAllocation,
    AfterMovement,
}

/// An operation a peripheral device at a location performs when a vehicle
/// travels the owning path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeripheralOperationCreationTo {
    #[serde(deserialize_with = "deserialize_name")]
    operation: String,
    #[serde(deserialize_with = "deserialize_name")]
    location_name: String,
    #[serde(default)]
    execution_trigger: ExecutionTrigger,
    #[serde(default)]
    completion_required: bool,
}

impl PeripheralOperationCreationTo {
    pub fn new(operation: impl Into<String>, location_name: impl Into<String>) -> Result<Self> {
        let operation = checked_name("peripheral operation", operation.into())?;
        let location_name = location_name.into();
        if location_name.is_empty() {
            return Err(Error::construction("peripheral operation", operation, "location name must not be empty"));
        }
        Ok(Self {
            operation,
            location_name,
            execution_trigger: ExecutionTrigger::default(),
            completion_required: false,
        })
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    pub fn execution_trigger(&self) -> ExecutionTrigger {
        self.execution_trigger
    }

    pub fn with_execution_trigger(&self, execution_trigger: ExecutionTrigger) -> Self {
        Self { execution_trigger, ..self.clone() }
    }

    pub fn is_completion_required(&self) -> bool {
        self.completion_required
    }

    pub fn with_completion_required(&self, completion_required: bool) -> Self {
        Self { completion_required, ..self.clone() }
    }
}
