//! Point: a position vehicles can halt or park at.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::creation::{checked_name, creation_to, deserialize_name};
use super::{BoundingBoxCreationTo, Couple, Envelope, Pose, PropertyBag};
use crate::{Error, Result};

/// What a vehicle may do at a point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointType {
    #[default]
    #[serde(rename = "HALT_POSITION", alias = "HALT")]
    Halt,
    #[serde(rename = "PARK_POSITION", alias = "PARK")]
    Park,
}

impl PointType {
    pub const ALL: [PointType; 2] = [PointType::Halt, PointType::Park];
}

/// A transfer object describing a point in the plant model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointCreationTo {
    #[serde(deserialize_with = "deserialize_name")]
    name: String,
    #[serde(default)]
    properties: PropertyBag,
    #[serde(deserialize_with = "deserialize_pose")]
    pose: Pose,
    #[serde(rename = "type", default)]
    point_type: PointType,
    #[serde(default)]
    vehicle_envelopes: BTreeMap<String, Envelope>,
    #[serde(default)]
    max_vehicle_bounding_box: BoundingBoxCreationTo,
    #[serde(default)]
    layout: PointLayout,
}

creation_to!(PointCreationTo, "point");

impl PointCreationTo {
    /// A halt point at the origin with unknown orientation.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: checked_name("point", name.into())?,
            properties: PropertyBag::new(),
            pose: Pose::default(),
            point_type: PointType::Halt,
            vehicle_envelopes: BTreeMap::new(),
            max_vehicle_bounding_box: BoundingBoxCreationTo::default(),
            layout: PointLayout::default(),
        })
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Fails if `pose` carries no position.
    pub fn with_pose(&self, pose: Pose) -> Result<Self> {
        if pose.position.is_none() {
            return Err(Error::construction("point", &self.name, "a point requires a pose with a position"));
        }
        Ok(Self { pose, ..self.clone() })
    }

    pub fn point_type(&self) -> PointType {
        self.point_type
    }

    pub fn with_type(&self, point_type: PointType) -> Self {
        Self { point_type, ..self.clone() }
    }

    pub fn vehicle_envelopes(&self) -> &BTreeMap<String, Envelope> {
        &self.vehicle_envelopes
    }

    pub fn with_vehicle_envelopes(&self, vehicle_envelopes: BTreeMap<String, Envelope>) -> Self {
        Self { vehicle_envelopes, ..self.clone() }
    }

    pub fn max_vehicle_bounding_box(&self) -> &BoundingBoxCreationTo {
        &self.max_vehicle_bounding_box
    }

    pub fn with_max_vehicle_bounding_box(&self, max_vehicle_bounding_box: BoundingBoxCreationTo) -> Self {
        Self { max_vehicle_bounding_box, ..self.clone() }
    }

    pub fn layout(&self) -> &PointLayout {
        &self.layout
    }

    pub fn with_layout(&self, layout: PointLayout) -> Self {
        Self { layout, ..self.clone() }
    }
}

fn deserialize_pose<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Pose, D::Error> {
    let pose = Pose::deserialize(deserializer)?;
    if pose.position.is_none() {
        return Err(D::Error::custom("a point requires a pose with a position"));
    }
    Ok(pose)
}

impl fmt::Display for PointCreationTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PointCreationTo{{name={}, pose={}, type={:?}, vehicleEnvelopes={:?}, layout={}, maxVehicleBoundingBox={}, properties={}}}",
            self.name,
            self.pose,
            self.point_type,
            self.vehicle_envelopes,
            self.layout,
            self.max_vehicle_bounding_box,
            self.properties,
        )
    }
}

/// Presentation hints for a point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointLayout {
    /// Absolute drawing position (mm). Superseded by the pose; kept only so
    /// older data keeps deserializing.
    #[serde(default)]
    position: Couple,
    /// Label offset relative to the point (layout units).
    #[serde(default)]
    label_offset: Couple,
    #[serde(default)]
    layer_id: i32,
}

impl PointLayout {
    pub fn new(label_offset: Couple, layer_id: i32) -> Self {
        Self { position: Couple::default(), label_offset, layer_id }
    }

    #[deprecated(note = "ignored by conversion; use `PointCreationTo::pose` instead")]
    pub fn position(&self) -> Couple {
        self.position
    }

    #[deprecated(note = "ignored by conversion; use `PointCreationTo::with_pose` instead")]
    pub fn with_position(&self, position: Couple) -> Self {
        Self { position, ..*self }
    }

    pub fn label_offset(&self) -> Couple {
        self.label_offset
    }

    pub fn with_label_offset(&self, label_offset: Couple) -> Self {
        Self { label_offset, ..*self }
    }

    pub fn layer_id(&self) -> i32 {
        self.layer_id
    }

    pub fn with_layer_id(&self, layer_id: i32) -> Self {
        Self { layer_id, ..*self }
    }
}

impl fmt::Display for PointLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layout{{labelOffset={}, layerId={}}}", self.label_offset, self.layer_id)
    }
}
