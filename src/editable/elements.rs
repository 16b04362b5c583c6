//! Mutable element models the editor works on.
//!
//! Fields are public: once the converter hands a model over, the editor
//! owns it and changes it freely.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::layout::LayerWrapper;
use super::units::{Angle, Length, SelectionProperty, Speed};
use crate::model::{Color, Couple, ExecutionTrigger, LocationRepresentation, PropertyBag};
use crate::{Error, Result};

// ============================================================================
// Component trait
// ============================================================================

/// The surface every editable element shares.
pub trait ModelComponent {
    /// Element kind, e.g. `"point"`.
    fn kind(&self) -> &'static str;
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
    fn properties(&self) -> &PropertyBag;
    fn properties_mut(&mut self) -> &mut PropertyBag;
}

macro_rules! model_component {
    ($ty:ty, $kind:literal) => {
        impl ModelComponent for $ty {
            fn kind(&self) -> &'static str { $kind }
            fn name(&self) -> &str { &self.name }
            fn set_name(&mut self, name: String) { self.name = name; }
            fn properties(&self) -> &PropertyBag { &self.properties }
            fn properties_mut(&mut self) -> &mut PropertyBag { &mut self.properties }
        }
    };
}

// ============================================================================
// Editor-side enums
// ============================================================================

/// Declares an editor enum with its display names and name parsing.
macro_rules! named_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(Error::UnhandledVariant { kind: $kind, value: s.to_string() }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

named_enum!(
    /// Point type as shown in the editor.
    PointModelType, "point type" {
        Halt => "HALT",
        Park => "PARK",
    }
);

named_enum!(
    BlockModelType, "block type" {
        SingleVehicleOnly => "SINGLE_VEHICLE_ONLY",
        SameDirectionOnly => "SAME_DIRECTION_ONLY",
    }
);

named_enum!(
    /// How the editor draws a path.
    PathConnectionType, "path connection type" {
        Direct => "DIRECT",
        Elbow => "ELBOW",
        Slanted => "SLANTED",
        Polypath => "POLYPATH",
        Bezier => "BEZIER",
        Bezier3 => "BEZIER_3",
    }
);

// ============================================================================
// Value models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeModel {
    pub key: String,
    pub vertices: Vec<Couple>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBoxModel {
    pub length: i64,
    pub width: i64,
    pub height: i64,
    pub reference_offset: Couple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyLevelThresholdSetModel {
    pub critical: u8,
    pub good: u8,
    pub sufficiently_recharged: u8,
    pub fully_recharged: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeripheralOperationModel {
    pub location_name: String,
    pub operation: String,
    pub execution_trigger: ExecutionTrigger,
    pub completion_required: bool,
}

// ============================================================================
// Element models
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PointModel {
    pub name: String,
    pub position_x: Length,
    pub position_y: Length,
    /// `None` while the orientation is unknown.
    pub vehicle_orientation_angle: Option<Angle>,
    pub point_type: PointModelType,
    pub vehicle_envelopes: Vec<EnvelopeModel>,
    pub max_vehicle_bounding_box: BoundingBoxModel,
    pub properties: PropertyBag,
    pub label_offset_x: String,
    pub label_offset_y: String,
    pub label_orientation_angle: String,
    pub layer: Option<LayerWrapper>,
}

model_component!(PointModel, "point");

#[derive(Debug, Clone, PartialEq)]
pub struct PathModel {
    pub name: String,
    pub length: Length,
    pub max_velocity: Speed,
    pub max_reverse_velocity: Speed,
    pub start_component: String,
    pub end_component: String,
    pub locked: bool,
    pub vehicle_envelopes: Vec<EnvelopeModel>,
    pub properties: PropertyBag,
    pub peripheral_operations: Vec<PeripheralOperationModel>,
    pub connection_type: PathConnectionType,
    /// `"x,y;x,y;..."` in layout units.
    pub control_points: String,
    pub layer: Option<LayerWrapper>,
}

model_component!(PathModel, "path");

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleModel {
    pub name: String,
    pub bounding_box: BoundingBoxModel,
    pub max_velocity: Speed,
    pub max_reverse_velocity: Speed,
    pub energy_level_threshold_set: EnergyLevelThresholdSetModel,
    pub envelope_key: Option<String>,
    pub route_color: Color,
    pub properties: PropertyBag,
}

model_component!(VehicleModel, "vehicle");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationTypeModel {
    pub name: String,
    pub allowed_operations: Vec<String>,
    pub allowed_peripheral_operations: Vec<String>,
    pub default_representation: LocationRepresentation,
    pub properties: PropertyBag,
}

model_component!(LocationTypeModel, "location type");

#[derive(Debug, Clone, PartialEq)]
pub struct LocationModel {
    pub name: String,
    pub position_x: Length,
    pub position_y: Length,
    /// Candidate type names plus the chosen one.
    pub location_type: SelectionProperty,
    pub locked: bool,
    pub properties: PropertyBag,
    pub label_offset_x: String,
    pub label_offset_y: String,
    pub label_orientation_angle: String,
    pub default_representation: LocationRepresentation,
    pub layer: Option<LayerWrapper>,
}

model_component!(LocationModel, "location");

/// Connection between a point (start) and a location (end).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkModel {
    pub name: String,
    pub allowed_operations: Vec<String>,
    pub start_component: String,
    pub end_component: String,
    pub properties: PropertyBag,
    pub layer: Option<LayerWrapper>,
}

model_component!(LinkModel, "link");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockModel {
    pub name: String,
    pub block_type: BlockModelType,
    pub elements: Vec<String>,
    pub color: Color,
    pub properties: PropertyBag,
}

model_component!(BlockModel, "block");

model_component!(super::layout::LayoutModel, "layout");
