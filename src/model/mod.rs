//! # Plant Model Transfer Objects
//!
//! Immutable creation TOs that define the import/export data contract.
//! These types cross every boundary: persistence ↔ import ↔ editor ↔ export.
//!
//! Design rule: NO editor types here. This module is pure data: no I/O,
//! no state, no references between TOs other than by name or layer id.

pub mod creation;
pub mod property_bag;
pub mod geometry;
pub mod point;
pub mod path;
pub mod location;
pub mod vehicle;
pub mod block;
pub mod visual_layout;
pub mod plant_model;

pub use creation::CreationTo;
pub use property_bag::PropertyBag;
pub use geometry::{BoundingBoxCreationTo, Color, Couple, Envelope, Pose, Triple};
pub use point::{PointCreationTo, PointLayout, PointType};
pub use path::{
    ConnectionType, ExecutionTrigger, PathCreationTo, PathLayout, PeripheralOperationCreationTo,
};
pub use location::{
    LocationCreationTo, LocationLayout, LocationRepresentation, LocationTypeCreationTo,
    LocationTypeLayout,
};
pub use vehicle::{EnergyLevelThresholdSet, VehicleCreationTo, VehicleLayout};
pub use block::{BlockCreationTo, BlockLayout, BlockType};
pub use visual_layout::{Layer, LayerGroup, VisualLayoutCreationTo};
pub use plant_model::PlantModelCreationTo;
