//! # Editable Model Graph
//!
//! The mutable structure the editor works on. The converter creates these
//! nodes once per import; from then on the caller owns and mutates them.

pub mod units;
pub mod elements;
pub mod layout;
pub mod system;

pub use units::{Angle, AngleUnit, Length, LengthUnit, SelectionProperty, Speed, SpeedUnit};
pub use elements::{
    BlockModel, BlockModelType, BoundingBoxModel, EnergyLevelThresholdSetModel, EnvelopeModel,
    LinkModel, LocationModel, LocationTypeModel, ModelComponent, PathConnectionType, PathModel,
    PeripheralOperationModel, PointModel, PointModelType, VehicleModel,
};
pub use layout::{LayerWrapper, LayoutModel};
pub use system::SystemModel;
