//! # Conversion: Transfer Objects → Editable Model
//!
//! ```text
//! PlantModelCreationTo
//!   ├── VisualLayoutCreationTo ──► LayoutIndex (layer groups, layer wrappers)
//!   │                                   │
//!   ├── points / paths / locations ─────┴──► PointModel / PathModel / LocationModel + LinkModel
//!   ├── location types, blocks, vehicles ──► LocationTypeModel / BlockModel / VehicleModel
//!   ▼
//! SystemModel
//! ```
//!
//! The element converters are pure functions of their TO and the index.
//! [`import_plant_model`] drives them in dependency order.

pub mod layout_index;
pub mod elements;
mod pipeline;

pub use layout_index::LayoutIndex;
pub use elements::{
    import_block, import_layout, import_location, import_location_link, import_location_type,
    import_path, import_point, import_vehicle, link_name,
};
pub use pipeline::import_plant_model;
