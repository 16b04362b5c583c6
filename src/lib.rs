//! # plant-model: Plant Model Transfer Objects and Editor Import
//!
//! Immutable creation transfer objects ("TOs") describing a transport plant
//! (points, paths, locations, vehicles, blocks, visual layout) and the
//! pipeline that turns a batch of them into a mutable, cross-referenced
//! editable model graph.
//!
//! ## Design Principles
//!
//! 1. **Values, not objects**: every `with_*` derivation returns a new TO; the receiver never changes
//! 2. **One validating path**: constructors and derivations share the same checks
//! 3. **Lookup tables, not pointers**: layers and location types are resolved by id/name through indexes
//! 4. **Fail the batch**: a dangling reference aborts the import, no partial graph escapes
//!
//! ## Quick Start
//!
//! ```rust
//! use plant_model::{ConversionConfig, PlantModelCreationTo, PointCreationTo, PathCreationTo};
//!
//! # fn example() -> plant_model::Result<()> {
//! let plant = PlantModelCreationTo::new("Demo")?
//!     .with_point(PointCreationTo::new("P1")?)
//!     .with_point(PointCreationTo::new("P2")?)
//!     .with_path(PathCreationTo::new("P1 --- P2", "P1", "P2")?);
//!
//! let system = plant_model::import_plant_model(&plant, &ConversionConfig::default())?;
//! assert_eq!(system.points.len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod editable;
pub mod convert;
pub mod config;
pub mod export;

// ============================================================================
// Re-exports: Model (the TOs)
// ============================================================================

pub use model::{
    CreationTo, PropertyBag,
    PointCreationTo, PathCreationTo, LocationCreationTo, LocationTypeCreationTo,
    VehicleCreationTo, BlockCreationTo, VisualLayoutCreationTo, PlantModelCreationTo,
    Couple, Triple, Pose, Envelope, BoundingBoxCreationTo, Color,
};

// ============================================================================
// Re-exports: Editable graph, conversion, configuration
// ============================================================================

pub use editable::{SystemModel, LayoutModel, LayerWrapper, ModelComponent};
pub use convert::{LayoutIndex, import_plant_model};
pub use config::{ConversionConfig, ReferencePolicy};
pub use export::export_plant_model;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid {kind} '{name}': {message}")]
    Construction {
        kind: &'static str,
        name: String,
        message: String,
    },

    #[error("Unhandled {kind} variant: {value}")]
    UnhandledVariant { kind: &'static str, value: String },

    #[error("{element} '{name}' references unknown {target} '{reference}'")]
    ReferenceIntegrity {
        element: &'static str,
        name: String,
        target: &'static str,
        reference: String,
    },

    #[error("Duplicate {kind} name: {name}")]
    DuplicateName { kind: &'static str, name: String },

    #[error("{element} '{name}' has malformed {attribute}: '{value}'")]
    InvalidAttribute {
        element: &'static str,
        name: String,
        attribute: &'static str,
        value: String,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of [`Error`], for callers that pick user-facing
/// messaging per category ("corrupt plant model" vs. "programming defect").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Construction,
    UnhandledVariant,
    ReferenceIntegrity,
    InvalidAttribute,
    Serialization,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Construction { .. } => ErrorKind::Construction,
            Error::UnhandledVariant { .. } => ErrorKind::UnhandledVariant,
            Error::ReferenceIntegrity { .. } | Error::DuplicateName { .. } => {
                ErrorKind::ReferenceIntegrity
            }
            Error::InvalidAttribute { .. } => ErrorKind::InvalidAttribute,
            Error::Json(_) => ErrorKind::Serialization,
        }
    }

    pub(crate) fn construction(
        kind: &'static str,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::Construction { kind, name: name.into(), message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
