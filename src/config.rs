//! Conversion configuration.

use serde::{Deserialize, Serialize};

use crate::Result;

/// What to do when an id or name points at nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferencePolicy {
    /// Abort the whole conversion.
    #[default]
    Fail,
    /// Leave the reference unresolved and log a warning.
    Tolerate,
}

/// Options for [`import_plant_model`](crate::import_plant_model) and the
/// element converters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionConfig {
    /// An element names a layer id the visual layout does not define.
    pub missing_layer: ReferencePolicy,
    /// A layer names a group id the visual layout does not define.
    pub missing_layer_group: ReferencePolicy,
    /// Check names across the batch (path end points, location types, link
    /// points, block members, peripheral locations, duplicates) before
    /// converting anything.
    pub check_references: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl ConversionConfig {
    /// Every dangling reference is an error.
    pub fn strict() -> Self {
        Self {
            missing_layer: ReferencePolicy::Fail,
            missing_layer_group: ReferencePolicy::Fail,
            check_references: true,
        }
    }

    /// Dangling layer and group ids are tolerated; name checks are skipped.
    pub fn lenient() -> Self {
        Self {
            missing_layer: ReferencePolicy::Tolerate,
            missing_layer_group: ReferencePolicy::Tolerate,
            check_references: false,
        }
    }

    /// Missing fields take their strict defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
