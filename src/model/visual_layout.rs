//! Visual layout: scale factors plus the layers elements are drawn on.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::creation::{checked_name, creation_to, deserialize_name};
use super::PropertyBag;
use crate::Result;

/// A named group of layers that can be hidden together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerGroup {
    pub id: i32,
    pub name: String,
    pub visible: bool,
}

impl LayerGroup {
    pub fn new(id: i32, name: impl Into<String>, visible: bool) -> Self {
        Self { id, name: name.into(), visible }
    }
}

/// A drawing layer. `ordinal` orders layers bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: i32,
    pub ordinal: i32,
    pub visible: bool,
    pub name: String,
    pub group_id: i32,
}

impl Layer {
    pub fn new(id: i32, ordinal: i32, visible: bool, name: impl Into<String>, group_id: i32) -> Self {
        Self { id, ordinal, visible, name: name.into(), group_id }
    }
}

/// A transfer object describing the visual layout of a plant model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualLayoutCreationTo {
    #[serde(deserialize_with = "deserialize_name")]
    name: String,
    #[serde(default)]
    properties: PropertyBag,
    #[serde(default = "default_scale")]
    scale_x: f64,
    #[serde(default = "default_scale")]
    scale_y: f64,
    #[serde(default = "default_layer_groups")]
    layer_groups: Vec<LayerGroup>,
    #[serde(default = "default_layers")]
    layers: Vec<Layer>,
}

creation_to!(VisualLayoutCreationTo, "visual layout");

fn default_scale() -> f64 { 50.0 }

fn default_layer_groups() -> Vec<LayerGroup> {
    vec![LayerGroup::new(0, "Default layer group", true)]
}

fn default_layers() -> Vec<Layer> {
    vec![Layer::new(0, 0, true, "Default layer", 0)]
}

impl Default for VisualLayoutCreationTo {
    /// The layout a plant model gets when none is supplied, named `VLayout-01`.
    fn default() -> Self {
        Self {
            name: "VLayout-01".to_owned(),
            properties: PropertyBag::new(),
            scale_x: default_scale(),
            scale_y: default_scale(),
            layer_groups: default_layer_groups(),
            layers: default_layers(),
        }
    }
}

impl VisualLayoutCreationTo {
    /// Scale 50 mm per layout unit, one visible default layer in one default group.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self { name: checked_name("visual layout", name.into())?, ..Self::default() })
    }

    /// mm per layout unit along x.
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    pub fn with_scale_x(&self, scale_x: f64) -> Self {
        Self { scale_x, ..self.clone() }
    }

    /// mm per layout unit along y.
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    pub fn with_scale_y(&self, scale_y: f64) -> Self {
        Self { scale_y, ..self.clone() }
    }

    pub fn layer_groups(&self) -> &[LayerGroup] {
        &self.layer_groups
    }

    pub fn with_layer_groups(&self, layer_groups: Vec<LayerGroup>) -> Self {
        Self { layer_groups, ..self.clone() }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn with_layers(&self, layers: Vec<Layer>) -> Self {
        Self { layers, ..self.clone() }
    }
}

impl fmt::Display for VisualLayoutCreationTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VisualLayoutCreationTo{{name={}, scaleX={}, scaleY={}, layerGroups={:?}, layers={:?}, properties={}}}",
            self.name, self.scale_x, self.scale_y, self.layer_groups, self.layers, self.properties,
        )
    }
}
