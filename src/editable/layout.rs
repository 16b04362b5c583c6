//! Layout model: scale factors and the registered layers.

use serde::{Deserialize, Serialize};

use super::units::Length;
use crate::convert::LayoutIndex;
use crate::model::{Layer, LayerGroup, PropertyBag};

/// A layer paired with the group it belongs to.
///
/// `group` is `None` only when the layer named a group id that was never
/// registered and the configuration tolerated it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerWrapper {
    pub layer: Layer,
    pub group: Option<LayerGroup>,
}

impl LayerWrapper {
    pub fn new(layer: Layer, group: Option<LayerGroup>) -> Self {
        Self { layer, group }
    }

    pub fn id(&self) -> i32 {
        self.layer.id
    }

    /// Visible only if both the layer and its group are.
    pub fn is_effectively_visible(&self) -> bool {
        self.layer.visible && self.group.as_ref().is_none_or(|g| g.visible)
    }
}

/// The editor's view of the visual layout.
#[derive(Debug, Clone)]
pub struct LayoutModel {
    pub name: String,
    pub scale_x: Length,
    pub scale_y: Length,
    pub properties: PropertyBag,
    layers: LayoutIndex,
}

impl LayoutModel {
    pub fn new(name: impl Into<String>, layers: LayoutIndex) -> Self {
        Self {
            name: name.into(),
            scale_x: Length::mm(50.0),
            scale_y: Length::mm(50.0),
            properties: PropertyBag::new(),
            layers,
        }
    }

    pub fn layer_index(&self) -> &LayoutIndex {
        &self.layers
    }

    pub fn register_layer_group(&mut self, group: LayerGroup) {
        self.layers.register_layer_group(group);
    }

    pub fn register_layer_wrapper(&mut self, wrapper: LayerWrapper) {
        self.layers.register_layer_wrapper(wrapper);
    }
}
