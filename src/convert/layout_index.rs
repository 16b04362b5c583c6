//! Layout index: layer groups and layer wrappers keyed by id.
//!
//! Built once per conversion from the visual layout and handed by reference
//! to every element converter that resolves a layer id.

use hashbrown::HashMap;
use tracing::warn;

use crate::config::{ConversionConfig, ReferencePolicy};
use crate::editable::LayerWrapper;
use crate::model::{Layer, LayerGroup};
use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct LayoutIndex {
    layer_groups: HashMap<i32, LayerGroup>,
    layer_wrappers: HashMap<i32, LayerWrapper>,
    missing_layer: ReferencePolicy,
}

impl LayoutIndex {
    /// Index `groups` by id, then wrap every layer with its group.
    ///
    /// A layer whose group id is unknown fails the build under
    /// `ReferencePolicy::Fail`, or gets a wrapper without group otherwise.
    /// Duplicate ids: the later entry wins.
    pub fn build(groups: &[LayerGroup], layers: &[Layer], config: &ConversionConfig) -> Result<Self> {
        let mut index = Self {
            layer_groups: HashMap::with_capacity(groups.len()),
            layer_wrappers: HashMap::with_capacity(layers.len()),
            missing_layer: config.missing_layer,
        };

        for group in groups {
            if index.layer_groups.insert(group.id, group.clone()).is_some() {
                warn!("Duplicate layer group id {}, keeping '{}'", group.id, group.name);
            }
        }

        for layer in layers {
            let group = index.layer_groups.get(&layer.group_id).cloned();
            if group.is_none() {
                match config.missing_layer_group {
                    ReferencePolicy::Fail => {
                        return Err(Error::ReferenceIntegrity {
                            element: "layer",
                            name: layer.name.clone(),
                            target: "layer group",
                            reference: layer.group_id.to_string(),
                        });
                    }
                    ReferencePolicy::Tolerate => {
                        warn!("Layer '{}' references unknown layer group {}", layer.name, layer.group_id);
                    }
                }
            }
            if index.layer_wrappers.insert(layer.id, LayerWrapper::new(layer.clone(), group)).is_some() {
                warn!("Duplicate layer id {}, keeping '{}'", layer.id, layer.name);
            }
        }

        Ok(index)
    }

    pub fn layer_group(&self, id: i32) -> Option<&LayerGroup> {
        self.layer_groups.get(&id)
    }

    pub fn layer_wrapper(&self, id: i32) -> Option<&LayerWrapper> {
        self.layer_wrappers.get(&id)
    }

    /// Groups ordered by id.
    pub fn layer_groups(&self) -> Vec<&LayerGroup> {
        let mut groups: Vec<_> = self.layer_groups.values().collect();
        groups.sort_by_key(|g| g.id);
        groups
    }

    /// Wrappers ordered by layer id.
    pub fn layer_wrappers(&self) -> Vec<&LayerWrapper> {
        let mut wrappers: Vec<_> = self.layer_wrappers.values().collect();
        wrappers.sort_by_key(|w| w.id());
        wrappers
    }

    pub fn len(&self) -> usize {
        self.layer_wrappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layer_wrappers.is_empty()
    }

    /// Registers (or replaces) a group. Wrappers of that group pick up the new value.
    pub fn register_layer_group(&mut self, group: LayerGroup) {
        for wrapper in self.layer_wrappers.values_mut() {
            if wrapper.layer.group_id == group.id {
                wrapper.group = Some(group.clone());
            }
        }
        self.layer_groups.insert(group.id, group);
    }

    pub fn register_layer_wrapper(&mut self, wrapper: LayerWrapper) {
        self.layer_wrappers.insert(wrapper.id(), wrapper);
    }

    /// Looks up the wrapper an element on `layer_id` is drawn on.
    ///
    /// `element` and `name` only feed the error and the log line.
    pub fn resolve(&self, layer_id: i32, element: &'static str, name: &str) -> Result<Option<LayerWrapper>> {
        match self.layer_wrappers.get(&layer_id) {
            Some(wrapper) => Ok(Some(wrapper.clone())),
            None => match self.missing_layer {
                ReferencePolicy::Fail => Err(Error::ReferenceIntegrity {
                    element,
                    name: name.to_string(),
                    target: "layer",
                    reference: layer_id.to_string(),
                }),
                ReferencePolicy::Tolerate => {
                    warn!("{element} '{name}' references unknown layer {layer_id}");
                    Ok(None)
                }
            },
        }
    }
}
