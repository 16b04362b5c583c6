//! SystemModel: root of the editable graph.

use super::elements::{
    BlockModel, LinkModel, LocationModel, LocationTypeModel, ModelComponent, PathModel, PointModel,
    VehicleModel,
};
use super::layout::LayoutModel;
use crate::model::PropertyBag;

/// Everything the editor holds for one plant model.
///
/// Elements refer to each other by name only; there are no pointers between
/// them, so renaming an element does not update its referrers.
#[derive(Debug, Clone)]
pub struct SystemModel {
    pub name: String,
    pub properties: PropertyBag,
    pub layout: LayoutModel,
    pub points: Vec<PointModel>,
    pub paths: Vec<PathModel>,
    pub location_types: Vec<LocationTypeModel>,
    pub locations: Vec<LocationModel>,
    pub links: Vec<LinkModel>,
    pub blocks: Vec<BlockModel>,
    pub vehicles: Vec<VehicleModel>,
}

fn by_name<'a, T: ModelComponent>(items: &'a [T], name: &str) -> Option<&'a T> {
    items.iter().find(|item| item.name() == name)
}

fn by_name_mut<'a, T: ModelComponent>(items: &'a mut [T], name: &str) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.name() == name)
}

impl SystemModel {
    pub fn new(name: impl Into<String>, layout: LayoutModel) -> Self {
        Self {
            name: name.into(),
            properties: PropertyBag::new(),
            layout,
            points: Vec::new(),
            paths: Vec::new(),
            location_types: Vec::new(),
            locations: Vec::new(),
            links: Vec::new(),
            blocks: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    pub fn point(&self, name: &str) -> Option<&PointModel> { by_name(&self.points, name) }
    pub fn point_mut(&mut self, name: &str) -> Option<&mut PointModel> { by_name_mut(&mut self.points, name) }
    pub fn path(&self, name: &str) -> Option<&PathModel> { by_name(&self.paths, name) }
    pub fn path_mut(&mut self, name: &str) -> Option<&mut PathModel> { by_name_mut(&mut self.paths, name) }
    pub fn location_type(&self, name: &str) -> Option<&LocationTypeModel> { by_name(&self.location_types, name) }
    pub fn location_type_mut(&mut self, name: &str) -> Option<&mut LocationTypeModel> { by_name_mut(&mut self.location_types, name) }
    pub fn location(&self, name: &str) -> Option<&LocationModel> { by_name(&self.locations, name) }
    pub fn location_mut(&mut self, name: &str) -> Option<&mut LocationModel> { by_name_mut(&mut self.locations, name) }
    pub fn link(&self, name: &str) -> Option<&LinkModel> { by_name(&self.links, name) }
    pub fn link_mut(&mut self, name: &str) -> Option<&mut LinkModel> { by_name_mut(&mut self.links, name) }
    pub fn block(&self, name: &str) -> Option<&BlockModel> { by_name(&self.blocks, name) }
    pub fn block_mut(&mut self, name: &str) -> Option<&mut BlockModel> { by_name_mut(&mut self.blocks, name) }
    pub fn vehicle(&self, name: &str) -> Option<&VehicleModel> { by_name(&self.vehicles, name) }
    pub fn vehicle_mut(&mut self, name: &str) -> Option<&mut VehicleModel> { by_name_mut(&mut self.vehicles, name) }

    /// Links whose end component is `location`.
    pub fn links_of<'a>(&'a self, location: &'a str) -> impl Iterator<Item = &'a LinkModel> + 'a {
        self.links.iter().filter(move |link| link.end_component == location)
    }

    /// Number of plant elements, not counting the layout.
    pub fn component_count(&self) -> usize {
        self.points.len()
            + self.paths.len()
            + self.location_types.len()
            + self.locations.len()
            + self.links.len()
            + self.blocks.len()
            + self.vehicles.len()
    }
}
