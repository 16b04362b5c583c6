//! PlantModelCreationTo: one import/export batch.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::creation::{checked_name, creation_to, deserialize_name};
use super::{
    BlockCreationTo, LocationCreationTo, LocationTypeCreationTo, PathCreationTo, PointCreationTo,
    PropertyBag, VehicleCreationTo, VisualLayoutCreationTo,
};
use crate::Result;

/// Every transfer object making up a plant model.
///
/// Name uniqueness per kind is not checked here; the import pipeline does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantModelCreationTo {
    #[serde(deserialize_with = "deserialize_name")]
    name: String,
    #[serde(default)]
    properties: PropertyBag,
    #[serde(default)]
    points: Vec<PointCreationTo>,
    #[serde(default)]
    paths: Vec<PathCreationTo>,
    #[serde(default)]
    location_types: Vec<LocationTypeCreationTo>,
    #[serde(default)]
    locations: Vec<LocationCreationTo>,
    #[serde(default)]
    blocks: Vec<BlockCreationTo>,
    #[serde(default)]
    vehicles: Vec<VehicleCreationTo>,
    #[serde(default)]
    visual_layout: VisualLayoutCreationTo,
}

creation_to!(PlantModelCreationTo, "plant model");

impl PlantModelCreationTo {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: checked_name("plant model", name.into())?,
            properties: PropertyBag::new(),
            points: Vec::new(),
            paths: Vec::new(),
            location_types: Vec::new(),
            locations: Vec::new(),
            blocks: Vec::new(),
            vehicles: Vec::new(),
            visual_layout: VisualLayoutCreationTo::default(),
        })
    }

    pub fn points(&self) -> &[PointCreationTo] {
        &self.points
    }

    pub fn with_points(&self, points: Vec<PointCreationTo>) -> Self {
        Self { points, ..self.clone() }
    }

    pub fn with_point(&self, point: PointCreationTo) -> Self {
        let mut copy = self.clone();
        copy.points.push(point);
        copy
    }

    pub fn paths(&self) -> &[PathCreationTo] {
        &self.paths
    }

    pub fn with_paths(&self, paths: Vec<PathCreationTo>) -> Self {
        Self { paths, ..self.clone() }
    }

    pub fn with_path(&self, path: PathCreationTo) -> Self {
        let mut copy = self.clone();
        copy.paths.push(path);
        copy
    }

    pub fn location_types(&self) -> &[LocationTypeCreationTo] {
        &self.location_types
    }

    pub fn with_location_types(&self, location_types: Vec<LocationTypeCreationTo>) -> Self {
        Self { location_types, ..self.clone() }
    }

    pub fn with_location_type(&self, location_type: LocationTypeCreationTo) -> Self {
        let mut copy = self.clone();
        copy.location_types.push(location_type);
        copy
    }

    pub fn locations(&self) -> &[LocationCreationTo] {
        &self.locations
    }

    pub fn with_locations(&self, locations: Vec<LocationCreationTo>) -> Self {
        Self { locations, ..self.clone() }
    }

    pub fn with_location(&self, location: LocationCreationTo) -> Self {
        let mut copy = self.clone();
        copy.locations.push(location);
        copy
    }

    pub fn blocks(&self) -> &[BlockCreationTo] {
        &self.blocks
    }

    pub fn with_blocks(&self, blocks: Vec<BlockCreationTo>) -> Self {
        Self { blocks, ..self.clone() }
    }

    pub fn with_block(&self, block: BlockCreationTo) -> Self {
        let mut copy = self.clone();
        copy.blocks.push(block);
        copy
    }

    pub fn vehicles(&self) -> &[VehicleCreationTo] {
        &self.vehicles
    }

    pub fn with_vehicles(&self, vehicles: Vec<VehicleCreationTo>) -> Self {
        Self { vehicles, ..self.clone() }
    }

    pub fn with_vehicle(&self, vehicle: VehicleCreationTo) -> Self {
        let mut copy = self.clone();
        copy.vehicles.push(vehicle);
        copy
    }

    pub fn visual_layout(&self) -> &VisualLayoutCreationTo {
        &self.visual_layout
    }

    pub fn with_visual_layout(&self, visual_layout: VisualLayoutCreationTo) -> Self {
        Self { visual_layout, ..self.clone() }
    }
}

impl fmt::Display for PlantModelCreationTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlantModelCreationTo{{name={}, points={}, paths={}, locationTypes={}, locations={}, blocks={}, vehicles={}, visualLayout={}, properties={}}}",
            self.name,
            self.points.len(),
            self.paths.len(),
            self.location_types.len(),
            self.locations.len(),
            self.blocks.len(),
            self.vehicles.len(),
            self.visual_layout,
            self.properties,
        )
    }
}
