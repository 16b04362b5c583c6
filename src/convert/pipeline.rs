//! Batch import: a whole `PlantModelCreationTo` into one `SystemModel`.
//!
//! The layout goes first since every drawable element resolves its layer
//! through the index it builds. Any error aborts the batch; the partially
//! filled graph is dropped, never returned.

use hashbrown::HashSet;

use tracing::{debug, info};

use super::elements::{
    import_block, import_layout, import_location, import_location_link, import_location_type,
    import_path, import_point, import_vehicle,
};
use crate::config::ConversionConfig;
use crate::editable::SystemModel;
use crate::model::{CreationTo, PlantModelCreationTo};
use crate::{Error, Result};

/// Converts every TO in `plant` and assembles the editable graph.
///
/// With `config.check_references` set, names are cross-checked before any
/// element is converted: duplicates per kind, path end points, location
/// types, link points, peripheral operation locations and block members.
pub fn import_plant_model(plant: &PlantModelCreationTo, config: &ConversionConfig) -> Result<SystemModel> {
    debug!("Importing plant model '{}'", plant.name());
    let layout = import_layout(plant.visual_layout(), config)?;

    if config.check_references {
        check_references(plant)?;
    }

    let mut system = SystemModel::new(plant.name(), layout);
    system.properties = plant.properties().clone();

    for to in plant.location_types() {
        system.location_types.push(import_location_type(to)?);
    }

    let index = system.layout.layer_index();

    let mut points = Vec::with_capacity(plant.points().len());
    for to in plant.points() {
        points.push(import_point(to, index)?);
    }

    let mut paths = Vec::with_capacity(plant.paths().len());
    for to in plant.paths() {
        paths.push(import_path(to, index)?);
    }

    let mut locations = Vec::with_capacity(plant.locations().len());
    let mut links = Vec::new();
    for to in plant.locations() {
        locations.push(import_location(to, plant.location_types(), index)?);
        for (point_name, operations) in to.links() {
            links.push(import_location_link(to, point_name, operations, index)?);
        }
    }

    system.points = points;
    system.paths = paths;
    system.locations = locations;
    system.links = links;

    for to in plant.blocks() {
        system.blocks.push(import_block(to)?);
    }
    for to in plant.vehicles() {
        system.vehicles.push(import_vehicle(to)?);
    }

    info!(
        plant = plant.name(),
        points = system.points.len(),
        paths = system.paths.len(),
        locations = system.locations.len(),
        links = system.links.len(),
        blocks = system.blocks.len(),
        vehicles = system.vehicles.len(),
        "Imported plant model"
    );
    Ok(system)
}

// ============================================================================
// Cross-reference checks
// ============================================================================

fn unique_names<'a, T: CreationTo + 'a>(items: &'a [T]) -> Result<HashSet<&'a str>> {
    let mut names = HashSet::with_capacity(items.len());
    for item in items {
        if !names.insert(item.name()) {
            return Err(Error::DuplicateName { kind: T::KIND, name: item.name().to_owned() });
        }
    }
    Ok(names)
}

fn check_references(plant: &PlantModelCreationTo) -> Result<()> {
    let points = unique_names(plant.points())?;
    let paths = unique_names(plant.paths())?;
    let location_types = unique_names(plant.location_types())?;
    let locations = unique_names(plant.locations())?;
    unique_names(plant.blocks())?;
    unique_names(plant.vehicles())?;

    let dangling = |element: &'static str, name: &str, target: &'static str, reference: &str| {
        Error::ReferenceIntegrity {
            element,
            name: name.to_owned(),
            target,
            reference: reference.to_owned(),
        }
    };

    for path in plant.paths() {
        for end in [path.src_point_name(), path.dest_point_name()] {
            if !points.contains(end) {
                return Err(dangling("path", path.name(), "point", end));
            }
        }
        for op in path.peripheral_operations() {
            if !locations.contains(op.location_name()) {
                return Err(dangling("path", path.name(), "location", op.location_name()));
            }
        }
    }

    for location in plant.locations() {
        if !location_types.contains(location.type_name()) {
            return Err(dangling("location", location.name(), "location type", location.type_name()));
        }
        for point_name in location.links().keys() {
            if !points.contains(point_name.as_str()) {
                return Err(dangling("location", location.name(), "point", point_name));
            }
        }
    }

    for block in plant.blocks() {
        for member in block.member_names() {
            let member = member.as_str();
            if !points.contains(member) && !paths.contains(member) && !locations.contains(member) {
                return Err(dangling("block", block.name(), "member", member));
            }
        }
    }

    Ok(())
}
