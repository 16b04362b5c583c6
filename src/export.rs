//! Export: rebuild the transfer objects from an editable graph.
//!
//! The inverse of [`import_plant_model`](crate::import_plant_model) for every
//! field the import carries:
//!
//! ```text
//! SystemModel → export_plant_model() → PlantModelCreationTo
//!   → persist, or feed back into import_plant_model()
//! ```
//!
//! Text attributes the editor keeps as strings (label offsets, control
//! points) are parsed back here, so this is where malformed user input
//! surfaces.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::editable::{
    BlockModel, BlockModelType, BoundingBoxModel, EnvelopeModel, LayerWrapper, LocationModel, LocationTypeModel,
    PathConnectionType, PathModel, PointModel, PointModelType, SystemModel, VehicleModel,
};
use crate::model::*;
use crate::{Error, Result};

/// Export a whole graph as one plant model batch.
///
/// Links are folded back into the `links` map of the location they end at.
pub fn export_plant_model(system: &SystemModel) -> Result<PlantModelCreationTo> {
    debug!("Exporting plant model '{}'", system.name);

    let index = system.layout.layer_index();
    let visual_layout = VisualLayoutCreationTo::new(system.layout.name.as_str())?
        .with_scale_x(system.layout.scale_x.as_mm())
        .with_scale_y(system.layout.scale_y.as_mm())
        .with_layer_groups(index.layer_groups().into_iter().cloned().collect())
        .with_layers(index.layer_wrappers().into_iter().map(|w| w.layer.clone()).collect())
        .with_properties(system.layout.properties.clone());

    let plant = PlantModelCreationTo::new(system.name.as_str())?
        .with_properties(system.properties.clone())
        .with_visual_layout(visual_layout)
        .with_points(system.points.iter().map(export_point).collect::<Result<Vec<_>>>()?)
        .with_paths(system.paths.iter().map(export_path).collect::<Result<Vec<_>>>()?)
        .with_location_types(system.location_types.iter().map(export_location_type).collect::<Result<Vec<_>>>()?)
        .with_locations(
            system
                .locations
                .iter()
                .map(|location| export_location(location, system))
                .collect::<Result<Vec<_>>>()?,
        )
        .with_blocks(system.blocks.iter().map(export_block).collect::<Result<Vec<_>>>()?)
        .with_vehicles(system.vehicles.iter().map(export_vehicle).collect::<Result<Vec<_>>>()?);

    info!(
        plant = system.name.as_str(),
        components = system.component_count(),
        "Exported plant model"
    );
    Ok(plant)
}

fn export_point(model: &PointModel) -> Result<PointCreationTo> {
    let position = Triple::new(
        whole_mm("point", &model.name, "position x", model.position_x.as_mm())?,
        whole_mm("point", &model.name, "position y", model.position_y.as_mm())?,
        0,
    );
    let angle = model.vehicle_orientation_angle.map_or(f64::NAN, |a| a.as_degrees());
    let point_type = match model.point_type {
        PointModelType::Halt => PointType::Halt,
        PointModelType::Park => PointType::Park,
    };
    let label_offset = Couple::new(
        parse_coordinate("point", &model.name, "label offset x", &model.label_offset_x)?,
        parse_coordinate("point", &model.name, "label offset y", &model.label_offset_y)?,
    );

    Ok(PointCreationTo::new(model.name.as_str())?
        .with_pose(Pose::new(position, angle))?
        .with_type(point_type)
        .with_vehicle_envelopes(envelopes(&model.vehicle_envelopes))
        .with_max_vehicle_bounding_box(bounding_box(&model.max_vehicle_bounding_box)?)
        .with_layout(PointLayout::new(label_offset, layer_id(&model.layer)))
        .with_properties(model.properties.clone()))
}

fn export_path(model: &PathModel) -> Result<PathCreationTo> {
    let connection_type = match model.connection_type {
        PathConnectionType::Direct => ConnectionType::Direct,
        PathConnectionType::Elbow => ConnectionType::Elbow,
        PathConnectionType::Slanted => ConnectionType::Slanted,
        PathConnectionType::Polypath => ConnectionType::Polypath,
        PathConnectionType::Bezier => ConnectionType::Bezier,
        PathConnectionType::Bezier3 => ConnectionType::Bezier3,
    };
    let control_points = parse_control_points(&model.name, &model.control_points)?;
    let operations = model
        .peripheral_operations
        .iter()
        .map(|op| -> Result<PeripheralOperationCreationTo> {
            Ok(PeripheralOperationCreationTo::new(op.operation.as_str(), op.location_name.as_str())?
                .with_execution_trigger(op.execution_trigger)
                .with_completion_required(op.completion_required))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PathCreationTo::new(model.name.as_str(), model.start_component.as_str(), model.end_component.as_str())?
        .with_length(whole_unsigned("path", &model.name, "length", model.length.as_mm())?)?
        .with_max_velocity(whole_unsigned("path", &model.name, "max velocity", model.max_velocity.as_mm_per_sec())?)
        .with_max_reverse_velocity(whole_unsigned(
            "path",
            &model.name,
            "max reverse velocity",
            model.max_reverse_velocity.as_mm_per_sec(),
        )?)
        .with_peripheral_operations(operations)
        .with_locked(model.locked)
        .with_vehicle_envelopes(envelopes(&model.vehicle_envelopes))
        .with_layout(PathLayout::new(connection_type, control_points, layer_id(&model.layer)))
        .with_properties(model.properties.clone()))
}

fn export_vehicle(model: &VehicleModel) -> Result<VehicleCreationTo> {
    let thresholds = &model.energy_level_threshold_set;

    Ok(VehicleCreationTo::new(model.name.as_str())?
        .with_bounding_box(bounding_box(&model.bounding_box)?)
        .with_energy_level_threshold_set(EnergyLevelThresholdSet::new(
            thresholds.critical,
            thresholds.good,
            thresholds.sufficiently_recharged,
            thresholds.fully_recharged,
        )?)
        .with_max_velocity(whole_unsigned("vehicle", &model.name, "max velocity", model.max_velocity.as_mm_per_sec())?)
        .with_max_reverse_velocity(whole_unsigned(
            "vehicle",
            &model.name,
            "max reverse velocity",
            model.max_reverse_velocity.as_mm_per_sec(),
        )?)
        .with_envelope_key(model.envelope_key.clone())
        .with_layout(VehicleLayout::new(model.route_color))
        .with_properties(model.properties.clone()))
}

fn export_location_type(model: &LocationTypeModel) -> Result<LocationTypeCreationTo> {
    Ok(LocationTypeCreationTo::new(model.name.as_str())?
        .with_allowed_operations(model.allowed_operations.iter().cloned())
        .with_allowed_peripheral_operations(model.allowed_peripheral_operations.iter().cloned())
        .with_layout(LocationTypeLayout::new(model.default_representation))
        .with_properties(model.properties.clone()))
}

fn export_location(model: &LocationModel, system: &SystemModel) -> Result<LocationCreationTo> {
    let position = Triple::new(
        whole_mm("location", &model.name, "position x", model.position_x.as_mm())?,
        whole_mm("location", &model.name, "position y", model.position_y.as_mm())?,
        0,
    );
    let type_name = model.location_type.value.as_deref().ok_or_else(|| Error::InvalidAttribute {
        element: "location",
        name: model.name.clone(),
        attribute: "location type",
        value: String::new(),
    })?;
    let label_offset = Couple::new(
        parse_coordinate("location", &model.name, "label offset x", &model.label_offset_x)?,
        parse_coordinate("location", &model.name, "label offset y", &model.label_offset_y)?,
    );
    let links: BTreeMap<String, BTreeSet<String>> = system
        .links_of(&model.name)
        .map(|link| (link.start_component.clone(), link.allowed_operations.iter().cloned().collect()))
        .collect();

    Ok(LocationCreationTo::new(model.name.as_str(), type_name, position)?
        .with_links(links)
        .with_locked(model.locked)
        .with_layout(LocationLayout::new(label_offset, model.default_representation, layer_id(&model.layer)))
        .with_properties(model.properties.clone()))
}

fn export_block(model: &BlockModel) -> Result<BlockCreationTo> {
    let block_type = match model.block_type {
        BlockModelType::SingleVehicleOnly => BlockType::SingleVehicleOnly,
        BlockModelType::SameDirectionOnly => BlockType::SameDirectionOnly,
    };

    Ok(BlockCreationTo::new(model.name.as_str())?
        .with_type(block_type)
        .with_member_names(model.elements.iter().cloned())
        .with_layout(BlockLayout::new(model.color))
        .with_properties(model.properties.clone()))
}

// ============================================================================
// Helpers
// ============================================================================

fn out_of_range(element: &'static str, name: &str, attribute: &'static str, value: f64) -> Error {
    Error::InvalidAttribute { element, name: name.to_owned(), attribute, value: value.to_string() }
}

/// Rounds to whole mm. NaN, infinities and values beyond `i64` are rejected.
fn whole_mm(element: &'static str, name: &str, attribute: &'static str, value: f64) -> Result<i64> {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Ok(rounded as i64)
    } else {
        Err(out_of_range(element, name, attribute, value))
    }
}

/// Rounds to a whole unsigned quantity that must fit `T`.
fn whole_unsigned<T: TryFrom<u64>>(element: &'static str, name: &str, attribute: &'static str, value: f64) -> Result<T> {
    let rounded = value.round();
    if !(rounded.is_finite() && rounded >= 0.0 && rounded < u64::MAX as f64) {
        return Err(out_of_range(element, name, attribute, value));
    }
    T::try_from(rounded as u64).map_err(|_| out_of_range(element, name, attribute, value))
}

/// Elements without a resolved layer land on layer 0.
fn layer_id(layer: &Option<LayerWrapper>) -> i32 {
    layer.as_ref().map_or(0, LayerWrapper::id)
}

fn envelopes(models: &[EnvelopeModel]) -> BTreeMap<String, Envelope> {
    models
        .iter()
        .map(|e| (e.key.clone(), Envelope::new(e.vertices.iter().copied())))
        .collect()
}

fn bounding_box(model: &BoundingBoxModel) -> Result<BoundingBoxCreationTo> {
    BoundingBoxCreationTo::new(model.length, model.width, model.height, model.reference_offset)
}

fn parse_coordinate(element: &'static str, name: &str, attribute: &'static str, text: &str) -> Result<i64> {
    text.trim().parse().map_err(|_| Error::InvalidAttribute {
        element,
        name: name.to_owned(),
        attribute,
        value: text.to_owned(),
    })
}

/// Inverse of the `"x,y;x,y"` rendering. The empty string is no points.
fn parse_control_points(path_name: &str, text: &str) -> Result<Vec<Couple>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(';')
        .map(|pair| -> Result<Couple> {
            match pair.split_once(',') {
                Some((x, y)) => Ok(Couple::new(
                    parse_coordinate("path", path_name, "control points", x)?,
                    parse_coordinate("path", path_name, "control points", y)?,
                )),
                None => Err(Error::InvalidAttribute {
                    element: "path",
                    name: path_name.to_owned(),
                    attribute: "control points",
                    value: text.to_owned(),
                }),
            }
        })
        .collect()
}
