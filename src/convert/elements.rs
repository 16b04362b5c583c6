//! Element converters: one pure function per TO kind.
//!
//! Each takes a TO (plus the layout index, and for locations the sibling
//! location types) and builds a fresh editable model. Nothing here keeps
//! state between calls.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::LayoutIndex;
use crate::config::ConversionConfig;
use crate::editable::{
    Angle, BlockModel, BlockModelType, BoundingBoxModel, EnergyLevelThresholdSetModel,
    EnvelopeModel, Length, LinkModel, LocationModel, LocationTypeModel, LayoutModel,
    PathConnectionType, PathModel, PeripheralOperationModel, PointModel, PointModelType,
    SelectionProperty, Speed, VehicleModel,
};
use crate::model::*;
use crate::Result;

pub fn import_point(to: &PointCreationTo, layout: &LayoutIndex) -> Result<PointModel> {
    debug!("Importing point '{}'", to.name());
    let pose = to.pose();
    let position = pose.position.unwrap_or_default();

    Ok(PointModel {
        name: to.name().to_owned(),
        position_x: Length::mm(position.x as f64),
        position_y: Length::mm(position.y as f64),
        vehicle_orientation_angle: pose.orientation().map(Angle::degrees),
        point_type: map_point_type(to.point_type()),
        vehicle_envelopes: envelope_models(to.vehicle_envelopes()),
        max_vehicle_bounding_box: bounding_box_model(to.max_vehicle_bounding_box()),
        properties: to.properties().clone(),
        label_offset_x: to.layout().label_offset().x.to_string(),
        label_offset_y: to.layout().label_offset().y.to_string(),
        label_orientation_angle: String::new(),
        layer: layout.resolve(to.layout().layer_id(), "point", to.name())?,
    })
}

pub fn import_path(to: &PathCreationTo, layout: &LayoutIndex) -> Result<PathModel> {
    debug!("Importing path '{}'", to.name());

    Ok(PathModel {
        name: to.name().to_owned(),
        length: Length::mm(to.length() as f64),
        max_velocity: Speed::mm_per_sec(f64::from(to.max_velocity())),
        max_reverse_velocity: Speed::mm_per_sec(f64::from(to.max_reverse_velocity())),
        start_component: to.src_point_name().to_owned(),
        end_component: to.dest_point_name().to_owned(),
        locked: to.is_locked(),
        vehicle_envelopes: envelope_models(to.vehicle_envelopes()),
        properties: to.properties().clone(),
        peripheral_operations: to
            .peripheral_operations()
            .iter()
            .map(|op| PeripheralOperationModel {
                location_name: op.location_name().to_owned(),
                operation: op.operation().to_owned(),
                execution_trigger: op.execution_trigger(),
                completion_required: op.is_completion_required(),
            })
            .collect(),
        connection_type: to.layout().connection_type().name().parse::<PathConnectionType>()?,
        control_points: render_control_points(to.layout().control_points()),
        layer: layout.resolve(to.layout().layer_id(), "path", to.name())?,
    })
}

pub fn import_vehicle(to: &VehicleCreationTo) -> Result<VehicleModel> {
    debug!("Importing vehicle '{}'", to.name());
    let thresholds = to.energy_level_threshold_set();

    Ok(VehicleModel {
        name: to.name().to_owned(),
        bounding_box: bounding_box_model(to.bounding_box()),
        max_velocity: Speed::mm_per_sec(f64::from(to.max_velocity())),
        max_reverse_velocity: Speed::mm_per_sec(f64::from(to.max_reverse_velocity())),
        energy_level_threshold_set: EnergyLevelThresholdSetModel {
            critical: thresholds.critical(),
            good: thresholds.good(),
            sufficiently_recharged: thresholds.sufficiently_recharged(),
            fully_recharged: thresholds.fully_recharged(),
        },
        envelope_key: to.envelope_key().map(str::to_owned),
        route_color: to.layout().route_color(),
        properties: to.properties().clone(),
    })
}

pub fn import_location_type(to: &LocationTypeCreationTo) -> Result<LocationTypeModel> {
    debug!("Importing location type '{}'", to.name());

    Ok(LocationTypeModel {
        name: to.name().to_owned(),
        allowed_operations: to.allowed_operations().to_vec(),
        allowed_peripheral_operations: to.allowed_peripheral_operations().to_vec(),
        default_representation: to.layout().location_representation(),
        properties: to.properties().clone(),
    })
}

/// The chosen type is the location's own type name, whether or not it is one
/// of the candidates; validating that is left to the caller.
pub fn import_location(
    to: &LocationCreationTo,
    location_types: &[LocationTypeCreationTo],
    layout: &LayoutIndex,
) -> Result<LocationModel> {
    debug!("Importing location '{}'", to.name());
    let mut possible_values: Vec<String> = Vec::with_capacity(location_types.len());
    for ty in location_types {
        if !possible_values.iter().any(|name| name == ty.name()) {
            possible_values.push(ty.name().to_owned());
        }
    }

    Ok(LocationModel {
        name: to.name().to_owned(),
        position_x: Length::mm(to.position().x as f64),
        position_y: Length::mm(to.position().y as f64),
        location_type: SelectionProperty {
            possible_values,
            value: Some(to.type_name().to_owned()),
        },
        locked: to.is_locked(),
        properties: to.properties().clone(),
        label_offset_x: to.layout().label_offset().x.to_string(),
        label_offset_y: to.layout().label_offset().y.to_string(),
        label_orientation_angle: String::new(),
        default_representation: to.layout().location_representation(),
        layer: layout.resolve(to.layout().layer_id(), "location", to.name())?,
    })
}

/// Builds the link between `point_name` and `location`, drawn on the
/// location's layer.
pub fn import_location_link(
    location: &LocationCreationTo,
    point_name: &str,
    operations: &BTreeSet<String>,
    layout: &LayoutIndex,
) -> Result<LinkModel> {
    let name = link_name(point_name, location.name());
    debug!("Importing link '{name}'");
    let layer = layout.resolve(location.layout().layer_id(), "link", &name)?;

    Ok(LinkModel {
        name,
        allowed_operations: operations.iter().cloned().collect(),
        start_component: point_name.to_owned(),
        end_component: location.name().to_owned(),
        properties: PropertyBag::new(),
        layer,
    })
}

pub fn import_block(to: &BlockCreationTo) -> Result<BlockModel> {
    debug!("Importing block '{}'", to.name());

    Ok(BlockModel {
        name: to.name().to_owned(),
        block_type: map_block_type(to.block_type()),
        elements: to.member_names().to_vec(),
        color: to.layout().color(),
        properties: to.properties().clone(),
    })
}

/// Builds the layout model together with its layer index.
pub fn import_layout(to: &VisualLayoutCreationTo, config: &ConversionConfig) -> Result<LayoutModel> {
    debug!("Importing visual layout '{}'", to.name());
    let index = LayoutIndex::build(to.layer_groups(), to.layers(), config)?;

    let mut model = LayoutModel::new(to.name(), index);
    model.scale_x = Length::mm(to.scale_x());
    model.scale_y = Length::mm(to.scale_y());
    model.properties = to.properties().clone();
    Ok(model)
}

/// `"<point> --- <location>"`
pub fn link_name(point_name: &str, location_name: &str) -> String {
    format!("{point_name} --- {location_name}")
}

/// `[(0,0), (10,20)]` → `"0,0;10,20"`
pub fn render_control_points(points: &[Couple]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(";")
}

// ============================================================================
// Enum mapping
// ============================================================================

fn map_point_type(ty: PointType) -> PointModelType {
    match ty {
        PointType::Halt => PointModelType::Halt,
        PointType::Park => PointModelType::Park,
    }
}

fn map_block_type(ty: BlockType) -> BlockModelType {
    match ty {
        BlockType::SingleVehicleOnly => BlockModelType::SingleVehicleOnly,
        BlockType::SameDirectionOnly => BlockModelType::SameDirectionOnly,
    }
}

fn envelope_models(envelopes: &BTreeMap<String, Envelope>) -> Vec<EnvelopeModel> {
    envelopes
        .iter()
        .map(|(key, envelope)| EnvelopeModel { key: key.clone(), vertices: envelope.vertices.to_vec() })
        .collect()
}

fn bounding_box_model(bbox: &BoundingBoxCreationTo) -> BoundingBoxModel {
    BoundingBoxModel {
        length: bbox.length(),
        width: bbox.width(),
        height: bbox.height(),
        reference_offset: bbox.reference_offset(),
    }
}
