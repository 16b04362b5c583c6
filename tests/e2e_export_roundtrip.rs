//! Export round-trip tests: plant model → import → edit (maybe) → export.
//!
//! Without edits in between, export must reproduce the batch that went in,
//! field for field. With edits, the exported TOs reflect them in canonical
//! units.

use plant_model::editable::{Angle, AngleUnit, Length, LengthUnit, Speed, SpeedUnit};
use plant_model::model::{
    BlockLayout, BlockType, ConnectionType, EnergyLevelThresholdSet, ExecutionTrigger, Layer,
    LayerGroup, LocationLayout, LocationRepresentation, LocationTypeLayout, PathLayout,
    PeripheralOperationCreationTo, PointLayout, PointType, VehicleLayout,
};
use plant_model::{
    BlockCreationTo, BoundingBoxCreationTo, Color, ConversionConfig, Couple, CreationTo, Envelope,
    ErrorKind, LocationCreationTo, LocationTypeCreationTo, ModelComponent, PathCreationTo,
    PlantModelCreationTo, PointCreationTo, Pose, Triple, VehicleCreationTo, VisualLayoutCreationTo,
    export_plant_model, import_plant_model,
};
use pretty_assertions::assert_eq;

/// A plant touching every field the import carries.
fn representative_plant() -> PlantModelCreationTo {
    let layout = VisualLayoutCreationTo::new("VLayout-01")
        .unwrap()
        .with_scale_x(40.0)
        .with_scale_y(45.0)
        .with_layer_groups(vec![
            LayerGroup::new(0, "Default layer group", true),
            LayerGroup::new(1, "Hidden", false),
        ])
        .with_layers(vec![
            Layer::new(0, 0, true, "Default layer", 0),
            Layer::new(3, 1, true, "Stations", 0),
            Layer::new(4, 2, false, "Annotations", 1),
        ])
        .with_property("theme", Some("dark"));

    let envelope = Envelope::new([
        Couple::new(-600, -400),
        Couple::new(600, -400),
        Couple::new(600, 400),
        Couple::new(-600, 400),
    ]);

    let p1 = PointCreationTo::new("P1")
        .unwrap()
        .with_pose(Pose::new(Triple::new(1000, 2000, 0), 90.0))
        .unwrap()
        .with_type(PointType::Park)
        .with_vehicle_envelopes([("default".to_string(), envelope.clone())].into_iter().collect())
        .with_max_vehicle_bounding_box(BoundingBoxCreationTo::new(1200, 800, 1500, Couple::new(0, 100)).unwrap())
        .with_layout(PointLayout::new(Couple::new(10, 20), 3))
        .with_property("vendor", Some("acme"));
    let p2 = PointCreationTo::new("P2")
        .unwrap()
        .with_pose(Pose::new(Triple::new(5000, 2000, 0), f64::NAN))
        .unwrap()
        .with_layout(PointLayout::new(Couple::new(-10, -20), 0));

    let path = PathCreationTo::new("P1 --- P2", "P1", "P2")
        .unwrap()
        .with_length(4000)
        .unwrap()
        .with_max_velocity(1500)
        .with_max_reverse_velocity(500)
        .with_locked(true)
        .with_vehicle_envelopes([("default".to_string(), envelope)].into_iter().collect())
        .with_peripheral_operations(vec![
            PeripheralOperationCreationTo::new("Open", "Door")
                .unwrap()
                .with_execution_trigger(ExecutionTrigger::AfterMovement)
                .with_completion_required(true),
        ])
        .with_layout(PathLayout::new(ConnectionType::Bezier3, [Couple::new(20, 40), Couple::new(60, 40)], 3));

    let transfer = LocationTypeCreationTo::new("Transfer")
        .unwrap()
        .with_allowed_operations(["Load", "Unload"])
        .with_allowed_peripheral_operations(["Open"])
        .with_layout(LocationTypeLayout::new(LocationRepresentation::LoadTransferGeneric));
    let door = LocationTypeCreationTo::new("DoorType").unwrap();

    let l1 = LocationCreationTo::new("L1", "Transfer", Triple::new(1000, 3000, 0))
        .unwrap()
        .with_link("P1", ["Load", "Unload"])
        .with_link("P2", ["Unload"])
        .with_layout(LocationLayout::new(Couple::new(5, 5), LocationRepresentation::WorkingAlt1, 3));
    let door_location = LocationCreationTo::new("Door", "DoorType", Triple::new(3000, 2500, 0))
        .unwrap()
        .with_locked(true)
        .with_layout(LocationLayout::default().with_layer_id(4));

    let block = BlockCreationTo::new("B1")
        .unwrap()
        .with_type(BlockType::SameDirectionOnly)
        .with_member_names(["P1 --- P2", "P1"])
        .with_layout(BlockLayout::new(Color::rgb(0x12, 0x34, 0x56)));

    let vehicle = VehicleCreationTo::new("V1")
        .unwrap()
        .with_bounding_box(BoundingBoxCreationTo::new(1000, 600, 400, Couple::new(-50, 0)).unwrap())
        .with_energy_level_threshold_set(EnergyLevelThresholdSet::new(20, 60, 40, 95).unwrap())
        .with_max_velocity(2000)
        .with_envelope_key(Some("default".into()))
        .with_layout(VehicleLayout::new(Color::GREEN));

    PlantModelCreationTo::new("Demo plant")
        .unwrap()
        .with_property("version", Some("6.2"))
        .with_visual_layout(layout)
        .with_points(vec![p1, p2])
        .with_path(path)
        .with_location_types(vec![transfer, door])
        .with_locations(vec![l1, door_location])
        .with_block(block)
        .with_vehicle(vehicle)
}

// ============================================================================
// 1. Import → export reproduces the batch
// ============================================================================

#[test]
fn test_import_export_round_trip() {
    let plant = representative_plant();
    let system = import_plant_model(&plant, &ConversionConfig::default()).unwrap();
    let exported = export_plant_model(&system).unwrap();
    assert_eq!(exported, plant);
}

#[test]
fn test_round_trip_is_stable() {
    let plant = representative_plant();
    let config = ConversionConfig::default();
    let once = export_plant_model(&import_plant_model(&plant, &config).unwrap()).unwrap();
    let twice = export_plant_model(&import_plant_model(&once, &config).unwrap()).unwrap();
    assert_eq!(once, twice);
}

// ============================================================================
// 2. JSON round trip of the whole batch
// ============================================================================

#[test]
fn test_plant_json_round_trip() {
    let plant = representative_plant();
    let json = serde_json::to_string_pretty(&plant).unwrap();
    let back: PlantModelCreationTo = serde_json::from_str(&json).unwrap();
    assert_eq!(back, plant);
}

#[test]
fn test_minimal_json_gets_defaults() {
    let plant: PlantModelCreationTo = serde_json::from_str(
        r#"{
            "name": "Mini",
            "points": [{"name": "P1", "pose": {"position": {"x": 1, "y": 2, "z": 0}}}]
        }"#,
    )
    .unwrap();

    assert_eq!(plant.visual_layout().name(), "VLayout-01");
    assert_eq!(plant.points()[0].pose().orientation(), None);

    let system = import_plant_model(&plant, &ConversionConfig::default()).unwrap();
    assert_eq!(system.points[0].layer.as_ref().map(|w| w.id()), Some(0));
}

#[test]
fn test_layout_without_layers_gets_default_layer() {
    let plant: PlantModelCreationTo = serde_json::from_str(
        r#"{
            "name": "Mini",
            "visualLayout": {"name": "V"},
            "points": [{"name": "P1", "pose": {"position": {"x": 0, "y": 0, "z": 0}}}]
        }"#,
    )
    .unwrap();

    let layout = plant.visual_layout();
    assert_eq!(layout.name(), "V");
    assert_eq!(layout.layer_groups(), &[LayerGroup::new(0, "Default layer group", true)]);
    assert_eq!(layout.layers(), &[Layer::new(0, 0, true, "Default layer", 0)]);

    let system = import_plant_model(&plant, &ConversionConfig::strict()).unwrap();
    assert_eq!(system.points[0].layer.as_ref().map(|w| w.id()), Some(0));
}

// ============================================================================
// 3. Edits show up in the export, in canonical units
// ============================================================================

#[test]
fn test_edits_exported_in_canonical_units() {
    let mut system = import_plant_model(&representative_plant(), &ConversionConfig::default()).unwrap();

    let path = system.path_mut("P1 --- P2").unwrap();
    path.length = Length::new(2.5, LengthUnit::M);
    path.max_velocity = Speed::new(3.6, SpeedUnit::KmPerHour);
    path.control_points = String::new();

    let point = system.point_mut("P2").unwrap();
    point.vehicle_orientation_angle = Some(Angle::new(std::f64::consts::FRAC_PI_2, AngleUnit::Rad));
    point.position_x = Length::new(1.0, LengthUnit::M);
    point.set_name("P2b".into());

    let exported = export_plant_model(&system).unwrap();

    let path = &exported.paths()[0];
    assert_eq!(path.length(), 2500);
    assert_eq!(path.max_velocity(), 1000);
    assert!(path.layout().control_points().is_empty());

    let point = &exported.points()[1];
    assert_eq!(point.name(), "P2b");
    assert_eq!(point.pose().position, Some(Triple::new(1000, 2000, 0)));
    assert!((point.pose().orientation_angle - 90.0).abs() < 1e-9);
}

#[test]
fn test_links_fold_back_into_locations() {
    let mut system = import_plant_model(&representative_plant(), &ConversionConfig::default()).unwrap();
    system.links.retain(|link| link.start_component != "P2");

    let exported = export_plant_model(&system).unwrap();
    let l1 = exported.locations().iter().find(|l| l.name() == "L1").unwrap();
    assert_eq!(l1.links().keys().collect::<Vec<_>>(), vec!["P1"]);
}

// ============================================================================
// 4. Malformed editor text
// ============================================================================

#[test]
fn test_malformed_label_offset_fails_export() {
    let mut system = import_plant_model(&representative_plant(), &ConversionConfig::default()).unwrap();
    system.point_mut("P1").unwrap().label_offset_x = "ten".into();

    let err = export_plant_model(&system).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAttribute);
    assert_eq!(err.to_string(), "point 'P1' has malformed label offset x: 'ten'");
}

#[test]
fn test_malformed_control_points_fail_export() {
    let mut system = import_plant_model(&representative_plant(), &ConversionConfig::default()).unwrap();
    system.path_mut("P1 --- P2").unwrap().control_points = "20,40;60".into();

    let err = export_plant_model(&system).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAttribute);
}

// ============================================================================
// 5. Editor values the transfer objects cannot carry
// ============================================================================

#[test]
fn test_negative_speed_fails_export() {
    let mut system = import_plant_model(&representative_plant(), &ConversionConfig::default()).unwrap();
    system.vehicles[0].max_velocity = Speed::mm_per_sec(-250.0);

    let err = export_plant_model(&system).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAttribute);
    assert_eq!(err.to_string(), "vehicle 'V1' has malformed max velocity: '-250'");

    let mut system = import_plant_model(&representative_plant(), &ConversionConfig::default()).unwrap();
    system.path_mut("P1 --- P2").unwrap().max_reverse_velocity = Speed::new(-1.0, SpeedUnit::KmPerHour);
    assert_eq!(export_plant_model(&system).unwrap_err().kind(), ErrorKind::InvalidAttribute);
}

#[test]
fn test_non_finite_position_fails_export() {
    let mut system = import_plant_model(&representative_plant(), &ConversionConfig::default()).unwrap();
    system.point_mut("P1").unwrap().position_x = Length::mm(f64::NAN);

    let err = export_plant_model(&system).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAttribute);
    assert_eq!(err.to_string(), "point 'P1' has malformed position x: 'NaN'");

    let mut system = import_plant_model(&representative_plant(), &ConversionConfig::default()).unwrap();
    system.location_mut("Door").unwrap().position_y = Length::new(f64::INFINITY, LengthUnit::M);
    assert_eq!(export_plant_model(&system).unwrap_err().kind(), ErrorKind::InvalidAttribute);
}

#[test]
fn test_location_without_type_fails_export() {
    let mut system = import_plant_model(&representative_plant(), &ConversionConfig::default()).unwrap();
    system.location_mut("L1").unwrap().location_type.value = None;

    let err = export_plant_model(&system).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAttribute);
    assert_eq!(err.to_string(), "location 'L1' has malformed location type: ''");
}
