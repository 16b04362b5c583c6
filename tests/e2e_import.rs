//! End-to-end tests for the import pipeline.
//!
//! Each test builds transfer objects, converts them (element by element or as
//! a whole batch) and inspects the resulting editable model graph.

use plant_model::convert::{
    import_block, import_location, import_path, import_point, import_vehicle,
};
use plant_model::editable::{
    Angle, BlockModelType, BoundingBoxModel, EnvelopeModel, Length, PathConnectionType,
    PointModelType,
};
use plant_model::model::{
    BlockType, ConnectionType, Layer, LayerGroup, LocationLayout, PathLayout, PointLayout,
    PointType, VehicleLayout,
};
use plant_model::{
    BlockCreationTo, BoundingBoxCreationTo, Color, ConversionConfig, Couple, Envelope, Error,
    ErrorKind, LayoutIndex, LocationCreationTo, LocationTypeCreationTo, PathCreationTo,
    PlantModelCreationTo, PointCreationTo, Pose, ReferencePolicy, Triple, VehicleCreationTo,
    VisualLayoutCreationTo, import_plant_model,
};
use pretty_assertions::assert_eq;

fn layout_with_layer_3() -> VisualLayoutCreationTo {
    VisualLayoutCreationTo::new("VLayout-01")
        .unwrap()
        .with_layer_groups(vec![LayerGroup::new(0, "Default layer group", true)])
        .with_layers(vec![
            Layer::new(0, 0, true, "Default layer", 0),
            Layer::new(3, 1, true, "Stations", 0),
        ])
}

fn index() -> LayoutIndex {
    let layout = layout_with_layer_3();
    LayoutIndex::build(layout.layer_groups(), layout.layers(), &ConversionConfig::strict()).unwrap()
}

fn small_plant() -> PlantModelCreationTo {
    PlantModelCreationTo::new("Demo")
        .unwrap()
        .with_visual_layout(layout_with_layer_3())
        .with_point(PointCreationTo::new("P1").unwrap())
        .with_point(PointCreationTo::new("P2").unwrap())
        .with_path(PathCreationTo::new("P1 --- P2", "P1", "P2").unwrap())
        .with_location_type(LocationTypeCreationTo::new("Transfer").unwrap().with_allowed_operations(["Load"]))
        .with_location(
            LocationCreationTo::new("L1", "Transfer", Triple::new(500, 500, 0))
                .unwrap()
                .with_link("P1", ["Load"]),
        )
        .with_block(BlockCreationTo::new("B1").unwrap().with_member_names(["P1", "P1 --- P2"]))
        .with_vehicle(VehicleCreationTo::new("V1").unwrap())
}

// ============================================================================
// 1. Scenario A: fully populated point
// ============================================================================

#[test]
fn test_point_conversion_scenario() {
    let square = Envelope::new([
        Couple::new(-500, -500),
        Couple::new(500, -500),
        Couple::new(500, 500),
        Couple::new(-500, 500),
    ]);
    let to = PointCreationTo::new("P1")
        .unwrap()
        .with_pose(Pose::new(Triple::new(1000, 2000, 0), 90.0))
        .unwrap()
        .with_type(PointType::Park)
        .with_vehicle_envelopes([("default".to_string(), square.clone())].into_iter().collect())
        .with_max_vehicle_bounding_box(BoundingBoxCreationTo::new(1000, 1000, 1000, Couple::new(0, 0)).unwrap())
        .with_layout(PointLayout::new(Couple::new(10, 20), 3));

    let index = index();
    let model = import_point(&to, &index).unwrap();

    assert_eq!(model.name, "P1");
    assert_eq!(model.position_x, Length::mm(1000.0));
    assert_eq!(model.position_y, Length::mm(2000.0));
    assert_eq!(model.vehicle_orientation_angle, Some(Angle::degrees(90.0)));
    assert_eq!(model.point_type, PointModelType::Park);
    assert_eq!(
        model.vehicle_envelopes,
        vec![EnvelopeModel { key: "default".into(), vertices: square.vertices.to_vec() }]
    );
    assert_eq!(
        model.max_vehicle_bounding_box,
        BoundingBoxModel { length: 1000, width: 1000, height: 1000, reference_offset: Couple::new(0, 0) }
    );
    assert_eq!(model.label_offset_x, "10");
    assert_eq!(model.label_offset_y, "20");
    assert_eq!(model.layer.as_ref(), index.layer_wrapper(3));
}

// ============================================================================
// 2. Scenario B: block type and member order
// ============================================================================

#[test]
fn test_block_conversion_keeps_member_order() {
    let to = BlockCreationTo::new("B1")
        .unwrap()
        .with_type(BlockType::SingleVehicleOnly)
        .with_member_names(["P3", "P1", "P2 --- P3"]);

    let model = import_block(&to).unwrap();
    assert_eq!(model.block_type, BlockModelType::SingleVehicleOnly);
    assert_eq!(model.elements, vec!["P3", "P1", "P2 --- P3"]);
    assert_eq!(model.color, Color::RED);
}

// ============================================================================
// 3. Scenario C: location with a type missing from the batch
// ============================================================================

#[test]
fn test_location_with_unlisted_type_still_converts() {
    let types = vec![
        LocationTypeCreationTo::new("Transfer").unwrap(),
        LocationTypeCreationTo::new("Charger").unwrap(),
    ];
    let to = LocationCreationTo::new("L1", "Workshop", Triple::new(100, 200, 0)).unwrap();

    let model = import_location(&to, &types, &index()).unwrap();
    assert_eq!(model.location_type.value.as_deref(), Some("Workshop"));
    assert_eq!(model.location_type.possible_values, vec!["Transfer", "Charger"]);
    assert!(!model.location_type.is_valid());
}

// ============================================================================
// 4. Scenario D: control point text
// ============================================================================

#[test]
fn test_path_control_points_text() {
    let to = PathCreationTo::new("P1 --- P2", "P1", "P2")
        .unwrap()
        .with_layout(PathLayout::new(ConnectionType::Bezier, [Couple::new(0, 0), Couple::new(10, 20)], 0));

    let model = import_path(&to, &index()).unwrap();
    assert_eq!(model.control_points, "0,0;10,20");
    assert_eq!(model.connection_type, PathConnectionType::Bezier);
    assert_eq!(model.start_component, "P1");
    assert_eq!(model.end_component, "P2");
}

// ============================================================================
// 5. Exhaustive type mapping
// ============================================================================

#[test]
fn test_every_declared_type_converts() {
    let index = index();
    for ty in PointType::ALL {
        let to = PointCreationTo::new("P").unwrap().with_type(ty);
        assert!(import_point(&to, &index).is_ok(), "point type {ty:?}");
    }
    for ty in BlockType::ALL {
        assert!(import_block(&BlockCreationTo::new("B").unwrap().with_type(ty)).is_ok(), "block type {ty:?}");
    }
    for ty in ConnectionType::ALL {
        let to = PathCreationTo::new("A --- B", "A", "B")
            .unwrap()
            .with_layout(PathLayout::default().with_connection_type(ty));
        assert!(import_path(&to, &index).is_ok(), "connection type {ty:?}");
    }
}

#[test]
fn test_unrecognized_variant_fails_loudly() {
    let err = serde_json::from_str::<PointCreationTo>(
        r#"{"name": "P1", "pose": {"position": {"x": 0, "y": 0, "z": 0}}, "type": "REPORT_POSITION"}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("REPORT_POSITION"));

    let err = "SPLINE".parse::<PathConnectionType>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnhandledVariant);
}

// ============================================================================
// 6. Vehicles
// ============================================================================

#[test]
fn test_vehicle_conversion() {
    let to = VehicleCreationTo::new("V1")
        .unwrap()
        .with_max_velocity(1500)
        .with_envelope_key(Some("default".into()))
        .with_layout(VehicleLayout::new(Color::BLUE));

    let model = import_vehicle(&to).unwrap();
    assert_eq!(model.max_velocity.as_mm_per_sec(), 1500.0);
    assert_eq!(model.max_reverse_velocity.as_mm_per_sec(), 1000.0);
    assert_eq!(model.envelope_key.as_deref(), Some("default"));
    assert_eq!(model.route_color, Color::BLUE);
    assert_eq!(model.energy_level_threshold_set.critical, 30);
}

// ============================================================================
// 7. Whole batch
// ============================================================================

#[test]
fn test_import_small_plant() {
    let system = import_plant_model(&small_plant(), &ConversionConfig::default()).unwrap();

    assert_eq!(system.name, "Demo");
    assert_eq!(system.points.len(), 2);
    assert_eq!(system.paths.len(), 1);
    assert_eq!(system.location_types.len(), 1);
    assert_eq!(system.locations.len(), 1);
    assert_eq!(system.blocks.len(), 1);
    assert_eq!(system.vehicles.len(), 1);
    assert_eq!(system.component_count(), 8);

    let link = system.link("P1 --- L1").unwrap();
    assert_eq!(link.start_component, "P1");
    assert_eq!(link.end_component, "L1");
    assert_eq!(link.allowed_operations, vec!["Load"]);
    assert_eq!(system.layout.layer_index().len(), 2);
}

#[test]
fn test_batch_aborts_on_unknown_source_point() {
    let plant = small_plant().with_path(PathCreationTo::new("P9 --- P2", "P9", "P2").unwrap());
    let err = import_plant_model(&plant, &ConversionConfig::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ReferenceIntegrity);
    assert!(matches!(err, Error::ReferenceIntegrity { element: "path", target: "point", .. }));
}

#[test]
fn test_duplicate_names_abort_batch() {
    let plant = small_plant().with_vehicle(VehicleCreationTo::new("V1").unwrap());
    let err = import_plant_model(&plant, &ConversionConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate vehicle name: V1");
}

// ============================================================================
// 8. Dangling layer and group ids: strict vs lenient
// ============================================================================

#[test]
fn test_dangling_layer_id() {
    let plant = small_plant().with_point(
        PointCreationTo::new("P3").unwrap().with_layout(PointLayout::default().with_layer_id(42)),
    );

    let err = import_plant_model(&plant, &ConversionConfig::strict()).unwrap_err();
    assert_eq!(err.to_string(), "point 'P3' references unknown layer '42'");

    let system = import_plant_model(&plant, &ConversionConfig::lenient()).unwrap();
    assert_eq!(system.point("P3").unwrap().layer, None);
    assert!(system.point("P1").unwrap().layer.is_some());
}

#[test]
fn test_dangling_location_layer_id() {
    let plant = small_plant().with_locations(vec![
        LocationCreationTo::new("L1", "Transfer", Triple::default())
            .unwrap()
            .with_layout(LocationLayout::default().with_layer_id(9)),
    ]);
    let err = import_plant_model(&plant, &ConversionConfig::strict()).unwrap_err();
    assert!(matches!(err, Error::ReferenceIntegrity { element: "location", target: "layer", .. }));
}

#[test]
fn test_dangling_group_id() {
    let layout = layout_with_layer_3().with_layers(vec![Layer::new(0, 0, true, "Orphan", 5)]);
    let plant = PlantModelCreationTo::new("Demo")
        .unwrap()
        .with_visual_layout(layout)
        .with_point(PointCreationTo::new("P1").unwrap());

    let err = import_plant_model(&plant, &ConversionConfig::strict()).unwrap_err();
    assert_eq!(err.to_string(), "layer 'Orphan' references unknown layer group '5'");

    let config = ConversionConfig { missing_layer_group: ReferencePolicy::Tolerate, ..ConversionConfig::strict() };
    let system = import_plant_model(&plant, &config).unwrap();
    let wrapper = system.point("P1").unwrap().layer.as_ref().unwrap();
    assert_eq!(wrapper.group, None);
    assert!(wrapper.is_effectively_visible());
}
