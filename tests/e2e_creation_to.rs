//! Integration tests for the creation transfer objects.
//!
//! Derivation laws (`with_property`, `with_name`), constructor validation and
//! the JSON wire shape, exercised through the public crate surface only.

use std::collections::BTreeMap;

use plant_model::model::{
    EnergyLevelThresholdSet, LocationRepresentation, PointLayout, PointType,
};
use plant_model::{
    BlockCreationTo, BoundingBoxCreationTo, CreationTo, Couple, Envelope, ErrorKind,
    PathCreationTo, PlantModelCreationTo, PointCreationTo, Pose, Triple, VehicleCreationTo,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn sample_point() -> PointCreationTo {
    PointCreationTo::new("P1")
        .unwrap()
        .with_pose(Pose::new(Triple::new(1000, 2000, 0), 90.0))
        .unwrap()
        .with_type(PointType::Park)
        .with_property("vendor", Some("acme"))
        .with_layout(PointLayout::new(Couple::new(10, 20), 3))
}

// ============================================================================
// 1. with_property: round-trip removal
// ============================================================================

proptest! {
    #[test]
    fn test_with_property_then_remove_restores_original(
        key in "[a-z]{1,8}",
        value in ".{0,16}",
    ) {
        let original = sample_point();
        prop_assume!(original.property(&key).is_none());

        let restored = original
            .with_property(&key, Some(value.as_str()))
            .with_property(&key, None);
        prop_assert_eq!(restored, original);
    }

    #[test]
    fn test_with_property_is_readable(key in "[a-z]{1,8}", value in ".{0,16}") {
        let point = sample_point().with_property(&key, Some(value.as_str()));
        prop_assert_eq!(point.property(&key), Some(value.as_str()));
    }
}

// ============================================================================
// 2. Empty string is a value, not a removal
// ============================================================================

#[test]
fn test_empty_string_is_not_removal() {
    let point = sample_point().with_property("note", Some(""));
    assert_eq!(point.property("note"), Some(""));
    assert!(point.properties().contains_key("note"));
}

#[test]
fn test_removing_absent_key_is_noop() {
    let point = sample_point();
    assert_eq!(point.with_property("missing", None), point);
}

// ============================================================================
// 3. with_name
// ============================================================================

#[test]
fn test_with_name_twice_compares_equal() {
    let point = sample_point();
    let once = point.with_name("P7").unwrap();
    let twice = once.with_name("P7").unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_with_name_changes_only_the_name() {
    let point = sample_point();
    let renamed = point.with_name("P7").unwrap();
    assert_eq!(renamed.name(), "P7");
    assert_eq!(renamed.pose(), point.pose());
    assert_eq!(renamed.point_type(), point.point_type());
    assert_eq!(renamed.properties(), point.properties());
    assert_eq!(renamed.layout(), point.layout());
    assert_eq!(point.name(), "P1");
}

#[test]
fn test_with_name_rejects_empty() {
    let err = sample_point().with_name("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Construction);
}

// ============================================================================
// 4. Constructor validation
// ============================================================================

#[test]
fn test_pose_without_position_rejected() {
    let pose = Pose { position: None, orientation_angle: 0.0 };
    let err = PointCreationTo::new("P1").unwrap().with_pose(pose).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Construction);
}

#[test]
fn test_path_requires_end_points_and_length() {
    assert!(PathCreationTo::new("P1 --- P2", "", "P2").is_err());
    let path = PathCreationTo::new("P1 --- P2", "P1", "P2").unwrap();
    assert_eq!(path.length(), 1);
    assert!(path.with_length(0).is_err());
}

#[test]
fn test_bounding_box_dimensions_positive() {
    assert!(BoundingBoxCreationTo::new(0, 1000, 1000, Couple::default()).is_err());
    assert!(BoundingBoxCreationTo::new(1, 1, 1, Couple::new(-5, 5)).is_ok());
}

#[test]
fn test_energy_thresholds_validated() {
    assert!(EnergyLevelThresholdSet::new(30, 90, 30, 90).is_ok());
    assert!(EnergyLevelThresholdSet::new(50, 40, 30, 90).is_err());
    assert!(EnergyLevelThresholdSet::new(30, 90, 30, 101).is_err());
}

#[test]
fn test_block_members_deduplicated() {
    let block = BlockCreationTo::new("B1").unwrap().with_member_names(["P2", "P1", "P2"]);
    assert_eq!(block.member_names(), ["P2", "P1"]);
}

#[test]
fn test_derivation_leaves_receiver_untouched() {
    let vehicle = VehicleCreationTo::new("V1").unwrap();
    let faster = vehicle.with_max_velocity(2000);
    assert_eq!(vehicle.max_velocity(), 1000);
    assert_eq!(faster.max_velocity(), 2000);
}

// ============================================================================
// 5. JSON wire shape
// ============================================================================

#[test]
fn test_point_json_round_trip() {
    let envelopes: BTreeMap<_, _> = [(
        "default".to_string(),
        Envelope::new([Couple::new(-500, -500), Couple::new(500, -500), Couple::new(500, 500), Couple::new(-500, 500)]),
    )]
    .into_iter()
    .collect();
    let point = sample_point().with_vehicle_envelopes(envelopes);

    let json = serde_json::to_string(&point).unwrap();
    let back: PointCreationTo = serde_json::from_str(&json).unwrap();
    assert_eq!(back, point);
}

#[test]
fn test_unknown_angle_serialized_as_null() {
    let point = PointCreationTo::new("P1").unwrap();
    let json = serde_json::to_value(&point).unwrap();
    assert!(json["pose"]["orientationAngle"].is_null());

    let back: PointCreationTo = serde_json::from_value(json).unwrap();
    assert_eq!(back.pose().orientation(), None);
}

#[test]
fn test_empty_name_rejected_on_deserialize() {
    let err = serde_json::from_str::<PlantModelCreationTo>(r#"{"name": ""}"#).unwrap_err();
    assert!(err.to_string().contains("name must not be empty"));
}

#[test]
fn test_unknown_representation_rejected() {
    assert!("FORKLIFT".parse::<LocationRepresentation>().is_err());
    assert_eq!(
        "LOAD_TRANSFER_GENERIC".parse::<LocationRepresentation>().unwrap(),
        LocationRepresentation::LoadTransferGeneric
    );
}
