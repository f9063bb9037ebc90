// Clamping behavior of the configuration surface: out-of-range input is
// silently clamped to the nearest documented bound, never rejected.

use tree_core::config::{
    DeviceTier, SceneConfig, CAMERA_DISTANCE_BOUNDS, FOLIAGE_COUNT_BOUNDS, LIGHT_COUNT_BOUNDS,
    MIGRATION_SPEED_BOUNDS, PHOTO_COUNT_BOUNDS, PHOTO_SCALE_BOUNDS, RING_RADIUS_BOUNDS,
};

#[test]
fn foliage_count_clamps_to_documented_bounds() {
    let mut cfg = SceneConfig::default();
    cfg.set_foliage_count(-5);
    assert_eq!(cfg.foliage_count, FOLIAGE_COUNT_BOUNDS.0);
    cfg.set_foliage_count(999_999);
    assert_eq!(cfg.foliage_count, FOLIAGE_COUNT_BOUNDS.1);
    cfg.set_foliage_count(24_000);
    assert_eq!(cfg.foliage_count, 24_000);
}

#[test]
fn ornament_counts_allow_zero() {
    let mut cfg = SceneConfig::default();
    cfg.set_photo_count(0);
    cfg.set_light_count(0);
    cfg.set_bauble_count(0);
    assert_eq!(cfg.wall.photo_count, 0);
    assert_eq!(cfg.light_count, 0);
    assert_eq!(cfg.bauble_count, 0);
    cfg.set_photo_count(i64::MAX);
    assert_eq!(cfg.wall.photo_count, PHOTO_COUNT_BOUNDS.1);
    cfg.set_light_count(-1);
    assert_eq!(cfg.light_count, LIGHT_COUNT_BOUNDS.0);
}

#[test]
fn float_fields_clamp_and_survive_non_numeric_input() {
    let mut cfg = SceneConfig::default();
    cfg.set_camera_distance(1.0);
    assert_eq!(cfg.camera_distance, CAMERA_DISTANCE_BOUNDS.0);
    cfg.set_camera_distance(9_000.0);
    assert_eq!(cfg.camera_distance, CAMERA_DISTANCE_BOUNDS.1);
    // parse failures surface as NaN from the frontend; fall to the low bound
    cfg.set_photo_scale(f32::NAN);
    assert_eq!(cfg.wall.photo_scale, PHOTO_SCALE_BOUNDS.0);
    // signed infinities behave like any other out-of-range value
    cfg.set_ring_radius(f32::INFINITY);
    assert_eq!(cfg.wall.ring_radius, RING_RADIUS_BOUNDS.1);
    cfg.set_ring_radius(f32::NEG_INFINITY);
    assert_eq!(cfg.wall.ring_radius, RING_RADIUS_BOUNDS.0);
    cfg.set_migration_speed(0.0);
    assert_eq!(cfg.wall.migration_speed, MIGRATION_SPEED_BOUNDS.0);
}

#[test]
fn device_tier_scales_counts() {
    assert_eq!(DeviceTier::Full.scale_count(24_000), 24_000);
    assert_eq!(DeviceTier::Reduced.scale_count(24_000), 12_000);
    assert_eq!(DeviceTier::Reduced.scale_count(1), 0);
}

#[test]
fn defaults_are_within_their_own_bounds() {
    let cfg = SceneConfig::default();
    assert!(cfg.foliage_count >= FOLIAGE_COUNT_BOUNDS.0 && cfg.foliage_count <= FOLIAGE_COUNT_BOUNDS.1);
    assert!(cfg.camera_distance >= CAMERA_DISTANCE_BOUNDS.0 && cfg.camera_distance <= CAMERA_DISTANCE_BOUNDS.1);
    assert!(cfg.wall.photo_scale >= PHOTO_SCALE_BOUNDS.0 && cfg.wall.photo_scale <= PHOTO_SCALE_BOUNDS.1);
    assert!(cfg.wall.migration_speed >= MIGRATION_SPEED_BOUNDS.0);
}
