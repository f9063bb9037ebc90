// Distribution properties of the layout generators.

use rand::prelude::*;
use std::f32::consts::TAU;
use tree_core::layout::{chaos_position, ring_angle, ring_position, tree_position};

#[test]
fn tree_samples_stay_inside_the_cone() {
    let mut rng = StdRng::seed_from_u64(7);
    let height = 22.0_f32;
    let base_radius = 9.0_f32;
    for i in 0..10_000 {
        let p = tree_position(&mut rng, height, base_radius);
        assert!(p.y.abs() <= height / 2.0 + 1e-4, "sample {i}: y={} out of range", p.y);
        let normalized_y = (p.y + height / 2.0) / height;
        let bound = base_radius * (1.0 - normalized_y);
        let r = (p.x * p.x + p.z * p.z).sqrt();
        assert!(
            r <= bound + 1e-3,
            "sample {i}: radius {r} exceeds taper bound {bound} at y={}",
            p.y
        );
    }
}

#[test]
fn tree_samples_cover_the_height_range() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut lowest = f32::MAX;
    let mut highest = f32::MIN;
    for _ in 0..10_000 {
        let p = tree_position(&mut rng, 22.0, 9.0);
        lowest = lowest.min(p.y);
        highest = highest.max(p.y);
    }
    assert!(lowest < -9.0, "no samples near the base: {lowest}");
    assert!(highest > 9.0, "no samples near the apex: {highest}");
}

#[test]
fn chaos_samples_fill_the_cube() {
    let mut rng = StdRng::seed_from_u64(3);
    let half = 40.0_f32;
    for _ in 0..5_000 {
        let p = chaos_position(&mut rng, half);
        for c in p.to_array() {
            assert!(c.abs() <= half, "component {c} outside half-extent");
        }
    }
}

#[test]
fn ring_angles_are_uniform_one_per_image() {
    let n = 12;
    let mut angles: Vec<f32> = (0..n).map(|i| ring_angle(i, n)).collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
    for (i, a) in angles.iter().enumerate() {
        let expected = i as f32 * TAU / n as f32;
        assert!(
            (a - expected).abs() < 1e-5,
            "angle {i}: got {a}, expected {expected}"
        );
    }
}

#[test]
fn ring_angle_shares_class_modulo_image_count() {
    let n = 5;
    for i in 0..20 {
        assert_eq!(ring_angle(i, n), ring_angle(i % n, n), "ornament {i}");
    }
}

#[test]
fn ring_handles_zero_images_without_dividing_by_zero() {
    // zero image slots clamp to one effective slot: everything at angle zero
    for i in 0..4 {
        assert_eq!(ring_angle(i, 0), 0.0);
        let p = ring_position(i, 0, 14.0);
        assert!(p.is_finite());
        assert!((p.x - 14.0).abs() < 1e-5);
    }
}

#[test]
fn ring_positions_sit_on_the_circle() {
    let radius = 14.0_f32;
    for i in 0..9 {
        let p = ring_position(i, 9, radius);
        let r = (p.x * p.x + p.z * p.z).sqrt();
        assert!((r - radius).abs() < 1e-4, "ornament {i}: radius {r}");
    }
}
