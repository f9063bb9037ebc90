// Host-side tests for the damping primitives everything else builds on.

use glam::Vec3;
use tree_core::anim::{damp, damp_vec3, ease_in_out_cubic};

#[test]
fn damp_is_identity_at_target() {
    for &rate in &[0.1, 1.0, 2.5, 50.0] {
        for &dt in &[0.0, 0.004, 0.016, 1.0] {
            let x = 3.75_f32;
            assert_eq!(damp(x, x, rate, dt), x, "rate={rate} dt={dt}");
        }
    }
}

#[test]
fn damp_strictly_decreases_error_and_converges() {
    let target = 10.0_f32;
    let mut current = -4.0_f32;
    let mut prev_err = (current - target).abs();
    let mut iterations = 0;
    while (current - target).abs() > 1e-4 {
        current = damp(current, target, 2.5, 0.016);
        let err = (current - target).abs();
        assert!(
            err < prev_err,
            "error did not shrink at iteration {iterations}: {err} >= {prev_err}"
        );
        prev_err = err;
        iterations += 1;
        assert!(iterations < 100_000, "damp failed to converge");
    }
}

#[test]
fn damp_never_overshoots() {
    let mut current = 0.0_f32;
    let target = 1.0_f32;
    for _ in 0..10_000 {
        current = damp(current, target, 8.0, 0.016);
        assert!(current <= target, "overshoot: {current}");
    }
}

#[test]
fn damp_is_frame_rate_independent() {
    let current = 2.0_f32;
    let target = -7.0_f32;
    let rate = 1.7_f32;
    for &total in &[0.008_f32, 0.016, 0.1, 0.5] {
        let whole = damp(current, target, rate, total);
        let halves = damp(damp(current, target, rate, total / 2.0), target, rate, total / 2.0);
        assert!(
            (whole - halves).abs() < 1e-5,
            "chunking changed the result for dt={total}: {whole} vs {halves}"
        );
    }
}

#[test]
fn damp_vec3_matches_componentwise_scalar() {
    let current = Vec3::new(1.0, -2.0, 3.5);
    let target = Vec3::new(-4.0, 0.5, 9.0);
    let v = damp_vec3(current, target, 2.0, 0.02);
    for i in 0..3 {
        let s = damp(current[i], target[i], 2.0, 0.02);
        assert!((v[i] - s).abs() < 1e-6, "component {i}");
    }
}

#[test]
fn ease_in_out_cubic_endpoints_and_shape() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    // clamped outside [0, 1]
    assert_eq!(ease_in_out_cubic(-2.0), 0.0);
    assert_eq!(ease_in_out_cubic(3.0), 1.0);
    // monotonic
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = ease_in_out_cubic(i as f32 / 100.0);
        assert!(v >= prev, "easing not monotonic at step {i}");
        prev = v;
    }
}
