//! Canonical target-position generators.
//!
//! Each particle and ornament gets its targets sampled exactly once at
//! construction; only the blend between them changes per frame.

use crate::constants::RING_WOBBLE;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Uniform random point inside an axis-aligned cube of the given half-extent.
pub fn chaos_position(rng: &mut impl Rng, half_extent: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(-half_extent..half_extent),
        rng.gen_range(-half_extent..half_extent),
        rng.gen_range(-half_extent..half_extent),
    )
}

/// Sample a point inside an inverted cone: wide at the base, zero at the apex.
///
/// Height is uniform over `[-h/2, h/2]`; the radius bound tapers linearly
/// with height and the radial distance is uniform within it. Density is
/// therefore higher near the trunk than a uniform-disk sampling would give,
/// which reads as a fuller tree.
pub fn tree_position(rng: &mut impl Rng, height: f32, base_radius: f32) -> Vec3 {
    let y = rng.gen_range(-height / 2.0..height / 2.0);
    let normalized_y = (y + height / 2.0) / height;
    let radius_bound = base_radius * (1.0 - normalized_y);
    let r = rng.gen_range(0.0..radius_bound.max(f32::EPSILON));
    let theta = rng.gen_range(0.0..TAU);
    Vec3::new(r * theta.cos(), y, r * theta.sin())
}

/// Angle class for ornament `index` when `image_count` images are on the wall.
///
/// Ornaments sharing an image index share an angle. A zero image count is
/// treated as one slot so the division is always defined.
#[inline]
pub fn ring_angle(index: usize, image_count: usize) -> f32 {
    let n = image_count.max(1);
    (index % n) as f32 * (TAU / n as f32)
}

/// Position on the photo-wall circle in the XZ plane, with a small sinusoidal
/// Y offset for visual variety.
pub fn ring_position(index: usize, image_count: usize, radius: f32) -> Vec3 {
    let theta = ring_angle(index, image_count);
    Vec3::new(
        radius * theta.cos(),
        (2.0 * theta).sin() * RING_WOBBLE,
        radius * theta.sin(),
    )
}
