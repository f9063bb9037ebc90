//! Foliage particle field.
//!
//! Per-point data is immutable after construction; the only time-varying
//! state is a single assembly progress scalar. The actual position blend runs
//! on the GPU, fed by the interleaved vertex data from [`ParticleField::vertex_data`]
//! and the uniforms from [`ParticleField::uniforms`]. The host-side
//! [`ParticleField::blended_position`] mirrors the shader math for tests.

use crate::anim::{damp, ease_in_out_cubic};
use crate::constants::{ASSEMBLY_RATE, SHIMMER_AMPLITUDE};
use crate::layout::{chaos_position, tree_position};
use glam::Vec3;
use rand::Rng;

/// One foliage point. Sampled once, never mutated.
#[derive(Clone, Copy, Debug)]
pub struct FoliagePoint {
    pub origin: Vec3,
    pub target: Vec3,
    /// Per-point jitter in [0, 1), drives point size and shimmer phase.
    pub phase: f32,
}

/// Shader uniform values computed per frame for the foliage pipeline.
#[derive(Clone, Copy, Debug)]
pub struct FieldUniforms {
    /// Eased assembly blend in [0, 1].
    pub progress: f32,
    pub time: f32,
    pub point_scale: f32,
}

pub struct ParticleField {
    points: Vec<FoliagePoint>,
    progress: f32,
}

impl ParticleField {
    /// Generate `count` points. Changing the count later requires a full
    /// regeneration; the field is never resized in place.
    pub fn new(rng: &mut impl Rng, count: usize, height: f32, base_radius: f32, chaos_half_extent: f32) -> Self {
        let points = (0..count)
            .map(|_| FoliagePoint {
                origin: chaos_position(rng, chaos_half_extent),
                target: tree_position(rng, height, base_radius),
                phase: rng.gen::<f32>(),
            })
            .collect();
        Self {
            points,
            progress: 0.0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[FoliagePoint] {
        &self.points
    }

    /// Raw assembly progress before easing.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Damp the progress toward 1 when assembled, 0 when scattered.
    pub fn update(&mut self, dt: f32, assembled: bool) {
        let target = if assembled { 1.0 } else { 0.0 };
        self.progress = damp(self.progress, target, ASSEMBLY_RATE, dt);
    }

    pub fn uniforms(&self, time: f32, point_scale: f32) -> FieldUniforms {
        FieldUniforms {
            progress: ease_in_out_cubic(self.progress),
            time,
            point_scale,
        }
    }

    /// Interleaved `origin.xyz, target.xyz, phase` floats, one record per
    /// point, matching the foliage vertex layout.
    pub fn vertex_data(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.points.len() * 7);
        for p in &self.points {
            out.extend_from_slice(&p.origin.to_array());
            out.extend_from_slice(&p.target.to_array());
            out.push(p.phase);
        }
        out
    }

    /// Host-side mirror of the shader blend: origin toward target plus a
    /// small shimmer around the formed position. Noise is visual only and
    /// stays well under the structural scale of the tree.
    pub fn blended_position(&self, index: usize, time: f32) -> Vec3 {
        let p = &self.points[index];
        let shimmer = Vec3::new(
            (time * 0.9 + p.target.y * 0.35 + p.phase * 6.0).sin(),
            (time * 1.1 + p.target.x * 0.40).sin(),
            (time * 0.8 + p.target.z * 0.30).cos(),
        ) * SHIMMER_AMPLITUDE;
        let eased = ease_in_out_cubic(self.progress);
        p.origin.lerp(p.target + shimmer, eased)
    }
}
