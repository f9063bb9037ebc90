//! Decorative element and fairy-light swarms.
//!
//! Both follow the common per-frame algorithm: pick the active target from
//! the backdrop mode, damp the current position toward it, and animate
//! orientation or emissive intensity on top. Neither swarm has a ring target;
//! their chaos/tree blend is binary on the backdrop flag.

use crate::anim::{damp_vec3, ease_in_out_cubic};
use crate::constants::{
    BAUBLE_MOVE_RATE, CHAOS_HALF_EXTENT, LIGHT_MOVE_RATE, TREE_BASE_RADIUS, TREE_HEIGHT,
    WOBBLE_PITCH, WOBBLE_ROLL,
};
use crate::layout::{chaos_position, tree_position};
use crate::state::FrameInput;
use glam::Vec3;
use rand::Rng;

const BAUBLE_PALETTE: [[f32; 3]; 5] = [
    [0.86, 0.18, 0.22], // red
    [0.95, 0.76, 0.22], // gold
    [0.22, 0.55, 0.86], // blue
    [0.88, 0.88, 0.92], // silver
    [0.62, 0.22, 0.72], // violet
];

/// One decorative element (bauble). Targets immutable; `position` and
/// `rotation` are the only per-frame state.
#[derive(Clone, Copy, Debug)]
pub struct Bauble {
    pub chaos_position: Vec3,
    pub tree_position: Vec3,
    pub position: Vec3,
    pub rotation: Vec3,
    pub spin: Vec3,
    pub color: [f32; 3],
    pub scale: f32,
}

pub struct BaubleSwarm {
    baubles: Vec<Bauble>,
}

impl BaubleSwarm {
    pub fn new(rng: &mut impl Rng, count: usize) -> Self {
        let baubles = (0..count)
            .map(|i| {
                let chaos = chaos_position(rng, CHAOS_HALF_EXTENT);
                Bauble {
                    chaos_position: chaos,
                    tree_position: tree_position(rng, TREE_HEIGHT, TREE_BASE_RADIUS),
                    position: chaos,
                    rotation: Vec3::ZERO,
                    spin: Vec3::new(
                        rng.gen_range(-1.2..1.2),
                        rng.gen_range(-1.2..1.2),
                        rng.gen_range(-1.2..1.2),
                    ),
                    color: BAUBLE_PALETTE[i % BAUBLE_PALETTE.len()],
                    scale: rng.gen_range(0.35..0.7),
                }
            })
            .collect();
        Self { baubles }
    }

    #[inline]
    pub fn baubles(&self) -> &[Bauble] {
        &self.baubles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.baubles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.baubles.is_empty()
    }

    pub fn update(&mut self, input: &FrameInput, assembled: bool) {
        for b in &mut self.baubles {
            let target = if assembled {
                b.tree_position
            } else {
                b.chaos_position
            };
            b.position = damp_vec3(b.position, target, BAUBLE_MOVE_RATE, input.dt);
            if assembled {
                // settle into a gentle wobble instead of the free spin
                b.rotation.x = (input.time * 0.7 + b.tree_position.y).sin() * WOBBLE_PITCH;
                b.rotation.z = (input.time * 0.9 + b.tree_position.x).cos() * WOBBLE_ROLL;
            } else {
                b.rotation += b.spin * input.dt;
            }
        }
    }
}

/// One fairy light. Twinkle parameters are fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct FairyLight {
    pub chaos_position: Vec3,
    pub tree_position: Vec3,
    pub position: Vec3,
    pub color: [f32; 3],
    pub twinkle_speed: f32,
    pub twinkle_phase: f32,
}

impl FairyLight {
    /// Emissive intensity in [0, 1]; dark while scattered. `formed_blend` is
    /// the eased foliage progress so the lights fade in with the tree.
    #[inline]
    pub fn emissive(&self, time: f32, formed_blend: f32) -> f32 {
        let twinkle = ((time * self.twinkle_speed + self.twinkle_phase).sin() + 1.0) / 2.0;
        twinkle * ease_in_out_cubic(formed_blend)
    }
}

pub struct LightSwarm {
    lights: Vec<FairyLight>,
}

impl LightSwarm {
    pub fn new(rng: &mut impl Rng, count: usize) -> Self {
        let lights = (0..count)
            .map(|_| {
                let chaos = chaos_position(rng, CHAOS_HALF_EXTENT);
                let warm = rng.gen_range(0.75..1.0);
                FairyLight {
                    chaos_position: chaos,
                    // keep lights slightly off the trunk so they read as a string
                    tree_position: tree_position(rng, TREE_HEIGHT, TREE_BASE_RADIUS * 0.95),
                    position: chaos,
                    color: [1.0, warm, warm * 0.55],
                    twinkle_speed: rng.gen_range(1.5..4.5),
                    twinkle_phase: rng.gen_range(0.0..std::f32::consts::TAU),
                }
            })
            .collect();
        Self { lights }
    }

    #[inline]
    pub fn lights(&self) -> &[FairyLight] {
        &self.lights
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    pub fn update(&mut self, input: &FrameInput, assembled: bool) {
        for l in &mut self.lights {
            let target = if assembled {
                l.tree_position
            } else {
                l.chaos_position
            };
            l.position = damp_vec3(l.position, target, LIGHT_MOVE_RATE, input.dt);
        }
    }
}
