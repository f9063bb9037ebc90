//! Photo ornament swarm: tri-target blending, selection, and the double-sided
//! card expansion consumed by the renderer.
//!
//! Unlike the other swarms, photos carry a third (ring) target and blend on
//! the continuous gallery value rather than the discrete mode, so a mode
//! switch mid-flight simply redirects the damping.

use crate::anim::{damp, damp_vec3};
use crate::constants::{
    BIG_PHOTO_CHANCE, BIG_PHOTO_SCALE, CHAOS_HALF_EXTENT, FOCUS_DEPTH_FACTOR, FOCUS_PULL,
    PHOTO_FOCUS_SCALE, PHOTO_SCALE_RATE, PHOTO_TREE_MOVE_FACTOR, PHOTO_WEIGHT_MAX,
    PHOTO_WEIGHT_MIN, TREE_BASE_RADIUS, TREE_HEIGHT, WOBBLE_PITCH, WOBBLE_ROLL,
};
use crate::config::WallParams;
use crate::layout::{chaos_position, ring_angle, ring_position, tree_position};
use crate::state::FrameInput;
use glam::{Vec2, Vec3};
use rand::Rng;
use smallvec::{smallvec, SmallVec};
use std::f32::consts::PI;

const BORDER_PALETTE: [[f32; 3]; 4] = [
    [0.93, 0.90, 0.85], // warm white
    [0.80, 0.12, 0.16], // red
    [0.83, 0.69, 0.22], // gold
    [0.16, 0.42, 0.22], // green
];

/// Swarm orientation/targeting rate for turning to face a point.
const PHOTO_TURN_RATE: f32 = 4.0;

/// One photograph ornament. Targets and variety parameters are fixed at
/// construction; `position`, `rotation`, `scale` and `selected` are the only
/// per-frame state.
#[derive(Clone, Copy, Debug)]
pub struct PhotoOrnament {
    pub chaos_position: Vec3,
    pub tree_position: Vec3,
    pub position: Vec3,
    pub rotation: Vec3,
    pub spin: Vec3,
    /// Move-rate multiplier in [0.8, 2.0).
    pub weight: f32,
    /// 20% of photos render at 2.2x for visual variety.
    pub big: bool,
    pub scale: f32,
    pub selected: bool,
    pub texture_index: usize,
    pub border_color: [f32; 3],
}

impl PhotoOrnament {
    #[inline]
    pub fn base_scale(&self) -> f32 {
        if self.big {
            BIG_PHOTO_SCALE
        } else {
            1.0
        }
    }
}

/// Face or border plane of the expanded photo card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuadKind {
    Face,
    Border,
}

/// One renderable plane of a photo card, in the ornament's local frame.
/// All quads are single-sided; the back pair carries a 180-degree Y rotation
/// so both sides show the image right-reading with the border trim visible.
#[derive(Clone, Copy, Debug)]
pub struct PhotoQuad {
    pub kind: QuadKind,
    pub local_offset: Vec3,
    pub yaw: f32,
    pub size: Vec2,
}

/// Front/back faces plus their border backing planes, border offset slightly
/// down and behind to read as a physical print's bottom trim.
pub fn photo_quads() -> SmallVec<[PhotoQuad; 4]> {
    let face = Vec2::new(1.0, 1.0);
    let border = Vec2::new(1.08, 1.2);
    smallvec![
        PhotoQuad {
            kind: QuadKind::Face,
            local_offset: Vec3::new(0.0, 0.0, 0.012),
            yaw: 0.0,
            size: face,
        },
        PhotoQuad {
            kind: QuadKind::Border,
            local_offset: Vec3::new(0.0, -0.06, 0.004),
            yaw: 0.0,
            size: border,
        },
        PhotoQuad {
            kind: QuadKind::Face,
            local_offset: Vec3::new(0.0, 0.0, -0.012),
            yaw: PI,
            size: face,
        },
        PhotoQuad {
            kind: QuadKind::Border,
            local_offset: Vec3::new(0.0, -0.06, -0.004),
            yaw: PI,
            size: border,
        },
    ]
}

pub struct PhotoSwarm {
    ornaments: Vec<PhotoOrnament>,
    /// Image-slot count for ring spacing and texture cycling; never zero.
    image_count: usize,
    selected: Option<usize>,
}

impl PhotoSwarm {
    pub fn new(rng: &mut impl Rng, count: usize, image_count: usize) -> Self {
        let image_count = image_count.max(1);
        let ornaments = (0..count)
            .map(|i| {
                let chaos = chaos_position(rng, CHAOS_HALF_EXTENT);
                // keep photos off the trunk so they hang visibly
                let mut tree = tree_position(rng, TREE_HEIGHT, TREE_BASE_RADIUS);
                let radial = Vec2::new(tree.x, tree.z);
                if radial.length() < 1.5 {
                    let dir = if radial.length_squared() > 1e-6 {
                        radial.normalize()
                    } else {
                        Vec2::X
                    } * 1.5;
                    tree.x = dir.x;
                    tree.z = dir.y;
                }
                PhotoOrnament {
                    chaos_position: chaos,
                    tree_position: tree,
                    position: chaos,
                    rotation: Vec3::ZERO,
                    spin: Vec3::new(
                        rng.gen_range(-0.9..0.9),
                        rng.gen_range(-0.9..0.9),
                        rng.gen_range(-0.9..0.9),
                    ),
                    weight: rng.gen_range(PHOTO_WEIGHT_MIN..PHOTO_WEIGHT_MAX),
                    big: rng.gen::<f32>() < BIG_PHOTO_CHANCE,
                    scale: 1.0,
                    selected: false,
                    texture_index: i % image_count,
                    border_color: BORDER_PALETTE[i % BORDER_PALETTE.len()],
                }
            })
            .collect();
        Self {
            ornaments,
            image_count,
            selected: None,
        }
    }

    #[inline]
    pub fn ornaments(&self) -> &[PhotoOrnament] {
        &self.ornaments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ornaments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ornaments.is_empty()
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// Ring angle class of ornament `i` under the current image count.
    #[inline]
    pub fn ring_angle(&self, i: usize) -> f32 {
        ring_angle(i, self.image_count)
    }

    /// Re-map texture indices after the image list was replaced wholesale.
    pub fn assign_images(&mut self, image_count: usize) {
        self.image_count = image_count.max(1);
        for (i, o) in self.ornaments.iter_mut().enumerate() {
            o.texture_index = i % self.image_count;
        }
    }

    /// Exclusive selection toggle. Clicking the selected photo clears it;
    /// clicking another moves the selection atomically.
    pub fn toggle_select(&mut self, index: usize) {
        if index >= self.ornaments.len() {
            return;
        }
        if let Some(prev) = self.selected.take() {
            self.ornaments[prev].selected = false;
            if prev == index {
                return;
            }
        }
        self.ornaments[index].selected = true;
        self.selected = Some(index);
    }

    pub fn clear_selection(&mut self) {
        if let Some(prev) = self.selected.take() {
            self.ornaments[prev].selected = false;
        }
    }

    pub fn update(
        &mut self,
        input: &FrameInput,
        assembled: bool,
        photo_wall: bool,
        gallery_blend: f32,
        wall: &WallParams,
    ) {
        let forward = input.camera_forward();
        // depth proportional to the camera's distance from the swarm anchor,
        // so the centered photo sits in front of the wall at any orbit
        let focus_point = input.camera_eye
            + forward * (input.camera_eye.length() * FOCUS_DEPTH_FACTOR);
        let image_count = self.image_count;
        for (i, o) in self.ornaments.iter_mut().enumerate() {
            let backdrop = if assembled {
                o.tree_position
            } else {
                o.chaos_position
            };
            let ring = ring_position(i, image_count, wall.ring_radius);
            let mut active = backdrop.lerp(ring, gallery_blend);
            if photo_wall && o.selected {
                active = active.lerp(focus_point, FOCUS_PULL);
            }
            let rate = if photo_wall {
                wall.migration_speed
            } else if assembled {
                PHOTO_TREE_MOVE_FACTOR * o.weight
            } else {
                o.weight
            };
            o.position = damp_vec3(o.position, active, rate, input.dt);

            if photo_wall || gallery_blend > 0.5 {
                // always face the viewer on the wall
                let to_camera = input.camera_eye - o.position;
                let yaw = to_camera.x.atan2(to_camera.z);
                o.rotation.y = damp_angle(o.rotation.y, yaw, PHOTO_TURN_RATE, input.dt);
                o.rotation.x = (input.time * 0.8 + i as f32).sin() * WOBBLE_PITCH;
                o.rotation.z = (input.time * 1.1 + i as f32).cos() * WOBBLE_ROLL;
            } else if assembled {
                // look outward, past the ornament, away from the trunk
                let yaw = o.tree_position.x.atan2(o.tree_position.z);
                o.rotation.y = damp_angle(o.rotation.y, yaw, PHOTO_TURN_RATE, input.dt);
                o.rotation.x = (input.time * 0.8 + i as f32).sin() * WOBBLE_PITCH;
                o.rotation.z = (input.time * 1.1 + i as f32).cos() * WOBBLE_ROLL;
            } else {
                o.rotation += o.spin * input.dt;
            }

            let wall_scale = 1.0 + (wall.photo_scale - 1.0) * gallery_blend;
            let focus = if photo_wall && o.selected {
                PHOTO_FOCUS_SCALE
            } else {
                1.0
            };
            let target_scale = o.base_scale() * wall_scale * focus;
            o.scale = damp(o.scale, target_scale, PHOTO_SCALE_RATE, input.dt);
        }
    }
}

/// Damp an angle along the shortest arc, keeping the result wrapped.
fn damp_angle(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let mut diff = (target - current) % (2.0 * PI);
    if diff > PI {
        diff -= 2.0 * PI;
    } else if diff < -PI {
        diff += 2.0 * PI;
    }
    damp(current, current + diff, rate, dt)
}
