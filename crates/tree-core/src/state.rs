//! Scene mode coordination.
//!
//! The discrete mode is modelled as two orthogonal variables: the backdrop
//! `TreeMode` (which persists while the photo wall is up, so the wall always
//! appears in front of whichever backdrop preceded it) and a `photo_wall`
//! flag with its own continuous blend. Swarms never read the discrete flag
//! for positioning: they blend on `gallery_blend` only, which removes any
//! visual popping on mode switches.

use crate::anim::damp;
use crate::constants::GALLERY_BLEND_RATE;
use glam::Vec3;

/// Backdrop state of the particle field and non-photo swarms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeMode {
    Scattered,
    Assembled,
}

/// Tri-state scene mode plus the derived continuous gallery blend.
#[derive(Clone, Copy, Debug)]
pub struct SceneState {
    pub mode: TreeMode,
    pub photo_wall: bool,
    pub gallery_blend: f32,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            mode: TreeMode::Assembled,
            photo_wall: false,
            gallery_blend: 0.0,
        }
    }
}

impl SceneState {
    /// Damp the gallery blend toward 1 while the wall is up, 0 otherwise.
    /// Runs every frame regardless of which discrete transition just happened.
    pub fn tick(&mut self, dt: f32) {
        let target = if self.photo_wall { 1.0 } else { 0.0 };
        self.gallery_blend = damp(self.gallery_blend, target, GALLERY_BLEND_RATE, dt);
    }

    /// Click-to-cycle: assembled -> scattered -> photo-wall -> assembled.
    /// Entering the wall keeps the backdrop mode that preceded it.
    pub fn cycle(&mut self) {
        if self.photo_wall {
            self.photo_wall = false;
            self.mode = TreeMode::Assembled;
        } else {
            match self.mode {
                TreeMode::Assembled => self.mode = TreeMode::Scattered,
                TreeMode::Scattered => self.photo_wall = true,
            }
        }
    }

    /// Direct transition to a backdrop mode, dismissing the wall if up.
    pub fn set_mode(&mut self, mode: TreeMode) {
        self.mode = mode;
        self.photo_wall = false;
    }

    pub fn enter_photo_wall(&mut self) {
        self.photo_wall = true;
    }

    pub fn exit_photo_wall(&mut self) {
        self.photo_wall = false;
    }

    #[inline]
    pub fn assembled(&self) -> bool {
        self.mode == TreeMode::Assembled
    }
}

/// Per-frame inputs captured once by the frontend and passed down to every
/// swarm update. Single-threaded: the frame callback is the only mutator.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub dt: f32,
    pub time: f32,
    pub camera_eye: Vec3,
    pub camera_target: Vec3,
}

impl FrameInput {
    /// Normalized camera view direction.
    #[inline]
    pub fn camera_forward(&self) -> Vec3 {
        (self.camera_target - self.camera_eye).normalize_or_zero()
    }
}
