//! Top-level scene: composes the swarms, owns the configuration snapshot and
//! regenerates swarms when their counts change. All member RNGs derive from
//! one seed so a scene build is reproducible under test.

use crate::config::{DeviceTier, SceneConfig};
use crate::constants::{CHAOS_HALF_EXTENT, TREE_BASE_RADIUS, TREE_HEIGHT};
use crate::field::ParticleField;
use crate::images::{ImageRef, ImageSet};
use crate::photos::PhotoSwarm;
use crate::state::{FrameInput, SceneState, TreeMode};
use crate::swarm::{BaubleSwarm, LightSwarm};
use rand::prelude::*;

pub struct Scene {
    pub config: SceneConfig,
    pub state: SceneState,
    pub foliage: ParticleField,
    pub baubles: BaubleSwarm,
    pub lights: LightSwarm,
    pub photos: PhotoSwarm,
    pub images: ImageSet,
    tier: DeviceTier,
    rng: StdRng,
}

impl Scene {
    pub fn new(config: SceneConfig, tier: DeviceTier, images: ImageSet, seed: u64) -> Self {
        // derive a fresh stream per build step so regeneration stays stable
        let mut rng = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
        let foliage = ParticleField::new(
            &mut rng,
            tier.scale_count(config.foliage_count),
            TREE_HEIGHT,
            TREE_BASE_RADIUS,
            CHAOS_HALF_EXTENT,
        );
        let baubles = BaubleSwarm::new(&mut rng, tier.scale_count(config.bauble_count));
        let lights = LightSwarm::new(&mut rng, tier.scale_count(config.light_count));
        let photos = PhotoSwarm::new(&mut rng, config.wall.photo_count, images.effective_count());
        log::info!(
            "[scene] built: foliage={} baubles={} lights={} photos={} images={} tier={:?}",
            foliage.len(),
            baubles.len(),
            lights.len(),
            photos.len(),
            images.len(),
            tier
        );
        Self {
            config,
            state: SceneState::default(),
            foliage,
            baubles,
            lights,
            photos,
            images,
            tier,
            rng,
        }
    }

    /// One synchronous update pass per display frame.
    pub fn update(&mut self, input: &FrameInput) {
        self.state.tick(input.dt);
        let assembled = self.state.assembled();
        self.foliage.update(input.dt, assembled);
        self.baubles.update(input, assembled);
        self.lights.update(input, assembled);
        self.photos.update(
            input,
            assembled,
            self.state.photo_wall,
            self.state.gallery_blend,
            &self.config.wall,
        );
    }

    // ---- mode transitions ----

    pub fn cycle_mode(&mut self) {
        self.state.cycle();
        if !self.state.photo_wall {
            self.photos.clear_selection();
        }
        log::info!("[scene] mode -> {:?}", self.state);
    }

    pub fn set_mode(&mut self, mode: TreeMode) {
        self.state.set_mode(mode);
        self.photos.clear_selection();
    }

    pub fn enter_photo_wall(&mut self) {
        self.state.enter_photo_wall();
    }

    pub fn exit_photo_wall(&mut self) {
        self.state.exit_photo_wall();
        self.photos.clear_selection();
    }

    /// Selection only applies while the wall is up.
    pub fn click_photo(&mut self, index: usize) {
        if self.state.photo_wall {
            self.photos.toggle_select(index);
        }
    }

    // ---- configuration changes; value is clamped, affected swarm rebuilt ----

    pub fn set_foliage_count(&mut self, v: i64) {
        self.config.set_foliage_count(v);
        self.foliage = ParticleField::new(
            &mut self.rng,
            self.tier.scale_count(self.config.foliage_count),
            TREE_HEIGHT,
            TREE_BASE_RADIUS,
            CHAOS_HALF_EXTENT,
        );
    }

    pub fn set_bauble_count(&mut self, v: i64) {
        self.config.set_bauble_count(v);
        self.baubles =
            BaubleSwarm::new(&mut self.rng, self.tier.scale_count(self.config.bauble_count));
    }

    pub fn set_light_count(&mut self, v: i64) {
        self.config.set_light_count(v);
        self.lights =
            LightSwarm::new(&mut self.rng, self.tier.scale_count(self.config.light_count));
    }

    pub fn set_photo_count(&mut self, v: i64) {
        self.config.set_photo_count(v);
        self.photos = PhotoSwarm::new(
            &mut self.rng,
            self.config.wall.photo_count,
            self.images.effective_count(),
        );
    }

    /// Replace the image list wholesale (upload path); photo texture indices
    /// re-cycle over the new effective count.
    pub fn set_images(&mut self, entries: Vec<ImageRef>) {
        self.images.replace(entries);
        self.photos.assign_images(self.images.effective_count());
        log::info!("[scene] images replaced: {}", self.images.len());
    }
}
