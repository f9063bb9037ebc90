//! Runtime configuration with silently clamped bounds.
//!
//! Out-of-range user input is clamped to the nearest valid bound, never
//! rejected. The scene re-reads the configuration on the next frame; there is
//! no explicit apply step.

/// Inclusive bounds per numeric field.
pub const FOLIAGE_COUNT_BOUNDS: (usize, usize) = (1_000, 80_000);
pub const BAUBLE_COUNT_BOUNDS: (usize, usize) = (0, 400);
pub const LIGHT_COUNT_BOUNDS: (usize, usize) = (0, 300);
pub const PHOTO_COUNT_BOUNDS: (usize, usize) = (0, 60);
pub const CAMERA_DISTANCE_BOUNDS: (f32, f32) = (20.0, 120.0);
pub const PHOTO_SCALE_BOUNDS: (f32, f32) = (0.5, 4.0);
pub const RING_RADIUS_BOUNDS: (f32, f32) = (6.0, 40.0);
pub const MIGRATION_SPEED_BOUNDS: (f32, f32) = (0.5, 8.0);

#[inline]
fn clamp_usize(v: i64, bounds: (usize, usize)) -> usize {
    v.clamp(bounds.0 as i64, bounds.1 as i64) as usize
}

// NaN (the frontend's parse-failure sentinel) falls to the low bound;
// signed infinities clamp toward their matching bound like any other
// out-of-range value.
#[inline]
fn clamp_f32(v: f32, bounds: (f32, f32)) -> f32 {
    if v.is_nan() {
        bounds.0
    } else {
        v.clamp(bounds.0, bounds.1)
    }
}

/// Rough capability class of the host device. Detection happens in the
/// frontend; swarm sizing only consumes the resulting tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceTier {
    Full,
    Reduced,
}

impl DeviceTier {
    /// Scale a configured count for this tier (reduced hardware gets half).
    #[inline]
    pub fn scale_count(self, count: usize) -> usize {
        match self {
            DeviceTier::Full => count,
            DeviceTier::Reduced => count / 2,
        }
    }
}

/// Photo-wall parameters.
#[derive(Clone, Copy, Debug)]
pub struct WallParams {
    pub photo_count: usize,
    pub photo_scale: f32,
    pub ring_radius: f32,
    pub migration_speed: f32,
}

impl Default for WallParams {
    fn default() -> Self {
        Self {
            photo_count: 12,
            photo_scale: 1.6,
            ring_radius: 14.0,
            migration_speed: 2.5,
        }
    }
}

/// Counts per swarm plus camera and wall settings.
#[derive(Clone, Copy, Debug)]
pub struct SceneConfig {
    pub foliage_count: usize,
    pub bauble_count: usize,
    pub light_count: usize,
    pub camera_distance: f32,
    pub wall: WallParams,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            foliage_count: 24_000,
            bauble_count: 120,
            light_count: 100,
            camera_distance: 42.0,
            wall: WallParams::default(),
        }
    }
}

impl SceneConfig {
    pub fn set_foliage_count(&mut self, v: i64) {
        self.foliage_count = clamp_usize(v, FOLIAGE_COUNT_BOUNDS);
    }

    pub fn set_bauble_count(&mut self, v: i64) {
        self.bauble_count = clamp_usize(v, BAUBLE_COUNT_BOUNDS);
    }

    pub fn set_light_count(&mut self, v: i64) {
        self.light_count = clamp_usize(v, LIGHT_COUNT_BOUNDS);
    }

    pub fn set_photo_count(&mut self, v: i64) {
        self.wall.photo_count = clamp_usize(v, PHOTO_COUNT_BOUNDS);
    }

    pub fn set_camera_distance(&mut self, v: f32) {
        self.camera_distance = clamp_f32(v, CAMERA_DISTANCE_BOUNDS);
    }

    pub fn set_photo_scale(&mut self, v: f32) {
        self.wall.photo_scale = clamp_f32(v, PHOTO_SCALE_BOUNDS);
    }

    pub fn set_ring_radius(&mut self, v: f32) {
        self.wall.ring_radius = clamp_f32(v, RING_RADIUS_BOUNDS);
    }

    pub fn set_migration_speed(&mut self, v: f32) {
        self.wall.migration_speed = clamp_f32(v, MIGRATION_SPEED_BOUNDS);
    }
}
