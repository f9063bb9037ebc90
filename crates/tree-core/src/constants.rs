// Shared layout and animation tuning constants used by the scene logic and
// the web frontend.

// Tree shape
pub const TREE_HEIGHT: f32 = 22.0; // full cone height
pub const TREE_BASE_RADIUS: f32 = 9.0; // radius at the base, zero at the apex
pub const CHAOS_HALF_EXTENT: f32 = 40.0; // half-extent of the scatter cube

// Damping rates (per second)
pub const ASSEMBLY_RATE: f32 = 1.5; // foliage progress, slow enough to read as organic
pub const GALLERY_BLEND_RATE: f32 = 2.5; // tree <-> ring cross-fade
pub const LIGHT_MOVE_RATE: f32 = 2.0;
pub const BAUBLE_MOVE_RATE: f32 = 1.2;
pub const PHOTO_TREE_MOVE_FACTOR: f32 = 0.8; // scaled by the per-photo weight
pub const PHOTO_SCALE_RATE: f32 = 3.0;

// Per-photo weight range (move-rate multiplier)
pub const PHOTO_WEIGHT_MIN: f32 = 0.8;
pub const PHOTO_WEIGHT_MAX: f32 = 2.0;

// Photo visual variety
pub const BIG_PHOTO_CHANCE: f32 = 0.20;
pub const BIG_PHOTO_SCALE: f32 = 2.2;
pub const PHOTO_FOCUS_SCALE: f32 = 1.6; // selected-photo enlargement in wall mode

// Selected-photo centering: blend weight toward the camera-forward point and
// the fraction of the camera->anchor distance used as its depth.
pub const FOCUS_PULL: f32 = 0.6;
pub const FOCUS_DEPTH_FACTOR: f32 = 0.55;

// Ring layout
pub const RING_WOBBLE: f32 = 0.9; // amplitude of the sin(2*theta) Y offset

// Foliage shimmer
pub const SHIMMER_AMPLITUDE: f32 = 0.35;

// Orientation wobble in formed/gallery modes
pub const WOBBLE_PITCH: f32 = 0.08;
pub const WOBBLE_ROLL: f32 = 0.06;
