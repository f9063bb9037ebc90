// Camera and interaction tuning constants for the web frontend.

// Orbit camera
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 400.0;
pub const CAMERA_HEIGHT: f32 = 6.0; // initial eye height above the tree centre
pub const AUTO_ROTATE_SPEED: f32 = 0.12; // radians per second while idle

// Pointer interaction
pub const DRAG_YAW_SENSITIVITY: f32 = 0.005; // radians per canvas pixel
pub const DRAG_HEIGHT_SENSITIVITY: f32 = 0.03;
pub const DRAG_CLICK_SLOP_PX: f32 = 5.0; // movement below this still counts as a click
pub const PICK_RADIUS_FACTOR: f32 = 0.65; // ray-sphere radius relative to photo scale

// Rendering
pub const FOLIAGE_POINT_SCALE: f32 = 0.16;
pub const FOLIAGE_COLOR: [f32; 4] = [0.16, 0.55, 0.26, 0.85];
pub const PHOTO_LAYER_SIZE: u32 = 256; // square texture-array layer edge

// Device tier: at or below this many logical cores counts are halved
pub const REDUCED_TIER_MAX_CORES: f32 = 4.0;
