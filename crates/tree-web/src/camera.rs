//! Orbit camera around the tree axis, with idle auto-rotation.

use crate::constants::{
    AUTO_ROTATE_SPEED, CAMERA_FOVY, CAMERA_HEIGHT, CAMERA_ZFAR, CAMERA_ZNEAR,
};
use glam::{Mat4, Vec3, Vec4};
use web_sys as web;

pub struct OrbitCamera {
    pub angle: f32,
    pub height: f32,
    pub distance: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32) -> Self {
        Self {
            angle: 0.0,
            height: CAMERA_HEIGHT,
            distance,
        }
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.angle.sin() * self.distance,
            self.height,
            self.angle.cos() * self.distance,
        )
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        Vec3::ZERO
    }

    /// Advance the idle orbit. Dragging pauses it.
    pub fn advance(&mut self, dt: f32, dragging: bool) {
        if !dragging {
            self.angle += AUTO_ROTATE_SPEED * dt;
        }
    }

    pub fn view_proj(&self, width: u32, height: u32) -> Mat4 {
        let aspect = width as f32 / height.max(1) as f32;
        let proj = Mat4::perspective_rh(CAMERA_FOVY, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
        let view = Mat4::look_at_rh(self.eye(), self.target(), Vec3::Y);
        proj * view
    }

    /// Camera-space right and up axes in world space, for billboarding.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let forward = (self.target() - self.eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }
}

/// Compute a world-space ray from canvas backing-store pixel coordinates.
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    camera: &OrbitCamera,
    sx: f32,
    sy: f32,
) -> (Vec3, Vec3) {
    let width = canvas.width().max(1) as f32;
    let height = canvas.height().max(1) as f32;
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let inv = camera.view_proj(canvas.width(), canvas.height()).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye();
    let rd = (p1 - ro).normalize();
    (ro, rd)
}
