//! Frame-rate-independent exponential damping.
//!
//! Every time-varying value in the scene moves toward its target through
//! [`damp`]: redirecting a transition is just a matter of flipping the target,
//! so in-flight transitions are always safely interruptible.

use glam::Vec3;

/// Move `current` toward `target` with exponential decay.
///
/// `next = target + (current - target) * exp(-rate * dt)`. Applying this once
/// with `dt = T` matches applying it twice with `dt = T/2`, so the result is
/// independent of how the elapsed time is chunked. Never overshoots.
#[inline]
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    target + (current - target) * (-rate * dt).exp()
}

/// Component-wise [`damp`] for vectors.
#[inline]
pub fn damp_vec3(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    target + (current - target) * (-rate * dt).exp()
}

/// Cubic in-out easing on `[0, 1]`.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
