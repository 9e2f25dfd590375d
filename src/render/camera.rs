//! Chase camera that trails the avatar

use glam::{Mat4, Vec3};

/// Offset of the eye from the avatar
pub const EYE_OFFSET: Vec3 = Vec3::new(0.0, 3.6, 6.0);
pub const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
pub const Z_NEAR: f32 = 1.0;
pub const Z_FAR: f32 = 100.0;

/// View matrix looking at the avatar from above and behind
pub fn follow_view(target: Vec3) -> Mat4 {
    Mat4::look_at_rh(target + EYE_OFFSET, target, Vec3::Y)
}

/// Perspective projection for the given viewport aspect (width / height)
pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(FOV_Y, aspect, Z_NEAR, Z_FAR)
}
