//! Avatar motion
//!
//! Thrust acts as a velocity: horizontal axes are set straight to -1/0/+1 by
//! input, the vertical axis is set by jumps and drained by gravity.

use crate::consts::REFERENCE_TICK_RATE;
use crate::settings::{GravityMode, Settings};

use super::state::AvatarState;

/// Horizontal movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

/// Set a horizontal thrust axis to -1, 0 or +1
pub fn set_axis(avatar: &mut AvatarState, axis: Axis, direction: i8) {
    let value = f32::from(direction.signum());
    match axis {
        Axis::X => avatar.thrust.x = value,
        Axis::Z => avatar.thrust.z = value,
    }
}

/// Vertical thrust lost this frame.
///
/// `PerFrame` ignores dt: the constant was tuned at `REFERENCE_TICK_RATE`, so
/// on faster displays the avatar falls faster.
#[inline]
pub fn gravity_step(settings: &Settings, dt: f32) -> f32 {
    match settings.gravity_mode {
        GravityMode::PerFrame => settings.gravity,
        GravityMode::Scaled => settings.gravity * dt * REFERENCE_TICK_RATE,
    }
}

/// Move the avatar by its thrust, then apply gravity to vertical thrust
pub fn integrate(avatar: &mut AvatarState, settings: &Settings, dt: f32) {
    avatar.position += avatar.thrust * (dt * settings.speed());
    avatar.thrust.y -= gravity_step(settings, dt);
}
