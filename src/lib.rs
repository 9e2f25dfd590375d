//! Orbit Dodge - a floating-platform 3D dodge game
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (kinematics, collisions, lives)
//! - `render`: Render handoff data (transforms, instance buffers, HUD text)
//! - `settings`: Data-driven tuning loaded from JSON
//! - `error`: Configuration loading errors

pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{GravityMode, Settings};

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    /// Frame rate the per-frame gravity constant was tuned against
    pub const REFERENCE_TICK_RATE: f32 = 60.0;
    /// Upper bound on a single frame's delta (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Edge length of one platform tile (world units)
    pub const BOX_SIZE: f32 = 2.0;
    /// Avatar at or below this height has fallen off the level
    pub const FALL_FLOOR: f32 = -3.0;
    /// Landing only snaps when the avatar is above `GROUND_THRESHOLD_FACTOR * BOX_SIZE`
    pub const GROUND_THRESHOLD_FACTOR: f32 = 0.1;

    /// Avatar defaults
    pub const AVATAR_RADIUS: f32 = 0.5;
    pub const SPAWN_POINT: [f32; 3] = [0.0, 7.0, 0.0];
    pub const METERS_PER_FRAME: f32 = 7.0;
    pub const SPEED_MULTIPLIER: f32 = 1.0;
    /// Vertical thrust removed every frame (not scaled by dt)
    pub const GRAVITY_PER_FRAME: f32 = 0.07;
    /// Vertical thrust applied on jump
    pub const JUMP_THRUST: f32 = 2.5;

    /// Hazard bar pivot (world space)
    pub const HAZARD_PIVOT: [f32; 3] = [7.0, 1.5, -7.0];
    /// Radians of bar rotation per second of elapsed time
    pub const HAZARD_ANGULAR_SPEED: f32 = 2.0;
    /// Scale of the collision footprint box (local unit cube is BOX_SIZE wide)
    pub const HAZARD_FOOTPRINT_SCALE: [f32; 3] = [0.4, 0.4, 15.0];
    /// Scale of the drawn bar
    pub const HAZARD_BAR_SCALE: [f32; 3] = [0.5, 0.5, 30.0];
    /// Avatar counts as low enough to be struck within this distance above the bar's lower face
    pub const HAZARD_STRIKE_TOLERANCE: f32 = 0.5;

    /// Pillar the bar spins on
    pub const PILLAR_POSITION: [f32; 3] = [7.0, 1.0, -7.0];
    pub const PILLAR_SCALE: [f32; 3] = [1.5, 1.5, 5.0];

    /// Lives per round
    pub const STARTING_LIVES: u8 = 3;
}

/// Drop the vertical axis of a world position: (x, y, z) -> (x, z)
#[inline]
pub fn horizontal(p: Vec3) -> Vec2 {
    Vec2::new(p.x, p.z)
}

/// 2D cross product (z component of the 3D cross)
#[inline]
pub fn cross2(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}
