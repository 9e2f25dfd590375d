//! Render handoff
//!
//! The simulation does no drawing. Once per frame it hands the renderer a
//! `FrameSnapshot`: every transform that moves, plus HUD text. Static tile
//! instances are built once with `instance::tile_instances`.

pub mod camera;
pub mod hud;
pub mod instance;

pub use hud::Hud;
pub use instance::{Instance, as_bytes, colors, tile_instances};

use glam::{Mat4, Quat, Vec3};

use crate::consts::{PILLAR_POSITION, PILLAR_SCALE};
use crate::sim::{RoundPhase, SimulationState};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub phase: RoundPhase,
    /// Sphere mesh of radius 1 -> avatar
    pub avatar: Mat4,
    /// Drawn bar (cylinder)
    pub hazard_bar: Mat4,
    /// Collision footprint box; drawn only when `border_visible`
    pub hazard_border: Mat4,
    pub border_visible: bool,
    /// Static pillar the bar spins on
    pub pillar: Mat4,
    pub view: Mat4,
    pub hud: Hud,
}

impl FrameSnapshot {
    pub fn capture(state: &SimulationState) -> Self {
        let t = state.frame.t;
        let avatar = &state.avatar;
        Self {
            phase: state.phase,
            avatar: Mat4::from_scale_rotation_translation(
                Vec3::splat(avatar.radius),
                Quat::IDENTITY,
                avatar.position,
            ),
            hazard_bar: state.hazard.bar_transform(t),
            hazard_border: state.hazard.footprint_transform(t),
            border_visible: state.border_visible,
            pillar: pillar_transform(),
            view: camera::follow_view(avatar.position),
            hud: Hud::from_state(state),
        }
    }

    /// Instances for the moving parts: avatar, bar, border
    pub fn dynamic_instances(&self) -> [Instance; 3] {
        let border_color = if self.border_visible {
            colors::BORDER_ON
        } else {
            colors::BORDER_OFF
        };
        [
            Instance::new(self.avatar, colors::AVATAR),
            Instance::new(self.hazard_bar, colors::BAR),
            Instance::new(self.hazard_border, border_color),
        ]
    }
}

/// Upright cylinder under the bar's pivot
pub fn pillar_transform() -> Mat4 {
    Mat4::from_translation(Vec3::from_array(PILLAR_POSITION))
        * Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2)
        * Mat4::from_scale(Vec3::from_array(PILLAR_SCALE))
}
