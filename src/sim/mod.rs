//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same settings, level, frame times
//! and input edges, a round plays out identically:
//! - One `tick` per displayed frame, stages in fixed order
//! - Tiles resolved in storage order
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod hazard;
pub mod kinematics;
pub mod level;
pub mod state;
pub mod tick;

pub use clock::{FixedClock, FrameTime, time_past};
pub use collision::{Aabb, Contact, ResolveReport, fell_out, resolve_avatar_aabb, resolve_static, sphere_aabb_contact};
pub use hazard::{HazardBar, HazardFootprint, Quad};
pub use kinematics::{Axis, gravity_step, integrate, set_axis};
pub use level::{Level, PlatformTile};
pub use state::{
    AvatarState, DeathCause, GameEvent, LivesState, MAX_LIVES, RoundPhase, RoundSummary,
    SimulationState,
};
pub use tick::{Control, InputEvent, TickInput, start_round, tick};
