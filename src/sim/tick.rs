//! Per-frame simulation step
//!
//! Order within a frame is fixed: input edges, clock, end-of-round check,
//! kinematics, tile collision, fall check, hazard check. At most one death is
//! processed per frame.

use super::clock::FrameTime;
use super::collision::{fell_out, resolve_static};
use super::kinematics::{Axis, integrate, set_axis};
use super::state::{DeathCause, GameEvent, RoundPhase, SimulationState};

/// Player controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// -z
    Forward,
    /// +z
    Back,
    /// -x
    Left,
    /// +x
    Right,
    Jump,
    /// Begin a round
    Start,
    /// Show/hide the hazard's hit border
    ToggleBorder,
}

/// A key press or release edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub control: Control,
    pub pressed: bool,
}

impl InputEvent {
    pub fn press(control: Control) -> Self {
        Self {
            control,
            pressed: true,
        }
    }

    pub fn release(control: Control) -> Self {
        Self {
            control,
            pressed: false,
        }
    }
}

/// Input edges received since the previous frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn press(control: Control) -> Self {
        Self::new([InputEvent::press(control)])
    }

    pub fn release(control: Control) -> Self {
        Self::new([InputEvent::release(control)])
    }
}

/// Advance the simulation by one displayed frame
pub fn tick(state: &mut SimulationState, input: &TickInput, frame: FrameTime) {
    state.frame = frame;

    // Scores were published last frame; wait for the next start
    if state.phase == RoundPhase::Ended {
        state.phase = RoundPhase::NotStarted;
    }

    for event in &input.events {
        apply_input(state, *event);
    }

    if state.phase != RoundPhase::Playing {
        return;
    }

    state.lives.update_timer(frame.whole_seconds());

    if state.lives.lives_remaining() == 0 {
        end_round(state);
        return;
    }

    integrate(&mut state.avatar, &state.settings, frame.dt);

    let report = resolve_static(
        &mut state.avatar,
        state.level.aabbs(state.settings.box_size),
        state.settings.ground_threshold(),
    );
    if report.landed {
        log::trace!("Landed at {:?}", state.avatar.position);
        state.events.push(GameEvent::Landed);
    }

    // Fall first; a respawn moves the avatar clear of the bar
    if fell_out(&state.avatar, state.settings.fall_floor) {
        lose_life(state, DeathCause::Fall);
    } else if state.hazard.strikes(frame.t, state.avatar.position) {
        lose_life(state, DeathCause::Hazard);
    }
}

fn apply_input(state: &mut SimulationState, event: InputEvent) {
    let avatar = &mut state.avatar;
    let held = |dir: i8| if event.pressed { dir } else { 0 };

    match event.control {
        Control::Forward => set_axis(avatar, Axis::Z, held(-1)),
        Control::Back => set_axis(avatar, Axis::Z, held(1)),
        Control::Left => set_axis(avatar, Axis::X, held(-1)),
        Control::Right => set_axis(avatar, Axis::X, held(1)),
        Control::Jump => {
            if event.pressed {
                avatar.jump(state.settings.jump_thrust);
            } else {
                avatar.release_jump();
            }
        }
        Control::Start if event.pressed => start_round(state),
        Control::ToggleBorder if event.pressed => {
            state.border_visible = !state.border_visible;
        }
        Control::Start | Control::ToggleBorder => {}
    }
}

/// Begin a round from `NotStarted` (or `Ended`). Ignored while playing.
pub fn start_round(state: &mut SimulationState) {
    if state.phase == RoundPhase::Playing {
        return;
    }
    state.lives.reset();
    state.avatar.respawn(state.settings.spawn_point);
    state.phase = RoundPhase::Playing;
    state.events.push(GameEvent::RoundStarted);
    log::info!("Round started");
}

/// Spend a life, respawn, and end the round on the last one
fn lose_life(state: &mut SimulationState, cause: DeathCause) {
    let Some((life_index, elapsed)) = state.lives.lose_life() else {
        return;
    };
    state.avatar.respawn(state.settings.spawn_point);

    let lives_remaining = state.lives.lives_remaining();
    log::debug!(
        "Life {} lost ({:?}) after {}s, {} left",
        life_index + 1,
        cause,
        elapsed,
        lives_remaining
    );
    state.events.push(GameEvent::LifeLost {
        cause,
        life_index,
        elapsed,
        lives_remaining,
    });

    if lives_remaining == 0 {
        end_round(state);
    }
}

/// Finalize scores and re-arm lives for the next round
fn end_round(state: &mut SimulationState) {
    let summary = state.lives.finish();
    state.avatar.respawn(state.settings.spawn_point);
    state.phase = RoundPhase::Ended;
    state.last_round = Some(summary);
    state.events.push(GameEvent::RoundOver(summary));
    log::info!(
        "Round over: lives {:?}, best {}s",
        summary.life_times,
        summary.best_time
    );
}
