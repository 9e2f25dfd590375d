//! Simulation state and core types
//!
//! Everything one frame of simulation reads or writes lives in
//! `SimulationState`, which each stage borrows mutably in a fixed order.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::clock::{FrameTime, time_past};
use super::hazard::HazardBar;
use super::level::Level;
use crate::settings::Settings;

/// Number of per-life timer slots
pub const MAX_LIVES: usize = 3;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for the start signal
    #[default]
    NotStarted,
    /// Active gameplay
    Playing,
    /// Last life lost; scores published this frame
    Ended,
}

/// The player's sphere
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarState {
    pub position: Vec3,
    /// Player-controlled velocity; y is also pulled down by gravity
    pub thrust: Vec3,
    pub radius: f32,
    /// Set by a jump, cleared by any tile contact
    pub airborne: bool,
}

impl AvatarState {
    pub fn new(spawn: Vec3, radius: f32) -> Self {
        Self {
            position: spawn,
            thrust: Vec3::ZERO,
            radius,
            airborne: true,
        }
    }

    /// Teleport back to spawn. Held horizontal input is kept.
    pub fn respawn(&mut self, spawn: Vec3) {
        self.position = spawn;
        self.thrust.y = 0.0;
        self.airborne = true;
    }

    /// Start a jump if standing on something
    pub fn jump(&mut self, jump_thrust: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.thrust.y = jump_thrust;
        self.airborne = true;
        true
    }

    /// Releasing jump cancels vertical thrust, even mid-fall
    pub fn release_jump(&mut self) {
        self.thrust.y = 0.0;
    }
}

/// What ended a life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Dropped below the fall floor
    Fall,
    /// Struck by the rotating bar
    Hazard,
}

/// Final scores of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Seconds survived by each life, in order
    pub life_times: [u32; MAX_LIVES],
    pub best_time: u32,
}

/// Things that happened during a tick, drained by the frame driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted,
    /// Avatar touched a tile while airborne
    Landed,
    LifeLost {
        cause: DeathCause,
        life_index: usize,
        elapsed: u32,
        lives_remaining: u8,
    },
    RoundOver(RoundSummary),
}

/// Lives and per-life timers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivesState {
    starting_lives: u8,
    lives_remaining: u8,
    /// Finalized once per life, when that life ends
    per_life_elapsed: [u32; MAX_LIVES],
    /// Whole second at which the round started; `None` outside a round
    time_offset: Option<u32>,
    /// Carried-over seconds for the level (always 0 for a single level)
    time_for_level: u32,
    /// Seconds survived by the current life
    time_past: u32,
    best_time: u32,
}

impl LivesState {
    /// Lives beyond the timer slots are dropped
    pub fn new(starting_lives: u8) -> Self {
        let starting_lives = starting_lives.min(MAX_LIVES as u8);
        Self {
            starting_lives,
            lives_remaining: starting_lives,
            per_life_elapsed: [0; MAX_LIVES],
            time_offset: None,
            time_for_level: 0,
            time_past: 0,
            best_time: 0,
        }
    }

    pub fn lives_remaining(&self) -> u8 {
        self.lives_remaining
    }

    pub fn time_past(&self) -> u32 {
        self.time_past
    }

    pub fn time_offset(&self) -> Option<u32> {
        self.time_offset
    }

    pub fn time_for_level(&self) -> u32 {
        self.time_for_level
    }

    pub fn per_life_elapsed(&self) -> &[u32; MAX_LIVES] {
        &self.per_life_elapsed
    }

    pub fn best_time(&self) -> u32 {
        self.best_time
    }

    /// Index of the life being played, `None` once all are spent
    pub fn current_life(&self) -> Option<usize> {
        (self.lives_remaining > 0).then(|| usize::from(self.starting_lives - self.lives_remaining))
    }

    /// Clear timers for a fresh round
    pub fn reset(&mut self) {
        self.lives_remaining = self.starting_lives;
        self.per_life_elapsed = [0; MAX_LIVES];
        self.time_offset = None;
        self.time_for_level = 0;
        self.time_past = 0;
    }

    /// Recompute the current life's timer. The round baseline is captured on
    /// the first call after a reset and never re-based afterwards.
    pub fn update_timer(&mut self, whole_seconds: u32) -> u32 {
        let offset = *self.time_offset.get_or_insert(whole_seconds);
        if let Some(life) = self.current_life() {
            let finalized: u32 = self.per_life_elapsed[..life].iter().sum();
            self.time_past = time_past(self.time_for_level, whole_seconds, offset, finalized);
        }
        self.time_past
    }

    /// Spend a life, recording its time. Returns the finished life's index and
    /// time, or `None` if no lives are left.
    pub fn lose_life(&mut self) -> Option<(usize, u32)> {
        let life = self.current_life()?;
        self.per_life_elapsed[life] = self.time_past;
        self.lives_remaining -= 1;
        Some((life, self.time_past))
    }

    /// Close out the round: compute the best time and re-arm for the next one
    pub fn finish(&mut self) -> RoundSummary {
        self.best_time = self.per_life_elapsed.iter().copied().max().unwrap_or(0);
        let summary = RoundSummary {
            life_times: self.per_life_elapsed,
            best_time: self.best_time,
        };
        self.lives_remaining = self.starting_lives;
        self.time_for_level = 0;
        self.time_offset = None;
        summary
    }
}

/// Complete simulation state for one level
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub settings: Settings,
    /// Static tiles, never mutated after load
    pub level: Level,
    pub hazard: HazardBar,
    pub avatar: AvatarState,
    pub lives: LivesState,
    pub phase: RoundPhase,
    /// Cosmetic: draw the hazard's collision footprint
    pub border_visible: bool,
    /// Time of the most recent tick
    pub frame: FrameTime,
    /// Scores of the most recently finished round
    pub last_round: Option<RoundSummary>,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl SimulationState {
    /// Create the default level with default tuning
    pub fn new() -> Self {
        Self::with_level(Settings::default(), Level::default())
    }

    pub fn with_level(settings: Settings, level: Level) -> Self {
        Self {
            hazard: HazardBar::from_settings(&settings),
            avatar: AvatarState::new(settings.spawn_point, settings.avatar_radius),
            lives: LivesState::new(settings.starting_lives),
            phase: RoundPhase::NotStarted,
            border_visible: false,
            frame: FrameTime::default(),
            last_round: None,
            events: Vec::new(),
            settings,
            level,
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}
