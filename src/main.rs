//! Orbit Dodge headless driver
//!
//! Runs scripted rounds at a fixed 60 Hz so the simulation can be exercised
//! without a renderer.
//!
//! Usage: `orbit-dodge [settings.json] [rounds]`

use orbit_dodge::render::{FrameSnapshot, tile_instances};
use orbit_dodge::settings::Settings;
use orbit_dodge::sim::{
    Control, FixedClock, GameEvent, Level, RoundPhase, SimulationState, TickInput, tick,
};

/// Give up on a round after this many frames (10 minutes at 60 Hz)
const MAX_FRAMES_PER_ROUND: u32 = 60 * 60 * 10;

/// Scripted player: start, wait to land, then walk off the far edge
#[derive(Debug, Default)]
struct Autopilot {
    walking: bool,
}

impl Autopilot {
    fn next_input(&mut self, state: &SimulationState, events: &[GameEvent]) -> TickInput {
        if state.phase != RoundPhase::Playing {
            self.walking = false;
            return TickInput::press(Control::Start);
        }
        if events.iter().any(|e| matches!(e, GameEvent::LifeLost { .. })) {
            self.walking = false;
            return TickInput::release(Control::Forward);
        }
        if !self.walking && events.contains(&GameEvent::Landed) {
            self.walking = true;
            return TickInput::press(Control::Forward);
        }
        TickInput::default()
    }
}

fn main() {
    env_logger::init();
    log::info!("Orbit Dodge (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let rounds: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2);

    let level = Level::default();
    let tiles = tile_instances(&level, settings.box_size);
    log::info!("Level loaded: {} tiles", tiles.len());

    let max_dt = settings.max_frame_dt;
    let mut state = SimulationState::with_level(settings, level);
    let mut clock = FixedClock::new(60.0);
    let mut pilot = Autopilot::default();
    let mut session_best: Option<u32> = None;
    let mut rounds_finished = 0u32;
    let mut events = Vec::new();

    for round in 1..=rounds {
        let mut finished = false;
        for _ in 0..MAX_FRAMES_PER_ROUND {
            let input = pilot.next_input(&state, &events);
            tick(&mut state, &input, clock.advance(max_dt));
            events = state.drain_events();

            for event in &events {
                if let GameEvent::RoundOver(summary) = event {
                    session_best = session_best.max(Some(summary.best_time));
                    rounds_finished += 1;
                    finished = true;
                }
            }
            if finished {
                break;
            }
        }

        let snapshot = FrameSnapshot::capture(&state);
        println!("Round {}:", round);
        for line in snapshot.hud.lines() {
            println!("  {}", line);
        }
        if !finished {
            log::warn!("Round {} did not finish within {} frames", round, MAX_FRAMES_PER_ROUND);
        }
    }

    if let Some(best) = session_best {
        println!("Session best: {}s over {} rounds", best, rounds_finished);
    }
}
