//! Full-round tests driven through the public tick API

use glam::Vec3;
use orbit_dodge::render::{FrameSnapshot, Hud};
use orbit_dodge::settings::Settings;
use orbit_dodge::sim::{
    Control, DeathCause, FixedClock, FrameTime, GameEvent, Level, RoundPhase, SimulationState,
    TickInput, tick,
};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn at_seconds(secs: f64) -> FrameTime {
    FrameTime::from_millis(secs * 1000.0, FRAME_MS, 0.1)
}

fn start(state: &mut SimulationState, secs: f64) {
    tick(state, &TickInput::press(Control::Start), at_seconds(secs));
}

/// Drop the avatar below the floor and tick once
fn fall_at(state: &mut SimulationState, secs: f64) {
    state.avatar.position.y = -10.0;
    tick(state, &TickInput::default(), at_seconds(secs));
}

/// Settings with the bar parked far from the platform
fn no_hazard() -> Settings {
    Settings {
        hazard_pivot: Vec3::new(500.0, 1.5, 500.0),
        ..Settings::default()
    }
}

#[test]
fn test_three_falls_end_round_with_best_time() {
    let mut state = SimulationState::new();
    start(&mut state, 0.0);

    fall_at(&mut state, 5.0);
    assert_eq!(state.lives.lives_remaining(), 2);
    fall_at(&mut state, 12.0);
    assert_eq!(state.lives.lives_remaining(), 1);
    fall_at(&mut state, 15.0);

    assert_eq!(state.phase, RoundPhase::Ended);
    let summary = state.last_round.expect("round summary");
    assert_eq!(summary.life_times, [5, 7, 3]);
    assert_eq!(summary.best_time, 7);
    assert_eq!(state.lives.best_time(), 7);

    let events = state.drain_events();
    let recorded: Vec<u32> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::LifeLost {
                cause: DeathCause::Fall,
                elapsed,
                ..
            } => Some(*elapsed),
            _ => None,
        })
        .collect();
    assert_eq!(recorded, vec![5, 7, 3]);
    assert!(events.contains(&GameEvent::RoundOver(summary)));

    match FrameSnapshot::capture(&state).hud {
        Hud::GameOver(s) => assert_eq!(s, summary),
        other => panic!("expected game over HUD, got {:?}", other),
    }
}

#[test]
fn test_round_reset_after_end() {
    let mut state = SimulationState::new();
    start(&mut state, 0.0);
    for secs in [1.0, 2.0, 3.0] {
        fall_at(&mut state, secs);
    }
    assert_eq!(state.phase, RoundPhase::Ended);
    assert_eq!(state.lives.time_offset(), None);

    start(&mut state, 20.0);
    assert_eq!(state.phase, RoundPhase::Playing);
    assert_eq!(state.lives.lives_remaining(), 3);
    assert_eq!(state.lives.time_for_level(), 0);
    assert_eq!(state.lives.time_offset(), Some(20));
    assert_eq!(state.lives.per_life_elapsed(), &[0, 0, 0]);
    // Spawned this frame, moved by at most one frame of gravity
    assert!((state.avatar.position - state.settings.spawn_point).length() < 1e-3);
}

#[test]
fn test_second_round_times_from_new_baseline() {
    let mut state = SimulationState::new();
    start(&mut state, 0.0);
    for secs in [4.0, 6.0, 9.0] {
        fall_at(&mut state, secs);
    }
    tick(&mut state, &TickInput::default(), at_seconds(10.0));
    assert_eq!(state.phase, RoundPhase::NotStarted);

    start(&mut state, 30.0);
    fall_at(&mut state, 38.0);
    assert_eq!(state.lives.per_life_elapsed()[0], 8);
}

#[test]
fn test_timer_monotonic_while_alive() {
    let mut state = SimulationState::with_level(no_hazard(), Level::default());
    let mut clock = FixedClock::new(60.0);
    tick(
        &mut state,
        &TickInput::press(Control::Start),
        clock.advance(0.1),
    );

    let mut last = state.lives.time_past();
    for _ in 0..(60 * 10) {
        tick(&mut state, &TickInput::default(), clock.advance(0.1));
        assert_eq!(state.lives.lives_remaining(), 3);
        let now = state.lives.time_past();
        assert!(now >= last);
        last = now;
    }
    assert!(last >= 9);
}

#[test]
fn test_avatar_lands_and_rests_on_platform() {
    let mut state = SimulationState::with_level(no_hazard(), Level::default());
    let mut clock = FixedClock::new(60.0);
    tick(
        &mut state,
        &TickInput::press(Control::Start),
        clock.advance(0.1),
    );

    let mut landed = false;
    for _ in 0..(60 * 3) {
        tick(&mut state, &TickInput::default(), clock.advance(0.1));
        landed |= state.drain_events().contains(&GameEvent::Landed);
    }
    assert!(landed);
    assert!(!state.avatar.airborne);
    // Tile tops sit at y = 1; the sphere rests a radius above
    assert!((state.avatar.position.y - 1.5).abs() < 0.05);
}

#[test]
fn test_walking_off_edge_is_a_fall() {
    let mut state = SimulationState::with_level(no_hazard(), Level::default());
    let mut clock = FixedClock::new(60.0);
    tick(
        &mut state,
        &TickInput::press(Control::Start),
        clock.advance(0.1),
    );
    for _ in 0..(60 * 2) {
        tick(&mut state, &TickInput::default(), clock.advance(0.1));
    }

    tick(
        &mut state,
        &TickInput::press(Control::Left),
        clock.advance(0.1),
    );
    let mut cause = None;
    for _ in 0..(60 * 5) {
        tick(&mut state, &TickInput::default(), clock.advance(0.1));
        for event in state.drain_events() {
            if let GameEvent::LifeLost { cause: c, .. } = event {
                cause.get_or_insert(c);
            }
        }
        if cause.is_some() {
            break;
        }
    }
    assert_eq!(cause, Some(DeathCause::Fall));
    assert_eq!(state.lives.lives_remaining(), 2);
}

#[test]
fn test_hazard_overlap_costs_one_life() {
    let mut state = SimulationState::new();
    start(&mut state, 0.0);
    state.avatar.position = Vec3::new(7.0, 1.5, -7.0);

    for _ in 0..10 {
        tick(&mut state, &TickInput::default(), at_seconds(0.0));
    }
    assert_eq!(state.lives.lives_remaining(), 2);
    assert_eq!(state.phase, RoundPhase::Playing);
}

#[test]
fn test_jump_from_platform() {
    let mut state = SimulationState::with_level(no_hazard(), Level::default());
    let mut clock = FixedClock::new(60.0);
    tick(
        &mut state,
        &TickInput::press(Control::Start),
        clock.advance(0.1),
    );
    for _ in 0..(60 * 3) {
        tick(&mut state, &TickInput::default(), clock.advance(0.1));
    }
    let rest = state.avatar.position.y;

    tick(
        &mut state,
        &TickInput::press(Control::Jump),
        clock.advance(0.1),
    );
    assert!(state.avatar.airborne);
    for _ in 0..5 {
        tick(&mut state, &TickInput::default(), clock.advance(0.1));
    }
    assert!(state.avatar.position.y > rest + 0.5);
}
