//! Integration tests for the full game loop, public API only.

use tui_flappy::core::GameState;
use tui_flappy::types::{EngineConfig, GameEvent, Phase};

/// Keep the bird inside the default gap band by tapping whenever it sinks.
fn autopilot(state: &mut GameState) {
    if state.snapshot().bird_y > 240.0 {
        state.jump();
    }
}

#[test]
fn test_full_session_lifecycle() {
    let mut state = GameState::new(EngineConfig::default(), 12345);
    let mut events: Vec<GameEvent> = Vec::new();

    // Idle: ticks do nothing.
    let idle = state.snapshot();
    for _ in 0..5 {
        assert_eq!(state.tick(), None);
    }
    assert_eq!(state.snapshot(), idle);

    // First tap starts the session without thrust.
    events.extend(state.jump());
    assert_eq!(events, vec![GameEvent::SessionStart]);
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.snapshot().bird_vel, 0.0);

    // Survive the first pipe: it takes 161 ticks to fully exit the field.
    for _ in 0..170 {
        autopilot(&mut state);
        events.extend(state.tick());
    }
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.score(), 1);

    // Hands off: the bird free-falls into the floor.
    let mut over_ticks = 0;
    while state.phase() == Phase::Running {
        events.extend(state.tick());
        over_ticks += 1;
        assert!(over_ticks < 1000, "game never ended");
    }
    assert_eq!(
        events,
        vec![GameEvent::SessionStart, GameEvent::GameOver]
    );

    // Frozen after game over.
    let frozen = state.snapshot();
    for _ in 0..5 {
        assert_eq!(state.tick(), None);
    }
    assert_eq!(state.snapshot(), frozen);

    // Tap to retry: fresh session, counter bumped.
    assert_eq!(state.jump(), Some(GameEvent::SessionStart));
    let fresh = state.snapshot();
    assert_eq!(fresh.phase, Phase::Running);
    assert_eq!(fresh.score, 0);
    assert_eq!(fresh.bird_vel, 0.0);
    assert_eq!(fresh.session_id, 1);
}

#[test]
fn test_score_increments_at_exit_crossing() {
    let mut state = GameState::new(EngineConfig::default(), 99);
    state.jump();

    let obstacle_width = state.config().obstacle_width;
    let scroll_speed = state.config().scroll_speed;
    let mut prev = state.snapshot();

    for _ in 0..400 {
        autopilot(&mut state);
        state.tick();
        let cur = state.snapshot();

        if cur.score != prev.score {
            // Exactly one point, exactly at the crossing tick, pipe back at
            // the right edge.
            assert_eq!(cur.score, prev.score + 1);
            assert!(prev.pipe_x - scroll_speed < -obstacle_width);
            assert_eq!(cur.pipe_x, state.config().field_width);
            return;
        }
        prev = cur;
    }
    panic!("no pipe was ever passed");
}

#[test]
fn test_same_seed_same_session() {
    let mut a = GameState::new(EngineConfig::default(), 2024);
    let mut b = GameState::new(EngineConfig::default(), 2024);
    a.jump();
    b.jump();

    for i in 0..800 {
        if i % 20 == 0 {
            a.jump();
            b.jump();
        }
        assert_eq!(a.tick(), b.tick());
        assert_eq!(a.snapshot(), b.snapshot(), "diverged at tick {i}");
    }
}

#[test]
fn test_gap_stays_in_bounds_over_long_run() {
    let mut state = GameState::new(EngineConfig::default(), 7);
    let min_gap = state.config().min_gap;
    let initial_gap = state.config().initial_gap;
    state.jump();

    for _ in 0..5000 {
        autopilot(&mut state);
        state.tick();
        let snap = state.snapshot();
        assert!(snap.gap >= min_gap, "gap below floor: {}", snap.gap);
        assert!(snap.gap <= initial_gap, "gap above initial: {}", snap.gap);

        if snap.phase == Phase::Over {
            // The ramp eventually outruns the naive autopilot; restart and
            // keep checking bounds across sessions.
            state.jump();
        }
    }
}

#[test]
fn test_restart_resets_between_sessions() {
    let mut state = GameState::new(EngineConfig::default(), 5);
    state.jump();
    for _ in 0..200 {
        autopilot(&mut state);
        state.tick();
    }

    state.restart();
    let snap = state.snapshot();
    assert_eq!(snap.phase, Phase::Running);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.pipe_x, state.config().field_width);
    assert_eq!(snap.gap, state.config().initial_gap);
}
