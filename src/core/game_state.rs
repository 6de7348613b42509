//! Game state module - the fixed-tick simulation engine
//!
//! Owns the complete state of a play session: bird physics, pipe scrolling
//! and recycling, scoring, the difficulty ramp, and the Idle/Running/Over
//! phase machine. Pure and I/O-free; the driver loop calls [`GameState::tick`]
//! once per fixed period and forwards player taps via [`GameState::jump`].

use crate::core::rng::SimpleRng;
use crate::core::snapshot::GameSnapshot;
use crate::types::{EngineConfig, GameEvent, Phase};

/// Bird top-edge position after a reset.
pub const DEFAULT_BIRD_Y: f32 = 250.0;
/// Top pipe segment height after a reset (resampled on first recycle).
pub const DEFAULT_TOP_HEIGHT: f32 = 100.0;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: EngineConfig,
    rng: SimpleRng,
    bird_y: f32,
    bird_vel: f32,
    pipe_x: f32,
    gap: f32,
    top_height: f32,
    score: u32,
    phase: Phase,
    /// Monotonic session id (increments on restart from `Over`).
    session_id: u32,
}

impl GameState {
    /// Create a new engine in `Idle` with the given config and RNG seed
    pub fn new(config: EngineConfig, seed: u32) -> Self {
        Self {
            config,
            rng: SimpleRng::new(seed),
            bird_y: DEFAULT_BIRD_Y,
            bird_vel: 0.0,
            pipe_x: config.field_width,
            gap: config.initial_gap,
            top_height: DEFAULT_TOP_HEIGHT,
            score: 0,
            phase: Phase::Idle,
            session_id: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.bird_y = self.bird_y;
        out.bird_vel = self.bird_vel;
        out.pipe_x = self.pipe_x;
        out.gap = self.gap;
        out.top_height = self.top_height;
        out.score = self.score;
        out.phase = self.phase;
        out.session_id = self.session_id;
        out.seed = self.rng.state();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Begin the session from `Idle` without resetting fields
    /// (they already hold defaults). No-op in any other phase.
    pub fn start(&mut self) -> Option<GameEvent> {
        if self.phase != Phase::Idle {
            return None;
        }
        self.phase = Phase::Running;
        Some(GameEvent::SessionStart)
    }

    /// Reset all per-session fields and enter `Running`.
    ///
    /// The RNG stream carries forward across restarts, so consecutive
    /// sessions see different pipe sequences while a fixed initial seed
    /// keeps a whole run reproducible. Idempotent in result: a second
    /// consecutive call yields the same state and no event.
    pub fn restart(&mut self) -> Option<GameEvent> {
        let was_running = self.phase.is_running();
        let session_id = if self.phase == Phase::Over {
            self.session_id.wrapping_add(1)
        } else {
            self.session_id
        };

        *self = Self::new(self.config, self.rng.state());
        self.session_id = session_id;
        self.phase = Phase::Running;

        if was_running {
            None
        } else {
            Some(GameEvent::SessionStart)
        }
    }

    /// Player tap.
    ///
    /// While `Running`, overrides the vertical velocity with the jump
    /// impulse (not additive). From `Idle` or `Over`, restarts instead; the
    /// bird is left at the reset velocity of zero, so the player must tap
    /// again to gain lift.
    pub fn jump(&mut self) -> Option<GameEvent> {
        match self.phase {
            Phase::Running => {
                self.bird_vel = self.config.jump_impulse;
                None
            }
            Phase::Idle | Phase::Over => self.restart(),
        }
    }

    /// Advance the simulation by one fixed tick.
    ///
    /// No-op unless `Running`. Returns `GameOver` exactly on the tick that
    /// transitions to `Over`; once that transition fires, nothing else is
    /// mutated within the tick.
    pub fn tick(&mut self) -> Option<GameEvent> {
        if !self.phase.is_running() {
            return None;
        }

        // Semi-implicit Euler: velocity first, position second.
        self.bird_vel += self.config.gravity_accel;
        self.bird_y += self.bird_vel;

        self.pipe_x -= self.config.scroll_speed;

        // Pipe fully exited on the left: score it and recycle at the right
        // edge with the ramped-down gap.
        if self.pipe_x < -self.config.obstacle_width {
            self.score += 1;
            self.gap = (self.config.initial_gap
                - self.score as f32 * self.config.gap_shrink_per_point)
                .max(self.config.min_gap);
            self.top_height = self.sample_top_height();
            self.pipe_x = self.config.field_width;
        }

        if self.bird_out_of_bounds() || self.bird_hits_pipe() {
            self.phase = Phase::Over;
            return Some(GameEvent::GameOver);
        }

        None
    }

    /// Uniform top-segment height for the current gap.
    ///
    /// Upper bound keeps the bottom segment at least `min_segment_height`
    /// tall and honors the `max_segment_height` clamp.
    fn sample_top_height(&mut self) -> f32 {
        let c = self.config;
        let upper = (c.field_height - self.gap - c.min_segment_height).min(c.max_segment_height);
        self.rng.next_range_f32(c.min_segment_height, upper)
    }

    fn bird_out_of_bounds(&self) -> bool {
        self.bird_y < 0.0 || self.bird_y > self.config.bird_y_max()
    }

    fn bird_hits_pipe(&self) -> bool {
        let c = self.config;
        let bird_left = c.bird_x;
        let bird_right = bird_left + c.bird_size;

        if bird_right <= self.pipe_x || bird_left >= self.pipe_x + c.obstacle_width {
            return false;
        }

        // Horizontal overlap: penetration unless the whole bird box is
        // inside the gap.
        let bird_top = self.bird_y;
        let bird_bottom = self.bird_y + c.bird_size;
        bird_top < self.top_height || bird_bottom > self.top_height + self.gap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(EngineConfig::default(), 1)
    }
}
