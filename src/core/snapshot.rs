//! Read-only snapshot of the simulation state.
//!
//! Collaborators (renderer, audio, tests) never touch `GameState` directly;
//! they consume this value after every tick or input call.

use crate::types::Phase;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    /// Top edge of the bird bounding box, pixels from field top.
    pub bird_y: f32,
    /// Signed vertical speed, positive = downward.
    pub bird_vel: f32,
    /// Left edge of the obstacle pair.
    pub pipe_x: f32,
    /// Vertical opening between the pipe segments.
    pub gap: f32,
    /// Height of the upper pipe segment.
    pub top_height: f32,
    pub score: u32,
    pub phase: Phase,
    /// Increments on restart from `Over` only.
    pub session_id: u32,
    /// RNG state at snapshot time.
    pub seed: u32,
}

impl GameSnapshot {
    /// Top edge of the lower pipe segment.
    pub fn bottom_segment_top(&self) -> f32 {
        self.top_height + self.gap
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            bird_y: 0.0,
            bird_vel: 0.0,
            pipe_x: 0.0,
            gap: 0.0,
            top_height: 0.0,
            score: 0,
            phase: Phase::Idle,
            session_id: 0,
            seed: 0,
        }
    }
}
