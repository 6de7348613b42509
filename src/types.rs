//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Fixed simulation period in milliseconds.
pub const TICK_MS: u32 = 20;

/// Coarse lifecycle state of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Waiting for the first tap. Fields hold defaults.
    #[default]
    Idle,
    /// Simulation advancing once per tick.
    Running,
    /// Terminal for the current session's scoring; restartable.
    Over,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Over => "over",
        }
    }
}

/// Player-facing actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Tap: jump while running, or start/restart a session otherwise.
    Flap,
    /// Explicit restart regardless of phase.
    Restart,
}

/// Discrete phase-transition events consumed by the audio layer.
///
/// Each mutating engine call returns at most one of these, exactly once per
/// transition, synchronously within the call that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Fired on `Idle/Over -> Running`.
    SessionStart,
    /// Fired on `-> Over`.
    GameOver,
}

/// Engine configuration, supplied at construction.
///
/// Distances are in field pixels, velocities in pixels per tick. Defaults
/// match the reference gameplay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Downward acceleration added to bird velocity each tick.
    pub gravity_accel: f32,
    /// Velocity override applied on a flap (negative = upward).
    pub jump_impulse: f32,
    pub field_width: f32,
    pub field_height: f32,
    /// Bird bounding box is a square of this side.
    pub bird_size: f32,
    /// Fixed horizontal position of the bird box's left edge.
    pub bird_x: f32,
    pub obstacle_width: f32,
    /// Minimum height of either pipe segment.
    pub min_segment_height: f32,
    /// Upper clamp on randomly generated top-segment heights.
    pub max_segment_height: f32,
    pub initial_gap: f32,
    /// Difficulty floor: the gap never shrinks below this.
    pub min_gap: f32,
    /// Linear gap shrink per scored point.
    pub gap_shrink_per_point: f32,
    /// Horizontal pipe speed in pixels per tick.
    pub scroll_speed: f32,
    pub tick_period_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity_accel: 0.5,
            jump_impulse: -8.0,
            field_width: 400.0,
            field_height: 600.0,
            bird_size: 90.0,
            bird_x: 100.0,
            obstacle_width: 80.0,
            min_segment_height: 30.0,
            max_segment_height: 180.0,
            initial_gap: 250.0,
            min_gap: 180.0,
            gap_shrink_per_point: 8.0,
            scroll_speed: 3.0,
            tick_period_ms: TICK_MS,
        }
    }
}

impl EngineConfig {
    /// Highest bird-top position that is still inside the field.
    pub fn bird_y_max(&self) -> f32 {
        self.field_height - self.bird_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_reference() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.gravity_accel, 0.5);
        assert_eq!(cfg.jump_impulse, -8.0);
        assert_eq!(cfg.field_width, 400.0);
        assert_eq!(cfg.field_height, 600.0);
        assert_eq!(cfg.bird_size, 90.0);
        assert_eq!(cfg.obstacle_width, 80.0);
        assert_eq!(cfg.min_gap, 180.0);
        assert_eq!(cfg.initial_gap, 250.0);
        assert_eq!(cfg.tick_period_ms, 20);
    }

    #[test]
    fn test_bird_y_max() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.bird_y_max(), 510.0);
    }

    #[test]
    fn test_phase_helpers() {
        assert!(Phase::Running.is_running());
        assert!(!Phase::Idle.is_running());
        assert!(!Phase::Over.is_running());
        assert_eq!(Phase::default(), Phase::Idle);
        assert_eq!(Phase::Over.as_str(), "over");
    }
}
