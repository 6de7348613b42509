//! Core simulation module - pure, deterministic, and testable
//!
//! All game rules live here: gravity integration, pipe scrolling and
//! recycling, collision, scoring, and the session phase machine. The module
//! has zero dependencies on UI, audio, or I/O, so the whole game can be
//! driven headless in tests from a single seed.
//!
//! - [`game_state`]: the fixed-tick simulation engine
//! - [`rng`]: seedable LCG random source for pipe heights
//! - [`snapshot`]: read-only state view for collaborators

pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use game_state::{GameState, DEFAULT_BIRD_Y, DEFAULT_TOP_HEIGHT};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
