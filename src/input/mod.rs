//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. A flap is a
//! discrete tap, so no held-key repeat handling is needed here.

pub mod map;

pub use map::{handle_key_event, should_quit};
