//! Terminal Flappy Bird.
//!
//! The simulation core (`core`) is a fixed-tick owned-state engine exposing
//! `tick`/`jump`/`restart`/`start`; everything else is a thin collaborator:
//! `input` maps key events to actions, `term` renders snapshots to the
//! terminal, and `audio` reacts to phase-transition events.

pub mod audio;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
