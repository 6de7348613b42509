//! Terminal presentation layer.
//!
//! `game_view` is pure snapshot-to-framebuffer mapping; `renderer` owns the
//! raw-mode terminal lifecycle and flushes frames.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
