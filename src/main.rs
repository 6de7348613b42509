//! Terminal Flappy Bird runner (default binary).
//!
//! Drives the simulation engine from a single-threaded loop: render the
//! current snapshot, poll input until the next tick deadline, tick. Engine
//! events are forwarded to the audio sink as they happen.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_flappy::audio::AudioSink;
use tui_flappy::core::GameState;
use tui_flappy::input::{handle_key_event, should_quit};
use tui_flappy::term::{GameView, TerminalRenderer, Viewport};
use tui_flappy::types::{EngineConfig, GameAction};

fn main() -> Result<()> {
    env_logger::init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = EngineConfig::default();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let mut engine = GameState::new(config, seed);
    let view = GameView::new(config);
    let mut audio = AudioSink::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(config.tick_period_ms as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&engine.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick. Taps arriving here are applied
        // before the next tick's integration.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if let Some(action) = handle_key_event(key) {
                        let transition = match action {
                            GameAction::Flap => engine.jump(),
                            GameAction::Restart => engine.restart(),
                        };
                        if let Some(transition) = transition {
                            audio.handle_event(transition);
                        }
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let Some(transition) = engine.tick() {
                audio.handle_event(transition);
            }
        }
    }
}
