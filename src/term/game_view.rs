//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{EngineConfig, Phase};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the play field into a fixed character grid, centered in the
/// viewport. One column covers 10 field pixels, one row 20, which matches the
/// roughly 1:2 aspect ratio of terminal glyphs.
pub struct GameView {
    config: EngineConfig,
    cols: u16,
    rows: u16,
}

const PX_PER_COL: f32 = 10.0;
const PX_PER_ROW: f32 = 20.0;

impl GameView {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            cols: (config.field_width / PX_PER_COL) as u16,
            rows: (config.field_height / PX_PER_ROW) as u16,
        }
    }

    /// Render the snapshot into a framebuffer sized to the viewport.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame_w = self.cols + 2;
        let frame_h = self.rows + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        // Field origin inside the border.
        let ox = start_x + 1;
        let oy = start_y + 1;

        let sky = CellStyle::new(Rgb::new(40, 70, 110), Rgb::new(110, 170, 220));
        let pipe = CellStyle::new(Rgb::new(20, 80, 20), Rgb::new(40, 160, 60));
        let bird = CellStyle::new(Rgb::new(120, 60, 0), Rgb::new(240, 200, 40));
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let text = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(110, 170, 220)).bold();

        fb.fill_rect(ox, oy, self.cols, self.rows, ' ', sky);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);
        self.draw_pipes(&mut fb, snap, ox, oy, pipe);
        self.draw_bird(&mut fb, snap, ox, oy, bird);

        // Score, centered near the top of the field.
        let score = snap.score.to_string();
        let sx = ox + (self.cols.saturating_sub(score.len() as u16)) / 2;
        fb.put_str(sx, oy + 1, &score, text);

        match snap.phase {
            Phase::Idle => {
                self.overlay(&mut fb, ox, oy, &["FLAPPY BIRD", "tap space to start"], text);
            }
            Phase::Over => {
                let line = format!("score: {}", snap.score);
                self.overlay(&mut fb, ox, oy, &["GAME OVER", &line, "tap space to retry"], text);
            }
            Phase::Running => {}
        }

        fb
    }

    fn col_span(&self, left_px: f32, right_px: f32) -> (u16, u16) {
        let lo = (left_px / PX_PER_COL).floor().clamp(0.0, self.cols as f32) as u16;
        let hi = (right_px / PX_PER_COL).ceil().clamp(0.0, self.cols as f32) as u16;
        (lo, hi)
    }

    fn row_span(&self, top_px: f32, bottom_px: f32) -> (u16, u16) {
        let lo = (top_px / PX_PER_ROW).floor().clamp(0.0, self.rows as f32) as u16;
        let hi = (bottom_px / PX_PER_ROW).ceil().clamp(0.0, self.rows as f32) as u16;
        (lo, hi)
    }

    fn draw_pipes(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, ox: u16, oy: u16, style: CellStyle) {
        let c = &self.config;
        let (left, right) = self.col_span(snap.pipe_x, snap.pipe_x + c.obstacle_width);
        if left >= right {
            return;
        }
        let w = right - left;

        let (_, top_end) = self.row_span(0.0, snap.top_height);
        fb.fill_rect(ox + left, oy, w, top_end, '#', style);

        let (bottom_start, bottom_end) = self.row_span(snap.bottom_segment_top(), c.field_height);
        fb.fill_rect(
            ox + left,
            oy + bottom_start,
            w,
            bottom_end.saturating_sub(bottom_start),
            '#',
            style,
        );
    }

    fn draw_bird(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, ox: u16, oy: u16, style: CellStyle) {
        let c = &self.config;
        let (left, right) = self.col_span(c.bird_x, c.bird_x + c.bird_size);
        let (top, bottom) = self.row_span(snap.bird_y, snap.bird_y + c.bird_size);
        if left >= right || top >= bottom {
            return;
        }
        fb.fill_rect(
            ox + left,
            oy + top,
            right - left,
            bottom - top,
            '@',
            style,
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        for dx in 0..w {
            fb.set(x + dx, y, style.into_cell('─'));
            fb.set(x + dx, y + h - 1, style.into_cell('─'));
        }
        for dy in 0..h {
            fb.set(x, y + dy, style.into_cell('│'));
            fb.set(x + w - 1, y + dy, style.into_cell('│'));
        }
        fb.set(x, y, style.into_cell('┌'));
        fb.set(x + w - 1, y, style.into_cell('┐'));
        fb.set(x, y + h - 1, style.into_cell('└'));
        fb.set(x + w - 1, y + h - 1, style.into_cell('┘'));
    }

    fn overlay(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, lines: &[&str], style: CellStyle) {
        let start = oy + self.rows / 2 - lines.len() as u16 / 2;
        for (i, line) in lines.iter().enumerate() {
            let x = ox + (self.cols.saturating_sub(line.len() as u16)) / 2;
            fb.put_str(x, start + i as u16, line, style);
        }
    }
}
