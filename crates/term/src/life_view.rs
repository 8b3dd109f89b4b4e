//! LifeView: maps a board into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Board;
use crate::fb::{FrameBuffer, GlyphStyle, Rgb};

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

/// Runner-supplied status info shown around the grid.
///
/// The view never talks to the simulation directly; the runner fills this
/// from whatever it is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub generation: u64,
    pub population: usize,
    pub step_interval_ms: u32,
    pub paused: bool,
    pub pattern: Option<&'static str>,
}

/// A lightweight terminal view for the Life grid.
pub struct LifeView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for LifeView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const HELP_TEXT: &str = "space pause  n step  r random  c clear  p pattern  +/- speed  q quit";

impl LifeView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the board and HUD into a framebuffer.
    pub fn render(&self, board: &Board, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(GlyphStyle::default());

        let grid_px_w = (board.width() as u16).saturating_mul(self.cell_w);
        let grid_px_h = (board.height() as u16).saturating_mul(self.cell_h);
        let frame_w = grid_px_w + 2;
        let frame_h = grid_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let alive = GlyphStyle {
            fg: Rgb::new(0, 200, 0),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let dead = GlyphStyle {
            fg: Rgb::new(60, 60, 70),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        for (row, cells) in board.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let x = start_x + 1 + (col as u16) * self.cell_w;
                let y = start_y + 1 + (row as u16) * self.cell_h;
                if cell.is_alive() {
                    fb.fill_rect(x, y, self.cell_w, self.cell_h, '█', alive);
                } else {
                    // Subtle grid dot at the cell origin.
                    fb.put_char(x, y, '·', dead);
                }
            }
        }

        self.draw_status(&mut fb, hud, start_x, start_y, frame_h);

        if hud.paused {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }

        fb
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: GlyphStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }

        let bar = "─".repeat(w as usize - 2);
        fb.put_str(x, y, &format!("┌{bar}┐"), style);
        fb.put_str(x, y + h - 1, &format!("└{bar}┘"), style);
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, hud: &Hud, x: u16, y: u16, frame_h: u16) {
        let style = GlyphStyle::default();
        let mut status = format!(
            "gen {}  pop {}  {} ms",
            hud.generation, hud.population, hud.step_interval_ms
        );
        if let Some(name) = hud.pattern {
            status.push_str("  ");
            status.push_str(name);
        }
        fb.put_str(x, y.saturating_sub(1), &status, style);

        let help = GlyphStyle {
            dim: true,
            ..GlyphStyle::default()
        };
        fb.put_str(x, y + frame_h, HELP_TEXT, help);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let style = GlyphStyle {
            bold: true,
            ..GlyphStyle::default()
        };
        let tx = x + frame_w.saturating_sub(text.len() as u16) / 2;
        let ty = y + frame_h / 2;
        fb.put_str(tx, ty, text, style);
    }
}
