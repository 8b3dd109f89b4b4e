//! TerminalRenderer: flushes framebuffers to a real terminal.
//!
//! The renderer keeps the previously drawn frame and rewrites only the
//! horizontal runs of glyphs that changed. The first frame, a size change,
//! and `invalidate` all force a full pass.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, GlyphStyle, Rgb};

/// A horizontal span of glyphs to rewrite: `(x, y, len)`.
type Run = (u16, u16, u16);

pub struct TerminalRenderer {
    out: io::Stdout,
    prev: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            prev: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` per frame and pass it in; the
    /// renderer swaps it with the retained previous frame so neither side
    /// clones.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let same_size = self
            .prev
            .as_ref()
            .is_some_and(|p| p.width() == fb.width() && p.height() == fb.height());

        let runs = if same_size {
            dirty_runs(self.prev.as_ref().unwrap_or(fb), fb)
        } else {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
            whole_frame(fb)
        };
        self.paint(fb, &runs)?;

        // Retain the frame just drawn, recycling the old buffer.
        let mut keep = match self.prev.take() {
            Some(mut old) => {
                old.resize(fb.width(), fb.height());
                old
            }
            None => FrameBuffer::new(fb.width(), fb.height()),
        };
        std::mem::swap(&mut keep, fb);
        self.prev = Some(keep);
        Ok(())
    }

    fn paint(&mut self, fb: &FrameBuffer, runs: &[Run]) -> Result<()> {
        // Styles are only re-queued when they change between glyphs.
        let mut pen: Option<GlyphStyle> = None;
        for &(x, y, len) in runs {
            self.out.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let glyph = fb.get(x + dx, y).unwrap_or_default();
                if pen != Some(glyph.style) {
                    queue_style(&mut self.out, glyph.style)?;
                    pen = Some(glyph.style);
                }
                self.out.queue(Print(glyph.ch))?;
            }
        }
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn queue_style(out: &mut io::Stdout, style: GlyphStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Every row as one run, for full redraws.
fn whole_frame(fb: &FrameBuffer) -> Vec<Run> {
    (0..fb.height()).map(|y| (0, y, fb.width())).collect()
}

/// Coalesce differing glyphs between two same-sized frames into runs.
fn dirty_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Run> {
    debug_assert_eq!((prev.width(), prev.height()), (next.width(), next.height()));

    let mut runs = Vec::new();
    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_conversion() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(
            rgb_to_color(rgb),
            Color::Rgb {
                r: 10,
                g: 20,
                b: 30
            }
        );
    }

    #[test]
    fn test_dirty_runs_coalesce_adjacent_glyphs() {
        let style = GlyphStyle::default();
        let a = FrameBuffer::new(5, 1);
        let mut b = a.clone();

        for x in 1..=3 {
            b.set(x, 0, style.glyph('X'));
        }

        assert_eq!(dirty_runs(&a, &b), vec![(1, 0, 3)]);
    }

    #[test]
    fn test_dirty_runs_empty_for_identical_frames() {
        let a = FrameBuffer::new(8, 4);
        assert!(dirty_runs(&a, &a.clone()).is_empty());
    }

    #[test]
    fn test_dirty_runs_split_by_unchanged_gap() {
        let style = GlyphStyle::default();
        let a = FrameBuffer::new(7, 1);
        let mut b = a.clone();
        b.set(0, 0, style.glyph('L'));
        b.set(6, 0, style.glyph('R'));

        assert_eq!(dirty_runs(&a, &b), vec![(0, 0, 1), (6, 0, 1)]);
    }

    #[test]
    fn test_whole_frame_covers_every_row() {
        let fb = FrameBuffer::new(9, 3);
        assert_eq!(whole_frame(&fb), vec![(0, 0, 9), (0, 1, 9), (0, 2, 9)]);
    }
}
