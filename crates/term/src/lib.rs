//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the view maps a board into a
//! framebuffer of styled glyphs, and the renderer flushes framebuffers to a
//! real terminal, diffing consecutive frames so only changed runs are
//! rewritten.
//!
//! Goals:
//! - Keep `core` and `engine` deterministic and testable
//! - Keep the view pure (no I/O) so framebuffer contents can be unit-tested
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod life_view;
pub mod renderer;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use life_view::{Hud, LifeView, Viewport};
pub use renderer::TerminalRenderer;
