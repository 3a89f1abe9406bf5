//! Terminal presentation layer.
//!
//! A small game-oriented rendering stack: the game view projects a core
//! snapshot into a character framebuffer, and the terminal renderer flushes
//! framebuffers to the real terminal with row-level diffing. The view is pure
//! and unit-testable; only the renderer touches I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::TerminalRenderer;
