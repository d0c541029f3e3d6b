//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: `core` stays deterministic and
//! testable, the view maps state into a plain framebuffer, and the renderer
//! is the only piece that touches the real terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_forage_core as core;
pub use tui_forage_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, VIEW_HEIGHT, VIEW_WIDTH};
pub use renderer::TerminalRenderer;
