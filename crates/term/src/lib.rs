//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view renders a snapshot into a
//! framebuffer of styled characters, and the renderer flushes that framebuffer
//! to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure and separate from terminal I/O
//! - Allow control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, MAX_CELL_SIZE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
