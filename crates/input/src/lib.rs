//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! events into [`InputEvent`]s and collects everything the terminal reported
//! since the previous frame.

pub mod map;
pub mod poll;

pub use tui_blockfall_types as types;

pub use map::{map_key, InputEvent};
pub use poll::{drain_events, FrameEvents, MAX_EVENTS_PER_FRAME};
