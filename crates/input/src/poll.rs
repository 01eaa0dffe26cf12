//! Per-frame event collection.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event};

use crate::map::{map_key, InputEvent};

/// Upper bound on inputs handled in one frame; extra keys wait for the next frame.
pub const MAX_EVENTS_PER_FRAME: usize = 16;

pub type FrameEvents = ArrayVec<InputEvent, MAX_EVENTS_PER_FRAME>;

/// Collect every pending input without blocking.
///
/// Focus and mouse events are consumed and dropped. Returns whether the
/// terminal was resized.
pub fn drain_events(out: &mut FrameEvents) -> Result<bool> {
    out.clear();
    let mut resized = false;

    while !out.is_full() && event::poll(Duration::ZERO)? {
        match event::read()? {
            Event::Key(key) => {
                if let Some(ev) = map_key(key) {
                    out.push(ev);
                }
            }
            Event::Resize(..) => resized = true,
            _ => {}
        }
    }

    Ok(resized)
}
