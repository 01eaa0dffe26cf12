//! Frame clock: elapsed time between frames and frame-rate capping.

use std::time::{Duration, Instant};

use crate::types::TICK_MS;

/// Monotonic clock for a fixed-rate frame loop.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    last_lap: Instant,
    frame_start: Instant,
}

impl FrameClock {
    /// Clock targeting one frame every `TICK_MS`.
    pub fn new() -> Self {
        Self::with_frame(Duration::from_millis(TICK_MS as u64))
    }

    pub fn with_frame(frame: Duration) -> Self {
        let now = Instant::now();
        Self {
            frame,
            last_lap: now,
            frame_start: now,
        }
    }

    /// Milliseconds since the previous lap, and start a new frame.
    ///
    /// Sub-millisecond remainders carry over to the next lap so that no time
    /// is lost to rounding.
    pub fn lap_ms(&mut self) -> u32 {
        self.lap_ms_at(Instant::now())
    }

    fn lap_ms_at(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last_lap);
        let ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
        self.last_lap += Duration::from_millis(ms as u64);
        self.frame_start = now;
        ms
    }

    /// Time left before the current frame's budget is used up.
    pub fn until_next_frame(&self) -> Duration {
        self.until_next_frame_at(Instant::now())
    }

    fn until_next_frame_at(&self, now: Instant) -> Duration {
        self.frame
            .saturating_sub(now.saturating_duration_since(self.frame_start))
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
