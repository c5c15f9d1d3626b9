use instant::Instant;
use std::time::Duration;

/// Snapshot handed to a sketch each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInfo {
    /// Milliseconds since the clock was started.
    pub elapsed_ms: f64,
    /// 1 on the first frame, then +1 per frame.
    pub frame_count: u64,
}

/// Per-canvas frame clock. Each sketch owns one so frame counts stay independent.
#[derive(Clone, Debug)]
pub struct FrameClock {
    start: Instant,
    frame_count: u64,
}

impl FrameClock {
    pub fn new(start: Instant) -> Self {
        Self {
            start,
            frame_count: 0,
        }
    }

    /// Advance one frame. `now` earlier than the start reads as zero elapsed.
    pub fn tick(&mut self, now: Instant) -> FrameInfo {
        self.frame_count += 1;
        let elapsed = if now > self.start {
            now.duration_since(self.start)
        } else {
            Duration::ZERO
        };
        FrameInfo {
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            frame_count: self.frame_count,
        }
    }
}
