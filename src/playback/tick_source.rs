// Time sources that drive playback

use std::time::{Duration, Instant};

/// Monotonic clock consumed by the playback controller.
///
/// `now` returns the time elapsed since the source started. Frame callbacks
/// and fixed-interval timers both fit behind this interface.
pub trait TickSource {
    fn now(&self) -> Duration;
}

/// Tick source backed by the system monotonic clock
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    started: Instant,
}

impl WallClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::start()
    }
}

impl TickSource for WallClock {
    fn now(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Deterministic tick source that only moves when a frame is produced
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    frame_duration: Duration,
    frames: u32,
}

impl FrameClock {
    pub fn new(frame_duration: Duration) -> Self {
        Self {
            frame_duration,
            frames: 0,
        }
    }

    /// ~60 frames per second
    pub fn sixty_fps() -> Self {
        Self::new(Duration::from_micros(16_667))
    }

    /// Move to the next frame and return its timestamp
    pub fn next_frame(&mut self) -> Duration {
        self.frames = self.frames.saturating_add(1);
        self.now()
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }
}

impl TickSource for FrameClock {
    fn now(&self) -> Duration {
        self.frame_duration * self.frames
    }
}
