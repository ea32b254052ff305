use std::time::Duration;

use log::{debug, info};

use super::{PlaybackPhase, PlaybackState, TickSource, clamp_progress};

/// Playback controller for a journey recap
///
/// Owns the [`PlaybackState`] and advances it from tick timestamps. The
/// first tick after `play` anchors the clock; every later tick advances by
/// the time elapsed since the previous one, so a repeated timestamp never
/// advances twice.
#[derive(Debug, Clone, Default)]
pub struct PlaybackController {
    state: PlaybackState,
    last_tick: Option<Duration>,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.state.phase()
    }

    /// Start or resume playback from the current progress.
    ///
    /// Has no effect while already playing or once finished; a finished
    /// playback has to be replayed first.
    pub fn play(&mut self) {
        match self.phase() {
            PlaybackPhase::Playing => {}
            PlaybackPhase::Finished => debug!("Ignoring play, playback finished"),
            PlaybackPhase::Stopped => {
                self.state = PlaybackState::new(self.state.progress(), true);
                self.last_tick = None;
                debug!("Playback started at {:.2}", self.state.progress());
            }
        }
    }

    /// Pause playback, keeping the current progress
    pub fn pause(&mut self) {
        if !self.is_playing() {
            return;
        }
        self.state = PlaybackState::new(self.state.progress(), false);
        self.last_tick = None;
        debug!("Playback paused at {:.2}", self.state.progress());
    }

    /// Rewind to the start. Playback is left stopped.
    pub fn replay(&mut self) {
        self.state = PlaybackState::default();
        self.last_tick = None;
        debug!("Playback rewound");
    }

    /// Jump to the given progress, clamped to `[0, 1]`
    pub fn seek(&mut self, progress: f64) {
        self.state = PlaybackState::new(clamp_progress(progress), self.is_playing());
        if self.phase() == PlaybackPhase::Finished {
            self.last_tick = None;
        }
    }

    /// Advance playback to the tick timestamp `now` at the given speed.
    ///
    /// Returns the resulting state.
    pub fn tick(&mut self, now: Duration, speed: f64) -> PlaybackState {
        if !self.is_playing() {
            return self.state;
        }

        let Some(previous) = self.last_tick else {
            self.last_tick = Some(now);
            return self.state;
        };
        if now <= previous {
            return self.state;
        }

        self.last_tick = Some(now);
        self.advance(now - previous, speed)
    }

    /// Tick using the current time of a tick source
    pub fn drive(&mut self, source: &impl TickSource, speed: f64) -> PlaybackState {
        self.tick(source.now(), speed)
    }

    /// Advance playback by an elapsed duration
    pub fn advance(&mut self, elapsed: Duration, speed: f64) -> PlaybackState {
        let was_playing = self.is_playing();
        self.state = self.state.advanced(elapsed, speed);
        if was_playing && self.phase() == PlaybackPhase::Finished {
            self.last_tick = None;
            info!("Playback finished");
        }
        self.state
    }
}
