pub mod controller;
pub mod tick_source;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use controller::PlaybackController;
pub use tick_source::{FrameClock, TickSource, WallClock};

/// Progress gained per step at 1x speed
pub const PROGRESS_STEP: f64 = 0.01;
/// Wall-clock time one progress step takes at 1x speed
pub const STEP_INTERVAL: Duration = Duration::from_millis(50);

/// Logical playback phase derived from [`PlaybackState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Stopped,
    Playing,
    Finished,
}

/// Normalized playback position along a journey plus the playing flag.
///
/// Progress always stays within `[0, 1]` and reaching 1 stops playback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    progress: f64,
    is_playing: bool,
}

impl PlaybackState {
    pub fn new(progress: f64, is_playing: bool) -> Self {
        let progress = clamp_progress(progress);
        Self {
            progress,
            is_playing: is_playing && progress < 1.,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn phase(&self) -> PlaybackPhase {
        if self.is_playing {
            PlaybackPhase::Playing
        } else if self.progress >= 1. {
            PlaybackPhase::Finished
        } else {
            PlaybackPhase::Stopped
        }
    }

    /// State after `elapsed` time of playback at the given speed multiplier.
    ///
    /// Paused states, zero elapsed time and non-positive or non-finite speeds
    /// leave the state untouched.
    pub fn advanced(self, elapsed: Duration, speed: f64) -> Self {
        if !self.is_playing {
            return self;
        }
        let step = elapsed.as_secs_f64() / STEP_INTERVAL.as_secs_f64() * PROGRESS_STEP * speed;
        if !step.is_finite() || step <= 0. {
            return self;
        }
        Self::new(self.progress + step, true)
    }
}

/// Clamp a progress value into `[0, 1]`; NaN maps to 0
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.
    } else {
        progress.clamp(0., 1.)
    }
}

/// Speed multipliers offered by the recap view
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackSpeed {
    Half,
    #[default]
    Normal,
    Double,
    Quadruple,
}

impl PlaybackSpeed {
    pub const ALL: [PlaybackSpeed; 4] = [
        PlaybackSpeed::Half,
        PlaybackSpeed::Normal,
        PlaybackSpeed::Double,
        PlaybackSpeed::Quadruple,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            PlaybackSpeed::Half => 0.5,
            PlaybackSpeed::Normal => 1.,
            PlaybackSpeed::Double => 2.,
            PlaybackSpeed::Quadruple => 4.,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlaybackSpeed::Half => "0.5x",
            PlaybackSpeed::Normal => "1x",
            PlaybackSpeed::Double => "2x",
            PlaybackSpeed::Quadruple => "4x",
        }
    }

    /// Match a raw multiplier such as `2.0` to one of the offered speeds
    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| (s.multiplier() - multiplier).abs() < f64::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_state_is_clamped() {
        assert_eq!(PlaybackState::new(-0.5, false).progress(), 0.);
        assert_eq!(PlaybackState::new(1.5, false).progress(), 1.);
        assert_eq!(PlaybackState::new(f64::NAN, false).progress(), 0.);
    }

    #[test]
    fn test_finished_state_is_never_playing() {
        let state = PlaybackState::new(1., true);
        assert!(!state.is_playing());
        assert_eq!(state.phase(), PlaybackPhase::Finished);
    }

    #[test]
    fn test_phases() {
        assert_eq!(PlaybackState::default().phase(), PlaybackPhase::Stopped);
        assert_eq!(
            PlaybackState::new(0.3, true).phase(),
            PlaybackPhase::Playing
        );
        assert_eq!(
            PlaybackState::new(0.3, false).phase(),
            PlaybackPhase::Stopped
        );
    }

    #[test]
    fn test_one_step_per_interval() {
        let state = PlaybackState::new(0., true).advanced(STEP_INTERVAL, 1.);
        assert!((state.progress() - PROGRESS_STEP).abs() < 1e-12);
        assert!(state.is_playing());
    }

    #[test]
    fn test_speed_scales_advance() {
        let state = PlaybackState::new(0., true).advanced(Duration::from_millis(500), 4.);
        assert!((state.progress() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_advance_reaching_end_stops() {
        let state = PlaybackState::new(0.99, true).advanced(Duration::from_secs(1), 1.);
        assert_eq!(state.progress(), 1.);
        assert!(!state.is_playing());
        assert_eq!(state.phase(), PlaybackPhase::Finished);
    }

    #[test]
    fn test_paused_state_does_not_advance() {
        let state = PlaybackState::new(0.2, false).advanced(Duration::from_secs(10), 1.);
        assert_eq!(state, PlaybackState::new(0.2, false));
    }

    #[test]
    fn test_invalid_speed_does_not_advance() {
        let state = PlaybackState::new(0.2, true);
        assert_eq!(state.advanced(STEP_INTERVAL, -1.), state);
        assert_eq!(state.advanced(STEP_INTERVAL, f64::NAN), state);
        assert_eq!(state.advanced(STEP_INTERVAL, f64::INFINITY), state);
    }

    #[test]
    fn test_speed_lookup() {
        assert_eq!(PlaybackSpeed::from_multiplier(2.), Some(PlaybackSpeed::Double));
        assert_eq!(PlaybackSpeed::from_multiplier(3.), None);
        assert_eq!(PlaybackSpeed::default().label(), "1x");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_advance_stays_in_bounds_and_never_decreases(
            start in 0.0f64..=1.0,
            elapsed_ms in 0u64..100_000,
            speed in 0.0f64..8.0,
        ) {
            let before = PlaybackState::new(start, true);
            let after = before.advanced(Duration::from_millis(elapsed_ms), speed);

            // Property: progress stays in [0, 1] and is monotonic under advance
            prop_assert!(after.progress() >= 0. && after.progress() <= 1.);
            prop_assert!(after.progress() >= before.progress());
            if after.progress() >= 1. {
                prop_assert!(!after.is_playing());
            }
        }
    }
}
