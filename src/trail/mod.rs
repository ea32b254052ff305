// Trail interpolation: where each participant is on the map for a given playback progress

pub mod color;

use crate::errors::TrailmateError;
use crate::journey::{Checkpoint, EnvironmentalSample, GeoPosition, Journey, Participant};
use crate::playback::clamp_progress;

pub use color::TrailColor;

/// Size of one trail offset step, in degrees
pub const TRAIL_OFFSET_DEGREES: f64 = 0.001;

/// Small fixed displacement applied to a participant's trail so that several
/// hikers walking the same checkpoints remain distinguishable on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailOffset {
    pub delta_latitude: f64,
    pub delta_longitude: f64,
}

// Diagonal directions indexed by `id % 4`, so ids 1 to 4 keep the
// bear, eagle, deer and fox diagonals of the sample team
const DIRECTIONS: [(f64, f64); 4] = [(-1., -1.), (1., -1.), (-1., 1.), (1., 1.)];

impl TrailOffset {
    /// Deterministic offset for a participant, derived from their id only.
    ///
    /// Ids 1 to 4 sit on the four diagonals one step from the checkpoint,
    /// ids 5 to 8 two steps out, and so on. Id 0 walks on the checkpoints
    /// themselves. Distinct ids always give distinct offsets.
    pub fn for_participant(participant: &Participant) -> Self {
        let direction = (participant.id % 4) as usize;
        let ring = participant.id.div_ceil(4);
        let (lat_sign, lon_sign) = DIRECTIONS[direction];
        let distance = TRAIL_OFFSET_DEGREES * f64::from(ring);
        Self {
            delta_latitude: lat_sign * distance,
            delta_longitude: lon_sign * distance,
        }
    }

    pub fn apply(&self, position: &GeoPosition) -> GeoPosition {
        position.shifted(self.delta_latitude, self.delta_longitude)
    }
}

/// Index of the checkpoint reached at `progress` on a path of `len` checkpoints.
///
/// Samples the nearest checkpoint at or before the progress point rather than
/// interpolating between checkpoints.
pub fn checkpoint_index(progress: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len - 1;
    let index = (clamp_progress(progress) * last as f64).floor() as usize;
    index.min(last)
}

fn ensure_checkpoints(journey: &Journey) -> Result<&[Checkpoint], TrailmateError> {
    if journey.checkpoints.is_empty() {
        return Err(TrailmateError::InvalidJourney {
            id: journey.id.clone(),
        });
    }
    Ok(&journey.checkpoints)
}

/// The participant's full trail: every checkpoint moved by their offset
pub fn trail_path(
    journey: &Journey,
    participant: &Participant,
) -> Result<Vec<GeoPosition>, TrailmateError> {
    let offset = TrailOffset::for_participant(participant);
    Ok(ensure_checkpoints(journey)?
        .iter()
        .map(|c| offset.apply(&c.position))
        .collect())
}

/// Current map position of a participant at the given progress
pub fn position_of(
    journey: &Journey,
    participant: &Participant,
    progress: f64,
) -> Result<GeoPosition, TrailmateError> {
    let checkpoint = current_checkpoint(journey, progress)?;
    Ok(TrailOffset::for_participant(participant).apply(&checkpoint.position))
}

/// Checkpoint reached at the given progress, without any participant offset
pub fn current_checkpoint(journey: &Journey, progress: f64) -> Result<&Checkpoint, TrailmateError> {
    let checkpoints = ensure_checkpoints(journey)?;
    Ok(&checkpoints[checkpoint_index(progress, checkpoints.len())])
}

/// Environmental sample matching the given progress, if the journey recorded any
pub fn environment_at(journey: &Journey, progress: f64) -> Option<&EnvironmentalSample> {
    journey
        .environmental_data
        .get(checkpoint_index(progress, journey.environmental_data.len()))
}
