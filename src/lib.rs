// Library interface for trailmate
// This allows integration tests and benches to access the recap engine

pub mod errors;
pub mod journey;
pub mod playback;
pub mod recap;
pub mod trail;

// Re-export commonly used types
pub use errors::TrailmateError;
pub use journey::{Checkpoint, GeoPosition, Journey, JourneyStore, Participant, ParticipantStatus};
pub use playback::{PlaybackController, PlaybackPhase, PlaybackSpeed, PlaybackState, TickSource};
pub use recap::{JourneySummary, ParticipantMarker, RecapSession};
pub use trail::{TrailOffset, position_of};
