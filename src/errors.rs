// Error types for trailmate

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum TrailmateError {
    // Journey store errors
    #[snafu(display("No journey with id {id}"))]
    JourneyNotFound { id: String },
    #[snafu(display("Journey {id} has no checkpoints"))]
    InvalidJourney { id: String },
    #[snafu(display("Journey {id} appears more than once"))]
    DuplicateJourney { id: String },
    #[snafu(display("Participant {participant_id} appears more than once in journey {journey_id}"))]
    DuplicateParticipant {
        journey_id: String,
        participant_id: u32,
    },
    #[snafu(display("No journeys loaded"))]
    NoJourneys,

    // Journeys file errors
    #[snafu(display("Invalid journeys file: {path}"))]
    InvalidJourneyFile { path: String },
    #[snafu(display("Journeys file {path} does not contain any journey"))]
    EmptyJourneyFile { path: String },
    #[snafu(display("Error loading journeys file"))]
    JourneyLoaderError { source: io::Error },

    // Config management errors
    #[snafu(display("Could not find application config directory"))]
    NoConfigDir,
    #[snafu(display("Error reading config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error parsing config file"))]
    ConfigParseError { source: serde_json::Error },

    // User input validation errors
    #[snafu(display("Invalid user input: {field} - {reason}"))]
    InvalidUserInput { field: String, reason: String },
}

impl TrailmateError {
    /// Errors the recap view recovers from locally instead of surfacing to the user
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TrailmateError::JourneyNotFound { .. } | TrailmateError::InvalidJourney { .. }
        )
    }
}
