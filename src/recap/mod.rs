// Recap session: the playback state of one journey recap view

pub mod summary;

use std::{sync::Arc, time::Duration};

use log::{info, warn};

use crate::errors::TrailmateError;
use crate::journey::{Checkpoint, EnvironmentalSample, GeoPosition, Journey, JourneyStore, Participant};
use crate::playback::{PlaybackController, PlaybackPhase, PlaybackSpeed, PlaybackState, TickSource};
use crate::trail::{self, TrailColor};

pub use summary::JourneySummary;

/// Where a participant is drawn for the current playback progress
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantMarker<'a> {
    pub participant: &'a Participant,
    pub position: GeoPosition,
    /// Checkpoint the participant has reached, shown in the marker popup
    pub checkpoint: &'a Checkpoint,
    pub trail_color: TrailColor,
    pub marker_color: TrailColor,
}

/// Playback session bound to one selected journey.
///
/// Selecting another journey resets playback to the start. Unknown journey
/// ids fall back to the first journey in the store; journeys without
/// checkpoints keep the controls disabled.
#[derive(Debug, Clone)]
pub struct RecapSession {
    store: Arc<JourneyStore>,
    selected: Option<usize>,
    controller: PlaybackController,
    speed: PlaybackSpeed,
}

impl RecapSession {
    /// Open a session on the requested journey, or the first one when none is requested
    pub fn new(store: Arc<JourneyStore>, requested_journey: Option<&str>) -> Self {
        let mut session = Self {
            selected: if store.is_empty() { None } else { Some(0) },
            store,
            controller: PlaybackController::new(),
            speed: PlaybackSpeed::default(),
        };
        if let Some(id) = requested_journey
            && let Err(e) = session.select_journey(id)
        {
            warn!("{}, showing the first journey instead", e);
        }
        session
    }

    pub fn store(&self) -> &JourneyStore {
        &self.store
    }

    /// Switch to another journey and rewind playback.
    ///
    /// On an unknown id the session falls back to the first journey and the
    /// lookup error is returned for the caller to report.
    pub fn select_journey(&mut self, id: &str) -> Result<(), TrailmateError> {
        let lookup = self
            .store
            .list_journeys()
            .iter()
            .position(|j| j.id == id);
        self.controller.replay();
        match lookup {
            Some(index) => {
                self.selected = Some(index);
                info!("Selected journey {}", id);
                Ok(())
            }
            None => {
                self.selected = if self.store.is_empty() { None } else { Some(0) };
                Err(TrailmateError::JourneyNotFound { id: id.to_string() })
            }
        }
    }

    /// The selected journey; `None` only when the store is empty
    pub fn journey(&self) -> Option<&Journey> {
        self.selected
            .and_then(|index| self.store.list_journeys().get(index))
    }

    fn selected_journey(&self) -> Result<&Journey, TrailmateError> {
        self.journey().ok_or(TrailmateError::NoJourneys)
    }

    /// Whether the playback controls can be used for the selected journey
    pub fn controls_enabled(&self) -> bool {
        self.journey().is_some_and(Journey::has_checkpoints)
    }

    pub fn state(&self) -> PlaybackState {
        self.controller.state()
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.controller.phase()
    }

    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
    }

    pub fn play(&mut self) {
        if !self.controls_enabled() {
            warn!("Ignoring play, the selected journey has no checkpoints");
            return;
        }
        self.controller.play();
    }

    pub fn pause(&mut self) {
        self.controller.pause();
    }

    pub fn replay(&mut self) {
        self.controller.replay();
    }

    /// Toggle between playing and paused, the way the play/pause button behaves
    pub fn toggle(&mut self) {
        if self.controller.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn seek(&mut self, progress: f64) {
        if self.controls_enabled() {
            self.controller.seek(progress);
        }
    }

    /// Advance playback to the tick timestamp at the session speed
    pub fn tick(&mut self, now: Duration) -> PlaybackState {
        self.controller.tick(now, self.speed.multiplier())
    }

    pub fn drive(&mut self, source: &impl TickSource) -> PlaybackState {
        self.controller.drive(source, self.speed.multiplier())
    }

    /// Checkpoint reached at the current progress
    pub fn current_checkpoint(&self) -> Result<&Checkpoint, TrailmateError> {
        trail::current_checkpoint(self.selected_journey()?, self.controller.progress())
    }

    /// Environmental sample matching the current progress
    pub fn environment(&self) -> Option<&EnvironmentalSample> {
        self.journey()
            .and_then(|j| trail::environment_at(j, self.controller.progress()))
    }

    /// One marker per participant of the selected journey
    pub fn markers(&self) -> Result<Vec<ParticipantMarker<'_>>, TrailmateError> {
        let journey = self.selected_journey()?;
        let progress = self.controller.progress();
        let checkpoint = trail::current_checkpoint(journey, progress)?;
        journey
            .participants
            .iter()
            .map(|participant| -> Result<_, TrailmateError> {
                Ok(ParticipantMarker {
                    participant,
                    position: trail::position_of(journey, participant, progress)?,
                    checkpoint,
                    trail_color: TrailColor::for_participant(participant),
                    marker_color: TrailColor::marker_for(participant),
                })
            })
            .collect()
    }

    /// Full offset trail of every participant
    pub fn trails(&self) -> Result<Vec<(&Participant, Vec<GeoPosition>)>, TrailmateError> {
        let journey = self.selected_journey()?;
        journey
            .participants
            .iter()
            .map(|p| -> Result<_, TrailmateError> { Ok((p, trail::trail_path(journey, p)?)) })
            .collect()
    }

    pub fn summary(&self) -> Option<JourneySummary> {
        self.journey().map(JourneySummary::from_journey)
    }
}
