// Read-only store of recorded journeys

use itertools::Itertools;
use log::{debug, warn};

use crate::errors::TrailmateError;
use crate::journey::builtin::sample_journeys;
use crate::journey::types::Journey;

/// Ordered, immutable collection of journeys.
///
/// The store is built once at start-up and handed to the views by reference;
/// it exposes no mutation operations.
#[derive(Clone, Debug)]
pub struct JourneyStore {
    journeys: Vec<Journey>,
}

impl JourneyStore {
    /// Create a store from the given journeys, keeping their order.
    ///
    /// Journey ids must be unique, and so must participant ids within a journey.
    pub fn new(journeys: Vec<Journey>) -> Result<Self, TrailmateError> {
        if let Some(duplicate) = journeys.iter().map(|j| j.id.as_str()).duplicates().next() {
            return Err(TrailmateError::DuplicateJourney {
                id: duplicate.to_string(),
            });
        }
        for journey in &journeys {
            if let Some(duplicate) = journey.participants.iter().map(|p| p.id).duplicates().next() {
                return Err(TrailmateError::DuplicateParticipant {
                    journey_id: journey.id.clone(),
                    participant_id: duplicate,
                });
            }
        }
        debug!("Created journey store with {} journeys", journeys.len());
        Ok(Self { journeys })
    }

    /// Store holding the bundled sample journeys
    pub fn builtin() -> Self {
        Self {
            journeys: sample_journeys(),
        }
    }

    /// All journeys in their original order
    pub fn list_journeys(&self) -> &[Journey] {
        &self.journeys
    }

    pub fn len(&self) -> usize {
        self.journeys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.journeys.is_empty()
    }

    /// Look up a journey by id
    pub fn get_journey(&self, id: &str) -> Result<&Journey, TrailmateError> {
        self.journeys
            .iter()
            .find(|j| j.id == id)
            .ok_or_else(|| TrailmateError::JourneyNotFound { id: id.to_string() })
    }

    pub fn first_journey(&self) -> Option<&Journey> {
        self.journeys.first()
    }

    /// Labels for a journey picker, one per journey in store order.
    ///
    /// Journeys are labelled `name (date)`; labels that would repeat get the
    /// journey id appended so every entry stays selectable.
    pub fn selector_labels(&self) -> Vec<String> {
        let counts = self.journeys.iter().map(Journey::selector_label).counts();
        self.journeys
            .iter()
            .map(|journey| {
                let label = journey.selector_label();
                if counts.get(&label).copied().unwrap_or_default() > 1 {
                    format!("{} [{}]", label, journey.id)
                } else {
                    label
                }
            })
            .collect()
    }

    /// Label of the journey with the given id, as listed by `selector_labels`
    pub fn selector_label_of(&self, id: &str) -> Option<String> {
        let index = self.journeys.iter().position(|j| j.id == id)?;
        self.selector_labels().into_iter().nth(index)
    }

    /// Journey picked from a `selector_labels` entry
    pub fn journey_for_label(&self, label: &str) -> Option<&Journey> {
        self.selector_labels()
            .iter()
            .position(|candidate| candidate == label)
            .and_then(|index| self.journeys.get(index))
    }

    /// Look up a journey by id, falling back to the first journey when the id is unknown
    pub fn get_or_first(&self, id: &str) -> Option<&Journey> {
        match self.get_journey(id) {
            Ok(journey) => Some(journey),
            Err(e) => {
                warn!("{}, falling back to the first journey", e);
                self.first_journey()
            }
        }
    }
}

impl Default for JourneyStore {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_keeps_order() {
        let store = JourneyStore::builtin();
        let ids: Vec<&str> = store.list_journeys().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_get_journey() {
        let store = JourneyStore::builtin();
        assert_eq!(store.get_journey("2").unwrap().name, "Yosemite Valley Loop");
    }

    #[test]
    fn test_unknown_journey_is_not_found() {
        let store = JourneyStore::builtin();
        match store.get_journey("missing") {
            Err(TrailmateError::JourneyNotFound { id }) => assert_eq!(id, "missing"),
            other => panic!("Expected JourneyNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_get_or_first_falls_back() {
        let store = JourneyStore::builtin();
        assert_eq!(store.get_or_first("missing").unwrap().id, "1");
        assert_eq!(store.get_or_first("3").unwrap().id, "3");
    }

    #[test]
    fn test_empty_store_has_no_fallback() {
        let store = JourneyStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.first_journey().is_none());
        assert!(store.get_or_first("1").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut journeys = sample_journeys();
        journeys.push(journeys[1].clone());
        match JourneyStore::new(journeys) {
            Err(TrailmateError::DuplicateJourney { id }) => assert_eq!(id, "2"),
            other => panic!("Expected DuplicateJourney, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_participants_rejected() {
        let mut journeys = sample_journeys();
        let mut twin = journeys[0].participants[0].clone();
        twin.name = "Alex Twin".to_string();
        journeys[0].participants.push(twin);
        match JourneyStore::new(journeys) {
            Err(TrailmateError::DuplicateParticipant {
                journey_id,
                participant_id,
            }) => {
                assert_eq!(journey_id, "1");
                assert_eq!(participant_id, 1);
            }
            other => panic!("Expected DuplicateParticipant, got {:?}", other),
        }
    }

    #[test]
    fn test_selector_labels_use_name_and_date() {
        let store = JourneyStore::builtin();
        let labels = store.selector_labels();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0], "Mt. Rainier Trail (2024-03-15)");
        assert_eq!(store.journey_for_label(&labels[2]).unwrap().id, "3");
        assert_eq!(store.selector_label_of("1").as_deref(), Some(labels[0].as_str()));
        assert!(store.journey_for_label("Mt. Rainier Trail").is_none());
    }

    #[test]
    fn test_journeys_with_the_same_name_are_each_selectable() {
        let mut journeys = sample_journeys();
        let mut rerun = journeys[0].clone();
        rerun.id = "1b".to_string();
        journeys.push(rerun);
        let store = JourneyStore::new(journeys).unwrap();

        let labels = store.selector_labels();
        assert_eq!(labels.iter().unique().count(), labels.len());
        assert_eq!(store.journey_for_label(&labels[0]).unwrap().id, "1");
        assert_eq!(store.journey_for_label(&labels[3]).unwrap().id, "1b");
    }
}
