use itertools::Itertools;

use crate::journey::{Journey, ParticipantStatus};

/// Figures shown in the recap stat panel
#[derive(Debug, Clone, PartialEq)]
pub struct JourneySummary {
    pub name: String,
    /// e.g. "2024-03-15 (09:00 - 14:30)"
    pub date_range: String,
    pub distance: String,
    pub duration: String,
    pub elevation_gain: String,
    pub checkpoint_count: usize,
    pub participant_count: usize,
    pub online_count: usize,
    /// Names of participants that raised an SOS
    pub sos_participants: Vec<String>,
    pub connected_devices: usize,
}

impl JourneySummary {
    pub fn from_journey(journey: &Journey) -> Self {
        let status_counts = journey.participants.iter().counts_by(|p| p.status);
        Self {
            name: journey.name.clone(),
            date_range: format!(
                "{} ({} - {})",
                journey.date, journey.start_time, journey.end_time
            ),
            distance: journey.distance.clone(),
            duration: journey.duration.clone(),
            elevation_gain: journey.elevation_gain.clone(),
            checkpoint_count: journey.checkpoints.len(),
            participant_count: journey.participants.len(),
            online_count: status_counts
                .get(&ParticipantStatus::Online)
                .copied()
                .unwrap_or(0),
            sos_participants: journey
                .participants
                .iter()
                .filter(|p| p.status == ParticipantStatus::Sos)
                .map(|p| p.name.clone())
                .collect(),
            connected_devices: journey.connected_devices.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::JourneyStore;

    #[test]
    fn test_rainier_summary() {
        let store = JourneyStore::builtin();
        let summary = JourneySummary::from_journey(store.get_journey("1").unwrap());
        assert_eq!(summary.date_range, "2024-03-15 (09:00 - 14:30)");
        assert_eq!(summary.distance, "12.5 km");
        assert_eq!(summary.checkpoint_count, 10);
        assert_eq!(summary.participant_count, 4);
        assert_eq!(summary.online_count, 2);
        assert_eq!(summary.sos_participants, vec!["Lisa Wu".to_string()]);
        assert_eq!(summary.connected_devices, 2);
    }

    #[test]
    fn test_summary_without_sos() {
        let store = JourneyStore::builtin();
        let summary = JourneySummary::from_journey(store.get_journey("3").unwrap());
        assert_eq!(summary.online_count, 3);
        assert!(summary.sos_participants.is_empty());
    }
}
