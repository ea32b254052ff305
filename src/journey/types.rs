// Core data structures for recorded hiking journeys

use serde::{Deserialize, Serialize};

/// Geographic position in decimal degrees
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns a copy of this position moved by the given deltas (degrees)
    pub fn shifted(&self, delta_latitude: f64, delta_longitude: f64) -> Self {
        Self {
            latitude: self.latitude + delta_latitude,
            longitude: self.longitude + delta_longitude,
        }
    }
}

/// A recorded waypoint along a journey
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Checkpoint {
    pub id: u32,
    pub position: GeoPosition,
    pub name: String,
    /// Time of day the checkpoint was reached, e.g. "09:30"
    pub time: String,
    /// Elevation in meters
    pub elevation: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantStatus {
    Online,
    Offline,
    Sos,
}

impl ParticipantStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ParticipantStatus::Online => "online",
            ParticipantStatus::Offline => "offline",
            ParticipantStatus::Sos => "sos",
        }
    }
}

/// A hiker taking part in a journey
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Participant {
    pub id: u32,
    pub name: String,
    /// Single glyph used as the participant's avatar on the map
    pub avatar: String,
    pub status: ParticipantStatus,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionType {
    Bluetooth,
    #[serde(rename = "HTTP")]
    Http,
    #[serde(rename = "USB")]
    Usb,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    Connected,
    Disconnected,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SignalStrength {
    Strong,
    Medium,
    Weak,
}

/// A tracker or sensor that reported data during the journey. Display only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConnectedDevice {
    pub id: u32,
    pub name: String,
    pub connection_type: ConnectionType,
    pub status: DeviceStatus,
    /// Battery level percentage (0-100)
    pub battery_level: u8,
    pub signal_strength: SignalStrength,
    pub owner: String,
    pub last_seen: String,
}

/// Weather reading taken during the journey
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EnvironmentalSample {
    pub time: String,
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
    /// Hectopascal
    pub pressure: f64,
}

/// A complete recorded journey. Immutable once loaded.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Journey {
    pub id: String,
    pub name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub distance: String,
    pub elevation_gain: String,
    pub checkpoints: Vec<Checkpoint>,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub connected_devices: Vec<ConnectedDevice>,
    #[serde(default)]
    pub environmental_data: Vec<EnvironmentalSample>,
}

impl Journey {
    /// How the journey is listed in the journey picker
    pub fn selector_label(&self) -> String {
        format!("{} ({})", self.name, self.date)
    }

    /// Find a participant by id
    pub fn participant(&self, participant_id: u32) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == participant_id)
    }

    pub fn has_checkpoints(&self) -> bool {
        !self.checkpoints.is_empty()
    }

    /// Highest recorded checkpoint elevation
    pub fn max_elevation(&self) -> Option<f64> {
        self.checkpoints
            .iter()
            .map(|c| c.elevation)
            .max_by(|a, b| a.total_cmp(b))
    }

    /// Lowest recorded checkpoint elevation
    pub fn min_elevation(&self) -> Option<f64> {
        self.checkpoints
            .iter()
            .map(|c| c.elevation)
            .min_by(|a, b| a.total_cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkpoint(id: u32, elevation: f64) -> Checkpoint {
        Checkpoint {
            id,
            position: GeoPosition::new(46.0, -121.0),
            name: format!("Checkpoint {}", id),
            time: "09:00".to_string(),
            elevation,
        }
    }

    #[test]
    fn test_shifted_position() {
        let position = GeoPosition::new(46.8523, -121.7603).shifted(0.001, -0.001);
        assert!((position.latitude - 46.8533).abs() < 1e-9);
        assert!((position.longitude + 121.7613).abs() < 1e-9);
    }

    #[test]
    fn test_elevation_range() {
        let journey = Journey {
            id: "1".to_string(),
            name: "Test".to_string(),
            date: "2024-03-15".to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            duration: "1h".to_string(),
            distance: "1 km".to_string(),
            elevation_gain: "100 m".to_string(),
            checkpoints: vec![checkpoint(1, 1646.), checkpoint(2, 2400.), checkpoint(3, 1900.)],
            participants: vec![],
            connected_devices: vec![],
            environmental_data: vec![],
        };
        assert_eq!(journey.max_elevation(), Some(2400.));
        assert_eq!(journey.min_elevation(), Some(1646.));
        assert!(journey.participant(1).is_none());
        assert_eq!(journey.selector_label(), "Test (2024-03-15)");
    }

    #[test]
    fn test_enum_serialization() {
        assert_eq!(
            serde_json::to_string(&ParticipantStatus::Sos).unwrap(),
            "\"sos\""
        );
        assert_eq!(serde_json::to_string(&ConnectionType::Http).unwrap(), "\"HTTP\"");
        let strength: SignalStrength = serde_json::from_str("\"weak\"").unwrap();
        assert_eq!(strength, SignalStrength::Weak);
    }
}
