// Sample journeys bundled with the application

use super::types::{
    Checkpoint, ConnectedDevice, ConnectionType, DeviceStatus, EnvironmentalSample, GeoPosition,
    Journey, Participant, ParticipantStatus, SignalStrength,
};

type CheckpointRow = (&'static str, f64, f64, &'static str, f64);
type SampleRow = (&'static str, f64, f64, f64);

const RAINIER_CHECKPOINTS: [CheckpointRow; 10] = [
    ("Trailhead", 46.8523, -121.7603, "09:00", 1646.),
    ("First Rest Point", 46.8543, -121.7623, "09:30", 1800.),
    ("Bear Point", 46.8563, -121.7643, "10:00", 1950.),
    ("Eagle Nest", 46.8583, -121.7663, "10:30", 2100.),
    ("Mountain View", 46.8603, -121.7683, "11:00", 2250.),
    ("Deer Valley", 46.8623, -121.7703, "11:30", 2400.),
    ("Lunch Spot", 46.8643, -121.7723, "12:00", 2350.),
    ("Fox Ridge", 46.8663, -121.7743, "13:00", 2200.),
    ("Sunset Point", 46.8683, -121.7763, "13:45", 2050.),
    ("End Point", 46.8703, -121.7783, "14:30", 1900.),
];

const RAINIER_WEATHER: [SampleRow; 10] = [
    ("09:00", 22., 65., 1013.),
    ("09:30", 23., 67., 1012.),
    ("10:00", 24., 68., 1012.),
    ("10:30", 24., 70., 1012.),
    ("11:00", 25., 72., 1011.),
    ("11:30", 26., 73., 1011.),
    ("12:00", 26., 75., 1011.),
    ("13:00", 25., 73., 1012.),
    ("13:45", 25., 72., 1012.),
    ("14:30", 24., 70., 1012.),
];

const YOSEMITE_CHECKPOINTS: [CheckpointRow; 10] = [
    ("Valley View", 37.7456, -119.5936, "08:00", 1200.),
    ("Bridalveil Fall", 37.7466, -119.5941, "08:30", 1250.),
    ("El Capitan View", 37.7476, -119.5946, "09:00", 1300.),
    ("Mirror Lake", 37.7486, -119.5951, "09:30", 1350.),
    ("Half Dome View", 37.7496, -119.5956, "10:00", 1400.),
    ("Lunch Point", 37.7506, -119.5961, "10:30", 1450.),
    ("Vernal Fall", 37.7516, -119.5966, "11:00", 1500.),
    ("Nevada Fall", 37.7526, -119.5971, "11:30", 1550.),
    ("Glacier Point", 37.7536, -119.5976, "12:00", 1600.),
    ("End Point", 37.7546, -119.5981, "12:15", 1650.),
];

const YOSEMITE_WEATHER: [SampleRow; 10] = [
    ("08:00", 20., 60., 1014.),
    ("08:30", 21., 62., 1014.),
    ("09:00", 22., 63., 1013.),
    ("09:30", 23., 65., 1013.),
    ("10:00", 24., 66., 1013.),
    ("10:30", 24., 67., 1012.),
    ("11:00", 25., 68., 1012.),
    ("11:30", 25., 69., 1012.),
    ("12:00", 26., 70., 1011.),
    ("12:15", 26., 70., 1011.),
];

const GRAND_CANYON_CHECKPOINTS: [CheckpointRow; 10] = [
    ("South Rim", 36.0544, -112.1401, "07:00", 2100.),
    ("Mather Point", 36.0554, -112.1411, "07:45", 2050.),
    ("Yavapai Point", 36.0564, -112.1421, "08:30", 2000.),
    ("Ooh Aah Point", 36.0574, -112.1431, "09:15", 1950.),
    ("Cedar Ridge", 36.0584, -112.1441, "10:00", 1900.),
    ("Lunch Spot", 36.0594, -112.1451, "10:45", 1850.),
    ("Skeleton Point", 36.0604, -112.1461, "11:30", 1800.),
    ("Tipoff", 36.0614, -112.1471, "12:15", 1750.),
    ("Indian Garden", 36.0624, -112.1481, "13:00", 1700.),
    ("End Point", 36.0634, -112.1491, "13:45", 1650.),
];

const GRAND_CANYON_WEATHER: [SampleRow; 10] = [
    ("07:00", 18., 55., 1015.),
    ("07:45", 19., 56., 1015.),
    ("08:30", 20., 57., 1014.),
    ("09:15", 22., 58., 1014.),
    ("10:00", 24., 60., 1013.),
    ("10:45", 26., 62., 1013.),
    ("11:30", 27., 65., 1012.),
    ("12:15", 28., 67., 1012.),
    ("13:00", 29., 70., 1011.),
    ("13:45", 29., 72., 1011.),
];

fn checkpoints(rows: &[CheckpointRow]) -> Vec<Checkpoint> {
    rows.iter()
        .zip(1..)
        .map(|(&(name, latitude, longitude, time, elevation), id)| Checkpoint {
            id,
            position: GeoPosition::new(latitude, longitude),
            name: name.to_string(),
            time: time.to_string(),
            elevation,
        })
        .collect()
}

fn weather(rows: &[SampleRow]) -> Vec<EnvironmentalSample> {
    rows.iter()
        .map(|&(time, temperature, humidity, pressure)| EnvironmentalSample {
            time: time.to_string(),
            temperature,
            humidity,
            pressure,
        })
        .collect()
}

fn participant(id: u32, name: &str, avatar: &str, status: ParticipantStatus) -> Participant {
    Participant {
        id,
        name: name.to_string(),
        avatar: avatar.to_string(),
        status,
    }
}

fn device(
    id: u32,
    name: &str,
    connection_type: ConnectionType,
    battery_level: u8,
    signal_strength: SignalStrength,
    owner: &str,
    last_seen: &str,
) -> ConnectedDevice {
    ConnectedDevice {
        id,
        name: name.to_string(),
        connection_type,
        status: DeviceStatus::Connected,
        battery_level,
        signal_strength,
        owner: owner.to_string(),
        last_seen: last_seen.to_string(),
    }
}

/// The three sample journeys shown when no journeys file is given
pub fn sample_journeys() -> Vec<Journey> {
    use ParticipantStatus::{Offline, Online, Sos};

    vec![
        Journey {
            id: "1".to_string(),
            name: "Mt. Rainier Trail".to_string(),
            date: "2024-03-15".to_string(),
            start_time: "09:00".to_string(),
            end_time: "14:30".to_string(),
            duration: "5h 30m".to_string(),
            distance: "12.5 km".to_string(),
            elevation_gain: "1,200 m".to_string(),
            checkpoints: checkpoints(&RAINIER_CHECKPOINTS),
            participants: vec![
                participant(1, "Alex Chen", "🐻", Online),
                participant(2, "Sarah Wang", "🦅", Offline),
                participant(3, "Mike Lin", "🦌", Online),
                participant(4, "Lisa Wu", "🦊", Sos),
            ],
            connected_devices: vec![
                device(
                    1,
                    "GPS Tracker #1",
                    ConnectionType::Bluetooth,
                    85,
                    SignalStrength::Strong,
                    "Alex Chen",
                    "2 mins ago",
                ),
                device(
                    2,
                    "Weather Station",
                    ConnectionType::Http,
                    92,
                    SignalStrength::Strong,
                    "Sarah Wang",
                    "1 min ago",
                ),
            ],
            environmental_data: weather(&RAINIER_WEATHER),
        },
        Journey {
            id: "2".to_string(),
            name: "Yosemite Valley Loop".to_string(),
            date: "2024-03-10".to_string(),
            start_time: "08:00".to_string(),
            end_time: "12:15".to_string(),
            duration: "4h 15m".to_string(),
            distance: "8.2 km".to_string(),
            elevation_gain: "850 m".to_string(),
            checkpoints: checkpoints(&YOSEMITE_CHECKPOINTS),
            participants: vec![
                participant(1, "Alex Chen", "🐻", Online),
                participant(2, "Sarah Wang", "🦅", Online),
            ],
            connected_devices: vec![device(
                3,
                "GPS Tracker #2",
                ConnectionType::Bluetooth,
                75,
                SignalStrength::Medium,
                "Alex Chen",
                "5 mins ago",
            )],
            environmental_data: weather(&YOSEMITE_WEATHER),
        },
        Journey {
            id: "3".to_string(),
            name: "Grand Canyon Rim Trail".to_string(),
            date: "2024-03-05".to_string(),
            start_time: "07:00".to_string(),
            end_time: "13:45".to_string(),
            duration: "6h 45m".to_string(),
            distance: "15.8 km".to_string(),
            elevation_gain: "1,500 m".to_string(),
            checkpoints: checkpoints(&GRAND_CANYON_CHECKPOINTS),
            participants: vec![
                participant(1, "Alex Chen", "🐻", Online),
                participant(2, "Sarah Wang", "🦅", Online),
                participant(3, "Mike Lin", "🦌", Online),
            ],
            connected_devices: vec![
                device(
                    4,
                    "GPS Tracker #3",
                    ConnectionType::Bluetooth,
                    60,
                    SignalStrength::Weak,
                    "Mike Lin",
                    "3 mins ago",
                ),
                device(
                    5,
                    "Weather Station #2",
                    ConnectionType::Http,
                    88,
                    SignalStrength::Strong,
                    "Sarah Wang",
                    "1 min ago",
                ),
            ],
            environmental_data: weather(&GRAND_CANYON_WEATHER),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_journeys_are_complete() {
        let journeys = sample_journeys();
        assert_eq!(journeys.len(), 3);
        for journey in &journeys {
            assert_eq!(journey.checkpoints.len(), 10);
            assert_eq!(journey.environmental_data.len(), 10);
            assert!(!journey.participants.is_empty());
            assert_eq!(journey.checkpoints.first().unwrap().id, 1);
            assert_eq!(journey.checkpoints.last().unwrap().name, "End Point");
        }
    }

    #[test]
    fn test_rainier_trail_details() {
        let journeys = sample_journeys();
        let rainier = &journeys[0];
        assert_eq!(rainier.name, "Mt. Rainier Trail");
        assert_eq!(rainier.checkpoints[5].name, "Deer Valley");
        assert_eq!(rainier.checkpoints[5].elevation, 2400.);
        assert_eq!(
            rainier.participants[3].status,
            ParticipantStatus::Sos
        );
    }
}
