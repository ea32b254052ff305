use crate::journey::{Participant, ParticipantStatus};

/// RGB colour used to draw a participant's trail and marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TrailColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BEAR: TrailColor = TrailColor::from_rgb(0x79, 0x55, 0x48);
    pub const EAGLE: TrailColor = TrailColor::from_rgb(0x60, 0x7d, 0x8b);
    pub const DEER: TrailColor = TrailColor::from_rgb(0x8d, 0x6e, 0x63);
    pub const FOX: TrailColor = TrailColor::from_rgb(0xff, 0x57, 0x22);
    pub const DEFAULT: TrailColor = TrailColor::from_rgb(0x4c, 0xaf, 0x50);
    pub const SOS: TrailColor = TrailColor::from_rgb(0xf4, 0x43, 0x36);
    pub const OFFLINE: TrailColor = TrailColor::from_rgb(0x9e, 0x9e, 0x9e);

    /// Trail colour, picked from the participant's avatar
    pub fn for_participant(participant: &Participant) -> Self {
        match participant.avatar.as_str() {
            "🐻" => Self::BEAR,
            "🦅" => Self::EAGLE,
            "🦌" => Self::DEER,
            "🦊" => Self::FOX,
            _ => Self::DEFAULT,
        }
    }

    /// Marker colour: status overrides the trail colour for SOS and offline hikers
    pub fn marker_for(participant: &Participant) -> Self {
        match participant.status {
            ParticipantStatus::Sos => Self::SOS,
            ParticipantStatus::Offline => Self::OFFLINE,
            ParticipantStatus::Online => Self::for_participant(participant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hiker(avatar: &str, status: ParticipantStatus) -> Participant {
        Participant {
            id: 1,
            name: "Hiker".to_string(),
            avatar: avatar.to_string(),
            status,
        }
    }

    #[test]
    fn test_trail_color_by_avatar() {
        assert_eq!(
            TrailColor::for_participant(&hiker("🦊", ParticipantStatus::Online)),
            TrailColor::FOX
        );
        assert_eq!(
            TrailColor::for_participant(&hiker("🐢", ParticipantStatus::Online)),
            TrailColor::DEFAULT
        );
    }

    #[test]
    fn test_status_overrides_marker_color() {
        let sos = hiker("🦊", ParticipantStatus::Sos);
        assert_eq!(TrailColor::marker_for(&sos), TrailColor::SOS);
        // the trail itself keeps the avatar colour
        assert_eq!(TrailColor::for_participant(&sos), TrailColor::FOX);
        assert_eq!(
            TrailColor::marker_for(&hiker("🐻", ParticipantStatus::Offline)),
            TrailColor::OFFLINE
        );
    }
}
