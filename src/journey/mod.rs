// Journey data: model types, the read-only store and the journeys file loader

pub mod builtin;
pub mod loader;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use loader::load_journeys_jsonl;
pub use store::JourneyStore;
pub use types::{
    Checkpoint, ConnectedDevice, ConnectionType, DeviceStatus, EnvironmentalSample, GeoPosition,
    Journey, Participant, ParticipantStatus, SignalStrength,
};
