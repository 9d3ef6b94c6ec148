// USB Foot Pedal Linux Driver - Shared Library
// Pedal registry on top of the pedal-core polling crate

pub mod devices;

pub use devices::{find_pedal, is_supported, PedalDefinition, DEFAULT_PEDAL, SUPPORTED_PEDALS};
