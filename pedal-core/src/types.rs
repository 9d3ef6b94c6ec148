//! Common pedal types

use std::fmt;

/// USB identity of a pedal device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PedalIdentity {
    /// USB Vendor ID
    pub vendor_id: u16,
    /// USB Product ID
    pub product_id: u16,
}

impl PedalIdentity {
    pub fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }
}

impl fmt::Display for PedalIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:04x}", self.vendor_id, self.product_id)
    }
}

/// Logical pedal state
///
/// There is no intermediate or unknown value: an unrecognized report
/// leaves the state as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PedalState {
    /// Pedal at rest. This is the initial state before any report is read.
    #[default]
    Released,
    /// Pedal held down
    Pressed,
}

impl fmt::Display for PedalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PedalState::Released => write!(f, "released"),
            PedalState::Pressed => write!(f, "pressed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_display_is_lsusb_style() {
        let identity = PedalIdentity::new(0x1a86, 0xe026);
        assert_eq!(identity.to_string(), "1a86:e026");
    }

    #[test]
    fn test_default_state_is_released() {
        assert_eq!(PedalState::default(), PedalState::Released);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(PedalState::Pressed.to_string(), "pressed");
        assert_eq!(PedalState::Released.to_string(), "released");
    }
}
