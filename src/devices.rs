// Device Registry for USB foot pedals
// Defines supported pedals and their report signatures

use pedal_core::{PedalError, PedalIdentity, PedalSignature};

/// Pedal definition with the reports it emits for each state
#[derive(Debug, Clone, Copy)]
pub struct PedalDefinition {
    pub vid: u16,
    pub pid: u16,
    pub name: &'static str,
    pub display_name: &'static str,
    pub pressed_report: &'static [u8],
    pub released_report: &'static [u8],
}

impl PedalDefinition {
    pub fn identity(&self) -> PedalIdentity {
        PedalIdentity::new(self.vid, self.pid)
    }

    pub fn signature(&self) -> Result<PedalSignature, PedalError> {
        PedalSignature::new(self.pressed_report.to_vec(), self.released_report.to_vec())
    }
}

/// All supported pedals
/// Add new pedals here after capturing their reports with `calibrate`
pub const SUPPORTED_PEDALS: &[PedalDefinition] = &[
    // QinHeng single-switch pedal (our primary test device)
    PedalDefinition {
        vid: 0x1a86,
        pid: 0xe026,
        name: "qinheng_single",
        display_name: "QinHeng Foot Pedal",
        pressed_report: &[0x01, 0x00, 0x00, 0x2c, 0x00, 0x00, 0x00, 0x00, 0x00],
        released_report: &[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    },
];

/// Pedal `run` drives when no VID/PID override is given
pub const DEFAULT_PEDAL: &PedalDefinition = &SUPPORTED_PEDALS[0];

/// Find pedal definition by VID/PID
pub fn find_pedal(vid: u16, pid: u16) -> Option<&'static PedalDefinition> {
    SUPPORTED_PEDALS
        .iter()
        .find(|d| d.vid == vid && d.pid == pid)
}

/// Check if a VID/PID combination is supported
pub fn is_supported(vid: u16, pid: u16) -> bool {
    find_pedal(vid, pid).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_qinheng() {
        let pedal = find_pedal(0x1a86, 0xe026);
        assert!(pedal.is_some());
        let pedal = pedal.unwrap();
        assert_eq!(pedal.display_name, "QinHeng Foot Pedal");
        assert_eq!(pedal.name, "qinheng_single");
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported(0x1a86, 0xe026));
        assert!(!is_supported(0x1234, 0x5678));
    }

    #[test]
    fn test_default_pedal_is_registered() {
        assert!(is_supported(DEFAULT_PEDAL.vid, DEFAULT_PEDAL.pid));
    }
}
