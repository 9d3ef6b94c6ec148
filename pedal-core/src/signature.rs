//! Report signature matching

use crate::error::PedalError;
use crate::types::PedalState;

/// The pair of raw input reports a pedal model emits for its two states.
///
/// Reports are compared byte for byte against incoming reads, so a
/// signature captures exactly what the device sends, including the report
/// ID byte and any trailing padding the device includes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PedalSignature {
    pressed: Vec<u8>,
    released: Vec<u8>,
}

impl PedalSignature {
    /// Build a signature from the two reference reports.
    ///
    /// Rejects a pair of identical reports: such a signature could never
    /// distinguish the two states.
    pub fn new(pressed: Vec<u8>, released: Vec<u8>) -> Result<Self, PedalError> {
        if pressed == released {
            return Err(PedalError::MalformedSignature);
        }
        Ok(Self { pressed, released })
    }

    /// Classify a raw report against this signature.
    ///
    /// A report matching neither reference is unrecognized and leaves the
    /// state unchanged.
    pub fn classify(&self, report: &[u8], current: PedalState) -> PedalState {
        if report == self.pressed.as_slice() {
            PedalState::Pressed
        } else if report == self.released.as_slice() {
            PedalState::Released
        } else {
            current
        }
    }

    pub fn pressed_report(&self) -> &[u8] {
        &self.pressed
    }

    pub fn released_report(&self) -> &[u8] {
        &self.released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_signature() -> PedalSignature {
        PedalSignature::new(vec![0x01, 0x00, 0x2c], vec![0x01, 0x00, 0x00]).unwrap()
    }

    #[test]
    fn test_classify_pressed() {
        let sig = test_signature();
        assert_eq!(
            sig.classify(&[0x01, 0x00, 0x2c], PedalState::Released),
            PedalState::Pressed
        );
    }

    #[test]
    fn test_classify_released() {
        let sig = test_signature();
        assert_eq!(
            sig.classify(&[0x01, 0x00, 0x00], PedalState::Pressed),
            PedalState::Released
        );
    }

    #[test]
    fn test_classify_is_idempotent() {
        let sig = test_signature();
        assert_eq!(
            sig.classify(&[0x01, 0x00, 0x2c], PedalState::Pressed),
            PedalState::Pressed
        );
        assert_eq!(
            sig.classify(&[0x01, 0x00, 0x00], PedalState::Released),
            PedalState::Released
        );
    }

    #[test]
    fn test_unrecognized_report_keeps_state() {
        let sig = test_signature();
        assert_eq!(
            sig.classify(&[0xff, 0xff, 0xff], PedalState::Pressed),
            PedalState::Pressed
        );
        assert_eq!(
            sig.classify(&[0xff, 0xff, 0xff], PedalState::Released),
            PedalState::Released
        );
    }

    #[test]
    fn test_truncated_report_is_unrecognized() {
        let sig = test_signature();
        // Prefix of the pressed report, but not the whole report
        assert_eq!(
            sig.classify(&[0x01, 0x00], PedalState::Released),
            PedalState::Released
        );
        assert_eq!(sig.classify(&[], PedalState::Released), PedalState::Released);
    }

    #[test]
    fn test_identical_reports_rejected() {
        let result = PedalSignature::new(vec![0x01, 0x02], vec![0x01, 0x02]);
        assert!(matches!(result, Err(PedalError::MalformedSignature)));
    }
}
