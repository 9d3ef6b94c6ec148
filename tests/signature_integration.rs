//! Integration tests for the pedal registry.
//!
//! `run` builds its poller straight from the registry tables, so every
//! entry must produce a valid signature that classifies its own reports.

use pedal_core::PedalState;
use pedal_driver::devices::{find_pedal, DEFAULT_PEDAL, SUPPORTED_PEDALS};

// ── Registry entries are self-consistent ──

#[test]
fn every_pedal_builds_a_valid_signature() {
    for pedal in SUPPORTED_PEDALS {
        let signature = pedal
            .signature()
            .unwrap_or_else(|e| panic!("{}: {e}", pedal.name));

        assert_eq!(
            signature.classify(pedal.pressed_report, PedalState::Released),
            PedalState::Pressed,
            "{}: pressed report must classify as Pressed",
            pedal.name
        );
        assert_eq!(
            signature.classify(pedal.released_report, PedalState::Pressed),
            PedalState::Released,
            "{}: released report must classify as Released",
            pedal.name
        );
        assert_eq!(
            signature.classify(&[0xff, 0xff, 0xff], PedalState::Pressed),
            PedalState::Pressed,
            "{}: a foreign report must not flip the state",
            pedal.name
        );
    }
}

#[test]
fn every_pedal_resolves_by_identity() {
    for pedal in SUPPORTED_PEDALS {
        let identity = pedal.identity();
        let found = find_pedal(identity.vendor_id, identity.product_id)
            .unwrap_or_else(|| panic!("{} not found by its own identity", pedal.name));
        assert_eq!(found.name, pedal.name);
    }
}

// ── QinHeng pedal byte layout ──

#[test]
fn qinheng_reports_match_captures() {
    assert_eq!(DEFAULT_PEDAL.vid, 0x1a86);
    assert_eq!(DEFAULT_PEDAL.pid, 0xe026);
    // Byte 3 carries the configured key code while pressed, all other
    // bytes are identical between the two reports
    assert_eq!(
        DEFAULT_PEDAL.pressed_report,
        &[0x01, 0x00, 0x00, 0x2c, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
    assert_eq!(
        DEFAULT_PEDAL.released_report,
        &[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
}
