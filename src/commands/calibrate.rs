//! Calibration command handler.
//!
//! Captures the raw input reports a pedal emits when pressed and released,
//! so it can be added to the registry in `devices.rs`.

use pedal_core::{capture_report, drain_reports, HidPedalTransport, PedalIdentity, PedalSignature};

use super::{parse_hex_u16, CommandResult};

/// Capture the pressed and released reports of a pedal by VID/PID.
pub fn calibrate(vid: &str, pid: &str) -> CommandResult {
    let vid = parse_hex_u16("vendor ID", vid)?;
    let pid = parse_hex_u16("product ID", pid)?;
    let identity = PedalIdentity::new(vid, pid);

    let mut transport = HidPedalTransport::open(identity)?;
    // Anything the device queued before we prompted is not the report we
    // are asking for
    drain_reports(&mut transport)?;

    println!("Calibrating pedal {identity}");
    println!();
    println!("Step 1: Press and HOLD the foot pedal...");
    let pressed = capture_report(&mut transport)?;
    println!("        Pedal down produces: {pressed:02x?}");

    println!();
    println!("Step 2: RELEASE the foot pedal...");
    let released = capture_report(&mut transport)?;
    println!("        Pedal up produces:   {released:02x?}");

    // Identical captures cannot tell the two states apart
    PedalSignature::new(pressed, released)?;

    println!();
    println!("Add these reports to SUPPORTED_PEDALS in src/devices.rs to drive");
    println!("this pedal with `pedal_driver run`.");
    Ok(())
}
