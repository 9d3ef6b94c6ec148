//! Report capture for pedal calibration

use tracing::debug;

use crate::error::PedalError;
use crate::poller::POLL_INTERVAL;
use crate::transport::{PedalTransport, REPORT_SIZE};

/// Discard any reports the device already queued.
///
/// Run this once after opening, before prompting the user, so a stale
/// report from before calibration started cannot be mistaken for the
/// prompted one.
pub fn drain_reports<T: PedalTransport>(transport: &mut T) -> Result<(), PedalError> {
    let mut buf = [0u8; REPORT_SIZE];
    loop {
        let len = transport.read_report(&mut buf)?;
        if len == 0 {
            return Ok(());
        }
        debug!("Discarding stale report: {:02x?}", &buf[..len]);
    }
}

/// Block until the device sends a report, and return it truncated to its
/// actual length.
pub fn capture_report<T: PedalTransport>(transport: &mut T) -> Result<Vec<u8>, PedalError> {
    let mut buf = [0u8; REPORT_SIZE];
    loop {
        let len = transport.read_report(&mut buf)?;
        if len > 0 {
            return Ok(buf[..len].to_vec());
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}
