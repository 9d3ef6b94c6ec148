//! HID transport for pedal input reports

use hidapi::{HidApi, HidDevice};
use tracing::debug;

use crate::error::PedalError;
use crate::types::PedalIdentity;

/// Read buffer size for input reports. HID reports from these pedals are
/// well under this, the actual report length comes back from the read.
pub const REPORT_SIZE: usize = 64;

/// Source of raw pedal input reports.
///
/// Reads must not block: a read with no report pending returns `Ok(0)`.
/// The device handle is released when the transport is dropped.
pub trait PedalTransport: Send {
    /// Read one input report into `buf`, returning the report length,
    /// or `Ok(0)` when no report is pending.
    fn read_report(&mut self, buf: &mut [u8]) -> Result<usize, PedalError>;
}

/// HID transport for a pedal connected over USB.
pub struct HidPedalTransport {
    device: HidDevice,
}

impl HidPedalTransport {
    /// Open the pedal by VID/PID and switch the handle to non-blocking reads.
    ///
    /// Either step failing is fatal for the caller; there is no retry here.
    pub fn open(identity: PedalIdentity) -> Result<Self, PedalError> {
        let api = HidApi::new()?;

        let device = match api.open(identity.vendor_id, identity.product_id) {
            Ok(device) => device,
            Err(e) => {
                return Err(match PedalError::from(e) {
                    e @ PedalError::HidPermissionDenied(_) => e,
                    e => PedalError::DeviceNotFound(format!("{identity}: {e}")),
                });
            }
        };

        device
            .set_blocking_mode(false)
            .map_err(|e| PedalError::ConfigurationFailed(format!("{identity}: {e}")))?;

        debug!("Opened pedal {}", identity);
        Ok(Self { device })
    }
}

impl PedalTransport for HidPedalTransport {
    fn read_report(&mut self, buf: &mut [u8]) -> Result<usize, PedalError> {
        // Non-blocking: hidapi returns 0 when no report is pending
        Ok(self.device.read(buf)?)
    }
}
