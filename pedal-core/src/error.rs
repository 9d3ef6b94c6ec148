//! Pedal error types

use thiserror::Error;

/// Errors from pedal device operations
#[derive(Error, Debug)]
pub enum PedalError {
    /// Device open failed: wrong IDs, unplugged, or claimed elsewhere.
    /// Fatal for the run; a missing device will not resolve itself.
    #[error("Pedal not found: {0}")]
    DeviceNotFound(String),

    /// The handle could not be switched to non-blocking reads.
    #[error("Failed to configure pedal: {0}")]
    ConfigurationFailed(String),

    /// Pressed and released reports are identical and cannot classify
    /// anything. Rejected at signature construction.
    #[error("Malformed signature: pressed and released reports are identical")]
    MalformedSignature,

    #[error("HID error: {0}")]
    HidError(String),

    #[error("HID permission denied: {0}")]
    HidPermissionDenied(String),
}

impl From<hidapi::HidError> for PedalError {
    fn from(e: hidapi::HidError) -> Self {
        let msg = e.to_string();
        if msg.contains("Permission denied") || msg.contains("EPERM") {
            PedalError::HidPermissionDenied(msg)
        } else {
            PedalError::HidError(msg)
        }
    }
}
