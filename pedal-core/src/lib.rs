//! Polling core for USB HID foot pedals
//!
//! This crate owns the device-polling loop and state-transition logic for
//! single-button HID foot pedals: it opens the pedal by VID/PID, reads raw
//! input reports without blocking, classifies them against a per-model
//! report signature, and publishes the logical state through a shared cell
//! plus an optional change callback.
//!
//! The host wires the pieces together like this:
//!
//! ```ignore
//! let signature = PedalSignature::new(pressed_bytes, released_bytes)?;
//! let poller = PedalPoller::new(identity, signature)
//!     .on_state_change(|state| println!("Foot pedal {state}"));
//! let state = poller.state(); // readable from any thread
//! poller.run(&cancel)?;       // blocks until the token is cancelled
//! ```

pub mod calibration;
pub mod cancel;
pub mod error;
pub mod poller;
pub mod signature;
pub mod state;
pub mod transport;
pub mod types;

pub use calibration::{capture_report, drain_reports};
pub use cancel::CancelToken;
pub use error::PedalError;
pub use poller::{PedalPoller, POLL_INTERVAL};
pub use signature::PedalSignature;
pub use state::StateCell;
pub use transport::{HidPedalTransport, PedalTransport, REPORT_SIZE};
pub use types::{PedalIdentity, PedalState};
