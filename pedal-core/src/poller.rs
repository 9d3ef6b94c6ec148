//! Pedal polling loop

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cancel::CancelToken;
use crate::error::PedalError;
use crate::signature::PedalSignature;
use crate::state::StateCell;
use crate::transport::{HidPedalTransport, PedalTransport, REPORT_SIZE};
use crate::types::{PedalIdentity, PedalState};

/// Delay between polls. The pedal only sends a handful of reports around
/// each press/release, so 30ms keeps latency low without spinning.
pub const POLL_INTERVAL: Duration = Duration::from_millis(30);

/// Callback invoked on every state transition, before the new state is
/// committed to the shared cell.
type StateCallback = Box<dyn FnMut(PedalState) + Send>;

/// Polls a pedal for input reports and tracks its press state.
///
/// The poller owns the device handle for the duration of [`run`]: the
/// handle is opened on entry and released when the loop returns, on both
/// the clean and the error path. `run` consumes the poller, so each
/// instance drives exactly one polling session.
///
/// [`run`]: PedalPoller::run
pub struct PedalPoller {
    identity: PedalIdentity,
    signature: PedalSignature,
    state: Arc<StateCell>,
    on_change: Option<StateCallback>,
    poll_interval: Duration,
}

impl PedalPoller {
    pub fn new(identity: PedalIdentity, signature: PedalSignature) -> Self {
        Self {
            identity,
            signature,
            state: Arc::new(StateCell::new()),
            on_change: None,
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Register the transition callback.
    ///
    /// Called synchronously from the polling loop with the new state, once
    /// per transition. The shared cell still holds the previous state while
    /// the callback runs.
    pub fn on_state_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(PedalState) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Override the poll interval (default [`POLL_INTERVAL`]).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Handle to the shared state cell, for readers outside the loop.
    pub fn state(&self) -> Arc<StateCell> {
        Arc::clone(&self.state)
    }

    /// Open the pedal and poll it until `cancel` is set.
    ///
    /// Returns an error only from the open phase. Read errors inside the
    /// loop are logged and the loop keeps polling.
    pub fn run(self, cancel: &CancelToken) -> Result<(), PedalError> {
        let identity = self.identity;
        self.run_with(move || HidPedalTransport::open(identity), cancel)
    }

    /// Poll a transport produced by `open_transport`. This is `run` with
    /// the device layer pluggable for tests.
    pub fn run_with<T, F>(mut self, open_transport: F, cancel: &CancelToken) -> Result<(), PedalError>
    where
        T: PedalTransport,
        F: FnOnce() -> Result<T, PedalError>,
    {
        let mut transport = open_transport()?;
        debug!("Pedal poller started for {}", self.identity);

        let mut buf = [0u8; REPORT_SIZE];
        while !cancel.is_cancelled() {
            match transport.read_report(&mut buf) {
                Ok(len) if len > 0 => self.handle_report(&buf[..len]),
                Ok(_) => {
                    // No report pending
                }
                Err(e) => {
                    warn!("Pedal read failed: {}", e);
                }
            }
            std::thread::sleep(self.poll_interval);
        }

        debug!("Pedal poller exiting");
        Ok(())
    }

    fn handle_report(&mut self, report: &[u8]) {
        let current = self.state.get();
        let classified = self.signature.classify(report, current);
        if classified == current {
            return;
        }

        debug!("Pedal transition: {} -> {}", current, classified);
        // Notify first, then commit. Readers of the cell see the old state
        // until the callback has run.
        if let Some(callback) = self.on_change.as_mut() {
            callback(classified);
        }
        self.state.set(classified);
    }
}
