//! Shared pedal state cell

use parking_lot::Mutex;

use crate::types::PedalState;

/// Mutex-protected cell holding the last committed pedal state.
///
/// The polling loop is the single writer; any thread may read. The lock is
/// held only for the duration of the field access, never across a device
/// read or a sleep.
#[derive(Debug, Default)]
pub struct StateCell {
    state: Mutex<PedalState>,
}

impl StateCell {
    /// New cell in the initial `Released` state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> PedalState {
        *self.state.lock()
    }

    pub fn set(&self, state: PedalState) {
        *self.state.lock() = state;
    }
}
