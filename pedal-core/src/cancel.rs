//! Cooperative cancellation for the polling loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Once-set cancellation flag shared between the host and the polling loop.
///
/// The host sets it (signal handler, shutdown path); the polling loop only
/// reads it at the top of each iteration. The flag is monotonic: there is
/// no way to clear it. Cloning shares the underlying flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_clear() {
        assert!(!CancelToken::new().is_cancelled());
    }

    #[test]
    fn test_cancel_sets_flag() {
        let token = CancelToken::new();
        token.cancel();
        assert!(token.is_cancelled());
        // Idempotent
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_clones_share_the_flag() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }
}
