//! Cooperative cancellation: the integrator accepts an optional token
//! checked once per grid step. When tripped, it returns the partial series
//! and the last valid state rather than erroring.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cheaply `Clone`-able, `Send + Sync` flag a caller can trip from another
/// thread (e.g. a UI cancel button) while an integration runs on a
/// background worker.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_uncancelled_and_trips_across_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());
        clone.cancel();
        assert!(token.is_cancelled());
    }
}
