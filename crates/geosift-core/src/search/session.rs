//! Generation bookkeeping for superseded in-flight requests.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request generation counter.
///
/// Every filter change begins a new generation; a response is applied
/// only while its generation is still current. A stale search or facet
/// reply from an earlier filter state is thus discarded at resolution
/// time instead of racing the newest one ("last response wins" is not
/// relied upon).
#[derive(Debug, Default)]
pub struct RequestSession {
    generation: AtomicU64,
}

impl RequestSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation and return its token. Requests issued for
    /// the previous generation are superseded from this point on.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether a response carrying `generation` may still be applied.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generations_increase() {
        let session = RequestSession::new();
        let first = session.begin();
        let second = session.begin();
        assert!(second > first);
    }

    #[test]
    fn stale_generation_is_rejected() {
        let session = RequestSession::new();
        let stale = session.begin();
        let current = session.begin();
        assert!(!session.is_current(stale));
        assert!(session.is_current(current));
    }
}
