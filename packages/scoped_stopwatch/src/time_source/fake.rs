//! Fake time source for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::TimeSource;

/// Time source whose "now" only moves when a test advances it.
///
/// Clones share the same underlying time, so a test can keep one handle and move time forward
/// while a stopwatch owns another.
#[derive(Clone, Debug, Default)]
pub(crate) struct FakeTimeSource {
    now: Arc<Mutex<Duration>>,
}

impl FakeTimeSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Moves the current time forward by `by`.
    pub(crate) fn advance(&self, by: Duration) {
        let mut now = self
            .now
            .lock()
            .expect("FakeTimeSource state lock should not be poisoned");
        *now = now.saturating_add(by);
    }

    /// Moves the current time to an arbitrary point, including into the past.
    pub(crate) fn set(&self, to: Duration) {
        *self
            .now
            .lock()
            .expect("FakeTimeSource state lock should not be poisoned") = to;
    }
}

impl TimeSource for FakeTimeSource {
    type Timestamp = Duration;

    fn now(&self) -> Duration {
        *self
            .now
            .lock()
            .expect("FakeTimeSource state lock should not be poisoned")
    }

    fn elapsed_since(&self, earlier: Duration) -> Duration {
        self.now().saturating_sub(earlier)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(FakeTimeSource::new().now(), Duration::ZERO);
    }

    #[test]
    fn shared_state_between_clones() {
        let source1 = FakeTimeSource::new();
        let source2 = source1.clone();

        source1.advance(Duration::from_millis(100));
        assert_eq!(source2.now(), Duration::from_millis(100));
    }

    #[test]
    fn going_backwards_reads_as_zero_elapsed() {
        let source = FakeTimeSource::new();
        source.set(Duration::from_secs(10));
        let mark = source.now();

        source.set(Duration::from_secs(5));
        assert_eq!(source.elapsed_since(mark), Duration::ZERO);
    }
}
