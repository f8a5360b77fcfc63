use std::time::{Duration, Instant, SystemTime};

use crate::TimeSource;

/// Wall-clock time, as reported by [`SystemTime`].
///
/// Follows adjustments made to the system clock. If the clock is set backwards while a
/// measurement is in progress, that measurement reads as zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct WallClock;

impl TimeSource for WallClock {
    type Timestamp = SystemTime;

    fn now(&self) -> SystemTime {
        SystemTime::now()
    }

    fn elapsed_since(&self, earlier: SystemTime) -> Duration {
        SystemTime::now()
            .duration_since(earlier)
            .unwrap_or(Duration::ZERO)
    }
}

/// The monotonic high-resolution clock, as reported by [`Instant`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotonicClock;

impl TimeSource for MonotonicClock {
    type Timestamp = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_since(&self, earlier: Instant) -> Duration {
        Instant::now().saturating_duration_since(earlier)
    }
}
