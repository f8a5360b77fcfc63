//! Conversion of measured durations into whole ticks of a fixed unit.

use std::fmt::Debug;
use std::time::Duration;

/// The integer tick count reported by a stopwatch, expressed in the unit of its clock policy.
pub type Tick = u64;

/// A fixed unit that elapsed durations are truncated to before being reported.
///
/// Implementations are zero-sized markers that select the unit at compile time.
pub trait Resolution: Debug + Send + Sync + 'static {
    /// The literal appended to tick counts in report lines, e.g. `mS`.
    const UNIT: &'static str;

    /// Converts a duration into whole ticks, truncating any remainder.
    ///
    /// Durations too long to fit into a [`Tick`] saturate at [`Tick::MAX`].
    fn ticks(elapsed: Duration) -> Tick;
}

/// Millisecond resolution, reported with the `mS` suffix.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Milliseconds;

impl Resolution for Milliseconds {
    const UNIT: &'static str = "mS";

    fn ticks(elapsed: Duration) -> Tick {
        Tick::try_from(elapsed.as_millis()).unwrap_or(Tick::MAX)
    }
}

/// Microsecond resolution, reported with the `uS` suffix.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Microseconds;

impl Resolution for Microseconds {
    const UNIT: &'static str = "uS";

    fn ticks(elapsed: Duration) -> Tick {
        Tick::try_from(elapsed.as_micros()).unwrap_or(Tick::MAX)
    }
}
