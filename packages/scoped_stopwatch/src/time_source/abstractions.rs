use std::fmt::Debug;
use std::time::Duration;

/// Provides the current time and the duration elapsed since an earlier reading.
///
/// A time source never fails: if the underlying clock moved backwards relative to an earlier
/// reading, the elapsed duration is zero.
pub trait TimeSource: Debug {
    /// A reading of this time source.
    type Timestamp: Copy + Debug;

    /// Reads the current time.
    fn now(&self) -> Self::Timestamp;

    /// Returns the time that passed between `earlier` and now, saturating at zero.
    fn elapsed_since(&self, earlier: Self::Timestamp) -> Duration;
}
