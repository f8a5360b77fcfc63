use std::fmt::Debug;
use std::marker::PhantomData;

use crate::{Microseconds, Milliseconds, MonotonicClock, Resolution, Tick, TimeSource, WallClock};

/// A clock that can be marked and then asked how many ticks have passed since the mark.
///
/// A [`ScopedTimer`][crate::ScopedTimer] owns exactly one clock policy and uses it as its
/// running/stopped state: the timer is running if and only if the clock is marked.
///
/// The two standard policies are [`MilliClock`] and [`MicroClock`]. Any other clock can be
/// plugged in via [`ChronoClock`] with a custom [`TimeSource`], or by implementing this trait
/// directly.
pub trait ClockPolicy: Debug {
    /// The literal appended to tick counts in report lines.
    const UNIT: &'static str;

    /// Removes the mark. Afterwards [`is_started()`](Self::is_started) returns `false`.
    fn clear(&mut self);

    /// Whether the clock is currently marked.
    fn is_started(&self) -> bool;

    /// Marks the current time, replacing any previous mark.
    fn start(&mut self);

    /// Returns the whole ticks elapsed since the mark, or zero if the clock is not marked.
    ///
    /// The mark is left in place.
    fn elapsed_ticks(&self) -> Tick;
}

/// A clock policy composed from a [`TimeSource`] and a [`Resolution`].
///
/// # Examples
///
/// ```
/// use scoped_stopwatch::{ChronoClock, ClockPolicy, Microseconds, WallClock};
///
/// // Wall-clock time at microsecond resolution.
/// let mut clock = ChronoClock::<WallClock, Microseconds>::default();
/// assert!(!clock.is_started());
///
/// clock.start();
/// assert!(clock.is_started());
///
/// clock.clear();
/// assert_eq!(clock.elapsed_ticks(), 0);
/// ```
#[derive(Debug)]
pub struct ChronoClock<S, R>
where
    S: TimeSource,
    R: Resolution,
{
    source: S,
    mark: Option<S::Timestamp>,

    _resolution: PhantomData<R>,
}

/// Wall-clock time at millisecond resolution.
pub type MilliClock = ChronoClock<WallClock, Milliseconds>;

/// Monotonic high-resolution time at microsecond resolution.
pub type MicroClock = ChronoClock<MonotonicClock, Microseconds>;

impl<S, R> ChronoClock<S, R>
where
    S: TimeSource,
    R: Resolution,
{
    /// Creates an unmarked clock that reads time from `source`.
    #[must_use]
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            mark: None,
            _resolution: PhantomData,
        }
    }
}

impl<S, R> Default for ChronoClock<S, R>
where
    S: TimeSource + Default,
    R: Resolution,
{
    fn default() -> Self {
        Self::with_source(S::default())
    }
}

impl<S, R> ClockPolicy for ChronoClock<S, R>
where
    S: TimeSource,
    R: Resolution,
{
    const UNIT: &'static str = R::UNIT;

    fn clear(&mut self) {
        self.mark = None;
    }

    fn is_started(&self) -> bool {
        self.mark.is_some()
    }

    fn start(&mut self) {
        self.mark = Some(self.source.now());
    }

    fn elapsed_ticks(&self) -> Tick {
        self.mark
            .map_or(0, |mark| R::ticks(self.source.elapsed_since(mark)))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::time::Duration;

    use static_assertions::assert_impl_all;

    use super::*;
    use crate::time_source::FakeTimeSource;

    assert_impl_all!(MilliClock: Send, Sync, Debug, Default);
    assert_impl_all!(MicroClock: Send, Sync, Debug, Default);

    type FakeMilliClock = ChronoClock<FakeTimeSource, Milliseconds>;
    type FakeMicroClock = ChronoClock<FakeTimeSource, Microseconds>;

    #[test]
    fn created_unmarked() {
        let clock = FakeMilliClock::with_source(FakeTimeSource::new());

        assert!(!clock.is_started());
        assert_eq!(clock.elapsed_ticks(), 0);
    }

    #[test]
    fn elapsed_counts_from_mark() {
        let source = FakeTimeSource::new();
        source.advance(Duration::from_secs(7));

        let mut clock = FakeMilliClock::with_source(source.clone());
        clock.start();
        source.advance(Duration::from_millis(42));

        assert_eq!(clock.elapsed_ticks(), 42);
    }

    #[test]
    fn elapsed_is_non_destructive() {
        let source = FakeTimeSource::new();
        let mut clock = FakeMilliClock::with_source(source.clone());
        clock.start();

        source.advance(Duration::from_millis(10));
        assert_eq!(clock.elapsed_ticks(), 10);

        source.advance(Duration::from_millis(5));
        assert_eq!(clock.elapsed_ticks(), 15);
        assert!(clock.is_started());
    }

    #[test]
    fn start_overwrites_previous_mark() {
        let source = FakeTimeSource::new();
        let mut clock = FakeMilliClock::with_source(source.clone());
        clock.start();

        source.advance(Duration::from_millis(100));
        clock.start();
        source.advance(Duration::from_millis(3));

        assert_eq!(clock.elapsed_ticks(), 3);
    }

    #[test]
    fn clear_unmarks() {
        let source = FakeTimeSource::new();
        let mut clock = FakeMilliClock::with_source(source.clone());
        clock.start();
        source.advance(Duration::from_millis(100));

        clock.clear();

        assert!(!clock.is_started());
        assert_eq!(clock.elapsed_ticks(), 0);
    }

    #[test]
    fn clear_when_unmarked_is_noop() {
        let mut clock = FakeMilliClock::with_source(FakeTimeSource::new());
        clock.clear();

        assert!(!clock.is_started());
    }

    #[test]
    fn micro_resolution_truncates_sub_microsecond() {
        let source = FakeTimeSource::new();
        let mut clock = FakeMicroClock::with_source(source.clone());
        clock.start();
        source.advance(Duration::from_nanos(2_999));

        assert_eq!(clock.elapsed_ticks(), 2);
    }

    #[test]
    fn unit_follows_resolution() {
        assert_eq!(MilliClock::UNIT, "mS");
        assert_eq!(MicroClock::UNIT, "uS");
    }
}
