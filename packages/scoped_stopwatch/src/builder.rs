//! Construction-time configuration of a [`ScopedTimer`].

use crate::{Activity, ClockPolicy, ScopedTimer, Sink};

/// Configures a [`ScopedTimer`] before it is created.
///
/// Obtained from [`ScopedTimer::builder()`]. Every setting is optional:
///
/// * activity - `Stopwatch`
/// * sink - standard output
/// * clock - the default instance of the clock policy
/// * start now - `true`
///
/// # Examples
///
/// ```
/// use scoped_stopwatch::{Sink, StopwatchMicro};
///
/// let mut watch = StopwatchMicro::builder()
///     .activity("render")
///     .sink(Sink::log())
///     .start_now(false)
///     .build();
///
/// assert!(!watch.is_started());
/// watch.start();
/// assert!(watch.is_started());
/// ```
#[derive(Debug)]
#[must_use]
pub struct TimerBuilder<'s, C>
where
    C: ClockPolicy,
{
    activity: Activity<'s>,
    sink: Sink<'s>,
    clock: C,
    start_now: bool,
}

impl<'s, C> TimerBuilder<'s, C>
where
    C: ClockPolicy,
{
    pub(crate) fn new(clock: C) -> Self {
        Self {
            activity: Activity::default(),
            sink: Sink::default(),
            clock,
            start_now: true,
        }
    }

    /// Sets the activity that report lines are prefixed with.
    ///
    /// An empty or absent activity suppresses all reporting.
    pub fn activity(mut self, activity: impl Into<Activity<'s>>) -> Self {
        self.activity = activity.into();
        self
    }

    /// Sets where report lines are written.
    pub fn sink(mut self, sink: impl Into<Sink<'s>>) -> Self {
        self.sink = sink.into();
        self
    }

    /// Sets the clock instance to measure with.
    ///
    /// Any mark the clock carries is cleared when the timer is built.
    pub fn clock(mut self, clock: C) -> Self {
        self.clock = clock;
        self
    }

    /// Sets whether the timer starts as soon as it is built.
    pub fn start_now(mut self, start_now: bool) -> Self {
        self.start_now = start_now;
        self
    }

    /// Creates the timer, starting it if so configured.
    pub fn build(self) -> ScopedTimer<'s, C> {
        ScopedTimer::from_parts(self.activity, self.sink, self.clock, self.start_now)
    }
}
