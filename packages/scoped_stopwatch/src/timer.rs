use crate::{Activity, ClockPolicy, MicroClock, MilliClock, Sink, Tick, TimerBuilder};

const SHOW_EVENT: &str = "show";
const START_EVENT: &str = "start";
const STOP_EVENT: &str = "stop";

/// Measures and reports the elapsed time of a code region.
///
/// The timer is either running (its clock is marked) or stopped. While running, it can be asked
/// to [`show()`](Self::show) the elapsed time without stopping, to [`stop()`](Self::stop), or to
/// [`start()`](Self::start) again, which stops the current interval and immediately begins a new
/// one. Each of these records the measured value as the lap, available via [`lap()`](Self::lap).
///
/// Every operation writes a line to the timer's [`Sink`] unless the timer's [`Activity`] is
/// suppressed or the event name of that call is absent or empty. Measurement happens either way.
///
/// If the timer is still running when it is dropped, it stops itself with the `stop` event. This
/// also happens when the owning scope is left by an early return or a panic.
///
/// Use the [`Stopwatch`] (milliseconds, wall clock) or [`StopwatchMicro`] (microseconds,
/// monotonic clock) aliases unless you need a custom [`ClockPolicy`].
///
/// # Examples
///
/// ```
/// use scoped_stopwatch::Stopwatch;
///
/// let mut report = Vec::new();
///
/// {
///     let mut watch = Stopwatch::with_sink(&mut report, "Work", true);
///     // ... first part of the work ...
///     watch.show_as("checkpoint");
///     // ... second part of the work ...
/// } // Prints "Work: stop <N>mS".
///
/// let report = String::from_utf8(report).unwrap();
/// let lines: Vec<_> = report.lines().collect();
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[0], "Work: start");
/// assert!(lines[1].starts_with("Work: checkpoint at "));
/// assert!(lines[2].starts_with("Work: stop "));
/// ```
///
/// Measuring without printing and reporting the values later:
///
/// ```
/// use scoped_stopwatch::{Activity, Stopwatch};
///
/// let mut watch = Stopwatch::with_activity(Activity::suppressed(), true);
/// // ... work ...
/// let elapsed_ms = watch.stop();
///
/// assert_eq!(watch.lap(), elapsed_ms);
/// assert!(!watch.is_started());
/// ```
#[derive(Debug)]
#[must_use = "a stopwatch measures the time until it is stopped or dropped"]
pub struct ScopedTimer<'s, C>
where
    C: ClockPolicy,
{
    activity: Activity<'s>,
    lap: Tick,
    sink: Sink<'s>,
    clock: C,
}

/// A stopwatch measuring wall-clock time in milliseconds.
pub type Stopwatch<'s> = ScopedTimer<'s, MilliClock>;

/// A stopwatch measuring high-resolution monotonic time in microseconds.
pub type StopwatchMicro<'s> = ScopedTimer<'s, MicroClock>;

impl<'s, C> ScopedTimer<'s, C>
where
    C: ClockPolicy + Default,
{
    /// Creates a stopwatch for the default `Stopwatch` activity, reporting to standard output.
    ///
    /// If `start_now` is `true`, the stopwatch starts immediately and reports `Stopwatch: start`.
    pub fn new(start_now: bool) -> Self {
        Self::builder().start_now(start_now).build()
    }

    /// Creates a stopwatch for the given activity, reporting to standard output.
    ///
    /// An empty or absent activity suppresses all reporting for this stopwatch.
    pub fn with_activity(activity: impl Into<Activity<'s>>, start_now: bool) -> Self {
        Self::builder()
            .activity(activity)
            .start_now(start_now)
            .build()
    }

    /// Creates a stopwatch for the given activity, reporting to the given sink.
    ///
    /// An empty or absent activity suppresses all reporting for this stopwatch.
    pub fn with_sink(
        sink: impl Into<Sink<'s>>,
        activity: impl Into<Activity<'s>>,
        start_now: bool,
    ) -> Self {
        Self::builder()
            .sink(sink)
            .activity(activity)
            .start_now(start_now)
            .build()
    }

    /// Starts configuring a stopwatch with every setting at its default.
    pub fn builder() -> TimerBuilder<'s, C> {
        TimerBuilder::new(C::default())
    }
}

impl<'s, C> ScopedTimer<'s, C>
where
    C: ClockPolicy,
{
    pub(crate) fn from_parts(
        activity: Activity<'s>,
        sink: Sink<'s>,
        clock: C,
        start_now: bool,
    ) -> Self {
        let mut timer = Self {
            activity,
            lap: 0,
            sink,
            clock,
        };

        // The clock may have arrived already marked; a fresh timer always starts from stopped.
        timer.clock.clear();

        if start_now {
            timer.start();
        }

        timer
    }

    /// Whether the stopwatch is running.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.clock.is_started()
    }

    /// The most recently measured value, or zero if nothing was measured yet.
    ///
    /// This is updated by [`show()`](Self::show), [`stop()`](Self::stop) and by
    /// [`start()`](Self::start) on a running stopwatch.
    #[must_use]
    pub fn lap(&self) -> Tick {
        self.lap
    }

    /// The activity this stopwatch reports for.
    #[must_use]
    pub fn activity(&self) -> &Activity<'s> {
        &self.activity
    }

    /// Records the elapsed time as the lap without stopping, reporting it as the `show` event.
    ///
    /// See [`show_as()`](Self::show_as).
    pub fn show(&mut self) -> Tick {
        self.show_as(SHOW_EVENT)
    }

    /// Records the elapsed time as the lap without stopping.
    ///
    /// If running, reports `<activity>: <event> at <lap><unit>`. If stopped, nothing is
    /// measured, the lap keeps its previous value and `<activity>: not started` is reported,
    /// regardless of `event`.
    ///
    /// Returns the lap.
    pub fn show_as<'e>(&mut self, event: impl Into<Option<&'e str>>) -> Tick {
        if self.is_started() {
            self.lap = self.clock.elapsed_ticks();

            if let (Some(activity), Some(event)) =
                (self.activity.label(), reported(event.into()))
            {
                self.sink.write_line(format_args!(
                    "{activity}: {event} at {lap}{unit}",
                    lap = self.lap,
                    unit = C::UNIT
                ));
            }
        } else if let Some(activity) = self.activity.label() {
            self.sink.write_line(format_args!("{activity}: not started"));
        }

        self.lap
    }

    /// Starts the stopwatch, reporting it as the `start` event.
    ///
    /// See [`start_as()`](Self::start_as).
    pub fn start(&mut self) -> Tick {
        self.start_as(START_EVENT)
    }

    /// Starts the stopwatch, or restarts it if it is already running.
    ///
    /// If stopped, reports `<activity>: <event>` and begins a new interval; the lap keeps its
    /// previous value. If running, this is a stop followed by a start: the current interval is
    /// recorded as the lap and reported as `<activity>: <event> <lap><unit>`, then a new
    /// interval begins immediately.
    ///
    /// Returns the lap.
    pub fn start_as<'e>(&mut self, event: impl Into<Option<&'e str>>) -> Tick {
        let event = event.into();

        if self.is_started() {
            self.stop_as(event);
        } else if let (Some(activity), Some(event)) =
            (self.activity.label(), reported(event))
        {
            self.sink.write_line(format_args!("{activity}: {event}"));
        }

        self.clock.start();

        self.lap
    }

    /// Stops the stopwatch, reporting it as the `stop` event.
    ///
    /// See [`stop_as()`](Self::stop_as).
    pub fn stop(&mut self) -> Tick {
        self.stop_as(STOP_EVENT)
    }

    /// Stops the stopwatch.
    ///
    /// If running, records the elapsed time as the lap and reports
    /// `<activity>: <event> <lap><unit>`. Stopping a stopped stopwatch does nothing and reports
    /// nothing.
    ///
    /// Returns the lap.
    pub fn stop_as<'e>(&mut self, event: impl Into<Option<&'e str>>) -> Tick {
        if self.is_started() {
            self.lap = self.clock.elapsed_ticks();

            if let (Some(activity), Some(event)) =
                (self.activity.label(), reported(event.into()))
            {
                self.sink.write_line(format_args!(
                    "{activity}: {event} {lap}{unit}",
                    lap = self.lap,
                    unit = C::UNIT
                ));
            }
        }

        self.clock.clear();

        self.lap
    }

    /// Stops the stopwatch if it is running and returns the final lap.
    ///
    /// Equivalent to [`stop()`](Self::stop) followed by dropping the stopwatch, except that the
    /// lap is handed back to the caller.
    #[must_use]
    pub fn finish(mut self) -> Tick {
        self.stop()
    }
}

/// The event name to report, or `None` if the event is unnamed and its line is suppressed.
fn reported(event: Option<&str>) -> Option<&str> {
    event.filter(|event| !event.is_empty())
}

impl<C> Drop for ScopedTimer<'_, C>
where
    C: ClockPolicy,
{
    fn drop(&mut self) {
        if self.is_started() {
            self.stop();
        }
    }
}
