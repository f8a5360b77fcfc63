#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A scoped stopwatch that measures how long a region of code takes and reports it as
//! human-readable lines.
//!
//! This package is meant to be dropped into a call site to get timing telemetry without a
//! tracing or metrics pipeline. A [`ScopedTimer`] starts when created, reports intermediate
//! checkpoints on request and reports the total when it stops or goes out of scope:
//!
//! ```text
//! parse: start
//! parse: header done at 3mS
//! parse: stop 63mS
//! ```
//!
//! The core types are:
//!
//! - [`ScopedTimer`] - the stopwatch itself, generic over a [`ClockPolicy`]
//! - [`Stopwatch`] and [`StopwatchMicro`] - stopwatches with millisecond and microsecond clocks
//! - [`Activity`] - the label lines are prefixed with; an empty label suppresses all output
//! - [`Sink`] - where lines go: standard output, a borrowed writer, the log or nowhere
//!
//! # Usage
//!
//! ```
//! use scoped_stopwatch::Stopwatch;
//!
//! fn parse(input: &str) -> usize {
//!     let mut watch = Stopwatch::with_activity("parse", true); // "parse: start"
//!
//!     let words = input.split_whitespace().count();
//!     watch.show_as("tokenized"); // "parse: tokenized at 0mS"
//!
//!     words
//! } // "parse: stop 0mS"
//!
//! assert_eq!(parse("a b c"), 3);
//! ```
//!
//! # Collecting values instead of printing
//!
//! When writing lines would itself distort the measurement, suppress the output and log the
//! returned tick counts later:
//!
//! ```
//! use scoped_stopwatch::{Activity, StopwatchMicro};
//!
//! let mut watch = StopwatchMicro::with_activity(Activity::suppressed(), true);
//!
//! let first = watch.show();
//! let total = watch.stop();
//!
//! assert!(first <= total);
//! ```
//!
//! # Thread safety
//!
//! A stopwatch is meant to be owned by the thread that created it and is neither `Send` nor
//! `Sync`. Several stopwatches may share a sink such as standard output; lines from different
//! threads are then not synchronized with each other.

mod activity;
mod builder;
mod clock;
mod resolution;
mod sink;
mod time_source;
mod timer;

pub use activity::*;
pub use builder::*;
pub use clock::*;
pub use resolution::*;
pub use sink::*;
pub use time_source::{MonotonicClock, TimeSource, WallClock};
pub use timer::*;
