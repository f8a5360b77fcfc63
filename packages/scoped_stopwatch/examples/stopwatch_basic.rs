//! Demonstrates the reporting behavior of a stopwatch.
//!
//! Run with: `cargo run --example stopwatch_basic`.

use std::thread;
use std::time::Duration;

use scoped_stopwatch::{Activity, Stopwatch, StopwatchMicro};

fn load_config() {
    // Prints "load_config: start" now and "load_config: stop <N>mS" on return.
    let _watch = Stopwatch::with_activity("load_config", true);
    thread::sleep(Duration::from_millis(15));
}

fn main() {
    load_config();

    let mut pipeline = StopwatchMicro::with_activity("pipeline", true);
    thread::sleep(Duration::from_millis(5));
    pipeline.show_as("fetched");
    thread::sleep(Duration::from_millis(5));
    pipeline.start_as("decoded");
    thread::sleep(Duration::from_millis(5));
    pipeline.stop_as("stored");

    // Calling show on a stopped stopwatch reports that it is not running.
    pipeline.show();

    // Measure several steps silently and report them together afterwards.
    let mut quiet = Stopwatch::with_activity(Activity::suppressed(), true);
    let mut laps = Vec::new();
    for _ in 0..3 {
        thread::sleep(Duration::from_millis(2));
        laps.push(quiet.start());
    }
    quiet.stop();

    println!("silent laps (mS): {laps:?}");
}
