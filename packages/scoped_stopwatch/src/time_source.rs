//! Sources of "now" that a clock policy can mark and measure against.
//!
//! The standard sources are the wall clock and the monotonic high-resolution clock. Callers
//! may supply their own by implementing [`TimeSource`].

mod abstractions;
#[cfg(test)]
mod fake;
mod real;

pub use abstractions::*;
#[cfg(test)]
pub(crate) use fake::FakeTimeSource;
pub use real::*;
