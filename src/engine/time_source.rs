//! Wall-clock abstraction.
//!
//! Sources read the local wall time through [`TimeSource`] so that tests and
//! embedders can pin the clock. Reading the wall clock never fails on the
//! supported platforms.

use chrono::{Local, NaiveDateTime};
use std::fmt;

/// Provider of the current local date and time.
pub trait TimeSource: Send + Sync + fmt::Debug {
    /// Current local wall time.
    fn now(&self) -> NaiveDateTime;
}

/// The host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
