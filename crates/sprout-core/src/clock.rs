//! Source of "today" for status calculations and new records.
//!
//! Every operation that stamps or compares a date asks the tracker's clock
//! instead of reading the system time directly, so tests and the CLI's
//! `--today` flag can pin the calendar.

use std::fmt;

use jiff::{civil::Date, Zoned};

/// Provides the current calendar date.
pub trait Clock: Send + Sync + fmt::Debug {
    /// The date considered to be "today".
    fn today(&self) -> Date;
}

/// Reads the date from the system clock in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Zoned::now().date()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
