//! Time source for "as of now" queries.
//!
//! The valuation core only ever takes explicit epoch-second instants. Reports
//! and the CLI resolve "now" through a [`Clock`] so tests can pin it.

use chrono::Utc;

pub trait Clock {
    /// Current instant in epoch seconds.
    fn now(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}
