//! Conversions between calendar days and epoch-second instants.
//!
//! Ledger dates carry no time of day. A date is pinned to noon in the
//! configured UTC offset, and the as-of instant for a whole day is the
//! following midnight, so a snapshot dated on a day is visible on that day.

use super::clock::Clock;
use super::error::WorthError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};
use std::str::FromStr;

pub const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_TO_NOON: i64 = SECONDS_PER_DAY / 2;
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateConverter {
    offset: FixedOffset,
}

impl DateConverter {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn parse_date(&self, s: &str) -> Result<NaiveDate, WorthError> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map_err(|e| WorthError::InvalidDate(format!("'{s}': {e}")))
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Epoch seconds of local midnight at the start of `date`.
    fn start_of_day(&self, date: NaiveDate) -> i64 {
        date.and_time(NaiveTime::MIN).and_utc().timestamp()
            - i64::from(self.offset.local_minus_utc())
    }

    /// Instant a ledger entry dated `date` is recorded at.
    pub fn date_to_epoch(&self, date: NaiveDate) -> i64 {
        self.start_of_day(date) + SECONDS_TO_NOON
    }

    /// As-of instant that covers every entry dated on or before `date`.
    pub fn end_of_day(&self, date: NaiveDate) -> i64 {
        self.start_of_day(date) + SECONDS_PER_DAY
    }

    pub fn timestamp(&self, epoch: i64) -> Option<DateTime<FixedOffset>> {
        DateTime::from_timestamp(epoch, 0).map(|utc| utc.with_timezone(&self.offset))
    }

    pub fn epoch_to_date(&self, epoch: i64) -> Option<NaiveDate> {
        self.timestamp(epoch).map(|dt| dt.date_naive())
    }

    pub fn today(&self, clock: &dyn Clock) -> Option<NaiveDate> {
        self.epoch_to_date(clock.now())
    }
}

impl Default for DateConverter {
    fn default() -> Self {
        Self::new(Utc.fix())
    }
}

impl FromStr for DateConverter {
    type Err = WorthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let offset = s
            .trim()
            .parse::<FixedOffset>()
            .map_err(|e| WorthError::InvalidOffset(format!("'{s}': {e}")))?;
        Ok(Self::new(offset))
    }
}
