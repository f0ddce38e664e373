use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the valuation core and its collaborators.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WorthError {
    #[error("invalid account: {0}")]
    InvalidAccount(String),

    #[error("invalid ledger record: {0}")]
    InvalidRecord(String),

    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid utc offset: {0}")]
    InvalidOffset(String),
}
