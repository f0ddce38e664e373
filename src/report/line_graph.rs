//! Day-by-day net worth series for plotting.
use crate::core::{DateConverter, Portfolio, WorthError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeriesPoint {
    /// Calendar day, `YYYY-MM-DD`.
    pub x: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub y: Decimal,
}

pub struct LineGraph<'a> {
    portfolio: &'a Portfolio,
    dates: DateConverter,
}

impl<'a> LineGraph<'a> {
    pub fn new(portfolio: &'a Portfolio, dates: DateConverter) -> Self {
        Self { portfolio, dates }
    }

    /// Net worth at the end of every day from `start` to `end` inclusive.
    pub fn net_worth_vs_time(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeSeriesPoint>, WorthError> {
        if start > end {
            return Err(WorthError::InvalidDateRange { start, end });
        }
        debug!(%start, %end, "Computing net worth series");

        let points = start
            .iter_days()
            .take_while(|day| *day <= end)
            .map(|day| TimeSeriesPoint {
                x: DateConverter::format_date(day),
                y: self.portfolio.total_value(self.dates.end_of_day(day)),
            })
            .collect();
        Ok(points)
    }
}
