use super::ui;
use crate::core::{Clock, DateConverter, Portfolio};
use crate::report::{LineGraph, TimeSeriesPoint};
use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use comfy_table::Cell;

/// Days covered when no start date is given.
pub const DEFAULT_SPAN_DAYS: u64 = 365;

/// Resolves the optional `--from`/`--to` arguments against today's date.
pub fn resolve_range(
    dates: &DateConverter,
    clock: &dyn Clock,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<(NaiveDate, NaiveDate)> {
    let end = match to {
        Some(s) => dates.parse_date(s)?,
        None => dates
            .today(clock)
            .context("Current time is outside the supported date range")?,
    };
    let start = match from {
        Some(s) => dates.parse_date(s)?,
        None => end
            .checked_sub_days(Days::new(DEFAULT_SPAN_DAYS))
            .context("Start date is outside the supported date range")?,
    };
    Ok((start, end))
}

pub fn display_as_table(points: &[TimeSeriesPoint]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Date"), ui::header_cell("Net Worth")]);
    for point in points {
        table.add_row(vec![Cell::new(&point.x), ui::amount_cell(point.y)]);
    }
    format!(
        "{}\n\n{}",
        ui::style_text("Net Worth vs. Time", ui::StyleType::Title),
        table
    )
}

pub fn run(
    portfolio: &Portfolio,
    dates: DateConverter,
    clock: &dyn Clock,
    from: Option<&str>,
    to: Option<&str>,
    json: bool,
) -> Result<()> {
    let (start, end) = resolve_range(&dates, clock, from, to)?;
    let points = LineGraph::new(portfolio, dates).net_worth_vs_time(start, end)?;

    if json {
        let output =
            serde_json::to_string_pretty(&points).context("Failed to serialize net worth series")?;
        println!("{output}");
    } else {
        println!("{}", display_as_table(&points));
    }
    Ok(())
}
