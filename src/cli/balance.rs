use super::ui;
use crate::core::{Clock, DateConverter, Portfolio};
use crate::report::BalanceSheet;
use crate::report::balance_sheet::{SEPARATOR, format_amount};
use anyhow::{Context, Result};
use comfy_table::{Cell, Color, Table};

/// Staleness of each account, in balance sheet order.
fn stale_accounts(portfolio: &Portfolio, now: i64) -> Vec<bool> {
    portfolio
        .assets()
        .chain(portfolio.liabilities())
        .map(|account| account.is_stale(now))
        .collect()
}

/// Builds the balance sheet table. Rows of accounts overdue for an update are
/// dimmed.
fn balance_table(portfolio: &Portfolio, dates: DateConverter, now: i64) -> Table {
    let sheet = BalanceSheet::new(portfolio, dates);
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Last Updated"),
        ui::header_cell("Institution"),
        ui::header_cell("Account"),
        ui::header_cell("Investment"),
        ui::header_cell("Owner"),
        ui::header_cell("Value"),
    ]);

    let mut stale = stale_accounts(portfolio, now).into_iter();

    let rows = sheet.create(now);
    let body_rows = rows.len().saturating_sub(1);
    for row in rows.into_iter().take(body_rows) {
        let is_separator = row.iter().all(|field| field == SEPARATOR);
        let is_stale = !is_separator && stale.next().unwrap_or(false);
        table.add_row(row.into_iter().map(|field| {
            let cell = Cell::new(field);
            if is_stale { cell.fg(Color::DarkGrey) } else { cell }
        }));
    }
    table
}

pub fn display_as_table(portfolio: &Portfolio, dates: DateConverter, now: i64) -> String {
    let table = balance_table(portfolio, dates, now);
    let total = portfolio.total_value(now);
    format!(
        "{}\n\n{}\n\n{}: {}",
        ui::style_text("Balance Sheet", ui::StyleType::Title),
        table,
        ui::style_text("Total", ui::StyleType::TotalLabel),
        ui::style_text(&format_amount(total), ui::StyleType::TotalValue),
    )
}

pub fn display_as_json(portfolio: &Portfolio, dates: DateConverter, now: i64) -> Result<String> {
    let sheet = BalanceSheet::new(portfolio, dates);
    serde_json::to_string_pretty(&sheet.json(now)).context("Failed to serialize balance sheet")
}

pub fn run(portfolio: &Portfolio, dates: DateConverter, clock: &dyn Clock, json: bool) -> Result<()> {
    let now = clock.now();
    if json {
        println!("{}", display_as_json(portfolio, dates, now)?);
    } else {
        println!("{}", display_as_table(portfolio, dates, now));
    }
    Ok(())
}
