//! CSV general ledger ingestion.
//!
//! Each row is one observation of an account's balance. A row with an empty
//! `Asset Class` describes a liability. The optional `Update Frequency` column
//! holds the number of days after which an account's balance is overdue.

use super::dates::DateConverter;
use super::error::WorthError;
use super::portfolio::{Portfolio, Record};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

pub const LEDGER_HEADERS: [&str; 8] = [
    "Date",
    "Institution",
    "Name",
    "Owner",
    "Symbol",
    "Value",
    "Asset Class",
    "Update Frequency",
];

#[derive(Debug, Deserialize)]
struct LedgerRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Institution", default)]
    institution: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Owner", default)]
    owner: String,
    #[serde(rename = "Symbol")]
    symbol: String,
    #[serde(rename = "Value")]
    value: String,
    #[serde(rename = "Asset Class", default)]
    asset_class: Option<String>,
    #[serde(rename = "Update Frequency", default)]
    update_frequency: Option<String>,
}

fn parse_frequency(raw: Option<String>) -> Result<Option<u32>, WorthError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|e| WorthError::InvalidRecord(format!("update frequency '{raw}': {e}")))
}

impl LedgerRow {
    fn into_record(self, dates: &DateConverter) -> Result<Record, WorthError> {
        let date = dates.parse_date(&self.date)?;
        let value = Decimal::from_str(self.value.trim())
            .map_err(|e| WorthError::InvalidRecord(format!("value '{}': {e}", self.value)))?;
        let update_frequency = parse_frequency(self.update_frequency)?;
        if self.name.trim().is_empty() || self.symbol.trim().is_empty() {
            return Err(WorthError::InvalidRecord(
                "name and symbol are required".to_string(),
            ));
        }

        Ok(Record {
            timestamp: dates.date_to_epoch(date),
            name: self.name.trim().to_string(),
            symbol: self.symbol.trim().to_string(),
            value,
            asset_class: self
                .asset_class
                .map(|class| class.trim().to_string())
                .filter(|class| !class.is_empty()),
            owner: self.owner.trim().to_string(),
            institution: self.institution.trim().to_string(),
            update_frequency,
        })
    }
}

/// Parses ledger rows from any CSV source. Rows are rejected, never skipped.
pub fn read_records<R: Read>(source: R, dates: &DateConverter) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(source);

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<LedgerRow>().enumerate() {
        // Line numbers are 1-based and skip the header.
        let line = idx + 2;
        let row = row.with_context(|| format!("Failed to read ledger line {line}"))?;
        let record = row
            .into_record(dates)
            .with_context(|| format!("Invalid ledger line {line}"))?;
        records.push(record);
    }
    debug!("Parsed {} ledger records", records.len());
    Ok(records)
}

pub fn portfolio_from_records(records: Vec<Record>) -> Result<Portfolio> {
    let mut portfolio = Portfolio::new();
    for record in records {
        let name = record.name.clone();
        portfolio
            .import_data(record)
            .with_context(|| format!("Failed to import record for '{name}'"))?;
    }
    Ok(portfolio)
}

/// Builds a portfolio from the ledger file at `path`.
pub fn load_portfolio<P: AsRef<Path>>(path: P, dates: &DateConverter) -> Result<Portfolio> {
    let path = path.as_ref();
    info!("Loading ledger: {}", path.display());
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open ledger file: {}", path.display()))?;
    let records = read_records(file, dates)
        .with_context(|| format!("Failed to parse ledger file: {}", path.display()))?;
    let portfolio = portfolio_from_records(records)?;
    info!("Loaded {} accounts", portfolio.accounts().len());
    Ok(portfolio)
}
