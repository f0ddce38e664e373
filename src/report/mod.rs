//! Report generators over portfolio state

pub mod balance_sheet;
pub mod line_graph;

pub use balance_sheet::{BalanceSheet, BalanceSheetEntry, BalanceSheetJson};
pub use line_graph::{LineGraph, TimeSeriesPoint};
