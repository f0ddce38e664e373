pub mod cli;
pub mod core;
pub mod report;

use crate::core::config::AppConfig;
use crate::core::{Clock, SystemClock, ledger};
use anyhow::Result;
use tracing::{debug, info};

/// Reports available from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Balance {
        json: bool,
    },
    Alloc,
    NetWorth {
        from: Option<String>,
        to: Option<String>,
        json: bool,
    },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    run_command_with_clock(command, config_path, &SystemClock)
}

/// Runs a report with "now" resolved through `clock`.
pub fn run_command_with_clock(
    command: AppCommand,
    config_path: Option<&str>,
    clock: &dyn Clock,
) -> Result<()> {
    info!("Net worth tracker starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let dates = config.date_converter()?;
    let portfolio = ledger::load_portfolio(config.ledger_path()?, &dates)?;

    match command {
        AppCommand::Balance { json } => cli::balance::run(&portfolio, dates, clock, json),
        AppCommand::Alloc => cli::alloc::run(&portfolio, clock),
        AppCommand::NetWorth { from, to, json } => cli::networth::run(
            &portfolio,
            dates,
            clock,
            from.as_deref(),
            to.as_deref(),
            json,
        ),
    }
}
