use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use networth::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for networth::AppCommand {
    fn from(cmd: Commands) -> networth::AppCommand {
        match cmd {
            Commands::Balance { json } => networth::AppCommand::Balance { json },
            Commands::Alloc => networth::AppCommand::Alloc,
            Commands::Networth { from, to, json } => {
                networth::AppCommand::NetWorth { from, to, json }
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration and an empty ledger
    Setup,
    /// Display the balance sheet of assets and liabilities
    Balance {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Display allocation by symbol and asset class
    Alloc,
    /// Display net worth for every day in a date range
    Networth {
        /// First day of the series (YYYY-MM-DD), defaults to a year before --to
        #[arg(long)]
        from: Option<String>,
        /// Last day of the series (YYYY-MM-DD), defaults to today
        #[arg(long)]
        to: Option<String>,
        /// Print JSON points for plotting instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => networth::cli::setup::setup(),
        Some(cmd) => networth::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
