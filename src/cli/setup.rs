use crate::core::config::AppConfig;
use crate::core::ledger::LEDGER_HEADERS;
use anyhow::{Context, Result};
use std::path::Path;

// Include the example config as a string literal in the binary
const DEFAULT_CONFIG: &str = include_str!("../../docs/example_config.yaml");

/// Creates a default configuration file and an empty ledger at the default
/// locations
pub fn setup() -> Result<()> {
    let path = AppConfig::default_config_path()?;
    setup_at_path(&path)?;

    let config = AppConfig::load_from_path(&path)?;
    let ledger_path = config.ledger_path()?;
    if !ledger_path.exists() {
        create_ledger_at_path(&ledger_path)?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

/// Creates a default configuration file with example content at the specified path
pub fn setup_at_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }
    ensure_parent(path)?;

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}

/// Writes a ledger containing only the header row.
pub fn create_ledger_at_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        anyhow::bail!("Ledger already exists at {}", path.display());
    }
    ensure_parent(path)?;

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create ledger at {}", path.display()))?;
    writer
        .write_record(LEDGER_HEADERS)
        .with_context(|| format!("Failed to write ledger headers to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write ledger headers to {}", path.display()))?;

    tracing::info!("Created empty ledger at {}", path.display());
    Ok(())
}
