//! Valuation engine and its collaborators

pub mod account;
pub mod allocation;
pub mod clock;
pub mod config;
pub mod dates;
pub mod error;
pub mod ledger;
pub mod log;
pub mod portfolio;
pub mod snapshot;

// Re-export main types for cleaner imports
pub use account::{Account, AccountConfig, AccountKind};
pub use allocation::AssetClass;
pub use clock::{Clock, FixedClock, SystemClock};
pub use dates::DateConverter;
pub use error::WorthError;
pub use portfolio::{Portfolio, Record};
pub use snapshot::{Snapshot, SnapshotHistory};
