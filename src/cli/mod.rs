//! Terminal front end: one module per subcommand

pub mod alloc;
pub mod balance;
pub mod networth;
pub mod setup;
pub mod ui;
