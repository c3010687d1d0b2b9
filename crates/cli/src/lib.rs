//! `gildedrose` reporting CLI: runs the shop simulation and prints the stock.

pub mod config;
pub mod error;
pub mod report;
pub mod sample;

pub use config::{Cli, ReportFormat};
pub use error::{CliError, CliResult};
