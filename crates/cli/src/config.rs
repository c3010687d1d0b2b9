use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use gildedrose_inventory::Item;
use gildedrose_observability::LogFormat;

use crate::error::{CliError, CliResult};
use crate::sample::sample_inventory;

#[derive(Parser, Debug)]
#[command(
    name = "gildedrose",
    about = "Simulate the nightly quality update of the shop's inventory",
    version
)]
pub struct Cli {
    /// Number of days to simulate
    #[arg(short, long, env = "GILDEDROSE_DAYS", default_value_t = 2)]
    pub days: u32,

    /// JSON file with an array of {"name", "days", "quality"} records (defaults to a sample stock)
    #[arg(short, long, env = "GILDEDROSE_INVENTORY", value_name = "PATH")]
    pub inventory: Option<PathBuf>,

    /// Report format written to stdout
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Log format written to stderr (json or pretty)
    #[arg(long, env = "GILDEDROSE_LOG_FORMAT", default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    /// Per-day listing of every item
    Text,
    /// Final stock as a JSON array
    Json,
}

impl Cli {
    /// Items to simulate: the configured inventory file, or the sample stock.
    pub fn load_items(&self) -> CliResult<Vec<Item>> {
        match &self.inventory {
            Some(path) => load_inventory(path),
            None => Ok(sample_inventory()),
        }
    }
}

pub fn load_inventory(path: &Path) -> CliResult<Vec<Item>> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::ReadInventory {
        path: path.to_path_buf(),
        source,
    })?;
    parse_inventory(&raw)
}

pub fn parse_inventory(raw: &str) -> CliResult<Vec<Item>> {
    Ok(serde_json::from_str(raw)?)
}
