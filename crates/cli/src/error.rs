use std::path::PathBuf;

use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read inventory file {path}: {source}")]
    ReadInventory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid inventory JSON: {0}")]
    InventoryJson(#[from] serde_json::Error),

    #[error("failed to encode report: {0}")]
    EncodeReport(#[source] serde_json::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Classify a serde_json failure hit while writing the report.
    pub fn from_report_json(err: serde_json::Error) -> Self {
        if err.is_io() {
            CliError::Io(err.into())
        } else {
            CliError::EncodeReport(err)
        }
    }
}
