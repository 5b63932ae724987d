use std::io;

use thiserror::Error;

use crate::types::ColumnName;

/// Error type for table loading, classification, and report rendering failures.
#[derive(Debug, Error)]
pub enum VennError {
    #[error("input table is missing required column '{column}'")]
    MissingColumn { column: ColumnName },
    #[error("table source '{source_id}' is unavailable: {reason}")]
    SourceUnavailable { source_id: String, reason: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}
