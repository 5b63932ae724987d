//! Table source interfaces and built-in CSV sources.
//!
//! Ownership model:
//! - `TableSource` is the pipeline-facing interface that yields a `RawTable`.
//! - `CsvSource` reads a delimited file from disk.
//! - `CsvBytesSource` parses an upload that is already held in memory.
//!
//! Sources only parse; column checks and filtering belong to the pipeline.

use crate::errors::VennError;
use crate::table::RawTable;

/// CSV-backed source implementations.
pub mod csv_source;

pub use csv_source::{CsvBytesSource, CsvSource, CsvSourceConfig};

/// Pipeline-facing tabular data source.
///
/// For a fixed input, `load` must return the same table on every call.
pub trait TableSource: Send + Sync {
    /// Stable source identifier used in logs and errors.
    fn id(&self) -> &str;
    /// Parse the full input into a table.
    fn load(&self) -> Result<RawTable, VennError>;
}

/// Source over a table that has already been parsed.
#[derive(Clone, Debug)]
pub struct InMemorySource {
    id: String,
    table: RawTable,
}

impl InMemorySource {
    /// Wrap an existing table.
    pub fn new(id: impl Into<String>, table: RawTable) -> Self {
        Self {
            id: id.into(),
            table,
        }
    }
}

impl TableSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<RawTable, VennError> {
        Ok(self.table.clone())
    }
}
