use std::fs::File;
use std::io;
use std::path::PathBuf;

use tracing::info;

use super::TableSource;
use crate::errors::VennError;
use crate::table::{RawTable, cell_value};

const UTF8_BOM: char = '\u{feff}';

/// Configuration for a CSV file source.
#[derive(Clone, Debug)]
pub struct CsvSourceConfig {
    /// Path of the CSV file.
    pub path: PathBuf,
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Whether surrounding whitespace is removed from header names.
    pub trim_headers: bool,
}

impl CsvSourceConfig {
    /// Create a comma-delimited config for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
            trim_headers: false,
        }
    }

    /// Override the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether header names are trimmed before column lookup.
    pub fn with_trim_headers(mut self, trim_headers: bool) -> Self {
        self.trim_headers = trim_headers;
        self
    }
}

/// CSV file on disk.
#[derive(Clone, Debug)]
pub struct CsvSource {
    id: String,
    config: CsvSourceConfig,
}

impl CsvSource {
    /// Create a file source; its id is the file path.
    pub fn new(config: CsvSourceConfig) -> Self {
        Self {
            id: config.path.display().to_string(),
            config,
        }
    }
}

impl TableSource for CsvSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<RawTable, VennError> {
        let file = File::open(&self.config.path).map_err(|err| VennError::SourceUnavailable {
            source_id: self.id.clone(),
            reason: err.to_string(),
        })?;
        let table = read_csv(file, self.config.delimiter, self.config.trim_headers)?;
        info!(
            source = %self.id,
            rows = table.len(),
            columns = table.headers().len(),
            "loaded csv source"
        );
        Ok(table)
    }
}

/// CSV upload held in memory.
#[derive(Clone, Debug)]
pub struct CsvBytesSource {
    id: String,
    bytes: Vec<u8>,
    delimiter: u8,
    trim_headers: bool,
}

impl CsvBytesSource {
    /// Wrap uploaded bytes under a display id (typically the upload's file name).
    pub fn new(id: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            bytes: bytes.into(),
            delimiter: b',',
            trim_headers: false,
        }
    }

    /// Override the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether header names are trimmed before column lookup.
    pub fn with_trim_headers(mut self, trim_headers: bool) -> Self {
        self.trim_headers = trim_headers;
        self
    }
}

impl TableSource for CsvBytesSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<RawTable, VennError> {
        let table = read_csv(self.bytes.as_slice(), self.delimiter, self.trim_headers)?;
        info!(
            source = %self.id,
            rows = table.len(),
            bytes = self.bytes.len(),
            "parsed uploaded csv"
        );
        Ok(table)
    }
}

fn read_csv<R: io::Read>(
    reader: R,
    delimiter: u8,
    trim_headers: bool,
) -> Result<RawTable, VennError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let header = if idx == 0 {
                header.trim_start_matches(UTF8_BOM)
            } else {
                header
            };
            if trim_headers {
                header.trim().to_string()
            } else {
                header.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(cell_value).collect());
    }
    Ok(RawTable::new(headers, rows))
}
