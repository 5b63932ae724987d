#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Report and rendering configuration types.
pub mod config;
/// Centralized constants: column names, sentinels, labels, and defaults.
pub mod constants;
/// Inspection record, flag, selector, and identifier-set types.
pub mod data;
/// Per-commodity breakdown metrics.
pub mod metrics;
/// The classification and aggregation pipeline.
pub mod pipeline;
/// Text, JSON, and SVG report renderers.
pub mod render;
/// Report assembly for the one-shot and interactive views.
pub mod report;
/// CLI runner behind the `venn_report` binary.
pub mod report_app;
/// Explicit per-user upload state.
pub mod session;
/// Table source traits and built-in CSV sources.
pub mod source;
/// In-memory tabular input.
pub mod table;
/// Shared type aliases.
pub mod types;
/// Text normalization helpers.
pub mod utils;
/// Three-set Venn region counts.
pub mod venn;

mod errors;

pub use config::{RenderOptions, ReportConfig, ReportScope};
pub use data::{
    ComplianceFlags, FlaggedRecord, IdentifierSets, InspectionRecord, PartitionSelector,
};
pub use errors::VennError;
pub use pipeline::{
    FilteredDataset, FlaggedDataset, Partition, derive_flags, identifier_sets, list_commodities,
    load_and_filter, partition,
};
pub use report::{PartitionReport, Report, build_report};
pub use session::Session;
pub use source::{CsvBytesSource, CsvSource, CsvSourceConfig, InMemorySource, TableSource};
pub use table::{RawTable, RowView};
pub use types::{ColumnName, CommodityName, OrderId, PartitionLabel};
pub use venn::VennRegions;
