//! Report assembly for the one-shot and interactive views.
//!
//! A `Report` is a plain value built from a `FlaggedDataset` and a
//! `ReportConfig`. With `ReportScope::All` it lists `Overall` first and then
//! every commodity in sorted order; with `ReportScope::Single` it holds the
//! one selected partition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{ReportConfig, ReportScope};
use crate::data::{IdentifierSets, PartitionLabel, PartitionSelector};
use crate::metrics::{CommodityShare, commodity_breakdown};
use crate::pipeline::{FlaggedDataset, identifier_sets, list_commodities, partition};
use crate::venn::VennRegions;

/// Identifier sets and region counts of one partition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartitionReport {
    /// Selector the partition was built from.
    pub selector: PartitionSelector,
    /// Display label (`Overall` or the commodity name).
    pub label: PartitionLabel,
    /// Number of non-compliant rows in the partition.
    pub record_count: usize,
    /// Identifier sets feeding the diagram.
    pub sets: IdentifierSets,
    /// Exclusive region counts of `sets`.
    pub regions: VennRegions,
}

impl PartitionReport {
    /// Build the report of one partition of `dataset`.
    pub fn build(dataset: &FlaggedDataset, selector: &PartitionSelector) -> Self {
        let view = partition(dataset, selector);
        let sets = identifier_sets(&view);
        let regions = VennRegions::from_sets(&sets);
        Self {
            selector: selector.clone(),
            label: selector.label(),
            record_count: view.len(),
            sets,
            regions,
        }
    }

    /// True when no row fell into the partition.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

/// A rendered-ready collection of partition reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Heading shown above the diagrams.
    pub title: String,
    /// Time the report was assembled.
    pub generated_at: DateTime<Utc>,
    /// Non-compliant rows in the whole dataset.
    pub total_records: usize,
    /// Per-commodity counts of the whole dataset.
    pub breakdown: Vec<CommodityShare>,
    /// Partition reports in display order.
    pub partitions: Vec<PartitionReport>,
}

impl Report {
    /// Find a partition report by its selector.
    pub fn partition(&self, selector: &PartitionSelector) -> Option<&PartitionReport> {
        self.partitions.iter().find(|entry| &entry.selector == selector)
    }
}

/// Assemble a report for `config.scope`.
pub fn build_report(dataset: &FlaggedDataset, config: &ReportConfig) -> Report {
    let selectors: Vec<PartitionSelector> = match &config.scope {
        ReportScope::All => std::iter::once(PartitionSelector::Overall)
            .chain(
                list_commodities(dataset)
                    .into_iter()
                    .map(PartitionSelector::Commodity),
            )
            .collect(),
        ReportScope::Single(selector) => vec![selector.clone()],
    };

    let partitions: Vec<PartitionReport> = selectors
        .iter()
        .map(|selector| PartitionReport::build(dataset, selector))
        .collect();

    if let ReportScope::Single(selector) = &config.scope {
        if partitions.iter().all(PartitionReport::is_empty) {
            warn!(partition = %selector, "selected partition has no records");
        }
    }
    debug!(
        partitions = partitions.len(),
        total_records = dataset.len(),
        "assembled report"
    );

    Report {
        title: config.title.clone(),
        generated_at: Utc::now(),
        total_records: dataset.len(),
        breakdown: commodity_breakdown(dataset),
        partitions,
    }
}
