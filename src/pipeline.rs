//! Classification and aggregation pipeline.
//!
//! The pipeline turns a raw inspection table into the three identifier sets
//! behind each Venn diagram:
//!
//! 1) `load_and_filter` checks the required columns and drops rows whose
//!    compliance status is exactly `Compliant as per FSSR`.
//! 2) `derive_flags` computes Unsafe / Sub-Standard / Mis-labelled per row by
//!    comparing the trimmed, lowercased classification against fixed values.
//! 3) `partition` restricts the flagged rows to one commodity (exact match)
//!    or keeps them all.
//! 4) `identifier_sets` collects the order ids of each flag.
//!
//! Every stage is a pure function of its input and is re-run in full on each
//! request.

use std::collections::BTreeSet;

use tracing::debug;

use crate::constants::columns;
use crate::constants::sentinels::{FULLY_COMPLIANT, MIS_LABELLED, SUB_STANDARD, UNSAFE};
use crate::data::{
    CommodityName, ComplianceFlags, FlaggedRecord, IdentifierSets, InspectionRecord,
    PartitionSelector,
};
use crate::errors::VennError;
use crate::table::RawTable;
use crate::utils::normalize_label;

/// Non-compliant records of an input table, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilteredDataset {
    records: Vec<InspectionRecord>,
}

impl FilteredDataset {
    /// Records that survived the compliance filter.
    pub fn records(&self) -> &[InspectionRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when every input row was fully compliant (or the input was empty).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Filtered records with their derived flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlaggedDataset {
    rows: Vec<FlaggedRecord>,
}

impl FlaggedDataset {
    /// Flagged rows in input order.
    pub fn rows(&self) -> &[FlaggedRecord] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read-only view of the rows selected by a `PartitionSelector`.
#[derive(Clone, Debug)]
pub struct Partition<'a> {
    selector: PartitionSelector,
    rows: Vec<&'a FlaggedRecord>,
}

impl<'a> Partition<'a> {
    /// Selector this view was built from.
    pub fn selector(&self) -> &PartitionSelector {
        &self.selector
    }

    /// Selected rows in dataset order.
    pub fn rows(&self) -> &[&'a FlaggedRecord] {
        &self.rows
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no row matched the selector.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Column positions of the required fields in a `RawTable`.
#[derive(Clone, Copy, Debug)]
struct ColumnLayout {
    order_id: usize,
    compliance: usize,
    safety: usize,
    quality: usize,
    labelling: usize,
    commodity: usize,
}

impl ColumnLayout {
    fn resolve(table: &RawTable) -> Result<Self, VennError> {
        let lookup = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| VennError::MissingColumn {
                    column: name.to_string(),
                })
        };
        Ok(Self {
            order_id: lookup(columns::ORDER_ID)?,
            compliance: lookup(columns::OVERALL_COMPLIANCE)?,
            safety: lookup(columns::SAFETY_CLASSIFICATION)?,
            quality: lookup(columns::QUALITY_CLASSIFICATION)?,
            labelling: lookup(columns::LABELLING_CLASSIFICATION)?,
            commodity: lookup(columns::COMMODITY)?,
        })
    }
}

/// Check required columns and drop fully compliant rows.
///
/// Fails with `VennError::MissingColumn` for the first absent required
/// column; nothing is produced in that case. The compliance comparison is
/// exact, so a null or differently spelled status is kept.
pub fn load_and_filter(table: &RawTable) -> Result<FilteredDataset, VennError> {
    let layout = ColumnLayout::resolve(table)?;
    let owned = |value: Option<&str>| value.map(str::to_string);

    let records: Vec<InspectionRecord> = table
        .rows()
        .filter(|row| row.get(layout.compliance) != Some(FULLY_COMPLIANT))
        .map(|row| InspectionRecord {
            order_id: row.get(layout.order_id).unwrap_or_default().to_string(),
            compliance: owned(row.get(layout.compliance)),
            safety: owned(row.get(layout.safety)),
            quality: owned(row.get(layout.quality)),
            labelling: owned(row.get(layout.labelling)),
            commodity: owned(row.get(layout.commodity)),
        })
        .collect();

    debug!(
        input_rows = table.len(),
        kept = records.len(),
        dropped = table.len() - records.len(),
        "filtered fully compliant rows"
    );
    Ok(FilteredDataset { records })
}

/// Compute the three non-compliance flags for one record.
pub fn classify(record: &InspectionRecord) -> ComplianceFlags {
    ComplianceFlags {
        is_unsafe: matches_sentinel(record.safety.as_deref(), UNSAFE),
        is_sub_standard: matches_sentinel(record.quality.as_deref(), SUB_STANDARD),
        is_mis_labelled: matches_sentinel(record.labelling.as_deref(), MIS_LABELLED),
    }
}

/// Attach derived flags to every record of `dataset`.
pub fn derive_flags(dataset: &FilteredDataset) -> FlaggedDataset {
    let rows: Vec<FlaggedRecord> = dataset
        .records
        .iter()
        .map(|record| FlaggedRecord {
            flags: classify(record),
            record: record.clone(),
        })
        .collect();

    debug!(
        rows = rows.len(),
        unsafe_rows = rows.iter().filter(|row| row.flags.is_unsafe).count(),
        sub_standard_rows = rows.iter().filter(|row| row.flags.is_sub_standard).count(),
        mis_labelled_rows = rows.iter().filter(|row| row.flags.is_mis_labelled).count(),
        "derived compliance flags"
    );
    FlaggedDataset { rows }
}

/// Select the rows of one partition.
///
/// Commodity matching is exact and case-sensitive, unlike flag derivation.
/// Rows without a commodity only appear in the `Overall` partition.
pub fn partition<'a>(dataset: &'a FlaggedDataset, selector: &PartitionSelector) -> Partition<'a> {
    let rows: Vec<&FlaggedRecord> = match selector {
        PartitionSelector::Overall => dataset.rows.iter().collect(),
        PartitionSelector::Commodity(name) => dataset
            .rows
            .iter()
            .filter(|row| row.record.commodity.as_deref() == Some(name.as_str()))
            .collect(),
    };
    Partition {
        selector: selector.clone(),
        rows,
    }
}

/// Collect the order ids of a partition into one set per flag.
///
/// Membership is monotonic over duplicate ids: an id is in a set when any of
/// its rows carries the flag.
pub fn identifier_sets(partition: &Partition<'_>) -> IdentifierSets {
    let mut sets = IdentifierSets::default();
    for row in partition.rows() {
        let id = &row.record.order_id;
        if row.flags.is_unsafe {
            sets.unsafe_ids.insert(id.clone());
        }
        if row.flags.is_sub_standard {
            sets.sub_standard_ids.insert(id.clone());
        }
        if row.flags.is_mis_labelled {
            sets.mis_labelled_ids.insert(id.clone());
        }
    }
    sets
}

/// Sorted distinct commodity values; null commodities are skipped.
pub fn list_commodities(dataset: &FlaggedDataset) -> Vec<CommodityName> {
    dataset
        .rows
        .iter()
        .filter_map(|row| row.record.commodity.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn matches_sentinel(value: Option<&str>, sentinel: &str) -> bool {
    value.is_some_and(|value| normalize_label(value) == sentinel)
}
