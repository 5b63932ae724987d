use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::partition::NO_COMMODITY;
use crate::pipeline::FlaggedDataset;
use crate::types::CommodityName;

/// Per-commodity share of the non-compliant dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommodityShare {
    pub commodity: CommodityName,
    pub records: usize,
    pub share: f64,
    pub unsafe_rows: usize,
    pub sub_standard_rows: usize,
    pub mis_labelled_rows: usize,
}

/// Count non-compliant rows and flagged rows per commodity.
///
/// Rows without a commodity are grouped under `(none)`. Entries are sorted
/// by record count descending, then by name.
pub fn commodity_breakdown(dataset: &FlaggedDataset) -> Vec<CommodityShare> {
    let total = dataset.len();
    let mut counts: HashMap<&str, CommodityShare> = HashMap::new();
    for row in dataset.rows() {
        let name = row.record.commodity.as_deref().unwrap_or(NO_COMMODITY);
        let entry = counts.entry(name).or_insert_with(|| CommodityShare {
            commodity: name.to_string(),
            records: 0,
            share: 0.0,
            unsafe_rows: 0,
            sub_standard_rows: 0,
            mis_labelled_rows: 0,
        });
        entry.records += 1;
        entry.unsafe_rows += usize::from(row.flags.is_unsafe);
        entry.sub_standard_rows += usize::from(row.flags.is_sub_standard);
        entry.mis_labelled_rows += usize::from(row.flags.is_mis_labelled);
    }

    let mut shares: Vec<CommodityShare> = counts
        .into_values()
        .map(|mut entry| {
            entry.share = if total == 0 {
                0.0
            } else {
                entry.records as f64 / total as f64
            };
            entry
        })
        .collect();
    shares.sort_by(|a, b| {
        b.records
            .cmp(&a.records)
            .then_with(|| a.commodity.cmp(&b.commodity))
    });
    shares
}
