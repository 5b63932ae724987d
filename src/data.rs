use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::partition::OVERALL;

pub use crate::types::{CommodityName, OrderId, PartitionLabel};

/// One inspection row with the fields the pipeline reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionRecord {
    /// Identifier from the `Order ID` column.
    pub order_id: OrderId,
    /// Overall compliance status.
    pub compliance: Option<String>,
    /// Safety classification, as written in the input.
    pub safety: Option<String>,
    /// Quality classification, as written in the input.
    pub quality: Option<String>,
    /// Labelling classification, as written in the input.
    pub labelling: Option<String>,
    /// Commodity used for partitioning.
    pub commodity: Option<CommodityName>,
}

/// The three non-compliance flags derived from a record's classifications.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplianceFlags {
    /// Safety classification normalizes to `unsafe`.
    pub is_unsafe: bool,
    /// Quality classification normalizes to `sub-standard`.
    pub is_sub_standard: bool,
    /// Labelling classification normalizes to `mis-labelled`.
    pub is_mis_labelled: bool,
}

/// A record paired with the flags derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedRecord {
    /// Source record.
    pub record: InspectionRecord,
    /// Flags computed from `record`.
    pub flags: ComplianceFlags,
}

/// Which slice of the dataset a partition covers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartitionSelector {
    /// The whole filtered dataset.
    #[default]
    Overall,
    /// Records whose commodity equals this value exactly.
    Commodity(CommodityName),
}

impl PartitionSelector {
    /// Select one commodity.
    pub fn commodity(name: impl Into<CommodityName>) -> Self {
        Self::Commodity(name.into())
    }

    /// Map an optional selection value; `None` and `"Overall"` select everything.
    pub fn from_option(value: Option<&str>) -> Self {
        match value {
            None => Self::Overall,
            Some(value) if value == OVERALL => Self::Overall,
            Some(value) => Self::Commodity(value.to_string()),
        }
    }

    /// Display label of the selected partition.
    pub fn label(&self) -> PartitionLabel {
        match self {
            Self::Overall => OVERALL.to_string(),
            Self::Commodity(name) => name.clone(),
        }
    }
}

impl FromStr for PartitionSelector {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_option(Some(value)))
    }
}

impl fmt::Display for PartitionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overall => f.write_str(OVERALL),
            Self::Commodity(name) => f.write_str(name),
        }
    }
}

/// Identifiers of a partition's records, one set per flag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierSets {
    /// Orders with at least one Unsafe row.
    pub unsafe_ids: BTreeSet<OrderId>,
    /// Orders with at least one Sub-Standard row.
    pub sub_standard_ids: BTreeSet<OrderId>,
    /// Orders with at least one Mis-labelled row.
    pub mis_labelled_ids: BTreeSet<OrderId>,
}

impl IdentifierSets {
    /// Sets in diagram order: Unsafe, Sub-Standard, Mis-labelled.
    pub fn as_array(&self) -> [&BTreeSet<OrderId>; 3] {
        [
            &self.unsafe_ids,
            &self.sub_standard_ids,
            &self.mis_labelled_ids,
        ]
    }

    /// True when all three sets are empty.
    pub fn is_empty(&self) -> bool {
        self.as_array().iter().all(|set| set.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_literal_and_absent_value_select_everything() {
        assert_eq!(PartitionSelector::from_option(None), PartitionSelector::Overall);
        assert_eq!(
            "Overall".parse::<PartitionSelector>().unwrap(),
            PartitionSelector::Overall
        );
        assert_eq!(
            "overall".parse::<PartitionSelector>().unwrap(),
            PartitionSelector::commodity("overall")
        );
    }

    #[test]
    fn selector_label_matches_display() {
        let rice = PartitionSelector::commodity("Rice");
        assert_eq!(rice.label(), "Rice");
        assert_eq!(rice.to_string(), "Rice");
        assert_eq!(PartitionSelector::Overall.label(), "Overall");
    }

    #[test]
    fn empty_identifier_sets() {
        let mut sets = IdentifierSets::default();
        assert!(sets.is_empty());
        sets.mis_labelled_ids.insert("A".to_string());
        assert!(!sets.is_empty());
    }
}
