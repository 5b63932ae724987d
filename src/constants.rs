/// Header names of the columns the pipeline requires.
pub mod columns {
    /// Record identifier column.
    pub const ORDER_ID: &str = "Order ID";
    /// Overall compliance status column.
    pub const OVERALL_COMPLIANCE: &str = "Overall Compliance";
    /// Safety classification column.
    pub const SAFETY_CLASSIFICATION: &str = "Overall Safety Classification";
    /// Quality classification column.
    pub const QUALITY_CLASSIFICATION: &str = "Overall Quality Classification";
    /// Labelling classification column. The misspelling is the real header name.
    pub const LABELLING_CLASSIFICATION: &str = "Overall Labelling Complaince";
    /// Grouping column used for per-commodity partitions.
    pub const COMMODITY: &str = "Commodity";

    /// Required columns in the order they are checked.
    pub const REQUIRED: [&str; 6] = [
        ORDER_ID,
        OVERALL_COMPLIANCE,
        SAFETY_CLASSIFICATION,
        QUALITY_CLASSIFICATION,
        LABELLING_CLASSIFICATION,
        COMMODITY,
    ];
}

/// Fixed sentinel values compared against input cells.
pub mod sentinels {
    /// Compliance status of rows that are dropped before classification (exact match).
    pub const FULLY_COMPLIANT: &str = "Compliant as per FSSR";
    /// Normalized safety classification that marks a record Unsafe.
    pub const UNSAFE: &str = "unsafe";
    /// Normalized quality classification that marks a record Sub-Standard.
    pub const SUB_STANDARD: &str = "sub-standard";
    /// Normalized labelling classification that marks a record Mis-labelled.
    pub const MIS_LABELLED: &str = "mis-labelled";
}

/// Partition selection labels.
pub mod partition {
    /// Selector value meaning "the whole filtered dataset".
    pub const OVERALL: &str = "Overall";
    /// Breakdown label for records without a commodity value.
    pub const NO_COMMODITY: &str = "(none)";
}

/// Labels and region keys used by Venn outputs.
pub mod venn {
    use crate::types::RegionKey;

    /// Display label of the Unsafe set.
    pub const LABEL_UNSAFE: &str = "Unsafe";
    /// Display label of the Sub-Standard set.
    pub const LABEL_SUB_STANDARD: &str = "Sub-Standard";
    /// Display label of the Mis-labelled set.
    pub const LABEL_MIS_LABELLED: &str = "Mis-labelled";
    /// Set labels in diagram order.
    pub const SET_LABELS: [&str; 3] = [LABEL_UNSAFE, LABEL_SUB_STANDARD, LABEL_MIS_LABELLED];
    /// Exclusive region keys in three-set subset order.
    pub const REGION_KEYS: [RegionKey; 7] = ["100", "010", "110", "001", "101", "011", "111"];
}

/// Defaults used by report assembly and rendering.
pub mod report {
    /// Default report title.
    pub const DEFAULT_TITLE: &str = "Venn Diagram Generator for FSSR Classifications";
    /// Message shown in place of a diagram for a partition without records.
    pub const EMPTY_PARTITION_MESSAGE: &str = "No data for this commodity.";
    /// Default diagram width in pixels.
    pub const DEFAULT_WIDTH: u32 = 400;
    /// Default diagram height in pixels.
    pub const DEFAULT_HEIGHT: u32 = 400;
    /// Default font size for set labels and region counts.
    pub const DEFAULT_FONT_SIZE: u32 = 12;
    /// Default font size for diagram titles.
    pub const DEFAULT_TITLE_FONT_SIZE: u32 = 16;
}
