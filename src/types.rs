/// Order identifier taken verbatim from the `Order ID` column.
/// Examples: `ORD-2024-0113`, `4471`
pub type OrderId = String;
/// Commodity name used as the partition key.
/// Examples: `Rice`, `Edible Oil`, `Milk Powder`
pub type CommodityName = String;
/// Header name of an input column.
/// Example: `Overall Labelling Complaince`
pub type ColumnName = String;
/// Display label of a partition (`Overall` or a commodity name).
/// Examples: `Overall`, `Rice`
pub type PartitionLabel = String;
/// Exclusive Venn region key in `unsafe/sub-standard/mis-labelled` bit order.
/// Examples: `100`, `011`, `111`
pub type RegionKey = &'static str;
