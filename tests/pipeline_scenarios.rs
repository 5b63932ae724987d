use std::collections::BTreeSet;

use fssr_venn::constants::columns::REQUIRED;
use fssr_venn::{
    CsvBytesSource, PartitionSelector, RawTable, TableSource, VennError, derive_flags,
    identifier_sets, list_commodities, load_and_filter, partition,
};

fn table(rows: Vec<[&str; 6]>) -> RawTable {
    RawTable::from_text_rows(REQUIRED, rows)
}

fn ids(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn rice_scenario_end_to_end() {
    let raw = table(vec![
        [
            "A",
            "Non-Compliant",
            "Unsafe",
            "Standard",
            "Correctly Labelled",
            "Rice",
        ],
        [
            "B",
            "Compliant as per FSSR",
            "Unsafe",
            "Sub-Standard",
            "Mis-labelled",
            "Rice",
        ],
    ]);

    let filtered = load_and_filter(&raw).unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.records()[0].order_id, "A");

    let flagged = derive_flags(&filtered);
    let flags = flagged.rows()[0].flags;
    assert!(flags.is_unsafe);
    assert!(!flags.is_sub_standard);
    assert!(!flags.is_mis_labelled);

    let sets = identifier_sets(&partition(&flagged, &PartitionSelector::commodity("Rice")));
    assert_eq!(sets.unsafe_ids, ids(&["A"]));
    assert!(sets.sub_standard_ids.is_empty());
    assert!(sets.mis_labelled_ids.is_empty());

    assert_eq!(list_commodities(&flagged), vec!["Rice".to_string()]);
}

#[test]
fn duplicate_ids_merge_monotonically() {
    let flagged = derive_flags(
        &load_and_filter(&table(vec![
            ["1", "Non-Compliant", "Unsafe", "", "", "Rice"],
            ["1", "Non-Compliant", "Safe", "", "", "Rice"],
            ["2", "Non-Compliant", "Safe", "", "", "Rice"],
        ]))
        .unwrap(),
    );
    let sets = identifier_sets(&partition(&flagged, &PartitionSelector::Overall));
    assert_eq!(sets.unsafe_ids, ids(&["1"]));
}

#[test]
fn uploaded_csv_with_missing_column_produces_no_output() {
    let upload = CsvBytesSource::new(
        "upload.csv",
        "Order ID,Overall Compliance,Overall Safety Classification,Overall Quality Classification,Commodity\n\
         A,Non-Compliant,Unsafe,Standard,Rice\n",
    );
    let table = upload.load().unwrap();
    match load_and_filter(&table) {
        Err(VennError::MissingColumn { column }) => {
            assert_eq!(column, "Overall Labelling Complaince");
        }
        other => panic!("expected missing column error, got {other:?}"),
    }
}

#[test]
fn overall_partition_keeps_rows_without_commodity() {
    let flagged = derive_flags(
        &load_and_filter(&table(vec![
            ["1", "Non-Compliant", "", "", "Mis-labelled", ""],
            ["2", "Non-Compliant", "", "", "Mis-labelled", "Rice"],
        ]))
        .unwrap(),
    );
    let overall = identifier_sets(&partition(&flagged, &PartitionSelector::Overall));
    assert_eq!(overall.mis_labelled_ids, ids(&["1", "2"]));
    let rice = identifier_sets(&partition(&flagged, &PartitionSelector::commodity("Rice")));
    assert_eq!(rice.mis_labelled_ids, ids(&["2"]));
    assert_eq!(list_commodities(&flagged), vec!["Rice".to_string()]);
}

#[test]
fn all_compliant_input_yields_empty_sets() {
    let flagged = derive_flags(
        &load_and_filter(&table(vec![[
            "1",
            "Compliant as per FSSR",
            "Unsafe",
            "Sub-Standard",
            "Mis-labelled",
            "Rice",
        ]]))
        .unwrap(),
    );
    assert!(flagged.is_empty());
    assert!(identifier_sets(&partition(&flagged, &PartitionSelector::Overall)).is_empty());
    assert!(list_commodities(&flagged).is_empty());
}
