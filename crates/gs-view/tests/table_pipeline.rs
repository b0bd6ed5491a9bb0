//! Backend JSON through the full table-shaping pipeline.

use gs_data::Dataset;
use gs_view::{TableError, shape_static_table, shape_varying_table, to_series};

#[test]
fn static_reply_filters_then_shapes() {
    let json = r#"{
        "bus": ["Bus1", "Bus2"],
        "p_nom": [100.0, 250.0],
        "p_min_pu": [0.0, 0.0],
        "sign": [null, null]
    }"#;
    let dataset: Dataset = serde_json::from_str(json).unwrap();

    let table = shape_static_table(&dataset).unwrap();
    assert_eq!(table.headers, ["bus", "p_nom"]);
    assert_eq!(table.rows, [["Bus1", "100.00"], ["Bus2", "250.00"]]);
}

#[test]
fn varying_reply_keeps_sparse_axis() {
    // A numeric axis of zeros would fail the emptiness rule if it went
    // through the filter; the varying path must keep it anyway.
    let json = r#"{
        "snapshots": [0.0, 0.0],
        "Gen1": [5.0, 6.0],
        "Gen2": [0.0, 0.0]
    }"#;
    let dataset: Dataset = serde_json::from_str(json).unwrap();

    let table = shape_varying_table(&dataset).unwrap();
    assert_eq!(table.headers, ["Snapshot", "Gen1"]);
    assert_eq!(table.rows, [["0", "5.00"], ["0", "6.00"]]);
}

#[test]
fn fully_sparse_varying_reply_degrades_to_axis_only() {
    let json = r#"{
        "snapshots": ["t0", "t1"],
        "Gen1": [0.0, null]
    }"#;
    let dataset: Dataset = serde_json::from_str(json).unwrap();

    let table = shape_varying_table(&dataset).unwrap();
    assert_eq!(table.headers, ["Snapshot"]);
    assert_eq!(table.rows, [["t0"], ["t1"]]);
}

#[test]
fn all_sparse_static_reply_is_no_data() {
    let json = r#"{"a": [0.0], "b": [null]}"#;
    let dataset: Dataset = serde_json::from_str(json).unwrap();
    assert_eq!(shape_static_table(&dataset), Err(TableError::NoData));
}

#[test]
fn plot_path_skips_the_filter() {
    // The plot path feeds the raw dataset to the adapter: sparse columns
    // still become (flat) series.
    let json = r#"{
        "snapshots": ["t0", "t1"],
        "Gen1": [5.0, 6.0],
        "Gen2": [0.0, 0.0]
    }"#;
    let dataset: Dataset = serde_json::from_str(json).unwrap();

    let bundle = to_series(&dataset, "Generator", "p_set");
    assert_eq!(bundle.series.len(), 2);
    assert_eq!(bundle.series[1].y, [Some(0.0), Some(0.0)]);
}
