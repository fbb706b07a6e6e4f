use std::fs;
use std::path::PathBuf;

use crop_yield_stats::analyzers::{
    DEFAULT_THRESHOLD, average_yield_by_region, percentage_high_yield_maize_by_region,
};
use crop_yield_stats::config::RunConfig;
use crop_yield_stats::error::LoadError;
use crop_yield_stats::normalize::NumericFields;
use crop_yield_stats::output::{AVERAGE_YIELD_FILE, HIGH_YIELD_MAIZE_FILE};
use crop_yield_stats::pipeline::{load_dataset, run};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_full_pipeline() {
    let out = tempfile::tempdir().unwrap();
    let config = RunConfig::new(fixture("crop_yield_sample.csv"), out.path().join("reports"));

    let summary = run(&config).expect("run failed");

    assert_eq!(summary.rows, 9);
    assert_eq!(summary.coercion.empty, 1);
    assert_eq!(summary.coercion.failed, 1);

    let csv = fs::read_to_string(out.path().join("reports").join(AVERAGE_YIELD_FILE)).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Region,Average Yield",
            "East,6.1250",
            "North,4.5000",
            "South,3.0000"
        ]
    );

    let txt = fs::read_to_string(out.path().join("reports").join(HIGH_YIELD_MAIZE_FILE)).unwrap();
    let lines: Vec<_> = txt.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Percentage High-Yield Maize Harvests by Region in Tons/Hectare"
    );
    assert_eq!(lines[1], "=".repeat(60));
    assert_eq!(lines[2], "East                  50.00% (1/2)");
    assert_eq!(lines[3], "North                 50.00% (1/2)");
}

#[test]
fn test_snake_case_headers_resolve() {
    let out = tempfile::tempdir().unwrap();
    let config = RunConfig::new(fixture("snake_case_headers.csv"), out.path());

    let summary = run(&config).unwrap();

    assert!(summary.columns.all_matched());
    assert_eq!(summary.columns.region_column.key, "region");
    assert_eq!(summary.columns.yield_column.key, "yield_tons_per_hectare");

    let regions: Vec<_> = summary
        .average_yield
        .iter()
        .map(|r| (r.region.as_str(), r.average_yield))
        .collect();
    assert_eq!(regions, vec![("Central", 4.5), ("West", 3.75)]);

    let txt = fs::read_to_string(out.path().join(HIGH_YIELD_MAIZE_FILE)).unwrap();
    assert!(txt.contains("Central                0.00% (0/1)\n"));
    assert!(txt.contains("West                 100.00% (1/1)\n"));
}

#[test]
fn test_threshold_changes_maize_share_only() {
    let dataset = load_dataset(&fixture("crop_yield_sample.csv"), &NumericFields::default()).unwrap();

    let strict = percentage_high_yield_maize_by_region(&dataset.records, DEFAULT_THRESHOLD);
    let loose = percentage_high_yield_maize_by_region(&dataset.records, 4.5);

    assert_eq!(strict[0].region, "East");
    assert_eq!(strict[0].high_count, 1);
    assert_eq!(loose[0].high_count, 2);
    assert_eq!(loose[0].percent_high, 100.0);
    assert_eq!(
        average_yield_by_region(&dataset.records),
        average_yield_by_region(&dataset.records)
    );
}

#[test]
fn test_maize_percentages_match_counts() {
    let dataset = load_dataset(&fixture("crop_yield_sample.csv"), &NumericFields::default()).unwrap();

    for row in percentage_high_yield_maize_by_region(&dataset.records, DEFAULT_THRESHOLD) {
        assert!(row.total_count > 0);
        assert!(row.high_count <= row.total_count);
        assert_eq!(
            row.percent_high,
            row.high_count as f64 / row.total_count as f64 * 100.0
        );
    }
}

#[test]
fn test_ragged_rows_abort_the_run() {
    let out = tempfile::tempdir().unwrap();
    let config = RunConfig::new(fixture("ragged.csv"), out.path().join("reports"));

    let err = run(&config).unwrap_err();
    match err.downcast_ref::<LoadError>() {
        Some(LoadError::Shape { line, .. }) => assert_eq!(*line, 3),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!out.path().join("reports").exists());
}

#[test]
fn test_missing_input_is_not_found() {
    let err = load_dataset(&fixture("does_not_exist.csv"), &NumericFields::default()).unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }));
}
