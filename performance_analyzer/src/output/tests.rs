//!
//! Tests for the report files.
//!

#![cfg(test)]

use chrono::Utc;
use serde_json::json;

use crate::evaluation::Evaluation;
use crate::model::result_set::ResultSet;
use crate::model::source::Source;
use crate::output::Output;
use crate::output::COMPARISON_FILE_NAME;
use crate::output::COMPARISON_REPORT_FILE_NAME;
use crate::output::RECOMMENDATIONS_FILE_NAME;
use crate::output::STATISTICS_FILE_NAME;
use crate::output::SUMMARY_FILE_NAME;
use crate::thresholds::Thresholds;

fn current() -> ResultSet {
    ResultSet::from_value(
        Source::Current,
        &json!([
            { "suite": "s", "name": "a", "success": true, "metrics": { "executionTime": 2000.0 } },
            { "suite": "s", "name": "b", "success": true, "metrics": { "executionTime": 2000.0 } }
        ]),
    )
}

#[test]
fn analysis_without_baseline() {
    let evaluation = Evaluation::new(&current(), None, &Thresholds::default());

    let output = Output::analysis(&evaluation, Utc::now()).expect("Always valid");
    let names: Vec<String> = output
        .files
        .iter()
        .map(|file| file.path.to_string_lossy().into_owned())
        .collect();

    assert_eq!(
        names,
        vec![
            SUMMARY_FILE_NAME,
            STATISTICS_FILE_NAME,
            RECOMMENDATIONS_FILE_NAME
        ]
    );
    assert_eq!(
        output.files[2].contents,
        "Performance Recommendations\n==============================\n\n1. Consider optimizing slow operations (avg: 2000.00ms)\n2. Optimize s suite (avg: 2000.00ms)\n"
    );
}

#[test]
fn analysis_with_baseline_is_written() {
    let baseline = current();
    let evaluation = Evaluation::new(&current(), Some(&baseline), &Thresholds::default());
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let target = directory.path().join("reports");

    Output::analysis(&evaluation, Utc::now())
        .expect("Always valid")
        .write_to_directory(&target)
        .expect("Failed to write the reports");

    for name in [
        COMPARISON_FILE_NAME,
        COMPARISON_REPORT_FILE_NAME,
        SUMMARY_FILE_NAME,
        STATISTICS_FILE_NAME,
        RECOMMENDATIONS_FILE_NAME,
    ] {
        assert!(target.join(name).is_file(), "{name} is missing");
    }
    let summary: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(target.join(SUMMARY_FILE_NAME)).expect("Always exists"),
    )
    .expect("Always valid");
    assert_eq!(summary["status"], json!("REGRESSION"));
    assert_eq!(summary["total_benchmarks"], json!(2));
}

#[test]
fn empty_comparison_writes_nothing() {
    let evaluation = Evaluation::new(&current(), None, &Thresholds::default());
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let target = directory.path().join("untouched");

    let output = Output::comparison(&evaluation).expect("Always valid");
    assert!(output.files.is_empty());
    output
        .write_to_directory(&target)
        .expect("Failed to write the reports");

    assert!(!target.exists());
}
