//!
//! Tests for the metrics extraction.
//!

#![cfg(test)]

use serde_json::json;

use crate::metrics::extract;
use crate::metrics::Metrics;
use crate::model::record::BenchmarkRecord;
use crate::model::result_set::ResultSet;
use crate::model::source::Source;

fn current(value: serde_json::Value) -> ResultSet {
    ResultSet::from_value(Source::Current, &value)
}

#[test]
fn averages_over_successful_records_only() {
    let result_set = ResultSet::from_records(
        Source::Current,
        vec![
            BenchmarkRecord::new("s", "a", 10.0, 1_048_576, true),
            BenchmarkRecord::new("s", "b", 30.0, 3_145_728, true),
            BenchmarkRecord::new("s", "c", 5000.0, 900_000_000, false),
            BenchmarkRecord::new("s", "d", 0.0, 0, false),
        ],
    );

    let metrics = extract(&result_set);

    assert_eq!(metrics.avg_execution_time_ms, 20.0);
    assert_eq!(metrics.avg_memory_usage_mb, 2.0);
    assert_eq!(metrics.failure_rate, 0.5);
    assert_eq!(metrics.successful_count, 2);
    assert_eq!(metrics.total_count, 4);
}

#[test]
fn all_failed_records_yield_sentinel() {
    let result_set = current(json!([
        { "success": false, "metrics": { "executionTime": 10.0, "memoryUsage": 10 } },
        { "success": false },
        { "metrics": { "executionTime": 3.0 } }
    ]));

    assert_eq!(extract(&result_set), Metrics::new(0.0, 0.0, 1.0, 0, 3));
}

#[test]
fn empty_array_yields_sentinel() {
    let metrics = extract(&current(json!([])));

    assert_eq!(metrics, Metrics::new(0.0, 0.0, 1.0, 0, 0));
}

#[test]
fn summary_passes_through() {
    let metrics = extract(&current(json!({
        "avg_execution_time": 115.0,
        "memory_usage": 50.0,
        "successful_benchmarks": 19,
        "total_benchmarks": 20,
        "failed_benchmarks": 1
    })));

    assert_eq!(metrics.avg_execution_time_ms, 115.0);
    assert_eq!(metrics.avg_memory_usage_mb, 50.0);
    assert_eq!(metrics.failure_rate, 0.05);
    assert_eq!(metrics.successful_count, 19);
    assert_eq!(metrics.total_count, 20);
}

#[test]
fn empty_summary_has_zero_failure_rate() {
    let metrics = extract(&current(json!({})));

    assert_eq!(metrics, Metrics::default());
}

#[test]
fn scalar_yields_zeros() {
    assert_eq!(extract(&current(json!(null))), Metrics::default());
    assert_eq!(extract(&current(json!(17.5))), Metrics::default());
}

#[test]
fn inconsistent_summary_respects_invariants() {
    let metrics = extract(&current(json!({
        "successful_benchmarks": 50,
        "total_benchmarks": 10,
        "failed_benchmarks": 30
    })));

    assert_eq!(metrics.successful_count, 10);
    assert_eq!(metrics.failure_rate, 1.0);
}

#[test]
fn extraction_is_deterministic() {
    let value = json!([
        { "success": true, "metrics": { "executionTime": 1.25, "memoryUsage": 4096 } },
        { "success": true, "metrics": { "executionTime": 2.5, "memoryUsage": 8192 } }
    ]);

    assert_eq!(extract(&current(value.clone())), extract(&current(value)));
}
