//!
//! Tests for the regression detection.
//!

#![cfg(test)]

use serde_json::json;

use crate::metrics::extract;
use crate::metrics::Metrics;
use crate::model::result_set::ResultSet;
use crate::model::source::Source;
use crate::regression::detect;
use crate::regression::relative_change_percent;
use crate::thresholds::RegressionThresholds;

const EPSILON: f64 = 1e-9;

fn summary(time: f64, memory: f64, failed: u64, total: u64) -> Metrics {
    Metrics::new(
        time,
        memory,
        (failed as f64) / (total.max(1) as f64),
        total - failed,
        total,
    )
}

#[test]
fn time_increase_above_threshold_regresses() {
    let result = detect(
        &summary(100.0, 50.0, 0, 20),
        &summary(115.0, 50.0, 0, 20),
        &RegressionThresholds::default(),
    );

    assert!((result.execution_time_change - 15.0).abs() < EPSILON);
    assert!(result.execution_time_regression);
    assert!(!result.memory_regression);
    assert!(!result.failure_rate_regression);
    assert!(result.has_regression);
    assert_eq!(
        result.recommendations,
        vec!["Execution time increased by 15.0% (threshold: 10.0%)".to_owned()]
    );
}

#[test]
fn time_increase_below_threshold_passes() {
    let result = detect(
        &summary(100.0, 50.0, 0, 20),
        &summary(105.0, 50.0, 0, 20),
        &RegressionThresholds::default(),
    );

    assert!((result.execution_time_change - 5.0).abs() < EPSILON);
    assert!(!result.has_regression);
    assert_eq!(result.recommendations.len(), 1);
    assert!(result.recommendations[0].starts_with("No significant performance regression"));
    assert!(result.recommendations[0].contains("+5.0% vs 10.0%"));
}

#[test]
fn insufficient_benchmarks_force_regression() {
    let current = extract(&ResultSet::from_value(
        Source::Current,
        &json!([
            { "success": true, "metrics": { "executionTime": 1.0, "memoryUsage": 1 } },
            { "success": true, "metrics": { "executionTime": 1.0, "memoryUsage": 1 } },
            { "success": true, "metrics": { "executionTime": 1.0, "memoryUsage": 1 } }
        ]),
    ));
    let baseline = summary(1000.0, 500.0, 5, 20);

    let result = detect(&baseline, &current, &RegressionThresholds::default());

    assert!(result.has_regression);
    assert!(!result.execution_time_regression);
    assert!(!result.memory_regression);
    assert!(!result.failure_rate_regression);
    assert_eq!(result.execution_time_change, 0.0);
    assert_eq!(result.memory_change, 0.0);
    assert_eq!(result.failure_rate_change, 0.0);
    assert_eq!(
        result.recommendations,
        vec!["Insufficient successful benchmarks: 3 < 5".to_owned()]
    );
}

#[test]
fn improvements_never_regress() {
    let result = detect(
        &summary(1000.0, 80.0, 4, 20),
        &summary(500.0, 10.0, 0, 20),
        &RegressionThresholds::default(),
    );

    assert_eq!(result.execution_time_change, -50.0);
    assert!(result.memory_change < 0.0);
    assert!(result.failure_rate_change < 0.0);
    assert!(!result.has_regression);
}

#[test]
fn zero_baseline_is_not_comparable() {
    let result = detect(
        &summary(0.0, 0.0, 0, 20),
        &summary(100.0, 64.0, 0, 20),
        &RegressionThresholds::default(),
    );

    assert_eq!(result.execution_time_change, 0.0);
    assert_eq!(result.memory_change, 0.0);
    assert!(!result.execution_time_regression);
    assert!(!result.memory_regression);
}

#[test]
fn change_equal_to_threshold_is_not_regression() {
    let thresholds = RegressionThresholds {
        execution_time_percent: 50.0,
        ..RegressionThresholds::default()
    };

    let result = detect(
        &summary(100.0, 50.0, 0, 20),
        &summary(150.0, 50.0, 0, 20),
        &thresholds,
    );

    assert_eq!(result.execution_time_change, 50.0);
    assert!(!result.execution_time_regression);
}

#[test]
fn failure_rate_is_compared_in_points() {
    let result = detect(
        &summary(100.0, 50.0, 0, 20),
        &summary(100.0, 50.0, 2, 20),
        &RegressionThresholds::default(),
    );

    assert!((result.failure_rate_change - 0.1).abs() < EPSILON);
    assert!(result.failure_rate_regression);
    assert_eq!(
        result.recommendations,
        vec!["Failure rate increased by 10.0% (threshold: 5.0%)".to_owned()]
    );
}

#[test]
fn recommendations_follow_fixed_order() {
    let result = detect(
        &summary(100.0, 50.0, 0, 20),
        &summary(200.0, 100.0, 10, 20),
        &RegressionThresholds::default(),
    );

    assert_eq!(result.recommendations.len(), 3);
    assert!(result.recommendations[0].starts_with("Execution time"));
    assert!(result.recommendations[1].starts_with("Memory usage"));
    assert!(result.recommendations[2].starts_with("Failure rate"));
}

#[test]
fn identical_inputs_produce_identical_results() {
    let baseline = summary(100.0, 50.0, 1, 20);
    let current = summary(130.0, 52.0, 3, 20);
    let thresholds = RegressionThresholds::default();

    assert_eq!(
        detect(&baseline, &current, &thresholds),
        detect(&baseline, &current, &thresholds)
    );
}

#[test]
fn relative_change() {
    assert_eq!(relative_change_percent(200.0, 300.0), 50.0);
    assert_eq!(relative_change_percent(200.0, 100.0), -50.0);
    assert_eq!(relative_change_percent(0.0, 100.0), 0.0);
}
