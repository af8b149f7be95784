//!
//! Tests for the performance gate.
//!

#![cfg(test)]

use crate::gate::check;
use crate::metrics::Metrics;
use crate::thresholds::GateThresholds;

#[test]
fn healthy_run_passes() {
    let decision = check(
        &Metrics::new(250.0, 40.0, 0.0, 20, 20),
        false,
        &GateThresholds::default(),
    );

    assert!(decision.passed);
    assert!(decision.reasons.is_empty());
}

#[test]
fn every_failing_check_is_reported() {
    let thresholds = GateThresholds {
        max_failure_rate: 0.0,
        ..GateThresholds::default()
    };

    let decision = check(&Metrics::new(1500.0, 40.0, 0.02, 49, 50), true, &thresholds);

    assert!(!decision.passed);
    assert_eq!(
        decision.reasons,
        vec![
            "Average execution time 1500.00ms exceeds threshold 1000.0ms".to_owned(),
            "Failure rate 2.0% exceeds threshold 0.0%".to_owned(),
            "Performance regression detected".to_owned(),
        ]
    );
}

#[test]
fn failure_rate_alone_fails() {
    let decision = check(
        &Metrics::new(10.0, 1.0, 0.02, 49, 50),
        false,
        &GateThresholds::default(),
    );

    assert!(!decision.passed);
    assert_eq!(decision.reasons.len(), 1);
    assert!(decision.reasons[0].starts_with("Failure rate"));
}

#[test]
fn memory_ceiling_is_strict() {
    let thresholds = GateThresholds::default();

    let at_ceiling = check(&Metrics::new(10.0, 100.0, 0.0, 5, 5), false, &thresholds);
    let above_ceiling = check(&Metrics::new(10.0, 100.5, 0.0, 5, 5), false, &thresholds);

    assert!(at_ceiling.passed);
    assert!(!above_ceiling.passed);
    assert_eq!(
        above_ceiling.reasons,
        vec!["Average memory usage 100.50MB exceeds threshold 100.0MB".to_owned()]
    );
}

#[test]
fn empty_run_passes_failure_rate_check_vacuously() {
    let decision = check(
        &Metrics::new(0.0, 0.0, 1.0, 0, 0),
        false,
        &GateThresholds::default(),
    );

    assert!(decision.passed);
}

#[test]
fn regression_flag_alone_fails() {
    let decision = check(
        &Metrics::new(10.0, 1.0, 0.0, 5, 5),
        true,
        &GateThresholds::default(),
    );

    assert!(!decision.passed);
    assert_eq!(decision.reasons, vec!["Performance regression detected".to_owned()]);
}

#[test]
fn inputs_are_echoed() {
    let metrics = Metrics::new(10.0, 1.0, 0.0, 5, 5);
    let thresholds = GateThresholds::default();

    let decision = check(&metrics, false, &thresholds);

    assert_eq!(decision.metrics, metrics);
    assert_eq!(decision.thresholds, thresholds);
    assert!(!decision.regression_detected);
}
