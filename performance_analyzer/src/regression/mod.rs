//!
//! The regression detection against a baseline.
//!

mod tests;

use crate::metrics::Metrics;
use crate::recommendation;
use crate::thresholds::RegressionThresholds;

///
/// The classified comparison of the current metrics against the baseline.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RegressionResult {
    /// Whether the run is considered regressed.
    pub has_regression: bool,
    /// Whether the execution time regressed.
    pub execution_time_regression: bool,
    /// Whether the memory usage regressed.
    pub memory_regression: bool,
    /// Whether the failure rate regressed.
    pub failure_rate_regression: bool,
    /// The signed execution time change, in percent.
    pub execution_time_change: f64,
    /// The signed memory usage change, in percent.
    pub memory_change: f64,
    /// The signed failure rate change, as an absolute share.
    pub failure_rate_change: f64,
    /// The recommendations, in the fixed order time, memory, failure rate.
    pub recommendations: Vec<String>,
}

impl RegressionResult {
    ///
    /// The forced regression for a run without enough successful benchmarks.
    ///
    pub fn insufficient_data(successful_count: u64, min_benchmarks: u64) -> Self {
        Self {
            has_regression: true,
            execution_time_regression: false,
            memory_regression: false,
            failure_rate_regression: false,
            execution_time_change: 0.0,
            memory_change: 0.0,
            failure_rate_change: 0.0,
            recommendations: vec![recommendation::insufficient_benchmarks(
                successful_count,
                min_benchmarks,
            )],
        }
    }
}

///
/// Computes the signed relative change in percent.
///
/// A non-positive baseline means no comparison is possible and yields `0.0`.
///
pub fn relative_change_percent(baseline: f64, current: f64) -> f64 {
    if baseline > 0.0 {
        (current - baseline) / baseline * 100.0
    } else {
        0.0
    }
}

///
/// Compares the current metrics against the baseline.
///
/// Only worsening changes strictly above their threshold are flagged.
/// A run with fewer than `min_benchmarks` successful benchmarks is always regressed.
///
pub fn detect(
    baseline: &Metrics,
    current: &Metrics,
    thresholds: &RegressionThresholds,
) -> RegressionResult {
    if current.successful_count < thresholds.min_benchmarks {
        return RegressionResult::insufficient_data(
            current.successful_count,
            thresholds.min_benchmarks,
        );
    }

    let execution_time_change = relative_change_percent(
        baseline.avg_execution_time_ms,
        current.avg_execution_time_ms,
    );
    let memory_change =
        relative_change_percent(baseline.avg_memory_usage_mb, current.avg_memory_usage_mb);
    let failure_rate_change = current.failure_rate - baseline.failure_rate;

    let execution_time_regression = execution_time_change > thresholds.execution_time_percent;
    let memory_regression = memory_change > thresholds.memory_usage_percent;
    let failure_rate_regression =
        failure_rate_change > thresholds.failure_rate_increase_percent / 100.0;
    let has_regression = execution_time_regression || memory_regression || failure_rate_regression;

    let mut recommendations = Vec::with_capacity(3);
    if execution_time_regression {
        recommendations.push(recommendation::execution_time_regression(
            execution_time_change,
            thresholds.execution_time_percent,
        ));
    }
    if memory_regression {
        recommendations.push(recommendation::memory_regression(
            memory_change,
            thresholds.memory_usage_percent,
        ));
    }
    if failure_rate_regression {
        recommendations.push(recommendation::failure_rate_regression(
            failure_rate_change,
            thresholds.failure_rate_increase_percent,
        ));
    }
    if !has_regression {
        recommendations.push(recommendation::no_regression(
            execution_time_change,
            memory_change,
            failure_rate_change,
            thresholds,
        ));
    }

    RegressionResult {
        has_regression,
        execution_time_regression,
        memory_regression,
        failure_rate_regression,
        execution_time_change,
        memory_change,
        failure_rate_change,
        recommendations,
    }
}
