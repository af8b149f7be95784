//!
//! The human-readable recommendations.
//!
//! Every message is a pure function of already computed metrics and thresholds,
//! so identical inputs always produce byte-identical lists.
//!


use crate::metrics::Metrics;
use crate::summary::statistics::Statistics;
use crate::thresholds::GateThresholds;
use crate::thresholds::RegressionThresholds;

/// The failure rate above which a remediation hint is emitted.
pub const HIGH_FAILURE_RATE: f64 = 0.1;

///
/// Formats a share as a percentage with one decimal.
///
fn percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

///
/// The current run produced too few successful benchmarks to be judged.
///
pub fn insufficient_benchmarks(successful_count: u64, min_benchmarks: u64) -> String {
    format!("Insufficient successful benchmarks: {successful_count} < {min_benchmarks}")
}

///
/// The execution time regressed.
///
pub fn execution_time_regression(change_percent: f64, threshold_percent: f64) -> String {
    format!(
        "Execution time increased by {change_percent:.1}% (threshold: {threshold_percent:.1}%)"
    )
}

///
/// The memory usage regressed.
///
pub fn memory_regression(change_percent: f64, threshold_percent: f64) -> String {
    format!("Memory usage increased by {change_percent:.1}% (threshold: {threshold_percent:.1}%)")
}

///
/// The failure rate regressed.
///
pub fn failure_rate_regression(change: f64, threshold_percent: f64) -> String {
    format!(
        "Failure rate increased by {} (threshold: {threshold_percent:.1}%)",
        percent(change)
    )
}

///
/// None of the metrics crossed its threshold.
///
pub fn no_regression(
    execution_time_change: f64,
    memory_change: f64,
    failure_rate_change: f64,
    thresholds: &RegressionThresholds,
) -> String {
    format!(
        "No significant performance regression detected (execution time {execution_time_change:+.1}% vs {:.1}%, memory usage {memory_change:+.1}% vs {:.1}%, failure rate {:+.1}% vs {:.1}%)",
        thresholds.execution_time_percent,
        thresholds.memory_usage_percent,
        failure_rate_change * 100.0,
        thresholds.failure_rate_increase_percent,
    )
}

///
/// The average execution time is above the ceiling.
///
pub fn gate_execution_time(value: f64, max: f64) -> String {
    format!("Average execution time {value:.2}ms exceeds threshold {max:.1}ms")
}

///
/// The average memory usage is above the ceiling.
///
pub fn gate_memory_usage(value: f64, max: f64) -> String {
    format!("Average memory usage {value:.2}MB exceeds threshold {max:.1}MB")
}

///
/// The failure rate is above the ceiling.
///
pub fn gate_failure_rate(value: f64, max: f64) -> String {
    format!(
        "Failure rate {} exceeds threshold {}",
        percent(value),
        percent(max)
    )
}

///
/// A regression against the baseline was reported.
///
pub fn gate_regression() -> String {
    "Performance regression detected".to_owned()
}

///
/// There were no benchmark results at all.
///
pub fn no_results() -> String {
    "No benchmark results found".to_owned()
}

///
/// Every benchmark failed.
///
pub fn all_failed() -> String {
    "All benchmarks failed".to_owned()
}

///
/// Derives the remediation hints for the current run.
///
/// Order: slow operations, memory, failure rate, then slow suites in lexicographic order.
///
pub fn remediation(
    metrics: &Metrics,
    statistics: &Statistics,
    gate: &GateThresholds,
) -> Vec<String> {
    let mut hints = Vec::new();
    if metrics.total_count == 0 {
        hints.push("No benchmark results available for analysis".to_owned());
        return hints;
    }

    if metrics.successful_count > 0 {
        if metrics.avg_execution_time_ms > gate.max_execution_time_ms {
            hints.push(format!(
                "Consider optimizing slow operations (avg: {:.2}ms)",
                metrics.avg_execution_time_ms
            ));
        }
        if metrics.avg_memory_usage_mb > gate.max_memory_usage_mb {
            hints.push(format!(
                "Consider reducing memory usage (avg: {:.2}MB)",
                metrics.avg_memory_usage_mb
            ));
        }
    }
    if metrics.failure_rate > HIGH_FAILURE_RATE {
        hints.push(format!(
            "High failure rate detected: {}",
            percent(metrics.failure_rate)
        ));
    }
    for (suite, suite_statistics) in statistics.per_suite.iter() {
        if suite_statistics.successful_benchmarks > 0
            && suite_statistics.avg_execution_time > gate.max_execution_time_ms
        {
            hints.push(format!(
                "Optimize {suite} suite (avg: {:.2}ms)",
                suite_statistics.avg_execution_time
            ));
        }
    }

    hints
}
