//!
//! The absolute performance gate.
//!

mod tests;

use colored::Colorize;

use crate::metrics::Metrics;
use crate::recommendation;
use crate::thresholds::GateThresholds;

///
/// The gate decision, echoing its inputs for auditing.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GateDecision {
    /// Whether every check passed.
    pub passed: bool,
    /// The failure reasons, empty if and only if the gate passed.
    pub reasons: Vec<String>,
    /// The evaluated metrics.
    pub metrics: Metrics,
    /// The regression flag the gate consumed.
    pub regression_detected: bool,
    /// The ceilings the metrics were checked against.
    pub thresholds: GateThresholds,
}

impl GateDecision {
    ///
    /// Prints the checked values and the verdict to the terminal.
    ///
    /// `failed_count` is the failed benchmark count as reported by the input, and
    /// `status_failure` is a run-level failure that overrides a passing gate.
    ///
    pub fn print(&self, failed_count: u64, status_failure: Option<&str>) {
        println!("Checking performance gate...");
        println!(
            "  Execution time: {:.2}ms (max: {:.1}ms)",
            self.metrics.avg_execution_time_ms, self.thresholds.max_execution_time_ms
        );
        println!(
            "  Memory usage: {:.2}MB (max: {:.1}MB)",
            self.metrics.avg_memory_usage_mb, self.thresholds.max_memory_usage_mb
        );
        println!("  Failed benchmarks: {failed_count}/{}", self.metrics.total_count);
        println!("  Regression detected: {}", self.regression_detected);

        if let Some(message) = status_failure {
            println!("  {}: {message}", "FAIL".bright_red().bold());
        } else if self.passed {
            println!("  {}: All performance gates passed", "PASS".bright_green().bold());
        }
        for reason in self.reasons.iter() {
            println!("  {}: {reason}", "FAIL".bright_red().bold());
        }
    }
}

///
/// Checks the current metrics against the absolute ceilings and the regression flag.
///
/// All checks are evaluated so that every failure reason is reported at once.
/// The failure rate check is skipped for a run without benchmarks.
///
pub fn check(
    current: &Metrics,
    regression_detected: bool,
    thresholds: &GateThresholds,
) -> GateDecision {
    let mut reasons = Vec::with_capacity(4);

    if current.avg_execution_time_ms > thresholds.max_execution_time_ms {
        reasons.push(recommendation::gate_execution_time(
            current.avg_execution_time_ms,
            thresholds.max_execution_time_ms,
        ));
    }
    if current.avg_memory_usage_mb > thresholds.max_memory_usage_mb {
        reasons.push(recommendation::gate_memory_usage(
            current.avg_memory_usage_mb,
            thresholds.max_memory_usage_mb,
        ));
    }
    if current.total_count > 0 && current.failure_rate > thresholds.max_failure_rate {
        reasons.push(recommendation::gate_failure_rate(
            current.failure_rate,
            thresholds.max_failure_rate,
        ));
    }
    if regression_detected {
        reasons.push(recommendation::gate_regression());
    }

    GateDecision {
        passed: reasons.is_empty(),
        reasons,
        metrics: *current,
        regression_detected,
        thresholds: *thresholds,
    }
}
