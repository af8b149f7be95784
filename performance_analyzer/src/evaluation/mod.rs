//!
//! The single evaluation pipeline shared by every entry point.
//!


use chrono::DateTime;
use chrono::Utc;

use crate::comparison::Comparison;
use crate::gate;
use crate::gate::GateDecision;
use crate::metrics::Metrics;
use crate::model::result_set::ResultSet;
use crate::recommendation;
use crate::regression;
use crate::regression::RegressionResult;
use crate::summary::statistics::Statistics;
use crate::summary::status::Status;
use crate::summary::PerformanceSummary;
use crate::thresholds::Thresholds;

///
/// The outcome of evaluating one current result set.
///
/// Extraction, detection, the gate, and the remediation hints run exactly once.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The thresholds the run was evaluated with.
    pub thresholds: Thresholds,
    /// The current metrics.
    pub current: Metrics,
    /// The baseline metrics, if a baseline was provided.
    pub baseline: Option<Metrics>,
    /// The regression detection result, if a baseline was provided.
    pub regression: Option<RegressionResult>,
    /// The absolute gate decision.
    pub gate: GateDecision,
    /// The number of failed benchmarks as reported by the input.
    pub failed_count: u64,
    /// The descriptive statistics of the current results.
    pub statistics: Statistics,
    /// The remediation hints.
    pub remediation: Vec<String>,
}

impl Evaluation {
    ///
    /// Evaluates the current results, comparing them against the baseline if there is one.
    ///
    pub fn new(
        current: &ResultSet,
        baseline: Option<&ResultSet>,
        thresholds: &Thresholds,
    ) -> Self {
        let current_metrics = Metrics::from(current);
        let baseline_metrics = baseline.map(Metrics::from);
        let regression = baseline_metrics.as_ref().map(|baseline_metrics| {
            regression::detect(baseline_metrics, &current_metrics, &thresholds.regression)
        });
        let regression_detected = regression
            .as_ref()
            .map(|regression| regression.has_regression)
            .unwrap_or_default();

        Self::assemble(
            current,
            current_metrics,
            baseline_metrics,
            regression,
            regression_detected,
            thresholds,
        )
    }

    ///
    /// Gates a result set with a regression flag computed elsewhere, for example
    /// the `regression_detected` field of a pre-aggregated summary.
    ///
    pub fn with_regression_flag(
        current: &ResultSet,
        regression_detected: bool,
        thresholds: &Thresholds,
    ) -> Self {
        Self::assemble(
            current,
            Metrics::from(current),
            None,
            None,
            regression_detected,
            thresholds,
        )
    }

    ///
    /// Whether the run passes: the gate with the regression flag passed, and the
    /// run has at least one successful benchmark.
    ///
    pub fn is_successful(&self) -> bool {
        self.gate.passed && self.status_failure().is_none()
    }

    ///
    /// Returns the run-level failure message for a run without any result or
    /// without any successful benchmark.
    ///
    pub fn status_failure(&self) -> Option<String> {
        match self.status() {
            Status::Error => Some(recommendation::no_results()),
            Status::Failed => Some(recommendation::all_failed()),
            Status::Pass | Status::Partial | Status::Regression => None,
        }
    }

    ///
    /// Prints the gate checks and the verdict of the run.
    ///
    pub fn print_gate(&self) {
        self.gate.print(self.failed_count, self.status_failure().as_deref());
    }

    ///
    /// Whether a regression was detected or reported.
    ///
    pub fn has_regression(&self) -> bool {
        self.gate.regression_detected
    }

    ///
    /// Returns the overall status.
    ///
    pub fn status(&self) -> Status {
        Status::derive(&self.current, self.has_regression())
    }

    ///
    /// Returns the detailed comparison, if a baseline was provided.
    ///
    pub fn comparison(&self) -> Option<Comparison> {
        match (self.baseline, self.regression.as_ref()) {
            (Some(baseline), Some(regression)) => {
                Some(Comparison::new(baseline, self.current, regression))
            }
            _ => None,
        }
    }

    ///
    /// Returns the recommendations in their fixed order: the status message for
    /// degenerate runs, the regression recommendations, then the gate failure reasons.
    ///
    pub fn recommendations(&self) -> Vec<String> {
        let mut recommendations: Vec<String> = self.status_failure().into_iter().collect();
        if let Some(regression) = self.regression.as_ref() {
            recommendations.extend(regression.recommendations.iter().cloned());
        }
        recommendations.extend(self.gate.reasons.iter().cloned());
        recommendations
    }

    ///
    /// Builds the performance summary stamped with the given time.
    ///
    pub fn summary(&self, timestamp: DateTime<Utc>) -> PerformanceSummary {
        PerformanceSummary {
            status: self.status(),
            avg_execution_time: self.current.avg_execution_time_ms,
            memory_usage: self.current.avg_memory_usage_mb,
            regression_detected: self.has_regression() || self.status() == Status::Failed,
            successful_benchmarks: self.current.successful_count,
            failed_benchmarks: self.failed_count,
            total_benchmarks: self.current.total_count,
            recommendations: self.recommendations(),
            timestamp,
        }
    }

    ///
    /// Runs the gate and collects the remaining outputs.
    ///
    fn assemble(
        current: &ResultSet,
        current_metrics: Metrics,
        baseline_metrics: Option<Metrics>,
        regression: Option<RegressionResult>,
        regression_detected: bool,
        thresholds: &Thresholds,
    ) -> Self {
        let gate = gate::check(&current_metrics, regression_detected, &thresholds.gate);
        let statistics = Statistics::new(current, &current_metrics);
        let remediation =
            recommendation::remediation(&current_metrics, &statistics, &thresholds.gate);

        Self {
            thresholds: *thresholds,
            current: current_metrics,
            baseline: baseline_metrics,
            regression,
            gate,
            failed_count: current.failed_count(),
            statistics,
            remediation,
        }
    }
}
