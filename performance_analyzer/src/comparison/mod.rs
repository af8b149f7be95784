//!
//! The detailed baseline comparison for audit and report consumers.
//!

use std::fmt::Write;

use colored::Colorize;

use crate::metrics::Metrics;
use crate::regression::RegressionResult;

///
/// The signed changes between the baseline and the current run.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Changes {
    /// The execution time change, in percent.
    pub execution_time_percent: f64,
    /// The memory usage change, in percent.
    pub memory_usage_percent: f64,
    /// The failure rate change, as an absolute share.
    pub failure_rate_absolute: f64,
}

///
/// The per-metric regression flags.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Regressions {
    /// Whether the execution time regressed.
    pub execution_time: bool,
    /// Whether the memory usage regressed.
    pub memory_usage: bool,
    /// Whether the failure rate regressed.
    pub failure_rate: bool,
}

///
/// The detailed baseline comparison.
///
/// Written as `performance-comparison.json`.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Comparison {
    /// The baseline metrics.
    pub baseline: Metrics,
    /// The current metrics.
    pub current: Metrics,
    /// The signed changes.
    pub changes: Changes,
    /// The per-metric regression flags.
    pub regressions: Regressions,
    /// Whether the run is considered regressed.
    #[serde(skip)]
    pub has_regression: bool,
    /// The regression recommendations.
    #[serde(skip)]
    pub recommendations: Vec<String>,
}

impl Comparison {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(baseline: Metrics, current: Metrics, result: &RegressionResult) -> Self {
        Self {
            baseline,
            current,
            changes: Changes {
                execution_time_percent: result.execution_time_change,
                memory_usage_percent: result.memory_change,
                failure_rate_absolute: result.failure_rate_change,
            },
            regressions: Regressions {
                execution_time: result.execution_time_regression,
                memory_usage: result.memory_regression,
                failure_rate: result.failure_rate_regression,
            },
            has_regression: result.has_regression,
            recommendations: result.recommendations.clone(),
        }
    }

    ///
    /// Renders the plain-text comparison report.
    ///
    pub fn to_text(&self) -> String {
        let mut report = String::with_capacity(1024);
        report.push_str("Performance Comparison Report\n");
        report.push_str("============================\n\n");
        writeln!(
            report,
            "Overall Status: {}",
            if self.has_regression {
                "REGRESSION DETECTED"
            } else {
                "NO REGRESSION"
            }
        )
        .expect("Always valid");
        report.push('\n');
        self.write_sections(&mut report, |line| line.to_owned())
            .expect("Always valid");
        report.push('\n');
        report.push_str("Recommendations:\n");
        for recommendation in self.recommendations.iter() {
            writeln!(report, "  - {recommendation}").expect("Always valid");
        }
        report
    }

    ///
    /// Prints the comparison table to the terminal.
    ///
    pub fn print(&self) {
        let mut table = String::with_capacity(1024);
        self.write_sections(&mut table, |line| line.bright_white().to_string())
            .expect("Always valid");

        println!("Performance Comparison");
        println!("{}", "=".repeat(30));
        print!("{table}");
        println!();
        println!("Regression Analysis");
        println!("{}", "=".repeat(20));
        println!("Regression detected: {}", Self::flag(self.has_regression));
        println!(
            "Execution time regression: {}",
            Self::flag(self.regressions.execution_time)
        );
        println!("Memory regression: {}", Self::flag(self.regressions.memory_usage));
        println!(
            "Failure rate regression: {}",
            Self::flag(self.regressions.failure_rate)
        );
    }

    ///
    /// Writes the baseline, current, and change lines of every metric.
    ///
    fn write_sections<W, F>(&self, w: &mut W, title: F) -> std::fmt::Result
    where
        W: Write,
        F: Fn(&str) -> String,
    {
        let baseline = &self.baseline;
        let current = &self.current;

        writeln!(w, "{}", title("Execution Time:"))?;
        writeln!(w, "  Baseline: {:.2}ms", baseline.avg_execution_time_ms)?;
        writeln!(w, "  Current:  {:.2}ms", current.avg_execution_time_ms)?;
        writeln!(w, "  Change:   {:+.1}%", self.changes.execution_time_percent)?;
        writeln!(w)?;
        writeln!(w, "{}", title("Memory Usage:"))?;
        writeln!(w, "  Baseline: {:.2}MB", baseline.avg_memory_usage_mb)?;
        writeln!(w, "  Current:  {:.2}MB", current.avg_memory_usage_mb)?;
        writeln!(w, "  Change:   {:+.1}%", self.changes.memory_usage_percent)?;
        writeln!(w)?;
        writeln!(w, "{}", title("Failure Rate:"))?;
        writeln!(w, "  Baseline: {:.1}%", baseline.failure_rate * 100.0)?;
        writeln!(w, "  Current:  {:.1}%", current.failure_rate * 100.0)?;
        writeln!(
            w,
            "  Change:   {:+.1}%",
            self.changes.failure_rate_absolute * 100.0
        )?;
        writeln!(w)?;
        writeln!(w, "{}", title("Benchmark Count:"))?;
        writeln!(
            w,
            "  Baseline: {}/{} successful",
            baseline.successful_count, baseline.total_count
        )?;
        writeln!(
            w,
            "  Current:  {}/{} successful",
            current.successful_count, current.total_count
        )?;
        Ok(())
    }

    ///
    /// Colorizes a regression flag.
    ///
    fn flag(value: bool) -> colored::ColoredString {
        if value {
            "true".bright_red()
        } else {
            "false".green()
        }
    }
}
