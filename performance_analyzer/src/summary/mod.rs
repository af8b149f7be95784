//!
//! The performance summary for CI and report consumers.
//!

pub mod statistics;
pub mod status;


use chrono::DateTime;
use chrono::Utc;
use colored::Colorize;

use self::status::Status;

///
/// The performance summary, mirroring the pre-aggregated input shape.
///
/// Written as `performance-summary.json` and accepted back as an input.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PerformanceSummary {
    /// The overall status.
    pub status: Status,
    /// The average execution time of the successful benchmarks in milliseconds.
    pub avg_execution_time: f64,
    /// The average memory usage of the successful benchmarks in megabytes.
    pub memory_usage: f64,
    /// Whether a regression against the baseline was detected, or every benchmark failed.
    pub regression_detected: bool,
    /// The number of successful benchmarks.
    pub successful_benchmarks: u64,
    /// The number of failed benchmarks.
    pub failed_benchmarks: u64,
    /// The total number of benchmarks.
    pub total_benchmarks: u64,
    /// The recommendations.
    pub recommendations: Vec<String>,
    /// The time the summary was produced at.
    pub timestamp: DateTime<Utc>,
}

impl PerformanceSummary {
    ///
    /// Prints the summary to the terminal.
    ///
    pub fn print(&self) {
        let status = match self.status {
            Status::Pass => self.status.to_string().bright_green(),
            Status::Partial => self.status.to_string().bright_yellow(),
            Status::Regression | Status::Failed | Status::Error => {
                self.status.to_string().bright_red()
            }
        };

        println!("Performance Analysis Summary");
        println!("{}", "=".repeat(30));
        println!("Status: {}", status.bold());
        println!("Average execution time: {:.2}ms", self.avg_execution_time);
        println!("Memory usage: {:.2}MB", self.memory_usage);
        println!("Regression detected: {}", self.regression_detected);
        println!(
            "Failed benchmarks: {}/{}",
            self.failed_benchmarks, self.total_benchmarks
        );
        if !self.recommendations.is_empty() {
            println!();
            println!("Recommendations:");
            for recommendation in self.recommendations.iter() {
                println!("  - {recommendation}");
            }
        }
    }
}
