//!
//! A pre-aggregated benchmark summary.
//!

use serde_json::Map;
use serde_json::Value;

use crate::util::json;

///
/// A pre-aggregated benchmark summary, the second accepted input shape.
///
/// It carries already reduced fields and no individual records.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedSummary {
    /// The average execution time in milliseconds.
    pub avg_execution_time: f64,
    /// The average memory usage in megabytes.
    pub memory_usage: f64,
    /// The number of successful benchmarks.
    pub successful_benchmarks: u64,
    /// The total number of benchmarks.
    pub total_benchmarks: u64,
    /// The number of failed benchmarks.
    pub failed_benchmarks: u64,
    /// Whether the producer of the summary detected a regression.
    pub regression_detected: bool,
    /// The recommendations attached by the producer of the summary.
    pub recommendations: Vec<String>,
}

impl From<&Map<String, Value>> for AggregatedSummary {
    fn from(map: &Map<String, Value>) -> Self {
        Self {
            avg_execution_time: json::non_negative_f64(map.get("avg_execution_time")),
            memory_usage: json::non_negative_f64(map.get("memory_usage")),
            successful_benchmarks: json::non_negative_u64(map.get("successful_benchmarks")),
            total_benchmarks: json::non_negative_u64(map.get("total_benchmarks")),
            failed_benchmarks: json::non_negative_u64(map.get("failed_benchmarks")),
            regression_detected: json::boolean(map.get("regression_detected")),
            recommendations: json::strings(map.get("recommendations")),
        }
    }
}
