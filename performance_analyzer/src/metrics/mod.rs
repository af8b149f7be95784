//!
//! The canonical metrics reduction.
//!

mod tests;

use crate::model::result_set::ResultSet;
use crate::model::result_set::Shape;
use crate::util;

/// The number of bytes in a megabyte.
pub const BYTES_PER_MEGABYTE: f64 = 1_048_576.0;

///
/// The canonical reduction of a result set all downstream logic operates on.
///
/// Invariants: `successful_count <= total_count` and `0 <= failure_rate <= 1`.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct Metrics {
    /// The average execution time of the successful benchmarks in milliseconds.
    #[serde(rename = "execution_time")]
    pub avg_execution_time_ms: f64,
    /// The average memory usage of the successful benchmarks in megabytes.
    #[serde(rename = "memory_usage")]
    pub avg_memory_usage_mb: f64,
    /// The share of failed benchmarks.
    pub failure_rate: f64,
    /// The number of successful benchmarks.
    #[serde(rename = "successful_benchmarks")]
    pub successful_count: u64,
    /// The total number of benchmarks.
    #[serde(rename = "total_benchmarks")]
    pub total_count: u64,
}

impl Metrics {
    ///
    /// A shortcut constructor.
    ///
    /// Clamps the counts and the failure rate into their valid ranges.
    ///
    pub fn new(
        avg_execution_time_ms: f64,
        avg_memory_usage_mb: f64,
        failure_rate: f64,
        successful_count: u64,
        total_count: u64,
    ) -> Self {
        Self {
            avg_execution_time_ms,
            avg_memory_usage_mb,
            failure_rate: if failure_rate.is_nan() {
                0.0
            } else {
                failure_rate.clamp(0.0, 1.0)
            },
            successful_count: successful_count.min(total_count),
            total_count,
        }
    }

    ///
    /// The sentinel for a record list without a single successful benchmark.
    ///
    pub fn total_failure(total_count: u64) -> Self {
        Self::new(0.0, 0.0, 1.0, 0, total_count)
    }

    ///
    /// Whether any benchmark failed.
    ///
    pub fn has_failures(&self) -> bool {
        self.failure_rate > 0.0
    }
}

impl From<&ResultSet> for Metrics {
    fn from(result_set: &ResultSet) -> Self {
        extract(result_set)
    }
}

///
/// Reduces a result set to the metrics tuple.
///
/// Pure and total: missing or malformed data degrades to zeros.
///
pub fn extract(result_set: &ResultSet) -> Metrics {
    match &result_set.shape {
        Shape::RawRecords(records) => {
            let total_count = records.len() as u64;
            let successful: Vec<_> = records.iter().filter(|record| record.success).collect();
            if successful.is_empty() {
                return Metrics::total_failure(total_count);
            }

            let successful_count = successful.len() as u64;
            let avg_execution_time_ms =
                util::mean(successful.iter().map(|record| record.execution_time_ms));
            let avg_memory_usage_mb = util::mean(
                successful
                    .iter()
                    .map(|record| record.memory_usage_bytes as f64),
            ) / BYTES_PER_MEGABYTE;
            let failure_rate = util::ratio(total_count - successful_count, total_count);

            Metrics::new(
                avg_execution_time_ms,
                avg_memory_usage_mb,
                failure_rate,
                successful_count,
                total_count,
            )
        }
        Shape::AggregatedSummary(summary) => Metrics::new(
            summary.avg_execution_time,
            summary.memory_usage,
            (summary.failed_benchmarks as f64) / (summary.total_benchmarks.max(1) as f64),
            summary.successful_benchmarks,
            summary.total_benchmarks,
        ),
        Shape::Empty => Metrics::default(),
    }
}
