//!
//! The descriptive statistics of a result set.
//!

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::metrics::Metrics;
use crate::model::record::BenchmarkRecord;
use crate::model::result_set::ResultSet;
use crate::util;

///
/// The statistics of a single suite.
///
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct SuiteStatistics {
    /// The total number of benchmarks in the suite.
    pub total_benchmarks: u64,
    /// The number of successful benchmarks in the suite.
    pub successful_benchmarks: u64,
    /// The share of successful benchmarks.
    pub success_rate: f64,
    /// The average execution time of the successful benchmarks in milliseconds.
    pub avg_execution_time: f64,
}

///
/// The descriptive statistics of a result set, used for grouping and reporting only.
///
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Statistics {
    /// The total number of benchmarks.
    pub total_benchmarks: u64,
    /// The number of successful benchmarks.
    pub successful_benchmarks: u64,
    /// The number of failed benchmarks.
    pub failed_benchmarks: u64,
    /// The share of successful benchmarks.
    pub success_rate: f64,
    /// The average execution time of the successful benchmarks in milliseconds.
    pub avg_execution_time: f64,
    /// The average memory usage of the successful benchmarks in megabytes.
    pub avg_memory_usage: f64,
    /// The distinct suites.
    pub suites: Vec<String>,
    /// The distinct platforms.
    pub platforms: Vec<String>,
    /// The distinct toolchain versions.
    pub tool_versions: Vec<String>,
    /// The statistics per suite.
    pub per_suite: BTreeMap<String, SuiteStatistics>,
}

impl Statistics {
    ///
    /// Collects the distinct non-empty values of a record field, sorted.
    ///
    fn distinct<F>(records: &[BenchmarkRecord], field: F) -> Vec<String>
    where
        F: Fn(&BenchmarkRecord) -> &str,
    {
        records
            .iter()
            .map(field)
            .filter(|value| !value.is_empty())
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    ///
    /// Builds the statistics of a result set from its already extracted metrics.
    ///
    pub fn new(result_set: &ResultSet, metrics: &Metrics) -> Self {
        let records = result_set.records();

        let mut per_suite: BTreeMap<String, (SuiteStatistics, Vec<f64>)> = BTreeMap::new();
        for record in records.iter() {
            let (suite, times) = per_suite.entry(record.suite.clone()).or_default();
            suite.total_benchmarks += 1;
            if record.success {
                suite.successful_benchmarks += 1;
                times.push(record.execution_time_ms);
            }
        }
        let per_suite = per_suite
            .into_iter()
            .map(|(name, (mut suite, times))| {
                suite.success_rate = util::ratio(suite.successful_benchmarks, suite.total_benchmarks);
                suite.avg_execution_time = util::mean(times);
                (name, suite)
            })
            .collect::<BTreeMap<String, SuiteStatistics>>();

        let failed_benchmarks = result_set.failed_count();
        let successful_benchmarks = match result_set.aggregated() {
            Some(_) => metrics.successful_count,
            None => metrics.total_count - failed_benchmarks,
        };

        Self {
            total_benchmarks: metrics.total_count,
            successful_benchmarks,
            failed_benchmarks,
            success_rate: util::ratio(successful_benchmarks, metrics.total_count),
            avg_execution_time: metrics.avg_execution_time_ms,
            avg_memory_usage: metrics.avg_memory_usage_mb,
            suites: per_suite.keys().cloned().collect(),
            platforms: Self::distinct(records, |record| record.platform.as_str()),
            tool_versions: Self::distinct(records, |record| record.tool_version.as_str()),
            per_suite,
        }
    }
}
