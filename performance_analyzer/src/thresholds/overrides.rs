//!
//! The threshold command line arguments shared by the binaries.
//!

use std::path::PathBuf;

use crate::thresholds::Thresholds;
use crate::thresholds::DEFAULT_EXECUTION_TIME_PERCENT;
use crate::thresholds::DEFAULT_FAILURE_RATE_INCREASE_PERCENT;
use crate::thresholds::DEFAULT_MAX_EXECUTION_TIME_MS;
use crate::thresholds::DEFAULT_MAX_FAILURE_RATE;
use crate::thresholds::DEFAULT_MAX_MEMORY_USAGE_MB;
use crate::thresholds::DEFAULT_MEMORY_USAGE_PERCENT;
use crate::thresholds::DEFAULT_MIN_BENCHMARKS;

///
/// The threshold command line arguments shared by the binaries.
///
/// Precedence, last wins: built-in defaults, the `--config` file, the individual flags.
///
#[derive(Debug, Default, Clone, clap::Args)]
pub struct Overrides {
    /// JSON file with threshold settings; omitted fields keep their defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(
        long = "threshold",
        help = format!(
            "Execution time regression threshold, in percent [default: {DEFAULT_EXECUTION_TIME_PERCENT:.1}]"
        )
    )]
    pub execution_time_percent: Option<f64>,

    #[arg(
        long = "memory-threshold",
        help = format!(
            "Memory usage regression threshold, in percent [default: {DEFAULT_MEMORY_USAGE_PERCENT:.1}]"
        )
    )]
    pub memory_usage_percent: Option<f64>,

    #[arg(
        long = "failure-threshold",
        help = format!(
            "Failure rate increase threshold, in percentage points [default: {DEFAULT_FAILURE_RATE_INCREASE_PERCENT:.1}]"
        )
    )]
    pub failure_rate_increase_percent: Option<f64>,

    #[arg(
        long,
        help = format!(
            "Minimum number of successful benchmarks required [default: {DEFAULT_MIN_BENCHMARKS}]"
        )
    )]
    pub min_benchmarks: Option<u64>,

    #[arg(
        long = "max-execution-time",
        help = format!(
            "Maximum average execution time in milliseconds [default: {DEFAULT_MAX_EXECUTION_TIME_MS:.1}]"
        )
    )]
    pub max_execution_time_ms: Option<f64>,

    #[arg(
        long = "max-memory-usage",
        help = format!(
            "Maximum average memory usage in megabytes [default: {DEFAULT_MAX_MEMORY_USAGE_MB:.1}]"
        )
    )]
    pub max_memory_usage_mb: Option<f64>,

    #[arg(
        long,
        help = format!(
            "Maximum failure rate, between 0.0 and 1.0 [default: {DEFAULT_MAX_FAILURE_RATE:.1}]"
        )
    )]
    pub max_failure_rate: Option<f64>,
}

impl Overrides {
    ///
    /// Resolves the final thresholds and validates them.
    ///
    pub fn resolve(&self) -> anyhow::Result<Thresholds> {
        let mut thresholds = match self.config.as_deref() {
            Some(path) => Thresholds::try_from_path(path)?,
            None => Thresholds::default(),
        };
        self.apply(&mut thresholds);
        thresholds.validate()?;
        Ok(thresholds)
    }

    ///
    /// Overwrites the thresholds with the flags that were set.
    ///
    pub fn apply(&self, thresholds: &mut Thresholds) {
        if let Some(value) = self.execution_time_percent {
            thresholds.regression.execution_time_percent = value;
        }
        if let Some(value) = self.memory_usage_percent {
            thresholds.regression.memory_usage_percent = value;
        }
        if let Some(value) = self.failure_rate_increase_percent {
            thresholds.regression.failure_rate_increase_percent = value;
        }
        if let Some(value) = self.min_benchmarks {
            thresholds.regression.min_benchmarks = value;
        }
        if let Some(value) = self.max_execution_time_ms {
            thresholds.gate.max_execution_time_ms = value;
        }
        if let Some(value) = self.max_memory_usage_mb {
            thresholds.gate.max_memory_usage_mb = value;
        }
        if let Some(value) = self.max_failure_rate {
            thresholds.gate.max_failure_rate = value;
        }
    }
}
