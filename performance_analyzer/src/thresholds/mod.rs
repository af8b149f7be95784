//!
//! The evaluation thresholds.
//!

pub mod overrides;


use std::path::Path;

/// The default relative execution time increase tolerated, in percent.
pub const DEFAULT_EXECUTION_TIME_PERCENT: f64 = 10.0;
/// The default relative memory usage increase tolerated, in percent.
pub const DEFAULT_MEMORY_USAGE_PERCENT: f64 = 15.0;
/// The default failure rate increase tolerated, in percentage points.
pub const DEFAULT_FAILURE_RATE_INCREASE_PERCENT: f64 = 5.0;
/// The default minimum number of successful benchmarks.
pub const DEFAULT_MIN_BENCHMARKS: u64 = 5;
/// The default execution time ceiling in milliseconds.
pub const DEFAULT_MAX_EXECUTION_TIME_MS: f64 = 1000.0;
/// The default memory usage ceiling in megabytes.
pub const DEFAULT_MAX_MEMORY_USAGE_MB: f64 = 100.0;
/// The default failure rate ceiling.
pub const DEFAULT_MAX_FAILURE_RATE: f64 = 0.0;

///
/// The thresholds relative to the baseline.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RegressionThresholds {
    /// The tolerated execution time increase, in percent.
    pub execution_time_percent: f64,
    /// The tolerated memory usage increase, in percent.
    pub memory_usage_percent: f64,
    /// The tolerated failure rate increase, in percentage points.
    pub failure_rate_increase_percent: f64,
    /// The minimum number of successful benchmarks to judge a run.
    pub min_benchmarks: u64,
}

impl Default for RegressionThresholds {
    fn default() -> Self {
        Self {
            execution_time_percent: DEFAULT_EXECUTION_TIME_PERCENT,
            memory_usage_percent: DEFAULT_MEMORY_USAGE_PERCENT,
            failure_rate_increase_percent: DEFAULT_FAILURE_RATE_INCREASE_PERCENT,
            min_benchmarks: DEFAULT_MIN_BENCHMARKS,
        }
    }
}

///
/// The absolute operational ceilings.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GateThresholds {
    /// The maximum average execution time in milliseconds.
    pub max_execution_time_ms: f64,
    /// The maximum average memory usage in megabytes.
    #[serde(rename = "maxMemoryUsageMB")]
    pub max_memory_usage_mb: f64,
    /// The maximum failure rate, between 0 and 1.
    pub max_failure_rate: f64,
}

impl Default for GateThresholds {
    fn default() -> Self {
        Self {
            max_execution_time_ms: DEFAULT_MAX_EXECUTION_TIME_MS,
            max_memory_usage_mb: DEFAULT_MAX_MEMORY_USAGE_MB,
            max_failure_rate: DEFAULT_MAX_FAILURE_RATE,
        }
    }
}

///
/// The complete threshold configuration, immutable for a run.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    /// The thresholds relative to the baseline.
    pub regression: RegressionThresholds,
    /// The absolute ceilings.
    pub gate: GateThresholds,
}

impl Thresholds {
    ///
    /// Reads the thresholds from a JSON file and validates them.
    /// Fields missing from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// 1. File cannot be read.
    /// 2. Deserialization from JSON file failed.
    /// 3. Validation failed.
    ///
    pub fn try_from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Threshold file {path:?} reading: {error}"))?;
        let thresholds: Self = serde_json::from_str(contents.as_str())
            .map_err(|error| anyhow::anyhow!("Threshold file {path:?} parsing: {error}"))?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    ///
    /// Checks that the thresholds are well-formed.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        let RegressionThresholds {
            execution_time_percent,
            memory_usage_percent,
            failure_rate_increase_percent,
            min_benchmarks: _,
        } = self.regression;
        let GateThresholds {
            max_execution_time_ms,
            max_memory_usage_mb,
            max_failure_rate,
        } = self.gate;

        for (name, value) in [
            ("executionTimePercent", execution_time_percent),
            ("memoryUsagePercent", memory_usage_percent),
            ("failureRateIncreasePercent", failure_rate_increase_percent),
            ("maxExecutionTimeMs", max_execution_time_ms),
            ("maxMemoryUsageMB", max_memory_usage_mb),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!(
                    "The `{name}` threshold must be a finite non-negative number, found {value}"
                );
            }
        }
        if !(0.0..=1.0).contains(&max_failure_rate) {
            anyhow::bail!(
                "The `maxFailureRate` threshold must be between 0.0 and 1.0, found {max_failure_rate}"
            );
        }
        Ok(())
    }
}
