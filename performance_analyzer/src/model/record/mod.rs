//!
//! A single executed benchmark.
//!

use serde_json::Map;
use serde_json::Value;

use crate::metrics::BYTES_PER_MEGABYTE;
use crate::util::json;

///
/// A single executed benchmark.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRecord {
    /// The benchmark suite name.
    pub suite: String,
    /// The benchmark name.
    pub name: String,
    /// The execution time in milliseconds.
    pub execution_time_ms: f64,
    /// The memory usage in bytes.
    pub memory_usage_bytes: u64,
    /// Whether the benchmark succeeded.
    pub success: bool,
    /// The error message, only set for failed benchmarks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The time the benchmark was executed at, opaque.
    pub timestamp: String,
    /// The version of the benchmarked toolchain, opaque.
    pub tool_version: String,
    /// The platform the benchmark was executed on, opaque.
    pub platform: String,
}

impl BenchmarkRecord {
    /// The placeholder for a missing suite or benchmark name.
    pub const UNKNOWN: &'static str = "unknown";

    /// The key of the nested measurements object.
    pub const KEY_METRICS: &'static str = "metrics";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        suite: &str,
        name: &str,
        execution_time_ms: f64,
        memory_usage_bytes: u64,
        success: bool,
    ) -> Self {
        Self {
            suite: suite.to_owned(),
            name: name.to_owned(),
            execution_time_ms,
            memory_usage_bytes,
            success,
            error: None,
            timestamp: String::new(),
            tool_version: String::new(),
            platform: String::new(),
        }
    }

    ///
    /// Returns the memory usage in megabytes.
    ///
    pub fn memory_usage_mb(&self) -> f64 {
        (self.memory_usage_bytes as f64) / BYTES_PER_MEGABYTE
    }

    ///
    /// Reads an opaque string field from the record, falling back to the
    /// nested measurements object.
    ///
    fn opaque(
        map: &Map<String, Value>,
        metrics: Option<&Map<String, Value>>,
        keys: &[&str],
    ) -> String {
        keys.iter()
            .find_map(|key| {
                json::string(map.get(*key))
                    .or_else(|| metrics.and_then(|metrics| json::string(metrics.get(*key))))
            })
            .unwrap_or_default()
    }
}

impl From<&Value> for BenchmarkRecord {
    fn from(value: &Value) -> Self {
        match value.as_object() {
            Some(map) => Self::from(map),
            None => Self::new(Self::UNKNOWN, Self::UNKNOWN, 0.0, 0, false),
        }
    }
}

impl From<&Map<String, Value>> for BenchmarkRecord {
    fn from(map: &Map<String, Value>) -> Self {
        let metrics = json::object(map, Self::KEY_METRICS);
        let success = json::boolean(map.get("success"));

        Self {
            suite: json::string(map.get("suite")).unwrap_or_else(|| Self::UNKNOWN.to_owned()),
            name: json::string(map.get("name")).unwrap_or_else(|| Self::UNKNOWN.to_owned()),
            execution_time_ms: json::non_negative_f64(
                metrics.and_then(|metrics| metrics.get("executionTime")),
            ),
            memory_usage_bytes: json::non_negative_u64(
                metrics.and_then(|metrics| metrics.get("memoryUsage")),
            ),
            success,
            error: if success {
                None
            } else {
                json::string(map.get("error"))
            },
            timestamp: Self::opaque(map, metrics, &["timestamp"]),
            tool_version: Self::opaque(map, metrics, &["leanVersion", "toolVersion"]),
            platform: Self::opaque(map, metrics, &["platform"]),
        }
    }
}
