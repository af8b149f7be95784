//!
//! The overall run status.
//!

use crate::metrics::Metrics;

///
/// The overall run status reported to downstream consumers.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// No failures and no regression.
    Pass,
    /// Some benchmarks failed, but there is no regression.
    Partial,
    /// A regression against the baseline was detected.
    Regression,
    /// Benchmarks exist, but none succeeded.
    Failed,
    /// There are no benchmark results at all.
    Error,
}

impl Status {
    ///
    /// Derives the status from the current metrics and the regression flag.
    ///
    pub fn derive(metrics: &Metrics, has_regression: bool) -> Self {
        if metrics.total_count == 0 {
            Self::Error
        } else if metrics.successful_count == 0 {
            Self::Failed
        } else if has_regression {
            Self::Regression
        } else if metrics.has_failures() {
            Self::Partial
        } else {
            Self::Pass
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Partial => write!(f, "PARTIAL"),
            Self::Regression => write!(f, "REGRESSION"),
            Self::Failed => write!(f, "FAILED"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}
