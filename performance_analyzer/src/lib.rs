//!
//! The performance analyzer library.
//!

pub mod comparison;
pub mod evaluation;
pub mod gate;
pub mod input;
pub mod metrics;
pub mod model;
pub mod output;
pub mod recommendation;
pub mod regression;
pub mod summary;
pub mod thresholds;
pub mod util;

pub use crate::comparison::Comparison;
pub use crate::evaluation::Evaluation;
pub use crate::gate::GateDecision;
pub use crate::input::error::Error as InputError;
pub use crate::input::load_optional_baseline;
pub use crate::input::BASELINE_FILE_NAME;
pub use crate::metrics::Metrics;
pub use crate::model::aggregated::AggregatedSummary;
pub use crate::model::record::BenchmarkRecord;
pub use crate::model::result_set::ResultSet;
pub use crate::model::result_set::Shape as ResultSetShape;
pub use crate::model::source::Source;
pub use crate::output::Output;
pub use crate::output::SUMMARY_FILE_NAME;
pub use crate::regression::RegressionResult;
pub use crate::summary::statistics::Statistics;
pub use crate::summary::status::Status;
pub use crate::summary::PerformanceSummary;
pub use crate::thresholds::overrides::Overrides as ThresholdOverrides;
pub use crate::thresholds::GateThresholds;
pub use crate::thresholds::RegressionThresholds;
pub use crate::thresholds::Thresholds;

/// The process exit code for a passing run.
pub const EXIT_CODE_SUCCESS: i32 = 0;
/// The process exit code for a rejected run or an unusable input.
pub const EXIT_CODE_FAILURE: i32 = 1;
