//!
//! A batch of benchmark results.
//!


use serde_json::Value;

use crate::model::aggregated::AggregatedSummary;
use crate::model::record::BenchmarkRecord;
use crate::model::source::Source;

///
/// The shape the result set was built from, resolved once at construction.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A list of per-benchmark records.
    RawRecords(Vec<BenchmarkRecord>),
    /// A single pre-aggregated summary.
    AggregatedSummary(AggregatedSummary),
    /// Any other JSON value, carrying no data.
    Empty,
}

///
/// A batch of benchmark results, either current or baseline.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    /// Where the results come from.
    pub source: Source,
    /// The normalized data.
    pub shape: Shape,
}

impl ResultSet {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(source: Source, shape: Shape) -> Self {
        Self { source, shape }
    }

    ///
    /// Builds a result set from a list of records.
    ///
    pub fn from_records(source: Source, records: Vec<BenchmarkRecord>) -> Self {
        Self::new(source, Shape::RawRecords(records))
    }

    ///
    /// Builds a result set from parsed JSON, detecting the shape.
    ///
    /// Never fails: unexpected shapes and fields degrade to empty data and zeros.
    ///
    pub fn from_value(source: Source, value: &Value) -> Self {
        let shape = match value {
            Value::Array(elements) => {
                Shape::RawRecords(elements.iter().map(BenchmarkRecord::from).collect())
            }
            Value::Object(map) => Shape::AggregatedSummary(AggregatedSummary::from(map)),
            _ => Shape::Empty,
        };
        Self::new(source, shape)
    }

    ///
    /// Returns the individual records, empty unless built from a record list.
    ///
    pub fn records(&self) -> &[BenchmarkRecord] {
        match &self.shape {
            Shape::RawRecords(records) => records.as_slice(),
            Shape::AggregatedSummary(_) | Shape::Empty => &[],
        }
    }

    ///
    /// Returns the aggregated summary, if the result set was built from one.
    ///
    pub fn aggregated(&self) -> Option<&AggregatedSummary> {
        match &self.shape {
            Shape::AggregatedSummary(summary) => Some(summary),
            Shape::RawRecords(_) | Shape::Empty => None,
        }
    }

    ///
    /// Returns the total number of benchmarks.
    ///
    pub fn total_count(&self) -> u64 {
        match &self.shape {
            Shape::RawRecords(records) => records.len() as u64,
            Shape::AggregatedSummary(summary) => summary.total_benchmarks,
            Shape::Empty => 0,
        }
    }

    ///
    /// Returns the number of failed benchmarks, never above the total.
    ///
    pub fn failed_count(&self) -> u64 {
        match &self.shape {
            Shape::RawRecords(records) => {
                records.iter().filter(|record| !record.success).count() as u64
            }
            Shape::AggregatedSummary(summary) => {
                summary.failed_benchmarks.min(summary.total_benchmarks)
            }
            Shape::Empty => 0,
        }
    }

    ///
    /// Whether the producer of an aggregated summary flagged a regression.
    ///
    pub fn regression_detected(&self) -> bool {
        self.aggregated()
            .map(|summary| summary.regression_detected)
            .unwrap_or_default()
    }
}
