//!
//! Benchmark results input.
//!

pub mod error;


use std::path::Path;
use std::path::PathBuf;

use serde_json::Value;

use crate::model::record::BenchmarkRecord;
use crate::model::result_set::ResultSet;
use crate::model::source::Source;
use crate::output::COMPARISON_FILE_NAME;
use crate::output::STATISTICS_FILE_NAME;
use crate::output::SUMMARY_FILE_NAME;

use self::error::Error;

/// The conventional baseline file name inside an input directory.
pub const BASELINE_FILE_NAME: &str = "baseline.json";

///
/// Reads and parses a JSON file.
///
pub fn read_json(path: &Path) -> Result<Value, Error> {
    if !path.exists() {
        return Err(Error::Missing {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
        error,
        path: path.to_path_buf(),
    })?;
    serde_json::from_str(text.as_str()).map_err(|error| Error::Parsing {
        error,
        path: path.to_path_buf(),
    })
}

///
/// Reads the baseline, if it exists.
///
/// An absent baseline is not an error, only the absolute gate applies then.
/// A baseline that exists but cannot be read or parsed is.
///
pub fn load_optional_baseline(path: &Path) -> Result<Option<ResultSet>, Error> {
    match ResultSet::try_from_path(path, Source::Baseline) {
        Ok(result_set) => Ok(Some(result_set)),
        Err(Error::Missing { .. }) => Ok(None),
        Err(error) => Err(error),
    }
}

///
/// Whether a file inside an input directory holds current benchmark records.
///
fn is_current_results_file(path: &Path) -> bool {
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    !file_name.contains("baseline")
        && ![SUMMARY_FILE_NAME, COMPARISON_FILE_NAME, STATISTICS_FILE_NAME].contains(&file_name)
}

impl ResultSet {
    ///
    /// Reads a result set of either shape from a JSON file.
    ///
    /// # Errors
    ///
    /// 1. File does not exist.
    /// 2. File cannot be read.
    /// 3. File is not valid JSON.
    ///
    pub fn try_from_path(path: &Path, source: Source) -> Result<Self, Error> {
        let value = read_json(path)?;
        Ok(Self::from_value(source, &value))
    }

    ///
    /// Merges the record lists of every `**/*.json` file inside a directory.
    ///
    /// Baseline files and generated reports are excluded. Files that cannot be
    /// read, parsed, or are not record lists are skipped and returned alongside.
    ///
    pub fn try_from_directory(path: &Path, source: Source) -> Result<(Self, Vec<Error>), Error> {
        if !path.is_dir() {
            return Err(Error::Missing {
                path: path.to_path_buf(),
            });
        }

        let resolution_pattern = format!("{}/**/*.json", path.to_string_lossy());
        let mut paths: Vec<PathBuf> = glob::glob(resolution_pattern.as_str())
            .map_err(|error| Error::Pattern {
                error,
                path: path.to_path_buf(),
            })?
            .filter_map(Result::ok)
            .filter(|path| is_current_results_file(path))
            .collect();
        paths.sort();

        let mut records = Vec::new();
        let mut skipped = Vec::new();
        for path in paths.into_iter() {
            match read_json(path.as_path()) {
                Ok(Value::Array(elements)) => {
                    records.extend(elements.iter().map(BenchmarkRecord::from));
                }
                Ok(_) => skipped.push(Error::UnexpectedShape { path }),
                Err(error) => skipped.push(error),
            }
        }

        Ok((Self::from_records(source, records), skipped))
    }
}
