//!
//! Performance analyzer output.
//!

pub mod file;

mod tests;

use std::fmt::Write;
use std::path::Path;

use chrono::DateTime;
use chrono::Utc;

use crate::evaluation::Evaluation;

use self::file::File;

/// The performance summary file name.
pub const SUMMARY_FILE_NAME: &str = "performance-summary.json";
/// The detailed comparison file name.
pub const COMPARISON_FILE_NAME: &str = "performance-comparison.json";
/// The plain-text comparison report file name.
pub const COMPARISON_REPORT_FILE_NAME: &str = "comparison-summary.txt";
/// The statistics file name.
pub const STATISTICS_FILE_NAME: &str = "summary_stats.json";
/// The remediation hints file name.
pub const RECOMMENDATIONS_FILE_NAME: &str = "recommendations.txt";

///
/// The report files produced for downstream consumers, relative to an output directory.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Output {
    /// The files to write.
    pub files: Vec<File>,
}

impl Output {
    ///
    /// The complete analysis: summary, statistics, remediation hints, and the
    /// baseline comparison if there was a baseline.
    ///
    pub fn analysis(evaluation: &Evaluation, timestamp: DateTime<Utc>) -> anyhow::Result<Self> {
        let mut output = Self::comparison(evaluation)?;
        output.files.push(File::new(
            SUMMARY_FILE_NAME,
            serde_json::to_string_pretty(&evaluation.summary(timestamp))?,
        ));
        output.files.push(File::new(
            STATISTICS_FILE_NAME,
            serde_json::to_string_pretty(&evaluation.statistics)?,
        ));
        output.files.push(File::new(
            RECOMMENDATIONS_FILE_NAME,
            Self::remediation_text(evaluation.remediation.as_slice()),
        ));
        Ok(output)
    }

    ///
    /// The baseline comparison files, empty without a baseline.
    ///
    pub fn comparison(evaluation: &Evaluation) -> anyhow::Result<Self> {
        let mut output = Self::default();
        if let Some(comparison) = evaluation.comparison() {
            output.files.push(File::new(
                COMPARISON_FILE_NAME,
                serde_json::to_string_pretty(&comparison)?,
            ));
            output
                .files
                .push(File::new(COMPARISON_REPORT_FILE_NAME, comparison.to_text()));
        }
        Ok(output)
    }

    ///
    /// Writes the files into the output directory, creating it if needed.
    ///
    pub fn write_to_directory(self, path: &Path) -> anyhow::Result<()> {
        if !self.files.is_empty() {
            std::fs::create_dir_all(path).map_err(|error| {
                anyhow::anyhow!("Output directory {path:?} creating: {error}")
            })?;
        }
        for File {
            path: relative_path,
            contents,
        } in self.files
        {
            let file_path = path.join(relative_path);
            std::fs::write(file_path.as_path(), contents)
                .map_err(|error| anyhow::anyhow!("Report file {file_path:?} writing: {error}"))?;
        }
        Ok(())
    }

    ///
    /// Renders the numbered remediation hints.
    ///
    fn remediation_text(hints: &[String]) -> String {
        let mut text = String::with_capacity(64 + hints.len() * 64);
        text.push_str("Performance Recommendations\n");
        text.push_str(&"=".repeat(30));
        text.push_str("\n\n");
        for (index, hint) in hints.iter().enumerate() {
            writeln!(text, "{}. {hint}", index + 1).expect("Always valid");
        }
        text
    }
}
