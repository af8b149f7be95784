//!
//! Benchmark results input errors.
//!

use std::path::PathBuf;

///
/// Benchmark results input error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file or directory does not exist.
    #[error("Input {path:?} not found")]
    Missing {
        /// The path to the input.
        path: PathBuf,
    },
    /// Error reading the input file.
    #[error("Reading input file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Error parsing the input file.
    #[error("Parsing input file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Error resolving the files of an input directory.
    #[error("Resolving input directory {path:?}: {error}")]
    Pattern {
        /// The underlying pattern error.
        error: glob::PatternError,
        /// The path to the input directory.
        path: PathBuf,
    },
    /// A file inside an input directory is not a list of benchmark records.
    #[error("Input file {path:?} is not a list of benchmark records")]
    UnexpectedShape {
        /// The path to the input file.
        path: PathBuf,
    },
}
