//!
//! Represents a single report file in a set of many.
//!

use std::path::PathBuf;

///
/// Represents a single report file in a set of many.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Path to this file relative to the user-provided output directory.
    pub path: PathBuf,
    /// File contents.
    pub contents: String,
}

impl File {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: &str, contents: String) -> Self {
        Self {
            path: PathBuf::from(path),
            contents,
        }
    }
}
