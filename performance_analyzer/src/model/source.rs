//!
//! The origin of a result set.
//!

///
/// The origin of a result set.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// The build under evaluation.
    Current,
    /// The previously accepted snapshot.
    Baseline,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Current => write!(f, "current"),
            Self::Baseline => write!(f, "baseline"),
        }
    }
}
