//!
//! The benchmark results data model.
//!

pub mod aggregated;
pub mod record;
pub mod result_set;
pub mod source;
