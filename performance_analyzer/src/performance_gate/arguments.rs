//!
//! The performance gate arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The performance gate arguments.
///
#[derive(Debug, Parser)]
#[command(
    name = "performance-gate",
    about = "Gates a performance summary against absolute thresholds",
    long_about = None
)]
pub struct Arguments {
    /// Directory containing the performance summary file.
    #[arg(long, required_unless_present = "summary", conflicts_with = "summary")]
    pub input_dir: Option<PathBuf>,

    /// The performance summary file.
    #[arg(long)]
    pub summary: Option<PathBuf>,

    #[command(flatten)]
    pub thresholds: performance_analyzer::ThresholdOverrides,

    /// Do not print the recommendations.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the measured metrics as JSON.
    #[arg(short, long)]
    pub verbose: bool,
}
