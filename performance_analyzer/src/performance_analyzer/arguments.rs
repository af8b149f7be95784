//!
//! The performance analyzer arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The performance analyzer arguments.
///
#[derive(Debug, Parser)]
#[command(
    name = "performance-analyzer",
    about = "Analyzes benchmark results and gates them against thresholds and a baseline",
    long_about = None
)]
pub struct Arguments {
    /// Directory containing the current benchmark results.
    #[arg(long)]
    pub input_dir: PathBuf,

    /// Output directory for the analysis results.
    #[arg(long)]
    pub output_dir: PathBuf,

    /// The baseline benchmark results.
    /// Defaults to `baseline.json` inside the input directory; skipped if absent.
    #[arg(long)]
    pub baseline: Option<PathBuf>,

    #[command(flatten)]
    pub thresholds: performance_analyzer::ThresholdOverrides,

    /// Do not print the comparison tables.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the per-suite statistics.
    #[arg(short, long)]
    pub verbose: bool,
}
