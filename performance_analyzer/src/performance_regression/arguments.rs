//!
//! The performance regression checker arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The performance regression checker arguments.
///
#[derive(Debug, Parser)]
#[command(
    name = "performance-regression",
    about = "Compares current benchmark results against a baseline and rejects regressions",
    long_about = None
)]
pub struct Arguments {
    /// The baseline benchmark results. Skipped with a warning if absent.
    #[arg(long)]
    pub baseline: PathBuf,

    /// The current benchmark results.
    #[arg(long)]
    pub current: PathBuf,

    /// Output directory for the comparison report.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Replace the baseline with the current results if the run passes.
    #[arg(long)]
    pub promote_baseline: bool,

    #[command(flatten)]
    pub thresholds: performance_analyzer::ThresholdOverrides,

    /// Do not print the comparison table.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the recommendations of passing runs as well.
    #[arg(short, long)]
    pub verbose: bool,
}
