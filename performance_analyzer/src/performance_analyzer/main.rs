//!
//! The performance analyzer binary.
//!

pub(crate) mod arguments;

use chrono::Utc;
use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let arguments = Arguments::parse();
    let exit_code = match main_inner(arguments) {
        Ok(true) => performance_analyzer::EXIT_CODE_SUCCESS,
        Ok(false) => performance_analyzer::EXIT_CODE_FAILURE,
        Err(error) => {
            eprintln!("{}: {error:?}", "error".bright_red().bold());
            performance_analyzer::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
/// Returns whether the run passed.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<bool> {
    let thresholds = arguments.thresholds.resolve()?;
    println!(
        "    {} {} v{}",
        "Starting".bright_green().bold(),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    let (current, skipped) = performance_analyzer::ResultSet::try_from_directory(
        arguments.input_dir.as_path(),
        performance_analyzer::Source::Current,
    )?;
    for error in skipped.iter() {
        eprintln!("{}: skipping {error}", "warning".bright_yellow().bold());
    }

    let baseline_path = arguments
        .baseline
        .unwrap_or_else(|| arguments.input_dir.join(performance_analyzer::BASELINE_FILE_NAME));
    let baseline = performance_analyzer::load_optional_baseline(baseline_path.as_path())?;
    match baseline {
        Some(_) => println!(
            "   {} against baseline {baseline_path:?}",
            "Comparing".bright_green().bold()
        ),
        None => eprintln!(
            "{}: baseline {baseline_path:?} not found, comparison skipped",
            "warning".bright_yellow().bold()
        ),
    }

    println!(
        "   {} {} benchmark results",
        "Analyzing".bright_green().bold(),
        current.total_count(),
    );
    let evaluation =
        performance_analyzer::Evaluation::new(&current, baseline.as_ref(), &thresholds);

    if !arguments.quiet {
        if let Some(comparison) = evaluation.comparison() {
            comparison.print();
            println!();
        }
        evaluation.print_gate();
        println!();
    }
    if arguments.verbose {
        for (suite, statistics) in evaluation.statistics.per_suite.iter() {
            println!(
                "  {suite}: {}/{} successful, avg {:.2}ms",
                statistics.successful_benchmarks,
                statistics.total_benchmarks,
                statistics.avg_execution_time
            );
        }
        println!();
    }

    let timestamp = Utc::now();
    evaluation.summary(timestamp).print();

    println!(
        "     {} reports to {:?}",
        "Writing".bright_green().bold(),
        arguments.output_dir
    );
    performance_analyzer::Output::analysis(&evaluation, timestamp)?
        .write_to_directory(arguments.output_dir.as_path())?;

    Ok(evaluation.is_successful())
}
