//!
//! The performance gate binary.
//!

pub(crate) mod arguments;

use std::path::PathBuf;

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
/// Returns whether the gate passed.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<bool> {
    let thresholds = arguments.thresholds.resolve()?;

    let path = match (arguments.summary, arguments.input_dir) {
        (Some(summary), _) => summary,
        (None, Some(input_dir)) => input_dir.join(performance_analyzer::SUMMARY_FILE_NAME),
        (None, None) => PathBuf::from(performance_analyzer::SUMMARY_FILE_NAME),
    };
    let summary = performance_analyzer::ResultSet::try_from_path(
        path.as_path(),
        performance_analyzer::Source::Current,
    )?;

    let evaluation = performance_analyzer::Evaluation::with_regression_flag(
        &summary,
        summary.regression_detected(),
        &thresholds,
    );

    if arguments.verbose {
        println!("{}", serde_json::to_string_pretty(&evaluation.current)?);
        println!();
    }
    evaluation.print_gate();

    if !arguments.quiet {
        let recommendations = summary
            .aggregated()
            .map(|aggregated| aggregated.recommendations.as_slice())
            .unwrap_or_default();
        if !recommendations.is_empty() {
            println!();
            println!("Recommendations:");
            for (index, recommendation) in recommendations.iter().enumerate() {
                println!("  {}. {recommendation}", index + 1);
            }
        }
    }

    Ok(evaluation.is_successful())
}
