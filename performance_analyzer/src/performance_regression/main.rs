//!
//! The performance regression checker binary.
//!

pub(crate) mod arguments;
pub(crate) mod promote;

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

    let current = performance_analyzer::ResultSet::try_from_path(
        arguments.current.as_path(),
        performance_analyzer::Source::Current,
    )?;
    let baseline = performance_analyzer::load_optional_baseline(arguments.baseline.as_path())?;
    if baseline.is_none() {
        eprintln!(
            "{}: baseline {:?} not found, applying the gate thresholds only",
            "warning".bright_yellow().bold(),
            arguments.baseline,
        );
    }

    let evaluation =
        performance_analyzer::Evaluation::new(&current, baseline.as_ref(), &thresholds);

    if !arguments.quiet {
        if let Some(comparison) = evaluation.comparison() {
            comparison.print();
            println!();
        }
    }
    evaluation.print_gate();
    println!();

    if !evaluation.is_successful() || arguments.verbose {
        for (index, recommendation) in evaluation.recommendations().iter().enumerate() {
            println!("  {}. {recommendation}", index + 1);
        }
        println!();
    }

    if let Some(output_dir) = arguments.output_dir.as_deref() {
        performance_analyzer::Output::comparison(&evaluation)?.write_to_directory(output_dir)?;
    }

    if evaluation.is_successful() {
        println!(
            "{} No significant performance regression detected.",
            "PASS".bright_green().bold()
        );
        if arguments.promote_baseline {
            promote::promote(arguments.current.as_path(), arguments.baseline.as_path())?;
            println!(
                "   {} baseline {:?}",
                "Promoted".bright_green().bold(),
                arguments.baseline
            );
        }
    } else {
        println!(
            "{} Performance regression detected. Build will be rejected.",
            "FAIL".bright_red().bold()
        );
    }

    Ok(evaluation.is_successful())
}
