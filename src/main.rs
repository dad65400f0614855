//! pdftool - Merge PDF files and extract page subsets.
//!
//! CLI entry point: parses arguments, dispatches to the requested command,
//! and maps failures to exit codes.

use clap::Parser;
use std::process;

use pdftool::cli::{Cli, Commands};
use pdftool::config::{MergeConfig, SplitConfig};
use pdftool::error::PdfToolError;
use pdftool::io::{PdfWriter, load_pdf};
use pdftool::ops::merge::Merger;
use pdftool::ops::split::Splitter;
use pdftool::output::{OutputFormatter, ProgressBar, ProgressStyle, display_validation_summary};
use pdftool::validation::Validator;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), PdfToolError> {
    let formatter = OutputFormatter::new(cli.quiet, cli.verbose);

    match cli.command {
        Commands::Merge { ref files } => {
            let config = cli.to_merge_config(files)?;
            run_merge(&config, &formatter).await
        }
        Commands::Split {
            ref input,
            ref output,
            ref pages,
        } => {
            let config = cli.to_split_config(input, output, pages)?;
            run_split(&config, &formatter).await
        }
    }
}

/// Merge the configured inputs into one output document.
async fn run_merge(config: &MergeConfig, formatter: &OutputFormatter) -> Result<(), PdfToolError> {
    let validator = Validator::new();

    formatter.info("Validating input files...");
    let summary = validator.validate_files(&config.inputs).await?;

    if formatter.should_print() {
        display_validation_summary(formatter, &summary);
        formatter.blank_line();
    }

    validator
        .validate_output(&config.output, config.overwrite_mode)
        .await?;

    let mut progress = if formatter.should_print() {
        ProgressBar::new(config.inputs.len(), ProgressStyle::Bar)
    } else {
        ProgressBar::disabled()
    };
    progress.set_message("Merging");

    let merger = Merger::new();
    let outcome = merger
        .merge(config, |_, _| progress.increment())
        .await?;
    progress.finish();

    if formatter.is_verbose() {
        formatter.detail(
            "Input size",
            &outcome.statistics.format_input_size(),
        );
        formatter.detail(
            "Load time",
            &format!("{:.2}s", outcome.statistics.load_time.as_secs_f64()),
        );
        formatter.detail(
            "Merge time",
            &format!("{:.2}s", outcome.statistics.merge_time.as_secs_f64()),
        );
    }

    formatter.info(&format!("Writing to: {}", config.output.display()));

    let writer = PdfWriter::new();
    let write_stats = writer
        .save_with_stats(&outcome.document, &config.output)
        .await?;

    formatter.success(&format!(
        "Merged {} file(s) ({} pages) into {} ({})",
        outcome.statistics.files_merged,
        outcome.statistics.total_pages,
        config.output.display(),
        write_stats.format_file_size()
    ));

    Ok(())
}

/// Extract the configured page selection into a new document.
async fn run_split(config: &SplitConfig, formatter: &OutputFormatter) -> Result<(), PdfToolError> {
    let validator = Validator::new();

    formatter.info("Validating input file...");
    let validation = validator.validate_file(&config.input).await?;

    validator
        .validate_output(&config.output, config.overwrite_mode)
        .await?;

    formatter.info(&format!(
        "Extracting {} of {} page(s) from {}",
        config.pages.len(),
        validation.page_count,
        config.input.display()
    ));

    let source = load_pdf(&config.input).await?;

    let splitter = Splitter::new();
    let document = splitter.extract(&source, &config.pages)?;

    formatter.info(&format!("Writing to: {}", config.output.display()));

    let writer = PdfWriter::new();
    let write_stats = writer.save_with_stats(&document, &config.output).await?;

    formatter.success(&format!(
        "Extracted {} page(s) into {} ({})",
        document.get_pages().len(),
        config.output.display(),
        write_stats.format_file_size()
    ));

    Ok(())
}
