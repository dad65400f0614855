//! CLI argument parsing for pdftool.
//!
//! This module defines the command-line interface structure using `clap`.
//! It handles argument parsing, validation, and help text generation.
//!
//! # Examples
//!
//! ```no_run
//! use pdftool::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! ```

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{MergeConfig, OverwriteMode, SplitConfig};
use crate::error::{PdfToolError, Result};
use crate::pages::PageSet;
use crate::utils::expand_input_patterns;

/// Merge PDF files and extract page subsets.
///
/// pdftool combines multiple PDF files into one document, or pulls a
/// selection of pages out of a document into a new file.
#[derive(Parser, Debug)]
#[command(name = "pdftool")]
#[command(version)]
#[command(about = "Merge PDF files and extract page subsets", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// The command to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress all non-error output
    ///
    /// Only errors and warnings will be printed.
    /// Useful for scripts and automation.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output - show detailed information about each PDF
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Never overwrite an existing output file
    ///
    /// If the output file already exists, exit with an error instead of
    /// overwriting it.
    #[arg(long, global = true)]
    pub no_clobber: bool,
}

/// Available pdftool subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge multiple PDF files into a single document
    ///
    /// Files are appended in the order given; the last path is the output.
    ///
    /// Examples:
    ///   pdftool merge a.pdf b.pdf merged.pdf
    ///   pdftool merge chapter*.pdf book.pdf
    Merge {
        /// Input PDF files followed by the output file
        #[arg(required = true, num_args = 2.., value_name = "INPUTS... OUTPUT")]
        files: Vec<PathBuf>,
    },

    /// Extract a subset of pages from a PDF into a new document
    ///
    /// Pages are selected with a range expression and written in ascending
    /// page order, each page at most once.
    ///
    /// Examples:
    ///   pdftool split report.pdf summary.pdf --pages 1-3
    ///   pdftool split report.pdf picks.pdf -p "1,4,7-9"
    Split {
        /// Input PDF file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output PDF file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Pages to extract (e.g. "1,2,3-5,7")
        ///
        /// Comma-separated page numbers and inclusive ranges, 1-indexed.
        #[arg(short, long, value_name = "RANGE", required = true)]
        pages: String,
    },
}

impl Cli {
    /// The overwrite mode selected by flags.
    pub fn overwrite_mode(&self) -> OverwriteMode {
        if self.no_clobber {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Overwrite
        }
    }

    /// Convert merge arguments into a validated [`MergeConfig`].
    ///
    /// The final path in `files` is the output; the rest are inputs, with
    /// glob patterns expanded in place.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two paths are given, a glob pattern
    /// matches nothing, or configuration validation fails.
    pub fn to_merge_config(&self, files: &[PathBuf]) -> Result<MergeConfig> {
        let (output, raw_inputs) = match files.split_last() {
            Some((output, inputs)) if !inputs.is_empty() => (output.clone(), inputs),
            _ => {
                return Err(PdfToolError::invalid_config(
                    "merge requires at least one input file and an output file",
                ));
            }
        };

        let inputs = expand_input_patterns(raw_inputs)?;

        let config = MergeConfig {
            inputs,
            output,
            overwrite_mode: self.overwrite_mode(),
            quiet: self.quiet,
            verbose: self.verbose,
        };

        config.validate().map_err(|e| {
            PdfToolError::invalid_config(format!("Configuration validation failed: {e}"))
        })?;

        Ok(config)
    }

    /// Convert split arguments into a validated [`SplitConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the page range expression does not parse or
    /// configuration validation fails.
    pub fn to_split_config(&self, input: &Path, output: &Path, pages: &str) -> Result<SplitConfig> {
        let pages = PageSet::parse(pages)?;

        let config = SplitConfig {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            pages,
            overwrite_mode: self.overwrite_mode(),
            quiet: self.quiet,
            verbose: self.verbose,
        };

        config.validate().map_err(|e| {
            PdfToolError::invalid_config(format!("Configuration validation failed: {e}"))
        })?;

        Ok(config)
    }
}
