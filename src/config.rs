//! Configuration for pdftool commands.
//!
//! This module transforms CLI arguments into validated, normalized
//! configurations that drive the merge and split operations. It handles:
//! - Validation of argument combinations
//! - Resolution of conflicting options
//! - Application of defaults

use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::pages::PageSet;

/// Output file overwrite behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Overwrite an existing output file (default).
    #[default]
    Overwrite,
    /// Never overwrite, error if the output file exists.
    NoClobber,
}

/// Complete configuration for a merge operation.
///
/// This structure contains all settings needed to perform a merge,
/// derived and validated from CLI arguments.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Input PDF file paths (in merge order).
    pub inputs: Vec<PathBuf>,

    /// Output PDF file path.
    pub output: PathBuf,

    /// File overwrite behavior.
    pub overwrite_mode: OverwriteMode,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Verbose output mode.
    pub verbose: bool,
}

impl MergeConfig {
    /// Validate the configuration.
    ///
    /// Checks for logical inconsistencies and invalid combinations.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No input files are specified
    /// - Verbose and quiet modes are both enabled
    /// - The output path is also listed as an input
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            bail!("No input files specified");
        }

        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        for input in &self.inputs {
            if input == &self.output {
                bail!(
                    "Output file cannot be the same as an input file: {}",
                    self.output.display()
                );
            }
        }

        Ok(())
    }
}

/// Complete configuration for a split operation.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Input PDF file path.
    pub input: PathBuf,

    /// Output PDF file path.
    pub output: PathBuf,

    /// Pages to extract from the input.
    pub pages: PageSet,

    /// File overwrite behavior.
    pub overwrite_mode: OverwriteMode,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Verbose output mode.
    pub verbose: bool,
}

impl SplitConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Verbose and quiet modes are both enabled
    /// - The output path equals the input path
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        if self.input == self.output {
            bail!(
                "Output file cannot be the same as the input file: {}",
                self.output.display()
            );
        }

        Ok(())
    }
}
