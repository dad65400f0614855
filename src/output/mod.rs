//! Output formatting and display for pdftool.
//!
//! This module handles all user-facing output including:
//! - Formatted status messages
//! - Progress indicators
//! - Error and warning display
//! - Quiet and verbose modes
//!
//! Command logic receives an [`OutputFormatter`] rather than printing on
//! its own, so operations stay testable without a real terminal.
//!
//! # Examples
//!
//! ```no_run
//! use pdftool::output::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false, false);
//! formatter.info("Starting merge operation");
//! formatter.success("Merge completed successfully");
//! ```

pub mod formatter;
pub mod progress;

pub use formatter::{MessageLevel, OutputFormatter};
pub use progress::{ProgressBar, ProgressStyle};

use crate::validation::ValidationSummary;

/// Display a validation summary to the user.
pub fn display_validation_summary(formatter: &OutputFormatter, summary: &ValidationSummary) {
    formatter.info(&format!(
        "Validated {} file(s): {} pages, {}",
        summary.files_validated,
        summary.total_pages,
        summary.format_total_size()
    ));

    if formatter.is_verbose() {
        for result in &summary.results {
            formatter.detail(
                &result.path.display().to_string(),
                &format!("{} page(s)", result.page_count),
            );
        }
    }
}
