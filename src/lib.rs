//! pdftool - Merge PDF files and extract page subsets.
//!
//! This library provides the functionality behind the `pdftool` CLI:
//!
//! - Concatenating multiple PDF files into one document
//! - Extracting a selection of pages into a new document
//! - Page range expression parsing ("1,2,3-5,7")
//! - Eager input/output validation
//! - Comprehensive error handling with stable exit codes
//!
//! # Examples
//!
//! ## Merging
//!
//! ```no_run
//! use pdftool::config::{MergeConfig, OverwriteMode};
//! use pdftool::ops::merge_pdfs;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MergeConfig {
//!     inputs: vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!     output: PathBuf::from("merged.pdf"),
//!     overwrite_mode: OverwriteMode::Overwrite,
//!     quiet: false,
//!     verbose: false,
//! };
//!
//! let (document, stats) = merge_pdfs(&config).await?;
//! println!("Created {} page document", stats.total_pages);
//! # Ok(())
//! # }
//! ```
//!
//! ## Splitting
//!
//! ```no_run
//! use pdftool::config::{OverwriteMode, SplitConfig};
//! use pdftool::ops::split_pdf;
//! use pdftool::pages::PageSet;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SplitConfig {
//!     input: PathBuf::from("report.pdf"),
//!     output: PathBuf::from("summary.pdf"),
//!     pages: PageSet::parse("1-3,7")?,
//!     overwrite_mode: OverwriteMode::Overwrite,
//!     quiet: false,
//!     verbose: false,
//! };
//!
//! let (document, stats) = split_pdf(&config).await?;
//! println!("Extracted {} page(s)", stats.pages_extracted);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod ops;
pub mod output;
pub mod pages;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use error::{PdfToolError, Result};
pub use pages::PageSet;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
