//! Input validation for pdftool.
//!
//! This module provides validation of PDF files and output paths before
//! attempting merge or split operations. It performs:
//! - File existence and accessibility checks
//! - PDF format validation
//! - Encryption detection
//! - Page count verification
//! - Output path validation
//!
//! All errors are detected eagerly, before any write side effect.
//!
//! # Examples
//!
//! ```no_run
//! use pdftool::validation::Validator;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = Validator::new();
//! let result = validator.validate_file(Path::new("test.pdf")).await?;
//! println!("PDF has {} pages", result.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::task;

use crate::config::OverwriteMode;
use crate::error::{PdfToolError, Result};

/// Result of validating a single PDF file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Path to the validated file.
    pub path: PathBuf,

    /// Number of pages in the PDF.
    pub page_count: usize,

    /// PDF version (major, minor).
    pub version: Option<(u8, u8)>,

    /// Size of the file in bytes.
    pub file_size: u64,

    /// Number of objects in the PDF.
    pub object_count: usize,
}

impl ValidationResult {
    fn from_document(path: PathBuf, doc: &Document) -> Self {
        let page_count = doc.get_pages().len();

        let version = doc.version.split_once('.').map(|(major, minor)| {
            (
                major.parse::<u8>().unwrap_or_default(),
                minor.parse::<u8>().unwrap_or_default(),
            )
        });

        let object_count = doc.objects.len();
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            path,
            page_count,
            version,
            file_size,
            object_count,
        }
    }
}

/// Summary of validation results for multiple files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    /// Individual validation results for each file.
    pub results: Vec<ValidationResult>,

    /// Total number of pages across all files.
    pub total_pages: usize,

    /// Total file size in bytes.
    pub total_size: u64,

    /// Number of files that passed validation.
    pub files_validated: usize,
}

impl ValidationSummary {
    /// Create a summary from validation results.
    pub fn from_results(results: Vec<ValidationResult>) -> Self {
        let total_pages = results.iter().map(|r| r.page_count).sum();
        let total_size = results.iter().map(|r| r.file_size).sum();
        let files_validated = results.len();

        Self {
            results,
            total_pages,
            total_size,
            files_validated,
        }
    }

    /// Format the total file size as a human-readable string.
    pub fn format_total_size(&self) -> String {
        format_file_size(self.total_size)
    }
}

/// Validator for PDF files and output paths.
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate a single PDF file.
    ///
    /// Performs the checks in order:
    /// - File exists and is a regular file
    /// - File is readable and non-empty
    /// - File loads as a PDF and is not encrypted
    /// - PDF has at least one page
    ///
    /// # Errors
    ///
    /// Returns an error describing the first failed check.
    pub async fn validate_file(&self, path: &Path) -> Result<ValidationResult> {
        if !path.exists() {
            return Err(PdfToolError::file_not_found(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(PdfToolError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let metadata =
            tokio::fs::metadata(path)
                .await
                .map_err(|e| PdfToolError::FileNotAccessible {
                    path: path.to_path_buf(),
                    source: e,
                })?;

        if metadata.len() == 0 {
            return Err(PdfToolError::corrupted_pdf(
                path.to_path_buf(),
                "File is empty",
            ));
        }

        let path_buf = path.to_path_buf();
        let doc = task::spawn_blocking({
            let path_buf = path_buf.clone();
            move || {
                Document::load(&path_buf).map_err(|e| {
                    let err_msg = e.to_string();
                    if err_msg.contains("encrypt") || err_msg.contains("password") {
                        PdfToolError::encrypted_pdf(path_buf.clone())
                    } else {
                        PdfToolError::failed_to_load_pdf(path_buf.clone(), err_msg)
                    }
                })
            }
        })
        .await
        .map_err(|e| PdfToolError::other(format!("Validation task failed: {e}")))??;

        if doc.get_pages().is_empty() {
            return Err(PdfToolError::corrupted_pdf(path_buf, "PDF has no pages"));
        }

        Ok(ValidationResult::from_document(path_buf, &doc))
    }

    /// Validate multiple PDF files in order.
    ///
    /// The first failure aborts validation immediately; files after it are
    /// not touched.
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered, or an error if the
    /// input list is empty.
    pub async fn validate_files(&self, paths: &[PathBuf]) -> Result<ValidationSummary> {
        if paths.is_empty() {
            return Err(PdfToolError::invalid_config("No input files specified"));
        }

        let mut results = Vec::with_capacity(paths.len());
        for path in paths {
            results.push(self.validate_file(path).await?);
        }

        Ok(ValidationSummary::from_results(results))
    }

    /// Validate the output path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Output file exists and the mode is [`OverwriteMode::NoClobber`]
    /// - Output directory doesn't exist or is not writable
    pub async fn validate_output(&self, output: &Path, mode: OverwriteMode) -> Result<()> {
        if output.exists() && mode == OverwriteMode::NoClobber {
            return Err(PdfToolError::output_exists(output.to_path_buf()));
        }

        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            if !parent.exists() {
                return Err(PdfToolError::invalid_config(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }

            let metadata = tokio::fs::metadata(parent).await.map_err(|e| {
                PdfToolError::FileNotAccessible {
                    path: parent.to_path_buf(),
                    source: e,
                }
            })?;

            if metadata.permissions().readonly() {
                return Err(PdfToolError::invalid_config(format!(
                    "Output directory is not writable: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Format file size as human-readable string.
fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
