//! PDF reading and loading operations.
//!
//! This module provides PDF loading with:
//! - Encryption detection
//! - Page-count verification
//! - Sequential batch loading with progress reporting
//!
//! # Examples
//!
//! ```no_run
//! use pdftool::io::reader::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("document.pdf")).await?;
//! println!("Loaded {} pages", loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::{PdfToolError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    fn new(document: Document, path: PathBuf) -> Self {
        let page_count = document.get_pages().len();
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            document,
            path,
            page_count,
            file_size,
        }
    }
}

/// Result of a load operation (success or failure).
pub type LoadResult = Result<LoadedPdf>;

/// PDF reader with configurable loading behavior.
#[derive(Debug, Clone)]
pub struct PdfReader {
    /// Whether to verify the document has pages after loading.
    verify: bool,
}

impl PdfReader {
    /// Create a new PDF reader with default settings.
    pub fn new() -> Self {
        Self { verify: true }
    }

    /// Create a reader that skips verification (faster but less safe).
    pub fn without_verification() -> Self {
        Self { verify: false }
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File cannot be read
    /// - File is not a valid PDF
    /// - PDF is encrypted
    /// - PDF has no pages (unless verification is disabled)
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();
        let verify = self.verify;

        // Parsing is CPU-bound, keep it off the async runtime
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
        .map_err(|e| PdfToolError::other(format!("Load task failed: {e}")))??;

        if verify && doc.get_pages().is_empty() {
            return Err(PdfToolError::corrupted_pdf(path_buf, "PDF has no pages"));
        }

        Ok(LoadedPdf::new(doc, path_buf))
    }

    /// Load multiple PDF documents sequentially.
    ///
    /// Loads PDFs one at a time in the order provided, stopping at the
    /// first failure.
    ///
    /// # Errors
    ///
    /// Returns the first load error encountered; later files are not
    /// touched once a load fails.
    pub async fn load_sequential(&self, paths: &[PathBuf]) -> Result<Vec<LoadedPdf>> {
        let mut loaded = Vec::with_capacity(paths.len());

        for path in paths {
            loaded.push(self.load(path).await?);
        }

        Ok(loaded)
    }

    /// Load PDFs sequentially with a progress callback.
    ///
    /// The callback is invoked after each successful load with the
    /// zero-based index of the file and the loaded document.
    ///
    /// # Errors
    ///
    /// Returns the first load error encountered.
    pub async fn load_with_progress<F>(
        &self,
        paths: &[PathBuf],
        mut on_progress: F,
    ) -> Result<Vec<LoadedPdf>>
    where
        F: FnMut(usize, &LoadedPdf),
    {
        let mut loaded = Vec::with_capacity(paths.len());

        for (idx, path) in paths.iter().enumerate() {
            let pdf = self.load(path).await?;
            on_progress(idx, &pdf);
            loaded.push(pdf);
        }

        Ok(loaded)
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}
