//! Page subset extraction.
//!
//! This module implements the split operation: selecting a set of pages
//! from a source document and producing a new document containing exactly
//! those pages, in ascending page order.

use lopdf::Document;
use std::time::{Duration, Instant};

use crate::config::SplitConfig;
use crate::error::{PdfToolError, Result};
use crate::io::{PdfReader, PdfWriter};
use crate::pages::PageSet;
use crate::validation::Validator;

/// Statistics about a split operation.
#[derive(Debug, Clone)]
pub struct SplitStatistics {
    /// Number of pages in the output document.
    pub pages_extracted: usize,

    /// Number of pages in the source document.
    pub source_pages: usize,

    /// Total time taken for the split.
    pub split_time: Duration,
}

/// Extracts page subsets from PDF documents.
pub struct Splitter;

impl Splitter {
    /// Create a new splitter.
    pub fn new() -> Self {
        Self
    }

    /// Extract the selected pages from a document.
    ///
    /// Every page number is checked against the source before anything is
    /// touched; the first out-of-bounds page aborts the operation. The
    /// selection is already ascending and deduplicated, so the output
    /// contains each requested page exactly once, in page order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a requested page falls outside the document
    /// - the result would contain zero pages
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdftool::ops::split::Splitter;
    /// # use pdftool::pages::PageSet;
    /// # use lopdf::Document;
    /// # fn example(doc: Document) -> Result<(), Box<dyn std::error::Error>> {
    /// let splitter = Splitter::new();
    /// let pages = PageSet::parse("1,3")?;
    /// let subset = splitter.extract(&doc, &pages)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn extract(&self, source: &Document, pages: &PageSet) -> Result<Document> {
        let total_pages = source.get_pages().len();

        pages.validate_against(total_pages)?;

        if pages.is_empty() {
            return Err(PdfToolError::EmptyResult);
        }

        let mut doc = source.clone();

        // Keep the selection by deleting its complement; lopdf handles the
        // page tree bookkeeping
        let to_delete: Vec<u32> = (1..=total_pages as u32)
            .filter(|n| !pages.contains(*n))
            .collect();

        if !to_delete.is_empty() {
            doc.delete_pages(&to_delete);
        }

        let remaining = doc.get_pages().len();
        if remaining == 0 {
            return Err(PdfToolError::EmptyResult);
        }

        if remaining != pages.len() {
            return Err(PdfToolError::extract_failed(format!(
                "expected {} page(s) after extraction, found {remaining}",
                pages.len()
            )));
        }

        Ok(doc)
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a PDF end to end according to configuration.
///
/// Convenience function that validates the input and output path, extracts
/// the selected pages, and writes the result. The output file is only
/// created on full success.
///
/// # Errors
///
/// Returns an error if any validation, extraction, or write step fails.
///
/// # Examples
///
/// ```no_run
/// use pdftool::ops::split::split_pdf;
/// use pdftool::config::SplitConfig;
///
/// # async fn example(config: SplitConfig) -> Result<(), Box<dyn std::error::Error>> {
/// let (document, stats) = split_pdf(&config).await?;
/// println!("Extracted {} of {} pages", stats.pages_extracted, stats.source_pages);
/// # Ok(())
/// # }
/// ```
pub async fn split_pdf(config: &SplitConfig) -> Result<(Document, SplitStatistics)> {
    let split_start = Instant::now();

    let validator = Validator::new();
    validator.validate_file(&config.input).await?;
    validator
        .validate_output(&config.output, config.overwrite_mode)
        .await?;

    let reader = PdfReader::new();
    let loaded = reader.load(&config.input).await?;
    let source_pages = loaded.page_count;

    let splitter = Splitter::new();
    let document = splitter.extract(&loaded.document, &config.pages)?;

    let writer = PdfWriter::new();
    writer.save(&document, &config.output).await?;

    let statistics = SplitStatistics {
        pages_extracted: document.get_pages().len(),
        source_pages,
        split_time: split_start.elapsed(),
    };

    Ok((document, statistics))
}
