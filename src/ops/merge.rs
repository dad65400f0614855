//! Core PDF merging implementation.
//!
//! This module implements the merge algorithm that concatenates multiple
//! PDF documents in input order while preserving page content.

use lopdf::{Document, Object, ObjectId};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::MergeConfig;
use crate::error::{PdfToolError, Result};
use crate::io::{LoadedPdf, PdfReader, PdfWriter};
use crate::validation::Validator;

/// Statistics about a merge operation.
#[derive(Debug, Clone)]
pub struct MergeStatistics {
    /// Number of PDFs merged.
    pub files_merged: usize,

    /// Total number of pages in the merged document.
    pub total_pages: usize,

    /// Total time taken for the merge.
    pub merge_time: Duration,

    /// Time taken to load all PDFs.
    pub load_time: Duration,

    /// Total size of input files.
    pub input_size: u64,
}

impl MergeStatistics {
    /// Format input size as human-readable string.
    pub fn format_input_size(&self) -> String {
        format_file_size(self.input_size)
    }
}

/// Result of a merge operation.
pub struct MergeOutcome {
    /// The merged PDF document.
    pub document: Document,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,

    /// Paths of files that were merged, in input order.
    pub merged_files: Vec<PathBuf>,
}

/// PDF merger that concatenates multiple documents.
pub struct Merger {
    reader: PdfReader,
}

impl Merger {
    /// Create a new merger with default settings.
    pub fn new() -> Self {
        Self {
            reader: PdfReader::new(),
        }
    }

    /// Merge the configured inputs into a single document.
    ///
    /// Inputs are loaded sequentially in listed order; the first failure
    /// aborts the whole operation before any output exists. The `on_file`
    /// callback is invoked after each input is loaded, for progress
    /// reporting.
    ///
    /// # Errors
    ///
    /// Returns an error if any input fails to load or the page tree of the
    /// accumulating document cannot be updated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdftool::ops::merge::Merger;
    /// # use pdftool::config::MergeConfig;
    /// # async fn example(config: MergeConfig) -> Result<(), Box<dyn std::error::Error>> {
    /// let merger = Merger::new();
    /// let outcome = merger.merge(&config, |_, _| {}).await?;
    /// println!("Merged {} files into {} pages",
    ///          outcome.statistics.files_merged,
    ///          outcome.statistics.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn merge<F>(&self, config: &MergeConfig, mut on_file: F) -> Result<MergeOutcome>
    where
        F: FnMut(usize, &LoadedPdf),
    {
        let merge_start = Instant::now();

        let load_start = Instant::now();
        let loaded = self
            .reader
            .load_with_progress(&config.inputs, |idx, pdf| on_file(idx, pdf))
            .await?;
        let load_time = load_start.elapsed();

        let files_merged = loaded.len();
        let input_size = loaded.iter().map(|p| p.file_size).sum();
        let merged_files: Vec<PathBuf> = loaded.iter().map(|p| p.path.clone()).collect();

        let document = self.merge_documents(loaded)?;

        let statistics = MergeStatistics {
            files_merged,
            total_pages: document.get_pages().len(),
            merge_time: merge_start.elapsed(),
            load_time,
            input_size,
        };

        Ok(MergeOutcome {
            document,
            statistics,
            merged_files,
        })
    }

    /// Concatenate loaded documents into one.
    fn merge_documents(&self, loaded_pdfs: Vec<LoadedPdf>) -> Result<Document> {
        let mut iter = loaded_pdfs.into_iter();

        let mut merged = match iter.next() {
            Some(first) => first.document,
            None => {
                return Err(PdfToolError::invalid_config("No input files specified"));
            }
        };

        let mut max_id = merged.max_id;

        for loaded in iter {
            let mut doc = loaded.document;

            // Renumber objects to avoid id conflicts with the accumulator
            doc.renumber_objects_with(max_id + 1);
            max_id = doc.max_id;

            // get_pages is keyed by ascending page number
            let doc_pages: Vec<ObjectId> = doc.get_pages().into_values().collect();

            merged.objects.extend(doc.objects);

            self.add_pages_to_tree(&mut merged, &doc_pages)?;
        }

        Ok(merged)
    }

    /// Append page references to the merged document's page tree.
    fn add_pages_to_tree(&self, merged: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
        let catalog = merged
            .catalog_mut()
            .map_err(|e| PdfToolError::merge_failed(format!("Failed to get catalog: {e}")))?;

        let pages_id = catalog
            .get(b"Pages")
            .and_then(|p| p.as_reference())
            .map_err(|e| {
                PdfToolError::merge_failed(format!("Failed to get pages reference: {e}"))
            })?;

        let pages_obj = merged
            .get_object_mut(pages_id)
            .map_err(|e| PdfToolError::merge_failed(format!("Failed to get pages object: {e}")))?;

        if let Object::Dictionary(dict) = pages_obj {
            let kids = dict
                .get_mut(b"Kids")
                .map_err(|_| PdfToolError::merge_failed("Pages dictionary missing Kids array"))?;

            if let Object::Array(kids_array) = kids {
                for &page_id in page_ids {
                    kids_array.push(Object::Reference(page_id));
                }
            } else {
                return Err(PdfToolError::merge_failed("Kids is not an array"));
            }

            let current_count = dict.get(b"Count").and_then(|c| c.as_i64()).unwrap_or(0);
            dict.set("Count", Object::Integer(current_count + page_ids.len() as i64));
        } else {
            return Err(PdfToolError::merge_failed(
                "Pages object is not a dictionary",
            ));
        }

        Ok(())
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge PDF files end to end according to configuration.
///
/// Convenience function that validates the inputs and output path, merges
/// the documents, and writes the result. The output file is only created
/// on full success.
///
/// # Errors
///
/// Returns an error if any validation, merge, or write step fails.
///
/// # Examples
///
/// ```no_run
/// use pdftool::ops::merge::merge_pdfs;
/// use pdftool::config::MergeConfig;
///
/// # async fn example(config: MergeConfig) -> Result<(), Box<dyn std::error::Error>> {
/// let (document, stats) = merge_pdfs(&config).await?;
/// println!("Created {} page document", stats.total_pages);
/// # Ok(())
/// # }
/// ```
pub async fn merge_pdfs(config: &MergeConfig) -> Result<(Document, MergeStatistics)> {
    let validator = Validator::new();
    validator.validate_files(&config.inputs).await?;
    validator
        .validate_output(&config.output, config.overwrite_mode)
        .await?;

    let merger = Merger::new();
    let outcome = merger.merge(config, |_, _| {}).await?;

    let writer = PdfWriter::new();
    writer.save(&outcome.document, &config.output).await?;

    Ok((outcome.document, outcome.statistics))
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
