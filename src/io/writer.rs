//! PDF writing and saving operations.
//!
//! This module provides safe and efficient PDF writing with:
//! - Atomic writes (write to temp file, then rename)
//! - Compression support
//! - Write statistics
//!
//! # Examples
//!
//! ```no_run
//! use pdftool::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # async fn example(doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! writer.save(&doc, Path::new("output.pdf")).await?;
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::error::{PdfToolError, Result};

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Compress the PDF before writing.
    pub compress: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,

    /// Whether compression was applied.
    pub compressed: bool,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self {
            options: WriteOptions::default(),
        }
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer without atomic writes (faster but less safe).
    pub fn non_atomic() -> Self {
        Self {
            options: WriteOptions {
                atomic: false,
                ..Default::default()
            },
        }
    }

    /// Create a writer without compression (faster but larger files).
    pub fn without_compression() -> Self {
        Self {
            options: WriteOptions {
                compress: false,
                ..Default::default()
            },
        }
    }

    /// Save a PDF document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Output directory doesn't exist
    /// - Insufficient permissions
    /// - Write operation fails
    pub async fn save(&self, doc: &Document, path: &Path) -> Result<()> {
        let _stats = self.save_with_stats(doc, path).await?;
        Ok(())
    }

    /// Save a PDF and return statistics about the operation.
    ///
    /// With atomic writes (the default), the document is first written to
    /// a temporary sibling file and renamed into place, so the destination
    /// only ever appears on full success.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub async fn save_with_stats(&self, doc: &Document, path: &Path) -> Result<WriteStatistics> {
        let path_buf = path.to_path_buf();
        let options = self.options.clone();

        // Clone the document for processing in a blocking task
        let mut doc_clone = doc.clone();

        let stats = task::spawn_blocking(move || {
            let start = Instant::now();

            if options.compress {
                doc_clone.compress();
            }

            // Renumbering keeps object ids contiguous after merges
            doc_clone.renumber_objects();

            let write_path = if options.atomic {
                path_buf.with_extension("tmp")
            } else {
                path_buf.clone()
            };

            let file = std::fs::File::create(&write_path).map_err(|e| {
                PdfToolError::FailedToCreateOutput {
                    path: write_path.clone(),
                    source: e,
                }
            })?;

            let mut writer = std::io::BufWriter::with_capacity(options.buffer_size, file);

            doc_clone
                .save_to(&mut writer)
                .map_err(|e| PdfToolError::FailedToWrite {
                    path: write_path.clone(),
                    source: std::io::Error::other(e),
                })?;

            writer.flush().map_err(|e| PdfToolError::FailedToWrite {
                path: write_path.clone(),
                source: e,
            })?;

            if options.atomic {
                std::fs::rename(&write_path, &path_buf).map_err(|e| {
                    PdfToolError::FailedToWrite {
                        path: path_buf.clone(),
                        source: e,
                    }
                })?;
            }

            let write_time = start.elapsed();
            let file_size = std::fs::metadata(&path_buf).map(|m| m.len()).unwrap_or(0);

            Ok::<_, PdfToolError>(WriteStatistics {
                write_time,
                file_size,
                output_path: path_buf,
                compressed: options.compress,
            })
        })
        .await
        .map_err(|e| PdfToolError::other(format!("Write task failed: {e}")))??;

        Ok(stats)
    }
}

impl Default for PdfWriter {
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

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;
    use tempfile::TempDir;

    fn create_test_document() -> Document {
        let mut doc = Document::with_version("1.4");

        let catalog_id = doc.new_object_id();
        let pages_id = doc.new_object_id();
        let page_id = doc.new_object_id();

        let catalog = lopdf::dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        };

        let pages = lopdf::dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        };

        let page = lopdf::dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };

        doc.objects.insert(catalog_id, catalog.into());
        doc.objects.insert(pages_id, pages.into());
        doc.objects.insert(page_id, page.into());

        doc.trailer.set("Root", catalog_id);

        doc
    }

    #[tokio::test]
    async fn test_save_pdf() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("output.pdf");

        let doc = create_test_document();
        let writer = PdfWriter::new();

        let result = writer.save(&doc, &output_path).await;
        assert!(result.is_ok());
        assert!(output_path.exists());
    }

    #[tokio::test]
    async fn test_save_with_stats() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("output.pdf");

        let doc = create_test_document();
        let writer = PdfWriter::new();

        let stats = writer.save_with_stats(&doc, &output_path).await.unwrap();

        assert!(stats.file_size > 0);
        assert_eq!(stats.output_path, output_path);
        assert!(stats.compressed);
    }

    #[tokio::test]
    async fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("output.pdf");

        let doc = create_test_document();
        let writer = PdfWriter::new();
        writer.save(&doc, &output_path).await.unwrap();

        assert!(output_path.exists());
        assert!(!output_path.with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn test_non_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("output.pdf");

        let doc = create_test_document();
        let writer = PdfWriter::non_atomic();

        let result = writer.save(&doc, &output_path).await;
        assert!(result.is_ok());
        assert!(output_path.exists());
    }

    #[tokio::test]
    async fn test_without_compression() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("output.pdf");

        let doc = create_test_document();
        let writer = PdfWriter::without_compression();

        let stats = writer.save_with_stats(&doc, &output_path).await.unwrap();
        assert!(!stats.compressed);
    }

    #[tokio::test]
    async fn test_save_to_nonexistent_directory() {
        let doc = create_test_document();
        let writer = PdfWriter::new();

        let result = writer
            .save(&doc, Path::new("/nonexistent/directory/output.pdf"))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_custom_options() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("output.pdf");

        let options = WriteOptions {
            atomic: false,
            compress: false,
            buffer_size: 4096,
        };

        let doc = create_test_document();
        let writer = PdfWriter::with_options(options);

        let stats = writer.save_with_stats(&doc, &output_path).await.unwrap();
        assert!(!stats.compressed);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(100), "100 bytes");
        assert_eq!(format_file_size(1024), "1.00 KB");
        assert_eq!(format_file_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_file_size(1536 * 1024), "1.50 MB");
    }
}
