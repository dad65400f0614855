//! Error types for pdftool.
//!
//! This module defines all error types that can occur during PDF operations.
//! Errors are designed to be informative and actionable, providing clear
//! context about what went wrong and how to fix it.
//!
//! # Error Categories
//!
//! - **I/O Errors**: File not found, permission denied, etc.
//! - **PDF Errors**: Invalid PDF structure, corrupted files
//! - **Validation Errors**: Invalid page ranges, out-of-bounds pages
//! - **Operation Errors**: Problems during merge or split

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for pdftool operations.
pub type Result<T> = std::result::Result<T, PdfToolError>;

/// Main error type for pdftool operations.
///
/// All errors in pdftool use this type, which provides detailed context
/// about what went wrong and where.
#[derive(Debug, Error)]
pub enum PdfToolError {
    /// Input file was not found.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input file is not accessible (permission denied, etc.).
    #[error("Cannot access file: {}\n  Reason: {source}", path.display())]
    FileNotAccessible {
        /// Path to the inaccessible file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Input path exists but is not a regular file.
    #[error("Not a file: {}", path.display())]
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// Failed to load PDF file.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// PDF file is corrupted or has invalid structure.
    #[error("Corrupted or invalid PDF: {}\n  Details: {details}", path.display())]
    CorruptedPdf {
        /// Path to the corrupted PDF.
        path: PathBuf,
        /// Details about the corruption.
        details: String,
    },

    /// PDF file is encrypted and cannot be processed.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// A page range token failed to parse.
    #[error("Invalid page range: '{token}'\n  Details: {reason}")]
    InvalidPageRange {
        /// The token that failed to parse.
        token: String,
        /// What is wrong with the token.
        reason: String,
    },

    /// A requested page number falls outside the document.
    #[error("Invalid page number {page}: document has {total_pages} page(s)")]
    PageOutOfBounds {
        /// The first offending 1-based page number.
        page: u32,
        /// Total pages in the source document.
        total_pages: usize,
    },

    /// The computed output would contain zero pages.
    #[error("No pages were selected; refusing to write an empty document")]
    EmptyResult,

    /// Output file already exists and overwrite is not allowed.
    #[error(
        "Output file already exists: {}\n  \
         Remove --no-clobber or choose a different output path",
        path.display()
    )]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Failed to create output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write to output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Merge operation failed.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Page extraction failed.
    #[error("Page extraction failed: {reason}")]
    ExtractFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<lopdf::Error> for PdfToolError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl From<anyhow::Error> for PdfToolError {
    fn from(err: anyhow::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl PdfToolError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create a CorruptedPdf error.
    pub fn corrupted_pdf(path: PathBuf, details: impl Into<String>) -> Self {
        Self::CorruptedPdf {
            path,
            details: details.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create an InvalidPageRange error for a specific token.
    pub fn invalid_page_range(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPageRange {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create a PageOutOfBounds error.
    pub fn page_out_of_bounds(page: u32, total_pages: usize) -> Self {
        Self::PageOutOfBounds { page, total_pages }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an ExtractFailed error.
    pub fn extract_failed(reason: impl Into<String>) -> Self {
        Self::ExtractFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Check if this error is one of the validation failures.
    ///
    /// Validation failures are detected before any write side effect.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::FileNotAccessible { .. }
                | Self::NotAFile { .. }
                | Self::InvalidPageRange { .. }
                | Self::PageOutOfBounds { .. }
                | Self::EmptyResult
                | Self::InvalidConfig { .. }
        )
    }

    /// Get the exit code for this error.
    ///
    /// Validation failures exit with 1; other failure families keep
    /// distinct codes so scripts can tell them apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } => 1,
            Self::FileNotAccessible { .. } => 1,
            Self::NotAFile { .. } => 1,
            Self::InvalidPageRange { .. } => 1,
            Self::PageOutOfBounds { .. } => 1,
            Self::EmptyResult => 1,
            Self::InvalidConfig { .. } => 1,
            Self::FailedToLoadPdf { .. } => 3,
            Self::CorruptedPdf { .. } => 3,
            Self::EncryptedPdf { .. } => 3,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Io { .. } => 5,
            Self::MergeFailed { .. } => 6,
            Self::ExtractFailed { .. } => 6,
            Self::Other { .. } => 1,
        }
    }
}
