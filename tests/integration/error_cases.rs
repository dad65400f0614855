//! Integration tests for error handling and edge cases.

use pdftool::config::{MergeConfig, OverwriteMode, SplitConfig};
use pdftool::error::PdfToolError;
use pdftool::ops::{merge_pdfs, split_pdf};
use pdftool::pages::PageSet;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::write_pdf;

fn merge_config(inputs: Vec<PathBuf>, output: PathBuf) -> MergeConfig {
    MergeConfig {
        inputs,
        output,
        overwrite_mode: OverwriteMode::Overwrite,
        quiet: true,
        verbose: false,
    }
}

#[tokio::test]
async fn test_merge_missing_input_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", 1, 100);
    let missing = temp_dir.path().join("missing.pdf");
    let b = write_pdf(temp_dir.path(), "b.pdf", 1, 200);
    let output = temp_dir.path().join("merged.pdf");

    let config = merge_config(vec![a, missing.clone(), b], output.clone());
    let result = merge_pdfs(&config).await;

    match result.unwrap_err() {
        PdfToolError::FileNotFound { path } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!output.exists(), "no output may be written on failure");
}

#[tokio::test]
async fn test_merge_corrupted_input_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", 1, 100);
    let corrupt = temp_dir.path().join("corrupt.pdf");
    std::fs::write(&corrupt, b"not a pdf at all").unwrap();
    let output = temp_dir.path().join("merged.pdf");

    let config = merge_config(vec![a, corrupt], output.clone());
    let result = merge_pdfs(&config).await;

    assert!(result.is_err());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_merge_empty_input_file_is_corrupted() {
    let temp_dir = TempDir::new().unwrap();
    let empty = temp_dir.path().join("empty.pdf");
    std::fs::File::create(&empty).unwrap();
    let output = temp_dir.path().join("merged.pdf");

    let config = merge_config(vec![empty], output.clone());
    let result = merge_pdfs(&config).await;

    assert!(matches!(
        result.unwrap_err(),
        PdfToolError::CorruptedPdf { .. }
    ));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_merge_no_clobber_refuses_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", 1, 100);
    let output = temp_dir.path().join("merged.pdf");
    std::fs::write(&output, b"existing").unwrap();

    let mut config = merge_config(vec![a], output.clone());
    config.overwrite_mode = OverwriteMode::NoClobber;

    let result = merge_pdfs(&config).await;

    assert!(matches!(
        result.unwrap_err(),
        PdfToolError::OutputExists { .. }
    ));
    // The existing file is untouched
    assert_eq!(std::fs::read(&output).unwrap(), b"existing");
}

#[tokio::test]
async fn test_split_out_of_bounds_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "input.pdf", 3, 100);
    let output = temp_dir.path().join("subset.pdf");

    let config = SplitConfig {
        input,
        output: output.clone(),
        pages: PageSet::parse("1,9").unwrap(),
        overwrite_mode: OverwriteMode::Overwrite,
        quiet: true,
        verbose: false,
    };

    let result = split_pdf(&config).await;

    match result.unwrap_err() {
        PdfToolError::PageOutOfBounds { page, total_pages } => {
            assert_eq!(page, 9);
            assert_eq!(total_pages, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!output.exists(), "no output may be written on failure");
}

#[tokio::test]
async fn test_split_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("subset.pdf");

    let config = SplitConfig {
        input: temp_dir.path().join("missing.pdf"),
        output: output.clone(),
        pages: PageSet::parse("1").unwrap(),
        overwrite_mode: OverwriteMode::Overwrite,
        quiet: true,
        verbose: false,
    };

    let result = split_pdf(&config).await;

    assert!(matches!(
        result.unwrap_err(),
        PdfToolError::FileNotFound { .. }
    ));
    assert!(!output.exists());
}

#[test]
fn test_invalid_range_expressions_fail() {
    assert!(PageSet::parse("5-3").is_err());
    assert!(PageSet::parse("1,,2").is_err());
    assert!(PageSet::parse("2-4-6").is_err());
    assert!(PageSet::parse("").is_err());
    assert!(PageSet::parse("0").is_err());
}

#[test]
fn test_spec_exit_codes() {
    // Every validation failure exits with 1
    assert_eq!(
        PdfToolError::file_not_found(PathBuf::from("x.pdf")).exit_code(),
        1
    );
    assert_eq!(
        PdfToolError::invalid_page_range("5-3", "reversed").exit_code(),
        1
    );
    assert_eq!(PdfToolError::page_out_of_bounds(9, 3).exit_code(), 1);
    assert_eq!(PdfToolError::EmptyResult.exit_code(), 1);
}
