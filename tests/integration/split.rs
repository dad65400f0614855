//! Integration tests for the split pipeline.

use pdftool::config::{OverwriteMode, SplitConfig};
use pdftool::ops::split_pdf;
use pdftool::pages::PageSet;
use tempfile::TempDir;

use crate::common::{saved_page_widths, write_pdf};

fn split_config(
    input: std::path::PathBuf,
    output: std::path::PathBuf,
    pages: &str,
) -> SplitConfig {
    SplitConfig {
        input,
        output,
        pages: PageSet::parse(pages).unwrap(),
        overwrite_mode: OverwriteMode::Overwrite,
        quiet: true,
        verbose: false,
    }
}

#[tokio::test]
async fn test_split_noncontiguous_pages() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "input.pdf", 5, 100);
    let output = temp_dir.path().join("subset.pdf");

    let config = split_config(input, output.clone(), "1,3");
    let (_, stats) = split_pdf(&config).await.unwrap();

    assert_eq!(stats.pages_extracted, 2);
    assert_eq!(stats.source_pages, 5);

    // Exactly source pages 1 and 3, in that order
    assert_eq!(saved_page_widths(&output), vec![100, 102]);
}

#[tokio::test]
async fn test_split_contiguous_range() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "input.pdf", 10, 100);
    let output = temp_dir.path().join("subset.pdf");

    let config = split_config(input, output.clone(), "4-6");
    let (_, stats) = split_pdf(&config).await.unwrap();

    assert_eq!(stats.pages_extracted, 3);
    assert_eq!(saved_page_widths(&output), vec![103, 104, 105]);
}

#[tokio::test]
async fn test_split_unordered_overlapping_expression() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "input.pdf", 8, 100);
    let output = temp_dir.path().join("subset.pdf");

    // Tokens out of order and overlapping; output is still ascending and
    // each page appears once
    let config = split_config(input, output.clone(), "7,2-4,3");
    let (_, stats) = split_pdf(&config).await.unwrap();

    assert_eq!(stats.pages_extracted, 4);
    assert_eq!(saved_page_widths(&output), vec![101, 102, 103, 106]);
}

#[tokio::test]
async fn test_split_single_page() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "input.pdf", 3, 100);
    let output = temp_dir.path().join("page2.pdf");

    let config = split_config(input, output.clone(), "2");
    let (_, stats) = split_pdf(&config).await.unwrap();

    assert_eq!(stats.pages_extracted, 1);
    assert_eq!(saved_page_widths(&output), vec![101]);
}

#[tokio::test]
async fn test_split_whole_document() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "input.pdf", 4, 100);
    let output = temp_dir.path().join("copy.pdf");

    let config = split_config(input, output.clone(), "1-4");
    let (_, stats) = split_pdf(&config).await.unwrap();

    assert_eq!(stats.pages_extracted, 4);
    assert_eq!(saved_page_widths(&output), vec![100, 101, 102, 103]);
}
