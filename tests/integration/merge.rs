//! Integration tests for the merge pipeline.

use pdftool::config::{MergeConfig, OverwriteMode};
use pdftool::ops::merge_pdfs;
use tempfile::TempDir;

use crate::common::{saved_page_widths, write_pdf};

fn merge_config(inputs: Vec<std::path::PathBuf>, output: std::path::PathBuf) -> MergeConfig {
    MergeConfig {
        inputs,
        output,
        overwrite_mode: OverwriteMode::Overwrite,
        quiet: true,
        verbose: false,
    }
}

#[tokio::test]
async fn test_merge_two_single_page_files() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", 1, 100);
    let b = write_pdf(temp_dir.path(), "b.pdf", 1, 200);
    let output = temp_dir.path().join("merged.pdf");

    let config = merge_config(vec![a, b], output.clone());
    let (_, stats) = merge_pdfs(&config).await.unwrap();

    assert_eq!(stats.files_merged, 2);
    assert_eq!(stats.total_pages, 2);
    assert!(output.exists());
}

#[tokio::test]
async fn test_merge_many_single_page_files_in_order() {
    let temp_dir = TempDir::new().unwrap();

    let inputs: Vec<_> = (0..4)
        .map(|i| {
            write_pdf(
                temp_dir.path(),
                &format!("part{i}.pdf"),
                1,
                100 * (i as i64 + 1),
            )
        })
        .collect();
    let output = temp_dir.path().join("merged.pdf");

    let config = merge_config(inputs, output.clone());
    let (_, stats) = merge_pdfs(&config).await.unwrap();

    assert_eq!(stats.files_merged, 4);
    assert_eq!(stats.total_pages, 4);

    // Page order must follow input file order
    assert_eq!(saved_page_widths(&output), vec![100, 200, 300, 400]);
}

#[tokio::test]
async fn test_merge_multi_page_files_keeps_page_sequence() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", 2, 100);
    let b = write_pdf(temp_dir.path(), "b.pdf", 3, 200);
    let output = temp_dir.path().join("merged.pdf");

    let config = merge_config(vec![a, b], output.clone());
    let (_, stats) = merge_pdfs(&config).await.unwrap();

    assert_eq!(stats.total_pages, 5);
    assert_eq!(saved_page_widths(&output), vec![100, 101, 200, 201, 202]);
}

#[tokio::test]
async fn test_merge_single_file() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "only.pdf", 3, 100);
    let output = temp_dir.path().join("merged.pdf");

    let config = merge_config(vec![a], output.clone());
    let (_, stats) = merge_pdfs(&config).await.unwrap();

    assert_eq!(stats.files_merged, 1);
    assert_eq!(stats.total_pages, 3);
    assert_eq!(saved_page_widths(&output), vec![100, 101, 102]);
}

#[tokio::test]
async fn test_merge_overwrites_existing_output_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", 1, 100);
    let output = temp_dir.path().join("merged.pdf");
    std::fs::write(&output, b"stale").unwrap();

    let config = merge_config(vec![a], output.clone());
    merge_pdfs(&config).await.unwrap();

    assert_eq!(saved_page_widths(&output), vec![100]);
}
