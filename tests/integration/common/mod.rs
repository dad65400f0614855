//! Integration tests for pdftool.
//!
//! These tests exercise the full command pipelines against PDF fixtures
//! generated on the fly with lopdf.

use lopdf::dictionary;
use lopdf::{Document, Object};
use std::path::{Path, PathBuf};

/// Build an in-memory document with `pages` pages.
///
/// Each page gets a MediaBox width of `width_base + page_index`, so tests
/// can verify which source pages ended up where.
pub fn build_pdf(pages: usize, width_base: i64) -> Document {
    let mut doc = Document::with_version("1.4");

    let pages_id = doc.new_object_id();

    let mut page_ids = Vec::new();
    for i in 0..pages {
        let width = width_base + i as i64;
        let page = lopdf::dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), 792.into()],
        };
        page_ids.push(doc.add_object(page));
    }

    let pages_dict = lopdf::dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.into_iter().map(Object::Reference).collect::<Vec<Object>>(),
        "Count" => pages as i64,
    };
    doc.objects.insert(pages_id, pages_dict.into());

    let catalog_id = doc.add_object(lopdf::dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Write a fixture PDF into `dir` and return its path.
pub fn write_pdf(dir: &Path, name: &str, pages: usize, width_base: i64) -> PathBuf {
    let path = dir.join(name);
    let mut doc = build_pdf(pages, width_base);
    doc.save(&path).expect("failed to write fixture PDF");
    path
}

/// Read back the MediaBox widths of a document's pages in page order.
pub fn page_widths(doc: &Document) -> Vec<i64> {
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let Object::Dictionary(dict) = doc.get_object(page_id).unwrap() else {
                panic!("page is not a dictionary");
            };
            let Object::Array(media_box) = dict.get(b"MediaBox").unwrap() else {
                panic!("MediaBox is not an array");
            };
            media_box[2].as_i64().unwrap()
        })
        .collect()
}

/// Read back the MediaBox widths of a saved PDF in page order.
pub fn saved_page_widths(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).expect("failed to reload output PDF");
    page_widths(&doc)
}
