//! Page selection parsing.
//!
//! This module turns a page range expression such as `"1,2,3-5,7"` into a
//! concrete, ordered set of 1-based page numbers. Parsing is pure: no I/O,
//! no knowledge of any particular document. Bounds checking against a real
//! document happens separately via [`PageSet::validate_against`].

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{PdfToolError, Result};

/// An ordered set of 1-based page numbers.
///
/// Built from a page range expression: comma-separated tokens, each either
/// a single page number or an inclusive `start-end` range. The result is
/// always sorted ascending with no duplicates, regardless of token order
/// or overlap between tokens.
///
/// # Examples
///
/// ```
/// use pdftool::pages::PageSet;
///
/// let set = PageSet::parse("1,2,3-5,7").unwrap();
/// assert_eq!(set.as_slice(), &[1, 2, 3, 4, 5, 7]);
///
/// assert!(PageSet::parse("5-3").is_err());
/// assert!(PageSet::parse("1,,2").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSet {
    pages: Vec<u32>,
}

impl PageSet {
    /// Parse a page range expression.
    ///
    /// Whitespace anywhere in the expression is ignored. Any malformed
    /// token aborts the whole parse; partial results are discarded and the
    /// error names the offending token.
    ///
    /// # Errors
    ///
    /// Returns [`PdfToolError::InvalidPageRange`] if:
    /// - a token is empty (e.g. a trailing comma)
    /// - a token is not a valid positive integer
    /// - a range token does not split into exactly two integers
    /// - a range has `start > end`
    pub fn parse(expr: &str) -> Result<Self> {
        let cleaned: String = expr.chars().filter(|c| !c.is_whitespace()).collect();

        let mut pages = BTreeSet::new();

        for token in cleaned.split(',') {
            if token.is_empty() {
                return Err(PdfToolError::invalid_page_range(token, "empty token"));
            }

            if token.contains('-') {
                let parts: Vec<&str> = token.split('-').collect();
                if parts.len() != 2 {
                    return Err(PdfToolError::invalid_page_range(
                        token,
                        "expected a single start-end pair",
                    ));
                }

                let start = parse_page_number(token, parts[0])?;
                let end = parse_page_number(token, parts[1])?;

                if start > end {
                    return Err(PdfToolError::invalid_page_range(
                        token,
                        format!("start page {start} is greater than end page {end}"),
                    ));
                }

                pages.extend(start..=end);
            } else {
                pages.insert(parse_page_number(token, token)?);
            }
        }

        Ok(Self {
            pages: pages.into_iter().collect(),
        })
    }

    /// The selected page numbers, ascending and deduplicated.
    pub fn as_slice(&self) -> &[u32] {
        &self.pages
    }

    /// Iterate over the selected page numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.pages.iter().copied()
    }

    /// Number of distinct pages selected.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the set contains no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Check if a page number is part of the selection.
    pub fn contains(&self, page: u32) -> bool {
        self.pages.binary_search(&page).is_ok()
    }

    /// Check every selected page against a document's page count.
    ///
    /// # Errors
    ///
    /// Returns [`PdfToolError::PageOutOfBounds`] naming the first page that
    /// falls outside `1..=total_pages`. Zero can never occur here since
    /// [`PageSet::parse`] rejects it.
    pub fn validate_against(&self, total_pages: usize) -> Result<()> {
        for page in self.iter() {
            if page as usize > total_pages {
                return Err(PdfToolError::page_out_of_bounds(page, total_pages));
            }
        }
        Ok(())
    }
}

impl fmt::Display for PageSet {
    /// Formats the set as a comma-separated expression that parses back to
    /// the same set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for page in &self.pages {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{page}")?;
            first = false;
        }
        Ok(())
    }
}

fn parse_page_number(token: &str, s: &str) -> Result<u32> {
    let page: u32 = s
        .parse()
        .map_err(|_| PdfToolError::invalid_page_range(token, format!("'{s}' is not a number")))?;

    if page == 0 {
        return Err(PdfToolError::invalid_page_range(
            token,
            "page numbers are 1-based",
        ));
    }

    Ok(page)
}
