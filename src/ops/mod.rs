//! PDF operations.
//!
//! This module provides the two core operations:
//! - Document concatenation ([`merge`])
//! - Page subset extraction ([`split`])
//!
//! Both operate on validated configurations and never touch the output
//! path until the full result document has been assembled.

pub mod merge;
pub mod split;

pub use merge::{MergeOutcome, MergeStatistics, Merger, merge_pdfs};
pub use split::{SplitStatistics, Splitter, split_pdf};
