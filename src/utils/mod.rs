//! Utilities for input path collection.

use crate::error::{PdfToolError, Result};
use std::path::{Path, PathBuf};

/// Expand glob patterns among merge inputs into concrete filesystem paths.
///
/// Paths without glob metacharacters pass through untouched, so missing
/// files surface later as precise `FileNotFound` errors. A pattern that
/// matches nothing is itself reported as a missing file.
///
/// Pattern examples:
/// - `"chapter*.pdf"`
/// - `"./docs/**/*.pdf"`
///
/// # Errors
///
/// - Propagates `glob` parse errors.
/// - Propagates filesystem errors from the glob iterator.
/// - Returns `FileNotFound` for a pattern with zero matches.
pub fn expand_input_patterns(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut resolved_paths = Vec::new();

    for input in inputs {
        if is_glob_pattern(input) {
            let paths = expand_pattern(input)?;
            resolved_paths.extend(paths);
        } else {
            resolved_paths.push(input.clone());
        }
    }

    Ok(resolved_paths)
}

fn is_glob_pattern(path: &Path) -> bool {
    path.to_string_lossy()
        .chars()
        .any(|c| matches!(c, '*' | '?' | '['))
}

fn expand_pattern(pattern: &Path) -> Result<Vec<PathBuf>> {
    let pattern_str = pattern.to_string_lossy();

    let paths = glob::glob(&pattern_str).map_err(|err| PdfToolError::Other {
        message: err.to_string(),
    })?;

    let mut resolved_paths = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| PdfToolError::Other {
            message: err.to_string(),
        })?;
        resolved_paths.push(path);
    }

    if resolved_paths.is_empty() {
        return Err(PdfToolError::file_not_found(pattern.to_path_buf()));
    }

    Ok(resolved_paths)
}
