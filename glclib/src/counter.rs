//! High-level counting API.
//!
//! This module ties discovery and scanning together: it scans an ordered list
//! of files one after another and folds each result into the running totals.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::filter::{discover_files, ExtensionFilter};
use crate::scanner::{scan_file, ScanOptions};
use crate::stats::{FileResult, Totals};
use crate::Result;

/// Result of counting a batch of files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountResult {
    /// Per-file results, in scan order
    pub files: Vec<FileResult>,
    /// Sums across `files`
    pub totals: Totals,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file result and fold it into the totals.
    pub fn push(&mut self, file: FileResult) {
        self.totals += &file;
        self.files.push(file);
    }

    /// True if no file was counted.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Scan every path in order.
///
/// Files are scanned sequentially; the first file that cannot be read aborts
/// the whole count and its error is returned.
pub fn count_files<P: AsRef<Path>>(paths: &[P], options: &ScanOptions) -> Result<CountResult> {
    let mut result = CountResult::new();
    for path in paths {
        result.push(scan_file(path, options)?);
    }
    Ok(result)
}

/// Discover matching files under `root` and count them.
///
/// Returns the discovered paths alongside the result so callers can tell an
/// empty directory apart from one with empty files.
///
/// # Example
///
/// ```rust
/// use glclib::{count_directory, ExtensionFilter, ScanOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("main.c"), "// entry\nint main() { return 0; }\n").unwrap();
///
/// let filter = ExtensionFilter::parse(".c");
/// let (paths, result) = count_directory(dir.path(), &filter, &ScanOptions::new()).unwrap();
/// assert_eq!(paths.len(), 1);
/// assert_eq!(result.totals.loc, 1);
/// assert_eq!(result.totals.comment_lines, 1);
/// ```
pub fn count_directory(
    root: impl AsRef<Path>,
    filter: &ExtensionFilter,
    options: &ScanOptions,
) -> Result<(Vec<PathBuf>, CountResult)> {
    let paths = discover_files(root, filter);
    let result = count_files(&paths, options)?;
    Ok((paths, result))
}
