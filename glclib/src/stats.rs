//! Core data structures for line counts.
//!
//! Every scanned line lands in exactly one of two buckets:
//!
//! - **loc**: lines of code, including blank lines
//! - **comment_lines**: line comments and every line of a block comment
//!
//! so `total_lines()` is always the sum of the two.

use serde::Serialize;
use std::ops::AddAssign;
use std::path::PathBuf;

/// Line counts for a chunk of source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    /// Lines of code (anything not classified as a comment)
    pub loc: u64,
    /// Lines inside or introducing a comment
    pub comment_lines: u64,
}

impl LineCounts {
    /// Create a new LineCounts with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total lines seen.
    pub fn total_lines(&self) -> u64 {
        self.loc + self.comment_lines
    }
}

/// Counts for a single scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    /// Path to the file, as it was discovered.
    pub path: PathBuf,
    /// Lines of code in this file.
    pub loc: u64,
    /// Commented lines in this file.
    pub comment_lines: u64,
}

impl FileResult {
    /// Create a file result from a path and its line counts.
    pub fn new(path: PathBuf, counts: LineCounts) -> Self {
        Self {
            path,
            loc: counts.loc,
            comment_lines: counts.comment_lines,
        }
    }

    /// Total lines in the file.
    pub fn total_lines(&self) -> u64 {
        self.loc + self.comment_lines
    }
}

/// Running sums across every scanned file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Number of files folded in
    pub file_count: usize,
    /// Sum of every file's `loc`
    pub loc: u64,
    /// Sum of every file's `comment_lines`
    pub comment_lines: u64,
}

impl Totals {
    /// Create empty totals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum a batch of file results.
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a FileResult>) -> Self {
        let mut totals = Self::new();
        for result in results {
            totals += result;
        }
        totals
    }

    /// Total lines across all files.
    pub fn total_lines(&self) -> u64 {
        self.loc + self.comment_lines
    }
}

impl AddAssign<&FileResult> for Totals {
    fn add_assign(&mut self, file: &FileResult) {
        self.file_count += 1;
        self.loc += file.loc;
        self.comment_lines += file.comment_lines;
    }
}
