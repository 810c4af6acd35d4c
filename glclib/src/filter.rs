//! File discovery by extension.
//!
//! This module walks a directory tree and collects the files whose names end
//! with one of a set of suffixes.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Allowlist of file name suffixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    /// Suffixes to include (e.g. ".c", ".h")
    pub suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// Create an empty filter (matches nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list like `.c,".h",'.cpp'`.
    ///
    /// Quotes are stripped and empty entries are dropped.
    pub fn parse(list: &str) -> Self {
        list.split(',').fold(Self::new(), |filter, entry| filter.suffix(entry))
    }

    /// Add a suffix. Quotes are stripped; an empty suffix is ignored.
    pub fn suffix(mut self, suffix: &str) -> Self {
        let cleaned: String = suffix.chars().filter(|c| *c != '"' && *c != '\'').collect();
        let cleaned = cleaned.trim();
        if !cleaned.is_empty() {
            self.suffixes.push(cleaned.to_string());
        }
        self
    }

    /// True if no suffix was given.
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Check if a file name ends with one of the suffixes (case-sensitive).
    pub fn matches(&self, file_name: &str) -> bool {
        self.suffixes.iter().any(|s| file_name.ends_with(s.as_str()))
    }
}

/// Discover files under `root` whose names match the filter.
///
/// Subdirectories are walked recursively and entries are visited in file name
/// order, so the result is stable across platforms. Unreadable entries are
/// skipped. If `root` is not a directory the result is empty.
pub fn discover_files(root: impl AsRef<Path>, filter: &ExtensionFilter) -> Vec<PathBuf> {
    let root = root.as_ref();

    if !root.is_dir() {
        log::debug!("the specified directory {} does not exist", root.display());
        return Vec::new();
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                log::debug!("skipping unreadable entry: {err}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if filter.matches(&entry.file_name().to_string_lossy()) {
            log::debug!("including {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    files
}
