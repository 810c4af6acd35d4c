//! # glclib
//!
//! A lines of code counter library that splits every line of a source file
//! into one of two buckets: code or comment.
//!
//! ## Overview
//!
//! Files are matched by name suffix and each file gets a comment style from
//! its extension:
//!
//! - **Python** (`.py`): `#` line comments, `"""` and `'''` blocks
//! - **HTML** (`.html`): `<!-- -->` blocks
//! - **Assembly** (`.asm`, `.s`, `.S`): `;` line comments
//! - **C** (everything else): `//` line comments, `/* */` blocks
//!
//! Classification is line based, not a lexer: a line is a comment if it
//! starts with a comment marker, or if it sits inside a block comment that was
//! opened on an earlier line. Blank lines count as code.
//!
//! ## Example
//!
//! ```rust
//! use glclib::{count_directory, scan_source, CommentStyle, ExtensionFilter, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Count a string
//! let counts = scan_source("# comment\nx = 1\n", CommentStyle::Python, &ScanOptions::new());
//! assert_eq!(counts.loc, 1);
//! assert_eq!(counts.comment_lines, 1);
//!
//! // Count a directory tree
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("lib.c"), "/* lib */\nint f(void);\n").unwrap();
//! let filter = ExtensionFilter::parse(".c,.h");
//! let (_, result) = count_directory(dir.path(), &filter, &ScanOptions::new()).unwrap();
//! assert_eq!(result.totals.total_lines(), 2);
//! ```

pub mod classify;
pub mod counter;
pub mod error;
pub mod filter;
pub mod report;
pub mod scanner;
pub mod stats;
pub mod style;

pub use classify::{classify_line, LineKind};
pub use counter::{count_directory, count_files, CountResult};
pub use error::GlcError;
pub use filter::{discover_files, ExtensionFilter};
pub use report::{verbose_lines, TableReport};
pub use scanner::{mask_string_literals, scan_file, scan_source, ScanOptions};
pub use stats::{FileResult, LineCounts, Totals};
pub use style::{BlockMarkers, CommentStyle};

/// Result type for glclib operations
pub type Result<T> = std::result::Result<T, GlcError>;
