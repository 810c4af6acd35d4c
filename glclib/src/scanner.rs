//! Per-file scanning.
//!
//! The scanner reads a whole file, optionally masks line breaks that sit
//! inside quoted strings, splits the text into lines and feeds each line to
//! [`classify_line`], carrying one bit of state between lines: whether a block
//! comment is currently open. That state starts closed for every file.
//!
//! ## Limitations
//!
//! - Block comments do not nest.
//! - A block only closes on a line that ends with the closing marker (or
//!   starts with an opening one); `*/ int x;` leaves it open.
//! - A line that both starts with a block's opening marker and ends with its
//!   closing marker is a one-line comment. A bare `"""` line satisfies both,
//!   so a docstring whose quotes sit on lines of their own never opens a
//!   block: its body lines count as code.
//! - String masking is a quote toggle. It knows nothing about escaped quotes,
//!   mixed quote kinds or raw/triple-quoted strings, so an apostrophe in a
//!   comment flips it. It is off unless [`ScanOptions::mask_strings`] is set.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::classify::{classify_line, LineKind};
use crate::error::GlcError;
use crate::stats::{FileResult, LineCounts};
use crate::style::CommentStyle;
use crate::Result;

/// Options for scanning files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Join lines broken inside quoted strings before classifying
    pub mask_strings: bool,
}

impl ScanOptions {
    /// Create new default options (string masking off).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the string-literal mask pass.
    pub fn mask_strings(mut self, enabled: bool) -> Self {
        self.mask_strings = enabled;
        self
    }
}

/// Replace line breaks that fall inside quoted strings with spaces.
///
/// Each `'`, `"` or `` ` `` toggles the in-string flag. The returned text has
/// the same length as the input; only `\n` and `\r` characters change.
pub fn mask_string_literals(source: &str) -> Cow<'_, str> {
    let mut inside_string = false;
    let mut masked: Option<String> = None;

    for (idx, ch) in source.char_indices() {
        match ch {
            '\'' | '"' | '`' => inside_string = !inside_string,
            '\n' | '\r' if inside_string => {
                let buf = masked.get_or_insert_with(|| source[..idx].to_string());
                buf.push(' ');
                continue;
            }
            _ => {}
        }
        if let Some(buf) = masked.as_mut() {
            buf.push(ch);
        }
    }

    match masked {
        Some(buf) => Cow::Owned(buf),
        None => Cow::Borrowed(source),
    }
}

/// Count code and comment lines in a string of source text.
///
/// # Example
///
/// ```rust
/// use glclib::{scan_source, CommentStyle, ScanOptions};
///
/// let source = "// header\nint x = 1;\n/* note */";
/// let counts = scan_source(source, CommentStyle::C, &ScanOptions::new());
/// assert_eq!(counts.loc, 1);
/// assert_eq!(counts.comment_lines, 2);
/// ```
pub fn scan_source(source: &str, style: CommentStyle, options: &ScanOptions) -> LineCounts {
    let source = if options.mask_strings {
        mask_string_literals(source)
    } else {
        Cow::Borrowed(source)
    };
    let normalized = source.replace("\r\n", "\n").replace('\r', "\n");

    let mut counts = LineCounts::new();
    let mut inside_block = false;

    for line in normalized.lines() {
        let kind = classify_line(line, style);
        if inside_block {
            counts.comment_lines += 1;
            if kind == LineKind::BlockBoundary {
                inside_block = false;
            }
            continue;
        }
        match kind {
            LineKind::SingleLineComment => counts.comment_lines += 1,
            LineKind::BlockBoundary => {
                counts.comment_lines += 1;
                inside_block = true;
            }
            LineKind::Code => counts.loc += 1,
        }
    }

    counts
}

/// Read and scan a single file.
///
/// The comment style is picked from the file name.
pub fn scan_file(path: impl AsRef<Path>, options: &ScanOptions) -> Result<FileResult> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| GlcError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let style = CommentStyle::from_path(path);
    let counts = scan_source(&source, style, options);
    log::debug!(
        "{}: {:?}, {} loc, {} comment lines",
        path.display(),
        style,
        counts.loc,
        counts.comment_lines
    );

    Ok(FileResult::new(path.to_path_buf(), counts))
}
