//! Single-line classification.
//!
//! A line is classified in isolation: the result depends only on the line's
//! text and the file's [`CommentStyle`], never on the lines around it.
//! Tracking whether a block is currently open is the scanner's job.

use crate::style::CommentStyle;

/// What a single line looks like to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A line comment, or a block comment that opens and closes on this line.
    SingleLineComment,
    /// A line that opens or closes a block comment.
    BlockBoundary,
    /// Anything else, including blank lines.
    Code,
}

/// Classify one line of text against the given comment style.
///
/// # Example
///
/// ```rust
/// use glclib::{classify_line, CommentStyle, LineKind};
///
/// assert_eq!(classify_line("  // note", CommentStyle::C), LineKind::SingleLineComment);
/// assert_eq!(classify_line("/* begin", CommentStyle::C), LineKind::BlockBoundary);
/// assert_eq!(classify_line("int x = 1;", CommentStyle::C), LineKind::Code);
/// ```
pub fn classify_line(raw_line: &str, style: CommentStyle) -> LineKind {
    let line = raw_line.trim();

    if let Some(marker) = style.line_marker() {
        if line.starts_with(marker) {
            return LineKind::SingleLineComment;
        }
    }

    for markers in style.block_markers() {
        let opens = line.starts_with(markers.start);
        let closes = line.ends_with(markers.end);
        if opens && closes {
            return LineKind::SingleLineComment;
        }
        if opens || closes {
            return LineKind::BlockBoundary;
        }
    }

    LineKind::Code
}
