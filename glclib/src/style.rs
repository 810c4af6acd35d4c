//! Comment style profiles, selected from a file's name.
//!
//! Every file maps to exactly one [`CommentStyle`]. Unknown extensions fall
//! back to C-style comments.

use std::path::Path;

/// A pair of markers that open and close a multi-line comment block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMarkers {
    pub start: &'static str,
    pub end: &'static str,
}

impl BlockMarkers {
    const fn new(start: &'static str, end: &'static str) -> Self {
        Self { start, end }
    }
}

const PYTHON_BLOCKS: &[BlockMarkers] = &[
    BlockMarkers::new("\"\"\"", "\"\"\""),
    BlockMarkers::new("'''", "'''"),
];
const HTML_BLOCKS: &[BlockMarkers] = &[BlockMarkers::new("<!--", "-->")];
const C_BLOCKS: &[BlockMarkers] = &[BlockMarkers::new("/*", "*/")];

/// The comment markers recognized for a family of languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `#` line comments, `"""` and `'''` blocks
    Python,
    /// `<!-- -->` blocks only
    Html,
    /// `;` line comments only
    Assembly,
    /// `//` line comments, `/* */` blocks
    C,
}

impl CommentStyle {
    /// Pick the style for a file name by its suffix.
    ///
    /// - `.py` → Python
    /// - `.html` → Html
    /// - `.asm`, `.s`, `.S` → Assembly
    /// - anything else → C
    pub fn from_file_name(name: &str) -> Self {
        if name.ends_with(".py") {
            Self::Python
        } else if name.ends_with(".html") {
            Self::Html
        } else if [".asm", ".s", ".S"].iter().any(|ext| name.ends_with(*ext)) {
            Self::Assembly
        } else {
            Self::C
        }
    }

    /// Pick the style for a path, looking only at its final component.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let name = path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        Self::from_file_name(&name)
    }

    /// Marker that turns the rest of a line into a comment, if any.
    pub fn line_marker(self) -> Option<&'static str> {
        match self {
            Self::Python => Some("#"),
            Self::Html => None,
            Self::Assembly => Some(";"),
            Self::C => Some("//"),
        }
    }

    /// Block comment marker pairs, checked in order.
    pub fn block_markers(self) -> &'static [BlockMarkers] {
        match self {
            Self::Python => PYTHON_BLOCKS,
            Self::Html => HTML_BLOCKS,
            Self::Assembly => &[],
            Self::C => C_BLOCKS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(CommentStyle::from_file_name("setup.py"), CommentStyle::Python);
        assert_eq!(CommentStyle::from_file_name("index.html"), CommentStyle::Html);
        assert_eq!(CommentStyle::from_file_name("boot.asm"), CommentStyle::Assembly);
        assert_eq!(CommentStyle::from_file_name("start.s"), CommentStyle::Assembly);
        assert_eq!(CommentStyle::from_file_name("start.S"), CommentStyle::Assembly);
    }

    #[test]
    fn test_unknown_extensions_default_to_c() {
        assert_eq!(CommentStyle::from_file_name("main.c"), CommentStyle::C);
        assert_eq!(CommentStyle::from_file_name("lib.rs"), CommentStyle::C);
        assert_eq!(CommentStyle::from_file_name("Makefile"), CommentStyle::C);
        assert_eq!(CommentStyle::from_file_name(""), CommentStyle::C);
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        assert_eq!(CommentStyle::from_file_name("SCRIPT.PY"), CommentStyle::C);
        assert_eq!(CommentStyle::from_file_name("page.HTML"), CommentStyle::C);
    }

    #[test]
    fn test_from_path_uses_file_name() {
        assert_eq!(
            CommentStyle::from_path("project.py/src/main.c"),
            CommentStyle::C
        );
        assert_eq!(
            CommentStyle::from_path("src/tools/gen.py"),
            CommentStyle::Python
        );
    }

    #[test]
    fn test_python_has_both_triple_quote_blocks() {
        let starts: Vec<&str> = CommentStyle::Python
            .block_markers()
            .iter()
            .map(|m| m.start)
            .collect();
        assert_eq!(starts, vec!["\"\"\"", "'''"]);
    }

    #[test]
    fn test_marker_tables() {
        assert_eq!(CommentStyle::Html.line_marker(), None);
        assert!(CommentStyle::Assembly.block_markers().is_empty());
        assert_eq!(CommentStyle::C.line_marker(), Some("//"));
        assert_eq!(CommentStyle::C.block_markers()[0].end, "*/");
    }
}
