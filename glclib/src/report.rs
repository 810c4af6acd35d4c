//! Report formatting.
//!
//! Two renderings of a [`CountResult`]: a fixed-width table with one row per
//! file followed by a totals block, and plain sentences for verbose mode.
//! Both produce strings only; printing is up to the caller.

use crate::counter::CountResult;
use crate::stats::FileResult;

const FILE_NAME_HEADER: &str = "File Name";
const FILE_COLUMNS: &str = "File Lines | File LoCs | File Commented Lines";
const TOTALS_HEADER: &str = "Total Lines | Total LoCs | Total Commented Lines";
const SEPARATOR_WIDTH: usize = 50;

// Widths of the "File Lines"/"File LoCs" and "Total Lines"/"Total LoCs" headers.
const FILE_LINES_WIDTH: usize = 10;
const FILE_LOCS_WIDTH: usize = 9;
const TOTAL_LINES_WIDTH: usize = 11;
const TOTAL_LOCS_WIDTH: usize = 10;

/// Table-ready report.
///
/// Every field is a fully formatted line; the name column is as wide as the
/// longest path in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    /// Column header line
    pub header: String,
    /// One line per file, in scan order
    pub rows: Vec<String>,
    /// Dashed line between the file rows and the totals
    pub separator: String,
    /// Totals header line
    pub totals_header: String,
    /// Totals values line
    pub totals_row: String,
}

impl TableReport {
    /// Build the table for a count result.
    pub fn from_result(result: &CountResult) -> Self {
        let name_width = result
            .files
            .iter()
            .map(|f| display_path(f).chars().count())
            .max()
            .unwrap_or(0);

        let header = format!(
            "{:<width$} | {}",
            FILE_NAME_HEADER,
            FILE_COLUMNS,
            width = name_width
        );

        let rows = result
            .files
            .iter()
            .map(|f| {
                format!(
                    "{:<name_width$} | {:<lines_width$} | {:<locs_width$} | {}",
                    display_path(f),
                    f.total_lines(),
                    f.loc,
                    f.comment_lines,
                    lines_width = FILE_LINES_WIDTH,
                    locs_width = FILE_LOCS_WIDTH,
                )
            })
            .collect();

        let totals = &result.totals;
        let totals_row = format!(
            "{:<lines_width$} | {:<locs_width$} | {}",
            totals.total_lines(),
            totals.loc,
            totals.comment_lines,
            lines_width = TOTAL_LINES_WIDTH,
            locs_width = TOTAL_LOCS_WIDTH,
        );

        Self {
            header,
            rows,
            separator: "-".repeat(SEPARATOR_WIDTH),
            totals_header: TOTALS_HEADER.to_string(),
            totals_row,
        }
    }

    /// All lines of the table, in print order.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(self.header.as_str());
        lines.extend(self.rows.iter().map(String::as_str));
        lines.push(self.separator.as_str());
        lines.push(self.totals_header.as_str());
        lines.push(self.totals_row.as_str());
        lines
    }
}

/// Verbose rendering: one sentence per file, then a summary sentence.
pub fn verbose_lines(result: &CountResult) -> Vec<String> {
    let mut lines: Vec<String> = result
        .files
        .iter()
        .map(|f| {
            format!(
                "{} contains {} lines which are divided in {} LoCs and {} commented lines",
                display_path(f),
                f.total_lines(),
                f.loc,
                f.comment_lines
            )
        })
        .collect();

    let totals = &result.totals;
    lines.push(format!(
        "This project contains in total {} lines, which are divided in: {} LoCs and {} commented lines",
        totals.total_lines(),
        totals.loc,
        totals.comment_lines
    ));
    lines
}

fn display_path(file: &FileResult) -> String {
    file.path.display().to_string()
}
