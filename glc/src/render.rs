//! Terminal output for glc.

use std::fmt::Display;
use std::path::Path;

use console::Style;
use glclib::{verbose_lines, CountResult, ExtensionFilter, TableReport};

/// Print the fixed-width table, with bold header lines on a terminal.
pub fn print_table(result: &CountResult) {
    let table = TableReport::from_result(result);
    let header = Style::new().bold();
    let lines = table.lines();
    let totals_header = lines.len() - 2;

    for (idx, line) in lines.into_iter().enumerate() {
        if idx == 0 || idx == totals_header {
            println!("{}", header.apply_to(line));
        } else {
            println!("{line}");
        }
    }
}

/// Print one sentence per file and a summary.
pub fn print_verbose(result: &CountResult) {
    for line in verbose_lines(result) {
        println!("{line}");
    }
}

/// Print the "nothing matched" message.
pub fn print_no_files(directory: &Path, filter: &ExtensionFilter) {
    println!(
        "Found 0 files in {}, considering files with these extensions: {:?}",
        directory.display(),
        filter.suffixes
    );
}

pub fn print_warning(message: impl Display) {
    let style = Style::new().yellow().for_stderr();
    eprintln!("{} {message}", style.apply_to("Warning:"));
}

pub fn print_error(message: impl Display) {
    let style = Style::new().red().bold().for_stderr();
    eprintln!("{} {message}", style.apply_to("Error:"));
}

/// Print the usage help text.
pub fn print_usage() {
    println!("Usage glc [flag=value]:");
    println!("\t-d: set the directory to inspect, e.g.: glc -d=mydir.");
    println!(
        "\t-e: set the extensions that should be considered, passing them as a list divided by commas, e.g.: glc -e=.c,\".h\",'.cpp',..."
    );
    println!("\t-v: set verbose mode.");
    println!("\t-s: ignore line breaks inside quoted strings.");
    println!("\t-h: show the help.");
    println!(
        "Note: when passing multiple flags the program will consider only the last one provided for each flag-type."
    );
}
