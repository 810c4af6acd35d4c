//! # glc
//!
//! A CLI tool that counts code and comment lines across a directory tree.
//!
//! ## Usage
//!
//! ```bash
//! # Table of every .c and .h file under src/
//! glc -d=src -e=.c,.h
//!
//! # One sentence per file
//! glc -d=. -e=.py -v
//! ```
//!
//! Exit status is 1 for usage errors, help, and unreadable files; 0 otherwise,
//! including when no file matched.

mod cli;
mod render;

use std::process::ExitCode;

use anyhow::Context;
use glclib::count_directory;

use cli::{CliAction, Config};

fn run(config: &Config) -> anyhow::Result<()> {
    if !config.directory.is_dir() {
        render::print_warning(format!(
            "The specified directory {} does not exist.",
            config.directory.display()
        ));
    }

    let (paths, result) = count_directory(&config.directory, &config.filter, &config.scan)
        .with_context(|| format!("failed to count lines in {}", config.directory.display()))?;

    if paths.is_empty() {
        render::print_no_files(&config.directory, &config.filter);
        return Ok(());
    }

    if config.verbose {
        render::print_verbose(&result);
    } else {
        render::print_table(&result);
    }
    Ok(())
}

fn main() -> ExitCode {
    match cli::parse_args(std::env::args_os()) {
        Ok(CliAction::Run(config)) => match run(&config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                render::print_error(format!("{e:#}"));
                render::print_usage();
                ExitCode::FAILURE
            }
        },
        Ok(CliAction::Help) => {
            render::print_usage();
            ExitCode::FAILURE
        }
        Ok(CliAction::Version(version)) => {
            print!("{version}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            render::print_error(e);
            render::print_usage();
            ExitCode::FAILURE
        }
    }
}
