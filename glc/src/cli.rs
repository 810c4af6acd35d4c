//! Command line parsing.
//!
//! Flags take their value after `=` (`-d=src`, `-e=.c,.h`, `--dir=src`). A
//! value given any other way (`-d src`, `-dsrc`) is an invalid argument. When
//! a flag is repeated the last occurrence wins.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ErrorKind};
use clap::{Arg, ArgAction, ArgMatches, Command};
use glclib::{ExtensionFilter, ScanOptions};
use thiserror::Error;

/// Malformed or missing command line arguments.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("No arguments passed.")]
    NoArguments,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No directory passed.")]
    MissingDirectory,

    #[error("No exts passed.")]
    MissingExtensions,
}

/// Everything a counting run needs.
#[derive(Debug, Clone)]
pub struct Config {
    pub directory: PathBuf,
    pub filter: ExtensionFilter,
    pub verbose: bool,
    pub scan: ScanOptions,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum CliAction {
    Help,
    Version(String),
    Run(Config),
}

/// Build the clap Command structure
pub fn build_command() -> Command {
    Command::new("glc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count code and comment lines across a directory tree")
        .disable_help_flag(true)
        .args_override_self(true)
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .value_name("PATH")
                .num_args(1)
                .require_equals(true)
                .help("Directory to inspect"),
        )
        .arg(
            Arg::new("ext")
                .short('e')
                .long("ext")
                .value_name("EXTS")
                .num_args(1)
                .require_equals(true)
                .help("Comma-separated file name suffixes to consider"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Print a sentence per file instead of a table"),
        )
        .arg(
            Arg::new("mask-strings")
                .short('s')
                .long("mask-strings")
                .action(ArgAction::SetTrue)
                .help("Ignore line breaks inside quoted strings"),
        )
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::SetTrue)
                .help("Show the help"),
        )
}

/// Parse the full argument list, binary name included.
pub fn parse_args<I, T>(args: I) -> Result<CliAction, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() < 2 {
        return Err(UsageError::NoArguments);
    }

    let matches = match build_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) if err.kind() == ErrorKind::DisplayVersion => {
            return Ok(CliAction::Version(err.render().to_string()));
        }
        Err(err) => return Err(invalid_argument(&err)),
    };

    if matches.get_flag("help") {
        return Ok(CliAction::Help);
    }

    config_from_matches(&matches).map(CliAction::Run)
}

fn config_from_matches(matches: &ArgMatches) -> Result<Config, UsageError> {
    let filter = matches
        .get_one::<String>("ext")
        .map(|list| ExtensionFilter::parse(list))
        .unwrap_or_default();
    if filter.is_empty() {
        return Err(UsageError::MissingExtensions);
    }

    let directory = matches
        .get_one::<String>("dir")
        .map(|d| strip_quotes(d))
        .unwrap_or_default();
    if directory.is_empty() {
        return Err(UsageError::MissingDirectory);
    }

    Ok(Config {
        directory: PathBuf::from(directory),
        filter,
        verbose: matches.get_flag("verbose"),
        scan: ScanOptions::new().mask_strings(matches.get_flag("mask-strings")),
    })
}

fn strip_quotes(value: &str) -> String {
    value.chars().filter(|c| *c != '"' && *c != '\'').collect()
}

fn invalid_argument(err: &clap::Error) -> UsageError {
    let arg = err
        .get(ContextKind::InvalidArg)
        .map(|value| value.to_string())
        .unwrap_or_else(|| err.kind().as_str().unwrap_or("unrecognized input").to_string());
    UsageError::InvalidArgument(arg)
}
