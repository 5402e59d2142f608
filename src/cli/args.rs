//! Command-line argument parsing.
//!
//! Hand-rolled: the surface is a few subcommands with a handful of flags.

use crate::metrics::DisplayMode;
use crate::snippet::{DEFAULT_DESCRIPTION, DEFAULT_TITLE};

/// Arguments of `serp-studio check`.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckArgs {
    pub title: String,
    pub description: String,
    pub mode: DisplayMode,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            mode: DisplayMode::Desktop,
        }
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Measure a title/description and exit
    Check(CheckArgs),
    /// Run the rewrite proxy
    Serve,
    /// Run the interactive preview (default)
    RunTui,
    /// Arguments could not be parsed
    Invalid(String),
}

impl CliCommand {
    /// True when the command needs the terminal UI.
    pub fn is_interactive(&self) -> bool {
        matches!(self, CliCommand::RunTui)
    }
}

pub const USAGE: &str = "\
Usage:
  serp-studio                     interactive preview
  serp-studio check [--title T] [--description D] [--mobile]
  serp-studio serve               run the rewrite proxy
  serp-studio --version | --help";

/// Parse command-line arguments (including the program name).
///
/// # Examples
///
/// ```
/// use serp_studio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["serp-studio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1);
    let first = match args.next() {
        Some(arg) => arg,
        None => return CliCommand::RunTui,
    };

    match first.as_str() {
        "--version" | "-V" => CliCommand::Version,
        "--help" | "-h" | "help" => CliCommand::Help,
        "serve" => match args.next() {
            None => CliCommand::Serve,
            Some(extra) => CliCommand::Invalid(format!("unexpected argument '{}'", extra)),
        },
        "check" => parse_check(args),
        other => CliCommand::Invalid(format!("unknown command '{}'", other)),
    }
}

fn parse_check<I>(mut args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut check = CheckArgs::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--title" | "-t" => match args.next() {
                Some(value) => check.title = value,
                None => return CliCommand::Invalid("--title needs a value".to_string()),
            },
            "--description" | "-d" => match args.next() {
                Some(value) => check.description = value,
                None => return CliCommand::Invalid("--description needs a value".to_string()),
            },
            "--mobile" => check.mode = DisplayMode::Mobile,
            "--desktop" => check.mode = DisplayMode::Desktop,
            other => return CliCommand::Invalid(format!("unknown check option '{}'", other)),
        }
    }
    CliCommand::Check(check)
}
