//! Command-line entry points.
//!
//! The dispatcher runs before any terminal setup:
//!
//! ```ignore
//! use serp_studio::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, StudioConfig::from_env).await {
//!     std::process::exit(if result? { 0 } else { 1 });
//! }
//! // No CLI command, continue to the interactive preview
//! ```

pub mod args;
pub mod check;
pub mod serve;
pub mod version;

pub use args::{parse_args, CheckArgs, CliCommand, USAGE};
pub use check::{check_snippet, handle_check_command, render_report};
pub use serve::handle_serve_command;
pub use version::{version_line, VERSION};

use color_eyre::{eyre::eyre, Report, Result};

use crate::config::StudioConfig;
use crate::error::{StudioError, StudioResult};

/// Run a CLI command if applicable.
///
/// * `None` - the command is `RunTui`
/// * `Some(Ok(true))` - the command succeeded
/// * `Some(Ok(false))` - the command ran but should exit non-zero
/// * `Some(Err(e))` - the command failed
///
/// `load_config` is only called by commands that need configuration, so
/// `--version` and `--help` work even when the environment is invalid.
pub async fn run_cli_command<F>(command: CliCommand, load_config: F) -> Option<Result<bool>>
where
    F: FnOnce() -> StudioResult<StudioConfig>,
{
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(true))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(true))
        }
        CliCommand::Invalid(message) => {
            eprintln!("serp-studio: {}\n\n{}", message, USAGE);
            Some(Ok(false))
        }
        CliCommand::Check(args) => Some(handle_check_command(&args)),
        CliCommand::Serve => {
            let config = match load_config() {
                Ok(config) => config,
                Err(e) => return Some(Err(config_report(e))),
            };
            Some(handle_serve_command(&config).await.map(|()| true))
        }
        CliCommand::RunTui => None,
    }
}

/// Turn a configuration error into a report carrying its recovery hint.
pub fn config_report(error: StudioError) -> Report {
    eyre!("{}\n{}", error.user_message(), error.recovery_hint())
}
