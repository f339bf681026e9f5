//! Command line interface for workspace_prepublish.
//!
//! One word selects the operation. Anything else, including no argument at
//! all, prints usage to stdout and exits non-zero without touching any file.

mod args;
mod commands;
mod output;

pub use args::{Args, Command};
pub use commands::{RunReport, execute_command};
pub use output::OutputManager;

use crate::error::Result;
use clap::{CommandFactory, Parser, error::ErrorKind};

/// Main CLI entry point, returning the process exit code
pub fn run() -> Result<i32> {
    match Args::try_parse() {
        Ok(args) => {
            if let Err(reason) = args.validate() {
                return Err(crate::error::CliError::InvalidArguments { reason }.into());
            }
            execute_command(&args)
        }
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(0)
            }
            _ => {
                // Missing or unrecognized command: usage on stdout, no mutation
                let output = OutputManager::new(false);
                let mut cmd = Args::command();
                output.println(&cmd.render_help().to_string());
                Ok(1)
            }
        },
    }
}
