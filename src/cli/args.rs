//! Command line argument parsing and validation.
//!
//! Minimal surface: one word selects the operation, plus an optional
//! workspace root override.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Swap intra-workspace dependency references for publishing
#[derive(Parser, Debug)]
#[command(
    name = "workspace_prepublish",
    version,
    about = "Swap intra-workspace dependency references for publishing",
    long_about = "Rewrite workspace:* dependency references to caret semver ranges \
before publishing, and put them back afterward.

Usage:
  workspace_prepublish prepare
  workspace_prepublish restore"
)]
pub struct Args {
    /// Operation to apply to every package in the dependency matrix
    #[command(subcommand)]
    pub command: Command,

    /// Workspace root containing the packages/ directory
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,
}

/// Operation selected on the command line
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Rewrite workspace:* references to caret ranges derived from each
    /// dependency's current declared version
    Prepare,
    /// Put workspace:* references back in their development sections
    Restore,
}

impl Args {
    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.root.as_os_str().is_empty() {
            return Err("Workspace root must not be empty".to_string());
        }
        Ok(())
    }
}
