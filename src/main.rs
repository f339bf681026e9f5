//! Workspace Prepublish - swap intra-workspace dependency references for
//! publishing, and back.
//!
//! This binary rewrites `workspace:*` references to caret semver ranges
//! before a publish run and restores them afterward, driven by a static
//! dependency matrix.

use std::process;
use workspace_prepublish::cli;
use workspace_prepublish::cli::OutputManager;

fn main() {
    env_logger::init();

    match cli::run() {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Create output manager for error display (never quiet for fatal errors)
            let output = OutputManager::new(false);
            output.error(&format!("Fatal error: {e}"));

            // Show recovery suggestions for critical errors
            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                output.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    output.indent(&suggestion);
                }
            }

            process::exit(1);
        }
    }
}
