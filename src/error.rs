//! Error types for prepare/restore operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for workspace_prepublish operations
pub type Result<T> = std::result::Result<T, PrepublishError>;

/// Main error type for all workspace_prepublish operations
#[derive(Error, Debug)]
pub enum PrepublishError {
    /// Manifest access and content errors
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Manifest-specific errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file missing at its convention-based path
    #[error("Manifest for package '{package}' not found at {path}")]
    NotFound {
        /// Package name
        package: String,
        /// Path where the manifest was expected
        path: PathBuf,
    },

    /// Manifest file exists but is not a valid JSON object
    #[error("Malformed manifest for package '{package}': {reason}")]
    Malformed {
        /// Package name
        package: String,
        /// Reason for the error
        reason: String,
    },

    /// Manifest has no `version` string to derive a pinned range from
    #[error("Manifest for package '{package}' has no version field")]
    MissingVersionField {
        /// Package name
        package: String,
    },

    /// Failed to persist a mutated manifest
    #[error("Failed to write manifest at {path}: {source}")]
    WriteFailed {
        /// Path being written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl PrepublishError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            PrepublishError::Manifest(ManifestError::NotFound { package, path }) => vec![
                format!("Check that {} exists", path.display()),
                format!(
                    "Run with --root pointing at the workspace containing packages/{package}"
                ),
            ],
            PrepublishError::Manifest(ManifestError::MissingVersionField { package }) => vec![
                format!(
                    "Run the release version bump so packages/{package}/package.json has a version"
                ),
            ],
            PrepublishError::Manifest(ManifestError::WriteFailed { path, .. }) => vec![
                format!("Check write permissions for {}", path.display()),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
