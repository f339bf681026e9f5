//! # Workspace Prepublish
//!
//! Rewrites intra-workspace dependency version specifiers in a monorepo
//! immediately before publishing, and restores them afterward.
//!
//! During development, sibling packages reference each other with the
//! `workspace:*` specifier so the local in-repo copy always wins. Published
//! manifests must carry real semver ranges instead. This crate swaps the
//! development references for caret ranges derived from each dependency's
//! current declared version (`prepare`), and reverses the swap after the
//! publish step has consumed the rewritten manifests (`restore`).
//!
//! Which references move, and between which dependency sections, is driven by
//! a static [`matrix::DependencyMatrix`] built once at startup and passed
//! explicitly through the run.
//!
//! ## Usage
//!
//! ```bash
//! workspace_prepublish prepare    # pin workspace:* references for publish
//! workspace_prepublish restore    # put workspace:* references back
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod manifest;
pub mod matrix;
pub mod mutate;

// Re-export main types for public API
pub use cli::{Args, Command, RunReport};
pub use error::{CliError, ManifestError, PrepublishError, Result};
pub use manifest::{Manifest, ManifestStore};
pub use matrix::{DependencyEdge, DependencyMatrix, MatrixEntry, WORKSPACE_SPEC};
pub use mutate::{prepare, restore};
