//! Manifest access at convention-based paths.
//!
//! Each package's manifest lives at `<root>/packages/<package>/package.json`.
//! Manifests pre-exist on disk; this module reads them, and overwrites them in
//! place with 2-space indented JSON and a single trailing newline. No backup
//! is kept.

use crate::error::{ManifestError, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// In-memory manifest document: the top-level JSON object of a package.json
pub type Manifest = serde_json::Map<String, Value>;

/// Reads and writes package manifests under a fixed workspace root
#[derive(Debug, Clone)]
pub struct ManifestStore {
    root: PathBuf,
}

impl ManifestStore {
    /// Create a store rooted at the given workspace directory
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Workspace root this store resolves packages against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Convention-based path of a package's manifest
    pub fn manifest_path(&self, package: &str) -> PathBuf {
        self.root.join("packages").join(package).join("package.json")
    }

    /// Read and parse a package's manifest
    pub fn read(&self, package: &str) -> Result<Manifest> {
        let path = self.manifest_path(package);
        let raw = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ManifestError::NotFound {
                    package: package.to_string(),
                    path: path.clone(),
                }
                .into()
            } else {
                crate::error::PrepublishError::Io(e)
            }
        })?;

        let value: Value =
            serde_json::from_str(&raw).map_err(|e| ManifestError::Malformed {
                package: package.to_string(),
                reason: e.to_string(),
            })?;

        match value {
            Value::Object(manifest) => Ok(manifest),
            other => Err(ManifestError::Malformed {
                package: package.to_string(),
                reason: format!("expected a JSON object at the top level, found {other}"),
            }
            .into()),
        }
    }

    /// Serialize and overwrite a package's manifest in place, keeping keys in
    /// their original order
    pub fn write(&self, package: &str, manifest: &Manifest) -> Result<()> {
        let path = self.manifest_path(package);
        let mut body = serde_json::to_string_pretty(manifest)?;
        body.push('\n');
        std::fs::write(&path, body).map_err(|e| ManifestError::WriteFailed {
            path: path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Current declared version of a package.
    ///
    /// A manifest without a `version` string is an error rather than a silent
    /// `^undefined` range downstream.
    pub fn current_version(&self, package: &str) -> Result<String> {
        let manifest = self.read(package)?;
        match manifest.get("version").and_then(Value::as_str) {
            Some(version) => Ok(version.to_string()),
            None => Err(ManifestError::MissingVersionField {
                package: package.to_string(),
            }
            .into()),
        }
    }
}
