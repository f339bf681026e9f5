//! Command execution: drive prepare/restore across the dependency matrix.
//!
//! Runs are buffered: every manifest (and every version source) is read and
//! mutated in memory before the first write, so a read or lookup failure
//! leaves no file touched.

use super::args::{Args, Command};
use super::output::OutputManager;
use crate::error::Result;
use crate::manifest::{Manifest, ManifestStore};
use crate::matrix::{DependencyMatrix, MatrixEntry};
use crate::mutate::{self, VersionLookup};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summary of a completed prepare or restore run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Number of manifests written
    pub packages_updated: usize,
    /// Number of dependency references rewritten
    pub dependencies_rewritten: usize,
    /// Manifest files that were overwritten
    pub modified_files: Vec<PathBuf>,
}

/// Execute the selected command against the built-in matrix
pub fn execute_command(args: &Args) -> Result<i32> {
    let output = OutputManager::new(false);
    let store = ManifestStore::new(&args.root);
    let matrix = DependencyMatrix::builtin();

    let report = match args.command {
        Command::Prepare => {
            output.info("Pinning workspace dependencies for publish");
            run_prepare(&store, &matrix, &output)?
        }
        Command::Restore => {
            output.info("Restoring workspace dependency references");
            run_restore(&store, &matrix, &output)?
        }
    };

    output.success(&format!(
        "{} manifest(s) updated, {} dependency reference(s) rewritten",
        report.packages_updated, report.dependencies_rewritten
    ));
    Ok(0)
}

fn run_prepare(
    store: &ManifestStore,
    matrix: &DependencyMatrix,
    output: &OutputManager,
) -> Result<RunReport> {
    let versions = collect_versions(store, matrix)?;
    let mut staged = load_all(store, matrix)?;

    for (entry, manifest) in &mut staged {
        mutate::prepare(manifest, &entry.edges, &versions)?;
    }

    write_all(store, &staged, output)
}

fn run_restore(
    store: &ManifestStore,
    matrix: &DependencyMatrix,
    output: &OutputManager,
) -> Result<RunReport> {
    let mut staged = load_all(store, matrix)?;

    for (entry, manifest) in &mut staged {
        mutate::restore(manifest, &entry.edges);
    }

    write_all(store, &staged, output)
}

/// Read the declared version of every `version_from` package up front
fn collect_versions(store: &ManifestStore, matrix: &DependencyMatrix) -> Result<VersionLookup> {
    let mut versions = VersionLookup::new();
    for source in matrix.version_sources() {
        let version = store.current_version(source)?;
        log::debug!("{source} is at version {version}");
        versions.insert(source.to_string(), version);
    }
    Ok(versions)
}

/// Read every matrix package's manifest before any mutation
fn load_all<'a>(
    store: &ManifestStore,
    matrix: &'a DependencyMatrix,
) -> Result<Vec<(&'a MatrixEntry, Manifest)>> {
    let mut staged = Vec::with_capacity(matrix.len());
    for entry in matrix.entries() {
        staged.push((entry, store.read(entry.package)?));
    }
    Ok(staged)
}

/// Persist every mutated manifest and report what was touched
fn write_all(
    store: &ManifestStore,
    staged: &[(&MatrixEntry, Manifest)],
    output: &OutputManager,
) -> Result<RunReport> {
    let mut modified_files = Vec::with_capacity(staged.len());
    let mut dependencies_rewritten = 0;

    for (entry, manifest) in staged {
        store.write(entry.package, manifest)?;
        let path = store.manifest_path(entry.package);
        log::info!("wrote {}", path.display());
        output.indent(&format!(
            "{} ({} reference(s))",
            entry.package,
            entry.edges.len()
        ));
        dependencies_rewritten += entry.edges.len();
        modified_files.push(path);
    }

    Ok(RunReport {
        packages_updated: staged.len(),
        dependencies_rewritten,
        modified_files,
    })
}
