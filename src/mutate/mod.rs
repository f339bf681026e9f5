//! Pure prepare/restore mutations over in-memory manifests.
//!
//! Both operations walk a package's dependency edges in order and rewrite one
//! key per edge. Neither touches the filesystem; version lookups are resolved
//! by the caller up front so `prepare` stays deterministic over its inputs.

use crate::error::{ManifestError, Result};
use crate::manifest::Manifest;
use crate::matrix::{DependencyEdge, WORKSPACE_SPEC};
use serde_json::Value;
use std::collections::BTreeMap;

/// Declared versions of the packages named by `version_from` edges
pub type VersionLookup = BTreeMap<String, String>;

/// Rewrite workspace references to caret ranges for publishing.
///
/// Per edge: the dependency key is removed from the source section (dropping
/// the section if that empties it), then written to the target section as
/// `^<version>` with the version taken from the lookup. Applying this twice
/// with the same versions yields the same manifest as applying it once.
pub fn prepare(
    manifest: &mut Manifest,
    edges: &[DependencyEdge],
    versions: &VersionLookup,
) -> Result<()> {
    for edge in edges {
        let version = versions.get(edge.version_from).ok_or_else(|| {
            ManifestError::MissingVersionField {
                package: edge.version_from.to_string(),
            }
        })?;
        let pinned = format!("^{version}");

        if edge.source_field != edge.target_field {
            remove_dependency(manifest, edge.source_field, edge.dependency_name);
        }
        insert_dependency(manifest, edge.target_field, edge.dependency_name, &pinned);

        log::debug!(
            "pinned {} to {} in {}",
            edge.dependency_name,
            pinned,
            edge.target_field
        );
    }
    Ok(())
}

/// Put workspace references back after publishing.
///
/// Mirror of [`prepare`]: the dependency key is removed from the target
/// section (dropping it if emptied) and written back to the source section as
/// `workspace:*`.
pub fn restore(manifest: &mut Manifest, edges: &[DependencyEdge]) {
    for edge in edges {
        if edge.target_field != edge.source_field {
            remove_dependency(manifest, edge.target_field, edge.dependency_name);
        }
        insert_dependency(manifest, edge.source_field, edge.dependency_name, WORKSPACE_SPEC);

        log::debug!(
            "restored {} to {} in {}",
            edge.dependency_name,
            WORKSPACE_SPEC,
            edge.source_field
        );
    }
}

/// Remove a dependency key from a section; drop the section only when that
/// removal emptied it. Absent key or absent section is a no-op, and a section
/// that was already empty stays in place.
fn remove_dependency(manifest: &mut Manifest, field: &str, name: &str) {
    if let Some(Value::Object(section)) = manifest.get_mut(field)
        && section.remove(name).is_some()
        && section.is_empty()
    {
        manifest.remove(field);
    }
}

/// Set a dependency key in a section, creating the section if absent.
fn insert_dependency(manifest: &mut Manifest, field: &str, name: &str, spec: &str) {
    let section = manifest
        .entry(field)
        .or_insert_with(|| Value::Object(serde_json::Map::new()));
    if !section.is_object() {
        *section = Value::Object(serde_json::Map::new());
    }
    if let Value::Object(section) = section {
        section.insert(name.to_string(), Value::String(spec.to_string()));
    }
}
