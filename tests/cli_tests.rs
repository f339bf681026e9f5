//! End-to-end CLI tests over a seeded workspace.
//!
//! Each test builds a throwaway workspace matching the built-in dependency
//! matrix (artifacts, cache, devtools, memory, plus the store and debug
//! version sources) and drives the binary against it with --root.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_manifest(root: &Path, package: &str, value: &Value) {
    let dir = root.join("packages").join(package);
    fs::create_dir_all(&dir).expect("create package dir");
    let mut body = serde_json::to_string_pretty(value).expect("serialize manifest");
    body.push('\n');
    fs::write(dir.join("package.json"), body).expect("write manifest");
}

fn read_manifest(root: &Path, package: &str) -> Value {
    let raw = fs::read_to_string(root.join("packages").join(package).join("package.json"))
        .expect("read manifest");
    serde_json::from_str(&raw).expect("parse manifest")
}

/// Seed every package the built-in matrix touches
fn seed_workspace(root: &Path) {
    write_manifest(
        root,
        "store",
        &json!({"name": "@ai-sdk-tools/store", "version": "0.4.0"}),
    );
    write_manifest(
        root,
        "debug",
        &json!({"name": "@ai-sdk-tools/debug", "version": "1.2.3"}),
    );
    write_manifest(
        root,
        "artifacts",
        &json!({
            "name": "@ai-sdk-tools/artifacts",
            "version": "0.3.1",
            "devDependencies": {"@ai-sdk-tools/store": "workspace:*"}
        }),
    );
    write_manifest(
        root,
        "cache",
        &json!({
            "name": "@ai-sdk-tools/cache",
            "version": "0.1.0",
            "devDependencies": {
                "@ai-sdk-tools/store": "workspace:*",
                "@ai-sdk-tools/debug": "workspace:*"
            }
        }),
    );
    write_manifest(
        root,
        "devtools",
        &json!({
            "name": "@ai-sdk-tools/devtools",
            "version": "0.5.2",
            "devDependencies": {"@ai-sdk-tools/store": "workspace:*"}
        }),
    );
    write_manifest(
        root,
        "memory",
        &json!({
            "name": "@ai-sdk-tools/memory",
            "version": "0.2.0",
            "dependencies": {"@ai-sdk-tools/debug": "workspace:*"}
        }),
    );
}

fn prepublish() -> Command {
    Command::cargo_bin("workspace_prepublish").expect("binary built")
}

#[test]
fn test_no_arguments_prints_usage_and_mutates_nothing() {
    let tmp = TempDir::new().expect("tempdir");
    seed_workspace(tmp.path());
    let before = read_manifest(tmp.path(), "artifacts");

    prepublish()
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));

    assert_eq!(read_manifest(tmp.path(), "artifacts"), before);
}

#[test]
fn test_unknown_command_prints_usage_and_exits_nonzero() {
    let tmp = TempDir::new().expect("tempdir");
    seed_workspace(tmp.path());

    prepublish()
        .arg("publish")
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_prepare_pins_and_moves_sections() {
    let tmp = TempDir::new().expect("tempdir");
    seed_workspace(tmp.path());

    prepublish()
        .args(["prepare", "--root"])
        .arg(tmp.path())
        .assert()
        .success();

    // artifacts: devDependencies emptied away, reference pinned under dependencies
    let artifacts = read_manifest(tmp.path(), "artifacts");
    assert!(artifacts.get("devDependencies").is_none());
    assert_eq!(
        artifacts["dependencies"]["@ai-sdk-tools/store"],
        json!("^0.4.0")
    );

    // memory: pinned in place, no section move
    let memory = read_manifest(tmp.path(), "memory");
    assert_eq!(
        memory["dependencies"]["@ai-sdk-tools/debug"],
        json!("^1.2.3")
    );
    assert!(memory.get("devDependencies").is_none());

    // cache: both references moved
    let cache = read_manifest(tmp.path(), "cache");
    assert!(cache.get("devDependencies").is_none());
    assert_eq!(cache["dependencies"]["@ai-sdk-tools/store"], json!("^0.4.0"));
    assert_eq!(cache["dependencies"]["@ai-sdk-tools/debug"], json!("^1.2.3"));
}

#[test]
fn test_prepare_is_idempotent_on_disk() {
    let tmp = TempDir::new().expect("tempdir");
    seed_workspace(tmp.path());

    prepublish()
        .args(["prepare", "--root"])
        .arg(tmp.path())
        .assert()
        .success();
    let once = read_manifest(tmp.path(), "artifacts");

    prepublish()
        .args(["prepare", "--root"])
        .arg(tmp.path())
        .assert()
        .success();

    assert_eq!(read_manifest(tmp.path(), "artifacts"), once);
}

#[test]
fn test_restore_round_trips_prepare() {
    let tmp = TempDir::new().expect("tempdir");
    seed_workspace(tmp.path());
    let before: Vec<Value> = ["artifacts", "cache", "devtools", "memory"]
        .iter()
        .map(|p| read_manifest(tmp.path(), p))
        .collect();

    prepublish()
        .args(["prepare", "--root"])
        .arg(tmp.path())
        .assert()
        .success();
    prepublish()
        .args(["restore", "--root"])
        .arg(tmp.path())
        .assert()
        .success();

    let after: Vec<Value> = ["artifacts", "cache", "devtools", "memory"]
        .iter()
        .map(|p| read_manifest(tmp.path(), p))
        .collect();
    assert_eq!(after, before);
}

#[test]
fn test_prepare_fails_before_writing_when_version_is_missing() {
    let tmp = TempDir::new().expect("tempdir");
    seed_workspace(tmp.path());
    // Drop store's version field; every manifest read happens before any write,
    // so the failure must leave all manifests untouched.
    write_manifest(tmp.path(), "store", &json!({"name": "@ai-sdk-tools/store"}));
    let before = read_manifest(tmp.path(), "artifacts");

    prepublish()
        .args(["prepare", "--root"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no version field"));

    assert_eq!(read_manifest(tmp.path(), "artifacts"), before);
}

#[test]
fn test_prepare_fails_when_a_manifest_is_missing() {
    let tmp = TempDir::new().expect("tempdir");
    seed_workspace(tmp.path());
    fs::remove_file(tmp.path().join("packages/memory/package.json")).expect("remove manifest");

    prepublish()
        .args(["prepare", "--root"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_written_manifests_are_indented_with_trailing_newline() {
    let tmp = TempDir::new().expect("tempdir");
    seed_workspace(tmp.path());

    prepublish()
        .args(["prepare", "--root"])
        .arg(tmp.path())
        .assert()
        .success();

    let raw = fs::read_to_string(tmp.path().join("packages/memory/package.json"))
        .expect("read manifest");
    assert!(raw.ends_with("}\n"), "missing trailing newline: {raw:?}");
    assert!(raw.contains("\n  \"name\""), "expected 2-space indentation");
}
