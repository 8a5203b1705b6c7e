//! Integration tests for the bindeb binary
//!
//! Scenarios that invoke the external archiver are covered at the library
//! level with a fake archiver; these tests exercise argument handling and the
//! zero-package paths, which never reach dpkg-deb.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bindeb() -> Command {
    Command::cargo_bin("bindeb").unwrap()
}

#[test]
fn test_help_lists_packaging_flags() {
    bindeb()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bin-dir"))
        .stdout(predicate::str::contains("--deb-dir"))
        .stdout(predicate::str::contains("--install-dir"))
        .stdout(predicate::str::contains("--version-major"))
        .stdout(predicate::str::contains("--mantainer"));
}

#[test]
fn test_bin_dir_is_required() {
    bindeb()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bin-dir"));
}

#[test]
fn test_nonexistent_bin_dir_builds_nothing() {
    let temp_dir = TempDir::new().unwrap();

    bindeb()
        .current_dir(temp_dir.path())
        .args(["--bin-dir", "missing-bins"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to build"));

    // Zero archives, and the default output directory was never created.
    assert!(!temp_dir.path().join("deb_pkg").exists());
}

#[test]
fn test_nonexistent_bin_dir_fails_in_strict_mode() {
    let temp_dir = TempDir::new().unwrap();

    bindeb()
        .current_dir(temp_dir.path())
        .args(["--bin-dir", "missing-bins", "--strict"])
        .assert()
        .failure();
}

#[test]
fn test_empty_bin_dir_builds_zero_packages() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("bins")).unwrap();

    bindeb()
        .current_dir(temp_dir.path())
        .args(["--bin-dir", "bins"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to build"));
}

#[test]
fn test_broken_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("bins")).unwrap();
    std::fs::write(temp_dir.path().join("bindeb.yaml"), "deb_dir: [not\n").unwrap();

    bindeb()
        .current_dir(temp_dir.path())
        .args(["--bin-dir", "bins", "--config", "bindeb.yaml"])
        .assert()
        .failure();
}

#[test]
fn test_unknown_config_key_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("bins")).unwrap();
    std::fs::write(temp_dir.path().join("bindeb.yaml"), "mantainer: typo\n").unwrap();

    bindeb()
        .current_dir(temp_dir.path())
        .args(["--bin-dir", "bins", "--config", "bindeb.yaml"])
        .assert()
        .failure();
}
