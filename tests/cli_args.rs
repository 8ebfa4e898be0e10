//! Tests for CLI argument parsing, run against the built binary.

use std::fs;
use std::process::Command;

fn showcase_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_showcase"))
}

#[test]
fn test_help_lists_options() {
    let output = showcase_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
    assert!(stdout.contains("--pages"));
    assert!(stdout.contains("--no-auto-advance"));
}

#[test]
fn test_version_flag() {
    let output = showcase_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_zero_pages_is_rejected() {
    let output = showcase_cmd()
        .args(["--pages", "0"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--pages"));
}

#[test]
fn test_non_numeric_pages_is_rejected() {
    let output = showcase_cmd()
        .args(["--pages", "many"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[carousel]\npages = []\n").expect("write config");

    let output = showcase_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--log-file")
        .arg(dir.path().join("showcase.log"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: failed to load config"));
    assert!(stderr.contains("At least one catalogue page"));
}
