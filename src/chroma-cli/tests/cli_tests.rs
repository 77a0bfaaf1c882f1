//! End-to-end tests for the `chroma` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

/// A `chroma` command isolated from the user's config and log settings.
fn chroma(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("chroma").unwrap();
    cmd.env("CHROMA_CONFIG", config_dir.join("config.toml"))
        .env_remove("CHROMA_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

fn json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).unwrap()
}

#[test]
fn test_decode_text() {
    let dir = tempfile::tempdir().unwrap();
    let assert = chroma(dir.path())
        .args(["decode", "#FF00FF00"])
        .assert()
        .success();

    let text = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("hex") && lines[0].ends_with("#FF00FF00"));
    assert!(lines[1].ends_with("0 255 0 (alpha 255)"));
    assert!(lines[2].ends_with("h=120 s=1 v=1"));
    assert!(lines[3].ends_with("h=120 s=100 v=100"));
    assert!(lines[4].ends_with(" *"), "linear is the default mapping");
}

#[test]
fn test_decode_json() {
    let dir = tempfile::tempdir().unwrap();
    let assert = chroma(dir.path())
        .args(["--json", "decode", "#800000FF"])
        .assert()
        .success();

    let value = json(&assert.get_output().stdout);
    assert_eq!(value["rgb"]["b"], 255);
    assert_eq!(value["rgb"]["a"], 128);
    assert_eq!(value["hsv"]["h"], 240.0);
    assert_eq!(value["mapping"], "linear");
}

#[test]
fn test_lenient_decode_succeeds_on_garbage() {
    let dir = tempfile::tempdir().unwrap();
    chroma(dir.path())
        .args(["--json", "decode", "#GG00FF00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hex\": \"#0000FF00\""));
}

#[test]
fn test_strict_decode_fails() {
    let dir = tempfile::tempdir().unwrap();
    chroma(dir.path())
        .args(["--strict", "decode", "#GG00FF00"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid hex character"));
}

#[test]
fn test_encode_negative_channel() {
    let dir = tempfile::tempdir().unwrap();

    chroma(dir.path())
        .args(["--json", "encode", "-1", "0", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hex\": \"#00000000\""));

    chroma(dir.path())
        .args(["--strict", "encode", "-1", "0", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("red out of range"));
}

#[test]
fn test_from_se_with_negative_values() {
    let dir = tempfile::tempdir().unwrap();
    let assert = chroma(dir.path())
        .args(["--json", "from-se", "0", "-100", "100"])
        .assert()
        .success();

    let value = json(&assert.get_output().stdout);
    assert_eq!(value["hex"], "#FFFFFFFF");
    assert_eq!(value["hsv"]["s"], 0.0);
    assert_eq!(value["blueprint"]["linear"]["s"], -1.0);
    assert_eq!(value["blueprint"]["via_standard"]["s"], 0.0);
}

#[test]
fn test_config_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "output = \"json\"\nblueprint_mapping = \"via-standard\"\n",
    )
    .unwrap();

    let assert = chroma(dir.path())
        .args(["from-blueprint", "0.25", "0.5", "1"])
        .assert()
        .success();
    let value = json(&assert.get_output().stdout);
    assert_eq!(value["mapping"], "via-standard");
    assert_eq!(value["se"]["h"], 90.0);
    assert_eq!(value["se"]["s"], 0.0);

    let assert = chroma(dir.path())
        .args(["--mapping", "linear", "from-blueprint", "0.25", "0.5", "1"])
        .assert()
        .success();
    assert_eq!(json(&assert.get_output().stdout)["se"]["s"], 50.0);
}

#[test]
fn test_malformed_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "unknown = 1\n").unwrap();

    chroma(dir.path())
        .args(["decode", "#FF000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn test_trace_logs_fallbacks_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let assert = chroma(dir.path())
        .args(["--trace", "--json", "decode", "short"])
        .assert()
        .success()
        .stderr(predicate::str::contains("fallback"));

    json(&assert.get_output().stdout);
}
