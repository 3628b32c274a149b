//! Integration tests for the icewatch binary.

use std::process::Command;

/// Nothing listens here, so the snapshot falls back to placeholder data.
const DEAD_UPSTREAM: &str = "http://127.0.0.1:9";

fn icewatch() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_icewatch"));
    cmd.env("NSIDC_BASE_URL", DEAD_UPSTREAM)
        .env("UPSTREAM_TIMEOUT_SECS", "1")
        .env_remove("PORT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let output = icewatch().arg("--help").output().expect("Failed to execute icewatch");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("serve"));
    assert!(stdout.contains("snapshot"));
}

#[test]
fn test_serve_rejects_invalid_port() {
    let output = icewatch()
        .args(["serve", "--port", "not-a-port"])
        .output()
        .expect("Failed to execute icewatch");
    assert!(!output.status.success());
}

#[test]
fn test_snapshot_writes_placeholder_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ice_data.json");

    let output = icewatch()
        .args(["snapshot", "--output"])
        .arg(&path)
        .output()
        .expect("Failed to execute icewatch");
    assert!(
        output.status.success(),
        "snapshot failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Arctic Ice Extent"));
    assert!(stdout.contains("Mock Data (Demo)"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["arctic"]["hemisphere"], "north");
    assert_eq!(json["antarctic"]["data_source"], "Mock Data (Demo)");
    assert!(json["arctic"]["extent_million_km2"].as_f64().unwrap() >= 4.0);
    assert!(json["last_updated"].is_string());
}

#[test]
fn test_snapshot_rejects_bad_timeout() {
    let output = icewatch()
        .env("UPSTREAM_TIMEOUT_SECS", "soon")
        .arg("snapshot")
        .output()
        .expect("Failed to execute icewatch");
    assert!(!output.status.success());
}
