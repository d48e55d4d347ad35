use crate::cli::support::{movierec, setup_data_dir};
use predicates::prelude::*;

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_default_logging_is_quiet_on_stderr() {
    let dir = setup_data_dir();

    movierec()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["search", "heat"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = setup_data_dir();

    movierec()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["--log-level", "debug", "search", "heat"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_verbose_enables_debug() {
    let dir = setup_data_dir();

    movierec()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["--verbose", "search", "heat"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = setup_data_dir();

    let output = movierec()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["--log-level", "debug", "--log-json", "search", "heat"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(parsed.get("level").is_some());
}

#[test]
fn test_movierec_log_env_override() {
    let dir = setup_data_dir();

    movierec()
        .env("MOVIEREC_LOG", "movierec=debug")
        .arg("--data-dir")
        .arg(dir.path())
        .args(["search", "heat"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}
