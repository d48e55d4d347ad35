use crate::cli::support::{movierec, run_json, run_success, setup_data_dir};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Index command tests
// ============================================================================

#[test]
fn test_index_builds_then_reports_current() {
    let dir = setup_data_dir();

    movierec()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 5 titles"));

    assert!(dir.path().join(".movierec").join("title_index.json").exists());

    movierec()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains("Up to date: 5 titles"));
}

#[test]
fn test_index_rebuild_forces_build() {
    let dir = setup_data_dir();
    run_success(&dir, &["index"]);

    let json = run_json(&dir, &["index", "--rebuild"]);
    assert_eq!(json["status"], "built");
    assert_eq!(json["rows"], 5);
}

#[test]
fn test_index_json_fields() {
    let dir = setup_data_dir();

    let json = run_json(&dir, &["index"]);
    assert_eq!(json["status"], "built");
    assert!(json["vocabulary"].as_u64().unwrap() > 0);
    assert_eq!(json["fingerprint"].as_str().unwrap().len(), 64);
    assert!(json["path"].as_str().unwrap().ends_with("title_index.json"));

    let again = run_json(&dir, &["index"]);
    assert_eq!(again["status"], "current");
    assert_eq!(again["fingerprint"], json["fingerprint"]);
}

#[test]
fn test_index_rebuilds_stale_cache() {
    let dir = setup_data_dir();
    run_success(&dir, &["index"]);

    let mut movies = fs::read_to_string(dir.path().join("movies.csv")).unwrap();
    movies.push_str("6,Casino (1995),Crime|Drama\n");
    fs::write(dir.path().join("movies.csv"), movies).unwrap();

    let json = run_json(&dir, &["index"]);
    assert_eq!(json["status"], "built");
    assert_eq!(json["rows"], 6);
}

#[test]
fn test_index_replaces_corrupt_cache() {
    let dir = setup_data_dir();
    let cache_dir = dir.path().join(".movierec");
    fs::create_dir_all(&cache_dir).unwrap();
    fs::write(cache_dir.join("title_index.json"), "{not json").unwrap();

    let json = run_json(&dir, &["index"]);
    assert_eq!(json["status"], "built");

    // Searches also recover from a corrupt cache
    fs::write(cache_dir.join("title_index.json"), "{not json").unwrap();
    let hits = run_json(&dir, &["search", "heat", "-n", "1"]);
    assert_eq!(hits[0]["id"], 3);
}

#[test]
fn test_index_with_no_cache_is_usage_error() {
    let dir = setup_data_dir();

    movierec()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["--no-cache", "index"])
        .assert()
        .code(2);
}

#[test]
fn test_index_records_format() {
    let dir = setup_data_dir();

    let output = run_success(&dir, &["--format", "records", "index"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.starts_with("H movierec=1 records=1 mode=index status=built rows=5"));
}
