use crate::cli::support::{movierec, recommendation_ids, run_json, run_success, setup_data_dir};
use predicates::prelude::*;

// ============================================================================
// Recommend command tests
// ============================================================================

#[test]
fn test_recommend_by_title() {
    let dir = setup_data_dir();

    movierec()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["recommend", "toy story"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Best match for 'toy story': Toy Story (1995)",
        ))
        .stdout(predicate::str::contains("Toy Story 2 (1999)"))
        .stdout(predicate::str::contains("Heat (1995)"));
}

#[test]
fn test_recommend_json_carries_match() {
    let dir = setup_data_dir();

    let json = run_json(&dir, &["recommend", "Toy Story"]);

    assert_eq!(json["movie"]["id"], 1);
    assert_eq!(json["match"]["query"], "Toy Story");
    assert!(json["match"]["similarity"].as_f64().unwrap() > 0.0);
    assert_eq!(recommendation_ids(&json), vec![3114, 3]);
}

#[test]
fn test_recommend_matches_similar_for_best_hit() {
    let dir = setup_data_dir();

    let by_title = run_json(&dir, &["recommend", "heat"]);
    let by_id = run_json(&dir, &["similar", "3"]);

    assert_eq!(by_title["recommendations"], by_id["recommendations"]);
}

#[test]
fn test_recommend_unmatched_title_exit_code_3() {
    let dir = setup_data_dir();

    movierec()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["recommend", "zzzz qqqq"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_recommend_quiet_prints_only_rows() {
    let dir = setup_data_dir();

    let output = run_success(&dir, &["--quiet", "recommend", "toy story"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!stdout.contains("Best match"));
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_recommend_records_format() {
    let dir = setup_data_dir();

    let output = run_success(&dir, &["--format", "records", "recommend", "toy story"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        lines[0],
        "H movierec=1 records=1 mode=recommend query=\"toy story\" results=2"
    );
    assert!(lines[1].starts_with("M 1 similarity="));
    assert!(lines[2].starts_with("R 3114 "));
    assert!(lines[3].starts_with("R 3 "));
}
