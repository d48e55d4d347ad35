use crate::cli::support::{movierec, run_json, run_success, setup_data_dir};
use predicates::prelude::*;

// ============================================================================
// Search command tests
// ============================================================================

#[test]
fn test_search_ranks_closest_title_first() {
    let dir = setup_data_dir();

    let output = run_success(&dir, &["search", "toy story"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[0].contains("Toy Story (1995)"), "got {:?}", lines);
    assert!(lines[1].contains("Toy Story 2 (1999)"), "got {:?}", lines);
    assert!(lines.len() <= 5);
}

#[test]
fn test_search_json_fields() {
    let dir = setup_data_dir();

    let json = run_json(&dir, &["search", "heat"]);
    let results = json.as_array().unwrap();

    assert_eq!(results[0]["id"], 3);
    assert_eq!(results[0]["title"], "Heat (1995)");
    assert_eq!(results[0]["clean_title"], "Heat 1995");
    assert_eq!(results[0]["genres"], "Action|Crime|Thriller");
    assert!(results[0]["similarity"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_search_similarity_is_non_increasing() {
    let dir = setup_data_dir();

    let json = run_json(&dir, &["search", "toy story 1995"]);
    let scores: Vec<f64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["similarity"].as_f64().unwrap())
        .collect();

    assert_eq!(scores.len(), 5);
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1], "{:?}", scores);
    }
}

#[test]
fn test_search_limit() {
    let dir = setup_data_dir();

    let json = run_json(&dir, &["search", "toy story", "--limit", "2"]);
    let ids: Vec<u64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();

    assert_eq!(ids, vec![1, 3114]);
}

#[test]
fn test_search_limit_zero_is_empty() {
    let dir = setup_data_dir();

    movierec()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["search", "heat", "-n", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No movies found for 'heat'"));
}

#[test]
fn test_search_punctuation_only_query_is_usage_error() {
    let dir = setup_data_dir();

    movierec()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["search", "!!!"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid query"));
}

#[test]
fn test_search_records_format() {
    let dir = setup_data_dir();

    let output = run_success(&dir, &["--format", "records", "search", "heat", "-n", "1"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[0].starts_with("H movierec=1 records=1 mode=search"));
    assert!(lines[0].contains("query=\"heat\""));
    assert!(lines[0].contains("results=1"));
    assert!(lines[1].starts_with("M 3 similarity="));
    assert!(lines[1].contains("\"Heat (1995)\""));
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_search_needs_only_movies_file() {
    let dir = setup_data_dir();
    std::fs::remove_file(dir.path().join("ratings.csv")).unwrap();

    movierec()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["search", "jumanji"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jumanji (1995)"));
}

#[test]
fn test_search_writes_index_cache() {
    let dir = setup_data_dir();

    run_success(&dir, &["search", "heat"]);

    assert!(dir.path().join(".movierec").join("title_index.json").exists());
}

#[test]
fn test_search_no_cache_leaves_data_dir_untouched() {
    let dir = setup_data_dir();

    run_success(&dir, &["--no-cache", "search", "heat"]);

    assert!(!dir.path().join(".movierec").exists());
}

#[test]
fn test_search_sees_catalogue_changes_after_caching() {
    let dir = setup_data_dir();
    run_success(&dir, &["search", "heat"]);

    let mut movies = std::fs::read_to_string(dir.path().join("movies.csv")).unwrap();
    movies.push_str("6,Casino (1995),Crime|Drama\n");
    std::fs::write(dir.path().join("movies.csv"), movies).unwrap();

    let json = run_json(&dir, &["search", "casino", "-n", "1"]);
    assert_eq!(json[0]["id"], 6);
}

#[test]
fn test_search_records_quotes_genres() {
    let dir = setup_data_dir();
    let mut movies = std::fs::read_to_string(dir.path().join("movies.csv")).unwrap();
    movies.push_str("7,Pervert Park (2014),(no genres listed)\n");
    std::fs::write(dir.path().join("movies.csv"), movies).unwrap();

    let output = run_success(&dir, &["--format", "records", "search", "pervert park", "-n", "1"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[1].starts_with("M 7 similarity="));
    assert!(lines[1].ends_with("\"Pervert Park (2014)\" genres=\"(no genres listed)\""));
}

#[test]
fn test_search_reflects_genre_edits_after_caching() {
    let dir = setup_data_dir();
    run_success(&dir, &["search", "heat"]);

    let movies = std::fs::read_to_string(dir.path().join("movies.csv")).unwrap();
    std::fs::write(
        dir.path().join("movies.csv"),
        movies.replace("3,Heat (1995),Action|Crime|Thriller", "3,Heat (1995),Crime"),
    )
    .unwrap();

    let json = run_json(&dir, &["search", "heat", "-n", "1"]);
    assert_eq!(json[0]["genres"], "Crime");
}
