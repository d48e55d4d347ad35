use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

pub const MOVIES_CSV: &str = "movieId,title,genres\n\
    1,Toy Story (1995),Adventure|Animation|Children|Comedy|Fantasy\n\
    2,Jumanji (1995),Adventure|Children|Fantasy\n\
    3,Heat (1995),Action|Crime|Thriller\n\
    5,Sabrina (1995),Comedy|Romance\n\
    3114,Toy Story 2 (1999),Adventure|Animation|Children|Comedy|Fantasy\n";

/// Get a Command for movierec with a clean environment
pub fn movierec() -> Command {
    let mut cmd = cargo_bin_cmd!("movierec");
    cmd.env_remove("MOVIEREC_DATA_DIR")
        .env_remove("MOVIEREC_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Ratings where users 1-4 love Toy Story and its sequel, user 1 also
/// loves Heat, and Heat is a crowd favourite among users 5-12.
pub fn ratings_csv() -> String {
    let mut csv = String::from("userId,movieId,rating,timestamp\n");
    for user in 1..=4 {
        csv.push_str(&format!("{},1,5.0,964982703\n", user));
        csv.push_str(&format!("{},3114,4.5,964982931\n", user));
    }
    csv.push_str("1,3,5.0,964983815\n");
    for user in 5..=12 {
        csv.push_str(&format!("{},3,5.0,964983815\n", user));
    }
    csv.push_str("13,5,5.0,964984100\n");
    csv.push_str("14,2,3.0,964984100\n");
    csv
}

/// Write movies.csv and ratings.csv into `dir`
pub fn write_dataset(dir: &Path) {
    fs::write(dir.join("movies.csv"), MOVIES_CSV).unwrap();
    fs::write(dir.join("ratings.csv"), ratings_csv()).unwrap();
}

/// A temporary data directory holding the fixture dataset
pub fn setup_data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_dataset(dir.path());
    dir
}

/// Run movierec against `dir` and assert success
pub fn run_success(dir: &TempDir, args: &[&str]) -> Output {
    let output = movierec()
        .arg("--data-dir")
        .arg(dir.path())
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "movierec {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

/// Run movierec against `dir` and parse stdout as JSON
pub fn run_json(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let mut full = vec!["--format", "json"];
    full.extend_from_slice(args);
    let output = run_success(dir, &full);
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Movie ids of a `similar`/`recommend` JSON result
pub fn recommendation_ids(json: &serde_json::Value) -> Vec<u64> {
    json["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect()
}
