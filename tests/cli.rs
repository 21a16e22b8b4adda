use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const TEST_PLAYER_MATCH: &str = r#"{
    "metadata": {"matchId": "NA1_1"},
    "info": {
        "gameCreation": 1700000000000,
        "participants": [
            {"summonerName": "TestPlayer", "championName": "Ahri", "win": true, "kills": 5},
            {"summonerName": "Partner", "championId": 103, "win": true, "kills": 1}
        ]
    }
}"#;

fn run_cli(workdir: &Path, args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_pentakill_counts");
    let mut cmd = Command::new(exe);
    cmd.current_dir(workdir).args(args).arg("--no-color");
    for key in [
        "PENTAKILLS_MATCHES_DIR",
        "PENTAKILLS_SORT_BY",
        "PENTAKILLS_VERBOSE",
        "PENTAKILLS_PRIMARY_NAME",
        "PENTAKILLS_PRIMARY_SUMMONERS",
        "PENTAKILLS_PARTNER_NAME",
        "PENTAKILLS_PARTNER_SUMMONERS",
        "PENTAKILLS_EXACT_GROUP_WINS",
    ] {
        cmd.env_remove(key);
    }
    cmd.output().expect("run cli")
}

#[test]
fn cli_reports_single_match() {
    let dir = tempfile::tempdir().unwrap();
    let matches = dir.path().join("matches");
    fs::create_dir(&matches).unwrap();
    fs::write(matches.join("NA1_1.json"), TEST_PLAYER_MATCH).unwrap();

    let output = run_cli(
        dir.path(),
        &["--primary", "Test Player", "--partner", "partner", "--sort-by", "wins"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Loaded 1 matches (2023-11-14 to 2023-11-14)"));
    assert!(stdout.contains("Processing Test Player..."));
    assert!(stdout.contains(
        "Test Player champ counts (total games played: 1, Wins: 1, Losses: 0, Penta: 0"
    ));
    assert!(stdout.contains("Win %: 100.00%"));
    assert!(stdout.contains("Ahri"));
    assert!(stdout.contains("103"));
    assert!(stdout.contains("Aggregate stats for Andy's summoners"));
    assert!(stdout.contains("0 out of 1."));
    assert!(stdout.contains("Co-occurrence rate: 0.00%"));
}

#[test]
fn cli_empty_directory_is_not_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(dir.path(), &["--matches-dir", "."]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No match files found"));
    assert!(!stdout.contains("champ counts"));
}

#[test]
fn cli_missing_directory_is_not_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(dir.path(), &[]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Match directory not found"));
}

#[test]
fn cli_malformed_file_fails_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.json"), TEST_PLAYER_MATCH).unwrap();
    fs::write(dir.path().join("b.json"), "{\"info\": {}}").unwrap();

    let output = run_cli(dir.path(), &["--matches-dir", "."]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("JSON parsing error"));
    assert!(stderr.contains("b.json"));
}

#[test]
fn cli_rejects_unknown_sort_column() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(dir.path(), &["--sort-by", "kda"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown sort column"));
}
