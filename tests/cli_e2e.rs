use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A data dir whose config turns off the simulated latencies.
fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"fetch_delay_ms": 0, "submit_delay_ms": 0}"#,
    )
    .unwrap();
    dir
}

fn gigbook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gigbook").unwrap();
    cmd.env("GIGBOOK_HOME", dir)
        .env_remove("GIGBOOK_LOG")
        .env_remove("GIGBOOK_SIMULATE_FETCH_ERROR");
    cmd
}

fn onboard_args() -> Vec<&'static str> {
    vec![
        "onboard",
        "--name",
        "Kavya Iyer",
        "--bio",
        "Carnatic vocalist performing at temples and weddings.",
        "--category",
        "Singer",
        "--language",
        "Tamil",
        "--fee",
        "₹5,000 - ₹15,000",
        "--location",
        "Chennai, Tamil Nadu",
    ]
}

fn stored_ids(dir: &Path) -> Vec<String> {
    let content = fs::read_to_string(dir.join("submitted_artists.json")).unwrap();
    let parsed: Vec<Value> = serde_json::from_str(&content).unwrap();
    parsed
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_browse_lists_catalog() {
    let dir = data_dir();
    gigbook(dir.path())
        .arg("browse")
        .assert()
        .success()
        .stdout(predicate::str::contains("6 artists found"))
        .stdout(predicate::str::contains("Priya Sharma"))
        .stdout(predicate::str::contains("Showing 1 to 6 of 6 results"));
}

#[test]
fn test_no_command_browses() {
    let dir = data_dir();
    gigbook(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("artists found"));
}

#[test]
fn test_browse_filters_and_sorts() {
    let dir = data_dir();
    let output = gigbook(dir.path())
        .args(["browse", "--category", "Dancer", "--sort", "name-desc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(filtered from 6 total)"))
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let priya = text.find("Priya Sharma").unwrap();
    let meera = text.find("Meera Nair").unwrap();
    assert!(priya < meera);
    assert!(!text.contains("Rajesh Kumar"));
}

#[test]
fn test_browse_restrictive_filters_hint() {
    let dir = data_dir();
    gigbook(dir.path())
        .args(["browse", "--search", "bagpipes", "--price", "₹1,00,000+"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No artists found"))
        .stdout(predicate::str::contains("too restrictive"));
}

#[test]
fn test_fetch_failure_is_reported() {
    let dir = data_dir();
    gigbook(dir.path())
        .env("GIGBOOK_SIMULATE_FETCH_ERROR", "Failed to fetch data")
        .arg("browse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to fetch data"));
}

#[test]
fn test_onboard_review_cycle() {
    let dir = data_dir();

    gigbook(dir.path())
        .args(onboard_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("submitted successfully"));

    let ids = stored_ids(dir.path());
    assert_eq!(ids.len(), 1);
    let id = ids[0].clone();

    gigbook(dir.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pending Review: 1"))
        .stdout(predicate::str::contains("Kavya Iyer"));

    // Pending submissions are not in the public directory yet.
    gigbook(dir.path())
        .args(["browse", "--search", "kavya"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No artists found"));

    gigbook(dir.path())
        .args(["approve", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Artist approved: Kavya Iyer"));

    gigbook(dir.path())
        .args(["browse", "--search", "kavya"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 artist found"));

    gigbook(dir.path())
        .args(["remove", &id])
        .assert()
        .success();
    assert!(stored_ids(dir.path()).is_empty());
}

#[test]
fn test_onboard_rejects_invalid_form() {
    let dir = data_dir();
    gigbook(dir.path())
        .args([
            "onboard",
            "--name",
            "Al",
            "--bio",
            "too short",
            "--language",
            "English",
            "--location",
            "NY",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bio must be at least 20 characters"))
        .stderr(predicate::str::contains("Please select at least one category"))
        .stderr(predicate::str::contains("Fee range is required"))
        .stderr(predicate::str::contains("Location must be at least 3 characters"))
        .stderr(predicate::str::contains("Artist name is required").not());

    assert!(!dir.path().join("submitted_artists.json").exists());
}

#[test]
fn test_unknown_artist_actions_fail() {
    let dir = data_dir();
    gigbook(dir.path())
        .args(["approve", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Artist not found: 12345"));

    gigbook(dir.path())
        .args(["show", "12345"])
        .assert()
        .failure();
}

#[test]
fn test_favorites_toggle() {
    let dir = data_dir();
    gigbook(dir.path())
        .args(["favorite", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added to favorites: Arjun Singh"));

    gigbook(dir.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("Arjun Singh"));

    gigbook(dir.path())
        .args(["favorite", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed from favorites"));
}

#[test]
fn test_config_set_and_get() {
    let dir = data_dir();
    gigbook(dir.path())
        .args(["config", "page_size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size set to 2"));

    gigbook(dir.path())
        .args(["config", "page-size"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2"));

    gigbook(dir.path())
        .arg("browse")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 to 2 of 6 results (page 1 of 3)"));

    gigbook(dir.path())
        .args(["config", "volume", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_lookup_lists() {
    let dir = data_dir();
    gigbook(dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Music Producer"));
    gigbook(dir.path())
        .arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kochi, Kerala"));
    gigbook(dir.path())
        .arg("fee-ranges")
        .assert()
        .success()
        .stdout(predicate::str::contains("₹1,00,000+"));
}

#[test]
fn test_grouped_help() {
    let dir = data_dir();
    gigbook(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory:"))
        .stdout(predicate::str::contains("onboard"));
}
