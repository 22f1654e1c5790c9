//! CLI integration tests.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const VALID_CONFIG: &str = r#"
[groupme]
group_id = "12345"
bot_id = "bot-1"
user_id = "user-1"

[polling]
poll_interval_secs = 5
"#;

fn salesboard() -> Command {
    let mut cmd = cargo_bin_cmd!("salesboard");
    for key in [
        "GROUPME_ACCESS_TOKEN",
        "GROUPME_GROUP_ID",
        "GROUPME_BOT_ID",
        "GROUPME_USER_ID",
        "RUST_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn test_help() {
    salesboard()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("salesboard"))
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("listen"))
        .stdout(predicate::str::contains("console"));
}

#[test]
fn test_version() {
    salesboard()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("salesboard"));
}

#[test]
fn check_config_accepts_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, VALID_CONFIG);

    salesboard()
        .current_dir(dir.path())
        .env("GROUPME_ACCESS_TOKEN", "secret-token")
        .args(["check", "config", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::contains("12345"))
        .stdout(predicate::str::contains("5s"))
        .stdout(predicate::str::contains("secret-token").not());
}

#[test]
fn check_config_requires_access_token() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, VALID_CONFIG);

    salesboard()
        .current_dir(dir.path())
        .args(["check", "config", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("GROUPME_ACCESS_TOKEN"));
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    salesboard()
        .current_dir(dir.path())
        .env("GROUPME_ACCESS_TOKEN", "secret-token")
        .args(["fetch", "--config", "does-not-exist.toml"])
        .assert()
        .failure();
}

#[test]
fn console_rejects_unknown_input_and_exits() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, VALID_CONFIG);

    salesboard()
        .current_dir(dir.path())
        .env("GROUPME_ACCESS_TOKEN", "secret-token")
        .arg("--config")
        .arg(&path)
        .write_stdin("dance\nEXIT\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Type 'fetch' to show leaderboard"))
        .stdout(predicate::str::contains(
            "Unknown command. Type 'fetch', 'listen', or 'exit'.",
        ));
}

#[test]
fn console_exits_at_end_of_input() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, VALID_CONFIG);

    salesboard()
        .current_dir(dir.path())
        .env("GROUPME_ACCESS_TOKEN", "secret-token")
        .args(["console", "--quiet", "--config"])
        .arg(&path)
        .write_stdin("")
        .assert()
        .success();
}
