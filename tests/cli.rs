// ABOUTME: Integration tests for the goploy-deploy CLI commands.
// ABOUTME: Validates --help output, init behavior, and config error reporting.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn goploy_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("goploy-deploy"))
}

#[test]
fn help_shows_commands() {
    goploy_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("grey-publish"))
        .stdout(predicate::str::contains("trace-detail"))
        .stdout(predicate::str::contains("review"));
}

#[test]
fn grey_publish_requires_server_ids() {
    goploy_cmd()
        .args(["grey-publish", "--project-id", "5", "--commit", "abc123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--server-id"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("goploy.yml");

    goploy_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(config_path.exists(), "goploy.yml should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("url:"), "Config should have url field");
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("goploy.yml");

    fs::write(&config_path, "url: http://existing\n").unwrap();

    goploy_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn list_without_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    goploy_cmd()
        .current_dir(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}

#[test]
fn unknown_profile_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("goploy.yml"), "url: http://127.0.0.1:9\n").unwrap();

    goploy_cmd()
        .current_dir(temp_dir.path())
        .args(["--profile", "qa", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown profile: qa"));
}

#[test]
fn init_does_not_load_config_or_profile() {
    let temp_dir = tempfile::tempdir().unwrap();

    goploy_cmd()
        .current_dir(temp_dir.path())
        .args(["--config", "missing.yml", "--profile", "qa", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created goploy.yml"));

    assert!(temp_dir.path().join("goploy.yml").exists());
}
