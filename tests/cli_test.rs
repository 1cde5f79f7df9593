//! Integration tests for the door binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DROP_FILE: &str = "2\r\n5\r\n38400\r\nCoolBBS\r\n7\r\nJane Doe\r\njdoe\r\n50\r\n42\r\n1\r\n3\r\n";

const CONFIG: &str = "[Settings]\nAdminSecurityLevel = 50\nWWIVnet = true\nFTN = false\n";

fn setup_door() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("node1")).unwrap();
    fs::write(temp.path().join("node1/door32.sys"), DROP_FILE).unwrap();
    fs::write(temp.path().join("config.ini"), CONFIG).unwrap();
    temp
}

fn door(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("ghostnet-door"));
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .env_remove("GHOSTNET_DOOR_CONFIG")
        .args(["--path", "node1"]);
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ghostnet-door"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("door32.sys"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ghostnet-door"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_missing_path_fails_with_usage() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_door();
    let mut cmd = Command::new(cargo_bin("ghostnet-door"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--path"))
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_missing_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_door();
    fs::remove_file(temp.path().join("config.ini"))?;
    door(&temp)
        .write_stdin("q\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error loading configuration"));
    Ok(())
}

#[test]
fn cli_quit_exits_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_door();
    door(&temp)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Menu"))
        .stdout(predicate::str::contains("Exiting program."));
    Ok(())
}

#[test]
fn cli_closed_input_exits_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_door();
    door(&temp)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Menu"));
    Ok(())
}

#[test]
fn cli_shows_drop_file_data() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_door();
    door(&temp)
        .write_stdin("1\n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("BBSID: CoolBBS"))
        .stdout(predicate::str::contains("Security Level: 50"));
    Ok(())
}

#[test]
fn cli_admin_sees_access_check() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_door();
    door(&temp)
        .write_stdin("2\n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. [DEBUG] Config & User Access Check"))
        .stdout(predicate::str::contains("jdoe has admin access"));
    Ok(())
}

#[test]
fn cli_missing_drop_file_keeps_running() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_door();
    fs::remove_file(temp.path().join("node1/door32.sys"))?;
    door(&temp)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("door32.sys file not found"))
        .stdout(predicate::str::contains("Exiting program."));
    Ok(())
}

#[test]
fn cli_application_is_saved() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_door();
    let input = [
        "3",
        "Sysop Sam",
        "sam@example.com",
        "USA",
        "Austin, TX",
        "512",
        "Ghost Town",
        "ghost.example.com",
        "not-a-number",
        "2323",
        "WWIV 5.9",
        "24554",
        "",
        "q",
    ]
    .join("\n")
        + "\n";

    door(&temp)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a valid number"))
        .stdout(predicate::str::contains("Application saved successfully"));

    let content = fs::read_to_string(temp.path().join("data/GHOSTnet-WWIVnet-application.json"))?;
    let records: serde_json::Value = serde_json::from_str(&content)?;
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["bbs_port"], 2323);
    assert_eq!(records[0]["approved"], "no");
    Ok(())
}

#[test]
fn cli_shows_art_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_door();
    fs::write(
        temp.path().join("welcome.ans"),
        b"WELCOME TO GHOSTNET\r\n\x1aSAUCE00 metadata",
    )?;
    door(&temp)
        .args(["--art", "welcome.ans"])
        .write_stdin("\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("WELCOME TO GHOSTNET"))
        .stdout(predicate::str::contains("SAUCE00").not());
    Ok(())
}
