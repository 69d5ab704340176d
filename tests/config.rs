use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

fn command() -> Command {
    Command::cargo_bin("cnfmt").expect("binary exists")
}

#[test]
fn config_set_decimals_changes_bytes_default() {
    let temp = assert_fs::TempDir::new().unwrap();
    let home = temp.child("home");
    home.create_dir_all().unwrap();
    let config_root = temp.child("xdg-config");
    config_root.create_dir_all().unwrap();

    let mut config_cmd = command();
    config_cmd
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("config")
        .arg("--set-decimals")
        .arg("1");
    config_cmd.assert().success().stdout(predicate::str::contains("Default decimals set to 1."));

    let config_path = config_root.child("cnfmt/config.toml");
    let contents = fs::read_to_string(config_path.path()).unwrap();
    assert!(contents.contains("decimals = 1"));

    let mut bytes_cmd = command();
    bytes_cmd
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("bytes")
        .arg("1234");
    bytes_cmd.assert().success().stdout("1.2 KB\n");

    let mut path_cmd = command();
    path_cmd
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("config")
        .arg("--path");
    path_cmd.assert().success().stdout(predicate::str::contains("cnfmt/config.toml"));
}

#[test]
fn config_rejects_out_of_range_decimals() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .args(["config", "--set-decimals", "-1"]);

    cmd.assert().failure().stderr(predicate::str::contains("decimals must be between 0 and"));
    temp.child("config/cnfmt/config.toml").assert(predicate::path::missing());
}

#[test]
fn malformed_config_is_reported() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("config/cnfmt/config.toml").write_str("decimals = \"two\"").unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .args(["bytes", "1024"]);

    cmd.assert().failure().stderr(predicate::str::contains("Failed to parse configuration"));
}

#[test]
fn bare_config_reports_the_file_without_creating_it() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path()).env("XDG_CONFIG_HOME", temp.child("config").path()).arg("config");

    cmd.assert().success().stdout(predicate::str::starts_with("Config file: "));
    temp.child("config/cnfmt/config.toml").assert(predicate::path::missing());
}

#[test]
fn failing_editor_is_reported_after_seeding_defaults() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .env("VISUAL", "false")
        .args(["config", "--edit"]);

    cmd.assert().failure().stderr(predicate::str::contains("false exited with"));
    temp.child("config/cnfmt/config.toml").assert(predicate::str::contains("decimals = 2"));
}
