//! Binary-level tests for the CLI surface.

use assert_cmd::Command;
use predicates::prelude::*;

const CONFIG: &str = r#"
[tools]
godot = "/opt/godot/godot"
butler = "/opt/butler/butler"
steamcmd = "Steam/builder/steamcmd.exe"

[itch]
user = "studio"
game = "grapple"

[steam]
username = "builder"
app_build_vdf = "scripts/app_build_123456.vdf"

[aws]
account_id = "000000000000"
region = "us-east-1"
cluster = "grapple"
"#;

#[test]
fn no_commands_is_silent_success() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("gamedeploy")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn unknown_command_is_reported_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("deploy.toml"), CONFIG).unwrap();

    Command::cargo_bin("gamedeploy")
        .unwrap()
        .current_dir(dir.path())
        .arg("frobnicate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid command: frobnicate"));
}

#[test]
fn missing_config_is_a_fatal_error_with_a_suggestion() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("gamedeploy")
        .unwrap()
        .current_dir(dir.path())
        .arg("build:game")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"))
        .stdout(predicate::str::contains("deploy.example.toml"));
}

#[test]
fn help_lists_the_commands() {
    Command::cargo_bin("gamedeploy")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build:game"))
        .stdout(predicate::str::contains("restart:mm"));
}
