#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

fn kartik_cmd() -> Command {
    Command::new(cargo_bin("kartik"))
}

#[test]
fn test_version_flag() {
    kartik_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "kartik {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_help_flag() {
    kartik_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("business card"));
}

#[test]
fn test_rejects_arguments() {
    kartik_cmd().arg("projects").assert().failure();
}

#[test]
fn test_without_terminal_prints_card_then_fails() {
    // stdin/stderr are pipes here, so the prompt cannot start
    kartik_cmd()
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Kartik Labhshetwar"))
        .stdout(predicate::str::contains("Build ship grow."))
        .stderr(predicate::str::contains("Error:"));
}
