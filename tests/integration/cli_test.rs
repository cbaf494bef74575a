//! Integration tests for the CLI surface.

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("sweet-surprise").expect("binary builds")
}

#[test]
fn help_describes_the_card() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal greeting card"))
        .stdout(predicate::str::contains("--muted"))
        .stdout(predicate::str::contains("--reduced-motion"));
}

#[test]
fn version_includes_package_version() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_prints_the_toml_location() {
    bin()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_show_prints_toml_fields() {
    bin()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme"))
        .stdout(predicate::str::contains("muted"));
}

#[test]
fn completions_generate_for_bash() {
    bin()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sweet-surprise"));
}

#[test]
fn unknown_subcommand_fails() {
    bin().arg("no-such-command").assert().failure();
}

#[test]
fn running_without_a_tty_fails_cleanly() {
    // Test harnesses capture stdout, so the TTY check must refuse to start
    bin()
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
