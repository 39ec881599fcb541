use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_mdkit"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mdkit"))
        .stdout(predicate::str::contains("--extended"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_mdkit"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_source_fails() {
    Command::new(env!("CARGO_BIN_EXE_mdkit"))
        .arg("does-not-exist.md")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("source 'does-not-exist.md' does not exist"));
}

#[test]
fn requires_a_source() {
    Command::new(env!("CARGO_BIN_EXE_mdkit"))
        .assert()
        .failure();
}
