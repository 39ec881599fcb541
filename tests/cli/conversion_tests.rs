use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn mdkit() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mdkit"))
}

#[test]
fn converts_file_next_to_source() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.md");
    fs::write(&source, "# Hello\n\nworld\n").unwrap();

    mdkit()
        .arg(&source)
        .assert()
        .success()
        .stdout("converted 'a.md' into 'a.html'\n");

    assert_eq!(
        fs::read_to_string(dir.path().join("a.html")).unwrap(),
        "<h1>Hello</h1>\n<p>world</p>\n"
    );
}

#[test]
fn prints_to_stdout_with_dash() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.md");
    fs::write(&source, "*hi*\n").unwrap();

    mdkit()
        .arg(&source)
        .arg("-")
        .assert()
        .success()
        .stdout("<p><em>hi</em></p>\n");
}

#[test]
fn directory_cannot_go_to_stdout() {
    let dir = tempdir().unwrap();
    mdkit()
        .arg(dir.path())
        .arg("-")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot print source directory to console"));
}

#[test]
fn converts_directory_into_target_directory() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(src.path().join("one.md"), "1\n").unwrap();
    fs::write(src.path().join("two.md"), "2\n").unwrap();
    fs::write(src.path().join("skip.txt"), "x\n").unwrap();
    fs::create_dir(src.path().join("nested")).unwrap();
    fs::write(src.path().join("nested/three.md"), "3\n").unwrap();

    mdkit()
        .arg(src.path())
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("converted 'one.md' into 'one.html'"))
        .stdout(predicate::str::contains("converted 'two.md' into 'two.html'"));

    assert_eq!(fs::read_to_string(out.path().join("one.html")).unwrap(), "<p>1</p>\n");
    assert!(out.path().join("two.html").exists());
    assert!(!out.path().join("skip.html").exists());
    assert!(!out.path().join("three.html").exists());
}

#[test]
fn recursive_directory_mirrors_layout() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::create_dir(src.path().join("nested")).unwrap();
    fs::write(src.path().join("nested/three.md"), "3\n").unwrap();

    mdkit()
        .arg("--recursive")
        .arg(src.path())
        .arg(out.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(out.path().join("nested/three.html")).unwrap(),
        "<p>3</p>\n"
    );
}

#[test]
fn file_and_directory_cannot_mix() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.md");
    fs::write(&source, "a\n").unwrap();
    mdkit()
        .arg(&source)
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("either need to be directories or individual files"));
}

#[test]
fn refuses_to_overwrite_without_force() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.md");
    let target = dir.path().join("a.html");
    fs::write(&source, "new\n").unwrap();
    fs::write(&target, "old").unwrap();

    mdkit()
        .arg(&source)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot overwrite target file"));
    assert_eq!(fs::read_to_string(&target).unwrap(), "old");

    mdkit().arg("--force").arg(&source).assert().success();
    assert_eq!(fs::read_to_string(&target).unwrap(), "<p>new</p>\n");
}

#[test]
fn strict_mode_stops_with_an_error() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.md");
    fs::write(&source, "new\n").unwrap();
    fs::write(dir.path().join("a.html"), "old").unwrap();

    mdkit()
        .arg("--strict")
        .arg(&source)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Application Error"));
}

#[test]
fn extended_flavor_renders_tables() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("t.md");
    fs::write(&source, "| a |\n|---|\n| 1 |\n").unwrap();

    mdkit()
        .arg("--extended")
        .arg(&source)
        .arg("-")
        .assert()
        .success()
        .stdout(predicate::str::contains("<table>"));

    mdkit()
        .arg(&source)
        .arg("-")
        .assert()
        .success()
        .stdout(predicate::str::contains("<table>").not());
}

#[test]
fn text_and_json_formats() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.md");
    fs::write(&source, "# Title\n\n*body*\n").unwrap();

    mdkit()
        .args(["--format", "text"])
        .arg(&source)
        .arg("-")
        .assert()
        .success()
        .stdout("Title\nbody\n");

    let output = mdkit()
        .args(["--format", "json"])
        .arg(&source)
        .arg("-")
        .output()
        .unwrap();
    assert!(output.status.success());
    let ast: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ast["document"][0]["heading"]["level"], 1);
}

#[test]
fn default_target_extension_follows_format() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.md");
    fs::write(&source, "x\n").unwrap();

    mdkit()
        .args(["--format", "yaml"])
        .arg(&source)
        .assert()
        .success()
        .stdout("converted 'a.md' into 'a.yaml'\n");
    assert!(dir.path().join("a.yaml").exists());
}

#[test]
fn json_report_lists_conversions() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.md"), "a\n").unwrap();
    fs::write(dir.path().join("draft.md"), "d\n").unwrap();

    let output = mdkit()
        .args(["--report", "json", "--exclude", "draft.md"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let converted = report["converted"].as_array().unwrap();
    assert_eq!(converted.len(), 1);
    assert!(converted[0]["source"].as_str().unwrap().ends_with("a.md"));
    assert_eq!(report["failed"].as_array().map(Vec::len), Some(0));
}

#[test]
fn standalone_document() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("page.md");
    fs::write(&source, "# Page\n").unwrap();

    mdkit()
        .arg("--standalone")
        .arg(&source)
        .arg("-")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<title>Page</title>"));
}
