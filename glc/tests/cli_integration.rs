//! Integration tests for the glc CLI

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn glc() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("glc"))
}

fn create_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_no_arguments_prints_usage() {
    glc()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No arguments passed."))
        .stdout(predicate::str::contains("Usage glc"));
}

#[test]
fn test_help_exits_with_one() {
    glc()
        .arg("-h")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage glc"))
        .stdout(predicate::str::contains("-e:"));
}

#[test]
fn test_version() {
    glc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_argument() {
    glc()
        .args(["-d=.", "-e=.c", "--nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid argument"))
        .stdout(predicate::str::contains("Usage glc"));
}

#[test]
fn test_missing_extensions() {
    glc()
        .arg("-d=.")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No exts passed."));
}

#[test]
fn test_missing_directory() {
    glc()
        .arg("-e=.c")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No directory passed."));
}

#[test]
fn test_empty_directory_finds_nothing() {
    let temp = tempdir().unwrap();
    let dir_arg = format!("-d={}", temp.path().display());

    glc()
        .args([dir_arg.as_str(), "-e=.c,.h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 files in"))
        .stdout(predicate::str::contains("[\".c\", \".h\"]"))
        .stdout(predicate::str::contains("File Name").not());
}

#[test]
fn test_missing_root_warns_and_exits_cleanly() {
    glc()
        .args(["-d=/nonexistent/glc/root", "-e=.c"])
        .assert()
        .success()
        .stderr(predicate::str::contains("does not exist").count(1))
        .stdout(predicate::str::contains("Found 0 files in /nonexistent/glc/root"));
}

#[test]
fn test_table_output() {
    let temp = tempdir().unwrap();
    create_file(temp.path(), "src/main.c", "// header\nint x = 1;\n/* note */");
    create_file(temp.path(), "tools/gen.py", "# comment\nx = 1\n\"\"\"doc\"\"\"\n");
    create_file(temp.path(), "README.md", "# not counted\n");
    let dir_arg = format!("-d={}", temp.path().display());

    glc()
        .args([dir_arg.as_str(), "-e=.c,'.py'"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "| File Lines | File LoCs | File Commented Lines",
        ))
        .stdout(predicate::str::contains("main.c   | 3          | 1         | 2"))
        .stdout(predicate::str::contains("gen.py | 3          | 1         | 2"))
        .stdout(predicate::str::contains(
            "Total Lines | Total LoCs | Total Commented Lines",
        ))
        .stdout(predicate::str::contains("6           | 2          | 4"))
        .stdout(predicate::str::contains("README").not());
}

#[test]
fn test_verbose_output() {
    let temp = tempdir().unwrap();
    create_file(temp.path(), "a.c", "int a;\n/* open\nstill open\n");
    let dir_arg = format!("-d={}", temp.path().display());

    glc()
        .args(["-v", dir_arg.as_str(), "-e=.c"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "a.c contains 3 lines which are divided in 1 LoCs and 2 commented lines",
        ))
        .stdout(predicate::str::contains(
            "This project contains in total 3 lines, which are divided in: 1 LoCs and 2 commented lines",
        ))
        .stdout(predicate::str::contains("File Name").not());
}

#[test]
fn test_mask_strings_flag() {
    let temp = tempdir().unwrap();
    create_file(temp.path(), "a.js", "s = `\n/* not a comment\n`;\ncode();\n");
    let dir_arg = format!("-d={}", temp.path().display());

    glc()
        .args(["-v", dir_arg.as_str(), "-e=.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 LoCs and 3 commented lines"));

    glc()
        .args(["-v", "-s", dir_arg.as_str(), "-e=.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 LoCs and 0 commented lines"));
}

#[test]
fn test_unreadable_file_aborts() {
    let temp = tempdir().unwrap();
    create_file(temp.path(), "ok.c", "int x;\n");
    fs::write(temp.path().join("bad.c"), [0xff, 0xfe, 0xfd]).unwrap();
    let dir_arg = format!("-d={}", temp.path().display());

    glc()
        .args([dir_arg.as_str(), "-e=.c"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read file"))
        .stdout(predicate::str::contains("Total Lines").not());
}
