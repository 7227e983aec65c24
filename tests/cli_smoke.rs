use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const GPL_LINE: &str = "// SPDX-License-Identifier: GPL-3.0-or-later";

fn bin_path() -> &'static str {
    env!("CARGO_BIN_EXE_spdx-stamp")
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run spdx-stamp")
}

fn setup_tree(files: &[(&str, &str)]) -> TempDir {
    let td = TempDir::new().expect("tempdir");
    for (name, contents) in files {
        let path = td.path().join(name);
        fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
        fs::write(path, contents).expect("write file");
    }
    td
}

fn read(td: &TempDir, name: &str) -> String {
    fs::read_to_string(td.path().join(name)).expect("read file")
}

#[test]
fn help_runs() {
    let output = Command::new(bin_path())
        .arg("--help")
        .output()
        .expect("failed to run spdx-stamp --help");

    assert!(output.status.success(), "help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "unexpected help output: {stdout}");
}

#[test]
fn no_arguments_stamps_go_files_under_current_dir() {
    let td = setup_tree(&[
        ("main.go", "package main\n"),
        ("internal/lib/lib.go", "package lib\n"),
        ("notes.txt", "hello\n"),
    ]);

    let output = run_in(td.path(), &[]);

    assert!(output.status.success(), "run failed: {output:?}");
    assert_eq!(read(&td, "main.go"), format!("{GPL_LINE}\n\npackage main\n"));
    assert_eq!(
        read(&td, "internal/lib/lib.go"),
        format!("{GPL_LINE}\n\npackage lib\n")
    );
    assert_eq!(read(&td, "notes.txt"), "hello\n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Added SPDX identifier to"), "stdout: {stdout}");
    assert!(stdout.contains("lib.go"), "stdout: {stdout}");
}

#[test]
fn second_run_reports_everything_present() {
    let td = setup_tree(&[("main.go", "package main\n")]);

    let first = run_in(td.path(), &[]);
    assert!(first.status.success(), "first run failed: {first:?}");
    let after_first = read(&td, "main.go");

    let second = run_in(td.path(), &[]);
    assert!(second.status.success(), "second run failed: {second:?}");

    assert_eq!(read(&td, "main.go"), after_first);
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(
        stdout.contains("SPDX identifier already present in"),
        "stdout: {stdout}"
    );
    assert!(!stdout.contains("Added SPDX identifier"), "stdout: {stdout}");
}

#[test]
fn mit_header_is_left_alone() {
    let original = "// SPDX-License-Identifier: MIT\npackage main\n";
    let td = setup_tree(&[("main.go", original)]);

    let output = run_in(td.path(), &[]);

    assert!(output.status.success(), "run failed: {output:?}");
    assert_eq!(read(&td, "main.go"), original);
}

#[test]
fn empty_tree_exits_zero() {
    let td = TempDir::new().expect("tempdir");

    let output = run_in(td.path(), &[]);

    assert!(output.status.success(), "run failed: {output:?}");
}

#[test]
fn explicit_root_and_extension() {
    let td = setup_tree(&[("proj/src/lib.rs", "pub fn f() {}\n"), ("outside.rs", "")]);
    let root = td.path().join("proj");

    let output = run_in(
        td.path(),
        &[
            "--root",
            root.to_str().expect("utf-8 path"),
            "--extension",
            "rs",
            "--license",
            "MIT",
        ],
    );

    assert!(output.status.success(), "run failed: {output:?}");
    assert_eq!(
        read(&td, "proj/src/lib.rs"),
        "// SPDX-License-Identifier: MIT\n\npub fn f() {}\n"
    );
    assert_eq!(read(&td, "outside.rs"), "");
}

#[test]
fn check_mode_fails_without_writing() {
    let td = setup_tree(&[("main.go", "package main\n")]);

    let output = run_in(td.path(), &["--check"]);

    assert!(!output.status.success(), "check should fail: {output:?}");
    assert_eq!(read(&td, "main.go"), "package main\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Missing SPDX identifier in"), "stdout: {stdout}");
}

#[test]
fn missing_root_exits_non_zero() {
    let td = TempDir::new().expect("tempdir");

    let output = run_in(td.path(), &["--root", "does-not-exist"]);

    assert!(!output.status.success(), "run should fail: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist"), "stderr: {stderr}");
}
