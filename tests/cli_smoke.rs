#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Conversions run with `--stdout` so no clipboard is needed.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn tblclip() -> Command {
    let mut cmd = Command::cargo_bin("tblclip").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_displays_usage() {
    tblclip()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Copy CSV/TSV tables"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--join"))
        .stdout(predicate::str::contains("--stdout"));
}

#[test]
fn test_version_displays_version() {
    tblclip()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_stdin_is_sniffed() {
    tblclip()
        .arg("--stdout")
        .write_stdin("a,b,c\nd,e,f\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<table><tr><td>a</td><td>b</td><td>c</td></tr>",
        ));
}

#[test]
fn test_dash_reads_stdin() {
    tblclip()
        .args(["--stdout", "-"])
        .write_stdin("x\ty\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<tr><td>x</td><td>y</td></tr>"));
}

#[test]
fn test_explicit_format_overrides_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, "a,b\tc\n").unwrap();

    tblclip()
        .args(["--stdout", "--format", "TSV"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("<td>a,b</td><td>c</td>"));
}

#[test]
fn test_join_puts_files_in_one_table() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.csv");
    let b = dir.path().join("b.csv");
    fs::write(&a, "1,2\n").unwrap();
    fs::write(&b, "3,4\n").unwrap();

    tblclip()
        .args(["--stdout", "--join"])
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<table><tr><td>1</td><td>2</td></tr><tr><td>3</td><td>4</td></tr></table>",
        ));
}

#[test]
fn test_unsupported_format() {
    tblclip()
        .args(["--stdout", "--format", "xlsx"])
        .write_stdin("a,b\n")
        .assert()
        .code(exitcode::CONFIG)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unsupported format: xlsx"));
}

#[test]
fn test_missing_file() {
    tblclip()
        .args(["--stdout", "/nonexistent/path/to/table.csv"])
        .assert()
        .code(exitcode::NOINPUT)
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn test_empty_stdin_is_unknown_format() {
    tblclip()
        .arg("--stdout")
        .write_stdin("")
        .assert()
        .code(exitcode::DATAERR)
        .stderr(predicate::str::contains("unknown format"));
}

#[cfg(unix)]
#[test]
fn test_clipboard_command_receives_html() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("clip.html");

    tblclip()
        .args(["--clipboard-command", &format!("cat > '{}'", target.display())])
        .write_stdin("<a>,&b\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Copied 1 rows"));

    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "<table><tr><td>&lt;a&gt;</td><td>&amp;b</td></tr></table>"
    );
}

#[cfg(unix)]
#[test]
fn test_quiet_suppresses_status() {
    tblclip()
        .args(["--quiet", "--clipboard-command", "cat > /dev/null"])
        .write_stdin("a,b\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn test_clipboard_command_exiting_early_reports_its_status() {
    let input = "a,b,c\n".repeat(100_000);

    tblclip()
        .args(["--clipboard-command", "exit 4"])
        .write_stdin(input)
        .assert()
        .code(exitcode::SOFTWARE)
        .stderr(predicate::str::contains("failed with status"));
}

#[test]
fn test_lowercase_v_is_rejected() {
    tblclip()
        .arg("-v")
        .write_stdin("a,b\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
