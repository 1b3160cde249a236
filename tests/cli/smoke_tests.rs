// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::LibraryFixture;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_manga_volumes"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("manga_volumes"))
        .stdout(predicate::str::contains("1-10; 15; 20"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_manga_volumes"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn parse_prints_canonical_text() {
    LibraryFixture::empty()
        .command()
        .args(["parse", "9, 1-3;; 5-4, abc, 2"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1-3; 9\n4 volume(s)\n"));
}

#[test]
fn parse_accepts_leading_hyphen_text() {
    LibraryFixture::empty()
        .command()
        .args(["parse", "-5; 7"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("7\n"));
}

#[test]
fn parse_json_reports_tokens() {
    let output = LibraryFixture::empty()
        .command()
        .args(["--format", "json", "parse", "5-1; 2-3; x"])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["tokens"], serde_json::json!(["5-1", "2-3"]));
    assert_eq!(value["volumes"], serde_json::json!([2, 3]));
    assert_eq!(value["canonical"], "2-3");
}

#[test]
fn max_range_span_flag_limits_expansion() {
    LibraryFixture::empty()
        .command()
        .args(["--max-range-span", "5", "parse", "1-6; 10-14"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("10-14\n"));
}

#[test]
fn format_merges_numbers() {
    LibraryFixture::empty()
        .command()
        .args(["format", "9", "1", "3", "2", "7", "8", "5"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1-3; 5; 7-9\n"));
}

#[test]
fn format_rejects_zero() {
    LibraryFixture::empty()
        .command()
        .args(["format", "1", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start at 1"));
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_output_is_available() {
    LibraryFixture::empty()
        .command()
        .args(["--format", "yaml", "format", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("canonical:").and(predicate::str::contains("count: 1")));
}
