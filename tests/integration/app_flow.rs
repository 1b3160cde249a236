// tests/integration/app_flow.rs
use clap::Parser;
use manga_volumes::{app, args::Args, config::Config};

use crate::common::LibraryFixture;

fn run(fixture: &LibraryFixture, argv: &[&str]) -> anyhow::Result<String> {
    let mut full = vec!["manga_volumes", "--library"];
    let path = fixture.path().to_str().expect("utf-8 temp path");
    full.push(path);
    full.extend_from_slice(argv);

    let args = Args::try_parse_from(full)?;
    let config = Config::from(&args);
    let mut out = Vec::new();
    app::run(&args.command, &config, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn seed_edit_round_trip_keeps_canonical_form() {
    let fixture = LibraryFixture::sample();

    let seeded = run(&fixture, &["seed", "1"]).unwrap();
    assert_eq!(seeded, "1-2; 4\n");

    // Feeding the seed back unchanged must not alter the library.
    run(&fixture, &["edit", "1", seeded.trim_end()]).unwrap();
    assert_eq!(run(&fixture, &["seed", "1"]).unwrap(), seeded);
}

#[test]
fn edit_normalizes_messy_input() {
    let fixture = LibraryFixture::sample();
    let report = run(&fixture, &["edit", "2", " 3 ,, 1-2 ; 2 ; 9-7 ; 0 ; 5abc"]).unwrap();
    assert!(report.contains("Added: 1-2"));
    assert_eq!(run(&fixture, &["seed", "2"]).unwrap(), "1-3\n");
}

#[test]
fn oversized_range_leaves_volumes_empty() {
    let fixture = LibraryFixture::sample();
    run(&fixture, &["edit", "1", "1-999999999"]).unwrap();
    assert_eq!(run(&fixture, &["seed", "1"]).unwrap(), "\n");
}

#[test]
fn show_unknown_manga_is_an_error() {
    let fixture = LibraryFixture::sample();
    let err = run(&fixture, &["show", "77"]).unwrap_err();
    assert!(format!("{err:#}").contains("Manga 77 not found"));
}

#[test]
fn json_save_report_is_flat() {
    let fixture = LibraryFixture::sample();
    let report = run(&fixture, &["--format", "json", "edit", "1", "1-6"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(value["volumes"], "1-6");
    assert_eq!(value["added"], "3; 5-6");
    assert_eq!(value["removed"], "");
    assert_eq!(value["missing"], "");
}

#[test]
fn highest_volume_number_keeps_show_and_edit_usable() {
    let fixture = LibraryFixture::sample();
    let report = run(&fixture, &["edit", "1", "4294967295"]).unwrap();
    assert!(report.contains("too long to draw"));
    assert!(!report.contains("Missing:"));

    let shown = run(&fixture, &["show", "1"]).unwrap();
    assert!(shown.contains("Berserk (#1): 1 owned"));
    assert_eq!(run(&fixture, &["seed", "1"]).unwrap(), "4294967295\n");

    run(&fixture, &["edit", "1", "1-2"]).unwrap();
    assert_eq!(run(&fixture, &["seed", "1"]).unwrap(), "1-2\n");
}

#[test]
fn seed_json_reports_only_the_text() {
    let fixture = LibraryFixture::sample();
    let report = run(&fixture, &["--format", "json", "seed", "1"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(value["canonical"], "1-2; 4");
    assert!(value.get("count").is_none());
}
