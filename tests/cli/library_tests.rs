// tests/cli/library_tests.rs
use predicates::prelude::*;

use crate::common::LibraryFixture;

#[test]
fn list_shows_every_manga() {
    LibraryFixture::sample()
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Berserk"))
        .stdout(predicate::str::contains("1-2; 4"))
        .stdout(predicate::str::contains("Monster"));
}

#[test]
fn library_path_from_environment() {
    let fixture = LibraryFixture::sample();
    assert_cmd::Command::new(env!("CARGO_BIN_EXE_manga_volumes"))
        .env("MANGA_VOLUMES_LIBRARY", fixture.path())
        .env("RUST_LOG", "off")
        .args(["seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1-2; 4\n"));
}

#[test]
fn list_on_missing_library_is_empty() {
    LibraryFixture::empty()
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Library is empty."));
}

#[test]
fn seed_skips_unusable_records() {
    LibraryFixture::sample()
        .command()
        .args(["seed", "2"])
        .assert()
        .success()
        .stdout(predicate::str::diff("3\n"));
}

#[test]
fn show_renders_shelf_up_to_known_total() {
    LibraryFixture::sample()
        .command()
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Berserk (#1): 3 owned"))
        .stdout(predicate::str::contains("[1] [2]  3  [4]  5   6"))
        .stdout(predicate::str::contains("Missing: 3; 5-6"));
}

#[test]
fn edit_replaces_volumes_on_disk() {
    let fixture = LibraryFixture::sample();
    fixture
        .command()
        .args(["edit", "1", "1-3; 6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: 3; 6"))
        .stdout(predicate::str::contains("Removed: 4"));

    let library = fixture.read_json();
    let volumes = library["mangas"][0]["volumes"].as_array().expect("volumes");
    let numbers: Vec<&str> = volumes.iter().map(|v| v["volumeNumber"].as_str().unwrap()).collect();
    assert_eq!(numbers, vec!["1", "2", "3", "6"]);
    assert!(volumes.iter().all(|v| v["id"].as_u64().unwrap() > 0));
    assert!(volumes.iter().all(|v| v["mangaId"] == 1));

    fixture
        .command()
        .args(["seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1-3; 6\n"));
}

#[test]
fn edit_with_same_volumes_reports_no_changes() {
    LibraryFixture::sample()
        .command()
        .args(["edit", "1", "4, 1-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes."));
}

#[test]
fn edit_unknown_manga_fails() {
    LibraryFixture::sample()
        .command()
        .args(["edit", "9", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manga 9 not found"));
}

#[test]
fn add_then_show_as_json() {
    let fixture = LibraryFixture::empty();
    fixture
        .command()
        .args(["add", "Vagabond", "--total", "37", "--volumes", "1-5; 8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vagabond (#1): 6 owned"));

    let output = fixture.command().args(["--format", "json", "show", "1"]).output().expect("runs");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["volumes"], "1-5; 8");
    assert_eq!(value["totalVolumes"], 37);
    assert_eq!(value["missing"], "6-7; 9-37");
}

#[test]
fn add_rejects_blank_title() {
    LibraryFixture::empty()
        .command()
        .args(["add", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title must not be empty"));
}

#[test]
fn corrupt_library_is_reported() {
    let fixture = LibraryFixture::empty();
    std::fs::write(fixture.path(), "[not a library").unwrap();
    fixture
        .command()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("library.json"));
}
