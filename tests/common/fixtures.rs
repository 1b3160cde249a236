// tests/common/fixtures.rs
#![allow(dead_code)]
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Library document with two series: one with a gap, one with a junk record.
pub const SAMPLE_LIBRARY: &str = r#"{
  "mangas": [
    {
      "id": 1,
      "title": "Berserk",
      "totalVolumes": 6,
      "volumes": [
        { "id": 1, "mangaId": 1, "volumeNumber": "1", "coverImage": null },
        { "id": 2, "mangaId": 1, "volumeNumber": "2", "coverImage": null },
        { "id": 3, "mangaId": 1, "volumeNumber": "4", "coverImage": null }
      ]
    },
    {
      "id": 2,
      "title": "Monster",
      "volumes": [
        { "id": 4, "mangaId": 2, "volumeNumber": "3", "coverImage": null },
        { "id": 5, "mangaId": 2, "volumeNumber": "special", "coverImage": null }
      ]
    }
  ]
}
"#;

/// A temporary directory holding one library file.
pub struct LibraryFixture {
    _dir: tempfile::TempDir,
    path: PathBuf,
}

impl LibraryFixture {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("library.json");
        Self { _dir: dir, path }
    }

    pub fn sample() -> Self {
        let fixture = Self::empty();
        std::fs::write(&fixture.path, SAMPLE_LIBRARY).expect("write sample library");
        fixture
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The CLI binary pointed at this library, with logging silenced.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_manga_volumes"));
        cmd.arg("--library")
            .arg(&self.path)
            .env_remove("MANGA_VOLUMES_MAX_RANGE_SPAN")
            .env("RUST_LOG", "off");
        cmd
    }

    pub fn read_json(&self) -> serde_json::Value {
        let text = std::fs::read_to_string(&self.path).expect("library exists");
        serde_json::from_str(&text).expect("library is JSON")
    }
}
