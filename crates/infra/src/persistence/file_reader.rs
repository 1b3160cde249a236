// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufReader, ErrorKind, Read},
    path::Path,
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        File::open(path).map(BufReader::new)
    }

    /// Read the whole file as UTF-8, or `None` if it does not exist.
    pub fn read_optional(path: &Path) -> std::io::Result<Option<String>> {
        let mut reader = match Self::open_buffered(path) {
            Ok(reader) => reader,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Some(text))
    }
}
