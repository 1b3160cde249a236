// crates/infra/src/persistence/file_writer.rs
use std::{
    fs,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        // PID + time nanos keeps concurrent writers from sharing a temp file.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = File::create(&tmp)?;
        let mut w = BufWriter::new(file);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();

        if let Err(err) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        // Sync the parent so the rename survives a crash on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
