// crates/infra/src/persistence/json_library.rs
use std::{
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use manga_volumes_ports::library::{LibraryRepository, MangaEntryDto, NewMangaDto, VolumeDto};
use manga_volumes_shared_kernel::{
    ApplicationError, ErrorContext, InfrastructureError, MangaId, Result, VolumeId,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{FileReader, FileWriter};

/// On-disk shape of the library file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibraryFile {
    #[serde(default)]
    mangas: Vec<MangaEntryDto>,
}

impl LibraryFile {
    fn next_manga_id(&self) -> Result<MangaId> {
        let highest = self.mangas.iter().map(|m| m.id.value()).max().unwrap_or(0);
        let next = highest.checked_add(1).ok_or_else(|| InfrastructureError::IdsExhausted {
            kind: "manga".to_string(),
            highest,
        })?;
        Ok(MangaId::new(next))
    }

    fn highest_volume_id(&self) -> u64 {
        self.mangas
            .iter()
            .flat_map(|m| m.volumes.iter())
            .map(|v| v.id.value())
            .max()
            .unwrap_or(0)
    }
}

/// Advances `last` and returns it as a fresh volume id.
fn take_volume_id(last: &mut u64) -> Result<VolumeId> {
    *last = last.checked_add(1).ok_or_else(|| InfrastructureError::IdsExhausted {
        kind: "volume".to_string(),
        highest: *last,
    })?;
    Ok(VolumeId::new(*last))
}

/// [`LibraryRepository`] backed by a single JSON file.
///
/// A missing file is an empty library; every write replaces the file
/// atomically. Calls on one instance are serialized.
pub struct JsonLibrary {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonLibrary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>> {
        self.lock.lock().map_err(|err| {
            InfrastructureError::LockPoisoned { details: err.to_string() }.into()
        })
    }

    fn read(&self) -> Result<LibraryFile> {
        let text = FileReader::read_optional(&self.path).map_err(|source| InfrastructureError::FileRead {
            path: self.path.clone(),
            source,
        })?;
        let Some(text) = text else {
            debug!(path = %self.path.display(), "library file missing, starting empty");
            return Ok(LibraryFile::default());
        };
        let library: LibraryFile = serde_json::from_str(&text)
            .with_context(|| format!("parsing library file '{}'", self.path.display()))?;
        debug!(path = %self.path.display(), mangas = library.mangas.len(), "loaded library");
        Ok(library)
    }

    fn write(&self, library: &LibraryFile) -> Result<()> {
        let mut data = serde_json::to_vec_pretty(library)?;
        data.push(b'\n');
        FileWriter::atomic_write(&self.path, &data).map_err(|source| InfrastructureError::FileWrite {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), mangas = library.mangas.len(), "wrote library");
        Ok(())
    }
}

impl LibraryRepository for JsonLibrary {
    fn list(&self) -> Result<Vec<MangaEntryDto>> {
        let _guard = self.guard()?;
        Ok(self.read()?.mangas)
    }

    fn find(&self, id: MangaId) -> Result<Option<MangaEntryDto>> {
        let _guard = self.guard()?;
        Ok(self.read()?.mangas.into_iter().find(|m| m.id == id))
    }

    fn insert(&self, manga: NewMangaDto) -> Result<MangaEntryDto> {
        let _guard = self.guard()?;
        let mut library = self.read()?;

        let id = library.next_manga_id()?;
        let mut last_volume_id = library.highest_volume_id();
        let volumes = manga
            .volume_numbers
            .into_iter()
            .map(|volume_number| {
                Ok(VolumeDto {
                    id: take_volume_id(&mut last_volume_id)?,
                    manga_id: id,
                    volume_number,
                    cover_image: None,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let entry = MangaEntryDto {
            id,
            title: manga.title,
            total_volumes: manga.total_volumes,
            volumes,
        };

        library.mangas.push(entry.clone());
        self.write(&library)?;
        Ok(entry)
    }

    fn replace_volumes(&self, id: MangaId, volumes: Vec<VolumeDto>) -> Result<MangaEntryDto> {
        let _guard = self.guard()?;
        let mut library = self.read()?;

        let mut last_volume_id = library.highest_volume_id();
        let entry = library
            .mangas
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ApplicationError::MangaNotFound { id: id.value() })?;

        entry.volumes = volumes
            .into_iter()
            .map(|mut volume| {
                volume.manga_id = id;
                if volume.id.is_placeholder() {
                    volume.id = take_volume_id(&mut last_volume_id)?;
                }
                Ok(volume)
            })
            .collect::<Result<Vec<_>>>()?;
        let updated = entry.clone();

        self.write(&library)?;
        Ok(updated)
    }
}
