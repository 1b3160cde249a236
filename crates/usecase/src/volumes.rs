// crates/usecase/src/volumes.rs
use manga_volumes_domain::{OwnedVolumeSet, ParseOptions, Shelf, VolumeDiff, VolumeRecord, parse_with};
use manga_volumes_ports::library::{LibraryRepository, MangaEntryDto, NewMangaDto, VolumeDto};
use manga_volumes_shared_kernel::{ApplicationError, DomainError, MangaId, Result};
use tracing::{debug, info};

use crate::dto::{LibrarySummary, SaveOutcome, VolumeOverview};

pub struct ManageVolumes<'a> {
    library: &'a dyn LibraryRepository,
    options: ParseOptions,
}

impl<'a> ManageVolumes<'a> {
    pub fn new(library: &'a dyn LibraryRepository) -> Self {
        Self { library, options: ParseOptions::default() }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn list(&self) -> Result<Vec<LibrarySummary>> {
        let entries = self.library.list()?;
        Ok(entries
            .into_iter()
            .map(|entry| LibrarySummary {
                owned: owned_volumes(&entry),
                id: entry.id,
                title: entry.title,
                total_volumes: entry.total_volumes,
            })
            .collect())
    }

    pub fn overview(&self, id: MangaId) -> Result<VolumeOverview> {
        let entry = self.load(id)?;
        Ok(overview_of(entry))
    }

    /// Canonical range string of the stored volumes, for pre-filling an edit field.
    pub fn seed_input(&self, id: MangaId) -> Result<String> {
        let entry = self.load(id)?;
        Ok(owned_volumes(&entry).to_string())
    }

    /// Parses `input` without touching the library.
    pub fn preview(&self, input: &str) -> OwnedVolumeSet {
        parse_with(input, &self.options)
    }

    /// Replaces the owned volumes of `id` with whatever `input` parses to.
    pub fn save(&self, id: MangaId, input: &str) -> Result<SaveOutcome> {
        let before = owned_volumes(&self.load(id)?);
        let after = self.preview(input);
        let diff = VolumeDiff::between(&before, &after);

        let records = after.to_records(id).into_iter().map(record_to_dto).collect();
        let stored = self.library.replace_volumes(id, records).map_err(|err| ApplicationError::SaveFailed {
            id: id.value(),
            reason: "library rejected the new volume list".to_string(),
            source: Some(Box::new(err)),
        })?;

        info!(
            manga = id.value(),
            owned = after.len(),
            added = diff.added.len(),
            removed = diff.removed.len(),
            "saved owned volumes"
        );
        Ok(SaveOutcome { overview: overview_of(stored), diff })
    }

    /// Creates a manga entry whose initial volumes are parsed from `input`.
    pub fn add(&self, title: &str, total_volumes: Option<u32>, input: &str) -> Result<VolumeOverview> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::InvalidTitle { reason: "title must not be empty".to_string() }.into());
        }

        let owned = self.preview(input);
        let stored = self.library.insert(NewMangaDto {
            title: title.to_string(),
            total_volumes,
            volume_numbers: owned.iter().map(|n| n.to_string()).collect(),
        })?;
        info!(manga = stored.id.value(), owned = owned.len(), "added manga");
        Ok(overview_of(stored))
    }

    fn load(&self, id: MangaId) -> Result<MangaEntryDto> {
        match self.library.find(id)? {
            Some(entry) => Ok(entry),
            None => {
                debug!(manga = id.value(), "manga not in library");
                Err(ApplicationError::MangaNotFound { id: id.value() }.into())
            }
        }
    }
}

fn overview_of(entry: MangaEntryDto) -> VolumeOverview {
    let owned = owned_volumes(&entry);
    VolumeOverview {
        shelf: Shelf::new(&owned, entry.total_volumes),
        owned,
        id: entry.id,
        title: entry.title,
        total_volumes: entry.total_volumes,
    }
}

fn owned_volumes(entry: &MangaEntryDto) -> OwnedVolumeSet {
    let records: Vec<VolumeRecord> = entry.volumes.iter().cloned().map(dto_to_record).collect();
    OwnedVolumeSet::from_records(&records)
}

fn dto_to_record(dto: VolumeDto) -> VolumeRecord {
    VolumeRecord {
        id: dto.id,
        manga_id: dto.manga_id,
        volume_number: dto.volume_number,
        cover_image: dto.cover_image,
    }
}

fn record_to_dto(record: VolumeRecord) -> VolumeDto {
    VolumeDto {
        id: record.id,
        manga_id: record.manga_id,
        volume_number: record.volume_number,
        cover_image: record.cover_image,
    }
}
