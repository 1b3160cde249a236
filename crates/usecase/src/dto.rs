// crates/usecase/src/dto.rs
use manga_volumes_domain::{OwnedVolumeSet, Shelf, VolumeDiff};
use manga_volumes_shared_kernel::MangaId;

/// One line of the library listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibrarySummary {
    pub id: MangaId,
    pub title: String,
    pub total_volumes: Option<u32>,
    pub owned: OwnedVolumeSet,
}

/// Everything the volume view of a single manga shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeOverview {
    pub id: MangaId,
    pub title: String,
    pub total_volumes: Option<u32>,
    pub owned: OwnedVolumeSet,
    pub shelf: Shelf,
}

impl VolumeOverview {
    /// Text used to pre-fill the volume edit field.
    pub fn canonical(&self) -> String {
        self.owned.to_string()
    }
}

/// Result of replacing a manga's owned volumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub overview: VolumeOverview,
    pub diff: VolumeDiff,
}
