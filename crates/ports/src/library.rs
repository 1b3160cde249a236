// crates/ports/src/library.rs
use manga_volumes_shared_kernel::{MangaId, Result, VolumeId};
use serde::{Deserialize, Serialize};

/// DTO for one stored volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDto {
    pub id: VolumeId,
    pub manga_id: MangaId,
    pub volume_number: String,
    #[serde(default)]
    pub cover_image: Option<String>,
}

/// DTO for a manga entry together with its volumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaEntryDto {
    pub id: MangaId,
    pub title: String,
    #[serde(default)]
    pub total_volumes: Option<u32>,
    #[serde(default)]
    pub volumes: Vec<VolumeDto>,
}

/// Input for creating a manga entry. The repository assigns the manga id
/// and one volume record per entry of `volume_numbers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMangaDto {
    pub title: String,
    pub total_volumes: Option<u32>,
    pub volume_numbers: Vec<String>,
}

/// Port for reading and updating the manga library.
pub trait LibraryRepository: Send + Sync {
    fn list(&self) -> Result<Vec<MangaEntryDto>>;

    fn find(&self, id: MangaId) -> Result<Option<MangaEntryDto>>;

    fn insert(&self, manga: NewMangaDto) -> Result<MangaEntryDto>;

    /// Replaces every volume of `id` with `volumes`. Records carrying
    /// [`VolumeId::PLACEHOLDER`] receive fresh ids.
    fn replace_volumes(&self, id: MangaId, volumes: Vec<VolumeDto>) -> Result<MangaEntryDto>;
}
