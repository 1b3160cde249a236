// crates/domain/src/model/volume_record.rs
use manga_volumes_shared_kernel::{MangaId, VolumeId, VolumeNumber};

/// A stored volume of one manga. The number is kept as text, the way the
/// library stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeRecord {
    pub id: VolumeId,
    pub manga_id: MangaId,
    pub volume_number: String,
    pub cover_image: Option<String>,
}

impl VolumeRecord {
    /// A not-yet-persisted record for an owned volume.
    pub fn owned(manga_id: MangaId, number: VolumeNumber) -> Self {
        Self {
            id: VolumeId::PLACEHOLDER,
            manga_id,
            volume_number: number.to_string(),
            cover_image: None,
        }
    }

    /// The record's volume number, if it coerces to a valid one.
    pub fn volume(&self) -> Option<VolumeNumber> {
        VolumeNumber::coerce(&self.volume_number)
    }
}
