// crates/shared-kernel/src/value_objects/mod.rs
pub mod ids;
pub mod volume_number;

pub use ids::{MangaId, VolumeId};
pub use volume_number::VolumeNumber;
