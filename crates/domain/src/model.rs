pub mod diff;
pub mod owned_set;
pub mod volume_record;

pub use diff::VolumeDiff;
pub use owned_set::OwnedVolumeSet;
pub use volume_record::VolumeRecord;
