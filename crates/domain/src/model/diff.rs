// crates/domain/src/model/diff.rs
use serde::Serialize;

use super::OwnedVolumeSet;

/// What an edit changed in an owned set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VolumeDiff {
    pub added: OwnedVolumeSet,
    pub removed: OwnedVolumeSet,
}

impl VolumeDiff {
    pub fn between(before: &OwnedVolumeSet, after: &OwnedVolumeSet) -> Self {
        Self {
            added: after.difference(before),
            removed: before.difference(after),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
