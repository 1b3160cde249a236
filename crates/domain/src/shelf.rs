// crates/domain/src/shelf.rs
use manga_volumes_shared_kernel::VolumeNumber;
use serde::Serialize;

use crate::model::OwnedVolumeSet;

/// One numbered position on a shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShelfSlot {
    pub number: VolumeNumber,
    pub owned: bool,
}

/// Volumes `1..=len` of a series, each marked owned or not.
///
/// `len` is the highest owned volume, or the series' known total if that is
/// larger. Shelves longer than [`Shelf::MAX_GRID_LEN`] are oversized: they
/// have no slots and no missing list, only their length and owned count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shelf {
    owned: OwnedVolumeSet,
    len: u32,
}

impl Shelf {
    /// Longest shelf that is laid out slot by slot.
    pub const MAX_GRID_LEN: u32 = 10_000;

    pub fn new(owned: &OwnedVolumeSet, total_volumes: Option<u32>) -> Self {
        let highest = owned.last().map_or(0, VolumeNumber::get);
        Self {
            owned: owned.clone(),
            len: highest.max(total_volumes.unwrap_or(0)),
        }
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn owned_count(&self) -> usize {
        self.owned.len()
    }

    pub fn is_oversized(&self) -> bool {
        self.len > Self::MAX_GRID_LEN
    }

    /// Every slot in order; nothing for an oversized shelf.
    pub fn slots(&self) -> impl Iterator<Item = ShelfSlot> + '_ {
        let end = if self.is_oversized() { 0 } else { self.len };
        (1..=end)
            .filter_map(VolumeNumber::new)
            .map(|number| ShelfSlot { number, owned: self.owned.contains(number) })
    }

    /// Volumes on the shelf the user does not own, or `None` when the shelf
    /// is oversized.
    pub fn missing(&self) -> Option<OwnedVolumeSet> {
        if self.is_oversized() {
            return None;
        }
        Some(self.slots().filter(|slot| !slot.owned).map(|slot| slot.number).collect())
    }
}
