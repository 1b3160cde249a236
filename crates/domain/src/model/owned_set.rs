// crates/domain/src/model/owned_set.rs
use std::{collections::BTreeSet, convert::Infallible, fmt, str::FromStr};

use manga_volumes_shared_kernel::{MangaId, VolumeNumber};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::VolumeRecord;
use crate::codec::{self, RangeToken};

/// The volumes a user owns for one manga. Iterates in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnedVolumeSet(BTreeSet<VolumeNumber>);

impl OwnedVolumeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw integers, discarding `0`.
    pub fn from_numbers<I>(numbers: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        numbers.into_iter().filter_map(VolumeNumber::new).collect()
    }

    /// Seeds a set from stored records.
    ///
    /// Each record's volume number goes through [`VolumeNumber::coerce`];
    /// records whose number does not coerce are skipped.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a VolumeRecord>,
    {
        records
            .into_iter()
            .filter_map(|record| {
                let coerced = record.volume();
                if coerced.is_none() {
                    debug!(
                        record_id = record.id.value(),
                        volume_number = record.volume_number.as_str(),
                        "skipping volume record with unusable number"
                    );
                }
                coerced
            })
            .collect()
    }

    /// One fresh record per owned volume, ascending, ready to replace what
    /// the repository holds for `manga_id`.
    pub fn to_records(&self, manga_id: MangaId) -> Vec<VolumeRecord> {
        self.iter().map(|number| VolumeRecord::owned(manga_id, number)).collect()
    }

    /// Returns `true` if the volume was not already owned.
    pub fn insert(&mut self, number: VolumeNumber) -> bool {
        self.0.insert(number)
    }

    pub fn remove(&mut self, number: VolumeNumber) -> bool {
        self.0.remove(&number)
    }

    pub fn contains(&self, number: VolumeNumber) -> bool {
        self.0.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = VolumeNumber> + '_ {
        self.0.iter().copied()
    }

    pub fn first(&self) -> Option<VolumeNumber> {
        self.0.first().copied()
    }

    /// Highest owned volume.
    pub fn last(&self) -> Option<VolumeNumber> {
        self.0.last().copied()
    }

    pub fn numbers(&self) -> Vec<u32> {
        self.iter().map(VolumeNumber::get).collect()
    }

    pub fn difference(&self, other: &Self) -> Self {
        self.0.difference(&other.0).copied().collect()
    }

    /// Maximal runs of consecutive volumes, ascending. Runs of one volume are
    /// [`RangeToken::Single`].
    pub fn runs(&self) -> Vec<RangeToken> {
        let mut runs = Vec::new();
        let mut volumes = self.iter();
        let Some(first) = volumes.next() else {
            return runs;
        };

        let (mut start, mut prev) = (first, first);
        for current in volumes {
            if prev.next() == Some(current) {
                prev = current;
                continue;
            }
            runs.push(run_token(start, prev));
            start = current;
            prev = current;
        }
        runs.push(run_token(start, prev));
        runs
    }
}

fn run_token(start: VolumeNumber, end: VolumeNumber) -> RangeToken {
    if start == end {
        RangeToken::Single(start.get())
    } else {
        RangeToken::Span { start: start.get(), end: end.get() }
    }
}

impl FromIterator<VolumeNumber> for OwnedVolumeSet {
    fn from_iter<I: IntoIterator<Item = VolumeNumber>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<VolumeNumber> for OwnedVolumeSet {
    fn extend<I: IntoIterator<Item = VolumeNumber>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a OwnedVolumeSet {
    type Item = VolumeNumber;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, VolumeNumber>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

/// Renders the canonical range string.
impl fmt::Display for OwnedVolumeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::serialize(self))
    }
}

/// Best-effort parse with default options; never fails.
impl FromStr for OwnedVolumeSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(codec::parse(s))
    }
}
