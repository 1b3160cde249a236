// crates/shared-kernel/src/value_objects/ids.rs
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MangaId(u64);

impl MangaId {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for MangaId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for MangaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a stored volume record.
///
/// Freshly built records carry [`VolumeId::PLACEHOLDER`] until the
/// repository assigns a real id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolumeId(u64);

impl VolumeId {
    pub const PLACEHOLDER: Self = Self(0);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_placeholder(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for VolumeId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for VolumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
