// crates/shared-kernel/src/value_objects/volume_number.rs
use std::{fmt, num::NonZeroU32, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A volume number the user can own. Always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolumeNumber(NonZeroU32);

impl VolumeNumber {
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Returns `None` for `0`.
    #[inline]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Lenient coercion of a stored volume-number string.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a base-10
    /// integer in `1..=u32::MAX` yields `None`, so callers can drop the
    /// record instead of failing.
    pub fn coerce(raw: &str) -> Option<Self> {
        raw.trim().parse::<u32>().ok().and_then(Self::new)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// The following volume, or `None` at `u32::MAX`.
    #[inline]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for VolumeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VolumeNumber {
    type Err = DomainError;

    /// Strict counterpart of [`VolumeNumber::coerce`] that reports why a value was rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed.parse::<u32>().map_err(|err| DomainError::InvalidVolumeNumber {
            value: s.to_string(),
            reason: err.to_string(),
        })?;
        Self::new(value).ok_or_else(|| DomainError::InvalidVolumeNumber {
            value: s.to_string(),
            reason: "volume numbers start at 1".to_string(),
        })
    }
}

impl From<VolumeNumber> for u32 {
    fn from(value: VolumeNumber) -> Self {
        value.get()
    }
}

impl TryFrom<u32> for VolumeNumber {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| DomainError::InvalidVolumeNumber {
            value: value.to_string(),
            reason: "volume numbers start at 1".to_string(),
        })
    }
}

impl PartialEq<u32> for VolumeNumber {
    fn eq(&self, other: &u32) -> bool {
        self.get() == *other
    }
}
