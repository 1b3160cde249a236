// crates/domain/src/codec/token.rs
use std::fmt;

use manga_volumes_shared_kernel::VolumeNumber;
use thiserror::Error;

/// One parsed fragment of range text.
///
/// Bounds are kept exactly as typed; `0` is a legal bound even though it is
/// never an owned volume, and `start > end` is kept rather than swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeToken {
    Single(u32),
    /// Inclusive on both ends.
    Span { start: u32, end: u32 },
}

/// Why a fragment was dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentRejection {
    #[error("more than one '-' in fragment")]
    ExtraHyphen,

    #[error("'{part}' is not a base-10 integer")]
    NotANumber { part: String },
}

impl RangeToken {
    /// Reads a single trimmed, non-empty fragment.
    ///
    /// A fragment with a hyphen is split on it into `start` and `end`; both
    /// halves must be plain integers. Fragments with more than one hyphen are
    /// rejected whole, which also rejects negative numbers (`"-5"` has an
    /// empty start).
    pub fn from_fragment(fragment: &str) -> Result<Self, FragmentRejection> {
        match fragment.split_once('-') {
            Some((_, rest)) if rest.contains('-') => Err(FragmentRejection::ExtraHyphen),
            Some((start, end)) => Ok(Self::Span {
                start: parse_bound(start)?,
                end: parse_bound(end)?,
            }),
            None => parse_bound(fragment).map(Self::Single),
        }
    }

    /// Inclusive `(start, end)` as typed.
    #[inline]
    pub const fn bounds(self) -> (u32, u32) {
        match self {
            Self::Single(n) => (n, n),
            Self::Span { start, end } => (start, end),
        }
    }

    /// Number of volumes the token expands to. A `0` bound adds nothing and
    /// an inverted span is `0`.
    pub fn span_len(self) -> u64 {
        let (start, end) = self.bounds();
        let start = start.max(1);
        if start > end {
            0
        } else {
            u64::from(end) - u64::from(start) + 1
        }
    }

    #[inline]
    pub fn is_inverted(self) -> bool {
        let (start, end) = self.bounds();
        start > end
    }

    /// The owned volumes this token contributes, ascending. Volume `0` is skipped.
    pub fn volumes(self) -> impl Iterator<Item = VolumeNumber> {
        let (start, end) = self.bounds();
        (start..=end).filter_map(VolumeNumber::new)
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(n) => write!(f, "{n}"),
            Self::Span { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

fn parse_bound(part: &str) -> Result<u32, FragmentRejection> {
    let part = part.trim();
    part.parse::<u32>().map_err(|_| FragmentRejection::NotANumber { part: part.to_string() })
}
