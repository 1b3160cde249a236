// crates/domain/src/codec/serialize.rs
use crate::model::OwnedVolumeSet;

/// Joins tokens in the canonical range string.
pub const SEPARATOR: &str = "; ";

/// Canonical range string for `owned`: ascending, consecutive volumes merged
/// into `start-end`, lone volumes bare, joined with `"; "`.
///
/// `parse(&serialize(s)) == s` for every set; the reverse does not hold.
pub fn serialize(owned: &OwnedVolumeSet) -> String {
    owned
        .runs()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
