//! # Domain
//!
//! Owned-volume bookkeeping for a manga library:
//!
//! - [`codec`]: free-form range text (`"1-10; 15"`) to [`OwnedVolumeSet`] and back
//! - [`model`]: the owned set, stored volume records and edit diffs
//! - [`shelf`]: owned / not-owned slots for display

#![allow(clippy::multiple_crate_versions)]

pub mod codec;
pub mod model;
pub mod shelf;

pub use codec::{ParseOptions, RangeToken, parse, parse_tokens, parse_with, serialize};
pub use model::{OwnedVolumeSet, VolumeDiff, VolumeRecord};
pub use shelf::{Shelf, ShelfSlot};
