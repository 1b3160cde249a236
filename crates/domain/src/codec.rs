// crates/domain/src/codec.rs
//! Conversion between human-entered range text and [`OwnedVolumeSet`].
//!
//! Parsing is best-effort: fragments that cannot be read are dropped (and
//! logged at `debug`), never reported as errors.
//!
//! [`OwnedVolumeSet`]: crate::model::OwnedVolumeSet

pub mod options;
pub mod parse;
pub mod serialize;
pub mod token;

pub use options::ParseOptions;
pub use parse::{fragments, parse, parse_tokens, parse_with};
pub use serialize::{SEPARATOR, serialize};
pub use token::{FragmentRejection, RangeToken};
