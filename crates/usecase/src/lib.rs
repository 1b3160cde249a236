//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the library port:
//!
//! - [`volumes`]: seeding, previewing and saving a manga's owned volumes
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod volumes;

pub use dto::{LibrarySummary, SaveOutcome, VolumeOverview};
pub use volumes::ManageVolumes;
