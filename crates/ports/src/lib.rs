//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`library`]: storage of manga entries and their volume records
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod library;
