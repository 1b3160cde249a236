//! Command-line tests run against the built binary.

#[path = "common/mod.rs"]
mod common;

#[path = "cli/library_tests.rs"]
mod library_tests;
#[path = "cli/smoke_tests.rs"]
mod smoke_tests;
