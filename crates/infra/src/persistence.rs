// crates/infra/src/persistence.rs
pub mod file_reader;
pub mod file_writer;
pub mod json_library;

pub use file_reader::FileReader;
pub use file_writer::FileWriter;
pub use json_library::JsonLibrary;
