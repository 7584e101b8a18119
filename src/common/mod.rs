//! Shared utilities across ringboot modules.

pub mod files;

pub use files::{read_file, write_file_with_dirs};
