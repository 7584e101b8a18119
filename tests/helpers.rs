//! Shared test utilities for ringboot tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test environment with a temporary working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Working directory for the binary and image paths
    pub base_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            base_dir,
        }
    }

    /// Path inside the temp directory.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.base_dir.join(rel)
    }

    /// Run the ringboot binary from the temp directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_ringboot"))
            .args(args)
            .current_dir(&self.base_dir)
            .output()
            .expect("Failed to run ringboot")
    }
}

/// Stdout of a finished process as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Overwrite one byte of an existing file.
pub fn patch_byte(path: &Path, offset: usize, value: u8) {
    let mut data = fs::read(path).expect("Failed to read image");
    data[offset] = value;
    fs::write(path, data).expect("Failed to write image");
}

/// Truncate an existing file to `len` bytes.
pub fn truncate(path: &Path, len: usize) {
    let mut data = fs::read(path).expect("Failed to read image");
    data.truncate(len);
    fs::write(path, data).expect("Failed to write image");
}

/// Assert that a file exists with the given size.
pub fn assert_file_size(path: &Path, expected: u64) {
    let meta = fs::metadata(path)
        .unwrap_or_else(|_| panic!("Expected file to exist: {}", path.display()));
    assert_eq!(
        meta.len(),
        expected,
        "File {} is {} bytes, expected {}",
        path.display(),
        meta.len(),
        expected
    );
}
