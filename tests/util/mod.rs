// Not every test binary uses every helper.
#![allow(dead_code)]

use std::io::Result;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

pub const FILE_NAME: &str = "firstFile.cdf";

pub fn scratch_directory() -> TempDir {
    TempDir::new().expect("Unable to create temporary directory")
}

/// Runs the open/close driver inside `working_directory`.
pub fn execute_driver<P: AsRef<Path>>(working_directory: P) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_ncfile-open-close"))
        .current_dir(working_directory)
        .env("RUST_LOG", "debug")
        .output()
}
