//! Common test setup utilities shared across integration tests.
#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// Write `contents` to a temporary `.env`-style file.
pub fn write_env_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp env file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp env file");
    file
}

/// Variable names no real shell environment sets, so tests never collide with the host.
pub fn unique_var(suffix: &str) -> String {
    format!("DEPLOYER_TEST_{}_{}", std::process::id(), suffix)
}
