//! Test support utilities for inferadb-provider integration tests.
//!
//! Provides an isolated working directory for CLI runs and helpers for
//! standing up a mock Control API.

#![allow(dead_code)]

pub mod api;
pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use api::*;
#[allow(unused_imports)]
pub use assertions::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes run with `.current_dir()` set to it and with every
/// `INFERADB_*` variable cleared, so tests can run in parallel.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Write a JSON document into the test dir and return its path.
    pub fn write_json(&self, name: &str, value: &serde_json::Value) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap())
            .expect("failed to write document");
        path
    }

    /// Write an arbitrary file into the test dir and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write file");
        path
    }
}
