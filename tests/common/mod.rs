//! Shared testing utilities for hope CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory with no API key and no config in scope.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `hope` binary inside the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("hope").expect("Failed to locate hope binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("GEMINI_API_KEY")
            .env_remove("API_KEY")
            .env_remove("HOPE_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `./hope.toml` in the work directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("hope.toml"), content).expect("Failed to write hope.toml");
    }

    /// Write a record into `./content/`.
    pub fn write_content(&self, name: &str, json: &str) {
        let dir = self.work_dir.join("content");
        fs::create_dir_all(&dir).expect("Failed to create content directory");
        fs::write(dir.join(name), json).expect("Failed to write content record");
    }

    /// Point the generation API at a local mock server.
    pub fn use_api_url(&self, url: &str) {
        self.write_config(&format!("[assistant]\napi_url = \"{}\"\ntimeout_secs = 5\n", url));
    }
}
