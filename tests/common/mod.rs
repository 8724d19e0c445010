#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the filter-forge binary.
#[macro_export]
macro_rules! filter_forge {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("filter-forge"))
    };
}

/// Temp working directory with its own snapshot store.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn store_dir(&self) -> PathBuf {
        self.dir.path().join("store")
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Writes `.filter-forge.toml` into the working directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".filter-forge.toml", content);
    }

    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Command running in the fixture directory against the fixture store.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = filter_forge!();
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .env("XDG_CONFIG_HOME", self.path().join("xdg"))
            .arg("--store")
            .arg(self.store_dir());
        cmd
    }

    /// Runs `export --stdout` and returns the filter text.
    pub fn export(&self) -> String {
        let output = self
            .command()
            .args(["export", "--stdout"])
            .output()
            .expect("Failed to run export");
        assert!(output.status.success(), "export failed: {output:?}");
        String::from_utf8(output.stdout).expect("export output is not UTF-8")
    }
}
