use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::SnapshotStore;
use crate::error::{FilterForgeError, Result};

const FILE_EXTENSION: &str = "json";

/// Directory-backed store: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default store location in the platform data directory.
    #[must_use]
    pub fn default_root() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "filter-forge")
            .map(|dirs| dirs.data_dir().join("snapshots"))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
            || key.starts_with('.')
        {
            return Err(FilterForgeError::Config(format!(
                "Invalid store key: '{key}'"
            )));
        }
        Ok(self.root.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

impl SnapshotStore for DirStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(content) => Ok(Some(content)),
                Err(e) => {
                    warn!(key, error = %e, "ignoring non UTF-8 snapshot, using defaults");
                    Ok(None)
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(FilterForgeError::Store {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Atomic write: temp file in the same directory, then rename.
    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        atomic_write(&path, value.as_bytes()).map_err(|source| FilterForgeError::Store {
            key: key.to_string(),
            source,
        })?;
        debug!(key, path = %path.display(), "snapshot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(FilterForgeError::Store {
                key: key.to_string(),
                source,
            }),
        }
    }
}

fn atomic_write(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension(format!("{FILE_EXTENSION}.tmp"));
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path).inspect_err(|_| {
        let _ = fs::remove_file(&tmp);
    })
}

#[cfg(test)]
#[path = "dir_tests.rs"]
mod tests;
