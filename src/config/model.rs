use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{FilterForgeError, Result};
use crate::model::{Platform, SectionId, SectionOverride};
use crate::session::PersistMode;
use crate::store::DirStore;

/// Application settings read from `.filter-forge.toml`.
///
/// Every key is optional; CLI flags override file values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Target client platform (`pc` or `console`).
    pub platform: Platform,

    /// Preset used by `reset` and named in the export header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Drop every sound line from exported filters.
    pub mute_sounds: bool,

    /// Snapshot store directory. Defaults to the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_dir: Option<PathBuf>,

    /// When edits reach the store.
    pub persist: PersistMode,

    /// Default export path for `export` when no sink is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Compile-time per-section adjustments, keyed by section id.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<SectionId, SectionOverride>,
}

impl AppConfig {
    /// Store directory: configured value, else the platform data directory.
    #[must_use]
    pub fn resolved_store_dir(&self) -> Option<PathBuf> {
        self.store_dir.clone().or_else(DirStore::default_root)
    }

    /// # Errors
    /// Returns an error if a value is out of range.
    pub fn validate(&self) -> Result<()> {
        if let Some(preset) = &self.preset
            && preset.trim().is_empty()
        {
            return Err(FilterForgeError::Config(
                "'preset' must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
