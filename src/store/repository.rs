use tracing::{info, warn};

use super::SnapshotStore;
use crate::error::{FilterForgeError, Result};
use crate::model::{Section, SectionId, SectionSnapshot};

/// Store key of a section's persisted snapshot.
#[must_use]
pub fn section_key(id: SectionId) -> String {
    format!("section.{id}")
}

/// Store key of a preset baseline for one section.
#[must_use]
pub fn preset_key(preset: &str, id: SectionId) -> String {
    format!("preset.{preset}.{id}")
}

/// Store key recording the preset applied by the last preset reset.
pub const ACTIVE_PRESET_KEY: &str = "meta.active-preset";

/// Typed section/preset persistence over a [`SnapshotStore`].
///
/// Values that fail to parse are treated as absent: a corrupt snapshot
/// falls back to the catalog instead of failing the caller.
#[derive(Debug)]
pub struct SectionRepository<S: SnapshotStore> {
    store: S,
}

impl<S: SnapshotStore> SectionRepository<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// # Errors
    /// Returns an error only if the store itself cannot be read.
    pub fn load_section(&self, id: SectionId) -> Result<Option<SectionSnapshot>> {
        self.load_snapshot(&section_key(id))
    }

    /// # Errors
    /// Returns an error if the snapshot cannot be serialized or written.
    pub fn save_section(&self, section: &Section) -> Result<()> {
        self.save_snapshot(&section_key(section.id), section)
    }

    /// # Errors
    /// Returns an error if the store cannot be modified.
    pub fn remove_section(&self, id: SectionId) -> Result<()> {
        self.store.remove(&section_key(id))
    }

    /// # Errors
    /// Returns an error if the preset name is invalid or the store cannot be read.
    pub fn load_preset(&self, preset: &str, id: SectionId) -> Result<Option<SectionSnapshot>> {
        validate_preset_name(preset)?;
        self.load_snapshot(&preset_key(preset, id))
    }

    /// # Errors
    /// Returns an error if the preset name is invalid or the snapshot cannot be written.
    pub fn save_preset(&self, preset: &str, section: &Section) -> Result<()> {
        validate_preset_name(preset)?;
        self.save_snapshot(&preset_key(preset, section.id), section)?;
        info!(preset, section = %section.id, "preset baseline saved");
        Ok(())
    }

    /// Name of the preset applied by the last preset reset. An invalid
    /// record is ignored.
    ///
    /// # Errors
    /// Returns an error only if the store itself cannot be read.
    pub fn load_active_preset(&self) -> Result<Option<String>> {
        let Some(raw) = self.store.load(ACTIVE_PRESET_KEY)? else {
            return Ok(None);
        };
        let name = raw.trim();
        match validate_preset_name(name) {
            Ok(()) => Ok(Some(name.to_string())),
            Err(e) => {
                warn!(key = ACTIVE_PRESET_KEY, error = %e, "ignoring active preset record");
                Ok(None)
            }
        }
    }

    /// # Errors
    /// Returns an error if the preset name is invalid or the store cannot be written.
    pub fn save_active_preset(&self, preset: &str) -> Result<()> {
        validate_preset_name(preset)?;
        self.store.save(ACTIVE_PRESET_KEY, preset)
    }

    fn load_snapshot(&self, key: &str) -> Result<Option<SectionSnapshot>> {
        let Some(raw) = self.store.load(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                warn!(key, error = %e, "ignoring unreadable snapshot, using defaults");
                Ok(None)
            }
        }
    }

    fn save_snapshot(&self, key: &str, section: &Section) -> Result<()> {
        let json = serde_json::to_string_pretty(&SectionSnapshot::from(section))?;
        self.store.save(key, &json)
    }
}

fn validate_preset_name(preset: &str) -> Result<()> {
    let valid = !preset.is_empty()
        && preset
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'));
    if valid {
        Ok(())
    } else {
        Err(FilterForgeError::Config(format!(
            "Invalid preset name: '{preset}'. Use letters, digits, '-' or '_'"
        )))
    }
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
