//! The single mutation path for filter state.
//!
//! A [`Session`] owns the canonical sections. Each section is loaded and
//! reconciled on first use; every committed update is reduced into a new
//! section value and persisted, either inline or on [`Session::flush`].

mod update;

pub use update::{RuleUpdate, SectionUpdate, StyleUpdate, apply};

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::{
    FilterConfiguration, Platform, Section, SectionId, SectionOverride, SectionSnapshot,
};
use crate::reconcile::reconcile;
use crate::store::{SectionRepository, SnapshotStore};

/// When committed changes reach the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistMode {
    /// Save after every committed update.
    #[default]
    Immediate,
    /// Mark sections dirty; save on `flush()` or when the session drops.
    Deferred,
}

#[derive(Debug)]
pub struct Session<S: SnapshotStore> {
    catalog: Catalog,
    repository: SectionRepository<S>,
    persist: PersistMode,
    platform: Platform,
    preset_id: Option<String>,
    mute_sounds: bool,
    overrides: BTreeMap<SectionId, SectionOverride>,
    sections: IndexMap<SectionId, Section>,
    dirty: BTreeSet<SectionId>,
}

impl<S: SnapshotStore> Session<S> {
    pub fn new(catalog: Catalog, store: S) -> Self {
        Self {
            catalog,
            repository: SectionRepository::new(store),
            persist: PersistMode::default(),
            platform: Platform::default(),
            preset_id: None,
            mute_sounds: false,
            overrides: BTreeMap::new(),
            sections: IndexMap::new(),
            dirty: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_persist_mode(mut self, mode: PersistMode) -> Self {
        self.persist = mode;
        self
    }

    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub fn with_preset(mut self, preset_id: Option<String>) -> Self {
        self.preset_id = preset_id;
        self
    }

    #[must_use]
    pub fn with_mute_sounds(mut self, mute: bool) -> Self {
        self.mute_sounds = mute;
        self
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: BTreeMap<SectionId, SectionOverride>) -> Self {
        self.overrides = overrides;
        self
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Adopt the preset recorded by the last preset reset, if there is one.
    /// It takes priority over the preset passed to [`Session::with_preset`].
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn restore_active_preset(&mut self) -> Result<()> {
        if let Some(name) = self.repository.load_active_preset()? {
            debug!(preset = %name, "active preset restored");
            self.preset_id = Some(name);
        }
        Ok(())
    }

    pub fn preset_id(&self) -> Option<&str> {
        self.preset_id.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// The canonical section, loading and reconciling it on first use.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn section(&mut self, id: SectionId) -> Result<&Section> {
        if !self.sections.contains_key(&id) {
            let stored = self.repository.load_section(id)?;
            let section = reconcile(self.catalog.section(id), stored.as_ref(), None);
            debug!(section = %id, stored = stored.is_some(), "section loaded");
            self.sections.insert(id, section);
        }
        Ok(&self.sections[&id])
    }

    /// Apply one update to a section and persist the result.
    ///
    /// # Errors
    /// Returns an error if the update targets an unknown rule, or if the
    /// store cannot be read or written in immediate mode.
    pub fn dispatch(&mut self, id: SectionId, update: SectionUpdate) -> Result<&Section> {
        let current = self.section(id)?.clone();
        let next = apply(current, update)?;
        // Normalizes fields handed back to the catalog with `Inherit`.
        let next = reconcile(
            self.catalog.section(id),
            Some(&SectionSnapshot::from(&next)),
            None,
        );
        self.commit(next)
    }

    /// Reset a section to the named preset baseline, or to the catalog when
    /// no preset is given or the preset has no baseline for the section.
    /// A named preset is recorded as the active preset.
    ///
    /// # Errors
    /// Returns an error if the preset name is invalid or the store fails.
    pub fn reset(&mut self, id: SectionId, preset: Option<&str>) -> Result<&Section> {
        let baseline = match preset {
            Some(name) => {
                let baseline = self.repository.load_preset(name, id)?;
                if baseline.is_none() {
                    debug!(section = %id, preset = name, "no preset baseline, using catalog");
                }
                baseline
            }
            None => None,
        };
        let section = reconcile(self.catalog.section(id), None, baseline.as_ref());
        info!(section = %id, preset = preset.unwrap_or("catalog"), "section reset");
        if let Some(name) = preset {
            self.repository.save_active_preset(name)?;
            self.preset_id = Some(name.to_string());
        }
        self.commit(section)
    }

    /// Reset every section. See [`Session::reset`].
    ///
    /// # Errors
    /// Returns an error if any section fails to reset.
    pub fn reset_all(&mut self, preset: Option<&str>) -> Result<()> {
        for id in SectionId::ALL {
            self.reset(id, preset)?;
        }
        Ok(())
    }

    /// Store the current state of `sections` as the baseline of `preset`.
    ///
    /// # Errors
    /// Returns an error if the preset name is invalid or the store fails.
    pub fn save_preset(&mut self, preset: &str, sections: &[SectionId]) -> Result<()> {
        for &id in sections {
            self.section(id)?;
            self.repository.save_preset(preset, &self.sections[&id])?;
        }
        Ok(())
    }

    /// Canonical configuration with every section loaded.
    ///
    /// # Errors
    /// Returns an error if a section cannot be loaded.
    pub fn configuration(&mut self) -> Result<FilterConfiguration> {
        let mut config = FilterConfiguration::new(self.platform);
        config.preset_id.clone_from(&self.preset_id);
        config.mute_sounds = self.mute_sounds;
        config.overrides.clone_from(&self.overrides);
        for id in SectionId::ALL {
            config.insert_section(self.section(id)?.clone());
        }
        Ok(config)
    }

    /// Persist every dirty section.
    ///
    /// # Errors
    /// Returns the first store error. Sections not yet written stay dirty.
    pub fn flush(&mut self) -> Result<()> {
        while let Some(id) = self.dirty.first().copied() {
            self.repository.save_section(&self.sections[&id])?;
            self.dirty.remove(&id);
        }
        Ok(())
    }

    fn commit(&mut self, section: Section) -> Result<&Section> {
        let id = section.id;
        self.sections.insert(id, section);
        match self.persist {
            PersistMode::Immediate => self.repository.save_section(&self.sections[&id])?,
            PersistMode::Deferred => {
                self.dirty.insert(id);
            }
        }
        Ok(&self.sections[&id])
    }
}

impl<S: SnapshotStore> Drop for Session<S> {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            warn!(error = %e, "failed to persist pending changes");
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
