use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Section, SectionId, Tier};

/// Target client platform. Decides which sound schema is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Custom sound files (`CustomAlertSound`).
    #[default]
    Pc,
    /// Built-in sound slots only (`PlayAlertSound`).
    Console,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pc => f.write_str("pc"),
            Self::Console => f.write_str("console"),
        }
    }
}

/// Compile-time adjustment of one section, applied without touching the
/// section itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(
        default,
        alias = "tier_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub tier_threshold: Option<Tier>,
}

/// All sections plus the global parameters the compiler needs.
///
/// `sections` is kept in display order; the compiler never relies on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfiguration {
    #[serde(default)]
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_id: Option<String>,
    #[serde(default)]
    pub mute_sounds: bool,
    #[serde(default)]
    pub sections: IndexMap<SectionId, Section>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<SectionId, SectionOverride>,
}

impl FilterConfiguration {
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    pub fn insert_section(&mut self, section: Section) {
        self.sections.insert(section.id, section);
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(&id)
    }

    /// Section enablement after per-section overrides.
    #[must_use]
    pub fn section_enabled(&self, section: &Section) -> bool {
        self.overrides
            .get(&section.id)
            .and_then(|o| o.enabled)
            .unwrap_or(section.enabled)
    }

    /// Tier threshold after per-section overrides.
    #[must_use]
    pub fn tier_threshold(&self, section: &Section) -> Option<Tier> {
        self.overrides
            .get(&section.id)
            .and_then(|o| o.tier_threshold)
            .or(section.tier_threshold)
    }
}
