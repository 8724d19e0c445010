//! Persisted shape of a section.
//!
//! Every field is optional: a snapshot written by an older catalog may be
//! missing fields or whole rules, and those gaps inherit the catalog.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::{Condition, Disposition, Rule, Section, StyleSpec, Tier};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSnapshot {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposition: Option<Disposition>,
    /// Replaces the catalog conditions wholesale when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<IndexMap<String, Condition>>,
    #[serde(default)]
    pub styles: StyleSpec,
}

impl RuleSnapshot {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl From<&Rule> for RuleSnapshot {
    fn from(rule: &Rule) -> Self {
        Self {
            id: rule.id.clone(),
            enabled: Some(rule.enabled),
            disposition: Some(rule.disposition),
            conditions: Some(rule.conditions.clone()),
            styles: rule.styles.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub rules: Vec<RuleSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_threshold: Option<Tier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_set: Option<IndexSet<String>>,
    /// Replaces the lower layer's item tiers wholesale when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_tiers: Option<IndexMap<String, Tier>>,
}

impl SectionSnapshot {
    #[must_use]
    pub fn rule(&self, id: &str) -> Option<&RuleSnapshot> {
        self.rules.iter().find(|r| r.id == id)
    }
}

impl From<&Section> for SectionSnapshot {
    fn from(section: &Section) -> Self {
        Self {
            enabled: Some(section.enabled),
            rules: section.rules.iter().map(RuleSnapshot::from).collect(),
            tier_threshold: section.tier_threshold,
            selection_set: section.selection_set.clone(),
            item_tiers: Some(section.item_tiers.clone()),
        }
    }
}
