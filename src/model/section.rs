use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::Rule;

/// Rule categories. Declaration order is the compiled precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Gold,
    Currency,
    Uniques,
    VaultKeys,
    Jewels,
    UncutGems,
    Charms,
    BaseItems,
    Others,
    Leveling,
    ClassSelection,
}

impl SectionId {
    /// Compiled precedence order. The target applies blocks top-down, so this
    /// never follows display order.
    pub const ALL: [Self; 11] = [
        Self::Gold,
        Self::Currency,
        Self::Uniques,
        Self::VaultKeys,
        Self::Jewels,
        Self::UncutGems,
        Self::Charms,
        Self::BaseItems,
        Self::Others,
        Self::Leveling,
        Self::ClassSelection,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Currency => "currency",
            Self::Uniques => "uniques",
            Self::VaultKeys => "vault-keys",
            Self::Jewels => "jewels",
            Self::UncutGems => "uncut-gems",
            Self::Charms => "charms",
            Self::BaseItems => "base-items",
            Self::Others => "others",
            Self::Leveling => "leveling",
            Self::ClassSelection => "class-selection",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|id| id.as_str()).collect();
                format!("Unknown section: '{s}'. Available sections: {}", names.join(", "))
            })
    }
}

/// Ranked tier label, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
    E,
}

impl Tier {
    /// Fixed total order, best to worst.
    pub const ORDER: [Self; 6] = [Self::S, Self::A, Self::B, Self::C, Self::D, Self::E];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ORDER
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown tier: '{s}'. Expected one of S, A, B, C, D, E"))
    }
}

/// A togglable category of ordered rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: SectionId,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_threshold: Option<Tier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_set: Option<IndexSet<String>>,
    /// User tier for individual items, keyed by item name. Takes priority
    /// over the tier of the rule that lists the item.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub item_tiers: IndexMap<String, Tier>,
}

impl Section {
    #[must_use]
    pub fn new(id: SectionId) -> Self {
        Self {
            id,
            enabled: true,
            rules: Vec::new(),
            tier_threshold: None,
            selection_set: None,
            item_tiers: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }
}

const fn default_true() -> bool {
    true
}
