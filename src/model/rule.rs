use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Condition, StyleSpec, Tier};

/// Whether items matched by a rule are shown or hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    #[default]
    Show,
    Hide,
}

impl Disposition {
    /// Block keyword in the target rule format.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Show => "Show",
            Self::Hide => "Hide",
        }
    }
}

/// One show/hide block: conditions plus a style payload.
///
/// `id` is the merge key across catalog, stored snapshot and preset; `name`
/// and `code` always come from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub disposition: Disposition,
    #[serde(default)]
    pub conditions: IndexMap<String, Condition>,
    #[serde(default)]
    pub styles: StyleSpec,
}

impl Rule {
    #[must_use]
    pub fn new(id: impl Into<String>, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            title: None,
            tier: None,
            enabled: true,
            disposition: Disposition::Show,
            conditions: IndexMap::new(),
            styles: StyleSpec::default(),
        }
    }

    #[must_use]
    pub fn with_condition(mut self, key: impl Into<String>, condition: Condition) -> Self {
        self.conditions.insert(key.into(), condition);
        self
    }

    #[must_use]
    pub fn with_styles(mut self, styles: StyleSpec) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub const fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Comment label: user title when set, catalog name otherwise.
    #[must_use]
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

const fn default_true() -> bool {
    true
}
