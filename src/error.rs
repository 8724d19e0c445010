use std::path::PathBuf;

use thiserror::Error;

use crate::model::{SectionId, Tier};

#[derive(Error, Debug)]
pub enum FilterForgeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse built-in catalog section '{section}'")]
    Catalog {
        section: SectionId,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown rule '{rule}' in section '{section}'")]
    UnknownRule { section: SectionId, rule: String },

    #[error("Item '{item}' is not in the tier list of section '{section}'")]
    UnknownItem { section: SectionId, item: String },

    #[error("Section '{section}' has no tier {tier} item list")]
    NoTierList { section: SectionId, tier: Tier },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store error for key '{key}'")]
    Store {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl FilterForgeError {
    /// Short variant name used as the error heading on stderr.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::Catalog { .. } => "Catalog",
            Self::UnknownRule { .. } => "UnknownRule",
            Self::UnknownItem { .. } => "UnknownItem",
            Self::NoTierList { .. } => "NoTierList",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::Store { .. } => "Store",
            Self::Clipboard(_) => "Clipboard",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Actionable hint for the user, if there is one.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownRule { .. } => {
                Some("Run `filter-forge show <section>` to list rule ids")
            }
            Self::UnknownItem { .. } | Self::NoTierList { .. } => {
                Some("Run `filter-forge show <section>` to list tiers and their items")
            }
            Self::TomlParse(_) => Some("Check the configuration file for TOML syntax errors"),
            Self::Store { .. } => Some("Check that the store directory is writable or pass --store"),
            Self::Clipboard(_) => Some("Export to a file with --output instead"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterForgeError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
