//! Built-in default catalog.
//!
//! One embedded TOML document per section. The catalog is always complete:
//! every `SectionId` has a section, and it defines rule order for
//! reconciliation.

mod builtin;

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::{FilterForgeError, Result};
use crate::model::{Rule, Section, SectionId};

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    sections: IndexMap<SectionId, Section>,
}

impl Catalog {
    /// Parse the embedded catalog.
    ///
    /// # Errors
    /// Returns an error if a section document fails to parse, declares the
    /// wrong id, or repeats a rule id.
    pub fn builtin() -> Result<Self> {
        let sections = SectionId::ALL
            .into_iter()
            .map(|id| {
                let section = toml::from_str::<Section>(builtin::source(id))
                    .map_err(|source| FilterForgeError::Catalog { section: id, source })?;
                if section.id != id {
                    return Err(FilterForgeError::Config(format!(
                        "Catalog document for '{id}' declares section '{}'",
                        section.id
                    )));
                }
                Ok(section)
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_sections(sections)
    }

    /// Build a catalog from explicit sections. Sections not supplied are
    /// present but empty.
    ///
    /// # Errors
    /// Returns an error if a section repeats a rule id.
    pub fn from_sections(sections: impl IntoIterator<Item = Section>) -> Result<Self> {
        let mut by_id: IndexMap<SectionId, Section> = SectionId::ALL
            .into_iter()
            .map(|id| (id, Section::new(id)))
            .collect();
        for section in sections {
            validate_rule_ids(&section)?;
            by_id.insert(section.id, section);
        }
        Ok(Self { sections: by_id })
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> &Section {
        // from_sections seeds every id
        &self.sections[&id]
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    #[must_use]
    pub fn rule(&self, section: SectionId, rule: &str) -> Option<&Rule> {
        self.section(section).rule(rule)
    }
}

fn validate_rule_ids(section: &Section) -> Result<()> {
    let mut seen = HashSet::new();
    for rule in &section.rules {
        if !seen.insert(rule.id.as_str()) {
            return Err(FilterForgeError::Config(format!(
                "Duplicate rule id '{}' in section '{}'",
                rule.id, section.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
