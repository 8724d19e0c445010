//! Rule-file compiler.
//!
//! Turns a canonical [`FilterConfiguration`] into the text the game client
//! loads. Blocks are matched top-down by the client, so output order is
//! significant: sections follow [`SectionId::ALL`], rules follow section
//! order, and nothing here depends on map iteration order of the input.

mod block;

use std::fmt::Write;

use indexmap::IndexSet;

use crate::model::{FilterConfiguration, Rule, Section, SectionId, Tier};
use crate::reconcile::{apply_item_tiers, resolve_tier_inclusion};

pub use block::{
    DEFAULT_SOUND_VOLUME, MISSING_VALUE_FALLBACK, RANGE_MAX_FALLBACK, RANGE_MIN_FALLBACK,
    SOUND_DIRECTORY,
};

const GENERATOR: &str = concat!("filter-forge ", env!("CARGO_PKG_VERSION"));

/// Compile the configuration to rule-file text. Pure and deterministic.
#[must_use]
pub fn compile(config: &FilterConfiguration) -> String {
    let mut out = String::new();
    write_header(&mut out, config);

    for id in SectionId::ALL {
        let Some(section) = config.section(id) else {
            continue;
        };
        if !config.section_enabled(section) {
            continue;
        }
        let section = apply_item_tiers(section);
        let rules = emitted_rules(&section, config.tier_threshold(&section));
        if rules.is_empty() {
            continue;
        }

        write_banner(&mut out, id);
        for rule in rules {
            block::write_block(&mut out, rule, config);
        }
    }
    out
}

/// Rules of a section that survive the enabled, tier and selection filters,
/// in section order. Item tier overrides must already be applied.
#[must_use]
pub fn emitted_rules(section: &Section, threshold: Option<Tier>) -> Vec<&Rule> {
    let included: Option<IndexSet<Tier>> =
        threshold.map(|t| resolve_tier_inclusion(t, &Tier::ORDER));
    let selection = section.selection_set.as_ref().filter(|s| !s.is_empty());

    section
        .rules
        .iter()
        .filter(|rule| rule.enabled)
        .filter(|rule| match (&included, rule.tier) {
            (Some(included), Some(tier)) => included.contains(&tier),
            _ => true,
        })
        .filter(|rule| selection.is_none_or(|codes| codes.contains(&rule.code)))
        .collect()
}

fn write_header(out: &mut String, config: &FilterConfiguration) {
    writeln!(out, "# Generated by {GENERATOR}").ok();
    writeln!(
        out,
        "# Preset: {}",
        config.preset_id.as_deref().unwrap_or("custom")
    )
    .ok();
    writeln!(out, "# Platform: {}", config.platform).ok();
    writeln!(out).ok();
}

fn write_banner(out: &mut String, id: SectionId) {
    let bar = "#".repeat(60);
    writeln!(out, "{bar}").ok();
    writeln!(out, "# Section: {id}").ok();
    writeln!(out, "{bar}").ok();
    writeln!(out).ok();
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
