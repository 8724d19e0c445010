//! Section reconciliation: catalog defaults, preset baseline and stored
//! snapshot layered into one canonical section.
//!
//! Layering order (lowest first):
//! 1. Catalog section (always complete, defines rule order)
//! 2. Preset baseline (only on an explicit reset to a named preset)
//! 3. Stored snapshot (the user's persisted edits)
//!
//! Per-rule policy:
//! - `name`, `title` and `code` always come from the catalog
//! - scalar fields: defined value wins, absent inherits
//! - styles: field-by-field, `Disabled` wins over a default value
//! - `conditions`: replaced wholesale, so a deleted key stays deleted
//!
//! Per-item tier overrides are replaced wholesale like conditions. They are
//! applied to rule item lists only at compile time, see [`apply_item_tiers`].

mod item_tier;
mod tier;

pub use item_tier::{ITEM_LIST_KEY, apply_item_tiers, listed_tier};
pub use tier::{resolve_tier_inclusion, tier_rank};

use tracing::debug;

use crate::model::{Rule, RuleSnapshot, Section, SectionSnapshot};

/// Reconcile one section.
///
/// Stored rules whose id is not in the catalog are dropped; catalog rules
/// missing from the snapshot keep their default values. The result has
/// exactly the catalog's rules, in catalog order.
#[must_use]
pub fn reconcile(
    defaults: &Section,
    stored: Option<&SectionSnapshot>,
    preset: Option<&SectionSnapshot>,
) -> Section {
    let mut section = defaults.clone();
    for layer in [preset, stored].into_iter().flatten() {
        section = overlay_section(&section, layer);
    }
    section
}

fn overlay_section(base: &Section, layer: &SectionSnapshot) -> Section {
    for stored in &layer.rules {
        if base.rule(&stored.id).is_none() {
            debug!(
                section = %base.id,
                rule = %stored.id,
                "dropping stored rule not present in catalog"
            );
        }
    }

    let rules = base
        .rules
        .iter()
        .map(|rule| {
            layer
                .rule(&rule.id)
                .map_or_else(|| rule.clone(), |stored| overlay_rule(rule, stored))
        })
        .collect();

    Section {
        id: base.id,
        enabled: layer.enabled.unwrap_or(base.enabled),
        rules,
        tier_threshold: layer.tier_threshold.or(base.tier_threshold),
        selection_set: layer
            .selection_set
            .clone()
            .or_else(|| base.selection_set.clone()),
        item_tiers: layer
            .item_tiers
            .clone()
            .unwrap_or_else(|| base.item_tiers.clone()),
    }
}

fn overlay_rule(base: &Rule, layer: &RuleSnapshot) -> Rule {
    Rule {
        id: base.id.clone(),
        code: base.code.clone(),
        name: base.name.clone(),
        title: base.title.clone(),
        tier: base.tier,
        enabled: layer.enabled.unwrap_or(base.enabled),
        disposition: layer.disposition.unwrap_or(base.disposition),
        conditions: layer
            .conditions
            .clone()
            .unwrap_or_else(|| base.conditions.clone()),
        styles: layer.styles.over(&base.styles),
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
