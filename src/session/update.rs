//! Typed partial updates and the section reducer.

use indexmap::IndexSet;

use crate::error::{FilterForgeError, Result};
use crate::model::{
    Color, Condition, Disposition, MinimapIcon, Palette, Rule, Section, Sound, StyleField, Tier,
};
use crate::reconcile::{ITEM_LIST_KEY, listed_tier};

/// A change to one section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionUpdate {
    SetEnabled(bool),
    SetTierThreshold(Option<Tier>),
    /// `None` or an empty set admits every rule code.
    SetSelection(Option<IndexSet<String>>),
    /// Add the code to the selection set, or remove it if present.
    ToggleSelection(String),
    /// Move an item to another tier; `None` drops the override.
    SetItemTier { item: String, tier: Option<Tier> },
    Rule { id: String, update: RuleUpdate },
}

impl SectionUpdate {
    #[must_use]
    pub fn rule(id: impl Into<String>, update: RuleUpdate) -> Self {
        Self::Rule {
            id: id.into(),
            update,
        }
    }
}

/// A change to one rule.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleUpdate {
    SetEnabled(bool),
    Toggle,
    SetDisposition(Disposition),
    SetCondition { key: String, condition: Condition },
    RemoveCondition(String),
    Style(StyleUpdate),
}

/// A change to one style field. `StyleField::Disabled` switches the effect
/// off, `StyleField::Inherit` hands it back to the catalog value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleUpdate {
    FontSize(StyleField<u32>),
    TextColor(StyleField<Color>),
    BorderColor(StyleField<Color>),
    BackgroundColor(StyleField<Color>),
    PlayEffect(StyleField<Palette>),
    MinimapIcon(StyleField<MinimapIcon>),
    Sound(StyleField<Sound>),
}

/// Apply one update to a section, producing the next section value.
///
/// Switching a rule on also enables its section. Other rule edits leave
/// the section flag alone.
///
/// # Errors
/// Returns [`FilterForgeError::UnknownRule`] if the update targets a rule id
/// the section does not contain. Moving an item fails with
/// [`FilterForgeError::UnknownItem`] or [`FilterForgeError::NoTierList`] when
/// the item or the target tier is not in the section's tier lists.
pub fn apply(mut section: Section, update: SectionUpdate) -> Result<Section> {
    match update {
        SectionUpdate::SetEnabled(enabled) => section.enabled = enabled,
        SectionUpdate::SetTierThreshold(tier) => section.tier_threshold = tier,
        SectionUpdate::SetSelection(selection) => {
            section.selection_set = selection.filter(|set| !set.is_empty());
        }
        SectionUpdate::ToggleSelection(code) => {
            let mut selection = section.selection_set.take().unwrap_or_default();
            if !selection.shift_remove(&code) {
                selection.insert(code);
            }
            section.selection_set = Some(selection).filter(|set| !set.is_empty());
        }
        SectionUpdate::SetItemTier { item, tier: None } => {
            section.item_tiers.shift_remove(&item);
        }
        SectionUpdate::SetItemTier {
            item,
            tier: Some(tier),
        } => set_item_tier(&mut section, item, tier)?,
        SectionUpdate::Rule { id, update } => {
            let Some(rule) = section.rules.iter_mut().find(|r| r.id == id) else {
                return Err(FilterForgeError::UnknownRule {
                    section: section.id,
                    rule: id,
                });
            };
            let toggles = matches!(update, RuleUpdate::SetEnabled(_) | RuleUpdate::Toggle);
            apply_rule(rule, update);
            if toggles && rule.enabled {
                section.enabled = true;
            }
        }
    }
    Ok(section)
}

fn set_item_tier(section: &mut Section, item: String, tier: Tier) -> Result<()> {
    let Some(listed) = listed_tier(section, &item) else {
        return Err(FilterForgeError::UnknownItem {
            section: section.id,
            item,
        });
    };
    let has_list = section.rules.iter().any(|rule| {
        rule.tier == Some(tier)
            && matches!(rule.conditions.get(ITEM_LIST_KEY), Some(Condition::List(_)))
    });
    if !has_list {
        return Err(FilterForgeError::NoTierList {
            section: section.id,
            tier,
        });
    }

    if listed == tier {
        section.item_tiers.shift_remove(&item);
    } else {
        section.item_tiers.insert(item, tier);
    }
    Ok(())
}

fn apply_rule(rule: &mut Rule, update: RuleUpdate) {
    match update {
        RuleUpdate::SetEnabled(enabled) => rule.enabled = enabled,
        RuleUpdate::Toggle => rule.enabled = !rule.enabled,
        RuleUpdate::SetDisposition(disposition) => rule.disposition = disposition,
        RuleUpdate::SetCondition { key, condition } => {
            rule.conditions.insert(key, condition);
        }
        RuleUpdate::RemoveCondition(key) => {
            rule.conditions.shift_remove(&key);
        }
        RuleUpdate::Style(style) => apply_style(rule, style),
    }
}

fn apply_style(rule: &mut Rule, update: StyleUpdate) {
    let styles = &mut rule.styles;
    match update {
        StyleUpdate::FontSize(v) => styles.font_size = v,
        StyleUpdate::TextColor(v) => styles.text_color = v,
        StyleUpdate::BorderColor(v) => styles.border_color = v,
        StyleUpdate::BackgroundColor(v) => styles.background_color = v,
        StyleUpdate::PlayEffect(v) => styles.play_effect = v,
        StyleUpdate::MinimapIcon(v) => styles.minimap_icon = v,
        StyleUpdate::Sound(v) => styles.sound = v,
    }
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
