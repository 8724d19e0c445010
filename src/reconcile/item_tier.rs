use std::borrow::Cow;

use tracing::debug;

use crate::model::{Condition, Rule, Section, Tier};

/// Condition key holding the item names a tiered rule matches.
pub const ITEM_LIST_KEY: &str = "baseType";

fn item_list(rule: &Rule) -> Option<&Vec<String>> {
    match rule.conditions.get(ITEM_LIST_KEY) {
        Some(Condition::List(items)) => Some(items),
        _ => None,
    }
}

fn item_list_mut(rule: &mut Rule) -> Option<&mut Vec<String>> {
    match rule.conditions.get_mut(ITEM_LIST_KEY) {
        Some(Condition::List(items)) => Some(items),
        _ => None,
    }
}

/// Tier of the first tiered rule whose item list names `item`, ignoring
/// per-item overrides.
#[must_use]
pub fn listed_tier(section: &Section, item: &str) -> Option<Tier> {
    section.rules.iter().find_map(|rule| {
        let tier = rule.tier?;
        item_list(rule)?
            .iter()
            .any(|listed| listed == item)
            .then_some(tier)
    })
}

/// Section with every overridden item moved into the item list of the first
/// rule of its override tier.
///
/// Overrides naming a tier no rule lists items for are skipped. A tiered
/// rule left with an empty item list is disabled, since an empty list emits
/// no condition line and the rule would match every item of its class.
#[must_use]
pub fn apply_item_tiers(section: &Section) -> Cow<'_, Section> {
    if section.item_tiers.is_empty() {
        return Cow::Borrowed(section);
    }

    let mut applied = section.clone();
    for (item, &tier) in &section.item_tiers {
        let Some(target) = applied
            .rules
            .iter()
            .position(|rule| rule.tier == Some(tier) && item_list(rule).is_some())
        else {
            debug!(
                section = %section.id,
                item,
                %tier,
                "no rule lists items of this tier, override skipped"
            );
            continue;
        };

        for rule in applied.rules.iter_mut().filter(|rule| rule.tier.is_some()) {
            if let Some(items) = item_list_mut(rule) {
                items.retain(|listed| listed != item);
            }
        }
        if let Some(items) = item_list_mut(&mut applied.rules[target]) {
            items.push(item.clone());
        }
    }

    for rule in applied.rules.iter_mut().filter(|rule| rule.tier.is_some()) {
        let emptied = item_list(rule).is_some_and(Vec::is_empty)
            && section
                .rule(&rule.id)
                .and_then(item_list)
                .is_some_and(|items| !items.is_empty());
        if emptied && rule.enabled {
            debug!(
                section = %section.id,
                rule = %rule.id,
                "every item moved out, rule disabled"
            );
            rule.enabled = false;
        }
    }
    Cow::Owned(applied)
}
