use indexmap::IndexSet;

use crate::model::Tier;

/// Rank of `tier` in `order` (0 = best), or `None` if it is not ranked.
#[must_use]
pub fn tier_rank(tier: Tier, order: &[Tier]) -> Option<usize> {
    order.iter().position(|t| *t == tier)
}

/// Tiers included by a threshold: the threshold itself and every tier ranked
/// above it. A threshold missing from `order` includes nothing.
#[must_use]
pub fn resolve_tier_inclusion(threshold: Tier, order: &[Tier]) -> IndexSet<Tier> {
    let Some(cutoff) = tier_rank(threshold, order) else {
        return IndexSet::new();
    };
    order[..=cutoff].iter().copied().collect()
}
