//! Loot filter data model: conditions, styles, rules, sections and the
//! aggregate filter configuration.

mod condition;
mod filter;
mod rule;
mod section;
mod snapshot;
mod style;

pub use condition::{CompareCondition, Condition, Operator, RangeCondition, Scalar};
pub use filter::{FilterConfiguration, Platform, SectionOverride};
pub use rule::{Disposition, Rule};
pub use section::{Section, SectionId, Tier};
pub use snapshot::{RuleSnapshot, SectionSnapshot};
pub use style::{Color, IconShape, MinimapIcon, Palette, Sound, StyleField, StyleSpec};

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
