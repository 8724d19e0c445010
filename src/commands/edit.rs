//! Section and rule editing commands. Every edit goes through
//! [`Session::dispatch`], so each one is reconciled and persisted the same way.

use std::fmt::Display;
use std::str::FromStr;

use indexmap::IndexSet;
use tracing::info;

use crate::cli::{
    Cli, ConditionArgs, DispositionArgs, ItemTierArgs, SelectArgs, StyleArgs, TierArgs,
    ToggleArgs,
};
use crate::model::{Condition, Operator, RangeCondition, Scalar, SectionId, Sound, StyleField};
use crate::session::{RuleUpdate, SectionUpdate, Session, StyleUpdate};
use crate::store::SnapshotStore;
use crate::{FilterForgeError, Result};

use super::context::{CommandContext, exit_code};

/// Open a session, apply `updates` to `section` in order, then flush.
fn run_updates(cli: &Cli, section: SectionId, updates: Result<Vec<SectionUpdate>>) -> i32 {
    exit_code(updates.and_then(|updates| run_updates_impl(cli, section, updates)))
}

fn run_updates_impl(cli: &Cli, section: SectionId, updates: Vec<SectionUpdate>) -> Result<()> {
    let ctx = CommandContext::load(cli)?;
    let mut session = ctx.open_session()?;
    let count = apply_updates(&mut session, section, updates)?;
    session.flush()?;
    if !cli.quiet {
        println!("Updated {section} ({count} change(s))");
    }
    Ok(())
}

/// Dispatch `updates` in order. Stops at the first failure; earlier updates
/// stay committed.
///
/// # Errors
/// Returns the first dispatch error.
pub fn apply_updates<S: SnapshotStore>(
    session: &mut Session<S>,
    section: SectionId,
    updates: Vec<SectionUpdate>,
) -> Result<usize> {
    let count = updates.len();
    for update in updates {
        session.dispatch(section, update)?;
    }
    info!(section = %section, count, "section updated");
    Ok(count)
}

// =============================================================================
// enable / disable
// =============================================================================

#[must_use]
pub fn run_toggle(args: &ToggleArgs, enabled: bool, cli: &Cli) -> i32 {
    run_updates(cli, args.section, Ok(toggle_updates(args, enabled)))
}

/// Without rule ids the section itself is switched.
#[must_use]
pub fn toggle_updates(args: &ToggleArgs, enabled: bool) -> Vec<SectionUpdate> {
    if args.rules.is_empty() {
        return vec![SectionUpdate::SetEnabled(enabled)];
    }
    args.rules
        .iter()
        .map(|id| SectionUpdate::rule(id.as_str(), RuleUpdate::SetEnabled(enabled)))
        .collect()
}

// =============================================================================
// tier / select
// =============================================================================

#[must_use]
pub fn run_tier(args: &TierArgs, cli: &Cli) -> i32 {
    let tier = if args.clear { None } else { args.tier };
    run_updates(cli, args.section, Ok(vec![SectionUpdate::SetTierThreshold(tier)]))
}

#[must_use]
pub fn run_select(args: &SelectArgs, cli: &Cli) -> i32 {
    run_updates(cli, args.section, Ok(select_updates(args)))
}

#[must_use]
pub fn select_updates(args: &SelectArgs) -> Vec<SectionUpdate> {
    if args.toggle {
        return args
            .codes
            .iter()
            .map(|code| SectionUpdate::ToggleSelection(code.clone()))
            .collect();
    }
    let codes: IndexSet<String> = args.codes.iter().cloned().collect();
    vec![SectionUpdate::SetSelection(Some(codes))]
}

#[must_use]
pub fn run_item_tier(args: &ItemTierArgs, cli: &Cli) -> i32 {
    run_updates(cli, args.section, Ok(vec![item_tier_update(args)]))
}

#[must_use]
pub fn item_tier_update(args: &ItemTierArgs) -> SectionUpdate {
    SectionUpdate::SetItemTier {
        item: args.item.trim().to_string(),
        tier: if args.clear { None } else { args.tier },
    }
}

// =============================================================================
// disposition
// =============================================================================

#[must_use]
pub fn run_disposition(args: &DispositionArgs, cli: &Cli) -> i32 {
    let update = SectionUpdate::rule(
        args.rule.as_str(),
        RuleUpdate::SetDisposition(args.disposition.into()),
    );
    run_updates(cli, args.section, Ok(vec![update]))
}

// =============================================================================
// style
// =============================================================================

#[must_use]
pub fn run_style(args: &StyleArgs, cli: &Cli) -> i32 {
    run_updates(cli, args.section, style_updates(args))
}

/// One rule update per style flag given, in flag order.
///
/// # Errors
/// Returns an error if no flag is given or a value does not parse.
pub fn style_updates(args: &StyleArgs) -> Result<Vec<SectionUpdate>> {
    let mut updates = Vec::new();
    if let Some(raw) = &args.font_size {
        updates.push(StyleUpdate::FontSize(parse_field(raw, "font size")?));
    }
    if let Some(raw) = &args.text_color {
        updates.push(StyleUpdate::TextColor(parse_field(raw, "text color")?));
    }
    if let Some(raw) = &args.border_color {
        updates.push(StyleUpdate::BorderColor(parse_field(raw, "border color")?));
    }
    if let Some(raw) = &args.background_color {
        updates.push(StyleUpdate::BackgroundColor(parse_field(
            raw,
            "background color",
        )?));
    }
    if let Some(raw) = &args.effect {
        updates.push(StyleUpdate::PlayEffect(parse_field(raw, "effect")?));
    }
    if let Some(raw) = &args.icon {
        updates.push(StyleUpdate::MinimapIcon(parse_field(raw, "minimap icon")?));
    }
    if let Some(raw) = &args.sound {
        updates.push(StyleUpdate::Sound(parse_sound(raw, args.volume)));
    }
    if updates.is_empty() {
        return Err(FilterForgeError::Config(
            "No style change given. Pass at least one style flag".to_string(),
        ));
    }
    Ok(updates
        .into_iter()
        .map(|update| SectionUpdate::rule(args.rule.as_str(), RuleUpdate::Style(update)))
        .collect())
}

/// `off` disables the field, `default` hands it back to the catalog.
fn parse_field<T>(raw: &str, what: &str) -> Result<StyleField<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" | "none" => Ok(StyleField::Disabled),
        "default" | "inherit" => Ok(StyleField::Inherit),
        _ => raw
            .trim()
            .parse()
            .map(StyleField::Override)
            .map_err(|e| FilterForgeError::Config(format!("Invalid {what}: {e}"))),
    }
}

/// A bare number selects a built-in slot, anything else names a file.
fn parse_sound(raw: &str, volume: Option<u16>) -> StyleField<Sound> {
    let raw = raw.trim();
    match raw.to_ascii_lowercase().as_str() {
        "off" | "none" => StyleField::Disabled,
        "default" | "inherit" => StyleField::Inherit,
        _ => StyleField::Override(raw.parse::<u8>().map_or_else(
            |_| Sound::File {
                path: raw.to_string(),
                volume,
            },
            |id| Sound::Slot { id, volume },
        )),
    }
}

// =============================================================================
// condition
// =============================================================================

#[must_use]
pub fn run_condition(args: &ConditionArgs, cli: &Cli) -> i32 {
    run_updates(cli, args.section, condition_update(args).map(|u| vec![u]))
}

/// # Errors
/// Returns an error if the condition expression does not parse.
pub fn condition_update(args: &ConditionArgs) -> Result<SectionUpdate> {
    let update = if args.remove {
        RuleUpdate::RemoveCondition(args.key.clone())
    } else {
        RuleUpdate::SetCondition {
            key: args.key.clone(),
            condition: parse_condition(&args.expr)?,
        }
    };
    Ok(SectionUpdate::rule(args.rule.as_str(), update))
}

const OPERATOR_PREFIXES: [&str; 6] = [">=", "<=", "==", ">", "<", "="];

/// Parse a condition from command-line tokens.
///
/// - `>= 1000`, `<5`: comparison
/// - `65..100`, `..80`: range, either bound may be omitted
/// - `true` / `false`: flag
/// - anything else: list of names
///
/// # Errors
/// Returns an error for an empty expression or a malformed range bound.
pub fn parse_condition(tokens: &[String]) -> Result<Condition> {
    let joined = tokens.join(" ");
    let expr = joined.trim();
    if expr.is_empty() {
        return Err(FilterForgeError::Config(
            "Empty condition expression".to_string(),
        ));
    }

    if let Some(prefix) = OPERATOR_PREFIXES.iter().find(|p| expr.starts_with(**p)) {
        let operator: Operator = prefix.parse().map_err(FilterForgeError::Config)?;
        let value = expr[prefix.len()..].trim();
        if value.is_empty() {
            return Err(FilterForgeError::Config(format!(
                "Missing value after '{prefix}'"
            )));
        }
        return Ok(Condition::compare(operator, parse_scalar(value)));
    }

    if let [single] = tokens {
        let single = single.trim();
        if single.eq_ignore_ascii_case("true") {
            return Ok(Condition::Flag(true));
        }
        if single.eq_ignore_ascii_case("false") {
            return Ok(Condition::Flag(false));
        }
        if let Some((min, max)) = single.split_once("..") {
            return Ok(Condition::Range(RangeCondition {
                min_level: parse_bound(min)?,
                max_level: parse_bound(max)?,
            }));
        }
    }

    Ok(Condition::list(
        tokens.iter().map(|t| t.trim()).filter(|t| !t.is_empty()),
    ))
}

fn parse_bound(raw: &str) -> Result<Option<i64>> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|e| FilterForgeError::Config(format!("Invalid range bound '{raw}': {e}")))
}

fn parse_scalar(raw: &str) -> Scalar {
    if let Ok(n) = raw.parse::<i64>() {
        return Scalar::Int(n);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return Scalar::Float(f);
    }
    match raw.to_ascii_lowercase().as_str() {
        "true" => Scalar::Bool(true),
        "false" => Scalar::Bool(false),
        _ => Scalar::Text(raw.trim_matches('"').to_string()),
    }
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
