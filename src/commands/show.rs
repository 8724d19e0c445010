use std::fmt::Write;

use crate::cli::{Cli, ShowArgs};
use crate::compiler::emitted_rules;
use crate::model::{FilterConfiguration, Section, SectionId};
use crate::reconcile::{apply_item_tiers, listed_tier};
use crate::store::SnapshotStore;
use crate::session::Session;
use crate::Result;

use super::context::{CommandContext, exit_code};

#[must_use]
pub fn run_sections(cli: &Cli) -> i32 {
    exit_code(run_sections_impl(cli))
}

fn run_sections_impl(cli: &Cli) -> Result<()> {
    let ctx = CommandContext::load(cli)?;
    let mut session = ctx.open_session()?;
    let config = session.configuration()?;
    print!("{}", format_sections(&config));
    Ok(())
}

/// One line per section in compile order: state, emitted rule count and
/// effective tier threshold.
#[must_use]
pub fn format_sections(config: &FilterConfiguration) -> String {
    let mut out = String::new();
    for id in SectionId::ALL {
        let Some(section) = config.section(id) else {
            continue;
        };
        let enabled = config.section_enabled(section);
        let threshold = config.tier_threshold(section);
        let emitted = emitted_rules(&apply_item_tiers(section), threshold).len();
        writeln!(
            out,
            "{:<16} {:<4} {emitted}/{} rules{}",
            id.as_str(),
            if enabled { "on" } else { "off" },
            section.rules.len(),
            threshold.map_or_else(String::new, |t| format!("  tier >= {t}")),
        )
        .ok();
    }
    out
}

#[must_use]
pub fn run_show(args: &ShowArgs, cli: &Cli) -> i32 {
    exit_code(run_show_impl(args, cli))
}

fn run_show_impl(args: &ShowArgs, cli: &Cli) -> Result<()> {
    let ctx = CommandContext::load(cli)?;
    let mut session = ctx.open_session()?;
    print!("{}", show_section(&mut session, args)?);
    Ok(())
}

/// Render one reconciled section as text or JSON.
///
/// # Errors
/// Returns an error if the section cannot be loaded or serialized.
pub fn show_section<S: SnapshotStore>(session: &mut Session<S>, args: &ShowArgs) -> Result<String> {
    let section = session.section(args.section)?;
    if args.json {
        let mut json = serde_json::to_string_pretty(section)?;
        json.push('\n');
        return Ok(json);
    }
    Ok(format_section_text(section))
}

#[must_use]
pub fn format_section_text(section: &Section) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "Section: {} ({})",
        section.id,
        if section.enabled { "enabled" } else { "disabled" }
    )
    .ok();
    if let Some(tier) = section.tier_threshold {
        writeln!(out, "Tier threshold: {tier}").ok();
    }
    if let Some(selection) = &section.selection_set {
        let codes: Vec<&str> = selection.iter().map(String::as_str).collect();
        writeln!(out, "Selection: {}", codes.join(", ")).ok();
    }
    for (item, tier) in &section.item_tiers {
        let listed = listed_tier(section, item).map_or("-", |t| t.as_str());
        writeln!(out, "Item tier: {item} {listed} -> {tier}").ok();
    }
    writeln!(out).ok();

    for rule in &section.rules {
        writeln!(
            out,
            "  [{}] {:<20} {:<4} {:<2} {}",
            if rule.enabled { "x" } else { " " },
            rule.id,
            rule.disposition.keyword(),
            rule.tier.map_or("-", |t| t.as_str()),
            rule.label(),
        )
        .ok();
    }
    out
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
