use crate::cli::{Cli, ResetArgs, SavePresetArgs};
use crate::model::SectionId;
use crate::store::SnapshotStore;
use crate::session::Session;
use crate::Result;

use super::context::{CommandContext, exit_code};

#[must_use]
pub fn run_reset(args: &ResetArgs, cli: &Cli) -> i32 {
    exit_code(run_reset_impl(args, cli))
}

fn run_reset_impl(args: &ResetArgs, cli: &Cli) -> Result<()> {
    let ctx = CommandContext::load(cli)?;
    let preset = reset_target(args, ctx.config.preset.as_deref());
    let mut session = ctx.open_session()?;
    let reset = reset_sections(&mut session, args.section, preset.as_deref())?;
    session.flush()?;
    if !cli.quiet {
        println!(
            "Reset {} section(s) to {}",
            reset.len(),
            preset.as_deref().unwrap_or("catalog defaults")
        );
    }
    Ok(())
}

/// Baseline to reset to: `--preset`, else the configured preset, unless
/// `--defaults` asks for the catalog.
#[must_use]
pub fn reset_target(args: &ResetArgs, configured: Option<&str>) -> Option<String> {
    if args.defaults {
        return None;
    }
    args.preset
        .as_deref()
        .or(configured)
        .map(ToString::to_string)
}

/// Reset one section, or every section when `section` is `None`.
///
/// # Errors
/// Returns an error if the preset name is invalid or the store fails.
pub fn reset_sections<S: SnapshotStore>(
    session: &mut Session<S>,
    section: Option<SectionId>,
    preset: Option<&str>,
) -> Result<Vec<SectionId>> {
    match section {
        Some(id) => {
            session.reset(id, preset)?;
            Ok(vec![id])
        }
        None => {
            session.reset_all(preset)?;
            Ok(SectionId::ALL.to_vec())
        }
    }
}

#[must_use]
pub fn run_save_preset(args: &SavePresetArgs, cli: &Cli) -> i32 {
    exit_code(run_save_preset_impl(args, cli))
}

fn run_save_preset_impl(args: &SavePresetArgs, cli: &Cli) -> Result<()> {
    let ctx = CommandContext::load(cli)?;
    let mut session = ctx.open_session()?;
    let saved = save_preset(&mut session, args)?;
    if !cli.quiet {
        println!("Saved preset '{}' ({} section(s))", args.name, saved.len());
    }
    Ok(())
}

/// # Errors
/// Returns an error if the preset name is invalid or the store fails.
pub fn save_preset<S: SnapshotStore>(
    session: &mut Session<S>,
    args: &SavePresetArgs,
) -> Result<Vec<SectionId>> {
    let sections = if args.sections.is_empty() {
        SectionId::ALL.to_vec()
    } else {
        args.sections.clone()
    };
    session.save_preset(&args.name, &sections)?;
    Ok(sections)
}

#[cfg(test)]
#[path = "preset_tests.rs"]
mod tests;
