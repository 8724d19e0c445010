use std::fs;

use crate::cli::InitArgs;
use crate::{FilterForgeError, Result};

use super::context::exit_code;

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    exit_code(run_init_impl(args))
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(FilterForgeError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        FilterForgeError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# filter-forge configuration file

# Target client: "pc" plays custom sound files, "console" only built-in slots
platform = "pc"

# Preset baseline used by `filter-forge reset` and named in the export header
# preset = "league-start"

# Drop every alert sound from exported filters
mute_sounds = false

# Snapshot store directory (default: platform data directory)
# store_dir = "~/.local/share/filter-forge/snapshots"

# "immediate" saves after every edit, "deferred" once per command
persist = "immediate"

# Default destination of `filter-forge export`
# output = "loot.filter"

# Compile-time adjustments per section; the stored sections are not changed
# [overrides.currency]
# tier_threshold = "B"

# [overrides.leveling]
# enabled = false
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
