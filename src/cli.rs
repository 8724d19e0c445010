use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::{Disposition, Platform, SectionId, Tier};

/// Target platform override
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformChoice {
    /// Custom sound files
    Pc,
    /// Built-in sound slots
    Console,
}

impl From<PlatformChoice> for Platform {
    fn from(choice: PlatformChoice) -> Self {
        match choice {
            PlatformChoice::Pc => Self::Pc,
            PlatformChoice::Console => Self::Console,
        }
    }
}

/// Show or hide matched items
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DispositionChoice {
    Show,
    Hide,
}

impl From<DispositionChoice> for Disposition {
    fn from(choice: DispositionChoice) -> Self {
        match choice {
            DispositionChoice::Show => Self::Show,
            DispositionChoice::Hide => Self::Hide,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "filter-forge")]
#[command(author, version, about = "Customize loot filter sections and compile them to a .filter file")]
#[command(long_about = "Customize loot filter sections and compile them to a .filter file.\n\n\
    Edits are stored as per-section snapshots and merged with the built-in catalog on load.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Snapshot store directory (overrides config)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List sections with their state
    Sections,

    /// Show the rules of one section
    Show(ShowArgs),

    /// Compile the filter and write it out
    Export(ExportArgs),

    /// Enable a section, or rules within it
    Enable(ToggleArgs),

    /// Disable a section, or rules within it
    Disable(ToggleArgs),

    /// Set or clear a section's tier threshold
    Tier(TierArgs),

    /// Restrict a section to some rule codes
    Select(SelectArgs),

    /// Move one item of a tier list to another tier
    ItemTier(ItemTierArgs),

    /// Show or hide the items a rule matches
    Disposition(DispositionArgs),

    /// Change a rule's style fields
    Style(StyleArgs),

    /// Set or remove one rule condition
    Condition(ConditionArgs),

    /// Reset sections to the catalog or a preset baseline
    Reset(ResetArgs),

    /// Save the current sections as a preset baseline
    SavePreset(SavePresetArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Section id (e.g. gold, currency, class-selection)
    pub section: SectionId,

    /// Print the reconciled section as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write to file (can be specified multiple times)
    #[arg(short, long)]
    pub output: Vec<PathBuf>,

    /// Write to stdout
    #[arg(long)]
    pub stdout: bool,

    /// Copy to the system clipboard
    #[arg(long)]
    pub clipboard: bool,

    /// Target platform (overrides config)
    #[arg(long, value_enum)]
    pub platform: Option<PlatformChoice>,

    /// Omit all sound lines
    #[arg(long)]
    pub mute: bool,
}

#[derive(Args, Debug)]
pub struct ToggleArgs {
    /// Section id
    pub section: SectionId,

    /// Rule ids; when omitted the section itself is toggled
    pub rules: Vec<String>,
}

#[derive(Args, Debug)]
pub struct TierArgs {
    /// Section id
    pub section: SectionId,

    /// Lowest tier to include (S, A, B, C, D, E)
    #[arg(required_unless_present = "clear")]
    pub tier: Option<Tier>,

    /// Remove the threshold so every tier is included
    #[arg(long, conflicts_with = "tier")]
    pub clear: bool,
}

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Section id
    pub section: SectionId,

    /// Rule codes to keep; none selects all
    pub codes: Vec<String>,

    /// Toggle the given codes instead of replacing the selection
    #[arg(long)]
    pub toggle: bool,
}

#[derive(Args, Debug)]
pub struct ItemTierArgs {
    /// Section id
    pub section: SectionId,

    /// Item name as listed by `show`, e.g. "Chaos Orb"
    pub item: String,

    /// Tier to move the item to
    #[arg(required_unless_present = "clear")]
    pub tier: Option<Tier>,

    /// Drop the override so the item returns to its listed tier
    #[arg(long, conflicts_with = "tier")]
    pub clear: bool,
}

#[derive(Args, Debug)]
pub struct DispositionArgs {
    /// Section id
    pub section: SectionId,

    /// Rule id
    pub rule: String,

    #[arg(value_enum)]
    pub disposition: DispositionChoice,
}

/// Style values accept `off` (switch the effect off) and `default`
/// (use the catalog value) in addition to a concrete value.
#[derive(Args, Debug)]
pub struct StyleArgs {
    /// Section id
    pub section: SectionId,

    /// Rule id
    pub rule: String,

    /// Font size, e.g. 40
    #[arg(long)]
    pub font_size: Option<String>,

    /// Text color, "r g b [a]"
    #[arg(long)]
    pub text_color: Option<String>,

    /// Border color, "r g b [a]"
    #[arg(long)]
    pub border_color: Option<String>,

    /// Background color, "r g b [a]"
    #[arg(long)]
    pub background_color: Option<String>,

    /// Beam effect color name, e.g. Red
    #[arg(long)]
    pub effect: Option<String>,

    /// Minimap icon, "size Color Shape" (size 0 = large, 2 = small)
    #[arg(long)]
    pub icon: Option<String>,

    /// Alert sound: a file name (pc) or a slot number (console)
    #[arg(long)]
    pub sound: Option<String>,

    /// Alert sound volume, used with --sound
    #[arg(long, requires = "sound")]
    pub volume: Option<u16>,
}

#[derive(Args, Debug)]
pub struct ConditionArgs {
    /// Section id
    pub section: SectionId,

    /// Rule id
    pub rule: String,

    /// Condition key, e.g. stackSize or areaLevel
    pub key: String,

    /// ">= 1000", "65..100", "true", or a list of item names
    #[arg(trailing_var_arg = true, required_unless_present = "remove")]
    pub expr: Vec<String>,

    /// Remove the condition
    #[arg(long, conflicts_with = "expr")]
    pub remove: bool,
}

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Section id; when omitted every section is reset
    pub section: Option<SectionId>,

    /// Preset baseline to reset to (defaults to the configured preset)
    #[arg(long)]
    pub preset: Option<String>,

    /// Reset to the built-in catalog, ignoring any preset
    #[arg(long, conflicts_with = "preset")]
    pub defaults: bool,
}

#[derive(Args, Debug)]
pub struct SavePresetArgs {
    /// Preset name (letters, digits, '-' and '_')
    pub name: String,

    /// Sections to save; when omitted every section is saved
    pub sections: Vec<SectionId>,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = ".filter-forge.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
