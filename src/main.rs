use clap::Parser;
use tracing::Level;
use tracing_subscriber::filter::EnvFilter;

use filter_forge::cli::{Cli, Commands};
use filter_forge::commands::{
    run_condition, run_disposition, run_export, run_init, run_item_tier, run_reset,
    run_save_preset, run_sections, run_select, run_show, run_style, run_tier, run_toggle,
};

/// Default log level from `-q` / `-v`; `RUST_LOG` still takes precedence.
const fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::builder()
        .with_default_directive(log_level(cli.verbose, cli.quiet).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match &cli.command {
        Commands::Sections => run_sections(&cli),
        Commands::Show(args) => run_show(args, &cli),
        Commands::Export(args) => run_export(args, &cli),
        Commands::Enable(args) => run_toggle(args, true, &cli),
        Commands::Disable(args) => run_toggle(args, false, &cli),
        Commands::Tier(args) => run_tier(args, &cli),
        Commands::Select(args) => run_select(args, &cli),
        Commands::ItemTier(args) => run_item_tier(args, &cli),
        Commands::Disposition(args) => run_disposition(args, &cli),
        Commands::Style(args) => run_style(args, &cli),
        Commands::Condition(args) => run_condition(args, &cli),
        Commands::Reset(args) => run_reset(args, &cli),
        Commands::SavePreset(args) => run_save_preset(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
