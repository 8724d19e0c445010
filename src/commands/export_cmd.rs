use crate::cli::{Cli, ExportArgs};
use crate::compiler::compile;
use crate::config::AppConfig;
use crate::export::{ExportSink, export};
use crate::store::SnapshotStore;
use crate::session::Session;
use crate::Result;

use super::context::{CommandContext, exit_code};

#[must_use]
pub fn run_export(args: &ExportArgs, cli: &Cli) -> i32 {
    exit_code(run_export_impl(args, cli))
}

fn run_export_impl(args: &ExportArgs, cli: &Cli) -> Result<()> {
    let ctx = CommandContext::load(cli)?;
    let mut session = ctx.open_session()?;
    let text = compile_for_export(&mut session, args)?;
    let sinks = export_sinks(args, &ctx.config);
    export(&text, &sinks)?;

    if !cli.quiet {
        for sink in &sinks {
            if let ExportSink::File(path) = sink {
                eprintln!("Exported filter to {}", path.display());
            }
        }
    }
    Ok(())
}

/// Compile the session's configuration with the export flags applied.
///
/// # Errors
/// Returns an error if a section cannot be loaded.
pub fn compile_for_export<S: SnapshotStore>(
    session: &mut Session<S>,
    args: &ExportArgs,
) -> Result<String> {
    let mut config = session.configuration()?;
    if let Some(platform) = args.platform {
        config.platform = platform.into();
    }
    config.mute_sounds |= args.mute;
    Ok(compile(&config))
}

/// Sinks named on the command line; otherwise the configured output file,
/// otherwise stdout.
#[must_use]
pub fn export_sinks(args: &ExportArgs, config: &AppConfig) -> Vec<ExportSink> {
    let mut sinks: Vec<ExportSink> = args.output.iter().cloned().map(ExportSink::File).collect();
    if args.stdout {
        sinks.push(ExportSink::Stdout);
    }
    if args.clipboard {
        sinks.push(ExportSink::Clipboard);
    }
    if sinks.is_empty() {
        sinks.push(
            config
                .output
                .clone()
                .map_or(ExportSink::Stdout, ExportSink::File),
        );
    }
    sinks
}

#[cfg(test)]
#[path = "export_cmd_tests.rs"]
mod tests;
