use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::catalog::Catalog;
use crate::cli::Cli;
use crate::config::{AppConfig, ConfigLoader, FileConfigLoader};
use crate::store::{DirStore, SnapshotStore};
use crate::session::Session;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, FilterForgeError, Result};

/// Resolved configuration shared by the state-touching commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    pub config: AppConfig,
    pub store_dir: PathBuf,
}

impl CommandContext {
    /// Load configuration from `--config` or the default search path.
    ///
    /// # Errors
    /// Returns an error if the config cannot be loaded or no store directory
    /// can be determined.
    pub fn load(cli: &Cli) -> Result<Self> {
        Self::load_with(cli, &FileConfigLoader::new())
    }

    /// # Errors
    /// See [`CommandContext::load`].
    pub fn load_with<L: ConfigLoader>(cli: &Cli, loader: &L) -> Result<Self> {
        let result = match &cli.config {
            Some(path) => loader.load_from_path(path)?,
            None => loader.load()?,
        };
        let store_dir = cli
            .store
            .clone()
            .or_else(|| result.config.resolved_store_dir())
            .ok_or_else(|| {
                FilterForgeError::Config(
                    "Cannot determine a snapshot store directory. Pass --store or set 'store_dir'"
                        .to_string(),
                )
            })?;
        debug!(
            config = ?result.source,
            store = %store_dir.display(),
            "command context resolved"
        );
        Ok(Self {
            config: result.config,
            store_dir,
        })
    }

    /// Open a session over the on-disk snapshot store.
    ///
    /// # Errors
    /// Returns an error if the built-in catalog fails to load.
    pub fn open_session(&self) -> Result<Session<DirStore>> {
        session_for(&self.config, DirStore::new(&self.store_dir))
    }
}

/// Build a session over `store` configured from `config`. A preset recorded
/// by an earlier `reset --preset` replaces the configured one.
///
/// # Errors
/// Returns an error if the built-in catalog fails to load or the store
/// cannot be read.
pub fn session_for<S: SnapshotStore>(config: &AppConfig, store: S) -> Result<Session<S>> {
    let catalog = Catalog::builtin()?;
    let mut session = Session::new(catalog, store)
        .with_persist_mode(config.persist)
        .with_platform(config.platform)
        .with_preset(config.preset.clone())
        .with_mute_sounds(config.mute_sounds)
        .with_overrides(config.overrides.clone());
    session.restore_active_preset()?;
    Ok(session)
}

/// Print an error and its hint to stderr.
pub fn report_error(e: &FilterForgeError) {
    write_error(&mut io::stderr().lock(), e);
}

/// Format: `Error [{error_type}]: {message}`, then an optional `help:` line.
pub fn write_error<W: Write>(w: &mut W, e: &FilterForgeError) {
    writeln!(w, "Error [{}]: {e}", e.error_type()).ok();
    if let Some(hint) = e.suggestion() {
        writeln!(w, "  help: {hint}").ok();
    }
}

/// Map a command result to its process exit code.
#[must_use]
pub fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
