//! Delivery of compiled filter text.
//!
//! Every sink receives the same string from a single `compile` call.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{FilterForgeError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportSink {
    File(PathBuf),
    Stdout,
    Clipboard,
}

/// Write `text` to every sink, in order. Stops at the first failure.
///
/// # Errors
/// Returns an error if a sink cannot be written.
pub fn export(text: &str, sinks: &[ExportSink]) -> Result<()> {
    for sink in sinks {
        match sink {
            ExportSink::File(path) => write_file(path, text)?,
            ExportSink::Stdout => write_stdout(text)?,
            ExportSink::Clipboard => write_clipboard(text)?,
        }
    }
    Ok(())
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    let to_error = |source: std::io::Error| FilterForgeError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, text).map_err(to_error)?;
    info!(path = %path.display(), bytes = text.len(), "filter written");
    Ok(())
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(feature = "clipboard")]
fn write_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| FilterForgeError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_owned())
        .map_err(|e| FilterForgeError::Clipboard(e.to_string()))?;
    info!(bytes = text.len(), "filter copied to clipboard");
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
fn write_clipboard(_text: &str) -> Result<()> {
    Err(FilterForgeError::Clipboard(
        "built without the `clipboard` feature".to_string(),
    ))
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
