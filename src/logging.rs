//! # Logging
//!
//! The TUI owns stdout, so `tracing` output goes to a file:
//!
//! ```text
//! ~/.local/share/evilcorp/evilcorp.log
//! ```
//!
//! The filter comes from `EVILCORP_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `info`.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "EVILCORP_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber writing to the default log file.
///
/// Returns the log path on success. A failure leaves logging disabled; the
/// caller decides whether to mention it.
pub fn init() -> Result<PathBuf> {
    let path = log_path()?;
    init_at(&path)?;
    Ok(path)
}

/// Install the global subscriber writing to `path`.
pub fn init_at(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

/// Return the path to the log file.
pub fn log_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "evilcorp")
        .context("Could not determine data directory")?;
    Ok(dirs.data_dir().join("evilcorp.log"))
}
