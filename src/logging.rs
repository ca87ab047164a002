//! Log sink setup.
//!
//! The grid owns stdout, so diagnostics go to a file. Filtering follows
//! `RUST_LOG` when set and defaults to `termgrid=debug`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;
use crate::error::LoggingError;

const DEFAULT_FILTER: &str = "termgrid=debug";

/// Install a global subscriber appending to `path`.
pub fn init_file_logging(path: impl AsRef<Path>) -> Result<(), LoggingError> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)
}

/// Install file logging when `TERMGRID_LOG_FILE` is configured.
///
/// Returns `Ok(false)` when no log file is configured.
pub fn init_from_config(config: &EnvConfig) -> Result<bool, LoggingError> {
    match config.log_file.as_deref() {
        Some(path) => init_file_logging(path).map(|()| true),
        None => Ok(false),
    }
}
