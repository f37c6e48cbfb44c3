//! Diagnostic logging.
//!
//! The terminal UI owns stdout, so tracing output only goes to a file and only
//! when one is requested with `--debug-log`.

use std::error::Error;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `chatline=trace`.
pub const LOG_FILTER_ENV_VAR: &str = "CHATLINE_LOG";

const DEFAULT_DIRECTIVE: &str = "chatline=debug";

fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a global subscriber appending plain-text events to `path`.
pub fn init_debug_log(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = open_log_file(path)?;
    let directive = std::env::var(LOG_FILTER_ENV_VAR).ok();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive.as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| -> Box<dyn Error> { err })?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "debug log started");
    Ok(())
}
