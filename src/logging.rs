//! Log setup for the terminal binary.
//!
//! The game owns stdout, so logs only go to a file. Without a log path no
//! subscriber is installed and all `tracing` events are dropped.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Install a file subscriber if `log_path` is set.
///
/// Returns `true` when a subscriber was installed. An already-installed global
/// subscriber is left in place.
pub fn init_logging(log_path: Option<&Path>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok();
    Ok(installed)
}
