//! Tracing setup. Logs go to a file so they never draw over the UI.

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs a file-backed `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured filter. Once a global subscriber is
/// installed, later calls return without touching any file.
pub fn init_tracing(config: &TuiConfig) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing already initialized");
        return Ok(());
    }

    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
