//! Logging setup for Ward
//!
//! The TUI owns the terminal, so log output goes to a file under ~/.ward
//! instead of stdout. RUST_LOG overrides the configured level.

use crate::config::WardConfig;
use crate::error::{Result, WardError};
use std::fs::{self, File};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber writing to the configured log file
pub fn init(config: &WardConfig) -> Result<()> {
    let log_path = config.log_path();

    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| WardError::Config(format!("Failed to create log directory: {}", e)))?;
    }

    let file = File::create(&log_path)
        .map_err(|e| WardError::Config(format!("Failed to open log file: {}", e)))?;

    let filter = EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| WardError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
