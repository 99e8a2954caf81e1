//! File logging for the presenter.
//!
//! The terminal belongs to the slide UI, so `tracing` output goes to
//! `<directory>/viva.log` through a non-blocking appender. `RUST_LOG`
//! overrides the configured level.

use anyhow::{Context, Result};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use viva_common::LoggingConfig;

const LOG_FILE_NAME: &str = "viva.log";

/// Install the global subscriber.
///
/// Returns `None` when logging is disabled. Keep the guard alive until exit;
/// dropping it flushes pending lines.
pub fn init_logging(config: &LoggingConfig, debug: bool) -> Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    fs::create_dir_all(&config.directory).with_context(|| {
        format!("can't create log directory {}", config.directory.display())
    })?;

    let appender = tracing_appender::rolling::never(&config.directory, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let filter = build_filter(&config.level, debug)?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("can't initialize tracing subscriber")?;

    tracing::info!(
        "viva {} logging to {}",
        env!("CARGO_PKG_VERSION"),
        config.directory.join(LOG_FILE_NAME).display()
    );

    Ok(Some(guard))
}

fn build_filter(level: &str, debug: bool) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let level = if debug { "debug" } else { level.trim() };
    let level = if level.is_empty() { "info" } else { level };

    EnvFilter::builder()
        .parse(level)
        .context("invalid logging level")
}
