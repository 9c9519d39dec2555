// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Console output always goes to stderr so that stdout carries only the
//! artifact confirmation lines. With the `file-logging` feature a second
//! layer writes the same events into a timestamped run folder:
//! ```text
//! ./logs/
//!   └── run_20250101_120000/
//!       └── perceptron-lab.log
//! ```

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::cli::CrateDebugFlags;
use crate::KNOWN_CRATES;

/// Keeps logging alive; hold it until the process exits
pub struct LoggingGuard {
    #[cfg(feature = "file-logging")]
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
    log_dir: Option<PathBuf>,
}

impl LoggingGuard {
    /// Run folder receiving file logs, if file logging is active
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

fn build_filter(base_level: &str, debug_flags: &CrateDebugFlags) -> Result<EnvFilter> {
    let filter = debug_flags.to_filter_string(base_level);
    EnvFilter::try_new(&filter).map_err(|e| anyhow!("Invalid log filter '{}': {}", filter, e))
}

/// Workspace crates logging at `debug` under `debug_flags`
fn debug_crates(debug_flags: &CrateDebugFlags) -> Vec<&'static str> {
    KNOWN_CRATES
        .iter()
        .copied()
        .filter(|name| debug_flags.log_level(name) == tracing::Level::DEBUG)
        .collect()
}

fn announce_debug_crates(debug_flags: &CrateDebugFlags) {
    if debug_flags.any_enabled() {
        tracing::info!("Debug logging enabled for: {}", debug_crates(debug_flags).join(", "));
    }
}

fn console_layer(filter: EnvFilter) -> Box<dyn Layer<Registry> + Send + Sync> {
    tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(filter)
        .boxed()
}

/// Initialize console logging
///
/// # Arguments
/// * `base_level` - Level for everything without a debug flag (e.g. `"info"`)
/// * `debug_flags` - Crates raised to `debug`
pub fn init_logging(base_level: &str, debug_flags: &CrateDebugFlags) -> Result<LoggingGuard> {
    let filter = build_filter(base_level, debug_flags)?;

    Registry::default()
        .with(vec![console_layer(filter)])
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;
    announce_debug_crates(debug_flags);

    Ok(LoggingGuard {
        #[cfg(feature = "file-logging")]
        _file_guard: None,
        log_dir: None,
    })
}

/// Initialize console logging plus a log file in a timestamped run folder
///
/// # Arguments
/// * `base_level` - Level for everything without a debug flag
/// * `debug_flags` - Crates raised to `debug`
/// * `log_dir` - Base directory for run folders (default: `./logs`)
#[cfg(feature = "file-logging")]
pub fn init_logging_with_file(
    base_level: &str,
    debug_flags: &CrateDebugFlags,
    log_dir: Option<PathBuf>,
) -> Result<LoggingGuard> {
    use anyhow::Context;
    use chrono::Utc;

    let base_log_dir = log_dir.unwrap_or_else(|| PathBuf::from("./logs"));
    let run_dir = run_folder(&base_log_dir, Utc::now());
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("Failed to create log directory: {}", run_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&run_dir, "perceptron-lab.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(build_filter(base_level, debug_flags)?)
        .boxed();

    Registry::default()
        .with(vec![console_layer(build_filter(base_level, debug_flags)?), file_layer])
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;
    tracing::info!("Writing logs to {}", run_dir.display());
    announce_debug_crates(debug_flags);

    Ok(LoggingGuard {
        _file_guard: Some(guard),
        log_dir: Some(run_dir),
    })
}

/// `<base>/run_YYYYmmdd_HHMMSS`
#[cfg(feature = "file-logging")]
fn run_folder(base: &Path, now: chrono::DateTime<chrono::Utc>) -> PathBuf {
    base.join(format!("run_{}", now.format("%Y%m%d_%H%M%S")))
}
