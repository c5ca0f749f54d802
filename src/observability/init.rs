//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, wiring `tracing` macros to a
//! plain-text fmt layer that writes to a rotating log file.

use super::file_writer::RotatingFile;
use crate::infrastructure::paths::{get_data_dir, log_file_path};
use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when none is configured or it fails to parse.
const DEFAULT_LEVEL: &str = "info";

/// Builds the filter for a configured directive, falling back to `info`.
fn build_filter(level: Option<&str>) -> EnvFilter {
    let directive = level.unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Initializes the tracing subscriber with file-based output.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters spans and events based on the configured trace level
/// 2. Formats them as plain text (no ANSI colors)
/// 3. Writes to a rotating file with backups
///
/// # File Location
///
/// Logs are written to `~/.local/share/zellij/zanban/zanban.log`, seen as
/// `/host/.local/share/zellij/zanban/zanban.log` inside the sandbox.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently returns if directory creation fails (logging is optional)
/// - Idempotent: only the first call installs a subscriber
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = RotatingFile::new(log_file_path());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(writer))
        .with_ansi(false)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(build_filter(config.trace_level.as_deref()))
        .with(fmt_layer)
        .try_init();
}

