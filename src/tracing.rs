//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging edit
//! cycles, range translation and cursor placement.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=mask=debug` - field state changes only
//! - `RUST_LOG=maskedit::mask::engine=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/maskedit/logs/maskedit.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::mask::MaskEngine;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr and respects RUST_LOG (default `warn`).
/// File logging writes to `~/.config/maskedit/logs/maskedit.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG, keeps stdout free for output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "maskedit.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of engine state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSnapshot {
    pub raw: String,
    pub masked: String,
    pub cursor: usize,
}

impl EditSnapshot {
    pub fn from_engine(engine: &MaskEngine) -> Self {
        Self {
            raw: engine.raw_text(),
            masked: engine.masked_text(),
            cursor: engine.cursor(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &EditSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.raw != other.raw {
            changes.push(format!("raw: {:?} → {:?}", self.raw, other.raw));
        }
        if self.masked != other.masked {
            changes.push(format!("masked: {:?} → {:?}", self.masked, other.masked));
        }
        if self.cursor != other.cursor {
            changes.push(format!("cursor: {} → {}", self.cursor, other.cursor));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
