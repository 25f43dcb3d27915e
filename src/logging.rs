//! Optional subscriber setup for binaries built on this crate
//!
//! The client only emits `tracing` events. Library users who already have a
//! subscriber should ignore this module.
//!
//! # Log Targets
//! - `rdapi::client` - request dispatch, HTTP status and transport failures
//! - `rdapi::response` - vendor error codes and body inspection
//! - `rdapi::config` - token checks
//!
//! # Example
//! ```bash
//! RUST_LOG=rdapi=debug cargo run --example basic_usage
//! ```

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
pub struct LogConfig {
    /// Log level filter string, overridden by `RUST_LOG`
    pub log_level: String,
    /// Directory for rotated log files; stdout only when `None`
    pub log_dir: Option<PathBuf>,
    /// Prefix for log file names
    pub file_prefix: String,
    /// Maximum number of log files to keep
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
            file_prefix: "rdapi".to_string(),
            max_files: 5,
        }
    }
}

impl LogConfig {
    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

/// Install a global subscriber writing to stdout and, optionally, to a
/// daily-rotated file
///
/// Keep the returned guard alive until exit so file output is flushed.
pub fn init_logging(config: LogConfig) -> Result<LogGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let worker_guard = match &config.log_dir {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir).context("Failed to create log directory")?;

            let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
                .rotation(tracing_appender::rolling::Rotation::DAILY)
                .filename_prefix(&config.file_prefix)
                .filename_suffix("log")
                .max_log_files(config.max_files)
                .build(log_dir)
                .context("Failed to create file appender")?;
            let (non_blocking_file, worker_guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .compact()
                .with_writer(non_blocking_file)
                .with_target(true)
                .with_ansi(false);

            // Stdout layer is built per branch; its type depends on the stack below it
            let stdout_layer = fmt::layer()
                .compact()
                .with_target(true)
                .with_line_number(true)
                .with_ansi(true);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .with(stdout_layer)
                .try_init()
                .context("A global subscriber is already installed")?;

            Some(worker_guard)
        }
        None => {
            let stdout_layer = fmt::layer()
                .compact()
                .with_target(true)
                .with_line_number(true)
                .with_ansi(true);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(stdout_layer)
                .try_init()
                .context("A global subscriber is already installed")?;

            None
        }
    };

    tracing::debug!(
        target: "rdapi::logging",
        log_dir = ?config.log_dir,
        log_level = %config.log_level,
        "Logging system initialized"
    );

    Ok(LogGuard {
        _worker_guard: worker_guard,
    })
}

/// Flushes file logging when dropped
#[derive(Debug)]
pub struct LogGuard {
    _worker_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}
