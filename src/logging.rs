//! Logging initialization
//!
//! TUI mode: logs to `<config dir>/logs/study-guide.log.<date>`, since stdout
//! belongs to the interface.
//! CLI mode: logs to stderr.

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{GuidePaths, Settings};

/// Prefix of the rolling log file name
pub const LOG_FILE_PREFIX: &str = "study-guide.log";

/// Result of logging initialization
pub struct LoggingHandle {
    /// Keeps the background writer alive; dropping it flushes buffered logs.
    pub _guard: Option<WorkerGuard>,
}

/// Build the filter from `RUST_LOG`, falling back to the configured level
pub fn build_filter(settings: &Settings, verbose: bool) -> EnvFilter {
    let level = if verbose {
        "debug".to_string()
    } else {
        settings.log_level.clone()
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Whether this session should log to a file rather than stderr
pub fn logs_to_file(settings: &Settings, is_tui_mode: bool) -> bool {
    is_tui_mode && settings.log_to_file
}

/// Initialize the global subscriber.
///
/// The returned handle must be kept alive for the duration of the program.
pub fn init_logging(
    paths: &GuidePaths,
    settings: &Settings,
    is_tui_mode: bool,
    verbose: bool,
) -> Result<LoggingHandle> {
    let filter = build_filter(settings, verbose);

    if logs_to_file(settings, is_tui_mode) {
        let log_dir = paths.log_dir();
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();

        Ok(LoggingHandle {
            _guard: Some(guard),
        })
    } else if is_tui_mode {
        // No subscriber: writing to stderr would corrupt the alternate screen
        Ok(LoggingHandle {
            _guard: None,
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();

        Ok(LoggingHandle {
            _guard: None,
        })
    }
}
