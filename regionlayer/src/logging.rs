//! Logging infrastructure.
//!
//! Structured logging via `tracing` with dual output: a session log
//! file (cleared on startup) and stdout. The level defaults to INFO
//! and can be raised via the `RUST_LOG` environment variable or the
//! explicit override argument.

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default directory for session log files.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Default session log file name.
pub const DEFAULT_LOG_FILE: &str = "regionlayer.log";

/// Keeps the non-blocking file writer alive.
///
/// Dropping the guard flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the global tracing subscriber.
///
/// Creates `log_dir` if needed, truncates the previous session's log
/// file, and installs a file layer plus a stdout layer. When
/// `filter_override` is `Some`, it replaces both the default and any
/// `RUST_LOG` setting (the CLI's `--debug` flag uses this).
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be prepared.
pub fn init_logging(
    log_dir: &str,
    log_file: &str,
    filter_override: Option<&str>,
) -> Result<LoggingGuard, io::Error> {
    fs::create_dir_all(log_dir)?;

    // Truncate last session's log.
    let log_path = Path::new(log_dir).join(log_file);
    fs::write(&log_path, "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .compact();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(true)
        .compact();

    let env_filter = match filter_override {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}
