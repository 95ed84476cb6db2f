//! Tracing subscriber setup.

use std::fs::OpenOptions;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::sanitize::SanitizingMakeWriter;
use crate::config::LogConfig;
use crate::DiagnosticsError;

/// Install the global subscriber described by `config`.
///
/// Non-file modes write to stderr; stdout carries only the result record.
///
/// The returned guard must be kept alive for the life of the program; dropping
/// it flushes and stops the background writer.
///
/// # Errors
/// Returns error if the log file cannot be opened or the filter is invalid.
pub fn init_tracing(config: &LogConfig) -> crate::Result<WorkerGuard> {
    let (writer, guard) = if config.mode.uses_file() {
        if let Some(parent) = config.file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.file)?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stderr())
    };

    let filter = EnvFilter::try_new(&config.filter).map_err(|e| {
        DiagnosticsError::Config(format!("invalid log filter {:?}: {e}", config.filter))
    })?;

    let init = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(SanitizingMakeWriter::with_limit(writer, config.sanitize_max_bytes)),
        )
        .try_init();

    if let Err(e) = init {
        // A subscriber is already installed (e.g. by a test harness); keep it.
        eprintln!("tracing subscriber not installed: {e}");
    }

    Ok(guard)
}
