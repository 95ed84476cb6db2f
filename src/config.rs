//! Logging configuration from environment variables.
//!
//! - `SAMD_DIAG_LOG_MODE`: `stderr` | `file` | `auto` (default `auto`, which logs to stderr)
//! - `SAMD_DIAG_LOG_FILE`: log file path when logging to a file
//! - `SAMD_DIAG_LOG`: `EnvFilter` directives (falls back to `RUST_LOG`, then `info`)
//! - `SAMD_DIAG_SANITIZE_MAX_BYTES`: per-line cap for log sanitization
//!
//! Stdout is reserved for the result record, so there is no stdout log mode.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::DiagnosticsError;

pub const DEFAULT_LOG_FILE: &str = "samd-diagnostics.log";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_SANITIZE_MAX_BYTES: usize = 16 * 1024;

/// Where formatted log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    Stderr,
    File,
    #[default]
    Auto,
}

impl LogMode {
    /// Whether lines go to the log file. `Auto` resolves to stderr.
    #[must_use]
    pub fn uses_file(&self) -> bool {
        matches!(self, Self::File)
    }
}

impl std::str::FromStr for LogMode {
    type Err = DiagnosticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stderr" => Ok(Self::Stderr),
            "file" => Ok(Self::File),
            "auto" | "" => Ok(Self::Auto),
            other => Err(DiagnosticsError::Config(format!(
                "unknown log mode {other:?} (expected stderr, file or auto)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub mode: LogMode,
    pub file: PathBuf,
    pub filter: String,
    pub sanitize_max_bytes: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            mode: LogMode::default(),
            file: PathBuf::from(DEFAULT_LOG_FILE),
            filter: DEFAULT_LOG_FILTER.to_string(),
            sanitize_max_bytes: DEFAULT_SANITIZE_MAX_BYTES,
        }
    }
}

impl LogConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    /// Returns `DiagnosticsError::Config` for unrecognised values.
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns `DiagnosticsError::Config` for unrecognised values.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(mode) = lookup("SAMD_DIAG_LOG_MODE") {
            config.mode = mode.parse()?;
        }
        if let Some(file) = lookup("SAMD_DIAG_LOG_FILE").filter(|f| !f.trim().is_empty()) {
            config.file = PathBuf::from(file);
        }
        if let Some(filter) = lookup("SAMD_DIAG_LOG").or_else(|| lookup("RUST_LOG")) {
            EnvFilter::try_new(&filter).map_err(|e| {
                DiagnosticsError::Config(format!("invalid log filter {filter:?}: {e}"))
            })?;
            config.filter = filter;
        }
        if let Some(raw) = lookup("SAMD_DIAG_SANITIZE_MAX_BYTES") {
            config.sanitize_max_bytes = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&v| v > 0)
                .ok_or_else(|| {
                    DiagnosticsError::Config(format!(
                        "SAMD_DIAG_SANITIZE_MAX_BYTES must be a positive integer, got {raw:?}"
                    ))
                })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LogConfig::from_lookup(|_| None).expect("Defaults are valid");
        assert_eq!(config, LogConfig::default());
        assert!(!config.mode.uses_file());
    }

    #[test]
    fn test_overrides() {
        let config = LogConfig::from_lookup(lookup_from(&[
            ("SAMD_DIAG_LOG_MODE", "FILE"),
            ("SAMD_DIAG_LOG_FILE", "/tmp/diag.log"),
            ("RUST_LOG", "debug"),
            ("SAMD_DIAG_SANITIZE_MAX_BYTES", "4096"),
        ]))
        .expect("Should parse");

        assert_eq!(config.mode, LogMode::File);
        assert!(config.mode.uses_file());
        assert_eq!(config.file, PathBuf::from("/tmp/diag.log"));
        assert_eq!(config.filter, "debug");
        assert_eq!(config.sanitize_max_bytes, 4096);
    }

    #[test]
    fn test_specific_filter_wins_over_rust_log() {
        let config = LogConfig::from_lookup(lookup_from(&[
            ("SAMD_DIAG_LOG", "samd_diagnostics=trace"),
            ("RUST_LOG", "warn"),
        ]))
        .expect("Should parse");
        assert_eq!(config.filter, "samd_diagnostics=trace");
    }

    #[test]
    fn test_invalid_values() {
        let err = LogConfig::from_lookup(lookup_from(&[("SAMD_DIAG_LOG_MODE", "syslog")]))
            .expect_err("Unknown mode");
        assert!(matches!(err, DiagnosticsError::Config(_)));

        let err = LogConfig::from_lookup(lookup_from(&[("SAMD_DIAG_SANITIZE_MAX_BYTES", "0")]))
            .expect_err("Zero cap");
        assert!(matches!(err, DiagnosticsError::Config(_)));
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let err = LogConfig::from_lookup(lookup_from(&[("SAMD_DIAG_LOG", "samd_diagnostics=loud")]))
            .expect_err("Unknown level");
        assert!(matches!(err, DiagnosticsError::Config(_)));

        let err = LogConfig::from_lookup(lookup_from(&[("RUST_LOG", "samd_diagnostics=loud")]))
            .expect_err("Unknown level from RUST_LOG");
        assert!(matches!(err, DiagnosticsError::Config(_)));
    }

    #[test]
    fn test_stdout_is_not_a_log_mode() {
        assert_eq!("stderr".parse::<LogMode>().expect("Valid mode"), LogMode::Stderr);
        assert!("stdout".parse::<LogMode>().is_err());
    }
}
