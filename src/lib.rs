//! # samd-diagnostics
//!
//! Traceable pressure diagnostic for a regulated-software (SaMD) sample.
//!
//! This crate provides:
//! - A pure pressure check returning a structured result record
//! - Requirement / risk-control / test traceability modelled as data
//! - Sanitized structured logging for diagnostic evaluations
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Input and result records, reason codes, traceability, the pressure check
//! - `ports`: Trait definitions for diagnostic checks
//! - `application`: Services running checks and logging their outcome
//! - `adapters`: Log sanitization for the tracing subscriber
//! - `config`: Environment-driven logging configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::{run_diagnostics, DiagnosticService};
pub use domain::{DiagnosticResult, InputRecord, ReasonCode, RequirementId, PRESSURE_LIMIT_KPA};

/// Result type for crate operations that can fail outside of a diagnostic.
pub type Result<T> = std::result::Result<T, DiagnosticsError>;

/// Errors that are not diagnostic outcomes.
///
/// A failed diagnostic is a successful `DiagnosticResult` with `ok == false`;
/// these variants cover malformed input text, configuration and I/O.
#[derive(Debug, thiserror::Error)]
pub enum DiagnosticsError {
    #[error("Input record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
