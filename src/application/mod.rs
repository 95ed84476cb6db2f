//! Application layer: Use cases and services.
//!
//! This module runs domain checks through the `DiagnosticCheck` port and
//! records each evaluation in the structured log.

mod diagnostics;

pub use diagnostics::{run_diagnostics, DiagnosticService};
