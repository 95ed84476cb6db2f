//! Adapters layer: Integrations with external libraries.
//!
//! - `sanitize`: patient-identifier redaction for `tracing-subscriber` output
//! - `logging`: subscriber setup driven by `LogConfig`

pub mod logging;
pub mod sanitize;
