//! Diagnostic check port.

use crate::domain::{DiagnosticResult, InputRecord, PressureCheck, RequirementId};

/// Trait for a single diagnostic check.
///
/// Implementations must be total: every record yields a `DiagnosticResult`,
/// and invalid input is reported through `ok == false` rather than an error.
pub trait DiagnosticCheck: Send + Sync {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Requirements this check can report against.
    fn requirements(&self) -> &'static [RequirementId];

    /// Evaluate one input record.
    fn evaluate(&self, record: &InputRecord) -> DiagnosticResult;
}

impl DiagnosticCheck for PressureCheck {
    fn name(&self) -> &'static str {
        "pressure"
    }

    fn requirements(&self) -> &'static [RequirementId] {
        &RequirementId::ALL
    }

    fn evaluate(&self, record: &InputRecord) -> DiagnosticResult {
        PressureCheck::evaluate(self, record)
    }
}
