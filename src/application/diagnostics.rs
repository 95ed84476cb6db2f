//! Diagnostic service: runs a check and records the outcome.

use std::sync::Arc;

use crate::domain::{DiagnosticResult, InputRecord, PressureCheck};
use crate::ports::DiagnosticCheck;

/// Run the pressure diagnostic on a record.
///
/// Missing or non-numeric `pressure_kpa` and pressure above the limit are
/// all reported as `ok == false` with a reason code; this never panics.
#[must_use]
pub fn run_diagnostics(record: &InputRecord) -> DiagnosticResult {
    DiagnosticService::new(Arc::new(PressureCheck::new())).run(record)
}

/// Service for running a diagnostic check with structured logging.
pub struct DiagnosticService<C>
where
    C: DiagnosticCheck,
{
    check: Arc<C>,
}

impl<C> Clone for DiagnosticService<C>
where
    C: DiagnosticCheck,
{
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<C> DiagnosticService<C>
where
    C: DiagnosticCheck,
{
    /// Create a new diagnostic service.
    pub fn new(check: Arc<C>) -> Self {
        Self { check }
    }

    /// Evaluate a record and log the outcome.
    pub fn run(&self, record: &InputRecord) -> DiagnosticResult {
        let result = self.check.evaluate(record);

        tracing::info!(
            check = self.check.name(),
            ok = result.ok(),
            reason = result.reason().map(|r| r.as_str()),
            req = %result.req(),
            "diagnostic evaluated"
        );

        result
    }

    /// Parse a JSON object and evaluate it.
    ///
    /// # Errors
    /// Returns error if the text is not a JSON object. A record that parses
    /// but fails the check is still `Ok`.
    pub fn run_json(&self, text: &str) -> crate::Result<DiagnosticResult> {
        let record = InputRecord::from_json(text).map_err(|e| {
            tracing::warn!(check = self.check.name(), "rejected input record: {e}");
            e
        })?;
        Ok(self.run(&record))
    }

    /// Evaluate several records in order.
    pub fn run_all<'a, I>(&self, records: I) -> Vec<DiagnosticResult>
    where
        I: IntoIterator<Item = &'a InputRecord>,
    {
        records.into_iter().map(|r| self.run(r)).collect()
    }

    /// Requirements the underlying check reports against.
    #[must_use]
    pub fn requirements(&self) -> &'static [crate::domain::RequirementId] {
        self.check.requirements()
    }
}
