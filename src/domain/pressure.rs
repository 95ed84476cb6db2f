//! Pressure threshold diagnostic.
//!
//! REQ-DIAG-01: flag pressure above `PRESSURE_LIMIT_KPA`.
//! REQ-DIAG-02: reject records with a missing or non-numeric pressure.
//! RISK-CTRL-55: inputs are validated before the comparison.

use super::outcome::{DiagnosticResult, ReasonCode};
use super::record::{coerce_f64, InputRecord};
use super::trace::RequirementId;

/// Upper pressure limit in kPa. Values strictly above it are flagged.
pub const PRESSURE_LIMIT_KPA: f64 = 200.0;

/// Field consumed by the check.
pub const PRESSURE_FIELD: &str = "pressure_kpa";

/// Stateless pressure check.
#[derive(Debug, Clone, Copy, Default)]
pub struct PressureCheck;

impl PressureCheck {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a record. Never fails; problems are reported in the result.
    #[must_use]
    pub fn evaluate(&self, record: &InputRecord) -> DiagnosticResult {
        let Some(raw) = record.get(PRESSURE_FIELD) else {
            return DiagnosticResult::fail(ReasonCode::MissingPressure);
        };

        let pressure = match coerce_f64(raw) {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!(error = %e, "pressure value rejected");
                return DiagnosticResult::fail(ReasonCode::BadPressureValue);
            }
        };

        if pressure > PRESSURE_LIMIT_KPA {
            return DiagnosticResult::fail(ReasonCode::PressureHigh);
        }

        DiagnosticResult::pass(RequirementId::Diag01)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(value: serde_json::Value) -> DiagnosticResult {
        PressureCheck::new().evaluate(&InputRecord::new().with(PRESSURE_FIELD, value))
    }

    // TEST-DIAG-01 covers REQ-DIAG-01
    #[test]
    fn test_ok_pressure() {
        let result = check(json!(150.0));
        assert!(result.ok());
        assert!(result.reason().is_none());
        assert_eq!(result.req(), RequirementId::Diag01);
    }

    // TEST-DIAG-02 covers REQ-DIAG-02
    #[test]
    fn test_missing_pressure() {
        let result = PressureCheck::new().evaluate(&InputRecord::new());
        assert!(!result.ok());
        assert_eq!(result.reason(), Some(ReasonCode::MissingPressure));
        assert_eq!(result.req(), RequirementId::Diag02);
    }

    // TEST-DIAG-03 covers REQ-DIAG-01
    #[test]
    fn test_high_pressure_flags() {
        let result = check(json!(250.0));
        assert!(!result.ok());
        assert_eq!(result.reason(), Some(ReasonCode::PressureHigh));
        assert_eq!(result.req(), RequirementId::Diag01);
    }

    // TEST-DIAG-04 covers REQ-DIAG-02
    #[test]
    fn test_bad_pressure_value() {
        for bad in [json!("abc"), json!(null), json!([150.0]), json!("")] {
            let result = check(bad);
            assert!(!result.ok());
            assert_eq!(result.reason(), Some(ReasonCode::BadPressureValue));
            assert_eq!(result.req(), RequirementId::Diag02);
        }
    }

    // TEST-DIAG-05 covers REQ-DIAG-01
    #[test]
    fn test_limit_is_inclusive() {
        assert!(check(json!(PRESSURE_LIMIT_KPA)).ok());
        assert!(!check(json!(200.000_001)).ok());
    }

    #[test]
    fn test_nan_converts_and_passes() {
        let result = check(json!("nan"));
        assert!(result.ok());
        assert!(result.reason().is_none());
        assert_eq!(result.req(), RequirementId::Diag01);
    }

    #[test]
    fn test_numeric_strings_are_compared() {
        assert!(check(json!("150")).ok());
        assert_eq!(check(json!(" 250.5 ")).reason(), Some(ReasonCode::PressureHigh));
        assert_eq!(check(json!("inf")).reason(), Some(ReasonCode::PressureHigh));
        assert!(check(json!(-10)).ok());
    }

    #[test]
    fn test_other_fields_are_ignored() {
        let record = InputRecord::new()
            .with(PRESSURE_FIELD, 120.0)
            .with("temperature_c", "not a number")
            .with("patient", json!({"id": 7}));
        assert!(PressureCheck::new().evaluate(&record).ok());

        let without = InputRecord::new().with("pressure", 120.0);
        assert_eq!(
            PressureCheck::new().evaluate(&without).reason(),
            Some(ReasonCode::MissingPressure)
        );
    }
}
