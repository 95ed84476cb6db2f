//! Diagnostic result record.
//!
//! `ok == true` always comes with no reason; `ok == false` always carries a
//! reason code. Fields are private so the pairing cannot be broken.

use serde::Serialize;

use super::trace::RequirementId;

/// Machine-readable reason for a failed diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// Required `pressure_kpa` field absent
    MissingPressure,
    /// `pressure_kpa` present but not numeric
    BadPressureValue,
    /// Pressure above the limit
    PressureHigh,
}

impl ReasonCode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingPressure => "missing_pressure",
            Self::BadPressureValue => "bad_pressure_value",
            Self::PressureHigh => "pressure_high",
        }
    }

    /// Requirement this failure enforces.
    #[must_use]
    pub fn requirement(&self) -> RequirementId {
        match self {
            Self::MissingPressure | Self::BadPressureValue => RequirementId::Diag02,
            Self::PressureHigh => RequirementId::Diag01,
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single diagnostic evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiagnosticResult {
    ok: bool,
    reason: Option<ReasonCode>,
    req: RequirementId,
}

impl DiagnosticResult {
    /// A passing result attributed to `req`.
    #[must_use]
    pub fn pass(req: RequirementId) -> Self {
        Self {
            ok: true,
            reason: None,
            req,
        }
    }

    /// A failing result; the requirement follows from the reason.
    #[must_use]
    pub fn fail(reason: ReasonCode) -> Self {
        Self {
            ok: false,
            reason: Some(reason),
            req: reason.requirement(),
        }
    }

    #[must_use]
    pub fn ok(&self) -> bool {
        self.ok
    }

    #[must_use]
    pub fn reason(&self) -> Option<ReasonCode> {
        self.reason
    }

    #[must_use]
    pub fn req(&self) -> RequirementId {
        self.req
    }

    /// Serialize to the JSON record form.
    ///
    /// # Errors
    /// Propagates `serde_json` errors (not expected for this type).
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
