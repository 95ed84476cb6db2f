//! Requirement, risk-control and test traceability.
//!
//! Identifiers follow the `REQ-*`, `RISK-CTRL-*` and `TEST-*` conventions used
//! in regulated software documentation. Result records carry the requirement
//! they enforce; the matrix below ties requirements to risk controls and tests.

use serde::{Deserialize, Serialize};

/// Software requirement enforced by a diagnostic outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RequirementId {
    /// Flag high pressure above the limit.
    #[serde(rename = "REQ-DIAG-01")]
    Diag01,
    /// Reject inputs missing required fields.
    #[serde(rename = "REQ-DIAG-02")]
    Diag02,
}

impl RequirementId {
    pub const ALL: [RequirementId; 2] = [Self::Diag01, Self::Diag02];

    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Self::Diag01 => "REQ-DIAG-01",
            Self::Diag02 => "REQ-DIAG-02",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Diag01 => "Flag high pressure > 200 kPa",
            Self::Diag02 => "Reject inputs missing required fields",
        }
    }
}

impl std::fmt::Display for RequirementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A risk control and the requirements that implement it.
#[derive(Debug, Clone, Serialize)]
pub struct RiskControl {
    pub id: &'static str,
    pub description: &'static str,
    pub implemented_by: &'static [RequirementId],
}

/// A verification test and the requirement it covers.
#[derive(Debug, Clone, Serialize)]
pub struct TestCase {
    pub id: &'static str,
    pub description: &'static str,
    pub covers: RequirementId,
}

/// Input validation guarding against misdiagnosis.
pub const RISK_CTRL_55: RiskControl = RiskControl {
    id: "RISK-CTRL-55",
    description: "Validate inputs to avoid misdiagnosis",
    implemented_by: &[RequirementId::Diag02],
};

const TEST_CASES: [TestCase; 5] = [
    TestCase {
        id: "TEST-DIAG-01",
        description: "Pressure within limit passes",
        covers: RequirementId::Diag01,
    },
    TestCase {
        id: "TEST-DIAG-02",
        description: "Missing pressure is rejected",
        covers: RequirementId::Diag02,
    },
    TestCase {
        id: "TEST-DIAG-03",
        description: "Pressure above limit is flagged",
        covers: RequirementId::Diag01,
    },
    TestCase {
        id: "TEST-DIAG-04",
        description: "Non-numeric pressure is rejected",
        covers: RequirementId::Diag02,
    },
    TestCase {
        id: "TEST-DIAG-05",
        description: "Pressure exactly at limit passes",
        covers: RequirementId::Diag01,
    },
];

/// Traceability matrix linking requirements, risk controls and tests.
#[derive(Debug, Clone, Serialize)]
pub struct TraceMatrix {
    pub requirements: Vec<RequirementId>,
    pub risk_controls: Vec<RiskControl>,
    pub tests: Vec<TestCase>,
}

impl TraceMatrix {
    /// The matrix for the pressure diagnostic.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            requirements: RequirementId::ALL.to_vec(),
            risk_controls: vec![RISK_CTRL_55],
            tests: TEST_CASES.to_vec(),
        }
    }

    /// Tests covering the given requirement.
    pub fn tests_for(&self, req: RequirementId) -> impl Iterator<Item = &TestCase> {
        self.tests.iter().filter(move |t| t.covers == req)
    }

    /// Requirements with no covering test.
    #[must_use]
    pub fn uncovered_requirements(&self) -> Vec<RequirementId> {
        self.requirements
            .iter()
            .copied()
            .filter(|req| self.tests_for(*req).next().is_none())
            .collect()
    }

    /// Risk controls referencing a requirement absent from the matrix,
    /// or implemented by no requirement at all.
    #[must_use]
    pub fn dangling_risk_controls(&self) -> Vec<&'static str> {
        self.risk_controls
            .iter()
            .filter(|rc| {
                rc.implemented_by.is_empty()
                    || rc
                        .implemented_by
                        .iter()
                        .any(|req| !self.requirements.contains(req))
            })
            .map(|rc| rc.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_ids_serialize_as_tags() {
        let json = serde_json::to_string(&RequirementId::Diag02).expect("Should serialize");
        assert_eq!(json, "\"REQ-DIAG-02\"");
        assert_eq!(RequirementId::Diag01.to_string(), "REQ-DIAG-01");
    }

    #[test]
    fn test_standard_matrix_is_complete() {
        let matrix = TraceMatrix::standard();
        assert!(matrix.uncovered_requirements().is_empty());
        assert!(matrix.dangling_risk_controls().is_empty());
        assert_eq!(matrix.tests_for(RequirementId::Diag01).count(), 3);
        assert_eq!(matrix.tests_for(RequirementId::Diag02).count(), 2);
    }

    #[test]
    fn test_gaps_are_reported() {
        let mut matrix = TraceMatrix::standard();
        matrix.tests.retain(|t| t.covers != RequirementId::Diag02);
        assert_eq!(matrix.uncovered_requirements(), vec![RequirementId::Diag02]);

        matrix.requirements.retain(|r| *r != RequirementId::Diag02);
        assert_eq!(matrix.dangling_risk_controls(), vec!["RISK-CTRL-55"]);
    }

    #[test]
    fn test_test_ids_are_unique() {
        let matrix = TraceMatrix::standard();
        let mut ids: Vec<&str> = matrix.tests.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), matrix.tests.len());
    }
}
