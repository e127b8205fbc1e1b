use serde::Serialize;

/// Typed outcome of one structural check, carrying the offending ids.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StructuralViolation {
    DuplicateNodeId { node_id: String },
    MissingSourceNode { edge_id: String },
    MissingTargetNode { edge_id: String },
    CycleDetected,
}

impl StructuralViolation {
    pub fn location(&self) -> String {
        match self {
            StructuralViolation::DuplicateNodeId { node_id } => format!("node:{node_id}"),
            StructuralViolation::MissingSourceNode { edge_id }
            | StructuralViolation::MissingTargetNode { edge_id } => format!("edge:{edge_id}"),
            StructuralViolation::CycleDetected => "graph".to_string(),
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            StructuralViolation::DuplicateNodeId { .. } => "Duplicate node id",
            StructuralViolation::MissingSourceNode { .. } => "Missing source node",
            StructuralViolation::MissingTargetNode { .. } => "Missing target node",
            StructuralViolation::CycleDetected => "Cycle detected",
        }
    }

    pub fn to_finding(&self) -> Finding {
        Finding {
            location: self.location(),
            message: self.message().to_string(),
        }
    }
}

/// One located, human-readable validation problem.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Finding {
    pub location: String,
    pub message: String,
}

/// Complete output of one validation run. `valid` holds exactly when no
/// check produced a finding; findings keep the order the pipeline produced
/// them in. Serializes as `{ "valid": ..., "errors": [...] }`, the shape the
/// HTTP layer returns.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Report {
    pub valid: bool,
    #[serde(rename = "errors")]
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn from_violations(violations: Vec<StructuralViolation>) -> Self {
        let findings = violations
            .iter()
            .map(StructuralViolation::to_finding)
            .collect::<Vec<_>>();
        Self {
            valid: findings.is_empty(),
            findings,
        }
    }
}
