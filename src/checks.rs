use std::collections::HashSet;

use crate::algorithms;
use crate::error::Result;
use crate::models::{DocumentConfig, GraphDocument, GraphDocumentPayload};
use crate::report::{Report, StructuralViolation};

/// One read-only structural check. Checks never abort the pipeline; each
/// appends every violation it finds so the report covers all problems at
/// once. Future checks (port compatibility, capacity positivity) slot in
/// here.
pub trait StructuralCheck {
    fn name(&self) -> &'static str;
    fn run(&self, document: &GraphDocument, violations: &mut Vec<StructuralViolation>);
}

/// Every node id must be unique within the document. A duplicated id is
/// still treated as known by the later checks.
pub struct UniquenessCheck;

impl StructuralCheck for UniquenessCheck {
    fn name(&self) -> &'static str {
        "node_id_uniqueness"
    }

    fn run(&self, document: &GraphDocument, violations: &mut Vec<StructuralViolation>) {
        let mut seen = HashSet::with_capacity(document.nodes.len());
        for node in &document.nodes {
            if !seen.insert(node.id.as_str()) {
                violations.push(StructuralViolation::DuplicateNodeId {
                    node_id: node.id.clone(),
                });
            }
        }
    }
}

/// Every edge endpoint must resolve to a node in the same document. Both
/// endpoints are checked independently, so one edge can produce two
/// violations.
pub struct ReferentialIntegrityCheck;

impl StructuralCheck for ReferentialIntegrityCheck {
    fn name(&self) -> &'static str {
        "edge_referential_integrity"
    }

    fn run(&self, document: &GraphDocument, violations: &mut Vec<StructuralViolation>) {
        let known: HashSet<&str> = document.nodes.iter().map(|node| node.id.as_str()).collect();
        for edge in &document.edges {
            if !known.contains(edge.source_node.as_str()) {
                violations.push(StructuralViolation::MissingSourceNode {
                    edge_id: edge.id.clone(),
                });
            }
            if !known.contains(edge.target_node.as_str()) {
                violations.push(StructuralViolation::MissingTargetNode {
                    edge_id: edge.id.clone(),
                });
            }
        }
    }
}

/// The node-level directed graph must be acyclic, self-loops included. At
/// most one violation per run: the pass/fail gate does not enumerate cycles.
pub struct AcyclicityCheck;

impl StructuralCheck for AcyclicityCheck {
    fn name(&self) -> &'static str {
        "acyclicity"
    }

    fn run(&self, document: &GraphDocument, violations: &mut Vec<StructuralViolation>) {
        if algorithms::has_cycle(document) {
            violations.push(StructuralViolation::CycleDetected);
        }
    }
}

/// The fixed pipeline, in diagnostic order.
pub fn default_pipeline() -> [&'static dyn StructuralCheck; 3] {
    [&UniquenessCheck, &ReferentialIntegrityCheck, &AcyclicityCheck]
}

/// Runs the full pipeline against an already-constructed document. Pure:
/// reads the document, returns the report, touches nothing else.
pub fn validate(document: &GraphDocument) -> Report {
    let mut violations = Vec::new();
    for check in default_pipeline() {
        check.run(document, &mut violations);
    }
    Report::from_violations(violations)
}

/// Convenience entry point for callers holding a raw payload: applies the
/// admission limits, shapes the document, then validates it.
pub fn validate_payload(payload: GraphDocumentPayload, config: &DocumentConfig) -> Result<Report> {
    tracing::debug!(
        graph_id = %payload.id,
        nodes = payload.nodes.len(),
        edges = payload.edges.len(),
        "validating graph document"
    );
    let document = GraphDocument::from_payload(payload, config)?;
    Ok(validate(&document))
}
