pub mod algorithms;
pub mod checks;
pub mod error;
pub mod models;
pub mod report;

pub mod prelude {
    pub use crate::algorithms::{AdjacencyIndex, has_cycle};
    pub use crate::checks::{
        AcyclicityCheck, ReferentialIntegrityCheck, StructuralCheck, UniquenessCheck,
        default_pipeline, validate, validate_payload,
    };
    pub use crate::error::{ErrorKind, LibError, Result};
    pub use crate::models::{
        DEFAULT_EDGE_CAPACITY, DEFAULT_EDGE_POLICY, DocumentConfig, EdgeDefinition, EdgePolicy,
        GraphDocument, GraphDocumentPayload, GraphEdge, GraphNode, NodeDefinition, Position,
    };
    pub use crate::report::{Finding, Report, StructuralViolation};
}
