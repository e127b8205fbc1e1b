use anyhow::anyhow;
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::algorithms::{self, AdjacencyIndex};
use crate::error::{LibError, Result};

/// Throughput bound applied to edges that do not carry their own.
pub const DEFAULT_EDGE_CAPACITY: u32 = 1024;

/// Backpressure policy applied to edges that do not carry their own.
pub const DEFAULT_EDGE_POLICY: EdgePolicy = EdgePolicy::Block;

pub const DEFAULT_MAX_NODES: usize = 10_000;
pub const DEFAULT_MAX_EDGES: usize = 50_000;

/// Backpressure behavior an edge exhibits when its capacity is exceeded.
/// Carried verbatim through validation, never enforced by it. The wire
/// spellings are historical and preserved exactly, including the lowercase
/// `buffer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EdgePolicy {
    #[default]
    #[serde(rename = "BLOCK")]
    Block,
    #[serde(rename = "DROP")]
    Drop,
    #[serde(rename = "buffer")]
    Buffer,
}

impl EdgePolicy {
    pub const fn as_wire_value(self) -> &'static str {
        match self {
            EdgePolicy::Block => "BLOCK",
            EdgePolicy::Drop => "DROP",
            EdgePolicy::Buffer => "buffer",
        }
    }

    pub fn from_wire_value(value: &str) -> Option<Self> {
        match value {
            "BLOCK" => Some(EdgePolicy::Block),
            "DROP" => Some(EdgePolicy::Drop),
            "buffer" => Some(EdgePolicy::Buffer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Node shape as it arrives from the calling layer.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// Edge shape as it arrives from the calling layer. Capacity, policy, and
/// priority are optional on the wire; defaults come from [`DocumentConfig`].
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeDefinition {
    pub id: String,
    pub source_node: String,
    pub source_port: String,
    pub target_node: String,
    pub target_port: String,
    pub capacity: Option<u32>,
    pub policy: Option<EdgePolicy>,
    pub priority: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source_node: String,
    pub source_port: String,
    pub target_node: String,
    pub target_port: String,
    pub capacity: u32,
    pub policy: EdgePolicy,
    pub priority: i64,
}

/// Full document envelope as submitted by the calling layer. The envelope
/// fields are carried untouched; validation reads only `nodes` and `edges`.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphDocumentPayload {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub nodes: Vec<NodeDefinition>,
    #[serde(default)]
    pub edges: Vec<EdgeDefinition>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Admission limits and edge defaults applied at document construction.
#[derive(Debug, Clone)]
pub struct DocumentConfig {
    pub max_nodes: usize,
    pub max_edges: usize,
    pub default_capacity: u32,
    pub default_policy: EdgePolicy,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            max_edges: DEFAULT_MAX_EDGES,
            default_capacity: DEFAULT_EDGE_CAPACITY,
            default_policy: DEFAULT_EDGE_POLICY,
        }
    }
}

/// Normalized, read-only view of one graph document. Built fresh per
/// validation request and never mutated afterwards; the adjacency index is
/// derived once, on first use by the cycle check.
#[derive(Debug, Clone, Serialize)]
pub struct GraphDocument {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub metadata: Map<String, Value>,
    pub tags: Vec<String>,
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    adjacency: OnceCell<AdjacencyIndex>,
}

impl GraphDocument {
    /// Shapes a payload into a document. Duplicate ids and dangling edge
    /// references are findings for the check pipeline, never construction
    /// errors; construction fails only on inputs that cannot be shaped at
    /// all or that exceed the configured admission limits.
    pub fn from_payload(payload: GraphDocumentPayload, config: &DocumentConfig) -> Result<Self> {
        if payload.nodes.len() > config.max_nodes {
            return Err(LibError::too_large(
                "Graph has too many nodes",
                anyhow!(
                    "{} nodes exceeds limit of {}",
                    payload.nodes.len(),
                    config.max_nodes
                ),
            ));
        }
        if payload.edges.len() > config.max_edges {
            return Err(LibError::too_large(
                "Graph has too many edges",
                anyhow!(
                    "{} edges exceeds limit of {}",
                    payload.edges.len(),
                    config.max_edges
                ),
            ));
        }

        let nodes = shape_nodes(payload.nodes)?;
        let edges = shape_edges(payload.edges, config)?;

        Ok(Self {
            id: payload.id,
            name: payload.name,
            description: payload.description,
            nodes,
            edges,
            metadata: payload.metadata,
            tags: payload.tags,
            is_public: payload.is_public,
            created_at: payload.created_at,
            updated_at: payload.updated_at,
            adjacency: OnceCell::new(),
        })
    }

    /// Node-id reachability index, built from edges whose endpoints both
    /// resolve. Dangling edges are excluded here; they already surface as
    /// referential-integrity findings.
    pub fn adjacency(&self) -> &AdjacencyIndex {
        self.adjacency
            .get_or_init(|| algorithms::adjacency_index(self))
    }
}

fn shape_nodes(nodes: Vec<NodeDefinition>) -> Result<Vec<GraphNode>> {
    let mut output = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.id.trim().is_empty() {
            return Err(LibError::malformed(
                "Node id is required",
                anyhow!("node {:?} has a blank id", node.name),
            ));
        }

        output.push(GraphNode {
            id: node.id,
            node_type: node.node_type,
            name: node.name,
            position: node.position,
            properties: node.properties,
        });
    }

    Ok(output)
}

fn shape_edges(edges: Vec<EdgeDefinition>, config: &DocumentConfig) -> Result<Vec<GraphEdge>> {
    let mut output = Vec::with_capacity(edges.len());
    for edge in edges {
        if edge.id.trim().is_empty() {
            return Err(LibError::malformed(
                "Edge id is required",
                anyhow!(
                    "edge {} -> {} has a blank id",
                    edge.source_node,
                    edge.target_node
                ),
            ));
        }

        output.push(GraphEdge {
            id: edge.id,
            source_node: edge.source_node,
            source_port: edge.source_port,
            target_node: edge.target_node,
            target_port: edge.target_port,
            capacity: edge.capacity.unwrap_or(config.default_capacity),
            policy: edge.policy.unwrap_or(config.default_policy),
            priority: edge.priority.unwrap_or(0),
        });
    }

    Ok(output)
}
