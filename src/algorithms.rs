use std::collections::HashMap;

use crate::models::GraphDocument;

/// Node-id reachability derived from a document's edges. Nodes are addressed
/// by document-order index; a duplicated id resolves to its first occurrence.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    ids: Vec<String>,
    index_of: HashMap<String, usize>,
    out_neighbors: Vec<Vec<usize>>,
}

impl AdjacencyIndex {
    pub fn node_index(&self, node_id: &str) -> Option<usize> {
        self.index_of.get(node_id).copied()
    }

    pub fn neighbors_by_index(&self, index: usize) -> &[usize] {
        self.out_neighbors
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ordered ids directly reachable from `node_id` via one outgoing edge.
    pub fn neighbor_ids(&self, node_id: &str) -> Option<Vec<&str>> {
        let index = self.node_index(node_id)?;
        Some(
            self.neighbors_by_index(index)
                .iter()
                .map(|&neighbor| self.ids[neighbor].as_str())
                .collect(),
        )
    }
}

pub(crate) fn adjacency_index(document: &GraphDocument) -> AdjacencyIndex {
    let mut ids = Vec::with_capacity(document.nodes.len());
    let mut index_of = HashMap::with_capacity(document.nodes.len());
    let mut out_neighbors = vec![Vec::new(); document.nodes.len()];

    for (index, node) in document.nodes.iter().enumerate() {
        ids.push(node.id.clone());
        index_of.entry(node.id.clone()).or_insert(index);
    }

    for edge in &document.edges {
        // Skip dangling edges instead of failing the whole computation; they
        // already surface as referential-integrity findings.
        let (Some(source), Some(target)) = (
            index_of.get(edge.source_node.as_str()).copied(),
            index_of.get(edge.target_node.as_str()).copied(),
        ) else {
            continue;
        };
        out_neighbors[source].push(target);
    }

    AdjacencyIndex {
        ids,
        index_of,
        out_neighbors,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Cycle detection over node reachability: depth-first from every node in
/// document order, white/gray/black coloring, explicit stack. Input depth is
/// untrusted, so native recursion is off the table. A self-loop is a cycle
/// of length 1 and falls out of the same traversal.
pub fn has_cycle(document: &GraphDocument) -> bool {
    let adjacency = document.adjacency();
    let node_count = document.nodes.len();
    let mut color = vec![Color::White; node_count];
    // (node index, position of the next out-neighbor to descend into)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..node_count {
        if color[root] != Color::White {
            continue;
        }
        color[root] = Color::Gray;
        stack.push((root, 0));

        while let Some((node, cursor)) = stack.pop() {
            let neighbors = adjacency.neighbors_by_index(node);
            if let Some(&next) = neighbors.get(cursor) {
                stack.push((node, cursor + 1));
                match color[next] {
                    Color::Gray => return true,
                    Color::White => {
                        color[next] = Color::Gray;
                        stack.push((next, 0));
                    }
                    Color::Black => {}
                }
            } else {
                color[node] = Color::Black;
            }
        }
    }

    false
}
