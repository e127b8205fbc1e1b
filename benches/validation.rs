use std::collections::HashSet;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::Map;

use meridian_graph::checks::{validate, validate_payload};
use meridian_graph::models::{
    DocumentConfig, EdgeDefinition, GraphDocument, GraphDocumentPayload, NodeDefinition, Position,
};

fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    *state
}

fn node(id: String) -> NodeDefinition {
    NodeDefinition {
        id,
        node_type: "task".to_string(),
        name: "N".to_string(),
        position: Position { x: 0.0, y: 0.0 },
        properties: Map::new(),
    }
}

fn edge(id: String, source: String, target: String) -> EdgeDefinition {
    EdgeDefinition {
        id,
        source_node: source,
        source_port: "out".to_string(),
        target_node: target,
        target_port: "in".to_string(),
        capacity: None,
        policy: None,
        priority: None,
    }
}

fn synthetic_dag(node_count: usize, edge_count: usize) -> GraphDocumentPayload {
    let nodes = (0..node_count)
        .map(|idx| node(format!("n{idx}")))
        .collect::<Vec<_>>();

    let mut state = 0x1234_5678_9abc_def0u64;
    let mut seen = HashSet::with_capacity(edge_count);
    let mut edges = Vec::with_capacity(edge_count);
    while edges.len() < edge_count {
        let a = (lcg_next(&mut state) as usize) % node_count;
        let b = (lcg_next(&mut state) as usize) % node_count;
        if a == b {
            continue;
        }
        let (from, to) = if a < b { (a, b) } else { (b, a) };
        if seen.insert((from, to)) {
            edges.push(edge(
                format!("e{}", edges.len()),
                format!("n{from}"),
                format!("n{to}"),
            ));
        }
    }

    GraphDocumentPayload {
        id: "bench".to_string(),
        name: "Bench".to_string(),
        description: None,
        nodes,
        edges,
        metadata: Map::new(),
        tags: Vec::new(),
        is_public: false,
        created_at: None,
        updated_at: None,
    }
}

fn bench_validate_payload(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_payload");
    let config = DocumentConfig::default();
    for (nodes, edges) in [(1_000usize, 3_000usize), (3_000usize, 9_000usize)] {
        let payload = synthetic_dag(nodes, edges);

        group.throughput(Throughput::Elements((nodes + edges) as u64));
        group.bench_with_input(
            BenchmarkId::new("dag", format!("{nodes}n_{edges}e")),
            &payload,
            |b, payload| {
                b.iter(|| black_box(validate_payload(payload.clone(), &config)));
            },
        );
    }
    group.finish();
}

fn bench_validate_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_document");
    let config = DocumentConfig::default();
    for (nodes, edges) in [(1_000usize, 3_000usize), (3_000usize, 9_000usize)] {
        let document = GraphDocument::from_payload(synthetic_dag(nodes, edges), &config)
            .expect("synthetic payload should shape");
        // Touch the lazy adjacency index up front so the loop measures the
        // checks alone.
        let _ = document.adjacency();

        group.throughput(Throughput::Elements((nodes + edges) as u64));
        group.bench_with_input(
            BenchmarkId::new("dag", format!("{nodes}n_{edges}e")),
            &document,
            |b, document| {
                b.iter(|| black_box(validate(document)));
            },
        );
    }
    group.finish();
}

criterion_group!(validation, bench_validate_payload, bench_validate_document);
criterion_main!(validation);
