//! Criterion benchmarks for adjgraph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use adjgraph::graph::AdjacencyGraph;

/// Build a large random graph.
fn make_large_graph(
    vertex_count: u32,
    edges_per_vertex: usize,
    directed: bool,
) -> AdjacencyGraph<u32> {
    let mut rng = rand::thread_rng();
    let mut graph = AdjacencyGraph::new(directed);
    for v in 0..vertex_count {
        graph.add_vertex(v);
    }
    for v in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            graph.add_edge(v, rng.gen_range(0..vertex_count));
        }
    }
    graph
}

fn bench_insertion(c: &mut Criterion) {
    c.bench_function("add_edge_10k_x4", |b| {
        b.iter(|| make_large_graph(10_000, 4, false))
    });
}

fn bench_traversals(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 4, false);

    c.bench_function("bfs_100k", |b| b.iter(|| graph.bfs(black_box(&0)).unwrap()));
    c.bench_function("level_order_100k", |b| {
        b.iter(|| graph.level_order(black_box(&0)).unwrap())
    });
    c.bench_function("dfs_100k", |b| b.iter(|| graph.dfs(black_box(&0)).unwrap()));
}

criterion_group!(benches, bench_insertion, bench_traversals);
criterion_main!(benches);
