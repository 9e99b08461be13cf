//! Phase 3 tests: CLI command layer.

use adjgraph::cli::commands::{build_graph, cmd_display, cmd_stats, cmd_traverse};
use adjgraph::graph::TraversalOrder;
use adjgraph::types::GraphError;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn run<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> adjgraph::GraphResult<()>,
{
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_default_graph_is_demo() {
    let graph = build_graph(false, &[], &[]).unwrap();
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 8);
    let out = run(|o| cmd_traverse(&graph, TraversalOrder::Bfs, "A", false, o));
    assert_eq!(out, "A D E F C B\n");
}

#[test]
fn test_default_graph_directed() {
    let graph = build_graph(true, &[], &[]).unwrap();
    assert!(graph.is_directed());
    let out = run(|o| cmd_traverse(&graph, TraversalOrder::Dfs, "D", false, o));
    assert_eq!(out, "D E F\n");
}

#[test]
fn test_edges_from_args() {
    let graph = build_graph(false, &args(&["solo"]), &args(&["x:y", "y:z"])).unwrap();
    let out = run(|o| cmd_display(&graph, false, o));
    assert_eq!(out, "solo-->[]\nx-->[y]\ny-->[x, z]\nz-->[y]\n");
}

#[test]
fn test_invalid_edge_spec() {
    match build_graph(false, &[], &args(&["A-B"])) {
        Err(GraphError::InvalidEdgeSpec(spec)) => assert_eq!(spec, "A-B"),
        other => panic!("Expected InvalidEdgeSpec, got {:?}", other.map(|g| g.to_string())),
    }
}

#[test]
fn test_traverse_unknown_start() {
    let graph = build_graph(false, &[], &[]).unwrap();
    let mut buf = Vec::new();
    let result = cmd_traverse(&graph, TraversalOrder::LevelOrder, "Q", false, &mut buf);
    assert!(matches!(result, Err(GraphError::VertexNotFound(_))));
    assert!(buf.is_empty());
}

#[test]
fn test_traverse_json() {
    let graph = build_graph(false, &[], &[]).unwrap();
    let out = run(|o| cmd_traverse(&graph, TraversalOrder::Dfs, "A", true, o));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["order"], "dfs");
    assert_eq!(value["start"], "A");
    assert_eq!(
        value["visited"],
        serde_json::json!(["A", "B", "D", "C", "F", "E"])
    );
}

#[test]
fn test_display_json() {
    let graph = build_graph(true, &[], &args(&["a:b"])).unwrap();
    let out = run(|o| cmd_display(&graph, true, o));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"vertex": "a", "neighbors": ["b"]},
            {"vertex": "b", "neighbors": []},
        ])
    );
}

#[test]
fn test_stats_text_and_json() {
    let graph = build_graph(false, &[], &args(&["A:A"])).unwrap();
    let text = run(|o| cmd_stats(&graph, false, o));
    assert_eq!(
        text,
        "Kind: undirected\nVertices: 1\nEdges: 1\nNeighbor entries: 2\n"
    );

    let out = run(|o| cmd_stats(&graph, true, o));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["directed"], false);
    assert_eq!(value["neighbor_entries"], 2);
}
