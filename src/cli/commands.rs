//! CLI command implementations.

use std::io::Write;

use crate::graph::{AdjacencyGraph, TraversalOrder, DEMO_EDGES};
use crate::types::{parse_edge_spec, GraphError, GraphResult};

/// Build the graph described on the command line.
///
/// With no vertices and no edges the demo graph's edges are used, with the
/// requested directedness.
pub fn build_graph(
    directed: bool,
    vertices: &[String],
    edge_specs: &[String],
) -> GraphResult<AdjacencyGraph<String>> {
    let mut graph = AdjacencyGraph::new(directed);

    if vertices.is_empty() && edge_specs.is_empty() {
        log::debug!("no vertices or edges given, using demo graph");
        for (src, dest) in DEMO_EDGES {
            graph.add_edge(src.to_string(), dest.to_string());
        }
        return Ok(graph);
    }

    for vertex in vertices {
        graph.add_vertex(vertex.clone());
    }
    for spec in edge_specs {
        let (src, dest) =
            parse_edge_spec(spec).ok_or_else(|| GraphError::InvalidEdgeSpec(spec.clone()))?;
        graph.add_edge(src, dest);
    }
    Ok(graph)
}

/// Print the adjacency listing.
pub fn cmd_display<W: Write>(
    graph: &AdjacencyGraph<String>,
    json: bool,
    out: &mut W,
) -> GraphResult<()> {
    if json {
        let entries: Vec<serde_json::Value> = graph
            .vertices()
            .map(|v| {
                let neighbors: Vec<&String> =
                    graph.neighbors(v).map(|n| n.collect()).unwrap_or_default();
                serde_json::json!({
                    "vertex": v,
                    "neighbors": neighbors,
                })
            })
            .collect();
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_default()
        )?;
    } else {
        graph.write_adjacency(out)?;
    }
    Ok(())
}

/// Run a traversal from `start` and print the visit sequence.
pub fn cmd_traverse<W: Write>(
    graph: &AdjacencyGraph<String>,
    order: TraversalOrder,
    start: &str,
    json: bool,
    out: &mut W,
) -> GraphResult<()> {
    let result = graph.traverse(order, &start.to_string())?;

    if json {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        )?;
    } else {
        writeln!(out, "{}", result.to_line())?;
    }
    Ok(())
}

/// Print graph statistics.
pub fn cmd_stats<W: Write>(
    graph: &AdjacencyGraph<String>,
    json: bool,
    out: &mut W,
) -> GraphResult<()> {
    if json {
        let stats = serde_json::json!({
            "directed": graph.is_directed(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "neighbor_entries": graph.neighbor_entry_count(),
        });
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&stats).unwrap_or_default()
        )?;
    } else {
        writeln!(
            out,
            "Kind: {}",
            if graph.is_directed() {
                "directed"
            } else {
                "undirected"
            }
        )?;
        writeln!(out, "Vertices: {}", graph.vertex_count())?;
        writeln!(out, "Edges: {}", graph.edge_count())?;
        writeln!(out, "Neighbor entries: {}", graph.neighbor_entry_count())?;
    }
    Ok(())
}
