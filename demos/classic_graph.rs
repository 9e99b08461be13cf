//! Build the six-vertex demo graph, print it, then run each traversal.

use adjgraph::*;

fn main() -> GraphResult<()> {
    let mut builder = GraphBuilder::new();
    builder.edges(DEMO_EDGES);
    let graph = builder.build();

    graph.display_graph()?;

    let start = "A";
    println!("bfs:         {}", format_sequence(&graph.bfs(&start)?));
    println!("level order: {}", format_sequence(&graph.level_order(&start)?));
    println!("dfs:         {}", format_sequence(&graph.dfs(&start)?));

    Ok(())
}
