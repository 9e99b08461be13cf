//! CLI entry point for the `adjgraph` command-line tool.

use std::io;
use std::process;

use clap::{Parser, Subcommand};

use adjgraph::cli::commands;
use adjgraph::graph::TraversalOrder;
use adjgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "adjgraph",
    about = "adjgraph CLI — build an adjacency-list graph and traverse it"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Build a directed graph (edges are one-way)
    #[arg(long, global = true)]
    directed: bool,

    /// Edge as SRC:DEST (repeatable). Defaults to the demo graph when no
    /// edges or vertices are given.
    #[arg(long = "edge", global = true)]
    edges: Vec<String>,

    /// Standalone vertex (repeatable)
    #[arg(long = "vertex", global = true)]
    vertices: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print each vertex with its neighbor list
    Display,
    /// Worklist traversal popping the most recently discovered vertex
    Bfs {
        /// Start vertex
        start: String,
    },
    /// True breadth-first (FIFO) traversal
    LevelOrder {
        /// Start vertex
        start: String,
    },
    /// Depth-first pre-order traversal
    Dfs {
        /// Start vertex
        start: String,
    },
    /// Vertex and edge counts
    Stats,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = commands::build_graph(cli.directed, &cli.vertices, &cli.edges).and_then(
        |graph| match cli.command {
            Commands::Display => commands::cmd_display(&graph, json, &mut out),
            Commands::Bfs { start } => {
                commands::cmd_traverse(&graph, TraversalOrder::Bfs, &start, json, &mut out)
            }
            Commands::LevelOrder { start } => {
                commands::cmd_traverse(&graph, TraversalOrder::LevelOrder, &start, json, &mut out)
            }
            Commands::Dfs { start } => {
                commands::cmd_traverse(&graph, TraversalOrder::Dfs, &start, json, &mut out)
            }
            Commands::Stats => commands::cmd_stats(&graph, json, &mut out),
        },
    );

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::InvalidEdgeSpec(_) => 3,
            GraphError::VertexNotFound(_) => 4,
        };
        process::exit(code);
    }
}
