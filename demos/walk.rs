//! Builds a graph from the command line and prints what each algorithm
//! reports about it.
//!
//! Usage:
//!   cargo run --example walk -- --edge A,B --edge B,C --edge A,D
//!   cargo run --example walk -- --undirected --vertex F --edge A,B --edge B,C --from A --to C

use std::process;

use clap::Parser;
use graphwalk::{prelude::*, tracing_support};

/// Build a graph from vertex and edge arguments and run every algorithm on it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Treat edges as undirected
    #[arg(long)]
    undirected: bool,

    /// Add a vertex (vertices named by edges are added automatically)
    #[arg(long = "vertex")]
    vertices: Vec<String>,

    /// Add an edge written as FROM,TO
    #[arg(long = "edge", value_parser = parse_edge)]
    edges: Vec<(String, String)>,

    /// Start vertex for traversals (defaults to the lowest id)
    #[arg(long)]
    from: Option<String>,

    /// Target vertex for path queries (defaults to the last vertex added)
    #[arg(long)]
    to: Option<String>,

    /// Distance for the neighborhood query
    #[arg(long, default_value_t = 2)]
    distance: usize,

    /// Log algorithm progress
    #[arg(long)]
    verbose: bool,
}

fn parse_edge(arg: &str) -> Result<(String, String), String> {
    match arg.split_once(',') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => {
            Ok((from.trim().to_string(), to.trim().to_string()))
        }
        _ => Err(format!("expected FROM,TO but got '{arg}'")),
    }
}

fn build_graph(args: &Args) -> Graph<String> {
    let directedness = Directedness::from_is_directed(!args.undirected);
    let mut graph = Graph::new(directedness);
    let named = args
        .vertices
        .iter()
        .chain(args.edges.iter().flat_map(|(a, b)| [a, b]));
    for id in named {
        if !graph.contains_id(id) {
            graph.add_vertex(id.clone());
        }
    }
    for (from, to) in &args.edges {
        if let Err(err) = graph.add_edge(from, to) {
            eprintln!("Failed to add edge {from},{to}: {err}");
            process::exit(1);
        }
    }
    graph
}

fn or_exit<T>(result: GraphResult<T, String>) -> T {
    result.unwrap_or_else(|err| {
        eprintln!("{err}");
        process::exit(1);
    })
}

fn main() {
    let args = Args::parse();
    if args.verbose {
        tracing_support::init_tracing();
    }

    let graph = build_graph(&args);
    println!("{} graph", graph.directedness());
    println!("Vertices: {}", graph.vertex_count());
    println!("Edges: {}", graph.edge_count());
    println!("{graph}");

    let Some(start) = args.from.clone().or_else(|| graph.ids().min().cloned()) else {
        println!("\nGraph is empty; nothing to walk.");
        return;
    };
    let target = args
        .to
        .clone()
        .or_else(|| graph.ids().last().cloned())
        .unwrap_or_else(|| start.clone());

    println!("\nBFS from {start}: {:?}", or_exit(graph.bfs_traversal(&start)));
    println!("DFS from {start}: {:?}", or_exit(graph.dfs_traversal(&start)));
    println!(
        "Shortest path {start} -> {target}: {:?}",
        or_exit(graph.find_shortest_path(&start, &target))
    );
    match or_exit(graph.find_path_dfs_iter(&start, &target)) {
        DfsPath::Found(path) => println!("DFS path {start} -> {target}: {path:?}"),
        DfsPath::Unreachable(tree) => {
            println!("DFS path {start} -> {target}: unreachable");
            println!("  explored from {start}: {:?}", tree.keys().collect::<Vec<_>>());
        }
    }
    println!(
        "Vertices {} away from {start}: {:?}",
        args.distance,
        or_exit(graph.find_vertices_n_away(&start, args.distance))
    );

    println!("\nConnected components (DFS): {:?}", graph.get_connected_components());
    println!("Connected components (BFS): {:?}", graph.find_connected_components());
    println!("Connected: {}", graph.is_connected());
    #[cfg(feature = "pathfinding")]
    if graph.is_directed() {
        println!(
            "Strongly connected components: {:?}",
            graph.strongly_connected_components()
        );
    }

    println!("\nBipartite: {}", graph.is_bipartite());
    if let Some(coloring) = graph.two_coloring() {
        for (id, color) in &coloring {
            println!("  {id}: {color:?}");
        }
    }

    println!("\nCycle reachable from lowest id: {}", graph.contains_cycle());
    println!("Cycle anywhere: {}", graph.contains_any_cycle());
    match graph.topological_sort() {
        Ok(order) => println!("Topological order: {order:?}"),
        Err(err) => println!("No topological order: {err}"),
    }
}
