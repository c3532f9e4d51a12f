use anyhow::Context;
use graphlib::{Graph, GraphConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

type Scenario = (&'static str, &'static str, f64);

const SQUARE_WITH_DIAGONAL: [Scenario; 5] = [
    ("A", "B", 1.0),
    ("B", "C", 2.0),
    ("C", "D", 3.0),
    ("D", "A", 4.0),
    ("A", "C", 5.0),
];

fn build(directed: bool, nodes: &[&'static str], edges: &[Scenario]) -> anyhow::Result<Graph> {
    let config = if directed {
        GraphConfig::directed()
    } else {
        GraphConfig::undirected()
    };
    Graph::from_nodes_and_edges(
        config,
        nodes.iter().copied(),
        edges.iter().copied(),
    )
    .with_context(|| format!("building {}-node graph", nodes.len()))
}

fn cycle_example() -> anyhow::Result<()> {
    let mut graph = build(
        false,
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 1.0),
            ("B", "C", 2.0),
            ("C", "D", 3.0),
            ("D", "E", 4.0),
        ],
    )?;
    println!("Path has cycle: {}", graph.has_cycle());

    graph.add_edge("E", "A", 5.0)?;
    println!("Closed path has cycle: {}", graph.has_cycle());
    Ok(())
}

fn prim_example() -> anyhow::Result<()> {
    let graph = build(false, &["A", "B", "C", "D"], &SQUARE_WITH_DIAGONAL)?;
    println!("Prim's MST: {}", graph.prim_mst());
    Ok(())
}

fn kruskal_example() -> anyhow::Result<()> {
    let mut edges = SQUARE_WITH_DIAGONAL.to_vec();
    edges.extend([("D", "E", 2.0), ("E", "F", 6.0)]);
    let graph = build(false, &["A", "B", "C", "D", "E", "F"], &edges)?;
    println!("Kruskal's MST: {}", graph.kruskal_mst());
    Ok(())
}

fn node_coloring_example() -> anyhow::Result<()> {
    let graph = build(
        false,
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "D", 1.0),
            ("D", "E", 1.0),
            ("A", "C", 1.0),
            ("B", "D", 1.0),
        ],
    )?;
    let coloring = graph.node_coloring();
    println!(
        "Node coloring ({} colors): {:?}",
        coloring.color_count, coloring.colors
    );
    Ok(())
}

fn edge_coloring_example() -> anyhow::Result<()> {
    let graph = build(
        false,
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "D", 1.0),
            ("D", "A", 1.0),
        ],
    )?;
    let coloring = graph.edge_coloring();
    println!("Edge coloring ({} colors):", coloring.color_count);
    for (edge, color) in &coloring.colors {
        println!("  {edge} -> {color}");
    }
    Ok(())
}

fn katz_example() -> anyhow::Result<()> {
    let mut edges = SQUARE_WITH_DIAGONAL.to_vec();
    edges.push(("E", "F", 6.0));
    let graph = build(false, &["A", "B", "C", "D", "E", "F"], &edges)?;
    println!("Katz centrality: {:?}", graph.katz_centrality(0.1, 1));
    Ok(())
}

fn components_example() -> anyhow::Result<()> {
    let mut edges = SQUARE_WITH_DIAGONAL.to_vec();
    edges.extend([("D", "E", 2.0), ("E", "F", 6.0)]);
    let graph = build(true, &["A", "B", "C", "D", "E", "F"], &edges)?;
    println!("Connected components: {:?}", graph.connected_components());
    println!(
        "Strongly connected components: {:?}",
        graph.strongly_connected_components()
    );
    Ok(())
}

/// Every algorithm on one directed graph.
fn directed_tour() -> anyhow::Result<()> {
    let graph = build(
        true,
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 1.0),
            ("B", "C", 2.0),
            ("C", "A", 3.0),
            ("D", "C", 4.0),
            ("E", "D", 5.0),
        ],
    )?;

    println!("Has cycle: {}", graph.has_cycle());
    println!("Prim's MST: {}", graph.prim_mst());
    println!("Kruskal's MST: {}", graph.kruskal_mst());
    println!("Node coloring: {:?}", graph.node_coloring().colors);
    let edge_colors: Vec<String> = graph
        .edge_coloring()
        .colors
        .iter()
        .map(|(edge, color)| format!("{edge}: {color}"))
        .collect();
    println!("Edge coloring: {edge_colors:?}");
    println!("Connected components: {:?}", graph.connected_components());
    println!("Katz centrality: {:?}", graph.katz_centrality(0.1, 1));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("exercises=info,graphlib=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let examples: [(&str, fn() -> anyhow::Result<()>); 8] = [
        ("cycle", cycle_example),
        ("prim", prim_example),
        ("kruskal", kruskal_example),
        ("node coloring", node_coloring_example),
        ("edge coloring", edge_coloring_example),
        ("katz", katz_example),
        ("components", components_example),
        ("directed tour", directed_tour),
    ];

    for (name, example) in examples {
        info!(example = name, "running");
        example().with_context(|| format!("{name} example failed"))?;
        println!();
    }

    Ok(())
}
