//! End-to-end runs of the small demonstration graphs.

use graphlib::{Graph, GraphConfig, GraphError};

fn build(directed: bool, nodes: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
    let config = if directed {
        GraphConfig::directed()
    } else {
        GraphConfig::undirected()
    };
    Graph::from_nodes_and_edges(config, nodes.iter().copied(), edges.iter().copied()).unwrap()
}

const SQUARE_WITH_DIAGONAL: [(&str, &str, f64); 5] = [
    ("A", "B", 1.0),
    ("B", "C", 2.0),
    ("C", "D", 3.0),
    ("D", "A", 4.0),
    ("A", "C", 5.0),
];

#[test]
fn path_has_no_cycle() {
    let g = build(
        false,
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 1.0),
            ("B", "C", 2.0),
            ("C", "D", 3.0),
            ("D", "E", 4.0),
        ],
    );
    assert!(!g.has_cycle());
}

#[test]
fn prim_on_square_with_diagonal() {
    let g = build(false, &["A", "B", "C", "D"], &SQUARE_WITH_DIAGONAL);
    assert_eq!(
        g.prim_mst().to_string(),
        "[(A, B, 1), (B, C, 2), (C, D, 3)] total 6"
    );
}

#[test]
fn kruskal_spans_the_tail() {
    let mut edges = SQUARE_WITH_DIAGONAL.to_vec();
    edges.extend([("D", "E", 2.0), ("E", "F", 6.0)]);
    let g = build(false, &["A", "B", "C", "D", "E", "F"], &edges);
    assert_eq!(
        g.kruskal_mst().to_string(),
        "[(A, B, 1), (B, C, 2), (D, E, 2), (C, D, 3), (E, F, 6)] total 14"
    );
}

#[test]
fn kruskal_is_a_forest_and_prim_is_not() {
    let mut edges = SQUARE_WITH_DIAGONAL.to_vec();
    edges.push(("E", "F", 6.0));
    let g = build(false, &["A", "B", "C", "D", "E", "F"], &edges);

    let kruskal = g.kruskal_mst();
    assert_eq!(kruskal.len(), 4);
    assert!(kruskal.iter().any(|e| e.to_string() == "(E, F, 6)"));

    let prim = g.prim_mst();
    assert_eq!(prim.len(), 3);
    assert!(prim.iter().all(|e| !e.touches(&"E".to_string())));
}

#[test]
fn node_coloring_of_braced_path() {
    let g = build(
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
    );
    let coloring = g.node_coloring();
    let got: Vec<_> = coloring
        .colors
        .iter()
        .map(|(k, &c)| (k.as_str(), c))
        .collect();
    assert_eq!(got, vec![("A", 0), ("B", 1), ("C", 2), ("D", 0), ("E", 1)]);
    assert_eq!(coloring.color_count, 3);
}

#[test]
fn four_cycle_edge_coloring_uses_two_colors() {
    let g = build(
        false,
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "D", 1.0),
            ("D", "A", 1.0),
        ],
    );
    let coloring = g.edge_coloring();
    let got: Vec<_> = coloring.colors.iter().map(|&(_, c)| c).collect();
    assert_eq!(got, vec![0, 1, 0, 1]);
    assert_eq!(coloring.color_count, 2);
}

#[test]
fn katz_ranks_the_isolated_edge_last() {
    let mut edges = SQUARE_WITH_DIAGONAL.to_vec();
    edges.push(("E", "F", 6.0));
    let g = build(false, &["A", "B", "C", "D", "E", "F"], &edges);
    let scores = g.katz_centrality(0.1, 1);
    let lowest = scores
        .values()
        .copied()
        .fold(f64::INFINITY, f64::min);
    assert!((scores["E"] - lowest).abs() < 1e-12);
    assert!((scores["F"] - lowest).abs() < 1e-12);
    assert!(scores["A"] > scores["B"]);
}

#[test]
fn directed_components_ignore_direction() {
    let mut edges = SQUARE_WITH_DIAGONAL.to_vec();
    edges.extend([("D", "E", 2.0), ("E", "F", 6.0)]);
    let g = build(true, &["A", "B", "C", "D", "E", "F"], &edges);
    assert_eq!(
        g.connected_components(),
        vec![vec!["A", "B", "C", "D", "E", "F"]]
    );
    assert_eq!(
        g.strongly_connected_components(),
        vec![vec!["A", "B", "C", "D"], vec!["E"], vec!["F"]]
    );
}

#[test]
fn directed_tour() {
    let g = build(
        true,
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 1.0),
            ("B", "C", 2.0),
            ("C", "A", 3.0),
            ("D", "C", 4.0),
            ("E", "D", 5.0),
        ],
    );
    assert!(g.has_cycle());
    let expected = "[(A, B, 1), (B, C, 2), (D, C, 4), (E, D, 5)] total 12";
    assert_eq!(g.prim_mst().to_string(), expected);
    assert_eq!(g.kruskal_mst().to_string(), expected);

    let katz = g.katz_centrality(0.1, 1);
    let got: Vec<_> = katz.iter().map(|(k, &s)| (k.as_str(), s)).collect();
    let want = [("A", 1.1), ("B", 1.1), ("C", 1.2), ("D", 1.1), ("E", 1.0)];
    for ((k, s), (wk, ws)) in got.into_iter().zip(want) {
        assert_eq!(k, wk);
        assert!((s - ws).abs() < 1e-12, "{k}: {s}");
    }
}

#[test]
fn bad_insertions_leave_the_graph_untouched() {
    let mut g = build(false, &["A", "B"], &[("A", "B", 1.0)]);
    assert_eq!(
        g.add_node("A"),
        Err(GraphError::DuplicateNode("\"A\"".to_string()))
    );
    assert!(matches!(
        g.add_edge("A", "Z", 1.0),
        Err(GraphError::UnknownNode(_))
    ));
    assert!(matches!(
        g.add_edge("B", "A", 2.0),
        Err(GraphError::DuplicateEdge { .. })
    ));
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 1);
}
