use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::{Edge, EdgeId, GraphBase, NodeId, SpanningTree};

/// Frontier entry: an edge leaving the tree towards `to`.
struct Candidate<W> {
    weight: W,
    edge: EdgeId,
    to: NodeId,
}

// Reversed so `BinaryHeap` pops the lightest edge; equal weights pop in edge
// insertion order. Weights were checked comparable on insertion.
impl<W: PartialOrd> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.edge.cmp(&self.edge))
    }
}

impl<W: PartialOrd> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for Candidate<W> {}

/// Prim's algorithm from the first inserted node.
///
/// Produces a spanning tree of the start node's component, not a spanning
/// forest: nodes in other components are left out.
pub fn prim_mst<G>(graph: &G) -> SpanningTree<G::Key, G::Weight>
where
    G: GraphBase + ?Sized,
{
    match graph.node_ids().next() {
        Some(start) => prim_mst_from(graph, start),
        None => SpanningTree::empty(),
    }
}

/// Prim's algorithm grown from `start`. Edge direction is ignored; edges are
/// reported in their stored orientation, in the order they joined the tree.
pub fn prim_mst_from<G>(graph: &G, start: NodeId) -> SpanningTree<G::Key, G::Weight>
where
    G: GraphBase + ?Sized,
{
    let mut tree = SpanningTree::empty();
    if start.0 >= graph.order() {
        return tree;
    }

    let mut in_tree = vec![false; graph.order()];
    let mut frontier = BinaryHeap::new();

    in_tree[start.0] = true;
    extend_frontier(graph, start, &in_tree, &mut frontier);

    while let Some(Candidate { edge, to, .. }) = frontier.pop() {
        if in_tree[to.0] {
            continue;
        }
        in_tree[to.0] = true;
        tree.push(Edge::from_graph(graph, edge));
        extend_frontier(graph, to, &in_tree, &mut frontier);
    }

    debug!(
        start = ?graph.node_key(start),
        edges = tree.len(),
        total_weight = %tree.total_weight,
        "prim spanning tree"
    );
    tree
}

fn extend_frontier<G>(
    graph: &G,
    v: NodeId,
    in_tree: &[bool],
    frontier: &mut BinaryHeap<Candidate<G::Weight>>,
) where
    G: GraphBase + ?Sized,
{
    for (w, e) in graph.neighborhood(v) {
        if !in_tree[w.0] {
            frontier.push(Candidate {
                weight: graph.weight_of(e),
                edge: e,
                to: w,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Graph;

    fn square_with_diagonal() -> Graph<String, i32> {
        let mut g = Graph::undirected();
        for k in ["A", "B", "C", "D"] {
            g.add_node(k).unwrap();
        }
        g.add_edge("A", "B", 1).unwrap();
        g.add_edge("B", "C", 2).unwrap();
        g.add_edge("C", "D", 3).unwrap();
        g.add_edge("D", "A", 4).unwrap();
        g.add_edge("A", "C", 5).unwrap();
        g
    }

    #[test]
    fn square_with_diagonal_weighs_six() {
        let tree = prim_mst(&square_with_diagonal());
        let rendered: Vec<_> = tree.iter().map(|e| e.to_string()).collect();
        assert_eq!(rendered, vec!["(A, B, 1)", "(B, C, 2)", "(C, D, 3)"]);
        assert_eq!(tree.total_weight, 6);
    }

    #[test]
    fn only_the_start_component_is_spanned() {
        let mut g = square_with_diagonal();
        g.add_node("E").unwrap();
        g.add_node("F").unwrap();
        g.add_edge("E", "F", 6).unwrap();

        let tree = prim_mst(&g);
        assert_eq!(tree.len(), 3);
        assert!(tree.iter().all(|e| !e.touches(&"E".to_string())));

        let other = g.prim_mst_from("F").unwrap();
        assert_eq!(other.len(), 1);
        assert_eq!(other.edges[0].to_string(), "(E, F, 6)");
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let mut g: Graph<String, i32> = Graph::undirected();
        for k in ["a", "b", "c"] {
            g.add_node(k).unwrap();
        }
        g.add_edge("a", "c", 1).unwrap();
        g.add_edge("a", "b", 1).unwrap();
        g.add_edge("b", "c", 1).unwrap();

        let first = prim_mst(&g);
        let rendered: Vec<_> = first.iter().map(|e| e.to_string()).collect();
        assert_eq!(rendered, vec!["(a, c, 1)", "(a, b, 1)"]);
        assert_eq!(prim_mst(&g), first);
    }

    #[test]
    fn directed_graph_uses_underlying_undirected_edges() {
        let mut g: Graph<String, i32> = Graph::directed();
        for k in ["a", "b", "c"] {
            g.add_node(k).unwrap();
        }
        g.add_edge("b", "a", 2).unwrap();
        g.add_edge("c", "b", 1).unwrap();
        let tree = prim_mst(&g);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.total_weight, 3);
    }

    #[test]
    fn empty_graph_and_unknown_start() {
        let g: Graph<String, i32> = Graph::undirected();
        assert!(prim_mst(&g).is_empty());
        assert!(g.prim_mst_from("nope").is_err());
    }
}
