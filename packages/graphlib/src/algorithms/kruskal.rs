use std::cmp::Ordering;
use std::fmt::Display;

use tracing::debug;

use crate::{Edge, EdgeId, GraphBase, UnionFind, Weight};

/// Edges of a minimum spanning tree (Prim) or forest (Kruskal), in the order
/// the algorithm accepted them. Integer totals saturate at the type's bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree<K, W> {
    pub edges: Vec<Edge<K, W>>,
    pub total_weight: W,
}

impl<K, W: Weight> SpanningTree<K, W> {
    pub(crate) fn empty() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: W::zero(),
        }
    }

    pub(crate) fn push(&mut self, edge: Edge<K, W>) {
        self.total_weight = self.total_weight.saturating_add(edge.weight());
        self.edges.push(edge);
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge<K, W>> {
        self.edges.iter()
    }
}

impl<K: Display, W: Display> Display for SpanningTree<K, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", edge)?;
        }
        write!(f, "] total {}", self.total_weight)
    }
}

/// Kruskal's minimum spanning forest.
///
/// Edges are stable-sorted by weight, so equal weights keep insertion order.
/// Directed graphs are treated as their underlying undirected graph. A
/// disconnected graph yields one tree per component, unlike `prim_mst`.
pub fn kruskal_mst<G>(graph: &G) -> SpanningTree<G::Key, G::Weight>
where
    G: GraphBase + ?Sized,
{
    let mut edges: Vec<(EdgeId, G::Weight)> =
        graph.edge_ids().map(|eid| (eid, graph.weight_of(eid))).collect();

    edges.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    let mut uf = UnionFind::new(graph.order());
    let mut tree = SpanningTree::empty();

    for (eid, _) in edges {
        let (u, v) = graph.endpoints(eid);

        if uf.union_nodes(u, v) {
            tree.push(Edge::from_graph(graph, eid));
        }
    }

    debug!(
        edges = tree.len(),
        trees = uf.num_components(),
        total_weight = %tree.total_weight,
        "kruskal spanning forest"
    );
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Graph;

    fn keys(tree: &SpanningTree<String, i32>) -> Vec<(String, String)> {
        tree.iter()
            .map(|e| (e.source().clone(), e.destination().clone()))
            .collect()
    }

    fn two_components() -> Graph<String, i32> {
        let mut g = Graph::undirected();
        for k in ["A", "B", "C", "D", "E", "F"] {
            g.add_node(k).unwrap();
        }
        g.add_edge("A", "B", 1).unwrap();
        g.add_edge("B", "C", 2).unwrap();
        g.add_edge("C", "D", 3).unwrap();
        g.add_edge("D", "A", 4).unwrap();
        g.add_edge("A", "C", 5).unwrap();
        g.add_edge("E", "F", 6).unwrap();
        g
    }

    #[test]
    fn spanning_forest_covers_every_component() {
        let tree = kruskal_mst(&two_components());
        assert_eq!(
            keys(&tree),
            vec![
                ("A".to_string(), "B".to_string()),
                ("B".to_string(), "C".to_string()),
                ("C".to_string(), "D".to_string()),
                ("E".to_string(), "F".to_string()),
            ]
        );
        assert_eq!(tree.total_weight, 12);
    }

    #[test]
    fn equal_weights_keep_insertion_order() {
        let mut g: Graph<String, i32> = Graph::undirected();
        for k in ["a", "b", "c"] {
            g.add_node(k).unwrap();
        }
        g.add_edge("b", "c", 1).unwrap();
        g.add_edge("a", "b", 1).unwrap();
        g.add_edge("a", "c", 1).unwrap();
        let tree = kruskal_mst(&g);
        assert_eq!(
            keys(&tree),
            vec![
                ("b".to_string(), "c".to_string()),
                ("a".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn directed_edges_are_treated_as_undirected() {
        let mut g: Graph<String, i32> = Graph::directed();
        for k in ["a", "b", "c"] {
            g.add_node(k).unwrap();
        }
        g.add_edge("a", "b", 3).unwrap();
        g.add_edge("b", "a", 1).unwrap();
        g.add_edge("c", "b", 2).unwrap();
        let tree = kruskal_mst(&g);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.total_weight, 3);
    }

    #[test]
    fn self_loops_and_empty_graphs_contribute_nothing() {
        let empty: Graph<String, i32> = Graph::undirected();
        assert!(kruskal_mst(&empty).is_empty());

        let mut g: Graph<String, i32> = Graph::undirected();
        g.add_node("a").unwrap();
        g.add_edge("a", "a", -4).unwrap();
        let tree = kruskal_mst(&g);
        assert!(tree.is_empty());
        assert_eq!(tree.total_weight, 0);
    }

    #[test]
    fn total_weight_saturates_on_integer_overflow() {
        let mut g: Graph<String, i32> = Graph::undirected();
        for k in ["a", "b", "c"] {
            g.add_node(k).unwrap();
        }
        g.add_edge("a", "b", i32::MAX).unwrap();
        g.add_edge("b", "c", 1).unwrap();

        let tree = kruskal_mst(&g);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.total_weight, i32::MAX);
        assert_eq!(g.prim_mst().total_weight, i32::MAX);
    }

    #[test]
    fn negative_weights_are_preferred() {
        let mut g: Graph = Graph::undirected();
        for k in ["a", "b", "c"] {
            g.add_node(k).unwrap();
        }
        g.add_edge("a", "b", 0.5).unwrap();
        g.add_edge("b", "c", -1.5).unwrap();
        g.add_edge("a", "c", 0.25).unwrap();
        let tree = kruskal_mst(&g);
        assert_eq!(tree.total_weight, -1.25);
        assert_eq!(tree.to_string(), "[(b, c, -1.5), (a, c, 0.25)] total -1.25");
    }
}
