use std::cmp::Reverse;
use std::hash::Hash;

use indexmap::{Equivalent, IndexMap};
use tracing::debug;

use crate::{ColoringOrder, Direction, Edge, GraphBase, NodeId, bfs_forest};

/// Greedy node coloring result. Colors are contiguous from 0.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeColoring<K: Hash + Eq> {
    /// Node to color, in node insertion order.
    pub colors: IndexMap<K, usize>,
    pub color_count: usize,
}

impl<K: Hash + Eq> NodeColoring<K> {
    pub fn color_of<Q>(&self, node: &Q) -> Option<usize>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.colors.get(node).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Nodes grouped by color, color 0 first.
    pub fn classes(&self) -> Vec<Vec<&K>> {
        let mut classes = vec![Vec::new(); self.color_count];
        for (node, &color) in &self.colors {
            classes[color].push(node);
        }
        classes
    }
}

/// Greedy edge coloring result.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeColoring<K, W> {
    /// Canonical edges with their color, in edge insertion order.
    pub colors: Vec<(Edge<K, W>, usize)>,
    pub color_count: usize,
    directed: bool,
}

impl<K, W> EdgeColoring<K, W> {
    /// Color of the edge between two nodes. Undirected colorings accept either
    /// orientation.
    pub fn color_of<Q>(&self, source: &Q, destination: &Q) -> Option<usize>
    where
        Q: ?Sized + Equivalent<K>,
    {
        self.colors.iter().find_map(|(edge, color)| {
            let forward =
                source.equivalent(edge.source()) && destination.equivalent(edge.destination());
            let backward = !self.directed
                && source.equivalent(edge.destination())
                && destination.equivalent(edge.source());
            (forward || backward).then_some(*color)
        })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Greedy sequential node coloring.
///
/// Each node, in the chosen order, takes the smallest color not used by an
/// already colored neighbor. Edges constrain both endpoints regardless of
/// direction. Self-loops are ignored, since a looped node can never be
/// properly colored. The result is proper but not necessarily minimal.
pub fn greedy_node_coloring<G>(graph: &G, order: ColoringOrder) -> NodeColoring<G::Key>
where
    G: GraphBase + ?Sized,
{
    let mut colors: Vec<Option<usize>> = vec![None; graph.order()];
    let mut used = Vec::new();

    for v in visiting_order(graph, order) {
        used.clear();
        for (w, _) in graph.neighborhood(v) {
            if w == v {
                continue;
            }
            if let Some(c) = colors[w.0] {
                mark(&mut used, c);
            }
        }
        colors[v.0] = Some(smallest_free(&used, &[]));
    }

    let colors: IndexMap<G::Key, usize> = graph
        .node_ids()
        .filter_map(|v| colors[v.0].map(|c| (graph.node_key(v).clone(), c)))
        .collect();
    let color_count = colors.values().max().map_or(0, |&c| c + 1);

    debug!(nodes = colors.len(), color_count, ?order, "node coloring");
    NodeColoring {
        colors,
        color_count,
    }
}

fn visiting_order<G>(graph: &G, order: ColoringOrder) -> Vec<NodeId>
where
    G: GraphBase + ?Sized,
{
    match order {
        ColoringOrder::InsertionOrder => graph.node_ids().collect(),
        ColoringOrder::LargestFirst => {
            let mut nodes: Vec<NodeId> = graph.node_ids().collect();
            nodes.sort_by_key(|&v| Reverse(graph.degree(v)));
            nodes
        }
        ColoringOrder::BreadthFirst => bfs_forest(graph, Direction::Both).concat(),
    }
}

/// Greedy edge coloring over canonical edges in insertion order.
///
/// Two edges conflict when they share an endpoint, whatever their direction.
/// An edge has at most 2(Δ-1) conflicting neighbors, so at most 2Δ-1 colors
/// are used, where Δ is the maximum degree.
pub fn greedy_edge_coloring<G>(graph: &G) -> EdgeColoring<G::Key, G::Weight>
where
    G: GraphBase + ?Sized,
{
    // at_node[v][c]: some colored edge touching v has color c
    let mut at_node: Vec<Vec<bool>> = vec![Vec::new(); graph.order()];
    let mut colors = Vec::with_capacity(graph.size());
    let mut color_count = 0;

    for e in graph.edge_ids() {
        let (u, v) = graph.endpoints(e);
        let color = smallest_free(&at_node[u.0], &at_node[v.0]);
        mark(&mut at_node[u.0], color);
        mark(&mut at_node[v.0], color);
        color_count = color_count.max(color + 1);
        colors.push((Edge::from_graph(graph, e), color));
    }

    debug!(edges = colors.len(), color_count, "edge coloring");
    EdgeColoring {
        colors,
        color_count,
        directed: graph.is_directed(),
    }
}

fn mark(used: &mut Vec<bool>, color: usize) {
    if used.len() <= color {
        used.resize(color + 1, false);
    }
    used[color] = true;
}

/// Smallest color set in neither `a` nor `b`.
fn smallest_free(a: &[bool], b: &[bool]) -> usize {
    (0..)
        .find(|&c| !a.get(c).copied().unwrap_or(false) && !b.get(c).copied().unwrap_or(false))
        .unwrap_or(0)
}
