//! `Graph`: the single graph type, directed or undirected by a flag fixed at
//! construction. It owns an `AdjacencyList`, enforces the insertion rules
//! (known endpoints, no duplicates, self-loop policy, comparable weights) and
//! exposes every algorithm as a method delegating to `crate::algorithms`.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::{Equivalent, IndexMap};
use tracing::trace;

use crate::algorithms::{
    EdgeColoring, NodeColoring, SpanningTree, greedy_edge_coloring, greedy_node_coloring,
    has_cycle, katz_centrality, kruskal_mst, prim_mst, prim_mst_from,
    strongly_connected_components, try_katz_centrality, weakly_connected_components,
};
use crate::config::{ColoringOrder, GraphConfig, KatzConfig, SelfLoops};
use crate::core::{Direction, EdgeId, NodeId, Weight};
use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::storage::AdjacencyList;
use crate::traits::GraphBase;

#[derive(Clone, Debug)]
pub struct Graph<K = String, W = f64>
where
    K: Debug + Clone + Eq + Hash,
    W: Weight,
{
    storage: AdjacencyList<K, W>,
    config: GraphConfig,
}

impl<K, W> Graph<K, W>
where
    K: Debug + Clone + Eq + Hash,
    W: Weight,
{
    pub fn new(directed: bool) -> Self {
        Self::with_config(GraphConfig {
            directed,
            ..GraphConfig::default()
        })
    }

    pub fn directed() -> Self {
        Self::with_config(GraphConfig::directed())
    }

    pub fn undirected() -> Self {
        Self::with_config(GraphConfig::undirected())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            storage: AdjacencyList::new(),
            config,
        }
    }

    /// Build a graph from isolated nodes and then weighted edges between them.
    /// Stops at the first rejected insertion.
    pub fn from_nodes_and_edges<UK, NI, EI>(
        config: GraphConfig,
        nodes_iter: NI,
        edges_iter: EI,
    ) -> Result<Self>
    where
        UK: Into<K>,
        NI: IntoIterator<Item = UK>,
        EI: IntoIterator<Item = (UK, UK, W)>,
    {
        let nodes = Vec::from_iter(nodes_iter);

        let mut graph = Self {
            storage: AdjacencyList::with_node_capacity(nodes.len()),
            config,
        };
        for key in nodes {
            graph.add_node(key)?;
        }
        for (from_key, to_key, weight) in edges_iter {
            let (from_key, to_key) = (from_key.into(), to_key.into());
            graph.add_edge(&from_key, &to_key, weight)?;
        }

        Ok(graph)
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    pub fn node_count(&self) -> usize {
        self.storage.order()
    }

    pub fn edge_count(&self) -> usize {
        self.storage.size()
    }

    pub fn add_node(&mut self, key: impl Into<K>) -> Result<NodeId> {
        let id = self
            .storage
            .add_node(key.into())
            .map_err(|key| GraphError::DuplicateNode(format!("{key:?}")))?;
        trace!(node = ?self.storage.node_key(id), id = id.0, "node added");
        Ok(id)
    }

    /// Insert a weighted edge between two existing nodes.
    ///
    /// Undirected edges are stored once and answer adjacency queries from
    /// both endpoints. Nothing is modified when an error is returned.
    pub fn add_edge<Q>(&mut self, source: &Q, destination: &Q, weight: W) -> Result<EdgeId>
    where
        Q: ?Sized + Hash + Equivalent<K> + Debug,
    {
        let from = self.lookup(source)?;
        let to = self.lookup(destination)?;

        let invalid = |reason| GraphError::InvalidEdge {
            from: format!("{source:?}"),
            to: format!("{destination:?}"),
            reason,
        };
        if from == to && self.config.self_loops == SelfLoops::Reject {
            return Err(invalid("self-loops are not allowed"));
        }
        if !weight.is_comparable() {
            return Err(invalid("weight is not comparable"));
        }
        if self.find_edge(from, to).is_some() {
            return Err(GraphError::DuplicateEdge {
                from: format!("{source:?}"),
                to: format!("{destination:?}"),
            });
        }

        let eid = self.storage.add_edge_by_id(from, to, weight);
        trace!(?source, ?destination, %weight, id = eid.0, "edge added");
        Ok(eid)
    }

    pub fn contains_node<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.storage.node_id(key).is_some()
    }

    /// All node identifiers in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &K> {
        self.storage.nodes.iter().map(|(_, key)| key)
    }

    /// Canonical edges in insertion order; each undirected edge once.
    pub fn edges(&self) -> impl Iterator<Item = Edge<K, W>> + '_ {
        self.edge_ids().map(move |e| Edge::from_graph(self, e))
    }

    /// One-hop (neighbor, weight) pairs. Directed graphs follow out-edges.
    pub fn neighbors<Q>(&self, node: &Q) -> Result<Box<dyn Iterator<Item = (&K, W)> + '_>>
    where
        Q: ?Sized + Hash + Equivalent<K> + Debug,
    {
        let v = self.lookup(node)?;
        Ok(Box::new(self.successors(v).map(move |(n, e)| {
            (self.storage.node_key(n), self.storage.edge(e).weight)
        })))
    }

    /// Incident edge count ignoring direction; a self-loop counts once.
    pub fn degree_of<Q>(&self, node: &Q) -> Result<usize>
    where
        Q: ?Sized + Hash + Equivalent<K> + Debug,
    {
        let v = self.lookup(node)?;
        Ok(self.degree(v))
    }

    /// Weight of the edge between two nodes, if any. Undirected graphs accept
    /// either orientation.
    pub fn edge_weight<Q>(&self, source: &Q, destination: &Q) -> Option<W>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let from = self.storage.node_id(source)?;
        let to = self.storage.node_id(destination)?;
        self.find_edge(from, to).map(|e| self.storage.edge(e).weight)
    }

    pub fn node_id<Q>(&self, key: &Q) -> Option<NodeId>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.storage.node_id(key)
    }

    fn lookup<Q>(&self, key: &Q) -> Result<NodeId>
    where
        Q: ?Sized + Hash + Equivalent<K> + Debug,
    {
        self.storage
            .node_id(key)
            .ok_or_else(|| GraphError::UnknownNode(format!("{key:?}")))
    }

    fn find_edge(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.storage.find_edge(from, to).or_else(|| {
            if self.config.directed {
                None
            } else {
                self.storage.find_edge(to, from)
            }
        })
    }

    // === Algorithms ===

    pub fn has_cycle(&self) -> bool {
        has_cycle(self)
    }

    /// Prim from the first inserted node. Covers that node's component only.
    pub fn prim_mst(&self) -> SpanningTree<K, W> {
        prim_mst(self)
    }

    pub fn prim_mst_from<Q>(&self, start: &Q) -> Result<SpanningTree<K, W>>
    where
        Q: ?Sized + Hash + Equivalent<K> + Debug,
    {
        let start = self.lookup(start)?;
        Ok(prim_mst_from(self, start))
    }

    /// Kruskal's minimum spanning forest.
    pub fn kruskal_mst(&self) -> SpanningTree<K, W> {
        kruskal_mst(self)
    }

    pub fn node_coloring(&self) -> NodeColoring<K> {
        greedy_node_coloring(self, ColoringOrder::InsertionOrder)
    }

    pub fn node_coloring_with(&self, order: ColoringOrder) -> NodeColoring<K> {
        greedy_node_coloring(self, order)
    }

    pub fn edge_coloring(&self) -> EdgeColoring<K, W> {
        greedy_edge_coloring(self)
    }

    /// Weakly connected components (direction ignored).
    pub fn connected_components(&self) -> Vec<Vec<K>> {
        weakly_connected_components(self)
    }

    pub fn strongly_connected_components(&self) -> Vec<Vec<K>> {
        strongly_connected_components(self)
    }

    /// Katz centrality with `beta = 1`, running exactly `iterations` rounds.
    pub fn katz_centrality(&self, alpha: f64, iterations: usize) -> IndexMap<K, f64> {
        katz_centrality(
            self,
            &KatzConfig {
                alpha,
                iterations,
                ..KatzConfig::default()
            },
        )
    }

    /// Katz centrality with explicit parameters, rejecting negative or
    /// non-finite `alpha`/`beta`.
    pub fn katz_centrality_with(&self, config: &KatzConfig) -> Result<IndexMap<K, f64>> {
        try_katz_centrality(self, config)
    }
}

impl<K, W> GraphBase for Graph<K, W>
where
    K: Debug + Clone + Eq + Hash,
    W: Weight,
{
    type Key = K;
    type Weight = W;

    fn is_directed(&self) -> bool {
        self.config.directed
    }

    fn order(&self) -> usize {
        self.storage.order()
    }
    fn size(&self) -> usize {
        self.storage.size()
    }

    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new((0..self.storage.order()).map(NodeId))
    }
    fn node_key(&self, id: NodeId) -> &Self::Key {
        self.storage.node_key(id)
    }

    fn edge_ids(&self) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        Box::new((0..self.storage.size()).map(EdgeId))
    }
    fn endpoints(&self, e: EdgeId) -> (NodeId, NodeId) {
        let r = self.storage.edge(e);
        (r.from, r.to)
    }
    fn weight_of(&self, e: EdgeId) -> Self::Weight {
        self.storage.edge(e).weight
    }

    fn adjacent(
        &self,
        v: NodeId,
        direction: Direction,
    ) -> Box<dyn Iterator<Item = (NodeId, EdgeId)> + '_> {
        if self.config.directed {
            self.storage.incident(v, direction)
        } else {
            self.storage.incident(v, Direction::Both)
        }
    }
}
