//! AdjacencyList: one record per edge, indexed from both endpoints.
//!
//! `out_adj[v]` lists edges whose source is `v`, `in_adj[v]` edges whose
//! destination is `v`. An undirected edge is still stored once; its reverse
//! direction is derived by reading `in_adj`. The list itself has no notion of
//! directed or undirected; callers pick a `Direction` per query.

use crate::core::{Direction, EdgeId, NodeId};
use crate::interner::NodeInterner;
use indexmap::Equivalent;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Clone, Debug)]
pub struct EdgeRecord<W> {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: W,
}

impl<W> EdgeRecord<W> {
    pub fn new(from: NodeId, to: NodeId, weight: W) -> Self {
        EdgeRecord { from, to, weight }
    }

    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

#[derive(Clone, Debug)]
pub struct AdjacencyList<Key = String, Weight = f64>
where
    Key: Debug + Clone + Eq + Hash,
    Weight: Debug + Copy + PartialOrd,
{
    pub nodes: NodeInterner<Key>,
    pub edges: Vec<EdgeRecord<Weight>>,
    pub out_adj: Vec<Vec<EdgeId>>,
    pub in_adj: Vec<Vec<EdgeId>>,
    edge_index: HashMap<(NodeId, NodeId), EdgeId>,
}

impl<Key, Weight> Default for AdjacencyList<Key, Weight>
where
    Key: Debug + Clone + Eq + Hash,
    Weight: Debug + Copy + PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Key, Weight> AdjacencyList<Key, Weight>
where
    Key: Debug + Clone + Eq + Hash,
    Weight: Debug + Copy + PartialOrd,
{
    pub fn new() -> Self {
        Self::with_node_capacity(0)
    }

    pub fn with_node_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeInterner::with_capacity(capacity),
            edges: Vec::new(),
            out_adj: Vec::with_capacity(capacity),
            in_adj: Vec::with_capacity(capacity),
            edge_index: HashMap::new(),
        }
    }

    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Hands the key back if it is already interned.
    pub fn add_node(&mut self, key: Key) -> Result<NodeId, Key> {
        let id = self.nodes.insert(key)?;
        self.out_adj.push(Vec::new());
        self.in_adj.push(Vec::new());
        Ok(id)
    }

    pub fn node_id<Q>(&self, key: &Q) -> Option<NodeId>
    where
        Q: ?Sized + Hash + Equivalent<Key>,
    {
        self.nodes.get_id(key)
    }

    pub fn node_key(&self, id: NodeId) -> &Key {
        self.nodes.get(id)
    }

    /// Appends an edge record. Both ids must already exist; duplicate
    /// detection is the caller's job (see `find_edge`).
    pub fn add_edge_by_id(&mut self, from: NodeId, to: NodeId, weight: Weight) -> EdgeId {
        let eid = EdgeId(self.edges.len());
        self.out_adj[from.0].push(eid);
        self.in_adj[to.0].push(eid);
        self.edges.push(EdgeRecord::new(from, to, weight));
        self.edge_index.insert((from, to), eid);
        eid
    }

    /// Exact (from, to) lookup; orientation matters.
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.edge_index.get(&(from, to)).copied()
    }

    pub fn edge(&self, e: EdgeId) -> &EdgeRecord<Weight> {
        &self.edges[e.0]
    }

    /// Edges incident to `v` in the requested direction, paired with the
    /// endpoint on the far side. With `Both`, a self-loop is listed once.
    pub fn incident(
        &self,
        v: NodeId,
        direction: Direction,
    ) -> Box<dyn Iterator<Item = (NodeId, EdgeId)> + '_> {
        if v.0 >= self.nodes.len() {
            return Box::new(std::iter::empty());
        }

        let out = self.out_adj[v.0]
            .iter()
            .map(move |&eid| (self.edges[eid.0].to, eid));
        let inc = self.in_adj[v.0]
            .iter()
            .map(move |&eid| (self.edges[eid.0].from, eid));

        match direction {
            Direction::Outgoing => Box::new(out),
            Direction::Incoming => Box::new(inc),
            Direction::Both => Box::new(
                out.chain(inc.filter(move |&(_, eid)| !self.edges[eid.0].is_loop())),
            ),
        }
    }
}
