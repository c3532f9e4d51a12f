//! Read-only graph view consumed by every algorithm.

use crate::core::{Direction, EdgeId, NodeId, Weight};
use std::{fmt::Debug, hash::Hash};

/// Minimal read-only graph trait. Algorithms take `&impl GraphBase` and never
/// mutate; node and edge ids are dense, so `order()`/`size()` bound them.
pub trait GraphBase {
    type Key: Debug + Clone + Eq + Hash;
    type Weight: Weight;

    fn is_directed(&self) -> bool;

    fn order(&self) -> usize;
    fn size(&self) -> usize;

    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;
    fn node_key(&self, id: NodeId) -> &Self::Key;

    /// Canonical edges: each undirected edge appears once.
    fn edge_ids(&self) -> Box<dyn Iterator<Item = EdgeId> + '_>;
    fn endpoints(&self, e: EdgeId) -> (NodeId, NodeId);
    fn weight_of(&self, e: EdgeId) -> Self::Weight;

    /// One-hop adjacency of `v` as (neighbor, edge) pairs. Undirected graphs
    /// treat every direction as `Both`.
    fn adjacent(
        &self,
        v: NodeId,
        direction: Direction,
    ) -> Box<dyn Iterator<Item = (NodeId, EdgeId)> + '_>;

    fn successors(&self, v: NodeId) -> Box<dyn Iterator<Item = (NodeId, EdgeId)> + '_> {
        self.adjacent(v, Direction::Outgoing)
    }

    /// Neighbors ignoring direction.
    fn neighborhood(&self, v: NodeId) -> Box<dyn Iterator<Item = (NodeId, EdgeId)> + '_> {
        self.adjacent(v, Direction::Both)
    }

    /// Number of incident edges ignoring direction; a self-loop counts once.
    fn degree(&self, v: NodeId) -> usize {
        self.neighborhood(v).count()
    }
}
