//! Owned edge values handed back to callers.

use std::fmt::{Display, Formatter};

use crate::{EdgeId, GraphBase};

/// An edge as reported by queries and algorithm results: endpoint keys in
/// their stored orientation plus the weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<K, W> {
    source: K,
    destination: K,
    weight: W,
}

impl<K, W> Edge<K, W> {
    pub fn new(source: K, destination: K, weight: W) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    pub(crate) fn from_graph<G>(graph: &G, e: EdgeId) -> Self
    where
        G: GraphBase<Key = K, Weight = W> + ?Sized,
        K: Clone,
    {
        let (u, v) = graph.endpoints(e);
        Self::new(
            graph.node_key(u).clone(),
            graph.node_key(v).clone(),
            graph.weight_of(e),
        )
    }

    pub fn source(&self) -> &K {
        &self.source
    }

    pub fn destination(&self) -> &K {
        &self.destination
    }

    pub fn weight(&self) -> W
    where
        W: Copy,
    {
        self.weight
    }

    /// True if `key` is one of the two endpoints.
    pub fn touches(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        &self.source == key || &self.destination == key
    }
}

impl<K: Display, W: Display> Display for Edge<K, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.destination, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_as_tuple() {
        let e = Edge::new("A", "B", 3);
        assert_eq!(e.to_string(), "(A, B, 3)");
        assert_eq!(*e.source(), "A");
        assert_eq!(*e.destination(), "B");
        assert_eq!(e.weight(), 3);
        assert!(e.touches(&"B"));
        assert!(!e.touches(&"C"));
    }
}
