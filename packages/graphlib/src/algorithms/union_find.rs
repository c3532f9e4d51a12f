//! Disjoint Set Union (DSU) / Union-Find over dense node indices.

use std::cmp::Ordering;

use crate::NodeId;

/// Union-Find with path compression and union by rank.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn num_components(&self) -> usize {
        self.components
    }

    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression: point everything on the path at the root
        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets holding `i` and `j`. Returns false if they were already
    /// one set.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        // Union by rank: attach smaller tree to larger tree
        match self.rank[root_i].cmp(&self.rank[root_j]) {
            Ordering::Less => self.parent[root_i] = root_j,
            Ordering::Greater => self.parent[root_j] = root_i,
            Ordering::Equal => {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
        self.components -= 1;
        true
    }

    pub fn connected(&mut self, i: usize, j: usize) -> bool {
        self.find(i) == self.find(j)
    }

    /// `union` on node ids.
    pub fn union_nodes(&mut self, a: NodeId, b: NodeId) -> bool {
        self.union(a.0, b.0)
    }
}
