//! Node interner mapping user-provided keys to dense `NodeId`s.

use crate::core::NodeId;
use indexmap::{Equivalent, IndexSet};
use std::hash::Hash;

/// `IndexSet`-based interner: a key's position is its `NodeId`, so ids follow
/// insertion order and never move (nodes are never removed).
#[derive(Clone, Debug)]
pub struct NodeInterner<K>
where
    K: Eq + Hash,
{
    keys: IndexSet<K>,
}

impl<K> Default for NodeInterner<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> NodeInterner<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            keys: IndexSet::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: IndexSet::with_capacity(capacity),
        }
    }

    /// Intern a new key. A key that is already present is handed back
    /// unchanged and the interner is left untouched.
    pub fn insert(&mut self, key: K) -> Result<NodeId, K> {
        if self.keys.contains(&key) {
            return Err(key);
        }
        let (index, _) = self.keys.insert_full(key);
        Ok(NodeId(index))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn get(&self, id: NodeId) -> &K {
        &self.keys[id.0]
    }

    pub fn get_id<Q>(&self, key: &Q) -> Option<NodeId>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.keys.get_index_of(key).map(NodeId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &K)> {
        self.keys.iter().enumerate().map(|(i, k)| (NodeId(i), k))
    }
}
