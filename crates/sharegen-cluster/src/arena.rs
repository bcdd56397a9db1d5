//! Node arena for cluster trees.
//!
//! [`NodeArena`] owns every [`ClusterNode`] of one generation session and
//! hands out their ids. Clusters and parent lists hold plain [`NodeId`]s
//! into it, so the multi-parent DAG needs no shared ownership.

use indexmap::IndexMap;
use sharegen_core::{NodeId, NodeIdAllocator, PageSet};

use crate::allocator::Allocation;
use crate::cluster::ClusterNode;

/// Indexed store of cluster nodes, keyed by id.
///
/// Ids are assigned on insertion from the arena's own
/// [`NodeIdAllocator`], so insertion order and id order agree and a
/// node's parents always precede it.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: IndexMap<NodeId, ClusterNode>,
    ids: NodeIdAllocator,
}

impl NodeArena {
    /// Create an empty arena whose first node gets `ids.peek()`.
    pub fn new(ids: NodeIdAllocator) -> Self {
        Self {
            nodes: IndexMap::new(),
            ids,
        }
    }

    /// Store a node built from `allocation` and return its fresh id.
    ///
    /// `guest_pages` is `Some` for guest (leaf) nodes.
    pub fn insert(&mut self, allocation: Allocation, guest_pages: Option<PageSet>) -> NodeId {
        let id = self.ids.next_id();
        self.nodes.insert(
            id,
            ClusterNode {
                id,
                pages: allocation.pages,
                ancestor_pages: allocation.ancestor_pages,
                parent_ids: allocation.parent_ids,
                guest_pages,
            },
        );
        id
    }

    /// Look up a node.
    pub fn get(&self, id: NodeId) -> Option<&ClusterNode> {
        self.nodes.get(&id)
    }

    /// Check whether a node id belongs to this arena.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of stored nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node has been stored.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &ClusterNode> {
        self.nodes.values()
    }
}
