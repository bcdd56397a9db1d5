//! Cluster tree records.

use sharegen_core::{NodeId, PageSet};

use crate::allocator::ParentIds;
use crate::arena::NodeArena;

/// A node of a cluster tree.
///
/// Owns `pages`, which never intersect `ancestor_pages`: the union of the
/// pages visible through its chosen parents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterNode {
    /// Unique id, assigned in creation order.
    pub id: NodeId,
    /// Pages owned by this node.
    pub pages: PageSet,
    /// Union of `pages ∪ ancestor_pages` over the chosen parents.
    pub ancestor_pages: PageSet,
    /// Parents, all from the immediately preceding layer.
    pub parent_ids: ParentIds,
    /// For a guest (leaf) node, its complete page set.
    pub guest_pages: Option<PageSet>,
}

impl ClusterNode {
    /// Returns `true` if this node stands for a guest.
    pub fn is_leaf(&self) -> bool {
        self.guest_pages.is_some()
    }

    /// Every page visible at this node: owned plus inherited.
    pub fn visible_pages(&self) -> PageSet {
        self.pages.union(&self.ancestor_pages)
    }
}

/// One layer of sibling nodes plus the sub-clusters below it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cluster {
    /// Nodes materialized at this layer, in creation order.
    pub nodes: Vec<NodeId>,
    /// Sub-clusters partitioning this cluster's guests.
    pub children: Vec<Cluster>,
    /// Largest guest page-set size anywhere below this cluster.
    pub capacity: usize,
}

impl Cluster {
    /// Returns `true` for a single-guest cluster.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of guests (leaf clusters) below this cluster.
    pub fn guest_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(Cluster::guest_count).sum()
        }
    }

    /// Number of layers from this cluster down to its deepest leaf.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Cluster::depth)
            .max()
            .unwrap_or(0)
    }
}

/// A complete cluster fixture: the node arena plus the root cluster.
#[derive(Clone, Debug)]
pub struct ClusterTree {
    /// Every node of the tree.
    pub arena: NodeArena,
    /// Root layer.
    pub root: Cluster,
}

impl ClusterTree {
    /// Largest guest page-set size in the tree.
    pub fn capacity(&self) -> usize {
        self.root.capacity
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&ClusterNode> {
        self.arena.get(id)
    }

    /// Guest (leaf) nodes in creation order.
    pub fn guests(&self) -> impl Iterator<Item = &ClusterNode> {
        self.arena.iter().filter(|node| node.is_leaf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(capacity: usize) -> Cluster {
        Cluster {
            nodes: vec![NodeId(0)],
            children: Vec::new(),
            capacity,
        }
    }

    #[test]
    fn guest_count_and_depth() {
        let root = Cluster {
            nodes: vec![NodeId(1), NodeId(2)],
            children: vec![
                leaf(3),
                Cluster {
                    nodes: vec![NodeId(3)],
                    children: vec![leaf(1), leaf(4)],
                    capacity: 4,
                },
            ],
            capacity: 4,
        };
        assert_eq!(root.guest_count(), 3);
        assert_eq!(root.depth(), 3);
        assert!(!root.is_leaf());
    }
}
