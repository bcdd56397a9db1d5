//! Tree fixture records.

use sharegen_core::PageSet;

/// A node of a shared-page tree.
///
/// Serializes (with the `serde` feature) to `{pages, children}` for internal
/// nodes and `{pages, guest_pages}` for leaves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum TreeNode {
    /// A node shared by every guest of its subtree.
    Internal {
        /// Pages owned by this node and visible to every guest below it.
        pages: PageSet,
        /// Subtrees, in the order their groups were formed.
        children: Vec<TreeNode>,
    },
    /// A single guest.
    Leaf {
        /// Pages owned by this guest alone.
        pages: PageSet,
        /// The guest's complete page set: every page on its root path.
        guest_pages: PageSet,
    },
}

impl TreeNode {
    /// Pages owned by this node.
    pub fn pages(&self) -> &PageSet {
        match self {
            Self::Internal { pages, .. } | Self::Leaf { pages, .. } => pages,
        }
    }

    /// Child subtrees; empty for a leaf.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            Self::Internal { children, .. } => children,
            Self::Leaf { .. } => &[],
        }
    }

    /// The guest's page set if this is a leaf.
    pub fn guest_pages(&self) -> Option<&PageSet> {
        match self {
            Self::Leaf { guest_pages, .. } => Some(guest_pages),
            Self::Internal { .. } => None,
        }
    }

    /// Returns `true` for a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Number of leaves (guests) in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { children, .. } => children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Number of internal nodes in this subtree, including `self`.
    pub fn internal_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { children, .. } => {
                1 + children.iter().map(Self::internal_count).sum::<usize>()
            }
        }
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Self::depth)
            .max()
            .unwrap_or(0)
    }
}

/// A complete tree fixture: the root node plus the capacity every guest
/// must be provisioned for.
///
/// Serializes as the root node's fields with `capacity` appended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeInstance {
    /// Root of the tree.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub root: TreeNode,
    /// Largest per-guest page-set size.
    pub capacity: usize,
}
