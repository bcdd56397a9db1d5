//! Strongly-typed identifiers and the per-session [`NodeIdAllocator`].

use std::fmt;

/// Identifies a page within a [`PageUniverse`](crate::PageUniverse).
///
/// `PageId(n)` is the n-th page of the universe `[0, P)`. Pages have no
/// identity beyond their index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct PageId(pub u32);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PageId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a guest (a simulated memory consumer).
///
/// Guests are numbered `0..guest_count` in generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct GuestId(pub u32);

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for GuestId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a node of a cluster tree.
///
/// Assigned by a [`NodeIdAllocator`] in creation order, so within one
/// generation session a larger id always belongs to a later node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Monotonic counter handing out [`NodeId`]s for one generation session.
///
/// Owned by whoever drives a build; two sessions never share a counter, so
/// generating fixtures in sequence or in parallel cannot perturb each
/// other's ids.
#[derive(Clone, Debug)]
pub struct NodeIdAllocator {
    next: u64,
}

impl NodeIdAllocator {
    /// First id handed out by [`NodeIdAllocator::default`].
    pub const DEFAULT_FIRST_ID: u64 = 101;

    /// Create an allocator whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Allocate a fresh id. Each call returns a value one greater than the
    /// previous call.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> NodeId {
        NodeId(self.next)
    }
}

impl Default for NodeIdAllocator {
    fn default() -> Self {
        Self::starting_at(Self::DEFAULT_FIRST_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_is_monotonic() {
        let mut ids = NodeIdAllocator::starting_at(7);
        assert_eq!(ids.next_id(), NodeId(7));
        assert_eq!(ids.next_id(), NodeId(8));
        assert_eq!(ids.peek(), NodeId(9));
    }

    #[test]
    fn default_starts_at_101() {
        let mut ids = NodeIdAllocator::default();
        assert_eq!(ids.next_id(), NodeId(101));
    }

    #[test]
    fn independent_allocators_do_not_interfere() {
        let mut a = NodeIdAllocator::default();
        let mut b = NodeIdAllocator::default();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), NodeId(101));
    }
}
