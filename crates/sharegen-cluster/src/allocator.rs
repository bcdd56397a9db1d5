//! Page allocation for cluster nodes.
//!
//! A new node must own pages that none of its ancestors can see. With
//! several candidate parents, the allocator tries parent combinations from
//! the largest down to pairs and takes the first one whose coverage leaves
//! at least `target` pages of the universe free. If none does, it settles
//! for the combination that left the most pages free and hands out all of
//! them, so the node ends up smaller than requested. That shortfall is not
//! an error; callers can detect it with [`Allocation::is_under_fulfilled`].

use itertools::Itertools;
use rand::Rng;
use sharegen_core::{NodeId, PageSet, PageUniverse};
use smallvec::SmallVec;

use crate::cluster::ClusterNode;

/// Parent ids of a cluster node.
pub type ParentIds = SmallVec<[NodeId; 4]>;

/// Pages and ancestry chosen for a node that has not been assigned an id yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allocation {
    /// Pages the node will own.
    pub pages: PageSet,
    /// Coverage of the chosen parents; disjoint from `pages`.
    pub ancestor_pages: PageSet,
    /// The chosen parents.
    pub parent_ids: ParentIds,
    /// Number of pages that were asked for.
    pub requested: usize,
}

impl Allocation {
    /// Returns `true` if fewer pages were allocated than requested.
    pub fn is_under_fulfilled(&self) -> bool {
        self.pages.len() < self.requested
    }
}

/// Chooses page sets for new nodes within a [`PageUniverse`].
#[derive(Clone, Copy, Debug)]
pub struct NodeAllocator {
    universe: PageUniverse,
}

struct Fallback {
    available: PageSet,
    coverage: PageSet,
    parent_ids: ParentIds,
}

impl NodeAllocator {
    /// Create an allocator over `universe`.
    pub fn new(universe: PageUniverse) -> Self {
        Self { universe }
    }

    /// Allocate `target` pages for a node whose candidate parents are
    /// `parents`.
    ///
    /// Without parents the pages are drawn from the whole universe. With
    /// parents, combinations of at least two are tried, largest first and
    /// in lexicographic order within a size; a single candidate parent is
    /// never used on its own, so with exactly one candidate the node gets
    /// no parents and no pages.
    pub fn allocate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        parents: &[&ClusterNode],
        target: usize,
    ) -> Allocation {
        if parents.is_empty() {
            let pages = self.universe.sample(rng, target);
            if pages.len() < target {
                tracing::debug!(
                    requested = target,
                    universe = self.universe.page_count(),
                    "root allocation clamped to universe size"
                );
            }
            return Allocation {
                pages,
                ancestor_pages: PageSet::empty(),
                parent_ids: ParentIds::new(),
                requested: target,
            };
        }

        let mut best: Option<Fallback> = None;
        for size in (2..=parents.len()).rev() {
            for combo in (0..parents.len()).combinations(size) {
                let mut coverage = PageSet::empty();
                for &i in &combo {
                    coverage.union_with(&parents[i].pages);
                    coverage.union_with(&parents[i].ancestor_pages);
                }
                let available = self.universe.available(&coverage);
                let parent_ids: ParentIds = combo.iter().map(|&i| parents[i].id).collect();

                if available.len() >= target {
                    return Allocation {
                        pages: PageUniverse::sample_from(rng, &available.to_vec(), target),
                        ancestor_pages: coverage,
                        parent_ids,
                        requested: target,
                    };
                }

                if best
                    .as_ref()
                    .is_none_or(|b| available.len() > b.available.len())
                {
                    best = Some(Fallback {
                        available,
                        coverage,
                        parent_ids,
                    });
                }
            }
        }

        match best {
            Some(fallback) => {
                tracing::debug!(
                    requested = target,
                    allocated = fallback.available.len(),
                    parents = ?fallback.parent_ids,
                    "node allocation under-fulfilled"
                );
                Allocation {
                    pages: fallback.available,
                    ancestor_pages: fallback.coverage,
                    parent_ids: fallback.parent_ids,
                    requested: target,
                }
            }
            None => {
                tracing::debug!(
                    requested = target,
                    candidates = parents.len(),
                    "no parent combination to allocate against"
                );
                Allocation {
                    pages: PageSet::empty(),
                    ancestor_pages: PageSet::empty(),
                    parent_ids: ParentIds::new(),
                    requested: target,
                }
            }
        }
    }
}
