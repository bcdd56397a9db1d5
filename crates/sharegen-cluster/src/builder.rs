//! Recursive layer-by-layer construction of cluster trees.

use rand::Rng;
use sharegen_core::{ConfigError, NodeId, NodeIdAllocator, PageUniverse};

use crate::allocator::{Allocation, NodeAllocator};
use crate::arena::NodeArena;
use crate::cluster::{Cluster, ClusterNode, ClusterTree};
use crate::config::{validate_cluster_degree, ClusterConfig};
use crate::partition::partition_evenly;

/// Builds the clusters of one generation session into a shared
/// [`NodeArena`].
///
/// Each call to [`build_cluster`](Self::build_cluster) anchors the nodes it
/// creates only to the `parents` it is given. A recursive call receives the
/// enclosing layer's freshly created nodes as its parents, so `parent_ids`
/// never skip a layer; deeper ancestry reaches a node only through
/// `ancestor_pages`.
pub struct ClusterTreeBuilder<'r, R: ?Sized> {
    rng: &'r mut R,
    allocator: NodeAllocator,
    arena: NodeArena,
    max_node_page_count: u32,
}

impl<'r, R: Rng + ?Sized> ClusterTreeBuilder<'r, R> {
    /// Create a builder whose nodes draw their page targets uniformly from
    /// `[0, max_node_page_count]` within `universe`, numbered from `ids`.
    pub fn new(
        rng: &'r mut R,
        universe: PageUniverse,
        max_node_page_count: u32,
        ids: NodeIdAllocator,
    ) -> Self {
        Self {
            rng,
            allocator: NodeAllocator::new(universe),
            arena: NodeArena::new(ids),
            max_node_page_count,
        }
    }

    /// Build a cluster of `guest_count` guests below `parents`.
    ///
    /// A single guest becomes one leaf node carrying its `guest_pages`.
    /// Otherwise `cluster_node_count` nodes are allocated against
    /// `parents` and the guests are split evenly into
    /// `min(guest_count, max_cluster_degree)` sub-clusters built below
    /// those nodes.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoGuests`] if `guest_count` is zero, the degree
    /// errors of [`ClusterConfig::validate`], or
    /// [`ConfigError::UnknownParent`] if a parent id is not in the arena.
    /// Nothing is allocated in either case. Recursive calls never fail once
    /// the outermost call is accepted.
    pub fn build_cluster(
        &mut self,
        guest_count: u32,
        cluster_node_count: u32,
        max_cluster_degree: u32,
        parents: &[NodeId],
    ) -> Result<Cluster, ConfigError> {
        if guest_count == 0 {
            return Err(ConfigError::NoGuests);
        }
        validate_cluster_degree(guest_count, max_cluster_degree)?;
        if let Some(&id) = parents.iter().find(|id| !self.arena.contains(**id)) {
            return Err(ConfigError::UnknownParent { id });
        }

        if guest_count == 1 {
            let allocation = self.allocate(parents);
            let guest_pages = allocation.pages.union(&allocation.ancestor_pages);
            let capacity = guest_pages.len();
            let id = self.arena.insert(allocation, Some(guest_pages));
            return Ok(Cluster {
                nodes: vec![id],
                children: Vec::new(),
                capacity,
            });
        }

        let allocations: Vec<Allocation> = (0..cluster_node_count)
            .map(|_| self.allocate(parents))
            .collect();
        let nodes: Vec<NodeId> = allocations
            .into_iter()
            .map(|allocation| self.arena.insert(allocation, None))
            .collect();

        let fan_out = guest_count.min(max_cluster_degree);
        let buckets = partition_evenly(guest_count, fan_out);
        tracing::trace!(
            guest_count,
            nodes = nodes.len(),
            ?buckets,
            "materialized cluster layer"
        );

        let mut children = Vec::with_capacity(buckets.len());
        for bucket in buckets {
            children.push(self.build_cluster(
                bucket,
                bucket.min(cluster_node_count),
                bucket.min(max_cluster_degree),
                &nodes,
            )?);
        }
        let capacity = children.iter().map(|c| c.capacity).max().unwrap_or(0);

        Ok(Cluster {
            nodes,
            children,
            capacity,
        })
    }

    /// Nodes created so far.
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// Finish the session, pairing the arena with its root cluster.
    pub fn finish(self, root: Cluster) -> ClusterTree {
        ClusterTree {
            arena: self.arena,
            root,
        }
    }

    // `parents` are checked against the arena by `build_cluster`.
    fn allocate(&mut self, parents: &[NodeId]) -> Allocation {
        let target = self.rng.random_range(0..=self.max_node_page_count) as usize;
        let parents: Vec<&ClusterNode> = parents
            .iter()
            .filter_map(|id| self.arena.get(*id))
            .collect();
        self.allocator.allocate(&mut *self.rng, &parents, target)
    }
}

/// Generate a complete cluster fixture.
///
/// # Errors
///
/// Any error of [`ClusterConfig::validate`]; nothing is drawn from `rng` in
/// that case.
pub fn generate_cluster_tree<R: Rng + ?Sized>(
    config: &ClusterConfig,
    rng: &mut R,
) -> Result<ClusterTree, ConfigError> {
    config.validate()?;

    let mut builder = ClusterTreeBuilder::new(
        rng,
        PageUniverse::new(config.instance_page_count),
        config.max_node_page_count,
        NodeIdAllocator::starting_at(config.first_node_id),
    );
    let root = builder.build_cluster(
        config.guest_count,
        config.cluster_node_count,
        config.max_cluster_degree,
        &[],
    )?;
    let tree = builder.finish(root);

    tracing::debug!(
        guests = config.guest_count,
        nodes = tree.arena.len(),
        layers = tree.root.depth(),
        capacity = tree.capacity(),
        "generated cluster fixture"
    );

    Ok(tree)
}
