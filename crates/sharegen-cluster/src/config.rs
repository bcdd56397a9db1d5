//! Cluster fixture configuration.

use sharegen_core::{ConfigError, NodeIdAllocator};

/// Parameters of a cluster fixture session.
///
/// Defaults reproduce the reference fixtures: 40 guests over a 40-page
/// universe, two nodes per layer, clusters splitting up to nine ways and
/// nodes of at most five pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterConfig {
    /// Size `P` of the page universe.
    pub instance_page_count: u32,
    /// Number of guests `G` to place.
    pub guest_count: u32,
    /// Nodes materialized per layer (`k`).
    pub cluster_node_count: u32,
    /// Largest number of sub-clusters a cluster splits into.
    pub max_cluster_degree: u32,
    /// Upper bound of the uniformly drawn per-node page target.
    pub max_node_page_count: u32,
    /// Id given to the first node of the session.
    pub first_node_id: u64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            instance_page_count: 40,
            guest_count: 40,
            cluster_node_count: 2,
            max_cluster_degree: 9,
            max_node_page_count: 5,
            first_node_id: NodeIdAllocator::DEFAULT_FIRST_ID,
        }
    }
}

impl ClusterConfig {
    /// Set the universe size.
    pub fn instance_page_count(mut self, count: u32) -> Self {
        self.instance_page_count = count;
        self
    }

    /// Set the guest count.
    pub fn guest_count(mut self, count: u32) -> Self {
        self.guest_count = count;
        self
    }

    /// Set the number of nodes per layer.
    pub fn cluster_node_count(mut self, count: u32) -> Self {
        self.cluster_node_count = count;
        self
    }

    /// Set the maximum cluster fan-out.
    pub fn max_cluster_degree(mut self, degree: u32) -> Self {
        self.max_cluster_degree = degree;
        self
    }

    /// Set the per-node page target bound.
    pub fn max_node_page_count(mut self, count: u32) -> Self {
        self.max_node_page_count = count;
        self
    }

    /// Set the first node id.
    pub fn first_node_id(mut self, id: u64) -> Self {
        self.first_node_id = id;
        self
    }

    /// Check the structural preconditions of a cluster build.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoGuests`] if `guest_count` is zero
    /// - [`ConfigError::ZeroDegree`] if `max_cluster_degree` is zero
    /// - [`ConfigError::FanOutTooSmall`] if several guests must be split with
    ///   a `max_cluster_degree` of 1
    /// - [`ConfigError::NodePagesExceedUniverse`] if a root node could be
    ///   asked for more pages than the universe has
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.guest_count == 0 {
            return Err(ConfigError::NoGuests);
        }
        validate_cluster_degree(self.guest_count, self.max_cluster_degree)?;
        if self.max_node_page_count > self.instance_page_count {
            return Err(ConfigError::NodePagesExceedUniverse {
                max_node_page_count: self.max_node_page_count,
                instance_page_count: self.instance_page_count,
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_cluster_degree(guests: u32, degree: u32) -> Result<(), ConfigError> {
    if degree == 0 {
        return Err(ConfigError::ZeroDegree {
            param: "max_cluster_degree",
        });
    }
    if guests > 1 && degree < 2 {
        return Err(ConfigError::FanOutTooSmall {
            param: "max_cluster_degree",
        });
    }
    Ok(())
}
