//! Layered multi-parent cluster trees.
//!
//! A cluster tree is a DAG of nodes layered by recursion depth. Each layer
//! materializes a fixed number of sibling nodes, then splits its guest
//! population evenly into sub-clusters whose nodes may name several nodes
//! of the layer directly above as parents:
//!
//! ```text
//! Cluster (layer 0)   nodes: [101, 102]
//! ├── Cluster (layer 1)   nodes: [103 ← {101,102}, 104 ← {101,102}]
//! │   ├── leaf cluster    node 105 ← {103,104}, guest_pages
//! │   └── leaf cluster    node 106 ← {103,104}, guest_pages
//! └── leaf cluster        node 107 ← {101,102}, guest_pages
//! ```
//!
//! Every node's own pages are disjoint from the pages of its whole
//! ancestry. The [`NodeAllocator`] guarantees this by searching parent
//! combinations for one that leaves enough of the universe uncovered.
//!
//! All nodes live in a [`NodeArena`]; clusters and parent lists refer to
//! them by [`NodeId`](sharegen_core::NodeId).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocator;
pub mod arena;
pub mod builder;
pub mod cluster;
pub mod config;
pub mod partition;
#[cfg(feature = "serde")]
mod record;

pub use allocator::{Allocation, NodeAllocator, ParentIds};
pub use arena::NodeArena;
pub use builder::{generate_cluster_tree, ClusterTreeBuilder};
pub use cluster::{Cluster, ClusterNode, ClusterTree};
pub use config::ClusterConfig;
pub use partition::partition_evenly;
