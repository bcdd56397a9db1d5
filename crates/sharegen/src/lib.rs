//! sharegen: randomized page-sharing topology fixtures.
//!
//! Generates structurally valid descriptions of guests sharing pages, for
//! testing memory overcommit and deduplication accounting. Three fixture
//! kinds are available:
//!
//! | Kind | Sub-crate | Shape |
//! |------|-----------|-------|
//! | general | this crate ([`general`]) | flat `{guests, capacity}` |
//! | tree | `sharegen-tree` | single-parent tree of lifted shared pages |
//! | cluster | `sharegen-cluster` | layered multi-parent DAG of disjoint nodes |
//!
//! # Quick start
//!
//! ```rust
//! use sharegen::prelude::*;
//!
//! let kind = FixtureKind::Tree(TreeConfig::default().guest_count(8));
//! let fixtures = generate_batch(&kind, 10, 3).unwrap();
//! assert_eq!(fixtures.len(), 3);
//! let json = sharegen::json::to_json_pretty(&fixtures).unwrap();
//! assert!(json.contains("\"capacity\""));
//! ```
//!
//! Every generator consumes a caller-supplied RNG; the same seed and
//! parameters always produce the same fixtures.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod general;
pub mod json;

/// Ids, page sets, universes and errors (`sharegen-core`).
pub use sharegen_core as types;

/// Single-parent shared-page trees (`sharegen-tree`).
pub use sharegen_tree as tree;

/// Layered multi-parent cluster trees (`sharegen-cluster`).
pub use sharegen_cluster as cluster;

/// Common imports for typical sharegen usage.
pub mod prelude {
    // Core types
    pub use sharegen_core::{
        ConfigError, ErrorKind, GuestId, NodeId, PageId, PageSet, PageUniverse,
    };

    // Tree fixtures
    pub use sharegen_tree::{generate_tree, TreeConfig, TreeInstance, TreeNode};

    // Cluster fixtures
    pub use sharegen_cluster::{
        generate_cluster_tree, Cluster, ClusterConfig, ClusterNode, ClusterTree,
    };

    // Facade
    pub use crate::batch::{generate_batch, Fixture, FixtureKind};
    pub use crate::general::{generate_general, GeneralConfig, GeneralInstance};
}
