//! Benchmark profiles for the sharegen builders.
//!
//! - [`reference_tree`] / [`reference_cluster`]: the 40-page, 40-guest
//!   defaults
//! - [`stress_tree`] / [`stress_cluster`]: 1000 pages, 500 guests
//! - [`bench_rng`]: deterministic RNG for a benchmark iteration

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sharegen_cluster::ClusterConfig;
use sharegen_tree::TreeConfig;

/// Tree parameters of the reference generator.
pub fn reference_tree() -> TreeConfig {
    TreeConfig::default()
}

/// Cluster parameters of the reference generator.
pub fn reference_cluster() -> ClusterConfig {
    ClusterConfig::default()
}

/// A large tree: 1000 pages shared by 500 guests.
pub fn stress_tree() -> TreeConfig {
    TreeConfig::default()
        .instance_page_count(1000)
        .guest_count(500)
}

/// A large cluster tree: 1000 pages, 500 guests, 3 nodes per layer.
///
/// Three candidate parents keep the combination search small; the cost is
/// dominated by page sampling and set algebra.
pub fn stress_cluster() -> ClusterConfig {
    ClusterConfig::default()
        .instance_page_count(1000)
        .guest_count(500)
        .cluster_node_count(3)
        .max_node_page_count(20)
}

/// Seeded RNG for one benchmark iteration.
pub fn bench_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
