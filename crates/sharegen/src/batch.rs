//! Batches of fixtures drawn from one seeded session.
//!
//! A fixture file is a JSON array of independent instances, each carrying
//! its own `capacity`. All instances of a batch share a single
//! [`ChaCha8Rng`], so instance `n` depends on every draw made for
//! instances `0..n`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use sharegen_cluster::{generate_cluster_tree, ClusterConfig, ClusterTree};
use sharegen_core::ConfigError;
use sharegen_tree::{generate_tree, TreeConfig, TreeInstance};

use crate::general::{generate_general, GeneralConfig, GeneralInstance};

/// Which generator to run, with its parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixtureKind {
    /// Flat guest page sets.
    General(GeneralConfig),
    /// Single-parent shared-page tree.
    Tree(TreeConfig),
    /// Layered multi-parent cluster tree.
    Cluster(ClusterConfig),
}

impl FixtureKind {
    /// Validate the wrapped configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::General(config) => config.validate(),
            Self::Tree(config) => config.validate(),
            Self::Cluster(config) => config.validate(),
        }
    }

    /// Draw one fixture of this kind from `rng`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Fixture, ConfigError> {
        Ok(match self {
            Self::General(config) => Fixture::General(generate_general(config, rng)?),
            Self::Tree(config) => Fixture::Tree(generate_tree(config, rng)?),
            Self::Cluster(config) => Fixture::Cluster(generate_cluster_tree(config, rng)?),
        })
    }
}

/// One generated instance.
///
/// Serializes as the bare instance record, with no variant tag.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Fixture {
    /// A flat instance.
    General(GeneralInstance),
    /// A tree instance.
    Tree(TreeInstance),
    /// A cluster instance.
    Cluster(ClusterTree),
}

impl Fixture {
    /// Largest guest page-set size in this instance.
    pub fn capacity(&self) -> usize {
        match self {
            Self::General(instance) => instance.capacity,
            Self::Tree(instance) => instance.capacity,
            Self::Cluster(tree) => tree.capacity(),
        }
    }
}

/// Generate `count` fixtures of `kind` from `ChaCha8Rng::seed_from_u64(seed)`.
///
/// The configuration is validated once, before any draw; an invalid one
/// yields no fixtures even when `count` is zero.
pub fn generate_batch(
    kind: &FixtureKind,
    seed: u64,
    count: usize,
) -> Result<Vec<Fixture>, ConfigError> {
    kind.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let fixtures = (0..count)
        .map(|_| kind.generate(&mut rng))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(seed, count, "generated fixture batch");
    Ok(fixtures)
}
