//! Print one fixture of each kind with the reference generator defaults.
//!
//! Seed 10, 40 pages, 40 guests; trees fan out 2..=4, clusters use two
//! nodes per layer, at most five pages per node, and degree 9.
//!
//! Set `RUST_LOG=sharegen=debug` (or `trace`) to watch the builders.

use sharegen::json::to_json_pretty;
use sharegen::prelude::*;
use tracing_subscriber::EnvFilter;

const SEED: u64 = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let kinds = [
        ("general", FixtureKind::General(GeneralConfig::default())),
        ("tree", FixtureKind::Tree(TreeConfig::default())),
        ("cluster", FixtureKind::Cluster(ClusterConfig::default())),
    ];

    for (name, kind) in &kinds {
        let fixtures = generate_batch(kind, SEED, 1)?;
        let capacity = fixtures.first().map(Fixture::capacity).unwrap_or(0);
        println!("=== {name} (capacity {capacity}) ===");
        println!("{}", to_json_pretty(&fixtures)?);
    }
    Ok(())
}
