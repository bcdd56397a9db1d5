//! Test utilities for sharegen development.
//!
//! Provides checkers for every structural invariant of the generated
//! fixtures (see [`checks`]) and a seeded RNG constructor shared by the
//! integration tests.
//!
//! Checkers return `Err(description)` on the first violation so they can be
//! used both with `assert!` and inside `proptest!` blocks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod checks;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub use checks::*;

/// The RNG every test session uses.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
