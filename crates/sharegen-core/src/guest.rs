//! Per-guest page maps and the flat guest-page generator.

use indexmap::IndexMap;
use rand::seq::index;
use rand::Rng;

use crate::id::{GuestId, PageId};
use crate::page::PageSet;

/// A mapping from guest to one of its page sets.
///
/// Iteration follows insertion order, so a build that walks a `GuestPages`
/// consumes randomness in the same order on every run.
pub type GuestPages = IndexMap<GuestId, PageSet>;

/// Assign every page of `[0, page_count)` to a random nonempty subset of
/// guests.
///
/// Pages are visited in ascending order. For each page a subset size `n` is
/// drawn uniformly from `[1, guest_count]`, then `n` distinct guests are
/// drawn uniformly. Guests that end up with no page are still present in
/// the result with an empty set. Returns an empty map when `guest_count` is
/// zero.
pub fn random_guest_pages<R: Rng + ?Sized>(
    rng: &mut R,
    page_count: u32,
    guest_count: u32,
) -> GuestPages {
    let mut guests: GuestPages = (0..guest_count)
        .map(|g| (GuestId(g), PageSet::empty()))
        .collect();
    if guest_count == 0 {
        return guests;
    }

    let length = guest_count as usize;
    for page in (0..page_count).map(PageId) {
        let sharers = rng.random_range(1..=length);
        for g in index::sample(rng, length, sharers) {
            guests[g].insert(page);
        }
    }
    guests
}

/// Largest page-set cardinality among `guests` (0 when empty).
pub fn max_page_count(guests: &GuestPages) -> usize {
    guests.values().map(PageSet::len).max().unwrap_or(0)
}
