//! The finite page id space `[0, P)`.

use rand::seq::index;
use rand::Rng;

use crate::id::PageId;
use crate::page::PageSet;

/// The universe every page of a fixture is drawn from.
///
/// A universe of size `P` contains exactly the pages `PageId(0)` through
/// `PageId(P - 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageUniverse {
    page_count: u32,
}

impl PageUniverse {
    /// Create a universe of `page_count` pages.
    pub fn new(page_count: u32) -> Self {
        Self { page_count }
    }

    /// Number of pages in the universe.
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Every page of the universe.
    pub fn all(&self) -> PageSet {
        PageSet::full(self.page_count)
    }

    /// Pages of the universe not in `coverage`.
    pub fn available(&self, coverage: &PageSet) -> PageSet {
        let mut free = self.all();
        free.difference_with(coverage);
        free
    }

    /// Draw `amount` distinct pages uniformly from the whole universe.
    ///
    /// `amount` is clamped to the universe size.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, amount: usize) -> PageSet {
        let length = self.page_count as usize;
        index::sample(rng, length, amount.min(length))
            .into_iter()
            .map(|i| PageId(i as u32))
            .collect()
    }

    /// Draw `amount` distinct pages uniformly from `candidates`.
    ///
    /// `amount` is clamped to `candidates.len()`.
    pub fn sample_from<R: Rng + ?Sized>(
        rng: &mut R,
        candidates: &[PageId],
        amount: usize,
    ) -> PageSet {
        index::sample(rng, candidates.len(), amount.min(candidates.len()))
            .into_iter()
            .map(|i| candidates[i])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn available_is_complement() {
        let universe = PageUniverse::new(6);
        let coverage: PageSet = [PageId(1), PageId(4)].into_iter().collect();
        assert_eq!(
            universe.available(&coverage).to_vec(),
            vec![PageId(0), PageId(2), PageId(3), PageId(5)]
        );
    }

    #[test]
    fn available_ignores_pages_outside_universe() {
        let universe = PageUniverse::new(3);
        let coverage: PageSet = [PageId(0), PageId(200)].into_iter().collect();
        let free = universe.available(&coverage);
        assert_eq!(free.to_vec(), vec![PageId(1), PageId(2)]);
        assert!(free.is_subset(&universe.all()));
    }

    #[test]
    fn sample_whole_universe() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let universe = PageUniverse::new(5);
        assert_eq!(universe.sample(&mut rng, 5), universe.all());
    }

    #[test]
    fn sample_clamps_to_universe() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let universe = PageUniverse::new(4);
        assert_eq!(universe.sample(&mut rng, 10).len(), 4);
    }

    #[test]
    fn sample_from_stays_within_candidates() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let candidates = [PageId(2), PageId(7), PageId(11)];
        for amount in 0..=4 {
            let picked = PageUniverse::sample_from(&mut rng, &candidates, amount);
            assert_eq!(picked.len(), amount.min(3));
            assert!(picked.iter().all(|p| candidates.contains(&p)));
        }
    }

    #[test]
    fn empty_universe_samples_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let universe = PageUniverse::new(0);
        assert!(universe.sample(&mut rng, 3).is_empty());
        assert!(universe.all().is_empty());
    }
}
